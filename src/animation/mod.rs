pub(crate) mod curve;
pub(crate) mod ease;
pub(crate) mod ops;
pub(crate) mod reveal;
pub(crate) mod trigger;
