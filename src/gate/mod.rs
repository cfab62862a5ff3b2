pub(crate) mod passcode;
pub(crate) mod store;
