pub(crate) mod choreography;
pub(crate) mod layout;
pub(crate) mod model;
