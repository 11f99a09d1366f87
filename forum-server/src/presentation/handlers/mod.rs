pub(crate) mod auth;
pub(crate) mod topics;
pub(crate) mod users;
