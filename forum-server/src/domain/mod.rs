pub(crate) mod error;
pub(crate) mod topic;
pub(crate) mod user;
