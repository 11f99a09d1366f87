pub(crate) mod auth_service;
pub(crate) mod topic_service;
