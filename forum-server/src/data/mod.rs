pub(crate) mod repositories;
pub(crate) mod topic_repository;
pub(crate) mod user_repository;
