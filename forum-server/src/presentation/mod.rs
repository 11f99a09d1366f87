use std::sync::Arc;

use crate::application::auth_service::AuthService;
use crate::application::topic_service::TopicService;
use crate::data::repositories::postgres::topic_repository::PostgresTopicRepository;
use crate::data::repositories::postgres::user_repository::PostgresUserRepository;
use crate::infrastructure::jwt::JwtService;

pub(crate) mod app_error;
pub(crate) mod handlers;
pub(crate) mod middleware;
pub(crate) mod openapi;
pub(crate) mod routes;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) auth_service: Arc<AuthService<PostgresUserRepository>>,
    pub(crate) topic_service: Arc<TopicService<PostgresTopicRepository>>,
    pub(crate) jwt: Arc<JwtService>,
}

impl AppState {
    pub(crate) fn new(
        auth_service: Arc<AuthService<PostgresUserRepository>>,
        topic_service: Arc<TopicService<PostgresTopicRepository>>,
        jwt: Arc<JwtService>,
    ) -> Self {
        Self {
            auth_service,
            topic_service,
            jwt,
        }
    }
}
