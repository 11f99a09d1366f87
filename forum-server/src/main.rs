use std::sync::Arc;

use anyhow::Result;

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

use application::auth_service::AuthService;
use application::topic_service::TopicService;
use data::repositories::postgres::topic_repository::PostgresTopicRepository;
use data::repositories::postgres::user_repository::PostgresUserRepository;
use infrastructure::database::{create_pool, run_migrations};
use infrastructure::jwt::JwtService;
use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use presentation::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let pool = create_pool(&settings.database_url).await?;
    run_migrations(&pool).await?;

    let jwt = Arc::new(JwtService::new(
        &settings.jwt_secret,
        settings.jwt_ttl_seconds,
    ));
    let auth_service = Arc::new(AuthService::new(
        PostgresUserRepository::new(pool.clone()),
        JwtService::new(&settings.jwt_secret, settings.jwt_ttl_seconds),
    ));
    let topic_service = Arc::new(TopicService::new(PostgresTopicRepository::new(pool)));

    let state = AppState::new(auth_service, topic_service, jwt);

    server::run_http(&settings, state).await
}
