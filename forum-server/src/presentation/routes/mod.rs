use axum::Router;

use super::AppState;

pub(crate) mod auth;
pub(crate) mod topics;
pub(crate) mod users;

pub(crate) fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/api/auth", auth::router())
        .nest("/api/topics", topics::router())
        .nest("/api/users", users::router(state))
}
