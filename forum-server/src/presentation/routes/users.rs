use axum::Router;
use axum::middleware;
use axum::routing::{get, post};

use crate::presentation::AppState;
use crate::presentation::handlers::topics::create_topic;
use crate::presentation::handlers::users::me;
use crate::presentation::middleware::auth::jwt_auth_middleware;

pub(crate) fn router(state: AppState) -> Router<AppState> {
    // topic creation is keyed by the author id in the path; only the
    // profile endpoint requires a token
    let public = Router::new().route("/{id}/topics", post(create_topic));

    let protected = Router::new()
        .route("/me", get(me))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            jwt_auth_middleware,
        ));

    public.merge(protected)
}
