use axum::Router;
use axum::routing::{get, put};

use crate::presentation::AppState;
use crate::presentation::handlers::topics::{
    delete_topic_by_title, find_topic_by_title, list_topics, rename_topic,
};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_topics))
        .route(
            "/by-title",
            get(find_topic_by_title).delete(delete_topic_by_title),
        )
        .route("/title", put(rename_topic))
}
