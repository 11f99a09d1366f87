use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::topic::{CreateTopicRequest, RenameTopicRequest, Topic};
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;

/// Delete always answers with this string, whether or not a topic was
/// removed. Part of the published API contract.
pub(crate) const DELETE_CONFIRMATION: &str = "Topic successfully deleted";

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct CreateTopicDto {
    #[validate(length(min = 1, max = 255))]
    pub(crate) title: String,
    #[validate(length(min = 1))]
    pub(crate) content: String,
    #[serde(default)]
    pub(crate) tags: Vec<String>,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub(crate) struct TitleQuery {
    #[validate(length(min = 1, max = 255))]
    pub(crate) title: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct DeleteTopicDto {
    #[validate(length(min = 1, max = 255))]
    pub(crate) title: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct RenameTopicDto {
    #[validate(length(min = 1, max = 255))]
    pub(crate) title: String,
    #[validate(length(min = 1, max = 255))]
    pub(crate) new_title: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct TopicDto {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) tags: Vec<String>,
    pub(crate) author_id: i64,
    pub(crate) created_at: DateTime<Utc>,
}

impl From<Topic> for TopicDto {
    fn from(topic: Topic) -> Self {
        Self {
            id: topic.id,
            title: topic.title,
            content: topic.content,
            tags: topic.tags,
            author_id: topic.author_id,
            created_at: topic.created_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/topics",
    tag = "topics",
    responses(
        (status = 200, description = "All topics", body = [TopicDto]),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn list_topics(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<TopicDto>>)> {
    let topics = state.topic_service.list_topics().await?;

    Ok((
        StatusCode::OK,
        Json(topics.into_iter().map(TopicDto::from).collect()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/topics/by-title",
    tag = "topics",
    params(TitleQuery),
    responses(
        (status = 200, description = "Matching topic, or null when absent", body = Option<TopicDto>),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn find_topic_by_title(
    State(state): State<AppState>,
    Query(query): Query<TitleQuery>,
) -> AppResult<(StatusCode, Json<Option<TopicDto>>)> {
    query.validate()?;

    let topic = state.topic_service.find_by_title(&query.title).await?;

    Ok((StatusCode::OK, Json(topic.map(TopicDto::from))))
}

#[utoipa::path(
    post,
    path = "/api/users/{id}/topics",
    tag = "topics",
    params(
        ("id" = i64, Path, description = "Author user id")
    ),
    request_body = CreateTopicDto,
    responses(
        (status = 200, description = "Topic created", body = TopicDto),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Author not found"),
        (status = 409, description = "Title already taken"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn create_topic(
    State(state): State<AppState>,
    Path(author_id): Path<i64>,
    Json(dto): Json<CreateTopicDto>,
) -> AppResult<(StatusCode, Json<TopicDto>)> {
    dto.validate()?;
    let req = CreateTopicRequest {
        title: dto.title,
        content: dto.content,
        tags: dto.tags,
    };

    let result = state.topic_service.create_topic(author_id, req).await?;
    Ok((StatusCode::OK, Json(TopicDto::from(result))))
}

#[utoipa::path(
    delete,
    path = "/api/topics/by-title",
    tag = "topics",
    request_body = DeleteTopicDto,
    responses(
        (status = 200, description = "Confirmation string, returned whether or not a topic existed", body = String),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn delete_topic_by_title(
    State(state): State<AppState>,
    Json(dto): Json<DeleteTopicDto>,
) -> AppResult<(StatusCode, String)> {
    dto.validate()?;

    state.topic_service.delete_by_title(&dto.title).await?;

    Ok((StatusCode::OK, DELETE_CONFIRMATION.to_string()))
}

#[utoipa::path(
    put,
    path = "/api/topics/title",
    tag = "topics",
    request_body = RenameTopicDto,
    responses(
        (status = 200, description = "Updated topic, or null when the old title does not exist", body = Option<TopicDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "New title already taken"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn rename_topic(
    State(state): State<AppState>,
    Json(dto): Json<RenameTopicDto>,
) -> AppResult<(StatusCode, Json<Option<TopicDto>>)> {
    dto.validate()?;
    let req = RenameTopicRequest {
        title: dto.title,
        new_title: dto.new_title,
    };

    let result = state.topic_service.rename_topic(req).await?;
    Ok((StatusCode::OK, Json(result.map(TopicDto::from))))
}
