use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::data::topic_repository::{NewTopic, TopicRepository};
use crate::domain::error::DomainError;
use crate::domain::topic::Topic;

#[derive(Debug, Clone)]
pub(crate) struct PostgresTopicRepository {
    pool: PgPool,
}

impl PostgresTopicRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TopicRow {
    id: i64,
    title: String,
    content: String,
    tags: Vec<String>,
    author_id: i64,
    created_at: DateTime<Utc>,
}

#[async_trait]
impl TopicRepository for PostgresTopicRepository {
    async fn create_topic(&self, input: NewTopic) -> Result<Topic, DomainError> {
        let mut tx = self.pool.begin().await.map_err(map_topic_db_error)?;

        let row: TopicRow = sqlx::query_as(
            r#"
            INSERT INTO topics (title, content, tags, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, tags, author_id, created_at
            "#,
        )
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.tags)
        .bind(input.author_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_topic_db_error)?;

        let appended = sqlx::query(
            r#"
            UPDATE users
            SET posts = array_append(posts, $2)
            WHERE id = $1
            "#,
        )
        .bind(input.author_id)
        .bind(row.id)
        .execute(&mut *tx)
        .await
        .map_err(map_topic_db_error)?;

        if appended.rows_affected() != 1 {
            return Err(DomainError::NotFound("author".to_string()));
        }

        tx.commit().await.map_err(map_topic_db_error)?;

        map_row_to_topic(row)
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Topic>, DomainError> {
        let row: Option<TopicRow> = sqlx::query_as(
            r#"
            SELECT id, title, content, tags, author_id, created_at
            FROM topics
            WHERE title = $1
            "#,
        )
        .bind(title)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_topic_db_error)?;

        row.map(map_row_to_topic).transpose()
    }

    async fn delete_by_title(&self, title: &str) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM topics
            WHERE title = $1
            "#,
        )
        .bind(title)
        .execute(&self.pool)
        .await
        .map_err(map_topic_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn rename_topic(
        &self,
        title: &str,
        new_title: &str,
    ) -> Result<Option<Topic>, DomainError> {
        let row: Option<TopicRow> = sqlx::query_as(
            r#"
            UPDATE topics
            SET title = $2
            WHERE title = $1
            RETURNING id, title, content, tags, author_id, created_at
            "#,
        )
        .bind(title)
        .bind(new_title)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_topic_db_error)?;

        row.map(map_row_to_topic).transpose()
    }

    async fn list_topics(&self) -> Result<Vec<Topic>, DomainError> {
        let rows: Vec<TopicRow> = sqlx::query_as(
            r#"
            SELECT id, title, content, tags, author_id, created_at
            FROM topics
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_topic_db_error)?;

        rows.into_iter().map(map_row_to_topic).collect()
    }
}

fn map_row_to_topic(row: TopicRow) -> Result<Topic, DomainError> {
    Topic::new(
        row.id,
        row.title,
        row.content,
        row.tags,
        row.author_id,
        row.created_at,
    )
    .map_err(|err| DomainError::Unexpected(err.to_string()))
}

fn map_topic_db_error(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        // 23503: author_id references a missing user
        if db_err.code().as_deref() == Some("23503") {
            return DomainError::NotFound("author".to_string());
        }
        // 23505: unique title violated
        if db_err.code().as_deref() == Some("23505") {
            return DomainError::AlreadyExists("title".to_string());
        }
    }
    DomainError::Unexpected(err.to_string())
}
