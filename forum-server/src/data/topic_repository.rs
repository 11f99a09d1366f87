use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::topic::Topic;

#[derive(Debug, Clone)]
pub(crate) struct NewTopic {
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) tags: Vec<String>,
    pub(crate) author_id: i64,
}

#[async_trait]
pub(crate) trait TopicRepository: Send + Sync {
    /// Inserts the topic and appends its id to the author's post list in a
    /// single transaction. Fails with `NotFound` when the author is missing.
    async fn create_topic(&self, input: NewTopic) -> Result<Topic, DomainError>;
    async fn find_by_title(&self, title: &str) -> Result<Option<Topic>, DomainError>;
    async fn delete_by_title(&self, title: &str) -> Result<bool, DomainError>;
    async fn rename_topic(
        &self,
        title: &str,
        new_title: &str,
    ) -> Result<Option<Topic>, DomainError>;
    async fn list_topics(&self) -> Result<Vec<Topic>, DomainError>;
}
