use crate::data::topic_repository::{NewTopic, TopicRepository};
use crate::domain::error::DomainError;
use crate::domain::topic::{CreateTopicRequest, RenameTopicRequest, Topic};

pub(crate) struct TopicService<R: TopicRepository> {
    repo: R,
}

impl<R: TopicRepository> TopicService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn create_topic(
        &self,
        author_id: i64,
        req: CreateTopicRequest,
    ) -> Result<Topic, DomainError> {
        let req = req.validate()?;

        let new_topic = NewTopic {
            title: req.title,
            content: req.content,
            tags: req.tags,
            author_id,
        };
        self.repo.create_topic(new_topic).await
    }

    pub(crate) async fn find_by_title(&self, title: &str) -> Result<Option<Topic>, DomainError> {
        self.repo.find_by_title(title.trim()).await
    }

    /// Deletes the topic if it exists. Deleting a missing title is not an
    /// error; the caller always gets the same confirmation.
    pub(crate) async fn delete_by_title(&self, title: &str) -> Result<(), DomainError> {
        let deleted = self.repo.delete_by_title(title.trim()).await?;
        if !deleted {
            tracing::debug!(title = title.trim(), "delete matched no topic");
        }
        Ok(())
    }

    /// Renames the first topic matching `title`. Returns `None` when no
    /// topic carries the old title.
    pub(crate) async fn rename_topic(
        &self,
        req: RenameTopicRequest,
    ) -> Result<Option<Topic>, DomainError> {
        let req = req.validate()?;
        self.repo.rename_topic(&req.title, &req.new_title).await
    }

    pub(crate) async fn list_topics(&self) -> Result<Vec<Topic>, DomainError> {
        self.repo.list_topics().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::Utc;

    use super::TopicService;
    use crate::data::topic_repository::{NewTopic, TopicRepository};
    use crate::domain::error::DomainError;
    use crate::domain::topic::{CreateTopicRequest, RenameTopicRequest, Topic};

    /// In-memory repository that mirrors the transactional contract of the
    /// Postgres implementation: creating a topic for a known author appends
    /// the topic id to the author's post list, creating for an unknown
    /// author changes nothing.
    #[derive(Clone)]
    struct FakeTopicRepo {
        known_author: i64,
        author_posts: Arc<Mutex<Vec<i64>>>,
        topics: Arc<Mutex<Vec<Topic>>>,
        next_id: Arc<Mutex<i64>>,
    }

    impl FakeTopicRepo {
        fn new(known_author: i64) -> Self {
            Self {
                known_author,
                author_posts: Arc::new(Mutex::new(Vec::new())),
                topics: Arc::new(Mutex::new(Vec::new())),
                next_id: Arc::new(Mutex::new(1)),
            }
        }

        fn author_posts(&self) -> Vec<i64> {
            self.author_posts
                .lock()
                .expect("author_posts mutex poisoned")
                .clone()
        }

        fn topics(&self) -> Vec<Topic> {
            self.topics.lock().expect("topics mutex poisoned").clone()
        }
    }

    #[async_trait]
    impl TopicRepository for FakeTopicRepo {
        async fn create_topic(&self, input: NewTopic) -> Result<Topic, DomainError> {
            if input.author_id != self.known_author {
                return Err(DomainError::NotFound("author".to_string()));
            }

            let id = {
                let mut next = self.next_id.lock().expect("next_id mutex poisoned");
                let id = *next;
                *next += 1;
                id
            };

            let topic = Topic::new(
                id,
                input.title,
                input.content,
                input.tags,
                input.author_id,
                Utc::now(),
            )?;

            self.author_posts
                .lock()
                .expect("author_posts mutex poisoned")
                .push(id);
            self.topics
                .lock()
                .expect("topics mutex poisoned")
                .push(topic.clone());
            Ok(topic)
        }

        async fn find_by_title(&self, title: &str) -> Result<Option<Topic>, DomainError> {
            Ok(self.topics().into_iter().find(|t| t.title == title))
        }

        async fn delete_by_title(&self, title: &str) -> Result<bool, DomainError> {
            let mut topics = self.topics.lock().expect("topics mutex poisoned");
            let before = topics.len();
            topics.retain(|t| t.title != title);
            Ok(topics.len() < before)
        }

        async fn rename_topic(
            &self,
            title: &str,
            new_title: &str,
        ) -> Result<Option<Topic>, DomainError> {
            let mut topics = self.topics.lock().expect("topics mutex poisoned");
            if let Some(topic) = topics.iter_mut().find(|t| t.title == title) {
                topic.title = new_title.to_string();
                return Ok(Some(topic.clone()));
            }
            Ok(None)
        }

        async fn list_topics(&self) -> Result<Vec<Topic>, DomainError> {
            Ok(self.topics())
        }
    }

    fn create_req(title: &str) -> CreateTopicRequest {
        CreateTopicRequest {
            title: title.to_string(),
            content: "content".to_string(),
            tags: vec!["tag".to_string()],
        }
    }

    #[tokio::test]
    async fn create_topic_appends_exactly_one_post_id() {
        let repo = FakeTopicRepo::new(10);
        let service = TopicService::new(repo.clone());

        let created = service
            .create_topic(10, create_req("  First topic  "))
            .await
            .expect("create_topic must succeed");

        assert_eq!(created.title, "First topic");
        assert_eq!(created.author_id, 10);
        assert_eq!(repo.author_posts(), vec![created.id]);
        assert_eq!(repo.topics().len(), 1);
    }

    #[tokio::test]
    async fn create_topic_for_missing_author_creates_nothing() {
        let repo = FakeTopicRepo::new(10);
        let service = TopicService::new(repo.clone());

        let err = service
            .create_topic(99, create_req("Orphan"))
            .await
            .expect_err("unknown author must fail");

        assert!(matches!(err, DomainError::NotFound(_)));
        assert!(repo.topics().is_empty());
        assert!(repo.author_posts().is_empty());
    }

    #[tokio::test]
    async fn delete_missing_title_is_not_an_error() {
        let repo = FakeTopicRepo::new(10);
        let service = TopicService::new(repo);

        service
            .delete_by_title("does not exist")
            .await
            .expect("delete of a missing title must still succeed");
    }

    #[tokio::test]
    async fn rename_missing_title_returns_none() {
        let repo = FakeTopicRepo::new(10);
        let service = TopicService::new(repo);

        let renamed = service
            .rename_topic(RenameTopicRequest {
                title: "missing".to_string(),
                new_title: "still missing".to_string(),
            })
            .await
            .expect("rename of a missing title must not error");

        assert!(renamed.is_none());
    }

    #[tokio::test]
    async fn rename_returns_updated_topic() {
        let repo = FakeTopicRepo::new(10);
        let service = TopicService::new(repo.clone());

        service
            .create_topic(10, create_req("Old title"))
            .await
            .expect("create_topic must succeed");

        let renamed = service
            .rename_topic(RenameTopicRequest {
                title: "Old title".to_string(),
                new_title: "New title".to_string(),
            })
            .await
            .expect("rename must succeed")
            .expect("topic must be found");

        assert_eq!(renamed.title, "New title");
        let found = service
            .find_by_title("New title")
            .await
            .expect("find must succeed");
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn list_topics_returns_all_created_non_deleted() {
        let repo = FakeTopicRepo::new(10);
        let service = TopicService::new(repo);

        service
            .create_topic(10, create_req("A"))
            .await
            .expect("create A");
        service
            .create_topic(10, create_req("B"))
            .await
            .expect("create B");
        service.delete_by_title("A").await.expect("delete A");

        let topics = service.list_topics().await.expect("list must succeed");
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].title, "B");
    }
}
