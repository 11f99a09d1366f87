use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Topic {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) tags: Vec<String>,
    pub(crate) author_id: i64,
    pub(crate) created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CreateTopicRequest {
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) tags: Vec<String>,
}

impl CreateTopicRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            title: normalize_title("title", &self.title)?,
            content: normalize_content(&self.content)?,
            tags: normalize_tags(self.tags),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RenameTopicRequest {
    pub(crate) title: String,
    pub(crate) new_title: String,
}

impl RenameTopicRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            title: normalize_title("title", &self.title)?,
            new_title: normalize_title("new_title", &self.new_title)?,
        })
    }
}

impl Topic {
    pub(crate) fn new(
        id: i64,
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<String>,
        author_id: i64,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        validate_positive_i64("id", id)?;
        validate_positive_i64("author_id", author_id)?;
        let title = normalize_title("title", &title.into())?;
        let content = normalize_content(&content.into())?;

        Ok(Self {
            id,
            title,
            content,
            tags: normalize_tags(tags),
            author_id,
            created_at,
        })
    }
}

fn validate_positive_i64(field: &'static str, value: i64) -> Result<(), DomainError> {
    if value <= 0 {
        return Err(DomainError::Validation {
            field,
            message: "must be > 0",
        });
    }
    Ok(())
}

fn normalize_title(field: &'static str, title: &str) -> Result<String, DomainError> {
    let title = title.trim();
    if title.is_empty() || title.len() > 255 {
        return Err(DomainError::Validation {
            field,
            message: "must be 1..255 chars",
        });
    }
    Ok(title.to_string())
}

fn normalize_content(content: &str) -> Result<String, DomainError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(DomainError::Validation {
            field: "content",
            message: "must not be empty",
        });
    }
    Ok(content.to_string())
}

fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::{CreateTopicRequest, DomainError, RenameTopicRequest, Topic};

    #[test]
    fn create_topic_request_validate_rejects_empty_title() {
        let req = CreateTopicRequest {
            title: "   ".to_string(),
            content: "valid content".to_string(),
            tags: vec![],
        };

        let err = req.validate().expect_err("title must be rejected");
        assert_validation_field(err, "title");
    }

    #[test]
    fn create_topic_request_validate_rejects_empty_content() {
        let req = CreateTopicRequest {
            title: "valid title".to_string(),
            content: "   ".to_string(),
            tags: vec![],
        };

        let err = req.validate().expect_err("content must be rejected");
        assert_validation_field(err, "content");
    }

    #[test]
    fn create_topic_request_validate_normalizes_tags() {
        let req = CreateTopicRequest {
            title: "  title  ".to_string(),
            content: "  content  ".to_string(),
            tags: vec!["  rust  ".to_string(), "   ".to_string(), "web".to_string()],
        };

        let validated = req.validate().expect("must validate");
        assert_eq!(validated.title, "title");
        assert_eq!(validated.content, "content");
        assert_eq!(validated.tags, vec!["rust".to_string(), "web".to_string()]);
    }

    #[test]
    fn rename_topic_request_reports_which_title_failed() {
        let bad_new = RenameTopicRequest {
            title: "old".to_string(),
            new_title: "   ".to_string(),
        };
        let err = bad_new.validate().expect_err("new_title must be rejected");
        assert_validation_field(err, "new_title");

        let bad_old = RenameTopicRequest {
            title: "   ".to_string(),
            new_title: "new".to_string(),
        };
        let err = bad_old.validate().expect_err("title must be rejected");
        assert_validation_field(err, "title");
    }

    #[test]
    fn topic_new_normalizes_and_builds_topic() {
        let topic = Topic::new(
            1,
            "  Title  ",
            "  Content  ",
            vec!["tag".to_string()],
            10,
            Utc::now(),
        )
        .expect("topic should be created");

        assert_eq!(topic.id, 1);
        assert_eq!(topic.author_id, 10);
        assert_eq!(topic.title, "Title");
        assert_eq!(topic.content, "Content");
    }

    #[test]
    fn topic_new_rejects_non_positive_author_id() {
        let err = Topic::new(1, "Title", "Content", vec![], 0, Utc::now())
            .expect_err("author_id must be > 0");
        assert_validation_field(err, "author_id");
    }

    fn assert_validation_field(err: DomainError, expected_field: &'static str) {
        match err {
            DomainError::Validation { field, .. } => assert_eq!(field, expected_field),
            _ => panic!("expected DomainError::Validation"),
        }
    }
}
