//! Client library for the forum-server REST API.
//!
//! [`ForumClient`] wraps the HTTP transport (`reqwest`) and keeps the JWT
//! token obtained from `register`/`login` so protected operations can reuse
//! it automatically.
#![warn(missing_docs)]

mod error;
mod http_client;
mod models;

pub use error::{ForumClientError, ForumClientResult};
pub use models::{AuthResponse, Topic, User};

use http_client::HttpClient;

#[derive(Debug, Clone)]
/// Client for the forum service HTTP API.
pub struct ForumClient {
    http_client: HttpClient,
    token: Option<String>,
}

impl ForumClient {
    /// Creates a client pointed at `base_url`, e.g. `http://127.0.0.1:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(base_url),
            token: None,
        }
    }

    /// Sets the JWT token manually.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Returns the current JWT token, if any.
    pub fn get_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Clears the stored JWT token.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Registers a user and stores the returned JWT token in the client.
    pub async fn register(
        &mut self,
        name: &str,
        surname: &str,
        email: &str,
        password: &str,
    ) -> ForumClientResult<AuthResponse> {
        let result = self
            .http_client
            .register(name, surname, email, password)
            .await?;
        self.token = Some(result.access_token.clone());
        Ok(result)
    }

    /// Logs a user in and stores the returned JWT token in the client.
    pub async fn login(&mut self, email: &str, password: &str) -> ForumClientResult<AuthResponse> {
        let result = self.http_client.login(email, password).await?;
        self.token = Some(result.access_token.clone());
        Ok(result)
    }

    /// Fetches the profile of the authenticated user, including the list of
    /// authored topic ids.
    ///
    /// Requires a stored JWT token.
    pub async fn me(&self) -> ForumClientResult<User> {
        let token = self.require_token()?;
        self.http_client.me(token).await
    }

    /// Returns all topics.
    pub async fn list_topics(&self) -> ForumClientResult<Vec<Topic>> {
        self.http_client.list_topics().await
    }

    /// Finds a topic by its exact title. Returns `None` when no topic
    /// carries that title.
    pub async fn find_topic(&self, title: &str) -> ForumClientResult<Option<Topic>> {
        self.http_client.find_topic(title).await
    }

    /// Creates a topic authored by the user with `author_id`.
    pub async fn create_topic(
        &self,
        author_id: i64,
        title: &str,
        content: &str,
        tags: &[String],
    ) -> ForumClientResult<Topic> {
        self.http_client
            .create_topic(author_id, title, content, tags)
            .await
    }

    /// Deletes a topic by title. The server answers with the same
    /// confirmation string whether or not the topic existed.
    pub async fn delete_topic(&self, title: &str) -> ForumClientResult<String> {
        self.http_client.delete_topic(title).await
    }

    /// Renames a topic. Returns `None` when the old title does not exist.
    pub async fn rename_topic(
        &self,
        title: &str,
        new_title: &str,
    ) -> ForumClientResult<Option<Topic>> {
        self.http_client.rename_topic(title, new_title).await
    }

    fn require_token(&self) -> ForumClientResult<&str> {
        self.token.as_deref().ok_or(ForumClientError::Unauthorized)
    }
}
