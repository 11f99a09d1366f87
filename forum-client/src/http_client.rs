use reqwest::{Client, Method};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::time::Duration;

use crate::error::{ForumClientError, ForumClientResult};
use crate::models::{AuthResponse, Topic, User};

#[derive(Debug, Serialize)]
struct RegisterRequestDto<'a> {
    name: &'a str,
    surname: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct LoginRequestDto<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct CreateTopicRequestDto<'a> {
    title: &'a str,
    content: &'a str,
    tags: &'a [String],
}

#[derive(Debug, Serialize)]
struct DeleteTopicRequestDto<'a> {
    title: &'a str,
}

#[derive(Debug, Serialize)]
struct RenameTopicRequestDto<'a> {
    title: &'a str,
    new_title: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorResponseDto {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AuthResponseDto {
    access_token: String,
    user: UserDto,
}

#[derive(Debug, Deserialize)]
struct UserDto {
    id: i64,
    name: String,
    surname: String,
    email: String,
    posts: Vec<i64>,
    created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize)]
struct TopicDto {
    id: i64,
    title: String,
    content: String,
    tags: Vec<String>,
    author_id: i64,
    created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize)]
struct TitleQuery<'a> {
    title: &'a str,
}

impl From<UserDto> for User {
    fn from(value: UserDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            surname: value.surname,
            email: value.email,
            posts: value.posts,
            created_at: value.created_at,
        }
    }
}

impl From<AuthResponseDto> for AuthResponse {
    fn from(value: AuthResponseDto) -> Self {
        Self {
            access_token: value.access_token,
            user: value.user.into(),
        }
    }
}

impl From<TopicDto> for Topic {
    fn from(value: TopicDto) -> Self {
        Self {
            id: value.id,
            title: value.title,
            content: value.content,
            tags: value.tags,
            author_id: value.author_id,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Clone)]
/// HTTP client for the forum-server REST API.
pub(crate) struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()
            .expect("failed to build reqwest client");

        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn decode_error(response: reqwest::Response) -> ForumClientError {
        let status = response.status();

        let message = match response.json::<ErrorResponseDto>().await {
            Ok(body) => body
                .error
                .unwrap_or_else(|| format!("http status {status}")),
            Err(_) => format!("http status {status}"),
        };
        ForumClientError::from_http_status(status, Some(message))
    }

    /// Shared helper for requests carrying a json payload.
    async fn send_json<TReq, TRes>(
        &self,
        method: Method,
        path: &str,
        body: &TReq,
        token: Option<&str>,
    ) -> ForumClientResult<TRes>
    where
        TReq: Serialize,
        TRes: DeserializeOwned,
    {
        let url = self.endpoint(path);

        let mut request = self.client.request(method, url).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(ForumClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        response
            .json::<TRes>()
            .await
            .map_err(ForumClientError::from_reqwest)
    }

    pub(crate) async fn register(
        &self,
        name: &str,
        surname: &str,
        email: &str,
        password: &str,
    ) -> ForumClientResult<AuthResponse> {
        let payload = RegisterRequestDto {
            name,
            surname,
            email,
            password,
        };
        let dto: AuthResponseDto = self
            .send_json(Method::POST, "/api/auth/register", &payload, None)
            .await?;
        Ok(dto.into())
    }

    pub(crate) async fn login(&self, email: &str, password: &str) -> ForumClientResult<AuthResponse> {
        let payload = LoginRequestDto { email, password };
        let dto: AuthResponseDto = self
            .send_json(Method::POST, "/api/auth/login", &payload, None)
            .await?;
        Ok(dto.into())
    }

    pub(crate) async fn me(&self, token: &str) -> ForumClientResult<User> {
        let url = self.endpoint("/api/users/me");

        let request = self.client.request(Method::GET, url).bearer_auth(token);

        let response = request
            .send()
            .await
            .map_err(ForumClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        let dto = response
            .json::<UserDto>()
            .await
            .map_err(ForumClientError::from_reqwest)?;
        Ok(dto.into())
    }

    pub(crate) async fn list_topics(&self) -> ForumClientResult<Vec<Topic>> {
        let url = self.endpoint("/api/topics");

        let response = self
            .client
            .request(Method::GET, url)
            .send()
            .await
            .map_err(ForumClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        let dtos = response
            .json::<Vec<TopicDto>>()
            .await
            .map_err(ForumClientError::from_reqwest)?;
        Ok(dtos.into_iter().map(Topic::from).collect())
    }

    pub(crate) async fn find_topic(&self, title: &str) -> ForumClientResult<Option<Topic>> {
        let url = self.endpoint("/api/topics/by-title");

        let response = self
            .client
            .request(Method::GET, url)
            .query(&TitleQuery { title })
            .send()
            .await
            .map_err(ForumClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        let dto = response
            .json::<Option<TopicDto>>()
            .await
            .map_err(ForumClientError::from_reqwest)?;
        Ok(dto.map(Topic::from))
    }

    pub(crate) async fn create_topic(
        &self,
        author_id: i64,
        title: &str,
        content: &str,
        tags: &[String],
    ) -> ForumClientResult<Topic> {
        let payload = CreateTopicRequestDto {
            title,
            content,
            tags,
        };
        let dto: TopicDto = self
            .send_json(
                Method::POST,
                &format!("/api/users/{author_id}/topics"),
                &payload,
                None,
            )
            .await?;

        Ok(dto.into())
    }

    pub(crate) async fn delete_topic(&self, title: &str) -> ForumClientResult<String> {
        let url = self.endpoint("/api/topics/by-title");
        let payload = DeleteTopicRequestDto { title };

        let response = self
            .client
            .request(Method::DELETE, url)
            .json(&payload)
            .send()
            .await
            .map_err(ForumClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        response.text().await.map_err(ForumClientError::from_reqwest)
    }

    pub(crate) async fn rename_topic(
        &self,
        title: &str,
        new_title: &str,
    ) -> ForumClientResult<Option<Topic>> {
        let payload = RenameTopicRequestDto { title, new_title };
        let dto: Option<TopicDto> = self
            .send_json(Method::PUT, "/api/topics/title", &payload, None)
            .await?;

        Ok(dto.map(Topic::from))
    }
}
