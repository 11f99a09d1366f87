use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::models::{AuthResponse, LoginRequest, RegisterRequest, Topic, User};

const API_BASE_URL: &str = match option_env!("WASM_API_BASE_URL") {
    Some(value) => value,
    None => "http://127.0.0.1:8080",
};

#[derive(Debug, Clone)]
pub(crate) enum ApiError {
    Network(String),
    Http { status: u16, message: String },
    Decode(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Http { status, message } => write!(f, "http error {status}: {message}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

fn endpoint(path: &str) -> String {
    format!(
        "{}/{}",
        API_BASE_URL.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

async fn parse_json<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Reads the `{"error": "..."}` body the server answers errors with.
async fn parse_error_body(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "request failed".to_string());

    let message = serde_json::from_str::<serde_json::Value>(&text)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| match status {
            400 => "invalid request".to_string(),
            401 => "authorization required".to_string(),
            404 => "resource not found".to_string(),
            409 => "conflict, such a record already exists".to_string(),
            500..=599 => "server error".to_string(),
            _ => format!("http error {status}"),
        });

    ApiError::Http { status, message }
}

pub(crate) async fn register(
    name: &str,
    surname: &str,
    email: &str,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    let payload = RegisterRequest {
        name: name.to_string(),
        surname: surname.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };

    let response = Request::post(&endpoint("/api/auth/register"))
        .json(&payload)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    parse_json(response).await
}

pub(crate) async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let payload = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let response = Request::post(&endpoint("/api/auth/login"))
        .json(&payload)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    parse_json(response).await
}

pub(crate) async fn fetch_profile(token: &str) -> Result<User, ApiError> {
    let response = Request::get(&endpoint("/api/users/me"))
        .header("Authorization", &format!("Bearer {token}"))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    parse_json(response).await
}

pub(crate) async fn list_topics() -> Result<Vec<Topic>, ApiError> {
    let response = Request::get(&endpoint("/api/topics"))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    parse_json(response).await
}
