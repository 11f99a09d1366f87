use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced by the `forum-client` library.
pub enum ForumClientError {
    /// HTTP transport error (`reqwest`).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authorization is required (missing or invalid token).
    #[error("unauthorized")]
    Unauthorized,

    /// The requested resource was not found.
    #[error("not found")]
    NotFound,

    /// Invalid request or a business validation error.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Result of `forum-client` operations.
pub type ForumClientResult<T> = Result<T, ForumClientError>;

impl ForumClientError {
    pub(crate) fn from_http_status(status: reqwest::StatusCode, message: Option<String>) -> Self {
        match status {
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                Self::Unauthorized
            }
            reqwest::StatusCode::NOT_FOUND => Self::NotFound,
            _ => {
                let message = message.unwrap_or_else(|| format!("http status {status}"));
                Self::InvalidRequest(message)
            }
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_http_status(status, None);
        }
        Self::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::ForumClientError;

    #[test]
    fn unauthorized_statuses_collapse_to_unauthorized() {
        let err =
            ForumClientError::from_http_status(reqwest::StatusCode::UNAUTHORIZED, None);
        assert!(matches!(err, ForumClientError::Unauthorized));

        let err = ForumClientError::from_http_status(reqwest::StatusCode::FORBIDDEN, None);
        assert!(matches!(err, ForumClientError::Unauthorized));
    }

    #[test]
    fn not_found_status_maps_to_not_found() {
        let err = ForumClientError::from_http_status(reqwest::StatusCode::NOT_FOUND, None);
        assert!(matches!(err, ForumClientError::NotFound));
    }

    #[test]
    fn other_statuses_keep_the_server_message() {
        let err = ForumClientError::from_http_status(
            reqwest::StatusCode::CONFLICT,
            Some("resource already exists: title".to_string()),
        );
        match err {
            ForumClientError::InvalidRequest(message) => {
                assert_eq!(message, "resource already exists: title");
            }
            _ => panic!("expected InvalidRequest"),
        }
    }
}
