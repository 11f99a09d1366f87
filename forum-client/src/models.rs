use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Public user model.
pub struct User {
    /// User identifier.
    pub id: i64,
    /// First name.
    pub name: String,
    /// Last name.
    pub surname: String,
    /// Email, also the login identity.
    pub email: String,
    /// Ids of the topics this user authored, in creation order.
    pub posts: Vec<i64>,
    /// Creation timestamp (UTC).
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Public topic model.
pub struct Topic {
    /// Topic identifier.
    pub id: i64,
    /// Topic title, unique across the forum.
    pub title: String,
    /// Topic body.
    pub content: String,
    /// Free-form labels.
    pub tags: Vec<String>,
    /// Identifier of the authoring user.
    pub author_id: i64,
    /// Creation timestamp (UTC).
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Response of a successful registration or login.
pub struct AuthResponse {
    /// JWT access token.
    pub access_token: String,
    /// The user the token belongs to.
    pub user: User,
}
