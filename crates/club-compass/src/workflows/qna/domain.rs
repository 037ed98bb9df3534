use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::workflows::identity::{UserId, UserProfile, UserRole};

/// Name shown in place of the author on anonymous threads.
pub const ANONYMOUS_NAME: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionCreate {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub is_anonymous: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReplyCreate {
    pub content: String,
}

/// Replies always carry the author's name and role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub id: Uuid,
    pub content: String,
    pub user_id: UserId,
    pub user_name: String,
    pub user_role: UserRole,
    pub user_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl Reply {
    pub fn new(author: &UserProfile, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            user_id: author.user_id.clone(),
            user_name: author.name.clone(),
            user_role: author.role,
            user_verified: author.verified,
            created_at: Utc::now(),
        }
    }
}

/// Stored thread. The real author is kept even when posted anonymously so
/// ownership checks still work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub title: String,
    pub description: String,
    pub author: UserProfile,
    pub is_anonymous: bool,
    pub replies: Vec<Reply>,
    pub created_at: DateTime<Utc>,
}

impl Question {
    pub fn new(
        author: UserProfile,
        title: String,
        description: String,
        is_anonymous: bool,
    ) -> Self {
        Self {
            id: QuestionId::generate(),
            title,
            description,
            author,
            is_anonymous,
            replies: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        &self.author.user_id == user_id
    }

    /// Response shape for `viewer`. Anonymous threads hide the author's id
    /// and name from everyone but the author.
    pub fn view_for(&self, viewer: &UserId) -> QuestionView {
        let masked = self.is_anonymous && !self.is_authored_by(viewer);
        let (user_id, user_name) = if masked {
            (None, ANONYMOUS_NAME.to_string())
        } else {
            (Some(self.author.user_id.clone()), self.author.name.clone())
        };

        QuestionView {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            user_id,
            user_name,
            user_role: self.author.role,
            is_anonymous: self.is_anonymous,
            reply_count: self.replies.len(),
            replies: self.replies.clone(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub id: QuestionId,
    pub title: String,
    pub description: String,
    pub user_id: Option<UserId>,
    pub user_name: String,
    pub user_role: UserRole,
    pub is_anonymous: bool,
    pub replies: Vec<Reply>,
    pub reply_count: usize,
    pub created_at: DateTime<Utc>,
}
