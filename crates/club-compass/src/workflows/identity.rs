//! Caller identity as forwarded by the upstream user directory.
//!
//! Authentication happens before requests reach this service; the directory
//! stamps the authenticated user's id into [`USER_ID_HEADER`]. Handlers that
//! act on behalf of a user take a [`CallerId`] extractor and never see
//! credentials.

use std::fmt;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_NAME_HEADER: &str = "x-user-name";
pub const USER_ROLE_HEADER: &str = "x-user-role";
pub const USER_VERIFIED_HEADER: &str = "x-user-verified";

/// Opaque identifier of an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extractor resolving the calling user from request headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerId(pub UserId);

/// Campus role reported by the user directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Fresher,
    Senior,
}

impl UserRole {
    pub const fn label(self) -> &'static str {
        match self {
            UserRole::Fresher => "fresher",
            UserRole::Senior => "senior",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        [UserRole::Fresher, UserRole::Senior]
            .into_iter()
            .find(|role| role.label().eq_ignore_ascii_case(raw))
    }
}

/// Display details of the caller, used when authoring forum posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: UserId,
    pub name: String,
    pub role: UserRole,
    pub verified: bool,
}

/// Extractor for [`UserProfile`]. Only the id header is required; the name
/// falls back to the id, the role to fresher, and verification to false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerProfile(pub UserProfile);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityRejection {
    Missing,
    Malformed,
}

impl IntoResponse for IdentityRejection {
    fn into_response(self) -> Response {
        let message = match self {
            IdentityRejection::Missing => "missing caller identity",
            IdentityRejection::Malformed => "malformed caller identity",
        };
        (StatusCode::UNAUTHORIZED, Json(json!({ "error": message }))).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CallerId
where
    S: Send + Sync,
{
    type Rejection = IdentityRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or(IdentityRejection::Missing)?;
        let raw = value.to_str().map_err(|_| IdentityRejection::Malformed)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(IdentityRejection::Missing);
        }
        Ok(CallerId(UserId(trimmed.to_string())))
    }
}

fn optional_header<'a>(
    parts: &'a Parts,
    name: &str,
) -> Result<Option<&'a str>, IdentityRejection> {
    match parts.headers.get(name) {
        None => Ok(None),
        Some(value) => {
            let raw = value.to_str().map_err(|_| IdentityRejection::Malformed)?;
            let trimmed = raw.trim();
            Ok((!trimmed.is_empty()).then_some(trimmed))
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CallerProfile
where
    S: Send + Sync,
{
    type Rejection = IdentityRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let CallerId(user_id) = CallerId::from_request_parts(parts, state).await?;

        let name = optional_header(parts, USER_NAME_HEADER)?
            .map(str::to_string)
            .unwrap_or_else(|| user_id.to_string());
        let role = match optional_header(parts, USER_ROLE_HEADER)? {
            None => UserRole::default(),
            Some(raw) => UserRole::parse(raw).ok_or(IdentityRejection::Malformed)?,
        };
        let verified = match optional_header(parts, USER_VERIFIED_HEADER)? {
            None => false,
            Some(raw) => raw
                .parse::<bool>()
                .map_err(|_| IdentityRejection::Malformed)?,
        };

        Ok(CallerProfile(UserProfile {
            user_id,
            name,
            role,
            verified,
        }))
    }
}
