use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog clubs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClubId(pub String);

impl ClubId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClubId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fixed set of categories a club belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClubDomain {
    Technical,
    Cultural,
    Sports,
    Management,
    Literary,
    Social,
}

impl ClubDomain {
    pub const ALL: [ClubDomain; 6] = [
        ClubDomain::Technical,
        ClubDomain::Cultural,
        ClubDomain::Sports,
        ClubDomain::Management,
        ClubDomain::Literary,
        ClubDomain::Social,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ClubDomain::Technical => "Technical",
            ClubDomain::Cultural => "Cultural",
            ClubDomain::Sports => "Sports",
            ClubDomain::Management => "Management",
            ClubDomain::Literary => "Literary",
            ClubDomain::Social => "Social",
        }
    }
}

impl FromStr for ClubDomain {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        ClubDomain::ALL
            .into_iter()
            .find(|domain| domain.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownVariant(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecruitmentStatus {
    Open,
    Closed,
    Upcoming,
}

impl RecruitmentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            RecruitmentStatus::Open => "Open",
            RecruitmentStatus::Closed => "Closed",
            RecruitmentStatus::Upcoming => "Upcoming",
        }
    }
}

impl FromStr for RecruitmentStatus {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        [
            RecruitmentStatus::Open,
            RecruitmentStatus::Closed,
            RecruitmentStatus::Upcoming,
        ]
        .into_iter()
        .find(|status| status.label().eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| UnknownVariant(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized value '{0}'")]
pub struct UnknownVariant(pub String);

/// A club listing as served by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    pub description: String,
    pub domain: ClubDomain,
    pub skills: Vec<String>,
    pub time_commitment: String,
    pub recruitment_status: RecruitmentStatus,
    pub contact: String,
    pub image_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub member_count: u32,
}
