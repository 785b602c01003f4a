use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

/// Unique identifier of a stored thought.
///
/// Serializes as its canonical hyphenated UUID string, which is also the form
/// used in URLs. Parsing anything else fails with `MalformedIdentifier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThoughtId(Uuid);

impl ThoughtId {
    pub fn new() -> Self {
        ThoughtId(Uuid::new_v4())
    }
}

impl Default for ThoughtId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ThoughtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ThoughtId {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(ThoughtId)
            .map_err(|_| ApiError::MalformedIdentifier(s.to_string()))
    }
}

/// A stored thought. `id` and `created_time` are assigned once at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thought {
    #[serde(rename = "ID")]
    pub id: ThoughtId,
    #[serde(rename = "CreatedTime")]
    pub created_time: DateTime<Utc>,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Content")]
    pub content: String,
}

/// Creation payload. The wire name of the content field is `Thought`, while
/// the stored record calls it `Content`; clients depend on both names.
#[derive(Debug, Clone, Deserialize)]
pub struct ThoughtPost {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Thought")]
    pub thought: String,
}
