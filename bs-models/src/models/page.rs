//! Page records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Tag, UserRef};
use super::de::null_default;

/// Page as returned by list, create and update endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub book_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub chapter_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_default")]
    pub priority: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_default")]
    pub created_by: i64,
    #[serde(deserialize_with = "null_default")]
    pub updated_by: i64,
    #[serde(deserialize_with = "null_default")]
    pub draft: bool,
    #[serde(deserialize_with = "null_default")]
    pub revision_count: i64,
    #[serde(deserialize_with = "null_default")]
    pub template: bool,
}

/// Page as returned by the single-page endpoint, including its content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageDetailed {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub book_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub chapter_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_default")]
    pub html: String,
    #[serde(deserialize_with = "null_default")]
    pub markdown: String,
    #[serde(deserialize_with = "null_default")]
    pub priority: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_default")]
    pub created_by: UserRef,
    #[serde(deserialize_with = "null_default")]
    pub updated_by: UserRef,
    #[serde(deserialize_with = "null_default")]
    pub owned_by: UserRef,
    #[serde(deserialize_with = "null_default")]
    pub draft: bool,
    #[serde(deserialize_with = "null_default")]
    pub revision_count: i64,
    #[serde(deserialize_with = "null_default")]
    pub template: bool,
    #[serde(deserialize_with = "null_default")]
    pub tags: Vec<Tag>,
}
