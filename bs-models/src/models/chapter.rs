//! Chapter records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Tag, UserRef};
use super::de::null_default;

/// Chapter as returned by list, create and update endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chapter {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub book_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
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
    pub owned_by: i64,
}

/// Chapter as returned by the single-chapter endpoint, with its pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChapterDetailed {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub book_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
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
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "null_default")]
    pub pages: Vec<ChapterPage>,
}

/// Page summary nested inside a detailed chapter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChapterPage {
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
