//! Attachment records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::UserRef;
use super::de::null_default;

/// Attachment as returned by list, create and update endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attachment {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub extension: String,
    #[serde(deserialize_with = "null_default")]
    pub uploaded_to: i64,
    #[serde(deserialize_with = "null_default")]
    pub external: bool,
    #[serde(deserialize_with = "null_default")]
    pub order: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_default")]
    pub created_by: i64,
    #[serde(deserialize_with = "null_default")]
    pub updated_by: i64,
}

/// Attachment as returned by the single-attachment endpoint.
///
/// `content` holds the file body (base64) for uploads or the target URL for
/// link attachments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachmentDetailed {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub extension: String,
    #[serde(deserialize_with = "null_default")]
    pub uploaded_to: i64,
    #[serde(deserialize_with = "null_default")]
    pub external: bool,
    #[serde(deserialize_with = "null_default")]
    pub order: i64,
    #[serde(deserialize_with = "null_default")]
    pub created_by: UserRef,
    #[serde(deserialize_with = "null_default")]
    pub updated_by: UserRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_default")]
    pub links: AttachmentLinks,
    #[serde(deserialize_with = "null_default")]
    pub content: String,
}

/// Ready-made links for embedding an attachment in page content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachmentLinks {
    #[serde(deserialize_with = "null_default")]
    pub html: String,
    #[serde(deserialize_with = "null_default")]
    pub markdown: String,
}
