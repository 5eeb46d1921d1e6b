//! Chapter endpoints.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use bs_core::error::BsResult;
use bs_models::{Chapter, ChapterDetailed, TagParams};

use super::{is_zero, ExportFormat};
use crate::client::ApiClient;
use crate::form::{json_body, Blank, Form, FormBody};
use crate::query::{with_query, QueryParams};
use crate::response::{parse_multiple, parse_single};

/// Parameters for creating or updating a chapter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChapterParams {
    #[serde(skip_serializing_if = "is_zero")]
    pub book_id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagParams>,
}

#[async_trait]
impl Form for ChapterParams {
    async fn form(&self) -> BsResult<FormBody> {
        json_body(self)
    }
}

impl ApiClient {
    /// List chapters, optionally paged, sorted and filtered.
    pub async fn list_chapters(&self, params: Option<&QueryParams>) -> BsResult<Vec<Chapter>> {
        let raw = self.get(&with_query("/chapters", params)).await?;
        parse_multiple(&raw)
    }

    /// Get a single chapter with its pages.
    pub async fn get_chapter(&self, id: i64) -> BsResult<ChapterDetailed> {
        let raw = self.get(&format!("/chapters/{id}")).await?;
        parse_single(&raw)
    }

    /// Create a chapter.
    pub async fn create_chapter(&self, params: &ChapterParams) -> BsResult<Chapter> {
        let raw = self.post("/chapters", params).await?;
        parse_single(&raw)
    }

    /// Update a chapter. Changing `book_id` moves it.
    pub async fn update_chapter(&self, id: i64, params: &ChapterParams) -> BsResult<Chapter> {
        let raw = self.put(&format!("/chapters/{id}"), params).await?;
        parse_single(&raw)
    }

    /// Delete a chapter (moves it to the recycle bin).
    pub async fn delete_chapter(&self, id: i64) -> BsResult<bool> {
        self.delete(&format!("/chapters/{id}"), &Blank).await?;
        Ok(true)
    }

    /// Export a chapter in the given format.
    pub async fn export_chapter(&self, id: i64, format: ExportFormat) -> BsResult<Vec<u8>> {
        self.export("chapters", id, format).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_json_roundtrip() {
        let params = ChapterParams {
            book_id: 4,
            name: "Setup".into(),
            description: String::new(),
            tags: vec![TagParams::new("status", "draft")],
        };
        let bytes = match params.form().await.unwrap() {
            FormBody::Json(bytes) => bytes,
            other => panic!("expected json body, got {other:?}"),
        };
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json.get("description").is_none());

        let decoded: ChapterParams = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, params);
    }
}
