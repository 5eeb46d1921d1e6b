//! Page endpoints.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use bs_core::error::BsResult;
use bs_models::{Page, PageDetailed, TagParams};

use super::{is_zero, ExportFormat};
use crate::client::ApiClient;
use crate::form::{json_body, Blank, Form, FormBody};
use crate::query::{with_query, QueryParams};
use crate::response::{parse_multiple, parse_single};

/// Parameters for creating or updating a page.
///
/// A page belongs to either a book or a chapter; content is given as `html`
/// or `markdown`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageParams {
    #[serde(skip_serializing_if = "is_zero")]
    pub book_id: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub chapter_id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub html: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub markdown: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagParams>,
}

#[async_trait]
impl Form for PageParams {
    async fn form(&self) -> BsResult<FormBody> {
        json_body(self)
    }
}

impl ApiClient {
    /// List pages, optionally paged, sorted and filtered.
    pub async fn list_pages(&self, params: Option<&QueryParams>) -> BsResult<Vec<Page>> {
        let raw = self.get(&with_query("/pages", params)).await?;
        parse_multiple(&raw)
    }

    /// Get a single page including its HTML and Markdown content.
    pub async fn get_page(&self, id: i64) -> BsResult<PageDetailed> {
        let raw = self.get(&format!("/pages/{id}")).await?;
        parse_single(&raw)
    }

    /// Create a page.
    pub async fn create_page(&self, params: &PageParams) -> BsResult<Page> {
        let raw = self.post("/pages", params).await?;
        parse_single(&raw)
    }

    /// Update a page.
    pub async fn update_page(&self, id: i64, params: &PageParams) -> BsResult<Page> {
        let raw = self.put(&format!("/pages/{id}"), params).await?;
        parse_single(&raw)
    }

    /// Delete a page (moves it to the recycle bin).
    pub async fn delete_page(&self, id: i64) -> BsResult<bool> {
        self.delete(&format!("/pages/{id}"), &Blank).await?;
        Ok(true)
    }

    /// Export a page in the given format.
    pub async fn export_page(&self, id: i64, format: ExportFormat) -> BsResult<Vec<u8>> {
        self.export("pages", id, format).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_page_params_serialize() {
        let params = PageParams {
            chapter_id: 12,
            name: "Install".into(),
            markdown: "# Install".into(),
            ..PageParams::default()
        };
        let bytes = match params.form().await.unwrap() {
            FormBody::Json(bytes) => bytes,
            other => panic!("expected json body, got {other:?}"),
        };
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "chapter_id": 12, "name": "Install", "markdown": "# Install" })
        );
    }
}
