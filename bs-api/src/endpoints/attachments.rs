//! Attachment endpoints.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use bs_core::error::BsResult;
use bs_models::{Attachment, AttachmentDetailed};

use super::is_zero;
use crate::client::ApiClient;
use crate::form::{json_body, Blank, Form, FormBody, MultipartForm};
use crate::query::{with_query, QueryParams};
use crate::response::{parse_multiple, parse_single};

/// Parameters for creating or updating an attachment.
///
/// An attachment is either an uploaded `file` or an external `link`;
/// `uploaded_to` is the id of the page it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachmentParams {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub uploaded_to: i64,
    /// Local path of a file to upload.
    #[serde(skip)]
    pub file: Option<PathBuf>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub link: String,
}

#[async_trait]
impl Form for AttachmentParams {
    async fn form(&self) -> BsResult<FormBody> {
        match &self.file {
            Some(file) if !file.as_os_str().is_empty() => {
                MultipartForm::new()
                    .text("name", &self.name)
                    .text("link", &self.link)
                    .id("uploaded_to", self.uploaded_to)
                    .file("file", file)
                    .await
            }
            _ => json_body(self),
        }
    }
}

impl ApiClient {
    /// List attachments, optionally paged, sorted and filtered.
    pub async fn list_attachments(
        &self,
        params: Option<&QueryParams>,
    ) -> BsResult<Vec<Attachment>> {
        let raw = self.get(&with_query("/attachments", params)).await?;
        parse_multiple(&raw)
    }

    /// Get a single attachment including its content and embed links.
    pub async fn get_attachment(&self, id: i64) -> BsResult<AttachmentDetailed> {
        let raw = self.get(&format!("/attachments/{id}")).await?;
        parse_single(&raw)
    }

    /// Create an attachment, uploading `file` when set.
    pub async fn create_attachment(&self, params: &AttachmentParams) -> BsResult<Attachment> {
        let raw = self.post("/attachments", params).await?;
        parse_single(&raw)
    }

    /// Update an attachment.
    pub async fn update_attachment(
        &self,
        id: i64,
        params: &AttachmentParams,
    ) -> BsResult<Attachment> {
        let raw = self.put(&format!("/attachments/{id}"), params).await?;
        parse_single(&raw)
    }

    /// Delete an attachment.
    pub async fn delete_attachment(&self, id: i64) -> BsResult<bool> {
        self.delete(&format!("/attachments/{id}"), &Blank).await?;
        Ok(true)
    }
}
