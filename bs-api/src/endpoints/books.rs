//! Book endpoints.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use bs_core::error::BsResult;
use bs_models::{Book, BookDetailed, TagParams};

use super::ExportFormat;
use crate::client::ApiClient;
use crate::form::{json_body, Blank, Form, FormBody, MultipartForm};
use crate::query::{with_query, QueryParams};
use crate::response::{parse_multiple, parse_single};

/// Parameters for creating or updating a book.
///
/// Setting `image` switches the request to a multipart upload of the cover.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookParams {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagParams>,
    /// Local path of a cover image to upload.
    #[serde(skip)]
    pub image: Option<PathBuf>,
}

#[async_trait]
impl Form for BookParams {
    async fn form(&self) -> BsResult<FormBody> {
        match &self.image {
            Some(image) if !image.as_os_str().is_empty() => {
                // TODO: send tags as tags[n][name] / tags[n][value] fields
                MultipartForm::new()
                    .text("name", &self.name)
                    .text("description", &self.description)
                    .file("image", image)
                    .await
            }
            _ => json_body(self),
        }
    }
}

impl ApiClient {
    /// List books, optionally paged, sorted and filtered.
    pub async fn list_books(&self, params: Option<&QueryParams>) -> BsResult<Vec<Book>> {
        let raw = self.get(&with_query("/books", params)).await?;
        parse_multiple(&raw)
    }

    /// Get a single book with tags, cover and actor details.
    pub async fn get_book(&self, id: i64) -> BsResult<BookDetailed> {
        let raw = self.get(&format!("/books/{id}")).await?;
        parse_single(&raw)
    }

    /// Create a book.
    pub async fn create_book(&self, params: &BookParams) -> BsResult<Book> {
        let raw = self.post("/books", params).await?;
        parse_single(&raw)
    }

    /// Update a book.
    pub async fn update_book(&self, id: i64, params: &BookParams) -> BsResult<Book> {
        let raw = self.put(&format!("/books/{id}"), params).await?;
        parse_single(&raw)
    }

    /// Delete a book (moves it to the recycle bin).
    pub async fn delete_book(&self, id: i64) -> BsResult<bool> {
        self.delete(&format!("/books/{id}"), &Blank).await?;
        Ok(true)
    }

    /// Export a book in the given format.
    pub async fn export_book(&self, id: i64, format: ExportFormat) -> BsResult<Vec<u8>> {
        self.export("books", id, format).await
    }
}
