//! Shelf endpoints.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use bs_core::error::BsResult;
use bs_models::{Shelf, ShelfDetailed, TagParams};

use crate::client::ApiClient;
use crate::form::{json_body, Blank, Form, FormBody, MultipartForm};
use crate::query::{with_query, QueryParams};
use crate::response::{parse_multiple, parse_single};

/// Parameters for creating or updating a shelf.
///
/// `books` replaces the shelf's full book list, in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfParams {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub books: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagParams>,
    /// Local path of a cover image to upload.
    #[serde(skip)]
    pub image: Option<PathBuf>,
}

#[async_trait]
impl Form for ShelfParams {
    async fn form(&self) -> BsResult<FormBody> {
        match &self.image {
            Some(image) if !image.as_os_str().is_empty() => {
                // TODO: send tags as tags[n][name] / tags[n][value] fields
                MultipartForm::new()
                    .text("name", &self.name)
                    .ids("books", &self.books)
                    .text("description", &self.description)
                    .file("image", image)
                    .await
            }
            _ => json_body(self),
        }
    }
}

impl ApiClient {
    /// List shelves, optionally paged, sorted and filtered.
    pub async fn list_shelves(&self, params: Option<&QueryParams>) -> BsResult<Vec<Shelf>> {
        let raw = self.get(&with_query("/shelves", params)).await?;
        parse_multiple(&raw)
    }

    /// Get a single shelf with its books.
    pub async fn get_shelf(&self, id: i64) -> BsResult<ShelfDetailed> {
        let raw = self.get(&format!("/shelves/{id}")).await?;
        parse_single(&raw)
    }

    /// Create a shelf.
    pub async fn create_shelf(&self, params: &ShelfParams) -> BsResult<Shelf> {
        let raw = self.post("/shelves", params).await?;
        parse_single(&raw)
    }

    /// Update a shelf.
    pub async fn update_shelf(&self, id: i64, params: &ShelfParams) -> BsResult<Shelf> {
        let raw = self.put(&format!("/shelves/{id}"), params).await?;
        parse_single(&raw)
    }

    /// Delete a shelf. Books on it are kept.
    pub async fn delete_shelf(&self, id: i64) -> BsResult<bool> {
        self.delete(&format!("/shelves/{id}"), &Blank).await?;
        Ok(true)
    }
}
