//! API endpoint modules organized by resource.
//!
//! Each module defines the parameter types for its resource and adds typed
//! methods to [`ApiClient`](crate::client::ApiClient).

pub mod attachments;
pub mod books;
pub mod chapters;
pub mod pages;
pub mod recycle_bin;
pub mod search;
pub mod shelves;
pub mod users;

use std::fmt;
use std::str::FromStr;

use bs_core::error::{BsError, BsResult};

use crate::client::ApiClient;

/// Formats offered by the book, chapter and page export endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Html,
    Pdf,
    Markdown,
    Plaintext,
}

impl ExportFormat {
    /// Path segment after `/export/`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Markdown => "markdown",
            ExportFormat::Plaintext => "plaintext",
        }
    }

    /// Conventional file extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Markdown => "md",
            ExportFormat::Plaintext => "txt",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = BsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(ExportFormat::Html),
            "pdf" => Ok(ExportFormat::Pdf),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "plaintext" | "text" | "txt" => Ok(ExportFormat::Plaintext),
            other => Err(BsError::Config(format!("unknown export format: {other}"))),
        }
    }
}

impl ApiClient {
    /// Fetch an export of `<resource>/<id>` as raw bytes.
    pub(crate) async fn export(
        &self,
        resource: &str,
        id: i64,
        format: ExportFormat,
    ) -> BsResult<Vec<u8>> {
        self.get(&format!("/{resource}/{id}/export/{format}")).await
    }
}

pub(crate) fn is_zero(v: &i64) -> bool {
    *v == 0
}

pub(crate) fn is_false(v: &bool) -> bool {
    !*v
}
