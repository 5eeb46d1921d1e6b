//! Request body encoding.
//!
//! Every parameter type implements [`Form`], rendering itself either as a
//! JSON document or, when it carries a file to upload, as a multipart form.
//! Exactly one encoding is chosen per call. [`Blank`] renders no body at all
//! for parameterless GET and DELETE calls.

use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Serialize;
use tracing::debug;

use bs_core::constants::mime;
use bs_core::error::{BsError, BsResult};

/// An encoded request body.
#[derive(Debug)]
pub enum FormBody {
    /// No body and no content type.
    Empty,
    /// `application/json` document.
    Json(Vec<u8>),
    /// `multipart/form-data` with one file part.
    Multipart(MultipartBody),
}

/// A finished multipart form plus a record of what went into it.
#[derive(Debug)]
pub struct MultipartBody {
    /// The form handed to the HTTP client.
    pub form: multipart::Form,
    /// Names of the scalar fields in insertion order (repeated for list fields).
    pub fields: Vec<String>,
    /// Name of the file part.
    pub file_field: String,
    /// Base name sent for the file part.
    pub file_name: String,
}

impl FormBody {
    /// The content type to send, or `None` for an empty body.
    pub fn content_type(&self) -> Option<String> {
        match self {
            FormBody::Empty => None,
            FormBody::Json(_) => Some(mime::JSON.to_string()),
            FormBody::Multipart(body) => Some(format!(
                "multipart/form-data; boundary={}",
                body.form.boundary()
            )),
        }
    }

    /// Whether this body is a multipart upload.
    pub fn is_multipart(&self) -> bool {
        matches!(self, FormBody::Multipart(_))
    }
}

/// A typed parameter set that can render itself as a request body.
#[async_trait]
pub trait Form: Send + Sync {
    /// Encode the parameters. Fails before any network activity on I/O or
    /// serialization errors.
    async fn form(&self) -> BsResult<FormBody>;
}

/// Parameter type for calls that send no body.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blank;

#[async_trait]
impl Form for Blank {
    async fn form(&self) -> BsResult<FormBody> {
        Ok(FormBody::Empty)
    }
}

/// Encode a value as a JSON body.
pub fn json_body<T: Serialize + ?Sized>(value: &T) -> BsResult<FormBody> {
    serde_json::to_vec(value)
        .map(FormBody::Json)
        .map_err(|e| BsError::Serialization(format!("failed to encode request body: {e}")))
}

/// Builder for multipart bodies. Empty strings and zero ids are skipped so
/// the form mirrors the omit-empty JSON encoding.
#[derive(Debug)]
pub struct MultipartForm {
    form: multipart::Form,
    fields: Vec<String>,
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}

impl MultipartForm {
    pub fn new() -> Self {
        Self {
            form: multipart::Form::new(),
            fields: Vec::new(),
        }
    }

    /// Add a text field unless `value` is empty.
    pub fn text(mut self, name: &str, value: &str) -> Self {
        if value.is_empty() {
            return self;
        }
        self.form = self.form.text(name.to_string(), value.to_string());
        self.fields.push(name.to_string());
        self
    }

    /// Add a numeric field unless `value` is zero.
    pub fn id(self, name: &str, value: i64) -> Self {
        if value == 0 {
            return self;
        }
        self.text(name, &value.to_string())
    }

    /// Add one field per value, all under the same name.
    pub fn ids(mut self, name: &str, values: &[i64]) -> Self {
        for v in values {
            self = self.text(name, &v.to_string());
        }
        self
    }

    /// Read `path` and attach it as the file part, finishing the form.
    ///
    /// Only the base name of the path is sent. The file is read fully and
    /// closed before this returns.
    pub async fn file(self, field: &str, path: &Path) -> BsResult<FormBody> {
        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                BsError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("upload path has no file name: {}", path.display()),
                ))
            })?;

        let part = multipart::Part::bytes(data)
            .file_name(file_name.clone())
            .mime_str(mime::OCTET_STREAM)
            .map_err(|e| BsError::Serialization(format!("invalid mime type: {e}")))?;

        debug!(
            "multipart body: fields={:?}, {field}={file_name}",
            self.fields
        );

        Ok(FormBody::Multipart(MultipartBody {
            form: self.form.part(field.to_string(), part),
            fields: self.fields,
            file_field: field.to_string(),
            file_name,
        }))
    }
}
