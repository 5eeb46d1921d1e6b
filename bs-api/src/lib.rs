//! BookStack API - HTTP client for the BookStack REST API.
//!
//! Every call runs the same pipeline: wait for a rate-limit slot, encode the
//! typed parameters as JSON or multipart, send the request with token
//! authentication, buffer the response and decode it as a single resource,
//! a `{data, total, error}` list envelope, or a raw export payload.

pub mod client;
pub mod endpoints;
pub mod form;
pub mod query;
pub mod rate_limit;
pub mod response;

// Re-export key types
pub use client::{ApiClient, ApiClientBuilder};
pub use endpoints::attachments::AttachmentParams;
pub use endpoints::books::BookParams;
pub use endpoints::chapters::ChapterParams;
pub use endpoints::pages::PageParams;
pub use endpoints::shelves::ShelfParams;
pub use endpoints::users::{UserDeleteParams, UserParams};
pub use endpoints::ExportFormat;
pub use form::{Blank, Form, FormBody};
pub use query::{QueryParams, SearchParams};
pub use rate_limit::RateLimiter;
pub use response::{parse_list, parse_multiple, parse_single, Envelope, ListResponse};
