//! BookStack Models - typed resource records returned by the REST API.
//!
//! Every resource comes in a summary shape (list endpoints, create/update
//! responses) and a detailed shape (single-item fetch) that adds relational
//! fields such as tags, covers and creator/updater/owner references.
//! Timestamps and actor ids are always assigned by the server.

pub mod models;

// Re-export key types
pub use models::attachment::{Attachment, AttachmentDetailed, AttachmentLinks};
pub use models::book::{Book, BookDetailed};
pub use models::chapter::{Chapter, ChapterDetailed, ChapterPage};
pub use models::common::{Cover, Tag, TagParams, UserRef};
pub use models::page::{Page, PageDetailed};
pub use models::recycle_bin::{Deletable, DeletableType, RecycleBinItem};
pub use models::search::{ContentType, PreviewHtml, SearchResult};
pub use models::shelf::{Shelf, ShelfDetailed};
pub use models::user::{Role, User};
