//! Recycle-bin entries.
//!
//! An entry wraps a deleted book, chapter, shelf or page. The payload is kept
//! as raw JSON and only decoded into a concrete record when a caller asks for
//! the variant matching the entry's `deletable_type` tag.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::book::Book;
use super::chapter::Chapter;
use super::de::null_default;
use super::page::Page;
use super::shelf::Shelf;

/// Content-kind tag of a recycle-bin entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeletableType {
    Book,
    Chapter,
    #[serde(rename = "bookshelf")]
    Shelf,
    Page,
    /// Any tag this client does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

impl DeletableType {
    /// Tag as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeletableType::Book => "book",
            DeletableType::Chapter => "chapter",
            DeletableType::Shelf => "bookshelf",
            DeletableType::Page => "page",
            DeletableType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DeletableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A deleted item, decoded according to its tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Deletable {
    Book(Book),
    Chapter(Chapter),
    Shelf(Shelf),
    Page(Page),
}

/// One entry in the recycle bin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecycleBinItem {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub deleted_by: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_default")]
    pub deletable_type: DeletableType,
    #[serde(deserialize_with = "null_default")]
    pub deletable_id: i64,
    pub deletable: serde_json::Value,
}

impl RecycleBinItem {
    /// The deleted book, if this entry holds one.
    pub fn book(&self) -> Option<Book> {
        self.decode_as(DeletableType::Book)
    }

    /// The deleted chapter, if this entry holds one.
    pub fn chapter(&self) -> Option<Chapter> {
        self.decode_as(DeletableType::Chapter)
    }

    /// The deleted shelf, if this entry holds one.
    pub fn shelf(&self) -> Option<Shelf> {
        self.decode_as(DeletableType::Shelf)
    }

    /// The deleted page, if this entry holds one.
    pub fn page(&self) -> Option<Page> {
        self.decode_as(DeletableType::Page)
    }

    /// Decode the payload into whichever variant the tag names.
    pub fn deletable(&self) -> Option<Deletable> {
        match self.deletable_type {
            DeletableType::Book => self.book().map(Deletable::Book),
            DeletableType::Chapter => self.chapter().map(Deletable::Chapter),
            DeletableType::Shelf => self.shelf().map(Deletable::Shelf),
            DeletableType::Page => self.page().map(Deletable::Page),
            DeletableType::Unknown => None,
        }
    }

    /// Tag mismatch and undecodable payloads both yield `None`.
    fn decode_as<T: DeserializeOwned>(&self, kind: DeletableType) -> Option<T> {
        if self.deletable_type != kind {
            return None;
        }
        match serde_json::from_value(self.deletable.clone()) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("recycle bin item {} is not a valid {:?}: {e}", self.id, kind);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(kind: &str, payload: serde_json::Value) -> RecycleBinItem {
        serde_json::from_value(serde_json::json!({
            "id": 18,
            "deleted_by": 1,
            "deletable_type": kind,
            "deletable_id": 1000,
            "deletable": payload,
        }))
        .unwrap()
    }

    #[test]
    fn test_matching_tag_decodes() {
        let entry = item("book", serde_json::json!({"id": 1000, "name": "Old Book"}));
        let book = entry.book().expect("book payload");
        assert_eq!(book.name, "Old Book");
        assert_eq!(entry.deletable(), Some(Deletable::Book(book)));
    }

    #[test]
    fn test_bookshelf_tag_maps_to_shelf() {
        let entry = item("bookshelf", serde_json::json!({"id": 5, "name": "Archive"}));
        assert_eq!(entry.deletable_type, DeletableType::Shelf);
        assert_eq!(entry.deletable_type.to_string(), "bookshelf");
        assert_eq!(entry.shelf().unwrap().name, "Archive");
    }

    #[test]
    fn test_mismatched_tag_is_none() {
        let entry = item("page", serde_json::json!({"id": 9, "name": "A page"}));
        assert!(entry.book().is_none());
        assert!(entry.chapter().is_none());
        assert!(entry.page().is_some());
    }

    #[test]
    fn test_malformed_payload_is_none() {
        let entry = item("chapter", serde_json::json!("not an object"));
        assert!(entry.chapter().is_none());
        assert!(entry.deletable().is_none());
    }

    #[test]
    fn test_unknown_tag() {
        let entry = item("revision", serde_json::json!({"id": 1}));
        assert_eq!(entry.deletable_type, DeletableType::Unknown);
        assert!(entry.deletable().is_none());
    }
}
