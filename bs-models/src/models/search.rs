//! Search results and content kinds.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Tag;
use super::de::null_default;

/// Kind of content an entity or search hit represents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Book,
    Chapter,
    Page,
    Bookshelf,
}

impl ContentType {
    /// Name used on the wire and in the search grammar.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Book => "book",
            ContentType::Chapter => "chapter",
            ContentType::Page => "page",
            ContentType::Bookshelf => "bookshelf",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Highlighted snippet of a search hit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewHtml {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub content: String,
}

/// One hit from the search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub book_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub chapter_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_default")]
    pub content_type: ContentType,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub preview_html: PreviewHtml,
    #[serde(deserialize_with = "null_default")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "null_default")]
    pub draft: bool,
    #[serde(deserialize_with = "null_default")]
    pub template: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&ContentType::Bookshelf).unwrap(),
            "\"bookshelf\""
        );
        let parsed: ContentType = serde_json::from_str("\"page\"").unwrap();
        assert_eq!(parsed, ContentType::Page);
        assert_eq!(ContentType::Chapter.to_string(), "chapter");
    }

    #[test]
    fn test_search_result_decodes_type() {
        let json = r#"{"id":84,"book_id":1,"slug":"a-chapter","name":"A Chapter","type":"chapter","preview_html":{"name":"A <strong>Chapter</strong>","content":""},"tags":[]}"#;
        let hit: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(hit.content_type, ContentType::Chapter);
        assert_eq!(hit.preview_html.name, "A <strong>Chapter</strong>");
    }
}
