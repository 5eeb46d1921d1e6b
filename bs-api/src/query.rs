//! Query-string builders.
//!
//! Two independent grammars:
//! - [`QueryParams`] maps list paging, sorting and filtering onto plain URL
//!   query keys (`count`, `offset`, `sort`, `filter[<field>]`).
//! - [`SearchParams`] folds structured search filters into one composite
//!   `query` value made of `{tag:value}` clauses, with `page` and `count`
//!   as separate keys.
//!
//! Keys are emitted in sorted order and form-urlencoded.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use url::form_urlencoded;

use bs_core::constants::SEARCH_DATE_FORMAT;
use bs_models::ContentType;

/// Paging, sorting and filtering for list endpoints.
///
/// Every field is optional; zero and empty values are left out of the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub count: u32,
    pub offset: u32,
    pub sort_field: String,
    pub sort_descending: bool,
    pub filter_field: String,
    pub filter_value: String,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the number of records returned.
    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Skip the first `offset` records.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Sort by `field`, ascending unless `descending`.
    pub fn sort(mut self, field: impl Into<String>, descending: bool) -> Self {
        self.sort_field = field.into();
        self.sort_descending = descending;
        self
    }

    /// Only return records whose `field` matches `value`.
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter_field = field.into();
        self.filter_value = value.into();
        self
    }

    /// The populated query pairs, in key order.
    pub fn pairs(&self) -> BTreeMap<String, String> {
        let mut pairs = BTreeMap::new();

        if self.count != 0 {
            pairs.insert("count".to_string(), self.count.to_string());
        }
        if self.offset != 0 {
            pairs.insert("offset".to_string(), self.offset.to_string());
        }
        if !self.sort_field.is_empty() {
            let direction = if self.sort_descending { '-' } else { '+' };
            pairs.insert("sort".to_string(), format!("{direction}{}", self.sort_field));
        }
        // A filter needs both halves; a lone field or value is dropped.
        if !self.filter_field.is_empty() && !self.filter_value.is_empty() {
            pairs.insert(
                format!("filter[{}]", self.filter_field),
                self.filter_value.clone(),
            );
        }

        pairs
    }

    /// Append the populated fields to `path`.
    pub fn apply(&self, path: &str) -> String {
        append_query(path, &self.pairs())
    }
}

/// Append optional list parameters to `path`; `None` leaves the path unchanged.
pub fn with_query(path: &str, params: Option<&QueryParams>) -> String {
    match params {
        Some(q) => q.apply(path),
        None => path.to_string(),
    }
}

/// Structured filters for the search endpoint.
///
/// `Option` fields are emitted when `Some`; flags only when `true`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    // Time filters
    pub updated_after: Option<NaiveDate>,
    pub updated_before: Option<NaiveDate>,
    pub created_after: Option<NaiveDate>,
    pub created_before: Option<NaiveDate>,

    // User filters; an empty string means the token's own user
    pub updated_by: Option<String>,
    pub created_by: Option<String>,
    pub owned_by: Option<String>,

    // Content filters
    pub in_name: Option<String>,
    pub in_body: Option<String>,

    // Option filters
    pub is_restricted: bool,
    pub viewed_by_me: bool,
    pub not_viewed_by_me: bool,
    pub types: Vec<ContentType>,

    /// Free-text terms placed before the filter clauses.
    pub query: String,
    pub page: Option<u32>,
    pub count: Option<u32>,
}

impl SearchParams {
    /// Search for free text.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Build the composite `query` value.
    ///
    /// Clause order is fixed: free text, dates, actors, name/body filters,
    /// flags, then the type set.
    pub fn query_string(&self) -> String {
        let mut clauses: Vec<String> = Vec::new();

        if !self.query.is_empty() {
            clauses.push(self.query.clone());
        }

        if let Some(d) = self.updated_after {
            clauses.push(date_clause("updated_after", d));
        }
        if let Some(d) = self.updated_before {
            clauses.push(date_clause("updated_before", d));
        }
        // The created-date filters go out under the updated_* tags.
        if let Some(d) = self.created_after {
            clauses.push(date_clause("updated_after", d));
        }
        if let Some(d) = self.created_before {
            clauses.push(date_clause("updated_before", d));
        }

        if let Some(by) = &self.updated_by {
            clauses.push(actor_clause("updated_by", by));
        }
        if let Some(by) = &self.created_by {
            clauses.push(actor_clause("created_by", by));
        }
        if let Some(by) = &self.owned_by {
            clauses.push(actor_clause("owned_by", by));
        }

        if let Some(v) = &self.in_name {
            clauses.push(format!("{{in_name:{v}}}"));
        }
        if let Some(v) = &self.in_body {
            clauses.push(format!("{{in_body:{v}}}"));
        }

        if self.viewed_by_me {
            clauses.push("{viewed_by_me}".to_string());
        }
        if self.not_viewed_by_me {
            clauses.push("{not_viewed_by_me}".to_string());
        }
        if self.is_restricted {
            clauses.push("{is_restricted}".to_string());
        }

        if !self.types.is_empty() {
            let types: Vec<&str> = self.types.iter().map(ContentType::as_str).collect();
            clauses.push(format!("{{type:{}}}", types.join("|")));
        }

        clauses.join(" ")
    }

    /// The query pairs, in key order. `query` is always present.
    pub fn pairs(&self) -> BTreeMap<String, String> {
        let mut pairs = BTreeMap::new();
        if let Some(page) = self.page {
            pairs.insert("page".to_string(), page.to_string());
        }
        if let Some(count) = self.count {
            pairs.insert("count".to_string(), count.to_string());
        }
        pairs.insert("query".to_string(), self.query_string());
        pairs
    }

    /// Append the search parameters to `path`.
    pub fn apply(&self, path: &str) -> String {
        append_query(path, &self.pairs())
    }
}

fn date_clause(tag: &str, date: NaiveDate) -> String {
    format!("{{{tag}:{}}}", date.format(SEARCH_DATE_FORMAT))
}

fn actor_clause(tag: &str, by: &str) -> String {
    let by = if by.is_empty() { "me" } else { by };
    format!("{{{tag}:{by}}}")
}

fn append_query(path: &str, pairs: &BTreeMap<String, String>) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    let encoded = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter())
        .finish();
    format!("{path}?{encoded}")
}
