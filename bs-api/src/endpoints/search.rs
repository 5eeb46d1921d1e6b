//! Search endpoint.

use bs_core::error::BsResult;
use bs_models::SearchResult;

use crate::client::ApiClient;
use crate::query::SearchParams;
use crate::response::{parse_list, parse_multiple, ListResponse};

impl ApiClient {
    /// Search books, chapters, pages and shelves.
    pub async fn search(&self, params: &SearchParams) -> BsResult<Vec<SearchResult>> {
        let raw = self.get(&params.apply("/search")).await?;
        parse_multiple(&raw)
    }

    /// Search and keep the server's total hit count alongside the page of results.
    pub async fn search_with_total(
        &self,
        params: &SearchParams,
    ) -> BsResult<ListResponse<SearchResult>> {
        let raw = self.get(&params.apply("/search")).await?;
        parse_list(&raw)
    }
}
