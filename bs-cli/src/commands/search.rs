//! Search command.

use chrono::NaiveDate;
use clap::Args;
use console::style;

use bs_api::SearchParams;
use bs_core::config::AppConfig;
use bs_core::error::BsResult;
use bs_models::ContentType;

use super::{new_table, print_json, truncate};
use crate::OutputFormat;

/// Content kinds accepted by `--type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SearchType {
    Book,
    Chapter,
    Page,
    Shelf,
}

impl From<SearchType> for ContentType {
    fn from(t: SearchType) -> Self {
        match t {
            SearchType::Book => ContentType::Book,
            SearchType::Chapter => ContentType::Chapter,
            SearchType::Page => ContentType::Page,
            SearchType::Shelf => ContentType::Bookshelf,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct SearchArgs {
    /// Free-text search terms.
    pub terms: Vec<String>,
    /// Restrict to content kinds (comma separated).
    #[arg(short = 't', long = "type", value_delimiter = ',')]
    pub types: Vec<SearchType>,
    /// Match text in the item name.
    #[arg(long)]
    pub in_name: Option<String>,
    /// Match text in the item body.
    #[arg(long)]
    pub in_body: Option<String>,
    /// Updated on or after this date (YYYY-MM-DD).
    #[arg(long)]
    pub updated_after: Option<NaiveDate>,
    /// Updated on or before this date (YYYY-MM-DD).
    #[arg(long)]
    pub updated_before: Option<NaiveDate>,
    /// Created on or after this date (YYYY-MM-DD).
    #[arg(long)]
    pub created_after: Option<NaiveDate>,
    /// Created on or before this date (YYYY-MM-DD).
    #[arg(long)]
    pub created_before: Option<NaiveDate>,
    /// Last updated by this user slug ("me" for yourself).
    #[arg(long)]
    pub updated_by: Option<String>,
    /// Created by this user slug ("me" for yourself).
    #[arg(long)]
    pub created_by: Option<String>,
    /// Owned by this user slug ("me" for yourself).
    #[arg(long)]
    pub owned_by: Option<String>,
    /// Only items with custom permissions.
    #[arg(long)]
    pub restricted: bool,
    /// Only items you have viewed.
    #[arg(long, conflicts_with = "not_viewed")]
    pub viewed: bool,
    /// Only items you have not viewed.
    #[arg(long)]
    pub not_viewed: bool,
    /// Result page (1-based).
    #[arg(short, long)]
    pub page: Option<u32>,
    /// Results per page.
    #[arg(short = 'n', long)]
    pub count: Option<u32>,
}

impl SearchArgs {
    pub fn params(&self) -> SearchParams {
        SearchParams {
            updated_after: self.updated_after,
            updated_before: self.updated_before,
            created_after: self.created_after,
            created_before: self.created_before,
            updated_by: self.updated_by.clone(),
            created_by: self.created_by.clone(),
            owned_by: self.owned_by.clone(),
            in_name: self.in_name.clone(),
            in_body: self.in_body.clone(),
            is_restricted: self.restricted,
            viewed_by_me: self.viewed,
            not_viewed_by_me: self.not_viewed,
            types: self.types.iter().copied().map(ContentType::from).collect(),
            query: self.terms.join(" "),
            page: self.page,
            count: self.count,
        }
    }
}

pub async fn run(config: &AppConfig, args: SearchArgs, format: OutputFormat) -> BsResult<()> {
    let api = super::create_api_client(config)?;
    let params = args.params();
    let results = api.search_with_total(&params).await?;

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "query": params.query_string(),
            "total": results.total,
            "data": results.data,
        })),
        OutputFormat::Text => {
            if results.data.is_empty() {
                println!("No results for {}", style(params.query_string()).italic());
                return Ok(());
            }
            let mut table = new_table(["Type", "ID", "Name", "URL"]);
            for r in &results.data {
                table.add_row(vec![
                    r.content_type.to_string(),
                    r.id.to_string(),
                    truncate(&r.name, 40),
                    r.url.clone(),
                ]);
            }
            println!("{table}");
            println!(
                "\n{} of {} results",
                results.data.len(),
                results.total
            );
        }
    }

    Ok(())
}
