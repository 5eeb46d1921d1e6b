//! CLI command implementations.

pub mod attachments;
pub mod books;
pub mod chapters;
pub mod config;
pub mod pages;
pub mod recycle_bin;
pub mod search;
pub mod shelves;
pub mod users;

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use clap::Args;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use console::style;
use serde::Serialize;
use tracing::warn;

use bs_api::{ApiClient, ExportFormat, QueryParams};
use bs_core::config::AppConfig;
use bs_core::error::{BsError, BsResult};

/// Paging, sorting and filtering flags shared by every `list` subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Number of records to return.
    #[arg(short = 'n', long)]
    pub count: Option<u32>,
    /// Number of records to skip.
    #[arg(long)]
    pub offset: Option<u32>,
    /// Field to sort by (e.g. "name", "created_at").
    #[arg(short, long)]
    pub sort: Option<String>,
    /// Sort descending instead of ascending.
    #[arg(long)]
    pub desc: bool,
    /// Filter as FIELD=VALUE (e.g. "slug=handbook").
    #[arg(long)]
    pub filter: Option<String>,
}

impl ListArgs {
    /// Translate the flags into list parameters; `None` when nothing is set.
    pub fn query(&self) -> BsResult<Option<QueryParams>> {
        let mut q = QueryParams::new()
            .count(self.count.unwrap_or(0))
            .offset(self.offset.unwrap_or(0));
        if let Some(field) = &self.sort {
            q = q.sort(field.as_str(), self.desc);
        }
        if let Some(filter) = &self.filter {
            let (field, value) = parse_filter(filter)?;
            q = q.filter(field, value);
        }
        Ok((q != QueryParams::default()).then_some(q))
    }
}

/// Split a FIELD=VALUE filter argument.
pub fn parse_filter(arg: &str) -> BsResult<(&str, &str)> {
    match arg.split_once('=') {
        Some((field, value)) if !field.is_empty() && !value.is_empty() => Ok((field, value)),
        _ => Err(BsError::Config(format!(
            "filter must look like FIELD=VALUE, got {arg:?}"
        ))),
    }
}

/// Helper to create an API client from config.
pub fn create_api_client(config: &AppConfig) -> BsResult<ApiClient> {
    if !config.server.has_token() {
        warn!("no API token configured; requests will be unauthenticated");
    }
    ApiClient::new(&config.server)
}

/// A table with the standard CLI styling.
pub fn new_table<I, S>(header: I) -> Table
where
    I: IntoIterator<Item = S>,
    S: Into<comfy_table::Cell>,
{
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Pretty-print any serializable value as JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Print a success line after a mutating command.
pub fn print_done(format: crate::OutputFormat, message: &str, json: serde_json::Value) {
    match format {
        crate::OutputFormat::Json => print_json(&json),
        crate::OutputFormat::Text => println!("{} {}", style("✓").green().bold(), message),
    }
}

/// Write an export payload to `output`, or to stdout when no path is given.
pub fn write_export(
    bytes: &[u8],
    output: Option<&Path>,
    format: ExportFormat,
) -> BsResult<()> {
    match output {
        Some(path) => {
            std::fs::write(path, bytes)?;
            eprintln!(
                "{} wrote {} ({} export, {} bytes)",
                style("✓").green().bold(),
                path.display(),
                format,
                bytes.len()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Format an optional timestamp for table output.
pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Truncate a string to a maximum number of characters, appending an ellipsis if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Show `-` for empty strings in tables.
pub fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}
