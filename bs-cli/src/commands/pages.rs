//! Page commands.

use std::path::PathBuf;

use clap::Subcommand;
use console::style;

use bs_api::ExportFormat;
use bs_core::config::AppConfig;
use bs_core::error::BsResult;

use super::{format_date, new_table, or_dash, print_done, print_json, truncate, ListArgs};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum PagesAction {
    /// List pages.
    List(ListArgs),
    /// Show a page. Prints the Markdown source with --content.
    Get {
        /// Page id.
        id: i64,
        /// Print the page body after the metadata.
        #[arg(long)]
        content: bool,
    },
    /// Delete a page (moves it to the recycle bin).
    Delete {
        /// Page id.
        id: i64,
    },
    /// Export a page.
    Export {
        /// Page id.
        id: i64,
        /// Export format (html, pdf, markdown, plaintext).
        #[arg(short = 't', long = "type", default_value = "markdown")]
        kind: ExportFormat,
        /// Output file; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub async fn run(config: &AppConfig, action: PagesAction, format: OutputFormat) -> BsResult<()> {
    let api = super::create_api_client(config)?;

    match action {
        PagesAction::List(args) => {
            let pages = api.list_pages(args.query()?.as_ref()).await?;
            match format {
                OutputFormat::Json => print_json(&pages),
                OutputFormat::Text => {
                    if pages.is_empty() {
                        println!("No pages found.");
                        return Ok(());
                    }
                    let mut table = new_table(["ID", "Book", "Chapter", "Name", "Updated"]);
                    for p in &pages {
                        let chapter = if p.chapter_id == 0 { "-".to_string() } else { p.chapter_id.to_string() };
                        table.add_row(vec![
                            p.id.to_string(),
                            p.book_id.to_string(),
                            chapter,
                            truncate(&p.name, 40),
                            format_date(p.updated_at),
                        ]);
                    }
                    println!("{table}");
                }
            }
        }

        PagesAction::Get { id, content } => {
            let page = api.get_page(id).await?;
            match format {
                OutputFormat::Json => print_json(&page),
                OutputFormat::Text => {
                    println!("{}", style(&page.name).bold());
                    println!("  ID:        {}", page.id);
                    println!("  Book:      {}", page.book_id);
                    if page.chapter_id != 0 {
                        println!("  Chapter:   {}", page.chapter_id);
                    }
                    println!("  Slug:      {}", page.slug);
                    println!("  Revisions: {}", page.revision_count);
                    println!("  Updated:   {} by {}", format_date(page.updated_at), or_dash(&page.updated_by.name));
                    if page.draft {
                        println!("  {}", style("draft").yellow());
                    }
                    if content {
                        println!();
                        if page.markdown.is_empty() {
                            println!("{}", page.html);
                        } else {
                            println!("{}", page.markdown);
                        }
                    }
                }
            }
        }

        PagesAction::Delete { id } => {
            api.delete_page(id).await?;
            print_done(
                format,
                &format!("Deleted page {id}"),
                serde_json::json!({ "deleted": true, "id": id }),
            );
        }

        PagesAction::Export { id, kind, output } => {
            let bytes = api.export_page(id, kind).await?;
            super::write_export(&bytes, output.as_deref(), kind)?;
        }
    }

    Ok(())
}
