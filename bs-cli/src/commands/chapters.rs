//! Chapter commands.

use std::path::PathBuf;

use clap::Subcommand;
use console::style;

use bs_api::ExportFormat;
use bs_core::config::AppConfig;
use bs_core::error::BsResult;

use super::{format_date, new_table, or_dash, print_done, print_json, truncate, ListArgs};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum ChaptersAction {
    /// List chapters.
    List(ListArgs),
    /// Show a chapter and its pages.
    Get {
        /// Chapter id.
        id: i64,
    },
    /// Delete a chapter (moves it to the recycle bin).
    Delete {
        /// Chapter id.
        id: i64,
    },
    /// Export a chapter.
    Export {
        /// Chapter id.
        id: i64,
        /// Export format (html, pdf, markdown, plaintext).
        #[arg(short = 't', long = "type", default_value = "markdown")]
        kind: ExportFormat,
        /// Output file; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub async fn run(config: &AppConfig, action: ChaptersAction, format: OutputFormat) -> BsResult<()> {
    let api = super::create_api_client(config)?;

    match action {
        ChaptersAction::List(args) => {
            let chapters = api.list_chapters(args.query()?.as_ref()).await?;
            match format {
                OutputFormat::Json => print_json(&chapters),
                OutputFormat::Text => {
                    if chapters.is_empty() {
                        println!("No chapters found.");
                        return Ok(());
                    }
                    let mut table = new_table(["ID", "Book", "Name", "Slug", "Updated"]);
                    for c in &chapters {
                        table.add_row(vec![
                            c.id.to_string(),
                            c.book_id.to_string(),
                            truncate(&c.name, 40),
                            c.slug.clone(),
                            format_date(c.updated_at),
                        ]);
                    }
                    println!("{table}");
                }
            }
        }

        ChaptersAction::Get { id } => {
            let chapter = api.get_chapter(id).await?;
            match format {
                OutputFormat::Json => print_json(&chapter),
                OutputFormat::Text => {
                    println!("{}", style(&chapter.name).bold());
                    println!("  ID:          {}", chapter.id);
                    println!("  Book:        {}", chapter.book_id);
                    println!("  Slug:        {}", chapter.slug);
                    println!("  Description: {}", or_dash(&chapter.description));
                    println!("  Updated:     {} by {}", format_date(chapter.updated_at), or_dash(&chapter.updated_by.name));
                    if !chapter.pages.is_empty() {
                        println!();
                        let mut table = new_table(["Page", "Name", "Revisions", "Draft"]);
                        for p in &chapter.pages {
                            table.add_row(vec![
                                p.id.to_string(),
                                truncate(&p.name, 50),
                                p.revision_count.to_string(),
                                if p.draft { "yes".to_string() } else { "-".to_string() },
                            ]);
                        }
                        println!("{table}");
                    }
                }
            }
        }

        ChaptersAction::Delete { id } => {
            api.delete_chapter(id).await?;
            print_done(
                format,
                &format!("Deleted chapter {id}"),
                serde_json::json!({ "deleted": true, "id": id }),
            );
        }

        ChaptersAction::Export { id, kind, output } => {
            let bytes = api.export_chapter(id, kind).await?;
            super::write_export(&bytes, output.as_deref(), kind)?;
        }
    }

    Ok(())
}
