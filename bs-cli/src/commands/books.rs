//! Book commands.

use std::path::PathBuf;

use clap::Subcommand;
use console::style;

use bs_api::{BookParams, ExportFormat};
use bs_core::config::AppConfig;
use bs_core::error::BsResult;
use bs_models::TagParams;

use super::{format_date, new_table, or_dash, print_done, print_json, truncate, ListArgs};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum BooksAction {
    /// List books.
    List(ListArgs),
    /// Show a book with its tags and cover.
    Get {
        /// Book id.
        id: i64,
    },
    /// Create a book.
    Create {
        /// Book name.
        name: String,
        /// Plain-text description.
        #[arg(short, long, default_value = "")]
        description: String,
        /// Tag as NAME or NAME=VALUE (repeatable).
        #[arg(short, long = "tag")]
        tags: Vec<String>,
        /// Cover image to upload.
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Delete a book (moves it to the recycle bin).
    Delete {
        /// Book id.
        id: i64,
    },
    /// Export a book.
    Export {
        /// Book id.
        id: i64,
        /// Export format (html, pdf, markdown, plaintext).
        #[arg(short = 't', long = "type", default_value = "markdown")]
        kind: ExportFormat,
        /// Output file; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Parse NAME or NAME=VALUE tag arguments.
pub fn parse_tags(args: &[String]) -> Vec<TagParams> {
    args.iter()
        .map(|arg| match arg.split_once('=') {
            Some((name, value)) => TagParams::new(name, value),
            None => TagParams::new(arg.as_str(), ""),
        })
        .collect()
}

pub async fn run(config: &AppConfig, action: BooksAction, format: OutputFormat) -> BsResult<()> {
    let api = super::create_api_client(config)?;

    match action {
        BooksAction::List(args) => {
            let books = api.list_books(args.query()?.as_ref()).await?;
            match format {
                OutputFormat::Json => print_json(&books),
                OutputFormat::Text => {
                    if books.is_empty() {
                        println!("No books found.");
                        return Ok(());
                    }
                    let mut table = new_table(["ID", "Name", "Slug", "Description", "Updated"]);
                    for b in &books {
                        table.add_row(vec![
                            b.id.to_string(),
                            truncate(&b.name, 40),
                            b.slug.clone(),
                            truncate(or_dash(&b.description), 40),
                            format_date(b.updated_at),
                        ]);
                    }
                    println!("{table}");
                }
            }
        }

        BooksAction::Get { id } => {
            let book = api.get_book(id).await?;
            match format {
                OutputFormat::Json => print_json(&book),
                OutputFormat::Text => {
                    println!("{}", style(&book.name).bold());
                    println!("  ID:          {}", book.id);
                    println!("  Slug:        {}", book.slug);
                    println!("  Description: {}", or_dash(&book.description));
                    println!("  Created:     {} by {}", format_date(book.created_at), or_dash(&book.created_by.name));
                    println!("  Updated:     {} by {}", format_date(book.updated_at), or_dash(&book.updated_by.name));
                    println!("  Owner:       {}", or_dash(&book.owned_by.name));
                    if let Some(cover) = &book.cover {
                        println!("  Cover:       {}", cover.url);
                    }
                    if !book.tags.is_empty() {
                        let tags: Vec<String> = book
                            .tags
                            .iter()
                            .map(|t| if t.value.is_empty() { t.name.clone() } else { format!("{}={}", t.name, t.value) })
                            .collect();
                        println!("  Tags:        {}", tags.join(", "));
                    }
                }
            }
        }

        BooksAction::Create { name, description, tags, image } => {
            let params = BookParams {
                name,
                description,
                tags: parse_tags(&tags),
                image,
            };
            let book = api.create_book(&params).await?;
            match format {
                OutputFormat::Json => print_json(&book),
                OutputFormat::Text => println!(
                    "{} Created book {} ({})",
                    style("✓").green().bold(),
                    style(&book.name).bold(),
                    book.id
                ),
            }
        }

        BooksAction::Delete { id } => {
            api.delete_book(id).await?;
            print_done(
                format,
                &format!("Deleted book {id}"),
                serde_json::json!({ "deleted": true, "id": id }),
            );
        }

        BooksAction::Export { id, kind, output } => {
            let bytes = api.export_book(id, kind).await?;
            super::write_export(&bytes, output.as_deref(), kind)?;
        }
    }

    Ok(())
}
