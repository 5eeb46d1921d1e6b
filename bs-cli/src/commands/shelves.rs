//! Shelf commands.

use std::path::PathBuf;

use clap::Subcommand;
use console::style;

use bs_api::ShelfParams;
use bs_core::config::AppConfig;
use bs_core::error::BsResult;

use super::books::parse_tags;
use super::{format_date, new_table, or_dash, print_done, print_json, truncate, ListArgs};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum ShelvesAction {
    /// List shelves.
    List(ListArgs),
    /// Show a shelf and the books on it.
    Get {
        /// Shelf id.
        id: i64,
    },
    /// Create a shelf.
    Create {
        /// Shelf name.
        name: String,
        /// Plain-text description.
        #[arg(short, long, default_value = "")]
        description: String,
        /// Book ids to place on the shelf, in order (comma separated).
        #[arg(short, long, value_delimiter = ',')]
        books: Vec<i64>,
        /// Tag as NAME or NAME=VALUE (repeatable).
        #[arg(short, long = "tag")]
        tags: Vec<String>,
        /// Cover image to upload.
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Delete a shelf. The books on it are kept.
    Delete {
        /// Shelf id.
        id: i64,
    },
}

pub async fn run(config: &AppConfig, action: ShelvesAction, format: OutputFormat) -> BsResult<()> {
    let api = super::create_api_client(config)?;

    match action {
        ShelvesAction::List(args) => {
            let shelves = api.list_shelves(args.query()?.as_ref()).await?;
            match format {
                OutputFormat::Json => print_json(&shelves),
                OutputFormat::Text => {
                    if shelves.is_empty() {
                        println!("No shelves found.");
                        return Ok(());
                    }
                    let mut table = new_table(["ID", "Name", "Slug", "Description", "Updated"]);
                    for s in &shelves {
                        table.add_row(vec![
                            s.id.to_string(),
                            truncate(&s.name, 40),
                            s.slug.clone(),
                            truncate(or_dash(&s.description), 40),
                            format_date(s.updated_at),
                        ]);
                    }
                    println!("{table}");
                }
            }
        }

        ShelvesAction::Get { id } => {
            let shelf = api.get_shelf(id).await?;
            match format {
                OutputFormat::Json => print_json(&shelf),
                OutputFormat::Text => {
                    println!("{}", style(&shelf.name).bold());
                    println!("  ID:          {}", shelf.id);
                    println!("  Slug:        {}", shelf.slug);
                    println!("  Description: {}", or_dash(&shelf.description));
                    println!("  Owner:       {}", or_dash(&shelf.owned_by.name));
                    if let Some(cover) = &shelf.cover {
                        println!("  Cover:       {}", cover.url);
                    }
                    if shelf.books.is_empty() {
                        println!("  (no books)");
                    } else {
                        println!();
                        let mut table = new_table(["Book", "Name", "Slug"]);
                        for b in &shelf.books {
                            table.add_row(vec![b.id.to_string(), truncate(&b.name, 50), b.slug.clone()]);
                        }
                        println!("{table}");
                    }
                }
            }
        }

        ShelvesAction::Create { name, description, books, tags, image } => {
            let params = ShelfParams {
                name,
                description,
                books,
                tags: parse_tags(&tags),
                image,
            };
            let shelf = api.create_shelf(&params).await?;
            match format {
                OutputFormat::Json => print_json(&shelf),
                OutputFormat::Text => println!(
                    "{} Created shelf {} ({})",
                    style("✓").green().bold(),
                    style(&shelf.name).bold(),
                    shelf.id
                ),
            }
        }

        ShelvesAction::Delete { id } => {
            api.delete_shelf(id).await?;
            print_done(
                format,
                &format!("Deleted shelf {id}"),
                serde_json::json!({ "deleted": true, "id": id }),
            );
        }
    }

    Ok(())
}
