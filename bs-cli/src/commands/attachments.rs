//! Attachment commands.

use std::path::PathBuf;

use clap::Subcommand;
use console::style;

use bs_api::AttachmentParams;
use bs_core::config::AppConfig;
use bs_core::error::{BsError, BsResult};

use super::{format_date, new_table, print_done, print_json, truncate, ListArgs};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum AttachmentsAction {
    /// List attachments.
    List(ListArgs),
    /// Show an attachment and its embed links.
    Get {
        /// Attachment id.
        id: i64,
    },
    /// Attach a file or link to a page.
    Create {
        /// Attachment name.
        name: String,
        /// Id of the page to attach to.
        #[arg(short, long)]
        page: i64,
        /// File to upload.
        #[arg(long, conflicts_with = "link")]
        file: Option<PathBuf>,
        /// External URL to link instead of uploading.
        #[arg(long)]
        link: Option<String>,
    },
    /// Delete an attachment.
    Delete {
        /// Attachment id.
        id: i64,
    },
}

pub async fn run(config: &AppConfig, action: AttachmentsAction, format: OutputFormat) -> BsResult<()> {
    let api = super::create_api_client(config)?;

    match action {
        AttachmentsAction::List(args) => {
            let attachments = api.list_attachments(args.query()?.as_ref()).await?;
            match format {
                OutputFormat::Json => print_json(&attachments),
                OutputFormat::Text => {
                    if attachments.is_empty() {
                        println!("No attachments found.");
                        return Ok(());
                    }
                    let mut table = new_table(["ID", "Name", "Page", "Kind", "Updated"]);
                    for a in &attachments {
                        let kind = if a.external {
                            "link".to_string()
                        } else if a.extension.is_empty() {
                            "file".to_string()
                        } else {
                            a.extension.clone()
                        };
                        table.add_row(vec![
                            a.id.to_string(),
                            truncate(&a.name, 40),
                            a.uploaded_to.to_string(),
                            kind,
                            format_date(a.updated_at),
                        ]);
                    }
                    println!("{table}");
                }
            }
        }

        AttachmentsAction::Get { id } => {
            let attachment = api.get_attachment(id).await?;
            match format {
                OutputFormat::Json => print_json(&attachment),
                OutputFormat::Text => {
                    println!("{}", style(&attachment.name).bold());
                    println!("  ID:       {}", attachment.id);
                    println!("  Page:     {}", attachment.uploaded_to);
                    println!("  External: {}", attachment.external);
                    println!("  Updated:  {}", format_date(attachment.updated_at));
                    println!("  HTML:     {}", attachment.links.html);
                    println!("  Markdown: {}", attachment.links.markdown);
                }
            }
        }

        AttachmentsAction::Create { name, page, file, link } => {
            if file.is_none() && link.is_none() {
                return Err(BsError::Config("either --file or --link is required".into()));
            }
            let params = AttachmentParams {
                name,
                uploaded_to: page,
                file,
                link: link.unwrap_or_default(),
            };
            let attachment = api.create_attachment(&params).await?;
            match format {
                OutputFormat::Json => print_json(&attachment),
                OutputFormat::Text => println!(
                    "{} Attached {} to page {} ({})",
                    style("✓").green().bold(),
                    style(&attachment.name).bold(),
                    attachment.uploaded_to,
                    attachment.id
                ),
            }
        }

        AttachmentsAction::Delete { id } => {
            api.delete_attachment(id).await?;
            print_done(
                format,
                &format!("Deleted attachment {id}"),
                serde_json::json!({ "deleted": true, "id": id }),
            );
        }
    }

    Ok(())
}
