//! Recycle bin commands.

use clap::Subcommand;

use bs_core::config::AppConfig;
use bs_core::error::BsResult;
use bs_models::{Deletable, RecycleBinItem};

use super::{format_date, new_table, print_done, print_json, truncate};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum RecycleBinAction {
    /// List deleted items.
    List,
    /// Restore a deleted item.
    Restore {
        /// Recycle bin entry id (not the item id).
        id: i64,
    },
    /// Permanently delete an item.
    Destroy {
        /// Recycle bin entry id (not the item id).
        id: i64,
    },
}

/// Name of the deleted item, if its payload decodes.
fn item_name(item: &RecycleBinItem) -> String {
    match item.deletable() {
        Some(Deletable::Book(b)) => b.name,
        Some(Deletable::Chapter(c)) => c.name,
        Some(Deletable::Shelf(s)) => s.name,
        Some(Deletable::Page(p)) => p.name,
        None => "-".to_string(),
    }
}

pub async fn run(config: &AppConfig, action: RecycleBinAction, format: OutputFormat) -> BsResult<()> {
    let api = super::create_api_client(config)?;

    match action {
        RecycleBinAction::List => {
            let items = api.list_recycle_bin_items().await?;
            match format {
                OutputFormat::Json => print_json(&items),
                OutputFormat::Text => {
                    if items.is_empty() {
                        println!("Recycle bin is empty.");
                        return Ok(());
                    }
                    let mut table = new_table(["Entry", "Type", "Item", "Name", "Deleted By", "Deleted"]);
                    for item in &items {
                        table.add_row(vec![
                            item.id.to_string(),
                            item.deletable_type.to_string(),
                            item.deletable_id.to_string(),
                            truncate(&item_name(item), 40),
                            item.deleted_by.to_string(),
                            format_date(item.created_at),
                        ]);
                    }
                    println!("{table}");
                }
            }
        }

        RecycleBinAction::Restore { id } => {
            let count = api.restore_recycle_bin_item(id).await?;
            print_done(
                format,
                &format!("Restored {count} item(s) from entry {id}"),
                serde_json::json!({ "id": id, "restore_count": count }),
            );
        }

        RecycleBinAction::Destroy { id } => {
            let count = api.delete_recycle_bin_item(id).await?;
            print_done(
                format,
                &format!("Permanently deleted {count} item(s) from entry {id}"),
                serde_json::json!({ "id": id, "delete_count": count }),
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bs_models::DeletableType;

    #[test]
    fn test_shelf_entry_labels() {
        let item: RecycleBinItem = serde_json::from_value(serde_json::json!({
            "id": 3,
            "deletable_type": "bookshelf",
            "deletable": { "id": 8, "name": "Archive" }
        }))
        .unwrap();
        assert_eq!(item.deletable_type, DeletableType::Shelf);
        assert_eq!(item.deletable_type.to_string(), "bookshelf");
        assert_eq!(item_name(&item), "Archive");
    }
}
