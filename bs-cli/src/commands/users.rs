//! User commands.

use clap::Subcommand;
use console::style;

use bs_api::UserDeleteParams;
use bs_core::config::AppConfig;
use bs_core::error::BsResult;

use super::{format_date, new_table, or_dash, print_done, print_json, truncate, ListArgs};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum UsersAction {
    /// List users.
    List(ListArgs),
    /// Show a user and their roles.
    Get {
        /// User id.
        id: i64,
    },
    /// Delete a user.
    Delete {
        /// User id.
        id: i64,
        /// Transfer the user's content to this user id.
        #[arg(long)]
        migrate_to: Option<i64>,
    },
}

pub async fn run(config: &AppConfig, action: UsersAction, format: OutputFormat) -> BsResult<()> {
    let api = super::create_api_client(config)?;

    match action {
        UsersAction::List(args) => {
            let users = api.list_users(args.query()?.as_ref()).await?;
            match format {
                OutputFormat::Json => print_json(&users),
                OutputFormat::Text => {
                    if users.is_empty() {
                        println!("No users found.");
                        return Ok(());
                    }
                    let mut table = new_table(["ID", "Name", "Email", "Roles"]);
                    for u in &users {
                        let roles: Vec<&str> = u.roles.iter().map(|r| r.display_name.as_str()).collect();
                        table.add_row(vec![
                            u.id.to_string(),
                            truncate(&u.name, 30),
                            u.email.clone(),
                            or_dash(&roles.join(", ")).to_string(),
                        ]);
                    }
                    println!("{table}");
                }
            }
        }

        UsersAction::Get { id } => {
            let user = api.get_user(id).await?;
            match format {
                OutputFormat::Json => print_json(&user),
                OutputFormat::Text => {
                    println!("{}", style(&user.name).bold());
                    println!("  ID:      {}", user.id);
                    println!("  Email:   {}", user.email);
                    println!("  Slug:    {}", user.slug);
                    println!("  Profile: {}", or_dash(&user.profile_url));
                    println!("  Created: {}", format_date(user.created_at));
                    for role in &user.roles {
                        println!("  Role:    {} ({})", role.display_name, role.id);
                    }
                }
            }
        }

        UsersAction::Delete { id, migrate_to } => {
            let params = migrate_to.map(|target| UserDeleteParams {
                migrate_ownership_id: target,
            });
            api.delete_user(id, params).await?;
            let message = match migrate_to {
                Some(target) => format!("Deleted user {id}, content moved to user {target}"),
                None => format!("Deleted user {id}"),
            };
            print_done(
                format,
                &message,
                serde_json::json!({ "deleted": true, "id": id, "migrated_to": migrate_to }),
            );
        }
    }

    Ok(())
}
