//! BookStack CLI - command-line interface for the BookStack REST API.
//!
//! Lists, inspects, creates, exports and deletes content on a BookStack site,
//! runs searches and manages the recycle bin. Useful for scripting and for
//! checking API tokens from a terminal.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};

use bs_core::config::AppConfig;
use bs_core::error::BsResult;
use bs_core::logging;
use bs_core::platform::Platform;

/// BookStack - documentation platform API client.
#[derive(Parser)]
#[command(
    name = "bookstack",
    version,
    about = "BookStack REST API client",
    long_about = "A command-line interface for the BookStack REST API.\n\
                   Configure a site URL and API token with `bookstack config set`, then\n\
                   browse and manage books, chapters, pages, shelves, attachments and users."
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json).
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output for scripting.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage books.
    Books {
        #[command(subcommand)]
        action: commands::books::BooksAction,
    },
    /// Manage chapters.
    Chapters {
        #[command(subcommand)]
        action: commands::chapters::ChaptersAction,
    },
    /// Manage pages.
    Pages {
        #[command(subcommand)]
        action: commands::pages::PagesAction,
    },
    /// Manage shelves.
    Shelves {
        #[command(subcommand)]
        action: commands::shelves::ShelvesAction,
    },
    /// Manage attachments.
    Attachments {
        #[command(subcommand)]
        action: commands::attachments::AttachmentsAction,
    },
    /// Manage users.
    Users {
        #[command(subcommand)]
        action: commands::users::UsersAction,
    },
    /// Search across books, chapters, pages and shelves.
    Search(commands::search::SearchArgs),
    /// Inspect, restore and purge deleted items.
    #[command(name = "recycle-bin")]
    RecycleBin {
        #[command(subcommand)]
        action: commands::recycle_bin::RecycleBinAction,
    },
    /// View and modify the configuration file.
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

#[tokio::main]
async fn main() -> BsResult<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => AppConfig::default_config_path()?,
    };
    let config = if config_path.exists() {
        AppConfig::load_from_file(&config_path)?
    } else {
        AppConfig::default()
    };

    let log_level = if cli.verbose { "debug" } else { config.logging.level.as_str() };
    let _guard = match config
        .effective_log_dir()
        .and_then(|dir| logging::init_logging(log_level, &dir, config.logging.json_output))
    {
        Ok(guard) => Some(guard),
        Err(e) => {
            logging::init_console_logging(log_level);
            warn!("file logging unavailable: {e}");
            None
        }
    };

    info!(
        "BookStack CLI v{} on {}",
        bs_core::constants::APP_VERSION,
        Platform::current().name()
    );
    debug!("using config file {}", config_path.display());

    match cli.command {
        Commands::Books { action } => commands::books::run(&config, action, cli.format).await,
        Commands::Chapters { action } => {
            commands::chapters::run(&config, action, cli.format).await
        }
        Commands::Pages { action } => commands::pages::run(&config, action, cli.format).await,
        Commands::Shelves { action } => {
            commands::shelves::run(&config, action, cli.format).await
        }
        Commands::Attachments { action } => {
            commands::attachments::run(&config, action, cli.format).await
        }
        Commands::Users { action } => commands::users::run(&config, action, cli.format).await,
        Commands::Search(args) => commands::search::run(&config, args, cli.format).await,
        Commands::RecycleBin { action } => {
            commands::recycle_bin::run(&config, action, cli.format).await
        }
        Commands::Config { action } => {
            commands::config::run(config, &config_path, action, cli.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_export() {
        let cli = Cli::try_parse_from([
            "bookstack", "-f", "json", "books", "export", "3", "--type", "pdf", "-o", "out.pdf",
        ])
        .unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
        match cli.command {
            Commands::Books {
                action: commands::books::BooksAction::Export { id, kind, output },
            } => {
                assert_eq!(id, 3);
                assert_eq!(kind, bs_api::ExportFormat::Pdf);
                assert_eq!(output, Some(PathBuf::from("out.pdf")));
            }
            _ => panic!("expected books export"),
        }
    }
}
