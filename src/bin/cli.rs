//! Showcase CLI
//!
//! Runs the pipeline against a directory of documents, standing in for a
//! wiki host. Rotation state persists in a JSON cache file under the root.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use showcase::{
    config::Config,
    error::Result,
    handler::ShowcaseHandler,
    host::{DirHost, FileCache},
};

/// showcase - collection grid renderer
#[derive(Parser, Debug)]
#[command(name = "showcase", version, about = "Renders showcase grids from document collections")]
struct Cli {
    /// Path to the document root directory
    #[arg(short, long, default_value = "documents")]
    root: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the full listing of a collection
    List {
        /// Collection name
        collection: String,

        /// Order token, e.g. "-last_modified"
        #[arg(long)]
        order: Option<String>,

        /// Thumbnail size in pixels
        #[arg(long)]
        thumb_size: Option<u32>,

        /// Truncate descriptions to this many characters
        #[arg(long)]
        trim: Option<usize>,
    },

    /// Render the daily rotation of a collection
    Daily {
        /// Collection name
        collection: String,

        /// Maximum records in the rotation
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Render the sort picker control
    Control {
        /// Comma-separated sortable field names
        fields: String,

        /// Currently selected order token
        #[arg(long)]
        selected: Option<String>,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.root.join("config.toml");
    let config = Config::load_or_default(&config_path);

    if let Command::Validate = cli.command {
        log::info!("Validating configuration...");
        config.validate()?;
        log::info!("Config OK");
        return Ok(());
    }

    let host = Arc::new(DirHost::new(&cli.root));
    let cache = Arc::new(FileCache::new(cli.root.join("cache.json")));
    let handler = ShowcaseHandler::new(host.clone(), host, cache, config)?;

    match cli.command {
        Command::List {
            collection,
            order,
            thumb_size,
            trim,
        } => {
            let mut attrs = HashMap::new();
            if let Some(size) = thumb_size {
                attrs.insert("thumb_size".to_string(), size.to_string());
            }
            if let Some(trim) = trim {
                attrs.insert("trim_text".to_string(), trim.to_string());
            }

            let markup = handler
                .showcase_tag(&collection, &attrs, order.as_deref())
                .await;
            println!("{markup}");
        }

        Command::Daily { collection, limit } => {
            let mut attrs = HashMap::new();
            attrs.insert("type".to_string(), "daily".to_string());
            if let Some(limit) = limit {
                attrs.insert("limit".to_string(), limit.to_string());
            }

            let markup = handler.showcase_tag(&collection, &attrs, None).await;
            println!("{markup}");
        }

        Command::Control { fields, selected } => {
            let mut attrs = HashMap::new();
            attrs.insert("fields".to_string(), fields);

            let markup = handler.sortable_tag(&attrs, selected.as_deref());
            println!("{markup}");
        }

        // Handled before handler construction
        Command::Validate => {}
    }

    Ok(())
}
