//! FoodHub CLI - Browse a catalog and manage seed files from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List shops in the demo catalog
//! foodhub shops
//!
//! # Show a shop's menu and recent updates
//! foodhub menu s1 --seed catalog.yaml
//!
//! # Search shops and items
//! foodhub search "iced"
//!
//! # Check a seed file
//! foodhub seed validate catalog.yaml
//!
//! # Print the demo seed as YAML
//! foodhub seed export > catalog.yaml
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "foodhub")]
#[command(author, version, about = "FoodHub catalog tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List shops and their status
    Shops {
        /// YAML seed file (default: built-in demo catalog)
        #[arg(long)]
        seed: Option<PathBuf>,
    },
    /// Show a shop's menu and recent updates
    Menu {
        /// Shop ID
        shop_id: String,

        /// YAML seed file (default: built-in demo catalog)
        #[arg(long)]
        seed: Option<PathBuf>,
    },
    /// Search shops and items
    Search {
        /// Text to look for in shop and item names or ids
        query: String,

        /// YAML seed file (default: built-in demo catalog)
        #[arg(long)]
        seed: Option<PathBuf>,
    },
    /// Work with seed files
    Seed {
        #[command(subcommand)]
        action: SeedAction,
    },
}

#[derive(Subcommand)]
enum SeedAction {
    /// Check a seed file for problems
    Validate {
        /// Path to the YAML seed file
        file: PathBuf,
    },
    /// Print the built-in demo seed as YAML
    Export,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,foodhub_core=warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Shops { seed } => commands::catalog::shops(seed.as_deref()).await?,
        Commands::Menu { shop_id, seed } => {
            commands::catalog::menu(&shop_id, seed.as_deref()).await?;
        }
        Commands::Search { query, seed } => {
            commands::catalog::search(&query, seed.as_deref()).await?;
        }
        Commands::Seed { action } => match action {
            SeedAction::Validate { file } => commands::seed::validate(&file).await?,
            SeedAction::Export => commands::seed::export()?,
        },
    }
    Ok(())
}
