//! Basket CLI - View and edit a locally stored cart.
//!
//! # Usage
//!
//! ```bash
//! # Show the cart and its total
//! basket show
//!
//! # Load line items from a file, replacing the cart
//! basket seed cart.yaml
//!
//! # Add or remove one unit of product 2
//! basket inc 2
//! basket dec 2
//!
//! # Use a different storage file and key
//! basket --storage /tmp/storage.json --key guestCart show
//! ```
//!
//! # Commands
//!
//! - `show` - Render the cart
//! - `inc` - Add one unit of a product already in the cart
//! - `dec` - Remove one unit, dropping the line at zero
//! - `seed` - Replace the cart from a YAML or JSON file
//! - `clear` - Empty the cart
//!
//! Every command prints the resulting cart to stdout. Logs go to stderr.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use basket_cart::{CartConfig, CartStore, FileStore};
use basket_core::ProductId;
use clap::{Parser, Subcommand};

mod commands;
mod telemetry;

#[derive(Parser)]
#[command(name = "basket")]
#[command(author, version, about = "Basket cart tools")]
struct Cli {
    /// Storage file (overrides `BASKET_STORAGE_PATH`)
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    /// Storage key (overrides `BASKET_STORAGE_KEY`)
    #[arg(long, global = true)]
    key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cart and its total
    Show,
    /// Add one unit of a product already in the cart
    Inc {
        /// Product ID
        #[arg(allow_negative_numbers = true)]
        id: ProductId,
    },
    /// Remove one unit of a product, dropping it at zero
    Dec {
        /// Product ID
        #[arg(allow_negative_numbers = true)]
        id: ProductId,
    },
    /// Replace the cart with line items from a YAML or JSON file
    Seed {
        /// Path to the file
        file: PathBuf,
    },
    /// Remove every line from the cart
    Clear,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match CartConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Tracing is not up yet
            let _ = writeln!(std::io::stderr(), "Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(path) = cli.storage.clone() {
        config.storage_path = path;
    }
    if let Some(key) = cli.key.clone() {
        config.storage_key = key;
    }

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = telemetry::init_sentry(&config);
    telemetry::init_tracing(&config);

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Command failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, config: &CartConfig) -> Result<(), Box<dyn std::error::Error>> {
    let storage = FileStore::new(&config.storage_path);
    let mut store = CartStore::with_key(storage, config.storage_key.clone());

    match command {
        Commands::Show => {}
        Commands::Inc { id } => commands::cart::increment(&mut store, id)?,
        Commands::Dec { id } => commands::cart::decrement(&mut store, id)?,
        Commands::Seed { file } => commands::seed::from_file(&mut store, &file)?,
        Commands::Clear => commands::cart::clear(&mut store)?,
    }

    commands::render(&store, &config.currency_suffix)?;
    Ok(())
}
