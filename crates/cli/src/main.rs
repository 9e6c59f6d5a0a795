//! 6amGrocery CLI - Catalog inspection and validation tools.
//!
//! # Usage
//!
//! ```bash
//! # List vendors, optionally filtered the same way the storefront filters them
//! sixam-cli vendors --query organic --category All
//!
//! # List products
//! sixam-cli products
//!
//! # Check a catalog file before pointing STOREFRONT_CATALOG_PATH at it
//! sixam-cli validate-catalog ./catalog.json
//! ```
//!
//! # Commands
//!
//! - `vendors` - List vendors matching a search query and category
//! - `products` - List products
//! - `validate-catalog` - Load and validate a JSON catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "sixam-cli")]
#[command(author, version, about = "6amGrocery CLI tools")]
struct Cli {
    /// Catalog file to read instead of the built-in mock catalog
    #[arg(long, global = true, env = "STOREFRONT_CATALOG_PATH")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List vendors
    Vendors {
        /// Case-insensitive match against vendor name or category
        #[arg(short, long, default_value = "")]
        query: String,

        /// Category filter (`All`, `Grocery`, `Organic`, `Pharmacy`, `Bakery`, `Butcher`, `Seafood`)
        #[arg(short, long, default_value = "All")]
        category: String,
    },
    /// List products
    Products,
    /// Load a JSON catalog and report problems
    ValidateCatalog {
        /// Path to the catalog file
        path: PathBuf,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Vendors { query, category } => {
            let catalog = commands::catalog::load(cli.catalog.as_deref())?;
            commands::catalog::vendors(&catalog, &query, &category)?;
        }
        Commands::Products => {
            let catalog = commands::catalog::load(cli.catalog.as_deref())?;
            commands::catalog::products(&catalog);
        }
        Commands::ValidateCatalog { path } => commands::catalog::validate(&path)?,
    }
    Ok(())
}
