//! Shelf CLI - Product catalog front end.
//!
//! # Usage
//!
//! ```bash
//! # Print the full product list
//! shelf list
//!
//! # Print products matching a search query
//! shelf search bread
//!
//! # Show one product
//! shelf show 3
//!
//! # Create a product
//! shelf add -n "Apple" -p 1.50 -d "fruit"
//!
//! # Edit a product
//! shelf edit 3 -p 2.00
//!
//! # Delete a product
//! shelf delete 3
//!
//! # Interactive browsing session
//! shelf browse
//! ```
//!
//! The store endpoint is taken from `SHELF_API_URL`
//! (default: `http://localhost:8080/products`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use shelf_client::{ProductStoreClient, StoreConfig};
use shelf_core::ProductId;

mod commands;

#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version, about = "Product catalog front end")]
struct Cli {
    /// Base URL of the product collection resource. Falls back to
    /// `SHELF_API_URL`, then the default local endpoint.
    #[arg(long)]
    api_url: Option<url::Url>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full product list
    List,
    /// Print products matching a query against name and description
    Search {
        /// Free-text query, matched case-insensitively
        query: String,
    },
    /// Show a single product
    Show {
        /// Product ID
        id: ProductId,
    },
    /// Create a new product
    Add {
        /// Product name
        #[arg(short, long)]
        name: String,

        /// Unit price (must be greater than zero)
        #[arg(short, long)]
        price: String,

        /// Product description
        #[arg(short, long)]
        description: String,
    },
    /// Edit an existing product
    Edit {
        /// Product ID
        id: ProductId,

        /// New name (unchanged if omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// New unit price (unchanged if omitted)
        #[arg(short, long)]
        price: Option<String>,

        /// New description (unchanged if omitted)
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a product
    Delete {
        /// Product ID
        id: ProductId,
    },
    /// Interactive browsing session (list / detail / form screens)
    Browse,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match cli.api_url {
        Some(url) => StoreConfig::new(url),
        None => StoreConfig::from_env()?,
    };
    let store = ProductStoreClient::new(&config)?;

    match cli.command {
        Commands::List => commands::catalog::list(&store).await?,
        Commands::Search { query } => commands::catalog::search(&store, &query).await?,
        Commands::Show { id } => commands::catalog::show(&store, id).await?,
        Commands::Add {
            name,
            price,
            description,
        } => commands::modify::add(&store, &name, &price, &description).await?,
        Commands::Edit {
            id,
            name,
            price,
            description,
        } => {
            commands::modify::edit(
                &store,
                id,
                name.as_deref(),
                price.as_deref(),
                description.as_deref(),
            )
            .await?;
        }
        Commands::Delete { id } => commands::modify::delete(&store, id).await?,
        Commands::Browse => commands::browse::session(&store).await?,
    }
    Ok(())
}
