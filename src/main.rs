mod display;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tunelax::{
    source_for, Catalog, City, Condition, ListingQuery, ListingSort, StoreQuery, StoreSort,
    StudioQuery, StudioSort,
};

/// Browse the TuneLax catalog of stores, second-hand listings and studios
#[derive(Debug, Parser)]
#[command(name = "tunelax", version, about)]
struct Cli {
    /// Seed location: a JSON file path or an http(s) URL. Defaults to the bundled seed.
    #[arg(long, env = "TUNELAX_SEED", global = true)]
    seed: Option<String>,

    /// Print results as JSON instead of summaries
    #[arg(long, global = true)]
    json: bool,

    /// Also write the JSON result to this file
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search active marketplace listings
    Listings {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        city: Option<City>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        condition: Option<Condition>,
        #[arg(long, default_value = "newest")]
        sort: ListingSort,
    },
    /// Search official stores
    Stores {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        city: Option<City>,
        #[arg(long)]
        brand: Option<String>,
        #[arg(long, default_value = "featured")]
        sort: StoreSort,
    },
    /// Search studios
    Studios {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        city: Option<City>,
        #[arg(long, default_value = "rating")]
        sort: StudioSort,
    },
    /// Show one record by id
    Show { kind: ShowKind, id: String },
    /// List every brand carried by the official stores
    Brands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ShowKind {
    Listing,
    Store,
    Studio,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let source = source_for(cli.seed.as_deref())?;
    info!("Loading seed from {} source", source.source_name());
    let seed = source.load().await?;
    let catalog = Catalog::new(seed)?;

    run(&cli, &catalog).await
}

/// Execute one parsed command against the catalog
async fn run(cli: &Cli, catalog: &Catalog) -> Result<()> {
    match &cli.command {
        Command::Listings {
            search,
            city,
            category,
            condition,
            sort,
        } => {
            let query = ListingQuery {
                search: search.clone(),
                city: *city,
                category: category.clone(),
                condition: *condition,
                sort: *sort,
            };
            let listings = catalog.listings(&query);
            info!("{} listings found", listings.len());
            emit(cli, &listings, |items| {
                for (i, listing) in items.iter().enumerate() {
                    display::print_listing(i + 1, listing);
                }
            })
            .await?;
        }
        Command::Stores {
            search,
            city,
            brand,
            sort,
        } => {
            let query = StoreQuery {
                search: search.clone(),
                city: *city,
                brand: brand.clone(),
                sort: *sort,
            };
            let stores = catalog.stores(&query);
            info!("{} stores found", stores.len());
            emit(cli, &stores, |items| {
                for (i, store) in items.iter().enumerate() {
                    display::print_store(i + 1, store);
                }
            })
            .await?;
        }
        Command::Studios { search, city, sort } => {
            let query = StudioQuery {
                search: search.clone(),
                city: *city,
                sort: *sort,
            };
            let studios = catalog.studios(&query);
            info!("{} studios found", studios.len());
            emit(cli, &studios, |items| {
                for (i, studio) in items.iter().enumerate() {
                    display::print_studio(i + 1, studio);
                }
            })
            .await?;
        }
        Command::Show { kind, id } => match kind {
            ShowKind::Listing => {
                let listing = catalog.listing(id)?;
                emit(cli, listing, |l| display::print_listing(1, l)).await?;
            }
            ShowKind::Store => {
                let store = catalog.store(id)?;
                emit(cli, store, display::print_store_detail).await?;
            }
            ShowKind::Studio => {
                let studio = catalog.studio(id)?;
                emit(cli, studio, |s| display::print_studio(1, s)).await?;
            }
        },
        Command::Brands => {
            let brands = catalog.brands();
            emit(cli, &brands, |items| {
                for brand in items {
                    println!("{}", brand);
                }
            })
            .await?;
        }
    }

    Ok(())
}

/// Print `value` as JSON or through `summary`, and save it when `--output` is set
async fn emit<T, F>(cli: &Cli, value: &T, summary: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T),
{
    if cli.json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        summary(value);
    }

    if let Some(path) = &cli.output {
        let json = serde_json::to_string_pretty(value)?;
        debug!("Writing {} bytes to {}", json.len(), path.display());
        tokio::fs::write(path, json).await?;
        info!("💾 Saved result to {}", path.display());
    }

    Ok(())
}
