use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use property_search::models::{parse_calendar_date, ListingId};
use property_search::render::views;
use property_search::{
    filter_listings, Catalog, CatalogError, Config, FavouritesStore, JsonFileStore,
    SearchCriteria, StoreError,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Search the property catalog and manage favourites
#[derive(Debug, Parser)]
#[command(name = "property-search", version, about)]
struct Cli {
    /// Catalog JSON file to search instead of the bundled one
    #[arg(long, global = true, env = "PROPERTY_SEARCH_CATALOG")]
    catalog: Option<PathBuf>,

    /// JSON file holding the local key-value store
    #[arg(long, global = true, env = "PROPERTY_SEARCH_STORE")]
    store: Option<PathBuf>,

    /// Key the favourites are stored under
    #[arg(long, global = true, env = "PROPERTY_SEARCH_FAVOURITES_KEY")]
    key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Filter the catalog
    Search(SearchArgs),
    /// Show the detail view of one listing
    Show { id: ListingId },
    /// Manage favourites
    #[command(subcommand)]
    Favourites(FavouritesCommand),
    /// Suggest known postcodes containing a fragment
    Postcodes { fragment: Option<String> },
}

#[derive(Debug, Subcommand)]
enum FavouritesCommand {
    /// Show the favourites panel
    List,
    /// Add a listing by id
    Add { id: ListingId },
    /// Remove a listing by id
    Remove { id: ListingId },
    /// Add the listing if absent, remove it if present
    Toggle { id: ListingId },
    /// Remove every favourite
    Clear,
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// Property type ("house", "flat", or "any")
    #[arg(long = "type")]
    property_type: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    min_price: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    max_price: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    min_bedrooms: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    max_bedrooms: Option<f64>,
    /// Added on or after this date (YYYY-MM-DD)
    #[arg(long, value_parser = date_arg)]
    date_after: Option<NaiveDate>,
    /// Added on or before this date (YYYY-MM-DD)
    #[arg(long, value_parser = date_arg)]
    date_before: Option<NaiveDate>,
    /// Exact postcode, case-insensitive
    #[arg(long)]
    postcode: Option<String>,
    /// JSON file with search criteria; flags override its fields
    #[arg(long)]
    criteria: Option<PathBuf>,
    /// Write the matching listings to this JSON file
    #[arg(long)]
    output: Option<PathBuf>,
}

impl SearchArgs {
    fn flag_criteria(&self) -> SearchCriteria {
        SearchCriteria {
            property_type: self.property_type.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            min_bedrooms: self.min_bedrooms,
            max_bedrooms: self.max_bedrooms,
            date_after: self.date_after,
            date_before: self.date_before,
            postcode: self.postcode.clone(),
        }
    }
}

fn date_arg(raw: &str) -> Result<NaiveDate, String> {
    parse_calendar_date(raw).ok_or_else(|| format!("expected YYYY-MM-DD, got '{raw}'"))
}

impl Cli {
    fn config(&self) -> Config {
        let defaults = Config::default();
        Config {
            catalog_path: self.catalog.clone().or(defaults.catalog_path),
            store_path: self.store.clone().unwrap_or(defaults.store_path),
            favourites_key: self.key.clone().unwrap_or(defaults.favourites_key),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_path(path)
            .await
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::bundled().context("Bundled catalog is invalid")?,
    };

    info!("Favourites store: {}", config.store_path.display());
    let mut favourites = FavouritesStore::load(
        JsonFileStore::at_path(&config.store_path),
        config.favourites_key.clone(),
    );

    match cli.command {
        Command::Search(args) => run_search(&catalog, &favourites, args).await?,
        Command::Show { id } => match catalog.find(id) {
            Ok(listing) => print!("{}", views::detail(listing, favourites.contains(id))),
            Err(CatalogError::ListingNotFound(id)) => print!("{}", views::not_found(id)),
            Err(err) => return Err(err.into()),
        },
        Command::Favourites(action) => run_favourites(&catalog, &mut favourites, action),
        Command::Postcodes { fragment } => {
            let codes = match fragment.as_deref() {
                Some(fragment) => catalog.suggest_postcodes(fragment),
                None => catalog.postcodes(),
            };
            for code in codes {
                println!("{code}");
            }
        }
    }

    Ok(())
}

async fn run_search(
    catalog: &Catalog,
    favourites: &FavouritesStore<JsonFileStore>,
    args: SearchArgs,
) -> Result<()> {
    let from_file = match &args.criteria {
        Some(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read criteria from {}", path.display()))?;
            serde_json::from_str::<SearchCriteria>(&raw)
                .with_context(|| format!("Criteria in {} are not a JSON object", path.display()))?
        }
        None => SearchCriteria::default(),
    };
    let criteria = from_file.merged_with(args.flag_criteria());

    let results = filter_listings(catalog.listings(), Some(&criteria));
    info!("🔎 {} of {} listings match", results.len(), catalog.len());

    print!("{}", views::results(results.iter().copied(), favourites.favourites()));

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&results)?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write results to {}", path.display()))?;
        info!("💾 Saved {} listings to {}", results.len(), path.display());
    }

    Ok(())
}

fn run_favourites(
    catalog: &Catalog,
    favourites: &mut FavouritesStore<JsonFileStore>,
    action: FavouritesCommand,
) {
    let outcome: Result<(), StoreError> = match action {
        FavouritesCommand::List => Ok(()),
        FavouritesCommand::Add { id } => match catalog.find(id) {
            Ok(listing) => {
                if favourites.contains(id) {
                    println!("Listing {id} is already a favourite");
                }
                // Still persisted, so a missing or stale snapshot gets rewritten
                favourites.add(listing.clone())
            }
            Err(_) => {
                print!("{}", views::not_found(id));
                return;
            }
        },
        FavouritesCommand::Remove { id } => favourites.remove(id),
        FavouritesCommand::Toggle { id } => match catalog.find(id) {
            Ok(listing) => favourites.toggle(listing.clone()),
            // Not in the catalog any more, but may still be saved
            Err(_) => favourites.remove(id),
        },
        FavouritesCommand::Clear => favourites.clear(),
    };

    if let Err(err) = outcome {
        eprintln!("warning: favourites changed for this session only, saving failed ({err})");
    }

    print!("{}", views::favourites_panel(favourites.favourites()));
}
