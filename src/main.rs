//! Catalog search CLI
//!
//! Loads a JSON catalog dump and runs one keyword search against it:
//! `biblio-search <keyword> [field] [category]`.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblio_search::{
    config::SearchConfig,
    models::{Book, BookSearchField},
    services::search,
    AppError,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = SearchConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("biblio_search={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Biblio Search v{}", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let keyword = args
        .next()
        .context("Usage: biblio-search <keyword> [field] [category]")?;
    let field: BookSearchField = match args.next() {
        Some(raw) => raw.parse().map_err(anyhow::Error::msg)?,
        None => BookSearchField::default(),
    };
    let category = args.next();

    let books = load_catalog(&config.catalog.path)?;
    tracing::info!(
        "Loaded {} catalog records from {}",
        books.len(),
        config.catalog.path
    );

    match search::search_books(&books, &keyword, field, category.as_deref()) {
        Ok(matched) => {
            serde_json::to_writer_pretty(std::io::stdout().lock(), &matched)?;
            println!();
        }
        Err(AppError::NotFound(message)) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn load_catalog(path: &str) -> anyhow::Result<Vec<Book>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read catalog file {}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("Catalog file {} is not valid JSON", path))
}
