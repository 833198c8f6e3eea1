//! Configuration management for the search core

use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;

use crate::error::AppResult;
use crate::models::query::SortOrder;

/// Listing defaults for one record collection
#[derive(Debug, Deserialize, Clone)]
pub struct ListDefaults {
    pub page_size: u32,
    pub sort_by: String,
    pub sort_order: SortOrder,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Catalog dump consumed by the CLI
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    #[serde(default = "ListDefaults::books")]
    pub books: ListDefaults,
    #[serde(default = "ListDefaults::users")]
    pub users: ListDefaults,
    #[serde(default = "ListDefaults::categories")]
    pub categories: ListDefaults,
    #[serde(default = "ListDefaults::borrows")]
    pub borrows: ListDefaults,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl SearchConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> AppResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix BIBLIO_)
            .add_source(
                Environment::with_prefix("BIBLIO")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override catalog path from CATALOG_PATH env var if present
            .set_override_option("catalog.path", env::var("CATALOG_PATH").ok())?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            books: ListDefaults::books(),
            users: ListDefaults::users(),
            categories: ListDefaults::categories(),
            borrows: ListDefaults::borrows(),
            logging: LoggingConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl ListDefaults {
    fn books() -> Self {
        Self {
            page_size: 12,
            sort_by: "title".to_string(),
            sort_order: SortOrder::Asc,
        }
    }

    fn users() -> Self {
        Self {
            page_size: 10,
            sort_by: "name".to_string(),
            sort_order: SortOrder::Asc,
        }
    }

    fn categories() -> Self {
        Self {
            page_size: 10,
            sort_by: "name".to_string(),
            sort_order: SortOrder::Asc,
        }
    }

    fn borrows() -> Self {
        Self {
            page_size: 10,
            sort_by: "borrow_date".to_string(),
            sort_order: SortOrder::Desc,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: "data/catalog.json".to_string(),
        }
    }
}
