//! Price Source Config

use std::path::PathBuf;

use clap::Args;
use tariff_app::context::{AppContext, AppInitError};

/// Exactly one backing store for price records.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct PriceSourceConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// YAML price fixture served from memory
    #[arg(long, env = "PRICES_FILE")]
    pub prices_file: Option<PathBuf>,
}

impl PriceSourceConfig {
    /// Build the application context for the configured source.
    ///
    /// # Errors
    ///
    /// Returns an error when the database is unreachable or the fixture
    /// cannot be loaded.
    pub async fn into_app_context(self) -> Result<AppContext, AppInitError> {
        match self.database_url {
            Some(url) => AppContext::from_database_url(&url).await,
            None => AppContext::from_prices_file(self.prices_file.unwrap_or_default()),
        }
    }
}
