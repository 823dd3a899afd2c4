use std::{path::PathBuf, sync::Arc};

use clap::{Args, Parser, Subcommand};
use tariff_app::{
    database,
    domain::prices::{InMemoryPriceStore, PgPriceStore, PriceStore},
};

mod db;
mod prices;

#[derive(Debug, Parser)]
#[command(name = "tariff-app", about = "Tariff CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    source: SourceArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Prices(prices::PricesCommand),
    Db(db::DbCommand),
}

/// Where price records are read from.
#[derive(Debug, Args)]
#[group(multiple = false)]
pub(crate) struct SourceArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    /// YAML price fixture served from memory instead of PostgreSQL
    #[arg(long, env = "PRICES_FILE")]
    prices_file: Option<PathBuf>,
}

impl SourceArgs {
    pub(crate) async fn store(&self) -> Result<Arc<dyn PriceStore>, String> {
        if let Some(path) = &self.prices_file {
            let store = InMemoryPriceStore::from_yaml_file(path)
                .map_err(|error| format!("failed to load {}: {error}", path.display()))?;

            return Ok(Arc::new(store));
        }

        Ok(Arc::new(PgPriceStore::new(self.pool().await?)))
    }

    pub(crate) async fn pool(&self) -> Result<sqlx::PgPool, String> {
        let url = self
            .database_url
            .as_deref()
            .ok_or("--database-url (or DATABASE_URL) is required")?;

        database::connect(url)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))
    }
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Prices(command) => prices::run(&self.source, command).await,
            Commands::Db(command) => db::run(&self.source, command).await,
        }
    }
}
