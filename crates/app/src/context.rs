//! App Context

use std::{path::Path, sync::Arc};

use thiserror::Error;

use crate::{
    database,
    domain::prices::{
        FixtureError, InMemoryPriceStore, PgPriceStore, PriceStore, PricesService,
        StorePricesService,
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to load price fixtures")]
    Fixture(#[source] FixtureError),
}

#[derive(Clone)]
pub struct AppContext {
    pub prices: Arc<dyn PricesService>,
}

impl AppContext {
    /// Build application context backed by a `PostgreSQL` price store.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_store(PgPriceStore::new(pool)))
    }

    /// Build application context backed by an in-memory store loaded from a
    /// YAML fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or holds invalid records.
    pub fn from_prices_file(path: impl AsRef<Path>) -> Result<Self, AppInitError> {
        let store = InMemoryPriceStore::from_yaml_file(path).map_err(AppInitError::Fixture)?;

        Ok(Self::from_store(store))
    }

    /// Build application context over an arbitrary price store.
    pub fn from_store(store: impl PriceStore + 'static) -> Self {
        Self {
            prices: Arc::new(StorePricesService::new(Arc::new(store))),
        }
    }
}
