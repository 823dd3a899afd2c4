//! In-memory price store.

use std::{fs, path::Path, sync::Arc};

use async_trait::async_trait;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use tariff::prelude::{PriceQuery, PriceRecord};

use crate::domain::prices::{
    errors::{FixtureError, PriceStoreError},
    store::PriceStore,
};

/// Immutable snapshot of price records held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPriceStore {
    records: Arc<[PriceRecord]>,
}

#[derive(Debug, Deserialize)]
struct PriceFixture {
    prices: Vec<PriceRecord>,
}

impl InMemoryPriceStore {
    /// Build a store from `records`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::DuplicatePriceId`] when two records share a
    /// price id.
    pub fn new(records: Vec<PriceRecord>) -> Result<Self, FixtureError> {
        let mut seen = FxHashSet::default();

        if let Some(duplicate) = records.iter().find(|record| !seen.insert(record.price_id())) {
            return Err(FixtureError::DuplicatePriceId(duplicate.price_id()));
        }

        Ok(Self {
            records: records.into(),
        })
    }

    /// Parse a YAML document with a top-level `prices` list.
    ///
    /// # Errors
    ///
    /// Returns an error when the document is not valid YAML, a record breaks
    /// its invariants, or two records share a price id.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, FixtureError> {
        let fixture: PriceFixture = serde_norway::from_str(yaml)?;

        Self::new(fixture.prices)
    }

    /// Load a YAML price fixture from disk.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        Self::from_yaml_str(&fs::read_to_string(path)?)
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }
}

#[async_trait]
impl PriceStore for InMemoryPriceStore {
    async fn get_all(&self) -> Result<Vec<PriceRecord>, PriceStoreError> {
        Ok(self.records.to_vec())
    }

    async fn find_candidates(
        &self,
        query: PriceQuery,
    ) -> Result<Vec<PriceRecord>, PriceStoreError> {
        Ok(self
            .records
            .iter()
            .filter(|record| record.applies_to(&query))
            .cloned()
            .collect())
    }
}
