//! Price record store.

use async_trait::async_trait;
use mockall::automock;
use tariff::prelude::{PriceQuery, PriceRecord};

use crate::domain::prices::errors::PriceStoreError;

/// Source of price records.
///
/// Implementations must honour the candidate contract: `find_candidates`
/// returns exactly the records whose product and brand equal the query's and
/// whose validity window contains `query.at`, bounds included. Resolution
/// trusts this and does not filter again.
#[automock]
#[async_trait]
pub trait PriceStore: Send + Sync {
    /// Returns every known price record.
    async fn get_all(&self) -> Result<Vec<PriceRecord>, PriceStoreError>;

    /// Returns the records that may apply to `query`.
    async fn find_candidates(&self, query: PriceQuery)
    -> Result<Vec<PriceRecord>, PriceStoreError>;
}
