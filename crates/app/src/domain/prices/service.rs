//! Prices service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tariff::prelude::{PriceQuery, PriceRecord, resolve};
use tracing::{debug, warn};

use crate::domain::prices::{errors::PricesServiceError, store::PriceStore};

/// Resolves effective prices against an injected [`PriceStore`].
#[derive(Clone)]
pub struct StorePricesService {
    store: Arc<dyn PriceStore>,
}

impl StorePricesService {
    #[must_use]
    pub fn new(store: Arc<dyn PriceStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PricesService for StorePricesService {
    async fn get_all_prices(&self) -> Result<Vec<PriceRecord>, PricesServiceError> {
        let prices = self.store.get_all().await?;

        debug!(count = prices.len(), "listed prices");

        Ok(prices)
    }

    async fn get_effective_price(
        &self,
        query: PriceQuery,
    ) -> Result<Option<PriceRecord>, PricesServiceError> {
        let candidates = self.store.find_candidates(query).await?;

        let Some(resolution) = resolve(&candidates) else {
            debug!(
                at = %query.at,
                product = %query.product,
                brand = %query.brand,
                "no applicable price"
            );

            return Ok(None);
        };

        let price = resolution.price();

        if resolution.is_tie_break() {
            warn!(
                at = %query.at,
                product = %query.product,
                brand = %query.brand,
                priority = %price.priority(),
                contenders = resolution.contenders(),
                price_id = %price.price_id(),
                "equal priority prices overlap; resolved by tie-break"
            );
        }

        debug!(
            at = %query.at,
            product = %query.product,
            brand = %query.brand,
            candidates = candidates.len(),
            price_id = %price.price_id(),
            price_list_id = %price.price_list_id(),
            "resolved effective price"
        );

        Ok(Some(price.clone()))
    }
}

#[automock]
#[async_trait]
pub trait PricesService: Send + Sync {
    /// Retrieves every price record, unfiltered, in store order.
    async fn get_all_prices(&self) -> Result<Vec<PriceRecord>, PricesServiceError>;

    /// Retrieves the price record in effect for `query`, if any.
    async fn get_effective_price(
        &self,
        query: PriceQuery,
    ) -> Result<Option<PriceRecord>, PricesServiceError>;
}
