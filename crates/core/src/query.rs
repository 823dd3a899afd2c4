//! Price Queries

use jiff::{RoundMode, Timestamp, TimestampRound, Unit};
use serde::{Deserialize, Serialize};

use crate::ids::{BrandId, ProductId};

/// The instant, product and brand an effective price is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceQuery {
    /// Point in time the price must be valid at
    pub at: Timestamp,

    /// Priced product
    pub product: ProductId,

    /// Owning brand
    pub brand: BrandId,
}

impl PriceQuery {
    /// Creates a query. `at` is truncated to whole microseconds, the finest
    /// precision a price store keeps.
    pub fn new(at: Timestamp, product: ProductId, brand: BrandId) -> Self {
        let at = at
            .round(
                TimestampRound::new()
                    .smallest(Unit::Microsecond)
                    .mode(RoundMode::Trunc),
            )
            .unwrap_or(at);

        Self { at, product, brand }
    }
}
