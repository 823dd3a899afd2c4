//! Price Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use tariff::prelude::PriceRecord;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PriceResponse {
    /// Price record identifier
    pub price_id: i64,

    /// Brand the price belongs to
    pub brand_id: i64,

    /// Product the price belongs to
    pub product_id: i64,

    /// Tariff the price was published under
    pub price_list_id: i64,

    /// Precedence among overlapping prices; higher wins
    pub priority: i32,

    /// Start of the validity window (inclusive, RFC 3339)
    pub start_date: String,

    /// End of the validity window (inclusive, RFC 3339)
    pub end_date: String,

    /// Decimal amount, exactly as stored
    pub price: String,

    /// Currency designator
    pub currency: String,
}

impl From<PriceRecord> for PriceResponse {
    fn from(record: PriceRecord) -> Self {
        PriceResponse {
            price_id: record.price_id().into_inner(),
            brand_id: record.brand_id().into_inner(),
            product_id: record.product_id().into_inner(),
            price_list_id: record.price_list_id().into_inner(),
            priority: record.priority().0,
            start_date: record.start_date().to_string(),
            end_date: record.end_date().to_string(),
            price: record.price().to_string(),
            currency: record.currency().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PricesResponse {
    /// Every price record, in store order
    pub prices: Vec<PriceResponse>,
}
