//! Tariff prelude

pub use crate::{
    conflicts::{PriceConflict, find_conflicts},
    ids::{BrandId, PriceId, PriceListId, ProductId, TypedId},
    query::PriceQuery,
    records::{Currency, NewPriceRecord, PriceRecord, PriceRecordError, Priority},
    resolution::{Resolution, rank_candidates, resolve, resolve_effective_price},
    window::ValidityWindow,
};
