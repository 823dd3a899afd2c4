//! Tariff
//!
//! Tariff resolves which price-list entry is in effect for a product sold under a brand at a
//! given instant, when several entries with different validity windows and priorities overlap.

pub mod conflicts;
pub mod ids;
pub mod prelude;
pub mod query;
pub mod records;
pub mod resolution;
pub mod window;
