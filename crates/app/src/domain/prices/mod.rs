//! Prices

pub mod errors;
pub mod memory;
pub mod repository;
pub mod service;
pub mod store;

pub use errors::{FixtureError, PriceStoreError, PricesServiceError};
pub use memory::InMemoryPriceStore;
pub use repository::PgPriceStore;
pub use service::*;
pub use store::*;
