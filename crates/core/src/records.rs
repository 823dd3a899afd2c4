//! Price Records

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Result as FmtResult},
};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    ids::{BrandId, PriceId, PriceListId, ProductId},
    query::PriceQuery,
    window::ValidityWindow,
};

/// Errors raised when a price record would break its invariants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PriceRecordError {
    /// The validity window starts after it ends.
    #[error("validity window starts at {start} but ends at {end}")]
    InvalidWindow {
        /// Requested start
        start: Timestamp,
        /// Requested end
        end: Timestamp,
    },

    /// The amount is below zero.
    #[error("price amount {0} is negative")]
    NegativePrice(Decimal),

    /// The currency code is empty.
    #[error("currency is missing")]
    MissingCurrency,
}

/// Ranking of a record among overlapping records; higher wins.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Priority(pub i32);

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// Opaque currency designator, never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Creates a currency designator.
    ///
    /// # Errors
    ///
    /// Returns [`PriceRecordError::MissingCurrency`] for an empty or blank code.
    pub fn new(code: impl Into<String>) -> Result<Self, PriceRecordError> {
        let code = code.into();

        if code.trim().is_empty() {
            return Err(PriceRecordError::MissingCurrency);
        }

        Ok(Self(code))
    }

    /// The code as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Currency {
    type Error = PriceRecordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.0
    }
}

/// New Price Record Data
///
/// Unvalidated input for [`PriceRecord::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPriceRecord {
    /// Unique identifier of the record
    pub price_id: PriceId,

    /// Brand the price belongs to
    pub brand_id: BrandId,

    /// Product the price applies to
    pub product_id: ProductId,

    /// Tariff the price was published under
    pub price_list_id: PriceListId,

    /// Precedence among overlapping prices; higher wins
    pub priority: Priority,

    /// First instant the price applies (inclusive)
    pub start_date: Timestamp,

    /// Last instant the price applies (inclusive)
    pub end_date: Timestamp,

    /// Amount in `currency`
    pub price: Decimal,

    /// ISO 4217 currency code
    pub currency: String,
}

/// An immutable tariff entry for a product/brand pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "NewPriceRecord", into = "NewPriceRecord")]
pub struct PriceRecord {
    price_id: PriceId,
    brand_id: BrandId,
    product_id: ProductId,
    price_list_id: PriceListId,
    priority: Priority,
    window: ValidityWindow,
    price: Decimal,
    currency: Currency,
}

impl PriceRecord {
    /// Validates `record` and builds the immutable price record.
    ///
    /// # Errors
    ///
    /// - [`PriceRecordError::InvalidWindow`]: `start_date` is after `end_date`.
    /// - [`PriceRecordError::NegativePrice`]: `price` is below zero.
    /// - [`PriceRecordError::MissingCurrency`]: `currency` is blank.
    pub fn new(record: NewPriceRecord) -> Result<Self, PriceRecordError> {
        let window = ValidityWindow::new(record.start_date, record.end_date)?;

        if record.price < Decimal::ZERO {
            return Err(PriceRecordError::NegativePrice(record.price));
        }

        Ok(Self {
            price_id: record.price_id,
            brand_id: record.brand_id,
            product_id: record.product_id,
            price_list_id: record.price_list_id,
            priority: record.priority,
            window,
            price: record.price,
            currency: Currency::new(record.currency)?,
        })
    }

    /// Unique identifier of the record.
    pub fn price_id(&self) -> PriceId {
        self.price_id
    }

    /// Brand the price belongs to.
    pub fn brand_id(&self) -> BrandId {
        self.brand_id
    }

    /// Product the price applies to.
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Tariff the price was published under.
    pub fn price_list_id(&self) -> PriceListId {
        self.price_list_id
    }

    /// Precedence among overlapping prices.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Closed validity window.
    pub fn window(&self) -> &ValidityWindow {
        &self.window
    }

    /// First instant the price applies.
    pub fn start_date(&self) -> Timestamp {
        self.window.start()
    }

    /// Last instant the price applies.
    pub fn end_date(&self) -> Timestamp {
        self.window.end()
    }

    /// The amount, exactly as loaded.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Currency of [`Self::price`].
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Whether this record is a candidate for `query`: same product, same
    /// brand, and a window containing the requested instant.
    pub fn applies_to(&self, query: &PriceQuery) -> bool {
        self.product_id == query.product
            && self.brand_id == query.brand
            && self.window.contains(query.at)
    }

    /// Orders two records by precedence: priority, then the later start,
    /// then the higher price list, then the higher price id.
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.window.start().cmp(&other.window.start()))
            .then_with(|| self.price_list_id.cmp(&other.price_list_id))
            .then_with(|| self.price_id.cmp(&other.price_id))
    }
}

impl TryFrom<NewPriceRecord> for PriceRecord {
    type Error = PriceRecordError;

    fn try_from(record: NewPriceRecord) -> Result<Self, Self::Error> {
        Self::new(record)
    }
}

impl From<PriceRecord> for NewPriceRecord {
    fn from(record: PriceRecord) -> Self {
        Self {
            price_id: record.price_id,
            brand_id: record.brand_id,
            product_id: record.product_id,
            price_list_id: record.price_list_id,
            priority: record.priority,
            start_date: record.window.start(),
            end_date: record.window.end(),
            price: record.price,
            currency: record.currency.into(),
        }
    }
}
