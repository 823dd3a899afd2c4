//! Test Helpers

use rust_decimal::Decimal;
use tariff::prelude::{
    BrandId, NewPriceRecord, PriceId, PriceListId, PriceRecord, Priority, ProductId,
};
use testresult::TestResult;

/// Builds a EUR price for brand 1, product 35455, listed under price list `id`.
pub(crate) fn price(
    id: i64,
    priority: i32,
    (start, end): (&str, &str),
    cents: i64,
) -> TestResult<PriceRecord> {
    price_for(id, (1, 35_455), priority, (start, end), cents)
}

/// Builds a EUR price for the given `(brand, product)` pair.
pub(crate) fn price_for(
    id: i64,
    (brand, product): (i64, i64),
    priority: i32,
    (start, end): (&str, &str),
    cents: i64,
) -> TestResult<PriceRecord> {
    Ok(PriceRecord::new(NewPriceRecord {
        price_id: PriceId::new(id),
        brand_id: BrandId::new(brand),
        product_id: ProductId::new(product),
        price_list_id: PriceListId::new(id),
        priority: Priority(priority),
        start_date: start.parse()?,
        end_date: end.parse()?,
        price: Decimal::new(cents, 2),
        currency: "EUR".to_string(),
    })?)
}
