//! Effective price scenarios over the reference price list

use jiff::Timestamp;
use rust_decimal::Decimal;
use tariff::prelude::*;
use testresult::TestResult;

const BRAND: BrandId = BrandId::new(1);
const PRODUCT: ProductId = ProductId::new(35_455);

fn record(
    id: i64,
    priority: i32,
    window: (&str, &str),
    cents: i64,
) -> TestResult<PriceRecord> {
    Ok(PriceRecord::new(NewPriceRecord {
        price_id: PriceId::new(id),
        brand_id: BRAND,
        product_id: PRODUCT,
        price_list_id: PriceListId::new(id),
        priority: Priority(priority),
        start_date: window.0.parse::<Timestamp>()?,
        end_date: window.1.parse::<Timestamp>()?,
        price: Decimal::new(cents, 2),
        currency: "EUR".to_string(),
    })?)
}

fn reference_prices() -> TestResult<Vec<PriceRecord>> {
    Ok(vec![
        record(1, 0, ("2020-06-14T00:00:00Z", "2020-12-31T23:59:59Z"), 35_50)?,
        record(2, 1, ("2020-06-14T15:00:00Z", "2020-06-14T18:30:00Z"), 25_45)?,
        record(3, 1, ("2020-06-15T00:00:00Z", "2020-06-15T11:00:00Z"), 30_50)?,
        record(4, 1, ("2020-06-15T16:00:00Z", "2020-12-31T23:59:59Z"), 38_95)?,
    ])
}

/// Narrows like a conforming store would, then resolves.
fn effective_price_at(prices: &[PriceRecord], at: &str) -> TestResult<Option<PriceRecord>> {
    let query = PriceQuery::new(at.parse()?, PRODUCT, BRAND);
    let candidates: Vec<&PriceRecord> = prices
        .iter()
        .filter(|price| price.applies_to(&query))
        .collect();

    Ok(resolve_effective_price(candidates).cloned())
}

fn assert_price_list(result: Option<&PriceRecord>, list: i64, cents: i64) {
    let Some(price) = result else {
        assert!(result.is_some(), "expected price list {list} to apply");
        return;
    };

    assert_eq!(price.price_list_id(), PriceListId::new(list));
    assert_eq!(price.price(), Decimal::new(cents, 2));
}

#[test]
fn day_14_at_10_uses_base_price_list() -> TestResult {
    let prices = reference_prices()?;

    assert_price_list(
        effective_price_at(&prices, "2020-06-14T10:00:00Z")?.as_ref(),
        1,
        35_50,
    );

    Ok(())
}

#[test]
fn day_14_at_16_uses_afternoon_promotion() -> TestResult {
    let prices = reference_prices()?;

    assert_price_list(
        effective_price_at(&prices, "2020-06-14T16:00:00Z")?.as_ref(),
        2,
        25_45,
    );

    Ok(())
}

#[test]
fn day_14_at_21_falls_back_to_base_price_list() -> TestResult {
    let prices = reference_prices()?;

    assert_price_list(
        effective_price_at(&prices, "2020-06-14T21:00:00Z")?.as_ref(),
        1,
        35_50,
    );

    Ok(())
}

#[test]
fn day_15_at_10_uses_morning_price_list() -> TestResult {
    let prices = reference_prices()?;

    assert_price_list(
        effective_price_at(&prices, "2020-06-15T10:00:00Z")?.as_ref(),
        3,
        30_50,
    );

    Ok(())
}

#[test]
fn day_16_at_21_uses_late_price_list() -> TestResult {
    let prices = reference_prices()?;

    assert_price_list(
        effective_price_at(&prices, "2020-06-16T21:00:00Z")?.as_ref(),
        4,
        38_95,
    );

    Ok(())
}

#[test]
fn window_end_is_inclusive() -> TestResult {
    let prices = reference_prices()?;

    assert_price_list(
        effective_price_at(&prices, "2020-06-14T18:30:00Z")?.as_ref(),
        2,
        25_45,
    );
    assert_price_list(
        effective_price_at(&prices, "2020-06-14T18:30:01Z")?.as_ref(),
        1,
        35_50,
    );

    Ok(())
}

#[test]
fn before_any_window_has_no_price() -> TestResult {
    let prices = reference_prices()?;

    assert!(effective_price_at(&prices, "2020-06-13T23:59:59Z")?.is_none());

    Ok(())
}

#[test]
fn unknown_product_has_no_price() -> TestResult {
    let prices = reference_prices()?;
    let query = PriceQuery::new("2020-06-14T10:00:00Z".parse()?, ProductId::new(1), BRAND);

    assert!(!prices.iter().any(|price| price.applies_to(&query)));

    Ok(())
}

#[test]
fn reference_prices_have_no_conflicts() -> TestResult {
    assert!(find_conflicts(&reference_prices()?).is_empty());

    Ok(())
}
