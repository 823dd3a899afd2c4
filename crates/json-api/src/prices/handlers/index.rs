//! Price Index Handler

use salvo::prelude::*;

use crate::{
    extensions::*,
    prices::{
        errors::into_status_error,
        models::{PriceResponse, PricesResponse},
    },
};

/// Price Index Handler
///
/// Returns every price record, unfiltered, in store order.
#[endpoint(
    tags("prices"),
    summary = "List Prices",
    responses(
        (status_code = StatusCode::OK, description = "All price records", body = PricesResponse),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Price store unavailable"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<PricesResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let prices = state
        .app
        .prices
        .get_all_prices()
        .await
        .map_err(into_status_error)?;

    Ok(Json(PricesResponse {
        prices: prices.into_iter().map(PriceResponse::from).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use tariff_app::{
        context::AppContext,
        domain::prices::{InMemoryPriceStore, MockPricesService, PricesServiceError},
    };

    use crate::{state::State, test_helpers::prices_service};

    use super::{
        super::tests::{make_price, make_price_for},
        *,
    };

    fn make_service(prices: MockPricesService) -> Service {
        prices_service(prices, Router::with_path("prices").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut prices = MockPricesService::new();

        prices
            .expect_get_all_prices()
            .once()
            .return_once(|| Ok(vec![]));
        prices.expect_get_effective_price().never();

        let mut res = TestClient::get("http://example.com/prices")
            .send(&make_service(prices))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let response: PricesResponse = res.take_json().await?;

        assert!(response.prices.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_prices_in_store_order() -> TestResult {
        let records = vec![
            make_price(3, 1, ("2020-06-15T00:00:00Z", "2020-06-15T11:00:00Z"), 30_50)?,
            make_price(1, 0, ("2020-06-14T00:00:00Z", "2020-12-31T23:59:59Z"), 35_50)?,
            make_price(2, 1, ("2020-06-14T15:00:00Z", "2020-06-14T18:30:00Z"), 25_45)?,
        ];

        let mut prices = MockPricesService::new();

        prices
            .expect_get_all_prices()
            .once()
            .return_once(move || Ok(records));
        prices.expect_get_effective_price().never();

        let response: PricesResponse = TestClient::get("http://example.com/prices")
            .send(&make_service(prices))
            .await
            .take_json()
            .await?;

        let ids: Vec<i64> = response.prices.iter().map(|price| price.price_id).collect();

        assert_eq!(ids, [3, 1, 2]);
        assert_eq!(
            response.prices.first().map(|price| price.price.as_str()),
            Some("30.50")
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_lists_every_product_and_brand_unfiltered() -> TestResult {
        let store = InMemoryPriceStore::new(vec![
            make_price_for(5, (2, 35_455), 0, ("2020-06-14T00:00:00Z", "2020-12-31T23:59:59Z"), 40_00)?,
            make_price_for(1, (1, 35_455), 0, ("2020-06-14T00:00:00Z", "2020-12-31T23:59:59Z"), 35_50)?,
            make_price_for(9, (1, 12_345), 3, ("2021-01-01T00:00:00Z", "2021-01-31T23:59:59Z"), 9_99)?,
            make_price_for(2, (1, 35_455), 1, ("2020-06-14T15:00:00Z", "2020-06-14T18:30:00Z"), 25_45)?,
            make_price_for(7, (2, 12_345), 2, ("2020-01-01T00:00:00Z", "2020-01-01T00:00:00Z"), 1_00)?,
        ])?;

        let service = Service::new(
            Router::new()
                .hoop(salvo::affix_state::inject(State::from_app_context(
                    AppContext::from_store(store),
                )))
                .push(Router::with_path("prices").get(handler)),
        );

        let mut res = TestClient::get("http://example.com/prices")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let response: PricesResponse = res.take_json().await?;

        let rows: Vec<(i64, i64, i64, i32)> = response
            .prices
            .iter()
            .map(|price| (price.price_id, price.brand_id, price.product_id, price.priority))
            .collect();

        assert_eq!(
            rows,
            [
                (5, 2, 35_455, 0),
                (1, 1, 35_455, 0),
                (9, 1, 12_345, 3),
                (2, 1, 35_455, 1),
                (7, 2, 12_345, 2),
            ]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_store_unavailable_returns_503() {
        let mut prices = MockPricesService::new();

        prices
            .expect_get_all_prices()
            .once()
            .return_once(|| Err(PricesServiceError::StoreUnavailable(sqlx::Error::PoolTimedOut)));
        prices.expect_get_effective_price().never();

        let res = TestClient::get("http://example.com/prices")
            .send(&make_service(prices))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::SERVICE_UNAVAILABLE));
    }
}
