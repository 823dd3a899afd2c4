//! Effective Price Handler

use salvo::{oapi::extract::QueryParam, prelude::*};
use tariff::prelude::{BrandId, PriceQuery, ProductId};

use crate::{
    extensions::*,
    observability::{LookupOutcome, observe_price_lookup},
    prices::{errors::into_status_error, models::PriceResponse},
};

/// Effective Price Handler
///
/// Returns the price in effect for a product and brand at an instant, or
/// `204 No Content` when no price applies. `at` defaults to now.
#[endpoint(
    tags("prices"),
    summary = "Get Effective Price",
    responses(
        (status_code = StatusCode::OK, description = "Price in effect", body = PriceResponse),
        (status_code = StatusCode::NO_CONTENT, description = "No applicable price"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Price store unavailable"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    at: QueryParam<String, false>,
    product: QueryParam<i64, true>,
    brand: QueryParam<i64, true>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;

    let query = PriceQuery::new(
        at.into_point_in_time()?,
        ProductId::new(product.into_inner()),
        BrandId::new(brand.into_inner()),
    );

    let price = state
        .app
        .prices
        .get_effective_price(query)
        .await
        .map_err(|error| {
            observe_price_lookup(LookupOutcome::Failed);

            into_status_error(error)
        })?;

    let Some(price) = price else {
        observe_price_lookup(LookupOutcome::NotFound);

        return Ok(StatusCode::NO_CONTENT);
    };

    observe_price_lookup(LookupOutcome::Found);

    res.render(Json(PriceResponse::from(price)));

    Ok(StatusCode::OK)
}
