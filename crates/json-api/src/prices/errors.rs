//! Price Errors

use salvo::http::StatusError;
use tracing::error;

use tariff_app::domain::prices::PricesServiceError;

pub(crate) fn into_status_error(error: PricesServiceError) -> StatusError {
    match error {
        PricesServiceError::StoreUnavailable(source) => {
            error!("price store unavailable: {source}");

            StatusError::service_unavailable().brief("Price store unavailable")
        }
        PricesServiceError::InvariantViolation(source) => {
            error!("price store returned an invalid record: {source}");

            StatusError::internal_server_error()
        }
    }
}
