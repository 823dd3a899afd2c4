//! App Router

use salvo::Router;

use crate::{healthcheck, prices};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("prices")
                .get(prices::index::handler)
                .push(Router::with_path("effective").get(prices::effective::handler)),
        )
}
