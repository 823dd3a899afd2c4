//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};
use tariff_app::{context::AppContext, domain::prices::MockPricesService};

use crate::state::State;

pub(crate) fn state_with_prices(prices: MockPricesService) -> Arc<State> {
    State::from_app_context(AppContext {
        prices: Arc::new(prices),
    })
}

pub(crate) fn prices_service(prices: MockPricesService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_prices(prices)))
            .push(route),
    )
}
