//! Recurrence endpoints: the API forwards cycle records here for expansion.

mod expand;

use salvo::Router;

use super::{CYCLE_ROUTE_COMPONENT, EXPAND_ROUTE_COMPONENT};

#[must_use]
pub fn routes() -> Router {
    Router::with_path(CYCLE_ROUTE_COMPONENT)
        .push(Router::with_path(EXPAND_ROUTE_COMPONENT).post(expand::expand_cycle))
}
