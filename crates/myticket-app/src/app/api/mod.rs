mod cycles;
mod healthcheck;

use salvo::Router;

// Re-export route constants from core
pub use myticket_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, CYCLE_EXPAND_ROUTE, CYCLE_ROUTE_COMPONENT,
    CYCLE_ROUTE_PREFIX, EXPAND_ROUTE_COMPONENT,
};

/// ## Summary
/// Constructs the API router.
///
/// Entity CRUD lives elsewhere; this router only serves what needs the
/// scheduling core.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(healthcheck::routes())
        .push(cycles::routes())
}
