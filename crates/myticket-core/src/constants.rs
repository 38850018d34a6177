/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const CYCLE_ROUTE_COMPONENT: &str = "cycles";
pub const CYCLE_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", CYCLE_ROUTE_COMPONENT);

pub const EXPAND_ROUTE_COMPONENT: &str = "expand";
pub const CYCLE_EXPAND_ROUTE: &str =
    const_str::concat!(CYCLE_ROUTE_PREFIX, "/", EXPAND_ROUTE_COMPONENT);
