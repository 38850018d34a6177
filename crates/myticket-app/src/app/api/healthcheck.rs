use salvo::prelude::Json;
use salvo::{Router, handler};
use serde_json::json;

#[handler]
async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("healthcheck").get(healthcheck)
}
