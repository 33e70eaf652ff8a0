use axum::{Extension, response::Json};
use serde_json::{Value, json};

use super::GatewayState;

/// `GET /health` - liveness plus the size of the in-memory library.
pub async fn health(Extension(state): Extension<GatewayState>) -> Json<Value> {
    let library = state.library.lock().await;
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "favorites": library.favorites().len(),
        "history": library.history().len(),
    }))
}
