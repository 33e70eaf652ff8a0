use std::collections::HashMap;

use axum::{Extension, extract::Query, response::Json};
use serde_json::{Value, json};

use super::GatewayState;

/// `GET /search?q=` - forwards the query to the search API.
///
/// Always answers with `{"results": [...]}`; a missing query or an upstream
/// failure yields an empty list.
pub async fn search(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<GatewayState>,
) -> Json<Value> {
    let query = params.get("q").map(|q| q.trim()).unwrap_or_default();
    if query.is_empty() {
        return Json(json!({ "results": [] }));
    }

    let results = match state.catalog.search_songs(query).await {
        Ok(results) => results,
        Err(e) => {
            log::warn!("Search for {:?} failed: {}", query, e);
            Vec::new()
        }
    };

    Json(json!({ "results": results }))
}
