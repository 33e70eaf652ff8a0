use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr};

use crate::{api, api::GatewayState, error, info};

pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/health", get(api::health))
        .route("/search", get(api::search))
        .route("/add_favorite", post(api::add_favorite))
        .route("/remove_favorite", post(api::remove_favorite))
        .route("/get_favorites", get(api::get_favorites))
        .route("/add_history", post(api::add_history))
        .route("/get_history", get(api::get_history))
        .layer(Extension(state))
}

pub async fn start_api_server(addr: &str, state: GatewayState) {
    let addr = match SocketAddr::from_str(addr) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address {}: {}", addr, e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    info!("Gateway listening on http://{}", addr);
    if let Err(e) = axum::serve(listener, router(state)).await {
        error!("Server stopped: {}", e);
    }
}
