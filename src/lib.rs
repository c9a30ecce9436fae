//! Quoting backend for multi-destination tour packages.
//!
//! Salespersons assemble itineraries against owner-managed price catalogs
//! and save costed quotes; owners approve accounts and review every quote.
//! The pricing math lives in [`pricing::calculators`] and is pure; all
//! authentication state lives in the database.

pub mod auth;
pub mod cache;
pub mod db;
pub mod error;
pub mod models;
pub mod pricing;
pub mod quotes;
pub mod routes;

use axum::{extract::State, routing::get, Json, Router};
use sqlx::PgPool;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use cache::AppCache;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub cache: AppCache,
}

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", auth::routes::auth_router())
        .nest("/api/users", auth::routes::users_router())
        .nest("/api/admins", auth::routes::admins_router())
        .nest("/api/destinations", routes::catalog::destinations_router())
        .nest("/api/places", routes::catalog::places_router())
        .nest("/api/hotels", routes::catalog::hotels_router())
        .nest("/api/trains", routes::catalog::trains_router())
        .nest("/api/transport", routes::catalog::transport_router())
        .nest("/api/policies", routes::catalog::policies_router())
        .nest("/api/pricing", pricing::router())
        .nest("/api/quotes", quotes::router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "cache": state.cache.stats(),
    }))
}
