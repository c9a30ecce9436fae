//! Pricing route handlers

use axum::{extract::State, routing::post, Json, Router};

use crate::auth::CurrentUser;
use crate::error::Result;
use crate::AppState;

use super::requests::PriceQuoteRequest;
use super::responses::{CostBreakdownResponse, PricePreviewResponse};
use super::services;

/// Router for /api/pricing
pub fn router() -> Router<AppState> {
    Router::new().route("/preview", post(preview))
}

/// Price an itinerary without saving it, so the builder can show live
/// totals while the salesperson edits.
async fn preview(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Json(request): Json<PriceQuoteRequest>,
) -> Result<Json<PricePreviewResponse>> {
    let priced = services::price_itinerary(&state.db, &state.cache, &request).await?;

    Ok(Json(PricePreviewResponse {
        costs: CostBreakdownResponse::from(&priced.costs),
        stops: priced.stops,
        train_route: priced.train_route,
        transport: priced.transport,
    }))
}
