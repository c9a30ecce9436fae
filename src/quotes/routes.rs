//! Quote route handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::info;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::error::{AppError, Result};
use crate::models::{Quote, QuoteDetail, QuoteSummary, Role};
use crate::pricing;
use crate::AppState;

use super::builder;
use super::queries;
use super::requests::SaveQuoteRequest;

/// Router for /api/quotes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create).get(list))
        .route("/:id", get(show))
}

/// Price and persist a quote in one step. The saved numbers become the
/// source of truth; nothing recomputes them afterwards.
async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<SaveQuoteRequest>,
) -> Result<(StatusCode, Json<Quote>)> {
    let destination = pricing::services::cached_destination(
        &state.db,
        &state.cache,
        request.pricing.destination_id,
    )
    .await?
    .ok_or_else(|| AppError::Validation("Unknown destination".to_string()))?;

    let priced = pricing::price_itinerary(&state.db, &state.cache, &request.pricing).await?;
    let new_quote = builder::build_quote(user.id, &request, &priced, &destination.name)?;
    let quote = queries::insert_quote(&state.db, &new_quote).await?;

    info!(quote_id = %quote.id, package_code = %quote.package_code, "quote saved");
    Ok((StatusCode::CREATED, Json(quote)))
}

/// List quotes: salespersons see their own, owners see everything.
async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<QuoteSummary>>> {
    let quotes = match user.role {
        Role::Owner => queries::all_quotes(&state.db).await?,
        Role::Salesperson => queries::quotes_for_salesperson(&state.db, user.id).await?,
    };
    Ok(Json(quotes))
}

async fn show(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<QuoteDetail>> {
    let detail = queries::get_quote(&state.db, id)
        .await?
        .ok_or(AppError::NotFound)?;

    match user.role {
        Role::Owner => {}
        Role::Salesperson => {
            if detail.quote.salesperson_id != user.id {
                return Err(AppError::Forbidden);
            }
        }
    }

    Ok(Json(detail))
}
