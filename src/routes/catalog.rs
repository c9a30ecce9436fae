//! Catalog route handlers
//!
//! Reads serve the quote builder; mutations are owner-only and invalidate
//! the catalog caches so new rates take effect on the next quote.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::db::queries;
use crate::error::Result;
use crate::models::{
    Destination, Hotel, NewDestination, NewHotel, NewPackagePolicy, NewPlace, NewTrainPrice,
    NewTransportPrice, PackagePolicy, Place, TrainPrice, TransportPrice,
};
use crate::AppState;

/// Router for /api/destinations
pub fn destinations_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_destinations).post(create_destination))
        .route("/:id", delete(delete_destination))
        .route("/:id/places", get(list_places))
        .route("/:id/hotels", get(list_destination_hotels))
        .route("/:id/transport", get(list_transport))
        .route("/:id/policies", get(list_policies))
}

/// Router for /api/places
pub fn places_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_place))
        .route("/:id", delete(delete_place))
        .route("/:id/hotels", get(list_place_hotels))
}

/// Router for /api/hotels
pub fn hotels_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_hotel))
        .route("/:id", delete(delete_hotel))
}

/// Router for /api/trains
pub fn trains_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trains).post(create_train))
        .route("/:id", delete(delete_train))
}

/// Router for /api/transport
pub fn transport_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_transport))
        .route("/:id", delete(delete_transport))
}

/// Router for /api/policies
pub fn policies_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_policy))
        .route("/:id", delete(delete_policy))
}

async fn list_destinations(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> Result<Json<Vec<Destination>>> {
    Ok(Json(queries::get_destinations(&state.db).await?))
}

async fn create_destination(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<NewDestination>,
) -> Result<(StatusCode, Json<Destination>)> {
    user.require_owner()?;
    let destination = queries::create_destination(&state.db, &payload).await?;
    state.cache.invalidate_catalog();
    Ok((StatusCode::CREATED, Json(destination)))
}

async fn delete_destination(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    user.require_owner()?;
    queries::delete_destination(&state.db, id).await?;
    state.cache.invalidate_catalog();
    Ok(StatusCode::NO_CONTENT)
}

async fn list_places(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Place>>> {
    Ok(Json(queries::get_places_for_destination(&state.db, id).await?))
}

async fn create_place(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<NewPlace>,
) -> Result<(StatusCode, Json<Place>)> {
    user.require_owner()?;
    let place = queries::create_place(&state.db, &payload).await?;
    state.cache.invalidate_catalog();
    Ok((StatusCode::CREATED, Json(place)))
}

async fn delete_place(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    user.require_owner()?;
    queries::delete_place(&state.db, id).await?;
    state.cache.invalidate_catalog();
    Ok(StatusCode::NO_CONTENT)
}

async fn list_place_hotels(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Hotel>>> {
    Ok(Json(queries::get_hotels_for_place(&state.db, id).await?))
}

async fn list_destination_hotels(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Hotel>>> {
    Ok(Json(
        queries::get_hotels_for_destination(&state.db, id).await?,
    ))
}

async fn create_hotel(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<NewHotel>,
) -> Result<(StatusCode, Json<Hotel>)> {
    user.require_owner()?;
    let hotel = queries::create_hotel(&state.db, &payload).await?;
    state.cache.invalidate_catalog();
    Ok((StatusCode::CREATED, Json(hotel)))
}

async fn delete_hotel(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    user.require_owner()?;
    queries::delete_hotel(&state.db, id).await?;
    state.cache.invalidate_catalog();
    Ok(StatusCode::NO_CONTENT)
}

async fn list_trains(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> Result<Json<Vec<TrainPrice>>> {
    Ok(Json(queries::get_train_prices(&state.db).await?))
}

async fn create_train(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<NewTrainPrice>,
) -> Result<(StatusCode, Json<TrainPrice>)> {
    user.require_owner()?;
    let train = queries::create_train_price(&state.db, &payload).await?;
    Ok((StatusCode::CREATED, Json(train)))
}

async fn delete_train(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    user.require_owner()?;
    queries::delete_train_price(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_transport(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<TransportPrice>>> {
    Ok(Json(
        queries::get_transport_for_destination(&state.db, id).await?,
    ))
}

async fn create_transport(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<NewTransportPrice>,
) -> Result<(StatusCode, Json<TransportPrice>)> {
    user.require_owner()?;
    let transport = queries::create_transport_price(&state.db, &payload).await?;
    Ok((StatusCode::CREATED, Json(transport)))
}

async fn delete_transport(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    user.require_owner()?;
    queries::delete_transport_price(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_policies(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<PackagePolicy>>> {
    Ok(Json(
        queries::get_policies_for_destination(&state.db, id).await?,
    ))
}

async fn create_policy(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<NewPackagePolicy>,
) -> Result<(StatusCode, Json<PackagePolicy>)> {
    user.require_owner()?;
    let policy = queries::create_policy(&state.db, &payload).await?;
    Ok((StatusCode::CREATED, Json(policy)))
}

async fn delete_policy(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    user.require_owner()?;
    queries::delete_policy(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
