//! Quote pricing with catalog access.
//!
//! Resolves the builder's selections (place, hotel, meal plan, train,
//! transport) to concrete rates, then delegates the arithmetic to the
//! pure functions in [`super::calculators`].

use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::cache::AppCache;
use crate::db::queries;
use crate::error::{AppError, Result};
use crate::models::{Destination, Hotel};

use super::calculators;
use super::models::{
    CostBreakdown, Party, PricedStop, TrainFare, TrainRouteInfo, TransportInfo, TransportRate,
};
use super::requests::{PriceQuoteRequest, StopRequest};

/// A fully priced itinerary: resolved stops, route/transport details for
/// the quote blob, and the computed breakdown.
#[derive(Debug, Clone)]
pub struct PricedItinerary {
    pub stops: Vec<PricedStop>,
    pub train_route: Option<TrainRouteInfo>,
    pub transport: Option<TransportInfo>,
    pub costs: CostBreakdown,
}

async fn cached_hotel(pool: &PgPool, cache: &AppCache, id: Uuid) -> Result<Option<Arc<Hotel>>> {
    if let Some(hotel) = cache.hotels.get(&id).await {
        tracing::debug!("Cache HIT for hotel: {}", id);
        return Ok(Some(hotel));
    }

    match queries::get_hotel(pool, id).await? {
        Some(hotel) => {
            let hotel = Arc::new(hotel);
            cache.hotels.insert(id, Arc::clone(&hotel)).await;
            Ok(Some(hotel))
        }
        None => Ok(None),
    }
}

/// Destination lookup through the cache.
pub async fn cached_destination(
    pool: &PgPool,
    cache: &AppCache,
    id: Uuid,
) -> Result<Option<Arc<Destination>>> {
    if let Some(destination) = cache.destinations.get(&id).await {
        return Ok(Some(destination));
    }

    match queries::get_destination(pool, id).await? {
        Some(destination) => {
            let destination = Arc::new(destination);
            cache
                .destinations
                .insert(id, Arc::clone(&destination))
                .await;
            Ok(Some(destination))
        }
        None => Ok(None),
    }
}

async fn resolve_stop(pool: &PgPool, cache: &AppCache, stop: &StopRequest) -> Result<PricedStop> {
    let place = queries::get_place(pool, stop.place_id)
        .await?
        .ok_or_else(|| AppError::Validation("Unknown place in itinerary".to_string()))?;

    let meal_plan = stop.meal_plan.unwrap_or_default();

    let hotel = match stop.hotel_id {
        Some(hotel_id) => {
            let hotel = cached_hotel(pool, cache, hotel_id)
                .await?
                .ok_or_else(|| AppError::Validation("Unknown hotel in itinerary".to_string()))?;
            Some(hotel)
        }
        None => None,
    };

    let (nightly_rate, extra_adult_rate, extra_child_rate) = match &hotel {
        Some(hotel) => (
            hotel.nightly_rate(meal_plan),
            hotel.extra_adult_with_mattress,
            hotel.extra_child_without_mattress,
        ),
        None => (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
    };

    Ok(PricedStop {
        place_id: place.id,
        place_name: place.name,
        hotel_id: hotel.as_ref().map(|h| h.id),
        hotel_name: hotel.as_ref().map(|h| h.name.clone()),
        hotel_category: hotel.as_ref().map(|h| h.category.clone()),
        room_type: hotel.as_ref().map(|h| h.room_type.clone()),
        meal_plan,
        nightly_rate,
        extra_adult_rate,
        extra_child_rate,
        days: stop.days,
        nights: stop.nights,
        check_in_date: stop.check_in_date,
        check_out_date: stop.check_out_date,
    })
}

/// Resolve and price a full itinerary request.
///
/// A train selection whose id and class do not match a catalog row, or a
/// transport selection outside the trip's destination, resolves to no
/// selection and contributes zero cost.
pub async fn price_itinerary(
    pool: &PgPool,
    cache: &AppCache,
    request: &PriceQuoteRequest,
) -> Result<PricedItinerary> {
    let mut stops = Vec::with_capacity(request.stops.len());
    for stop in &request.stops {
        stops.push(resolve_stop(pool, cache, stop).await?);
    }

    let train_route = match (request.train_price_id, request.train_class.as_deref()) {
        (Some(id), Some(class)) => queries::find_train_price(pool, id, class).await?.map(|t| {
            TrainRouteInfo {
                id: t.id,
                route: format!("{}-{}", t.from_city, t.to_city),
                from_city: t.from_city,
                to_city: t.to_city,
                class: t.class,
                price_per_person: t.price_per_person,
            }
        }),
        _ => None,
    };

    let transport = match request.transport_price_id {
        Some(id) => queries::find_transport_price(pool, id, request.destination_id)
            .await?
            .map(|t| TransportInfo {
                id: t.id,
                vehicle_type: t.vehicle_type,
                vehicle_name: t.vehicle_name,
                price_per_day: t.price_per_day,
            }),
        None => None,
    };

    let party = Party {
        num_adults: request.num_adults,
        num_children: request.num_children,
        extra_adults: request.extra_adult_count,
        extra_children: request.extra_child_count,
    };

    let resolved: Vec<_> = stops.iter().map(PricedStop::as_resolved).collect();
    let train_fare = train_route.as_ref().map(|t| TrainFare {
        price_per_person: t.price_per_person,
    });
    let transport_rate = transport.as_ref().map(|t| TransportRate {
        price_per_day: t.price_per_day,
    });

    let costs = calculators::compute_costs(
        &resolved,
        party,
        train_fare.as_ref(),
        transport_rate.as_ref(),
    );

    Ok(PricedItinerary {
        stops,
        train_route,
        transport,
        costs,
    })
}
