//! Database queries for the price catalogs.
//!
//! The pricing engine consumes these tables read-only; owners maintain
//! them through the catalog routes.

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{
    Destination, Hotel, NewDestination, NewHotel, NewPackagePolicy, NewPlace, NewTrainPrice,
    NewTransportPrice, PackagePolicy, Place, TrainPrice, TransportPrice,
};

const HOTEL_COLUMNS: &str = "id, place_id, name, category, room_type, price_per_night, \
     price_ep, price_cp, price_map, price_ap, \
     extra_adult_with_mattress, extra_child_without_mattress, is_active, created_at";

/// All destinations, alphabetical
pub async fn get_destinations(pool: &PgPool) -> Result<Vec<Destination>> {
    let destinations = sqlx::query_as::<_, Destination>(
        "SELECT id, name, description, created_at FROM destinations ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    Ok(destinations)
}

/// Destination by id
pub async fn get_destination(pool: &PgPool, id: Uuid) -> Result<Option<Destination>> {
    let destination = sqlx::query_as::<_, Destination>(
        "SELECT id, name, description, created_at FROM destinations WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(destination)
}

pub async fn create_destination(pool: &PgPool, new: &NewDestination) -> Result<Destination> {
    let destination = sqlx::query_as::<_, Destination>(
        r#"
        INSERT INTO destinations (name, description)
        VALUES ($1, $2)
        RETURNING id, name, description, created_at
        "#,
    )
    .bind(&new.name)
    .bind(&new.description)
    .fetch_one(pool)
    .await?;

    Ok(destination)
}

pub async fn delete_destination(pool: &PgPool, id: Uuid) -> Result<()> {
    sqlx::query("DELETE FROM destinations WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Places belonging to a destination
pub async fn get_places_for_destination(pool: &PgPool, destination_id: Uuid) -> Result<Vec<Place>> {
    let places = sqlx::query_as::<_, Place>(
        r#"
        SELECT id, destination_id, name, description, created_at
        FROM places
        WHERE destination_id = $1
        ORDER BY name
        "#,
    )
    .bind(destination_id)
    .fetch_all(pool)
    .await?;

    Ok(places)
}

/// Place by id
pub async fn get_place(pool: &PgPool, id: Uuid) -> Result<Option<Place>> {
    let place = sqlx::query_as::<_, Place>(
        "SELECT id, destination_id, name, description, created_at FROM places WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(place)
}

pub async fn create_place(pool: &PgPool, new: &NewPlace) -> Result<Place> {
    let place = sqlx::query_as::<_, Place>(
        r#"
        INSERT INTO places (destination_id, name, description)
        VALUES ($1, $2, $3)
        RETURNING id, destination_id, name, description, created_at
        "#,
    )
    .bind(new.destination_id)
    .bind(&new.name)
    .bind(&new.description)
    .fetch_one(pool)
    .await?;

    Ok(place)
}

pub async fn delete_place(pool: &PgPool, id: Uuid) -> Result<()> {
    sqlx::query("DELETE FROM places WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Active hotels at a place
pub async fn get_hotels_for_place(pool: &PgPool, place_id: Uuid) -> Result<Vec<Hotel>> {
    let hotels = sqlx::query_as::<_, Hotel>(&format!(
        r#"
        SELECT {HOTEL_COLUMNS}
        FROM hotels
        WHERE place_id = $1
          AND is_active = TRUE
        ORDER BY name
        "#
    ))
    .bind(place_id)
    .fetch_all(pool)
    .await?;

    Ok(hotels)
}

/// Active hotels anywhere in a destination (for the quote builder's
/// hotel picker)
pub async fn get_hotels_for_destination(pool: &PgPool, destination_id: Uuid) -> Result<Vec<Hotel>> {
    let hotels = sqlx::query_as::<_, Hotel>(
        r#"
        SELECT h.id, h.place_id, h.name, h.category, h.room_type, h.price_per_night,
               h.price_ep, h.price_cp, h.price_map, h.price_ap,
               h.extra_adult_with_mattress, h.extra_child_without_mattress,
               h.is_active, h.created_at
        FROM hotels h
        JOIN places p ON h.place_id = p.id
        WHERE p.destination_id = $1
          AND h.is_active = TRUE
        ORDER BY h.name
        "#,
    )
    .bind(destination_id)
    .fetch_all(pool)
    .await?;

    Ok(hotels)
}

/// Hotel by id
pub async fn get_hotel(pool: &PgPool, id: Uuid) -> Result<Option<Hotel>> {
    let hotel = sqlx::query_as::<_, Hotel>(&format!(
        "SELECT {HOTEL_COLUMNS} FROM hotels WHERE id = $1 AND is_active = TRUE"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(hotel)
}

pub async fn create_hotel(pool: &PgPool, new: &NewHotel) -> Result<Hotel> {
    use rust_decimal::Decimal;

    // A hotel created without a generic rate falls back to its MAP rate,
    // matching how the builder treats MAP as the default plan.
    let price_map = new.price_map.unwrap_or(Decimal::ZERO);
    let price_per_night = new.price_per_night.unwrap_or(price_map);

    let hotel = sqlx::query_as::<_, Hotel>(&format!(
        r#"
        INSERT INTO hotels (
            place_id, name, category, room_type, price_per_night,
            price_ep, price_cp, price_map, price_ap,
            extra_adult_with_mattress, extra_child_without_mattress
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING {HOTEL_COLUMNS}
        "#
    ))
    .bind(new.place_id)
    .bind(&new.name)
    .bind(&new.category)
    .bind(new.room_type.as_deref().unwrap_or("Deluxe Room"))
    .bind(price_per_night)
    .bind(new.price_ep.unwrap_or(Decimal::ZERO))
    .bind(new.price_cp.unwrap_or(Decimal::ZERO))
    .bind(price_map)
    .bind(new.price_ap.unwrap_or(Decimal::ZERO))
    .bind(new.extra_adult_with_mattress.unwrap_or(Decimal::ZERO))
    .bind(new.extra_child_without_mattress.unwrap_or(Decimal::ZERO))
    .fetch_one(pool)
    .await?;

    Ok(hotel)
}

pub async fn delete_hotel(pool: &PgPool, id: Uuid) -> Result<()> {
    sqlx::query("DELETE FROM hotels WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// All active train fares
pub async fn get_train_prices(pool: &PgPool) -> Result<Vec<TrainPrice>> {
    let trains = sqlx::query_as::<_, TrainPrice>(
        r#"
        SELECT id, from_city, to_city, class, price_per_person, is_active, created_at
        FROM train_prices
        WHERE is_active = TRUE
        ORDER BY from_city, to_city
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(trains)
}

/// Train fare for a route + class. A class mismatch yields no fare.
pub async fn find_train_price(pool: &PgPool, id: Uuid, class: &str) -> Result<Option<TrainPrice>> {
    let train = sqlx::query_as::<_, TrainPrice>(
        r#"
        SELECT id, from_city, to_city, class, price_per_person, is_active, created_at
        FROM train_prices
        WHERE id = $1
          AND class = $2
          AND is_active = TRUE
        "#,
    )
    .bind(id)
    .bind(class)
    .fetch_optional(pool)
    .await?;

    Ok(train)
}

pub async fn create_train_price(pool: &PgPool, new: &NewTrainPrice) -> Result<TrainPrice> {
    let train = sqlx::query_as::<_, TrainPrice>(
        r#"
        INSERT INTO train_prices (from_city, to_city, class, price_per_person)
        VALUES ($1, $2, $3, $4)
        RETURNING id, from_city, to_city, class, price_per_person, is_active, created_at
        "#,
    )
    .bind(&new.from_city)
    .bind(&new.to_city)
    .bind(&new.class)
    .bind(new.price_per_person)
    .fetch_one(pool)
    .await?;

    Ok(train)
}

pub async fn delete_train_price(pool: &PgPool, id: Uuid) -> Result<()> {
    sqlx::query("DELETE FROM train_prices WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Active transport options for a destination
pub async fn get_transport_for_destination(
    pool: &PgPool,
    destination_id: Uuid,
) -> Result<Vec<TransportPrice>> {
    let transport = sqlx::query_as::<_, TransportPrice>(
        r#"
        SELECT id, destination_id, vehicle_type, vehicle_name, capacity,
               price_per_day, is_active, created_at
        FROM transport_prices
        WHERE destination_id = $1
          AND is_active = TRUE
        ORDER BY vehicle_type, vehicle_name
        "#,
    )
    .bind(destination_id)
    .fetch_all(pool)
    .await?;

    Ok(transport)
}

/// Transport by id, scoped to the trip's destination. A destination
/// mismatch yields no transport.
pub async fn find_transport_price(
    pool: &PgPool,
    id: Uuid,
    destination_id: Uuid,
) -> Result<Option<TransportPrice>> {
    let transport = sqlx::query_as::<_, TransportPrice>(
        r#"
        SELECT id, destination_id, vehicle_type, vehicle_name, capacity,
               price_per_day, is_active, created_at
        FROM transport_prices
        WHERE id = $1
          AND destination_id = $2
          AND is_active = TRUE
        "#,
    )
    .bind(id)
    .bind(destination_id)
    .fetch_optional(pool)
    .await?;

    Ok(transport)
}

pub async fn create_transport_price(
    pool: &PgPool,
    new: &NewTransportPrice,
) -> Result<TransportPrice> {
    let transport = sqlx::query_as::<_, TransportPrice>(
        r#"
        INSERT INTO transport_prices (destination_id, vehicle_type, vehicle_name, capacity, price_per_day)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, destination_id, vehicle_type, vehicle_name, capacity,
                  price_per_day, is_active, created_at
        "#,
    )
    .bind(new.destination_id)
    .bind(&new.vehicle_type)
    .bind(&new.vehicle_name)
    .bind(new.capacity.unwrap_or(4))
    .bind(new.price_per_day)
    .fetch_one(pool)
    .await?;

    Ok(transport)
}

pub async fn delete_transport_price(pool: &PgPool, id: Uuid) -> Result<()> {
    sqlx::query("DELETE FROM transport_prices WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Policies for a destination plus the defaults that apply everywhere
pub async fn get_policies_for_destination(
    pool: &PgPool,
    destination_id: Uuid,
) -> Result<Vec<PackagePolicy>> {
    let policies = sqlx::query_as::<_, PackagePolicy>(
        r#"
        SELECT id, destination_id, policy_type, description, order_index, is_default
        FROM package_policies
        WHERE destination_id = $1 OR (destination_id IS NULL AND is_default = TRUE)
        ORDER BY policy_type, order_index
        "#,
    )
    .bind(destination_id)
    .fetch_all(pool)
    .await?;

    Ok(policies)
}

pub async fn create_policy(pool: &PgPool, new: &NewPackagePolicy) -> Result<PackagePolicy> {
    let policy = sqlx::query_as::<_, PackagePolicy>(
        r#"
        INSERT INTO package_policies (destination_id, policy_type, description, order_index, is_default)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, destination_id, policy_type, description, order_index, is_default
        "#,
    )
    .bind(new.destination_id)
    .bind(&new.policy_type)
    .bind(&new.description)
    .bind(new.order_index)
    .bind(new.is_default)
    .fetch_one(pool)
    .await?;

    Ok(policy)
}

pub async fn delete_policy(pool: &PgPool, id: Uuid) -> Result<()> {
    sqlx::query("DELETE FROM package_policies WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
