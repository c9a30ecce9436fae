//! Catalog models for destinations, places, hotels, and transport pricing.
//!
//! These tables are maintained by owners and consumed read-only by the
//! pricing engine.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Destination (e.g. a state or region customers travel to)
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Destination {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Place within a destination (one itinerary stop happens at one place)
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Place {
    pub id: Uuid,
    pub destination_id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Hotel meal plan tier. Each tier carries an independent nightly rate on
/// the hotel record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealPlan {
    /// Room only
    EP,
    /// Room + breakfast
    CP,
    /// Room + breakfast + dinner
    #[default]
    MAP,
    /// All meals
    AP,
}

/// Hotel with per-meal-plan nightly rates and extra-bed surcharges
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Hotel {
    pub id: Uuid,
    pub place_id: Uuid,
    pub name: String,
    pub category: String,
    pub room_type: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_per_night: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_ep: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_cp: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_map: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_ap: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub extra_adult_with_mattress: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub extra_child_without_mattress: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Hotel {
    /// Nightly rate for the selected meal plan, falling back to the generic
    /// per-night rate when the plan-specific rate is unset (zero).
    pub fn nightly_rate(&self, plan: MealPlan) -> Decimal {
        let plan_rate = match plan {
            MealPlan::EP => self.price_ep,
            MealPlan::CP => self.price_cp,
            MealPlan::MAP => self.price_map,
            MealPlan::AP => self.price_ap,
        };
        if plan_rate > Decimal::ZERO {
            plan_rate
        } else {
            self.price_per_night
        }
    }
}

/// Train fare for a route + class, priced per person one way
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TrainPrice {
    pub id: Uuid,
    pub from_city: String,
    pub to_city: String,
    pub class: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_per_person: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Local transport vehicle for a destination, priced per day
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TransportPrice {
    pub id: Uuid,
    pub destination_id: Uuid,
    pub vehicle_type: String,
    pub vehicle_name: String,
    pub capacity: i32,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_per_day: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Package policy line (inclusions, exclusions, payment, cancellation)
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PackagePolicy {
    pub id: Uuid,
    pub destination_id: Option<Uuid>,
    pub policy_type: String,
    pub description: String,
    pub order_index: i32,
    pub is_default: bool,
}

/// Payload for creating a destination
#[derive(Debug, Deserialize)]
pub struct NewDestination {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Payload for creating a place
#[derive(Debug, Deserialize)]
pub struct NewPlace {
    pub destination_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Payload for creating a hotel
#[derive(Debug, Deserialize)]
pub struct NewHotel {
    pub place_id: Uuid,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub price_per_night: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub price_ep: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub price_cp: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub price_map: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub price_ap: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub extra_adult_with_mattress: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub extra_child_without_mattress: Option<Decimal>,
}

/// Payload for creating a train fare
#[derive(Debug, Deserialize)]
pub struct NewTrainPrice {
    pub from_city: String,
    pub to_city: String,
    pub class: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_per_person: Decimal,
}

/// Payload for creating a transport price
#[derive(Debug, Deserialize)]
pub struct NewTransportPrice {
    pub destination_id: Uuid,
    pub vehicle_type: String,
    pub vehicle_name: String,
    #[serde(default)]
    pub capacity: Option<i32>,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_per_day: Decimal,
}

/// Payload for creating a package policy
#[derive(Debug, Deserialize)]
pub struct NewPackagePolicy {
    #[serde(default)]
    pub destination_id: Option<Uuid>,
    pub policy_type: String,
    pub description: String,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default)]
    pub is_default: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn hotel_with_rates(
        per_night: Decimal,
        ep: Decimal,
        cp: Decimal,
        map: Decimal,
        ap: Decimal,
    ) -> Hotel {
        Hotel {
            id: Uuid::new_v4(),
            place_id: Uuid::new_v4(),
            name: "Hilltop Residency".to_string(),
            category: "4_star".to_string(),
            room_type: "Deluxe Room".to_string(),
            price_per_night: per_night,
            price_ep: ep,
            price_cp: cp,
            price_map: map,
            price_ap: ap,
            extra_adult_with_mattress: dec!(1000),
            extra_child_without_mattress: dec!(600),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_nightly_rate_uses_selected_plan() {
        let hotel = hotel_with_rates(dec!(3000), dec!(2500), dec!(2800), dec!(3500), dec!(4200));
        assert_eq!(hotel.nightly_rate(MealPlan::EP), dec!(2500));
        assert_eq!(hotel.nightly_rate(MealPlan::CP), dec!(2800));
        assert_eq!(hotel.nightly_rate(MealPlan::MAP), dec!(3500));
        assert_eq!(hotel.nightly_rate(MealPlan::AP), dec!(4200));
    }

    #[test]
    fn test_nightly_rate_falls_back_when_plan_unset() {
        // Plan rates of zero mean "not configured" and fall through to the
        // generic per-night rate.
        let hotel = hotel_with_rates(dec!(3000), Decimal::ZERO, Decimal::ZERO, dec!(3500), Decimal::ZERO);
        assert_eq!(hotel.nightly_rate(MealPlan::EP), dec!(3000));
        assert_eq!(hotel.nightly_rate(MealPlan::AP), dec!(3000));
        assert_eq!(hotel.nightly_rate(MealPlan::MAP), dec!(3500));
    }

    #[test]
    fn test_meal_plan_defaults_to_map() {
        assert_eq!(MealPlan::default(), MealPlan::MAP);
    }

    #[test]
    fn test_meal_plan_serde_uppercase() {
        assert_eq!(serde_json::to_string(&MealPlan::MAP).unwrap(), "\"MAP\"");
        let plan: MealPlan = serde_json::from_str("\"EP\"").unwrap();
        assert_eq!(plan, MealPlan::EP);
    }
}
