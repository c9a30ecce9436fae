//! Pricing engine input and output types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::MealPlan;

/// Party composition for a quote.
///
/// `extra_adults` / `extra_children` are extra-bed occupants; they are
/// charged nightly surcharges but do not count toward the per-person
/// divisor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Party {
    pub num_adults: i32,
    pub num_children: i32,
    pub extra_adults: i32,
    pub extra_children: i32,
}

impl Party {
    /// Base headcount used for rooms and the per-person divisor.
    pub fn headcount(&self) -> i32 {
        self.num_adults + self.num_children
    }
}

/// One itinerary stop with its rates already resolved from the catalog.
/// A stop without a hotel carries a zero nightly rate.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStop {
    pub nights: i32,
    pub days: i32,
    pub nightly_rate: Decimal,
    pub extra_adult_rate: Decimal,
    pub extra_child_rate: Decimal,
}

/// Selected train route, resolved to a per-person one-way fare.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainFare {
    pub price_per_person: Decimal,
}

/// Selected local transport, resolved to a per-day rate.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRate {
    pub price_per_day: Decimal,
}

/// Flat cost breakdown for a quote. `total_cost` is the plain subtotal; no
/// margin or tax is layered on in the salesperson flow.
#[derive(Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    pub train_cost: Decimal,
    pub transport_cost: Decimal,
    pub hotel_cost: Decimal,
    pub extra_adult_cost: Decimal,
    pub extra_child_cost: Decimal,
    pub total_cost: Decimal,
    pub per_person_cost: Decimal,
    pub total_days: i32,
    pub total_nights: i32,
}

/// Stop enriched with catalog data, as stored in the quote's itinerary
/// blob and echoed back to the builder UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricedStop {
    pub place_id: Uuid,
    pub place_name: String,
    pub hotel_id: Option<Uuid>,
    pub hotel_name: Option<String>,
    pub hotel_category: Option<String>,
    pub room_type: Option<String>,
    pub meal_plan: MealPlan,
    #[serde(with = "rust_decimal::serde::str")]
    pub nightly_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub extra_adult_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub extra_child_rate: Decimal,
    pub days: i32,
    pub nights: i32,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
}

impl PricedStop {
    pub fn as_resolved(&self) -> ResolvedStop {
        ResolvedStop {
            nights: self.nights,
            days: self.days,
            nightly_rate: self.nightly_rate,
            extra_adult_rate: self.extra_adult_rate,
            extra_child_rate: self.extra_child_rate,
        }
    }
}

/// Train route details carried into the itinerary blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainRouteInfo {
    pub id: Uuid,
    pub from_city: String,
    pub to_city: String,
    pub class: String,
    pub route: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_per_person: Decimal,
}

/// Transport details carried into the itinerary blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportInfo {
    pub id: Uuid,
    pub vehicle_type: String,
    pub vehicle_name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_per_day: Decimal,
}
