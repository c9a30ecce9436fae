//! Request DTOs for pricing and quote endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::MealPlan;

/// One itinerary stop as submitted by the quote builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopRequest {
    pub place_id: Uuid,
    #[serde(default)]
    pub hotel_id: Option<Uuid>,
    /// Defaults to MAP when a hotel is selected without picking a plan.
    #[serde(default)]
    pub meal_plan: Option<MealPlan>,
    pub days: i32,
    pub nights: i32,
    #[serde(default)]
    pub check_in_date: Option<NaiveDate>,
    #[serde(default)]
    pub check_out_date: Option<NaiveDate>,
}

/// Trip parameters shared by the preview and save endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceQuoteRequest {
    pub destination_id: Uuid,
    pub num_adults: i32,
    #[serde(default)]
    pub num_children: i32,
    #[serde(default)]
    pub extra_adult_count: i32,
    #[serde(default)]
    pub extra_child_count: i32,
    #[serde(default)]
    pub train_price_id: Option<Uuid>,
    #[serde(default)]
    pub train_class: Option<String>,
    #[serde(default)]
    pub transport_price_id: Option<Uuid>,
    pub stops: Vec<StopRequest>,
}
