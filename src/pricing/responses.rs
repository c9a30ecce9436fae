//! Response DTOs for pricing endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::models::{CostBreakdown, PricedStop, TrainRouteInfo, TransportInfo};

/// Cost breakdown for JSON responses
#[derive(Debug, Serialize)]
pub struct CostBreakdownResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub train_cost: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub transport_cost: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub hotel_cost: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub extra_adult_cost: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub extra_child_cost: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_cost: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub per_person_cost: Decimal,
    pub total_days: i32,
    pub total_nights: i32,
}

impl From<&CostBreakdown> for CostBreakdownResponse {
    fn from(costs: &CostBreakdown) -> Self {
        Self {
            train_cost: costs.train_cost,
            transport_cost: costs.transport_cost,
            hotel_cost: costs.hotel_cost,
            extra_adult_cost: costs.extra_adult_cost,
            extra_child_cost: costs.extra_child_cost,
            total_cost: costs.total_cost,
            per_person_cost: costs.per_person_cost,
            total_days: costs.total_days,
            total_nights: costs.total_nights,
        }
    }
}

/// Response for the pricing preview endpoint
#[derive(Debug, Serialize)]
pub struct PricePreviewResponse {
    pub costs: CostBreakdownResponse,
    pub stops: Vec<PricedStop>,
    pub train_route: Option<TrainRouteInfo>,
    pub transport: Option<TransportInfo>,
}
