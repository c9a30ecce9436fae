//! Request DTOs for quote endpoints.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::pricing::requests::PriceQuoteRequest;

/// Payload for saving a quote: customer details and trip dates wrapped
/// around the same pricing parameters the preview endpoint takes.
#[derive(Debug, Deserialize)]
pub struct SaveQuoteRequest {
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub arrival_date: Option<NaiveDate>,
    #[serde(default)]
    pub departure_date: Option<NaiveDate>,
    #[serde(flatten)]
    pub pricing: PriceQuoteRequest,
}
