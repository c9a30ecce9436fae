//! Quote models
//!
//! A quote's cost fields are written once at save time and are the source
//! of truth afterwards; nothing recomputes them on read.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Lifecycle status of a saved quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, sqlx::Type)]
#[sqlx(type_name = "quote_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    Draft,
    Confirmed,
    Cancelled,
}

/// Persisted quote row
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Quote {
    pub id: Uuid,
    pub salesperson_id: Uuid,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub destination_id: Uuid,
    pub num_adults: i32,
    pub num_children: i32,
    pub extra_adult_count: i32,
    pub extra_child_count: i32,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    pub total_days: i32,
    pub package_code: String,
    pub train_class: Option<String>,
    pub transport_type: Option<String>,
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
    pub itinerary_data: serde_json::Value,
    pub status: QuoteStatus,
    pub created_at: DateTime<Utc>,
}

/// Quote fields assembled by the builder, ready for a single INSERT
#[derive(Debug, Clone)]
pub struct NewQuote {
    pub salesperson_id: Uuid,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub destination_id: Uuid,
    pub num_adults: i32,
    pub num_children: i32,
    pub extra_adult_count: i32,
    pub extra_child_count: i32,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    pub total_days: i32,
    pub package_code: String,
    pub train_class: Option<String>,
    pub transport_type: Option<String>,
    pub train_cost: Decimal,
    pub transport_cost: Decimal,
    pub hotel_cost: Decimal,
    pub extra_adult_cost: Decimal,
    pub extra_child_cost: Decimal,
    pub total_cost: Decimal,
    pub per_person_cost: Decimal,
    pub itinerary_data: serde_json::Value,
}

/// Quote list entry joined with display names
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QuoteSummary {
    pub id: Uuid,
    pub package_code: String,
    pub customer_name: String,
    pub destination_name: String,
    pub salesperson_name: String,
    pub num_adults: i32,
    pub num_children: i32,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_cost: Decimal,
    pub status: QuoteStatus,
    pub created_at: DateTime<Utc>,
}

/// Full quote joined with display names, as consumed by PDF rendering
#[derive(Debug, Clone, Serialize)]
pub struct QuoteDetail {
    #[serde(flatten)]
    pub quote: Quote,
    pub destination_name: String,
    pub salesperson_name: String,
}
