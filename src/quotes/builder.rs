//! Quote assembly: validation, package codes, and the persisted record.
//!
//! The builder binds a priced itinerary to customer and trip details. The
//! flat cost fields are copied from the breakdown at save time and never
//! recomputed on read; the itinerary blob preserves every selection so
//! the quote can be re-rendered as saved.

use chrono::NaiveDate;
use rand::Rng;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::NewQuote;
use crate::pricing::PricedItinerary;

use super::requests::SaveQuoteRequest;

/// Generate a display code for a package: the first three letters of the
/// destination, uppercased, plus a six-digit number. Codes are labels,
/// not identifiers; collisions are tolerated.
pub fn package_code(destination_name: &str) -> String {
    let prefix: String = destination_name.chars().take(3).collect::<String>().to_uppercase();
    let prefix = if prefix.is_empty() {
        "PKG".to_string()
    } else {
        prefix
    };
    let number: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
    format!("{prefix}{number}")
}

fn validate(request: &SaveQuoteRequest) -> Result<(NaiveDate, NaiveDate)> {
    if request.customer_name.trim().is_empty() {
        return Err(AppError::Validation("Customer name is required".to_string()));
    }
    if request.customer_phone.trim().is_empty() {
        return Err(AppError::Validation(
            "Customer phone is required".to_string(),
        ));
    }
    if request.pricing.stops.is_empty() {
        return Err(AppError::Validation(
            "Itinerary must have at least one stop".to_string(),
        ));
    }

    let (Some(arrival), Some(departure)) = (request.arrival_date, request.departure_date) else {
        return Err(AppError::Validation(
            "Arrival and departure dates are required".to_string(),
        ));
    };
    if departure < arrival {
        return Err(AppError::DateOrder);
    }

    Ok((arrival, departure))
}

/// Assemble a quote record from a validated request and its priced
/// itinerary.
pub fn build_quote(
    salesperson_id: Uuid,
    request: &SaveQuoteRequest,
    priced: &PricedItinerary,
    destination_name: &str,
) -> Result<NewQuote> {
    let (arrival_date, departure_date) = validate(request)?;

    let itinerary_data = serde_json::json!({
        "stops": priced.stops,
        "train_route": priced.train_route,
        "transport": priced.transport,
    });

    Ok(NewQuote {
        salesperson_id,
        customer_name: request.customer_name.trim().to_string(),
        customer_phone: request.customer_phone.trim().to_string(),
        customer_email: request
            .customer_email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .map(String::from),
        destination_id: request.pricing.destination_id,
        num_adults: request.pricing.num_adults,
        num_children: request.pricing.num_children,
        extra_adult_count: request.pricing.extra_adult_count,
        extra_child_count: request.pricing.extra_child_count,
        arrival_date,
        departure_date,
        total_days: priced.costs.total_days,
        package_code: package_code(destination_name),
        train_class: priced.train_route.as_ref().map(|t| t.class.clone()),
        transport_type: priced.transport.as_ref().map(|t| t.vehicle_type.clone()),
        train_cost: priced.costs.train_cost,
        transport_cost: priced.costs.transport_cost,
        hotel_cost: priced.costs.hotel_cost,
        extra_adult_cost: priced.costs.extra_adult_cost,
        extra_child_cost: priced.costs.extra_child_cost,
        total_cost: priced.costs.total_cost,
        per_person_cost: priced.costs.per_person_cost,
        itinerary_data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealPlan;
    use crate::pricing::models::{CostBreakdown, PricedStop};
    use crate::pricing::requests::{PriceQuoteRequest, StopRequest};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn stop_request() -> StopRequest {
        StopRequest {
            place_id: Uuid::new_v4(),
            hotel_id: None,
            meal_plan: None,
            days: 2,
            nights: 1,
            check_in_date: None,
            check_out_date: None,
        }
    }

    fn request() -> SaveQuoteRequest {
        SaveQuoteRequest {
            customer_name: "Asha Verma".to_string(),
            customer_phone: "9876543210".to_string(),
            customer_email: None,
            arrival_date: NaiveDate::from_ymd_opt(2026, 10, 5),
            departure_date: NaiveDate::from_ymd_opt(2026, 10, 9),
            pricing: PriceQuoteRequest {
                destination_id: Uuid::new_v4(),
                num_adults: 2,
                num_children: 0,
                extra_adult_count: 0,
                extra_child_count: 0,
                train_price_id: None,
                train_class: None,
                transport_price_id: None,
                stops: vec![stop_request()],
            },
        }
    }

    fn priced() -> PricedItinerary {
        PricedItinerary {
            stops: vec![PricedStop {
                place_id: Uuid::new_v4(),
                place_name: "Shimla".to_string(),
                hotel_id: None,
                hotel_name: None,
                hotel_category: None,
                room_type: None,
                meal_plan: MealPlan::MAP,
                nightly_rate: dec!(3500),
                extra_adult_rate: Decimal::ZERO,
                extra_child_rate: Decimal::ZERO,
                days: 2,
                nights: 1,
                check_in_date: None,
                check_out_date: None,
            }],
            train_route: None,
            transport: None,
            costs: CostBreakdown {
                train_cost: Decimal::ZERO,
                transport_cost: Decimal::ZERO,
                hotel_cost: dec!(3500),
                extra_adult_cost: Decimal::ZERO,
                extra_child_cost: Decimal::ZERO,
                total_cost: dec!(3500),
                per_person_cost: dec!(1750),
                total_days: 2,
                total_nights: 1,
            },
        }
    }

    // ==================== package_code tests ====================

    #[test]
    fn test_package_code_shape() {
        let code = package_code("Himachal");
        assert!(code.starts_with("HIM"));
        assert_eq!(code.len(), 9);
        assert!(code[3..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_package_code_short_and_empty_names() {
        assert!(package_code("Go").starts_with("GO"));
        assert!(package_code("").starts_with("PKG"));
    }

    // ==================== build_quote tests ====================

    #[test]
    fn test_build_quote_copies_breakdown() {
        let quote = build_quote(Uuid::new_v4(), &request(), &priced(), "Himachal").unwrap();

        assert_eq!(quote.hotel_cost, dec!(3500));
        assert_eq!(quote.total_cost, dec!(3500));
        assert_eq!(quote.per_person_cost, dec!(1750));
        assert_eq!(quote.total_days, 2);
        assert!(quote.package_code.starts_with("HIM"));
        assert_eq!(quote.itinerary_data["stops"][0]["place_name"], "Shimla");
    }

    #[test]
    fn test_missing_customer_name_rejected() {
        let mut bad = request();
        bad.customer_name = "  ".to_string();
        assert!(matches!(
            build_quote(Uuid::new_v4(), &bad, &priced(), "Himachal"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_missing_phone_rejected() {
        let mut bad = request();
        bad.customer_phone = String::new();
        assert!(matches!(
            build_quote(Uuid::new_v4(), &bad, &priced(), "Himachal"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_itinerary_rejected() {
        let mut bad = request();
        bad.pricing.stops.clear();
        assert!(matches!(
            build_quote(Uuid::new_v4(), &bad, &priced(), "Himachal"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_missing_dates_rejected() {
        let mut bad = request();
        bad.departure_date = None;
        assert!(matches!(
            build_quote(Uuid::new_v4(), &bad, &priced(), "Himachal"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_departure_before_arrival_rejected() {
        let mut bad = request();
        bad.arrival_date = NaiveDate::from_ymd_opt(2026, 10, 9);
        bad.departure_date = NaiveDate::from_ymd_opt(2026, 10, 5);
        assert!(matches!(
            build_quote(Uuid::new_v4(), &bad, &priced(), "Himachal"),
            Err(AppError::DateOrder)
        ));
    }

    #[test]
    fn test_same_day_trip_allowed() {
        let mut req = request();
        req.arrival_date = NaiveDate::from_ymd_opt(2026, 10, 5);
        req.departure_date = NaiveDate::from_ymd_opt(2026, 10, 5);
        assert!(build_quote(Uuid::new_v4(), &req, &priced(), "Himachal").is_ok());
    }

    #[test]
    fn test_blank_email_stored_as_none() {
        let mut req = request();
        req.customer_email = Some("   ".to_string());
        let quote = build_quote(Uuid::new_v4(), &req, &priced(), "Himachal").unwrap();
        assert!(quote.customer_email.is_none());
    }
}
