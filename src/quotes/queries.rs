//! Database queries for quotes.

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{NewQuote, Quote, QuoteDetail, QuoteSummary};

const QUOTE_COLUMNS: &str = "id, salesperson_id, customer_name, customer_phone, customer_email, \
     destination_id, num_adults, num_children, extra_adult_count, extra_child_count, \
     arrival_date, departure_date, total_days, package_code, train_class, transport_type, \
     train_cost, transport_cost, hotel_cost, extra_adult_cost, extra_child_cost, \
     total_cost, per_person_cost, itinerary_data, status, created_at";

/// Persist a quote in a single insert. The cost fields are immutable once
/// written.
pub async fn insert_quote(pool: &PgPool, new: &NewQuote) -> Result<Quote> {
    let quote = sqlx::query_as::<_, Quote>(&format!(
        r#"
        INSERT INTO quotes (
            salesperson_id, customer_name, customer_phone, customer_email,
            destination_id, num_adults, num_children, extra_adult_count, extra_child_count,
            arrival_date, departure_date, total_days, package_code, train_class, transport_type,
            train_cost, transport_cost, hotel_cost, extra_adult_cost, extra_child_cost,
            total_cost, per_person_cost, itinerary_data
        )
        VALUES (
            $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
            $16, $17, $18, $19, $20, $21, $22, $23
        )
        RETURNING {QUOTE_COLUMNS}
        "#
    ))
    .bind(new.salesperson_id)
    .bind(&new.customer_name)
    .bind(&new.customer_phone)
    .bind(&new.customer_email)
    .bind(new.destination_id)
    .bind(new.num_adults)
    .bind(new.num_children)
    .bind(new.extra_adult_count)
    .bind(new.extra_child_count)
    .bind(new.arrival_date)
    .bind(new.departure_date)
    .bind(new.total_days)
    .bind(&new.package_code)
    .bind(&new.train_class)
    .bind(&new.transport_type)
    .bind(new.train_cost)
    .bind(new.transport_cost)
    .bind(new.hotel_cost)
    .bind(new.extra_adult_cost)
    .bind(new.extra_child_cost)
    .bind(new.total_cost)
    .bind(new.per_person_cost)
    .bind(&new.itinerary_data)
    .fetch_one(pool)
    .await?;

    Ok(quote)
}

/// Fetch a quote with display names for the PDF view. The joins are for
/// display only; no pricing logic reads them.
pub async fn get_quote(pool: &PgPool, id: Uuid) -> Result<Option<QuoteDetail>> {
    let quote = sqlx::query_as::<_, Quote>(&format!(
        "SELECT {QUOTE_COLUMNS} FROM quotes WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    let Some(quote) = quote else {
        return Ok(None);
    };

    let (destination_name, salesperson_name) = sqlx::query_as::<_, (String, String)>(
        r#"
        SELECT d.name, u.full_name
        FROM quotes q
        JOIN destinations d ON q.destination_id = d.id
        JOIN users u ON q.salesperson_id = u.id
        WHERE q.id = $1
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(Some(QuoteDetail {
        quote,
        destination_name,
        salesperson_name,
    }))
}

/// Quotes created by one salesperson, newest first
pub async fn quotes_for_salesperson(
    pool: &PgPool,
    salesperson_id: Uuid,
) -> Result<Vec<QuoteSummary>> {
    let quotes = sqlx::query_as::<_, QuoteSummary>(
        r#"
        SELECT
            q.id, q.package_code, q.customer_name,
            d.name AS destination_name,
            u.full_name AS salesperson_name,
            q.num_adults, q.num_children, q.arrival_date, q.departure_date,
            q.total_cost, q.status, q.created_at
        FROM quotes q
        JOIN destinations d ON q.destination_id = d.id
        JOIN users u ON q.salesperson_id = u.id
        WHERE q.salesperson_id = $1
        ORDER BY q.created_at DESC
        "#,
    )
    .bind(salesperson_id)
    .fetch_all(pool)
    .await?;

    Ok(quotes)
}

/// Every quote in the system, newest first (owner review)
pub async fn all_quotes(pool: &PgPool) -> Result<Vec<QuoteSummary>> {
    let quotes = sqlx::query_as::<_, QuoteSummary>(
        r#"
        SELECT
            q.id, q.package_code, q.customer_name,
            d.name AS destination_name,
            u.full_name AS salesperson_name,
            q.num_adults, q.num_children, q.arrival_date, q.departure_date,
            q.total_cost, q.status, q.created_at
        FROM quotes q
        JOIN destinations d ON q.destination_id = d.id
        JOIN users u ON q.salesperson_id = u.id
        ORDER BY q.created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(quotes)
}
