//! Pricing engine for tour packages.
//!
//! The cost math itself lives in [`calculators`] as pure functions; the
//! [`services`] layer resolves catalog selections into their inputs.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{compute_costs, rooms_needed, round_up};
pub use models::{CostBreakdown, Party, PricedStop, ResolvedStop};
pub use routes::router;
pub use services::{price_itinerary, PricedItinerary};
