//! Quote assembly and persistence.

pub mod builder;
pub mod queries;
pub mod requests;
pub mod routes;

pub use builder::{build_quote, package_code};
pub use routes::router;
