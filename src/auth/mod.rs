//! Authentication, sessions, and the account approval workflow.
//!
//! Passwords are hashed by [`password`], bearer tokens live in [`sessions`],
//! and [`accounts`] drives the pending/approved lifecycle. Handlers obtain
//! the signed-in user through the [`extract::CurrentUser`] extractor.

pub mod accounts;
pub mod extract;
pub mod password;
pub mod routes;
pub mod sessions;

pub use extract::{CurrentUser, AUTH_COOKIE};
