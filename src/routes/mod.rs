//! HTTP route handlers for the catalog surface

pub mod catalog;
