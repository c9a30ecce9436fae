//! In-memory caching using moka
//!
//! Provides application-level caching for catalog rows that the pricing
//! engine reads on every computation. Catalog prices change rarely, so
//! short TTLs keep quotes close to current without hitting the database
//! for every stop.
//!
//! Sessions and users are never cached: every protected request
//! revalidates its token against the store of record so that revocation
//! and approval changes are visible immediately on all instances.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use crate::models::{Destination, Hotel};

/// Application cache holding hot catalog rows
#[derive(Clone)]
pub struct AppCache {
    /// Hotels by id (resolved once per itinerary stop)
    pub hotels: Cache<Uuid, Arc<Hotel>>,
    /// Destinations by id (name feeds package codes and quote display)
    pub destinations: Cache<Uuid, Arc<Destination>>,
}

impl AppCache {
    /// Create a new cache instance with configured TTLs
    pub fn new() -> Self {
        Self {
            // Hotels: 500 entries, 15 min TTL, 5 min idle
            hotels: Cache::builder()
                .max_capacity(500)
                .time_to_live(Duration::from_secs(15 * 60))
                .time_to_idle(Duration::from_secs(5 * 60))
                .build(),

            // Destinations: 100 entries, 30 min TTL
            destinations: Cache::builder()
                .max_capacity(100)
                .time_to_live(Duration::from_secs(30 * 60))
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hotels_size: self.hotels.entry_count(),
            destinations_size: self.destinations.entry_count(),
        }
    }

    /// Invalidate all catalog caches. Called after any catalog mutation so
    /// stale rates never price a quote.
    pub fn invalidate_catalog(&self) {
        self.hotels.invalidate_all();
        self.destinations.invalidate_all();
        info!("Catalog caches invalidated");
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub hotels_size: u64,
    pub destinations_size: u64,
}
