//! Place-name coordinate cache.
//!
//! Chart requests frequently repeat the same birthplace; resolving a
//! place name (via whatever geocoding source the caller wires in) is
//! the slow step, so results are kept behind a read-through cache keyed
//! on the normalized name. The cache stores successes only; a failed
//! lookup is retried on the next request.

use std::collections::HashMap;
use std::sync::Mutex;

use log::debug;
use serde::{Deserialize, Serialize};

/// Geographic coordinates for a resolved place name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinates {
    /// Degrees, north positive.
    pub latitude_deg: f64,
    /// Degrees, east positive.
    pub longitude_deg: f64,
}

/// Thread-safe read-through cache of place-name lookups.
#[derive(Debug, Default)]
pub struct GeocodeCache {
    entries: Mutex<HashMap<String, GeoCoordinates>>,
}

/// Case-insensitive, whitespace-collapsed cache key.
fn normalize(place: &str) -> String {
    place.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

impl GeocodeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached coordinates for a place, if present.
    pub fn get(&self, place: &str) -> Option<GeoCoordinates> {
        self.entries
            .lock()
            .expect("geocode cache lock poisoned")
            .get(&normalize(place))
            .copied()
    }

    /// Look up a place, consulting the resolver only on a cache miss.
    ///
    /// The resolver runs outside the lock, so a slow lookup does not
    /// block readers of other keys. Two concurrent misses on the same
    /// key may both resolve; last write wins, which is harmless for an
    /// idempotent lookup.
    pub fn resolve_with<F>(&self, place: &str, resolver: F) -> Option<GeoCoordinates>
    where
        F: FnOnce() -> Option<GeoCoordinates>,
    {
        let key = normalize(place);
        if let Some(hit) = self
            .entries
            .lock()
            .expect("geocode cache lock poisoned")
            .get(&key)
            .copied()
        {
            debug!("geocode cache hit for {key:?}");
            return Some(hit);
        }

        let resolved = resolver()?;
        self.entries
            .lock()
            .expect("geocode cache lock poisoned")
            .insert(key, resolved);
        Some(resolved)
    }

    /// Number of cached places.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .expect("geocode cache lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
