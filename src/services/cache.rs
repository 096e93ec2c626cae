//! Session-scoped location cache with an explicit staleness window.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::models::location::Location;
use crate::services::sources::{fetch_all_locations, LocationDataSource, SourceError};

const DEFAULT_MAX_AGE_MINUTES: i64 = 15;

#[derive(Debug, Clone)]
struct CacheEntry {
    locations: Vec<Location>,
    fetched_at: DateTime<Utc>,
}

/// In-memory cache for fetched location lists, keyed by query key (one key
/// per explore context). `get` refuses stale entries; `fallback` hands them
/// out anyway, for the keep-showing-something path after a failed refresh.
#[derive(Debug, Clone)]
pub struct LocationCache {
    max_age: Duration,
    entries: HashMap<String, CacheEntry>,
}

impl Default for LocationCache {
    fn default() -> Self {
        Self::new(Duration::minutes(DEFAULT_MAX_AGE_MINUTES))
    }
}

impl LocationCache {
    pub fn new(max_age: Duration) -> Self {
        Self {
            max_age,
            entries: HashMap::new(),
        }
    }

    pub fn put(&mut self, key: &str, locations: Vec<Location>) {
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                locations,
                fetched_at: Utc::now(),
            },
        );
    }

    /// Fresh data only; `None` when missing or stale.
    pub fn get(&self, key: &str) -> Option<&[Location]> {
        let entry = self.entries.get(key)?;
        if self.is_entry_stale(entry) {
            return None;
        }
        Some(&entry.locations)
    }

    /// Whatever is cached, stale or not.
    pub fn fallback(&self, key: &str) -> Option<&[Location]> {
        self.entries.get(key).map(|e| e.locations.as_slice())
    }

    pub fn is_stale(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .map(|e| self.is_entry_stale(e))
            .unwrap_or(true)
    }

    fn is_entry_stale(&self, entry: &CacheEntry) -> bool {
        Utc::now() - entry.fetched_at > self.max_age
    }
}

/// Load a location list cache-first.
///
/// A fresh cache entry short-circuits the fetch. On a fetch failure any
/// cached data, stale included, is returned instead of surfacing the error:
/// the previously rendered list stays visible and the failure is only
/// logged. The error propagates only when there is nothing to show.
pub async fn load_locations<S: LocationDataSource>(
    cache: &mut LocationCache,
    key: &str,
    source: &S,
) -> Result<Vec<Location>, SourceError> {
    if let Some(fresh) = cache.get(key) {
        return Ok(fresh.to_vec());
    }

    match fetch_all_locations(source).await {
        Ok(locations) => {
            cache.put(key, locations.clone());
            Ok(locations)
        }
        Err(err) => {
            if let Some(stale) = cache.fallback(key) {
                log::warn!("location fetch failed, keeping cached list: {}", err);
                Ok(stale.to_vec())
            } else {
                Err(err)
            }
        }
    }
}
