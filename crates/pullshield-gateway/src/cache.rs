//! In-process response cache keyed by request URL.
//!
//! Stand-in for the edge cache the hosted variant leans on: a `DashMap` of
//! serialized 200 bodies with a fixed TTL. Expired entries are evicted
//! lazily on lookup. Replayed bodies keep their original timestamp, same as
//! an edge cache would.

use std::time::{Duration, Instant};

use dashmap::DashMap;

pub struct ResponseCache {
    entries: DashMap<String, CachedBody>,
    ttl: Duration,
}

#[derive(Clone)]
struct CachedBody {
    body: String,
    inserted: Instant,
}

impl ResponseCache {
    /// A zero TTL disables the cache entirely.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        if self.ttl.is_zero() {
            return None;
        }

        let expired = match self.entries.get(key) {
            Some(entry) if entry.inserted.elapsed() < self.ttl => {
                return Some(entry.body.clone());
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            self.entries.remove(key);
        }
        None
    }

    pub fn put(&self, key: &str, body: &str) {
        if self.ttl.is_zero() {
            return;
        }
        self.entries.insert(
            key.to_string(),
            CachedBody {
                body: body.to_string(),
                inserted: Instant::now(),
            },
        );
    }
}
