/*
 * SPDX-FileCopyrightText: 2025 TestForge <dev@testforge.dev>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Process-scoped query cache.
//!
//! Entries are keyed by resource plus query scope (full list, list filtered
//! by a parent id, or a single record). Mutations never write entries
//! directly; they invalidate the resource prefix and the next read fetches
//! fresh data.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryScope {
    List(Option<i64>),
    Item(i64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub resource: &'static str,
    pub scope: QueryScope,
}

#[derive(Debug)]
struct CacheEntry {
    value: serde_json::Value,
    inserted_at: Instant,
}

#[derive(Debug)]
pub struct QueryCache {
    ttl: Duration,
    entries: Mutex<HashMap<QueryKey, CacheEntry>>,
}

impl QueryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let entries = self.entries.lock().unwrap();
        let entry = entries.get(key)?;

        if entry.inserted_at.elapsed() >= self.ttl {
            return None;
        }

        serde_json::from_value(entry.value.clone()).ok()
    }

    pub fn put<T: Serialize>(&self, key: QueryKey, value: &T) {
        if let Ok(value) = serde_json::to_value(value) {
            self.entries.lock().unwrap().insert(
                key,
                CacheEntry {
                    value,
                    inserted_at: Instant::now(),
                },
            );
        }
    }

    pub fn invalidate(&self, resource: &str) {
        self.entries
            .lock()
            .unwrap()
            .retain(|key, _| key.resource != resource);
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_key(resource: &'static str, param: Option<i64>) -> QueryKey {
        QueryKey {
            resource,
            scope: QueryScope::List(param),
        }
    }

    #[test]
    fn test_put_get_roundtrip() {
        let cache = QueryCache::new(Duration::from_secs(30));
        let key = list_key("projects", None);

        cache.put(key, &vec!["a".to_string(), "b".to_string()]);

        let cached: Option<Vec<String>> = cache.get(&key);
        assert_eq!(cached.unwrap(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_zero_ttl_is_always_stale() {
        let cache = QueryCache::new(Duration::ZERO);
        let key = list_key("projects", None);

        cache.put(key, &1_i64);

        let cached: Option<i64> = cache.get(&key);
        assert!(cached.is_none());
    }

    #[test]
    fn test_invalidate_removes_only_matching_resource() {
        let cache = QueryCache::new(Duration::from_secs(30));

        cache.put(list_key("modules", Some(1)), &1_i64);
        cache.put(list_key("modules", Some(2)), &2_i64);
        cache.put(list_key("test-cases", Some(7)), &3_i64);

        cache.invalidate("modules");

        assert!(cache.get::<i64>(&list_key("modules", Some(1))).is_none());
        assert!(cache.get::<i64>(&list_key("modules", Some(2))).is_none());
        assert_eq!(cache.get::<i64>(&list_key("test-cases", Some(7))), Some(3));
    }

    #[test]
    fn test_list_and_item_keys_are_distinct() {
        let cache = QueryCache::new(Duration::from_secs(30));
        let list = list_key("modules", Some(3));
        let item = QueryKey {
            resource: "modules",
            scope: QueryScope::Item(3),
        };

        cache.put(list, &1_i64);
        cache.put(item, &2_i64);

        assert_eq!(cache.get::<i64>(&list), Some(1));
        assert_eq!(cache.get::<i64>(&item), Some(2));
    }
}
