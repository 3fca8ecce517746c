use std::collections::HashMap;

use serde_json::Value;

/// Entity kinds that have a fetch operation and therefore a cache bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Charge,
    Refund,
    Customer,
    Transaction,
}

/// Per-connection response cache: one bucket per entity kind, keyed by
/// entity id. Entries are only ever added for the lifetime of the owning
/// connection; nothing is evicted or refreshed.
#[derive(Debug, Default)]
pub struct EntityCache {
    entries: HashMap<EntityKind, HashMap<String, Value>>,
}

impl EntityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, kind: EntityKind, id: &str) -> Option<&Value> {
        self.entries.get(&kind)?.get(id)
    }

    /// Stores a raw response payload. A payload that is not a JSON object,
    /// or an empty id, is discarded so malformed responses never pollute
    /// the cache.
    pub fn store(&mut self, kind: EntityKind, id: &str, payload: Value) {
        if id.is_empty() || !payload.is_object() {
            return;
        }

        self.entries
            .entry(kind)
            .or_default()
            .insert(id.to_owned(), payload);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_returns_stored_payload() {
        let mut cache = EntityCache::new();
        cache.store(EntityKind::Charge, "abc", json!({"charge": {"value": 100}}));

        let entry = cache.lookup(EntityKind::Charge, "abc").unwrap();
        assert_eq!(entry["charge"]["value"], 100);
    }

    #[test]
    fn test_kinds_are_isolated_even_with_colliding_ids() {
        let mut cache = EntityCache::new();
        cache.store(EntityKind::Charge, "shared", json!({"charge": {}}));

        assert!(cache.lookup(EntityKind::Refund, "shared").is_none());
        assert!(cache.lookup(EntityKind::Customer, "shared").is_none());
        assert!(cache.lookup(EntityKind::Transaction, "shared").is_none());
        assert!(cache.lookup(EntityKind::Charge, "shared").is_some());
    }

    #[test]
    fn test_non_object_payloads_are_not_stored() {
        let mut cache = EntityCache::new();

        cache.store(EntityKind::Customer, "abc", json!("not an object"));
        cache.store(EntityKind::Customer, "def", json!(42));
        cache.store(EntityKind::Customer, "ghi", Value::Null);

        assert!(cache.lookup(EntityKind::Customer, "abc").is_none());
        assert!(cache.lookup(EntityKind::Customer, "def").is_none());
        assert!(cache.lookup(EntityKind::Customer, "ghi").is_none());
    }

    #[test]
    fn test_empty_ids_are_not_stored() {
        let mut cache = EntityCache::new();

        cache.store(EntityKind::Transaction, "", json!({"transaction": {}}));

        assert!(cache.lookup(EntityKind::Transaction, "").is_none());
    }
}
