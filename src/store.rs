use crate::analyzer::Properties;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// A stored string: the original value, its computed properties, and the
/// insertion timestamp. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StringRecord {
    /// Content fingerprint of `value`; the record's unique identity.
    pub id: String,
    pub value: String,
    pub properties: Properties,
    pub created_at: DateTime<Utc>,
}

/// In-memory record store keyed by content fingerprint.
///
/// Constructed once at startup and passed by reference into the dispatch
/// layer; there is no ambient global state. Iteration yields records in
/// insertion order, which is the order queries observe. Lifetime is the
/// process lifetime; nothing is persisted.
#[derive(Debug, Default)]
pub struct StringStore {
    records: HashMap<String, StringRecord>,
    insertion_order: Vec<String>,
}

impl StringStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&StringRecord> {
        self.records.get(id)
    }

    /// Insert a fully formed record, enforcing fingerprint uniqueness.
    /// Returns `false` and leaves the store untouched when a record with the
    /// same id already exists.
    pub fn insert(&mut self, record: StringRecord) -> bool {
        if self.records.contains_key(&record.id) {
            return false;
        }
        self.insertion_order.push(record.id.clone());
        self.records.insert(record.id.clone(), record);
        true
    }

    /// Remove a record by fingerprint, freeing its uniqueness slot so the
    /// same value can be created again later.
    pub fn remove(&mut self, id: &str) -> Option<StringRecord> {
        let removed = self.records.remove(id)?;
        self.insertion_order.retain(|stored| stored != id);
        Some(removed)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &StringRecord> {
        self.insertion_order
            .iter()
            .filter_map(|id| self.records.get(id))
    }
}
