use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use crate::models::{Contact, NewContact};

use super::{ContactStore, StoreError};

/// Process-local contacts collection.
///
/// Can be taken offline to behave like an unreachable database.
pub struct MemoryContactStore {
    /// id -> (insertion sequence, record)
    records: DashMap<Uuid, (u64, Contact)>,
    next_seq: AtomicU64,
    online: AtomicBool,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            next_seq: AtomicU64::new(0),
            online: AtomicBool::new(true),
        }
    }

    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Snapshot of every stored record in insertion order.
    pub fn records(&self) -> Vec<Contact> {
        let mut records: Vec<(u64, Contact)> =
            self.records.iter().map(|r| r.value().clone()).collect();
        records.sort_by_key(|(seq, _)| *seq);
        records.into_iter().map(|(_, contact)| contact).collect()
    }
}

impl Default for MemoryContactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    fn backend(&self) -> &str {
        "memory"
    }

    async fn insert(&self, contact: &NewContact) -> Result<Contact, StoreError> {
        if !self.online.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("in-memory store is offline".to_string()));
        }

        let record = Contact {
            id: Uuid::now_v7(),
            name: contact.name().to_string(),
            email: contact.email().to_string(),
            message: contact.message().map(str::to_string),
            created_at: Utc::now(),
        };
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        self.records.insert(record.id, (seq, record.clone()));
        Ok(record)
    }
}
