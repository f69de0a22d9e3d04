//! In-memory store backend
//!
//! A process-local [`KvStore`] with the same visible semantics as the Redis
//! backend. One mutex guards the whole map, which makes the compound
//! `*_indexed` operations atomic for free. TTLs are measured with
//! `tokio::time::Instant`, so tests running under a paused runtime clock can
//! advance time deterministically.

use crate::storage::KvStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone)]
enum Entry {
    Str {
        value: String,
        expires_at: Option<Instant>,
    },
    Hash(HashMap<String, String>),
    Set(HashSet<String>),
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        match self {
            Entry::Str {
                expires_at: Some(deadline),
                ..
            } => *deadline <= now,
            _ => false,
        }
    }
}

/// Process-local key-value store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop expired entries and return the map guard
    fn live_entries(&self) -> parking_lot::MutexGuard<'_, HashMap<String, Entry>> {
        let now = Instant::now();
        let mut entries = self.entries.lock();
        entries.retain(|_, entry| !entry.is_expired(now));
        entries
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.live_entries();
        match entries.get(key) {
            Some(Entry::Str { value, .. }) => Ok(Some(value.clone())),
            _ => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<u64>) -> Result<()> {
        let expires_at = ttl.map(|seconds| Instant::now() + Duration::from_secs(seconds));
        let mut entries = self.live_entries();
        entries.insert(
            key.to_string(),
            Entry::Str {
                value: value.to_string(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut entries = self.live_entries();
        entries.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let entries = self.live_entries();
        Ok(entries.contains_key(key))
    }

    async fn ttl(&self, key: &str) -> Result<i64> {
        let now = Instant::now();
        let entries = self.live_entries();
        match entries.get(key) {
            None => Ok(-2),
            Some(Entry::Str {
                expires_at: Some(deadline),
                ..
            }) => Ok(deadline.saturating_duration_since(now).as_secs() as i64),
            Some(_) => Ok(-1),
        }
    }

    async fn hash_get(&self, key: &str, field: &str) -> Result<Option<String>> {
        let entries = self.live_entries();
        match entries.get(key) {
            Some(Entry::Hash(fields)) => Ok(fields.get(field).cloned()),
            _ => Ok(None),
        }
    }

    async fn hash_set(&self, key: &str, field: &str, value: &str) -> Result<()> {
        let mut entries = self.live_entries();
        let entry = entries
            .entry(key.to_string())
            .or_insert_with(|| Entry::Hash(HashMap::new()));
        if let Entry::Hash(fields) = entry {
            fields.insert(field.to_string(), value.to_string());
        } else {
            let mut fields = HashMap::new();
            fields.insert(field.to_string(), value.to_string());
            *entry = Entry::Hash(fields);
        }
        Ok(())
    }

    async fn set_add(&self, key: &str, member: &str) -> Result<()> {
        let mut entries = self.live_entries();
        let entry = entries
            .entry(key.to_string())
            .or_insert_with(|| Entry::Set(HashSet::new()));
        if let Entry::Set(members) = entry {
            members.insert(member.to_string());
        } else {
            let mut members = HashSet::new();
            members.insert(member.to_string());
            *entry = Entry::Set(members);
        }
        Ok(())
    }

    async fn set_remove(&self, key: &str, member: &str) -> Result<()> {
        let mut entries = self.live_entries();
        if let Some(Entry::Set(members)) = entries.get_mut(key) {
            members.remove(member);
            if members.is_empty() {
                entries.remove(key);
            }
        }
        Ok(())
    }

    async fn set_members(&self, key: &str) -> Result<Vec<String>> {
        let entries = self.live_entries();
        match entries.get(key) {
            Some(Entry::Set(members)) => Ok(members.iter().cloned().collect()),
            _ => Ok(vec![]),
        }
    }

    async fn set_is_member(&self, key: &str, member: &str) -> Result<bool> {
        let entries = self.live_entries();
        match entries.get(key) {
            Some(Entry::Set(members)) => Ok(members.contains(member)),
            _ => Ok(false),
        }
    }

    async fn put_indexed(
        &self,
        hash_key: &str,
        field: &str,
        value: &str,
        set_key: &str,
        member: &str,
    ) -> Result<()> {
        // Single lock held across both writes keeps them atomic.
        let mut entries = self.live_entries();
        let mut fields = HashMap::new();
        fields.insert(field.to_string(), value.to_string());
        entries.insert(hash_key.to_string(), Entry::Hash(fields));

        let entry = entries
            .entry(set_key.to_string())
            .or_insert_with(|| Entry::Set(HashSet::new()));
        if let Entry::Set(members) = entry {
            members.insert(member.to_string());
        }
        Ok(())
    }

    async fn delete_indexed(&self, hash_key: &str, set_key: &str, member: &str) -> Result<()> {
        let mut entries = self.live_entries();
        entries.remove(hash_key);
        if let Some(Entry::Set(members)) = entries.get_mut(set_key) {
            members.remove(member);
            if members.is_empty() {
                entries.remove(set_key);
            }
        }
        Ok(())
    }
}
