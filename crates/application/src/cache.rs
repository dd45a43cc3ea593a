//! Cache collaborator contract.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use common::NameKey;
use domain::Account;
use thiserror::Error;
use tokio::sync::RwLock;

/// Error from a cache backend.
///
/// Handlers treat every cache failure as non-fatal: log it, fall through to
/// the store, and keep serving.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cache backend error: {0}")]
pub struct CacheError(pub String);

/// Read-through/write-through cache keyed by normalized name key.
///
/// Both operations are best-effort. Eviction is the backend's concern; the
/// core only reads and writes entries around the store query.
#[async_trait]
pub trait AccountCache: Send + Sync {
    /// Returns the cached entity for `key`, if present and fresh.
    async fn get(&self, key: &NameKey) -> Result<Option<Account>, CacheError>;

    /// Stores `account` under `key`, optionally expiring after `ttl`.
    async fn set(
        &self,
        key: &NameKey,
        account: &Account,
        ttl: Option<Duration>,
    ) -> Result<(), CacheError>;
}

/// Cache that stores nothing. The default for tests and cache-less wiring.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCache;

#[async_trait]
impl AccountCache for NoopCache {
    async fn get(&self, _key: &NameKey) -> Result<Option<Account>, CacheError> {
        Ok(None)
    }

    async fn set(
        &self,
        _key: &NameKey,
        _account: &Account,
        _ttl: Option<Duration>,
    ) -> Result<(), CacheError> {
        Ok(())
    }
}

struct CacheEntry {
    account: Account,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_fresh(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|at| now < at)
    }
}

/// In-memory TTL cache for tests and local wiring.
///
/// Expired entries are dropped lazily: a stale entry reads as a miss and is
/// replaced by the next write-through.
#[derive(Clone, Default)]
pub struct InMemoryAccountCache {
    entries: Arc<RwLock<HashMap<NameKey, CacheEntry>>>,
}

impl InMemoryAccountCache {
    /// Creates a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries, fresh or expired.
    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Removes all entries.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

#[async_trait]
impl AccountCache for InMemoryAccountCache {
    async fn get(&self, key: &NameKey) -> Result<Option<Account>, CacheError> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .filter(|entry| entry.is_fresh(Instant::now()))
            .map(|entry| entry.account.clone()))
    }

    async fn set(
        &self,
        key: &NameKey,
        account: &Account,
        ttl: Option<Duration>,
    ) -> Result<(), CacheError> {
        let entry = CacheEntry {
            account: account.clone(),
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        };
        self.entries.write().await.insert(key.clone(), entry);
        Ok(())
    }
}
