use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::advice::Scenario;

mod redis_store;

pub use redis_store::{DEFAULT_SESSION_KEY_PREFIX, RedisSessionMemoStore};

pub const DEFAULT_SESSION_TTL_SECONDS: u64 = 3_600;
pub const MAX_SESSION_ID_LEN: usize = 128;

/// Last scenario served to a session and when it was served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMemo {
    pub scenario: Scenario,
    pub recorded_at: DateTime<Utc>,
}

impl SessionMemo {
    pub fn new(scenario: Scenario, recorded_at: DateTime<Utc>) -> Self {
        Self {
            scenario,
            recorded_at,
        }
    }

    /// A memo exactly `ttl` old is still fresh.
    pub fn is_stale(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now.signed_duration_since(self.recorded_at) > ttl
    }
}

#[derive(Debug, Error)]
pub enum SessionMemoError {
    #[error("session memo backend failed: {0}")]
    Backend(String),
    #[error("session memo payload is invalid: {0}")]
    InvalidPayload(String),
}

pub type SessionMemoFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<T, SessionMemoError>> + Send + 'a>>;

/// Key/value storage for session memos.
///
/// `load` and `save` are independent calls; two concurrent requests on the
/// same session can both read the old memo and the later `save` wins.
pub trait SessionMemoStore: Send + Sync {
    fn load<'a>(
        &'a self,
        session_id: &'a str,
        now: DateTime<Utc>,
    ) -> SessionMemoFuture<'a, Option<SessionMemo>>;

    fn save<'a>(&'a self, session_id: &'a str, memo: SessionMemo) -> SessionMemoFuture<'a, ()>;
}

/// Process-local store. Nothing is evicted in the background; stale memos are
/// dropped when their session is looked up or when any session saves.
#[derive(Debug, Clone)]
pub struct InMemorySessionMemoStore {
    entries: Arc<Mutex<HashMap<String, SessionMemo>>>,
    ttl: Duration,
}

impl Default for InMemorySessionMemoStore {
    fn default() -> Self {
        Self::new(Duration::seconds(DEFAULT_SESSION_TTL_SECONDS as i64))
    }
}

impl InMemorySessionMemoStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    pub fn len(&self) -> usize {
        self.lock_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_entries().is_empty()
    }

    pub fn peek(&self, session_id: &str) -> Option<SessionMemo> {
        self.lock_entries().get(session_id).cloned()
    }

    fn load_at(&self, session_id: &str, now: DateTime<Utc>) -> Option<SessionMemo> {
        let mut entries = self.lock_entries();
        match entries.get(session_id) {
            Some(memo) if memo.is_stale(now, self.ttl) => {
                entries.remove(session_id);
                None
            }
            Some(memo) => Some(memo.clone()),
            None => None,
        }
    }

    // Saves sweep every stale entry, so sessions that never come back are
    // still dropped once another session writes.
    fn save_at(&self, session_id: &str, memo: SessionMemo) {
        let mut entries = self.lock_entries();
        let now = memo.recorded_at;
        entries.retain(|_, existing| !existing.is_stale(now, self.ttl));
        entries.insert(session_id.to_string(), memo);
    }

    fn lock_entries(&self) -> MutexGuard<'_, HashMap<String, SessionMemo>> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl SessionMemoStore for InMemorySessionMemoStore {
    fn load<'a>(
        &'a self,
        session_id: &'a str,
        now: DateTime<Utc>,
    ) -> SessionMemoFuture<'a, Option<SessionMemo>> {
        Box::pin(async move { Ok(self.load_at(session_id, now)) })
    }

    fn save<'a>(&'a self, session_id: &'a str, memo: SessionMemo) -> SessionMemoFuture<'a, ()> {
        Box::pin(async move {
            self.save_at(session_id, memo);
            Ok(())
        })
    }
}
