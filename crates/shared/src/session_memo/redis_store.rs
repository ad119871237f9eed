use chrono::{DateTime, Duration, Utc};
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use sha2::{Digest, Sha256};

use super::{SessionMemo, SessionMemoError, SessionMemoFuture, SessionMemoStore};

pub const DEFAULT_SESSION_KEY_PREFIX: &str = "petcoach:session:v1";

/// Redis-backed memo store. Keys expire after the TTL, and loads still apply
/// the same staleness rule as the in-memory store.
#[derive(Clone)]
pub struct RedisSessionMemoStore {
    connection: ConnectionManager,
    key_prefix: String,
    ttl: Duration,
}

impl RedisSessionMemoStore {
    pub async fn connect(
        redis_url: &str,
        key_prefix: &str,
        ttl: Duration,
    ) -> Result<Self, SessionMemoError> {
        if key_prefix.trim().is_empty() {
            return Err(SessionMemoError::Backend(
                "session key prefix must not be empty".to_string(),
            ));
        }

        let client = redis::Client::open(redis_url).map_err(backend_error)?;
        let connection = ConnectionManager::new(client)
            .await
            .map_err(backend_error)?;

        let mut health_connection = connection.clone();
        redis::cmd("PING")
            .query_async::<String>(&mut health_connection)
            .await
            .map_err(|err| SessionMemoError::Backend(format!("failed to connect to redis: {err}")))?;

        Ok(Self {
            connection,
            key_prefix: key_prefix.trim_end_matches(':').to_string(),
            ttl,
        })
    }

    fn memo_key(&self, session_id: &str) -> String {
        compose_key(&self.key_prefix, session_id)
    }
}

impl SessionMemoStore for RedisSessionMemoStore {
    fn load<'a>(
        &'a self,
        session_id: &'a str,
        now: DateTime<Utc>,
    ) -> SessionMemoFuture<'a, Option<SessionMemo>> {
        Box::pin(async move {
            let mut connection = self.connection.clone();
            let raw: Option<String> = connection
                .get(self.memo_key(session_id))
                .await
                .map_err(backend_error)?;

            let Some(raw) = raw else {
                return Ok(None);
            };

            let memo = serde_json::from_str::<SessionMemo>(&raw)
                .map_err(|err| SessionMemoError::InvalidPayload(err.to_string()))?;
            Ok((!memo.is_stale(now, self.ttl)).then_some(memo))
        })
    }

    fn save<'a>(&'a self, session_id: &'a str, memo: SessionMemo) -> SessionMemoFuture<'a, ()> {
        Box::pin(async move {
            let payload = serde_json::to_string(&memo)
                .map_err(|err| SessionMemoError::InvalidPayload(err.to_string()))?;
            let mut connection = self.connection.clone();
            let _: () = connection
                .set_ex(self.memo_key(session_id), payload, expiry_seconds(self.ttl))
                .await
                .map_err(backend_error)?;
            Ok(())
        })
    }
}

fn backend_error(err: redis::RedisError) -> SessionMemoError {
    SessionMemoError::Backend(err.to_string())
}

// Session ids are caller-supplied; hashing keeps keys bounded and opaque.
fn compose_key(prefix: &str, session_id: &str) -> String {
    format!("{prefix}:{}", hashed_label(session_id))
}

fn hashed_label(value: &str) -> String {
    let digest = Sha256::digest(value.as_bytes());
    digest
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect::<String>()
}

fn expiry_seconds(ttl: Duration) -> u64 {
    u64::try_from(ttl.num_seconds()).unwrap_or(0).max(1)
}
