use super::error::StoreError;
use super::kv::KeyKind;
use super::kv::Kv;
use redis::AsyncCommands;
use std::collections::HashMap;

/// Redis-backed store over a multiplexed connection manager.
///
/// Connects once at startup and fails fast when the server is unreachable;
/// the manager reconnects on its own after transient drops.
#[derive(Clone)]
pub struct Redis {
    manager: redis::aio::ConnectionManager,
}

impl Redis {
    /// Connects to REDIS_URL (default `redis://localhost:6379`).
    pub async fn new() -> Self {
        const REDIS_URL: &str = "redis://localhost:6379";
        let url = std::env::var("REDIS_URL").unwrap_or_else(|_| String::from(REDIS_URL));
        let client = redis::Client::open(url).expect("Redis client to connect");
        let manager = client
            .get_connection_manager()
            .await
            .expect("Redis connection");
        log::info!("connected to redis");
        Self { manager }
    }
}

#[async_trait::async_trait]
impl Kv for Redis {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.manager
            .clone()
            .get(key)
            .await
            .map_err(StoreError::Read)
    }
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.manager
            .clone()
            .set::<_, _, ()>(key, value)
            .await
            .map_err(StoreError::Write)
    }
    async fn hash_set(&self, key: &str, fields: &[(String, String)]) -> Result<(), StoreError> {
        self.manager
            .clone()
            .hset_multiple::<_, _, _, ()>(key, fields)
            .await
            .map_err(StoreError::Write)
    }
    async fn hash_all(&self, key: &str) -> Result<HashMap<String, String>, StoreError> {
        self.manager
            .clone()
            .hgetall(key)
            .await
            .map_err(StoreError::Read)
    }
    async fn scan(&self, pattern: &str) -> Result<Vec<String>, StoreError> {
        self.manager
            .clone()
            .keys(pattern)
            .await
            .map_err(StoreError::Scan)
    }
    async fn kind(&self, key: &str) -> Result<KeyKind, StoreError> {
        let mut conn = self.manager.clone();
        let kind: String = redis::cmd("TYPE")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(StoreError::Read)?;
        Ok(KeyKind::from(kind.as_str()))
    }
}
