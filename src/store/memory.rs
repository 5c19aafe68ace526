use super::error::StoreError;
use super::kv::KeyKind;
use super::kv::Kv;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// A stored value, either plain text or a field map.
#[derive(Debug, Clone)]
pub enum Entry {
    Text(String),
    Hash(HashMap<String, String>),
}

/// In-memory store with Redis semantics, for tests and offline runs.
///
/// Keeps the same type discipline as the real server: text and hash
/// commands refuse to cross shapes, and `scan` honors trailing-`*` globs.
#[derive(Default)]
pub struct Memory {
    entries: RwLock<HashMap<String, Entry>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }
}

fn wrongtype() -> redis::RedisError {
    redis::RedisError::from((
        redis::ErrorKind::TypeError,
        "WRONGTYPE Operation against a key holding the wrong kind of value",
    ))
}

#[async_trait::async_trait]
impl Kv for Memory {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self.entries.read().await.get(key) {
            Some(Entry::Text(value)) => Ok(Some(value.clone())),
            Some(Entry::Hash(_)) => Err(StoreError::Read(wrongtype())),
            None => Ok(None),
        }
    }
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), Entry::Text(value.to_string()));
        Ok(())
    }
    async fn hash_set(&self, key: &str, fields: &[(String, String)]) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        match entries
            .entry(key.to_string())
            .or_insert_with(|| Entry::Hash(HashMap::new()))
        {
            Entry::Hash(map) => {
                map.extend(fields.iter().cloned());
                Ok(())
            }
            Entry::Text(_) => Err(StoreError::Write(wrongtype())),
        }
    }
    async fn hash_all(&self, key: &str) -> Result<HashMap<String, String>, StoreError> {
        match self.entries.read().await.get(key) {
            Some(Entry::Hash(map)) => Ok(map.clone()),
            Some(Entry::Text(_)) => Err(StoreError::Read(wrongtype())),
            None => Ok(HashMap::new()),
        }
    }
    async fn scan(&self, pattern: &str) -> Result<Vec<String>, StoreError> {
        let entries = self.entries.read().await;
        let keys = match pattern.strip_suffix('*') {
            Some(prefix) => entries
                .keys()
                .filter(|key| key.starts_with(prefix))
                .cloned()
                .collect(),
            None => entries
                .keys()
                .filter(|key| key.as_str() == pattern)
                .cloned()
                .collect(),
        };
        Ok(keys)
    }
    async fn kind(&self, key: &str) -> Result<KeyKind, StoreError> {
        Ok(match self.entries.read().await.get(key) {
            Some(Entry::Text(_)) => KeyKind::Text,
            Some(Entry::Hash(_)) => KeyKind::Hash,
            None => KeyKind::Missing,
        })
    }
}
