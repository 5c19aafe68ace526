use super::error::StoreError;
use std::collections::HashMap;

/// Physical shape of a stored key, as the store reports it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum KeyKind {
    /// A field map (Redis hash).
    Hash,
    /// A plain string value.
    Text,
    /// No value stored under the key.
    Missing,
    /// Any other shape (list, set, stream, ...).
    Other,
}

impl From<&str> for KeyKind {
    fn from(s: &str) -> Self {
        match s {
            "hash" => KeyKind::Hash,
            "string" => KeyKind::Text,
            "none" => KeyKind::Missing,
            _ => KeyKind::Other,
        }
    }
}

/// Key-value contract every backend implements.
/// Mirrors the handful of Redis commands the domain needs, so repository
/// code runs unchanged against the real server or the in-memory store.
#[async_trait::async_trait]
pub trait Kv: Send + Sync {
    /// Reads a text key. `None` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    /// Writes a text key, replacing whatever was there.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    /// Writes the given fields into a hash key, creating it if absent.
    /// Fields not named are left untouched.
    async fn hash_set(&self, key: &str, fields: &[(String, String)]) -> Result<(), StoreError>;
    /// Reads every field of a hash key. Empty map when the key is absent.
    async fn hash_all(&self, key: &str) -> Result<HashMap<String, String>, StoreError>;
    /// Lists every key matching a glob pattern. Unordered.
    async fn scan(&self, pattern: &str) -> Result<Vec<String>, StoreError>;
    /// Reports the physical shape of a key.
    async fn kind(&self, key: &str) -> Result<KeyKind, StoreError>;
}
