//! Error type shared by every key-value backend.

use thiserror::Error;

/// Errors surfaced by key-value backends.
///
/// Variants split by the direction of the failed command so callers can
/// log reads, writes, and listings differently without inspecting the cause.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store read failed: {0}")]
    Read(#[source] redis::RedisError),

    #[error("store write failed: {0}")]
    Write(#[source] redis::RedisError),

    #[error("store scan failed: {0}")]
    Scan(#[source] redis::RedisError),
}
