use super::record::Record;
use crate::store::Kv;
use crate::store::StoreError;

/// Outcome of a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub id: String,
    pub created: bool,
}

/// Creates and looks up player identity records.
///
/// Name uniqueness rides on the `username:` index. The existence check and
/// the writes are separate commands with no transaction around them, so
/// two concurrent registrations of the same new name can both pass the
/// check and mint distinct records.
#[async_trait::async_trait]
pub trait Registry {
    /// Registers a display name, or returns the id it already maps to.
    ///
    /// Reuse of an existing name is success, not an error. The index write
    /// is best-effort: if it fails the record still exists, it just cannot
    /// be found by name again.
    async fn register(&self, name: &str) -> Result<Registration, StoreError>;
}

#[async_trait::async_trait]
impl<S: Kv + ?Sized> Registry for S {
    async fn register(&self, name: &str) -> Result<Registration, StoreError> {
        if let Some(id) = self.get(&Record::index(name)).await? {
            log::info!("player {} already registered as {}", name, id);
            return Ok(Registration { id, created: false });
        }
        let record = Record::fresh(name);
        let id = String::from(record.id());
        self.hash_set(&Record::key(&id), &record.fields()).await?;
        if let Err(e) = self.set(&Record::index(name), &id).await {
            log::warn!("failed to index name {}: {}", name, e);
        }
        log::info!("registered player {} as {}", name, id);
        Ok(Registration { id, created: true })
    }
}
