use super::record::Record;
use crate::store::KeyKind;
use crate::store::Kv;
use crate::store::StoreError;

/// Win/loss bookkeeping and the leaderboard listing.
#[async_trait::async_trait]
pub trait Ledger {
    /// Adds the given deltas onto a player's counters.
    ///
    /// Deliberately skips any existence check: an unknown id reads as zero
    /// counters and the write fabricates a partial record holding only the
    /// counter fields. Deltas are applied as supplied, negatives included.
    async fn tally(&self, id: &str, wins: i64, losses: i64) -> Result<(), StoreError>;

    /// Lists every player record with counters parsed, sorted by name.
    ///
    /// A key that cannot be typed or read is skipped with a warning; only
    /// a failed enumeration of the namespace aborts the listing.
    async fn standings(&self) -> Result<Vec<Record>, StoreError>;
}

#[async_trait::async_trait]
impl<S: Kv + ?Sized> Ledger for S {
    async fn tally(&self, id: &str, wins: i64, losses: i64) -> Result<(), StoreError> {
        let key = Record::key(id);
        let record = Record::from_fields(&self.hash_all(&key).await?);
        let counters = vec![
            (String::from("wins"), (record.wins() + wins).to_string()),
            (String::from("losses"), (record.losses() + losses).to_string()),
        ];
        self.hash_set(&key, &counters).await?;
        log::info!("tallied {}: {:+} wins, {:+} losses", id, wins, losses);
        Ok(())
    }

    async fn standings(&self) -> Result<Vec<Record>, StoreError> {
        let mut records = Vec::new();
        for key in self.scan(&Record::pattern()).await? {
            match self.kind(&key).await {
                Ok(KeyKind::Hash) => {}
                Ok(kind) => {
                    log::warn!("skipping non-record key {} ({:?})", key, kind);
                    continue;
                }
                Err(e) => {
                    log::warn!("skipping untypable key {}: {}", key, e);
                    continue;
                }
            }
            match self.hash_all(&key).await {
                Ok(fields) => records.push(Record::from_fields(&fields)),
                Err(e) => log::warn!("skipping unreadable key {}: {}", key, e),
            }
        }
        records.sort_by(|a, b| a.player().cmp(b.player()).then_with(|| a.id().cmp(b.id())));
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::Registry;
    use crate::store::Memory;
    use std::collections::HashMap;

    #[tokio::test]
    async fn fresh_player_stands_at_zero() {
        let store = Memory::new();
        let outcome = store.register("alice").await.unwrap();
        let standings = store.standings().await.unwrap();
        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].id(), outcome.id);
        assert_eq!(standings[0].wins(), 0);
        assert_eq!(standings[0].losses(), 0);
        assert_eq!(standings[0].total(), 0);
    }

    #[tokio::test]
    async fn tally_accumulates_across_calls() {
        let store = Memory::new();
        let outcome = store.register("alice").await.unwrap();
        store.tally(&outcome.id, 3, 1).await.unwrap();
        store.tally(&outcome.id, 2, 0).await.unwrap();
        let standings = store.standings().await.unwrap();
        assert_eq!(standings[0].wins(), 5);
        assert_eq!(standings[0].losses(), 1);
        assert_eq!(standings[0].total(), 6);
    }

    #[tokio::test]
    async fn tally_leaves_identity_untouched() {
        let store = Memory::new();
        let outcome = store.register("alice").await.unwrap();
        store.tally(&outcome.id, 1, 1).await.unwrap();
        let standings = store.standings().await.unwrap();
        assert_eq!(standings[0].player(), "alice");
        assert_eq!(standings[0].id(), outcome.id);
        assert!(!standings[0].created().is_empty());
    }

    #[tokio::test]
    async fn tally_accepts_negative_deltas() {
        let store = Memory::new();
        let outcome = store.register("alice").await.unwrap();
        store.tally(&outcome.id, 3, 0).await.unwrap();
        store.tally(&outcome.id, -1, 0).await.unwrap();
        let standings = store.standings().await.unwrap();
        assert_eq!(standings[0].wins(), 2);
    }

    /// Pins the no-NotFound policy: tallying an id nobody registered
    /// fabricates a counters-only record that shows up in standings
    /// with empty identity fields.
    #[tokio::test]
    async fn tally_unknown_id_fabricates_partial_record() {
        let store = Memory::new();
        store.tally("ghost", 1, 0).await.unwrap();
        assert_eq!(store.kind(&Record::key("ghost")).await.unwrap(), KeyKind::Hash);
        let standings = store.standings().await.unwrap();
        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].wins(), 1);
        assert_eq!(standings[0].losses(), 0);
        assert_eq!(standings[0].id(), "");
        assert_eq!(standings[0].player(), "");
    }

    #[tokio::test]
    async fn standings_skip_stray_text_keys() {
        let store = Memory::new();
        store.register("alice").await.unwrap();
        store.set("player:stray", "not a record").await.unwrap();
        let standings = store.standings().await.unwrap();
        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].player(), "alice");
    }

    #[tokio::test]
    async fn standings_never_include_index_entries() {
        let store = Memory::new();
        store.register("alice").await.unwrap();
        store.register("bob").await.unwrap();
        let standings = store.standings().await.unwrap();
        assert_eq!(standings.len(), 2);
        assert!(standings.iter().all(|r| !r.player().is_empty()));
    }

    #[tokio::test]
    async fn standings_sort_by_name() {
        let store = Memory::new();
        store.register("carol").await.unwrap();
        store.register("alice").await.unwrap();
        store.register("bob").await.unwrap();
        let names = store
            .standings()
            .await
            .unwrap()
            .iter()
            .map(|r| String::from(r.player()))
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["alice", "bob", "carol"]);
    }

    /// Store that refuses every command, standing in for a dead server.
    struct Downed;

    fn refused() -> redis::RedisError {
        redis::RedisError::from((redis::ErrorKind::IoError, "connection refused"))
    }

    #[async_trait::async_trait]
    impl Kv for Downed {
        async fn get(&self, _: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Read(refused()))
        }
        async fn set(&self, _: &str, _: &str) -> Result<(), StoreError> {
            Err(StoreError::Write(refused()))
        }
        async fn hash_set(&self, _: &str, _: &[(String, String)]) -> Result<(), StoreError> {
            Err(StoreError::Write(refused()))
        }
        async fn hash_all(&self, _: &str) -> Result<HashMap<String, String>, StoreError> {
            Err(StoreError::Read(refused()))
        }
        async fn scan(&self, _: &str) -> Result<Vec<String>, StoreError> {
            Err(StoreError::Scan(refused()))
        }
        async fn kind(&self, _: &str) -> Result<KeyKind, StoreError> {
            Err(StoreError::Read(refused()))
        }
    }

    #[tokio::test]
    async fn standings_fail_when_enumeration_fails() {
        assert!(matches!(
            Downed.standings().await,
            Err(StoreError::Scan(_))
        ));
    }

    #[tokio::test]
    async fn tally_fails_when_read_fails() {
        assert!(matches!(
            Downed.tally("anyone", 1, 0).await,
            Err(StoreError::Read(_))
        ));
    }
}
