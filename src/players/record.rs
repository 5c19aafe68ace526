use chrono::SecondsFormat;
use chrono::Utc;
use std::collections::HashMap;

/// Key prefix for player records (hashes).
pub const RECORDS: &str = "player:";
/// Key prefix for the name-to-id index (strings). Disjoint from [`RECORDS`]
/// so enumerating the record namespace can never sweep up index entries.
pub const NAMES: &str = "username:";

/// A player's stored identity and running score.
///
/// Persisted as a field map under `player:<id>`. Counters live as decimal
/// strings in the store and are parsed on read; absent or unparseable
/// fields read as empty or zero, which is how partially written records
/// (counters only) surface in listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: String,
    player: String,
    wins: i64,
    losses: i64,
    created: String,
}

impl Record {
    /// Mints a record for a new player: fresh v7 id, zero counters, and
    /// a second-precision RFC 3339 creation timestamp.
    pub fn fresh(player: &str) -> Self {
        Self {
            id: uuid::Uuid::now_v7().to_string(),
            player: String::from(player),
            wins: 0,
            losses: 0,
            created: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    /// Rehydrates a record from stored hash fields, tolerantly.
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        Self {
            id: fields.get("id").cloned().unwrap_or_default(),
            player: fields.get("player").cloned().unwrap_or_default(),
            wins: fields.get("wins").and_then(|n| n.parse().ok()).unwrap_or(0),
            losses: fields.get("losses").and_then(|n| n.parse().ok()).unwrap_or(0),
            created: fields.get("created").cloned().unwrap_or_default(),
        }
    }

    /// Serializes the persisted shape. The derived total is never stored.
    pub fn fields(&self) -> Vec<(String, String)> {
        vec![
            (String::from("id"), self.id.clone()),
            (String::from("player"), self.player.clone()),
            (String::from("wins"), self.wins.to_string()),
            (String::from("losses"), self.losses.to_string()),
            (String::from("created"), self.created.clone()),
        ]
    }

    /// Store key of the record with this id.
    pub fn key(id: &str) -> String {
        format!("{}{}", RECORDS, id)
    }
    /// Store key of the name-index entry for this display name.
    pub fn index(name: &str) -> String {
        format!("{}{}", NAMES, name)
    }
    /// Glob matching every record key.
    pub fn pattern() -> String {
        format!("{}*", RECORDS)
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn player(&self) -> &str {
        &self.player
    }
    pub fn wins(&self) -> i64 {
        self.wins
    }
    pub fn losses(&self) -> i64 {
        self.losses
    }
    pub fn created(&self) -> &str {
        &self.created
    }
    /// Games played, derived on every read as wins + losses.
    pub fn total(&self) -> i64 {
        self.wins + self.losses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_starts_at_zero() {
        let record = Record::fresh("alice");
        assert_eq!(record.player(), "alice");
        assert_eq!(record.wins(), 0);
        assert_eq!(record.losses(), 0);
        assert_eq!(record.total(), 0);
        assert!(!record.id().is_empty());
    }

    #[test]
    fn fresh_timestamps_rfc3339() {
        let record = Record::fresh("alice");
        assert!(chrono::DateTime::parse_from_rfc3339(record.created()).is_ok());
    }

    #[test]
    fn fresh_ids_are_distinct() {
        assert_ne!(Record::fresh("alice").id(), Record::fresh("alice").id());
    }

    #[test]
    fn fields_never_persist_total() {
        let record = Record::fresh("alice");
        assert!(record.fields().iter().all(|(field, _)| field != "total"));
    }

    #[test]
    fn from_fields_round_trips() {
        let record = Record::fresh("alice");
        let fields = record.fields().into_iter().collect::<HashMap<_, _>>();
        assert_eq!(Record::from_fields(&fields), record);
    }

    #[test]
    fn from_fields_tolerates_gaps() {
        let record = Record::from_fields(&HashMap::new());
        assert_eq!(record.id(), "");
        assert_eq!(record.player(), "");
        assert_eq!(record.wins(), 0);
        assert_eq!(record.losses(), 0);
    }

    #[test]
    fn from_fields_tolerates_garbage_counters() {
        let fields = HashMap::from([
            (String::from("wins"), String::from("many")),
            (String::from("losses"), String::from("2")),
        ]);
        let record = Record::from_fields(&fields);
        assert_eq!(record.wins(), 0);
        assert_eq!(record.losses(), 2);
        assert_eq!(record.total(), 2);
    }

    #[test]
    fn keys_are_disjoint_namespaces() {
        assert!(!Record::index("alice").starts_with(RECORDS));
        assert!(!Record::key("alice").starts_with(NAMES));
    }
}
