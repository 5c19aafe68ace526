use crate::cards::Draw;
use crate::players::Record;
use serde::Deserialize;
use serde::Serialize;

/// Body of `POST /store-username`.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoreUsernameRequest {
    #[serde(default)]
    pub player: String,
}

/// Body of `POST /updatePlayerStats/{id}`. Both deltas default to zero.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateStatsRequest {
    #[serde(default)]
    pub win: i64,
    #[serde(default)]
    pub loss: i64,
}

/// Successful registration, fresh or repeated.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoredResponse {
    pub message: String,
    pub id: String,
}

/// Successful stats update.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatedResponse {
    pub message: String,
}

/// Any handler failure surfaced to the caller.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// One player as the leaderboard shows it, stored fields plus the
/// derived total.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: String,
    pub player: String,
    pub wins: i64,
    pub losses: i64,
    pub total: i64,
    pub created: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlayersResponse {
    pub players: Vec<PlayerView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CardsResponse {
    pub cards: Vec<String>,
}

impl From<Record> for PlayerView {
    fn from(record: Record) -> Self {
        Self {
            id: String::from(record.id()),
            player: String::from(record.player()),
            wins: record.wins(),
            losses: record.losses(),
            total: record.total(),
            created: String::from(record.created()),
        }
    }
}

impl From<Draw> for CardsResponse {
    fn from(draw: Draw) -> Self {
        Self {
            cards: draw.cards().iter().map(|card| card.to_string()).collect(),
        }
    }
}
