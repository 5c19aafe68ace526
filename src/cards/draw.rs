use super::card::Card;

/// Number of cards dealt per draw.
pub const HAND_SIZE: usize = 5;

/// A hand of randomly drawn cards.
///
/// Wraps the dealt labels in draw order. Cards are sampled independently
/// and uniformly with replacement, so repeated labels are expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw(Vec<Card>);

impl Draw {
    /// Deals a fresh hand of [`HAND_SIZE`] random cards.
    pub fn deal() -> Self {
        Self((0..HAND_SIZE).map(|_| Card::random()).collect())
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl From<Draw> for Vec<Card> {
    fn from(draw: Draw) -> Self {
        draw.0
    }
}
