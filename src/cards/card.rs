/// One of the four card labels a draw can produce.
///
/// The labels are fixed vocabulary, not a deck: draws sample them with
/// replacement, so any multiset of labels is a valid hand.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Card {
    #[default]
    Cat = 0,
    Defuse = 1,
    Shuffle = 2,
    Exploding = 3,
}

impl Card {
    /// Number of distinct labels.
    pub const COUNT: u8 = 4;

    /// Samples a uniformly random label.
    pub fn random() -> Self {
        Self::from(rand::random_range(0..Self::COUNT))
    }
}

impl From<u8> for Card {
    fn from(n: u8) -> Card {
        match n {
            0 => Card::Cat,
            1 => Card::Defuse,
            2 => Card::Shuffle,
            3 => Card::Exploding,
            _ => panic!("Invalid card"),
        }
    }
}
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c as u8
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Card::Cat => "cat",
                Card::Defuse => "defuse",
                Card::Shuffle => "shuffle",
                Card::Exploding => "exploding",
            }
        )
    }
}
