use serde::{Deserialize, Serialize};

/// A single two-sided flashcard.
///
/// Cards carry no identity beyond their position in the deck. Both sides
/// default to empty strings so that hand-edited deck files with missing
/// keys still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub front: String,
    #[serde(default)]
    pub back: String,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

/// The ordered deck for one session. Insertion order defines both
/// navigation order and display order.
pub type Deck = Vec<Card>;

/// One side of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Front,
    Back,
}
