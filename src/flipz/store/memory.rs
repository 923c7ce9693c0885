use super::DeckStore;
use crate::error::Result;
use crate::model::Deck;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    deck: Deck,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deck(deck: Deck) -> Self {
        Self { deck }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }
}

impl DeckStore for InMemoryStore {
    fn load_deck(&self) -> Result<Deck> {
        Ok(self.deck.clone())
    }

    fn save_deck(&mut self, deck: &Deck) -> Result<()> {
        self.deck = deck.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::FlipzError;
    use crate::model::Card;

    /// A store whose writes always fail, for exercising the error channel.
    /// Loads fail too when `fail_load` is set.
    #[derive(Default)]
    pub struct BrokenStore {
        pub fail_load: bool,
    }

    impl DeckStore for BrokenStore {
        fn load_deck(&self) -> Result<Deck> {
            if self.fail_load {
                Err(FlipzError::Store("simulated load failure".to_string()))
            } else {
                Ok(Deck::new())
            }
        }

        fn save_deck(&mut self, _deck: &Deck) -> Result<()> {
            Err(FlipzError::Store("simulated save failure".to_string()))
        }
    }

    pub fn deck_of(pairs: &[(&str, &str)]) -> Deck {
        pairs.iter().map(|(f, b)| Card::new(*f, *b)).collect()
    }
}
