//! # Storage Layer
//!
//! Persistence for the deck sits behind the [`DeckStore`] trait so the
//! command layer never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single JSON document
//!   (`flipcards.json`) in the working directory
//! - [`memory::InMemoryStore`]: in-memory storage for tests
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "cards": [
//!     {"front": "apple", "back": "苹果"}
//!   ]
//! }
//! ```
//!
//! The whole deck is read and written as one document. A missing file or a
//! missing `cards` key reads as an empty deck; only unreadable or
//! unparsable content is an error.

use crate::error::Result;
use crate::model::Deck;

pub mod fs;
pub mod memory;

/// Abstract interface for deck persistence.
pub trait DeckStore {
    /// Load the full deck. A missing resource is the expected first-run
    /// state and yields an empty deck, not an error.
    fn load_deck(&self) -> Result<Deck>;

    /// Persist the full deck, replacing any prior contents.
    fn save_deck(&mut self, deck: &Deck) -> Result<()>;
}
