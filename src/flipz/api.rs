//! # API Facade
//!
//! [`FlipzApi`] is the deck controller every front-end talks to. It owns the
//! [`StudySession`] and the store, dispatches to the command layer, and is
//! the boundary where persistence failures are contained: they come back as
//! Error-level messages on the [`CmdResult`], never as panics or process
//! exits, so the session stays interactive after any failed load or save.
//!
//! Generic over [`DeckStore`]:
//! - Production: `FlipzApi<FileStore>`
//! - Testing: `FlipzApi<InMemoryStore>`

use crate::commands;
use crate::deck::StudySession;
use crate::error::Result;
use crate::store::DeckStore;

pub struct FlipzApi<S: DeckStore> {
    store: S,
    session: StudySession,
}

impl<S: DeckStore> FlipzApi<S> {
    /// A controller with an empty session; call [`load`](Self::load) to
    /// bring in the persisted deck.
    pub fn new(store: S) -> Self {
        Self {
            store,
            session: StudySession::default(),
        }
    }

    /// Load the deck from the store. On failure the session starts empty
    /// and the cause lands on the message channel; a missing deck file is
    /// the normal first-run state and produces no message at all.
    pub fn load(&mut self) -> CmdResult {
        match self.store.load_deck() {
            Ok(deck) => {
                self.session = StudySession::new(deck);
                CmdResult::default()
            }
            Err(e) => {
                self.session = StudySession::default();
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::error(format!("Failed to load cards: {}", e)));
                result
            }
        }
    }

    pub fn labels(&self) -> CmdResult {
        contain(commands::list::run(&self.session))
    }

    pub fn current(&self) -> CmdResult {
        contain(commands::show::run(&self.session))
    }

    pub fn flip(&mut self) -> CmdResult {
        contain(commands::flip::run(&mut self.session))
    }

    pub fn next(&mut self) -> CmdResult {
        contain(commands::navigate::next(&mut self.session))
    }

    pub fn prev(&mut self) -> CmdResult {
        contain(commands::navigate::prev(&mut self.session))
    }

    pub fn select(&mut self, index: usize) -> CmdResult {
        contain(commands::navigate::select(&mut self.session, index))
    }

    pub fn add_card(&mut self, front: &str, back: &str) -> CmdResult {
        match commands::add::run(&mut self.session, &mut self.store, front, back) {
            Ok(result) => result,
            Err(e) => {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::error(format!(
                    "Failed to save cards: {} (the new card stays in this session)",
                    e
                )));
                result
            }
        }
    }

    /// Read access to the session, for render code that wants the cursor
    /// position or the showing side directly.
    pub fn session(&self) -> &StudySession {
        &self.session
    }
}

fn contain(outcome: Result<CmdResult>) -> CmdResult {
    match outcome {
        Ok(result) => result,
        Err(e) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::error(e.to_string()));
            result
        }
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Side;
    use crate::store::memory::fixtures::{deck_of, BrokenStore};
    use crate::store::memory::InMemoryStore;

    fn api_with(pairs: &[(&str, &str)]) -> FlipzApi<InMemoryStore> {
        let mut api = FlipzApi::new(InMemoryStore::with_deck(deck_of(pairs)));
        api.load();
        api
    }

    #[test]
    fn load_failure_degrades_to_an_empty_session() {
        let mut api = FlipzApi::new(BrokenStore {
            fail_load: true,
        });
        let result = api.load();

        assert!(matches!(result.messages[0].level, MessageLevel::Error));
        assert!(result.messages[0].content.contains("Failed to load cards"));
        assert!(api.session().is_empty());
        // still fully usable
        assert_eq!(api.next().text, None);
        assert!(api.labels().labels.is_empty());
    }

    #[test]
    fn save_failure_is_reported_and_the_card_is_kept() {
        let mut api = FlipzApi::new(BrokenStore::default());
        api.load();

        let result = api.add_card("hello", "world");

        assert!(matches!(result.messages[0].level, MessageLevel::Error));
        assert!(result.messages[0].content.contains("Failed to save cards"));
        assert_eq!(api.session().labels(), vec!["hello"]);
    }

    #[test]
    fn add_persists_through_the_store() {
        let mut api = FlipzApi::new(InMemoryStore::new());
        api.load();
        api.add_card("hello", "world");

        assert_eq!(api.labels().labels, vec!["hello"]);
        assert_eq!(api.current().text.as_deref(), Some("hello"));
    }

    #[test]
    fn rejected_add_leaves_the_deck_unchanged() {
        let mut api = api_with(&[("cat", "猫")]);
        api.add_card("", "x");
        api.add_card("x", "");
        api.add_card("", "");
        assert_eq!(api.session().len(), 1);
    }

    // The canonical study walk: view, flip, navigate with wrap-around.
    #[test]
    fn study_scenario() {
        let mut api = api_with(&[("cat", "猫"), ("dog", "狗")]);

        assert_eq!(api.current().text.as_deref(), Some("cat"));
        assert_eq!(api.current().reveals, Some(Side::Back));

        assert_eq!(api.flip().text.as_deref(), Some("猫"));
        assert_eq!(api.current().reveals, Some(Side::Front));

        // navigation lands on the front of the next card
        assert_eq!(api.next().text.as_deref(), Some("dog"));

        // two prevs wrap back around to the first card
        api.prev();
        assert_eq!(api.prev().text.as_deref(), Some("dog"));
        assert_eq!(api.next().text.as_deref(), Some("cat"));
    }
}
