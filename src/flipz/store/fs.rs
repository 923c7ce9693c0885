use super::DeckStore;
use crate::error::{FlipzError, Result};
use crate::model::{Card, Deck};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DECK_FILENAME: &str = "flipcards.json";

/// On-disk document shape: a top-level object with a `cards` array.
#[derive(Debug, Default, Serialize, Deserialize)]
struct DeckFile {
    #[serde(default)]
    cards: Vec<Card>,
}

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store backed by `flipcards.json` inside the given directory.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            path: dir.as_ref().join(DECK_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DeckStore for FileStore {
    fn load_deck(&self) -> Result<Deck> {
        if !self.path.exists() {
            return Ok(Deck::new());
        }
        let content = fs::read_to_string(&self.path).map_err(FlipzError::Io)?;
        let file: DeckFile =
            serde_json::from_str(&content).map_err(FlipzError::Serialization)?;
        Ok(file.cards)
    }

    fn save_deck(&mut self, deck: &Deck) -> Result<()> {
        let file = DeckFile {
            cards: deck.clone(),
        };
        let content = serde_json::to_string_pretty(&file).map_err(FlipzError::Serialization)?;
        fs::write(&self.path, content).map_err(FlipzError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn missing_file_loads_an_empty_deck() {
        let (_dir, store) = setup();
        assert_eq!(store.load_deck().unwrap(), Deck::new());
    }

    #[test]
    fn save_then_load_round_trips_unicode() {
        let (_dir, mut store) = setup();
        let deck = vec![
            Card::new("apple", "苹果"),
            Card::new("banana", "香蕉"),
            Card::new("naïve", "ナイーブ"),
        ];
        store.save_deck(&deck).unwrap();
        assert_eq!(store.load_deck().unwrap(), deck);
    }

    #[test]
    fn unicode_text_is_stored_unescaped() {
        let (_dir, mut store) = setup();
        store.save_deck(&vec![Card::new("apple", "苹果")]).unwrap();

        let on_disk = fs::read_to_string(store.path()).unwrap();
        assert!(on_disk.contains("苹果"));
        assert!(!on_disk.contains("\\u"));
    }

    #[test]
    fn saved_document_has_a_top_level_cards_array() {
        let (_dir, mut store) = setup();
        store.save_deck(&vec![Card::new("a", "b")]).unwrap();

        let on_disk = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&on_disk).unwrap();
        assert_eq!(value["cards"][0]["front"], "a");
        assert_eq!(value["cards"][0]["back"], "b");
    }

    #[test]
    fn missing_cards_key_loads_an_empty_deck() {
        let (dir, store) = setup();
        fs::write(dir.path().join(DECK_FILENAME), "{}").unwrap();
        assert_eq!(store.load_deck().unwrap(), Deck::new());
    }

    #[test]
    fn missing_card_fields_default_to_empty() {
        let (dir, store) = setup();
        fs::write(
            dir.path().join(DECK_FILENAME),
            r#"{"cards": [{"front": "lonely"}]}"#,
        )
        .unwrap();

        let deck = store.load_deck().unwrap();
        assert_eq!(deck, vec![Card::new("lonely", "")]);
    }

    #[test]
    fn malformed_content_is_an_error() {
        let (dir, store) = setup();
        fs::write(dir.path().join(DECK_FILENAME), "not json {").unwrap();
        let err = store.load_deck().unwrap_err();
        assert!(matches!(err, FlipzError::Serialization(_)));
    }

    #[test]
    fn save_overwrites_prior_contents() {
        let (_dir, mut store) = setup();
        store
            .save_deck(&vec![Card::new("a", "1"), Card::new("b", "2")])
            .unwrap();
        store.save_deck(&vec![Card::new("c", "3")]).unwrap();

        assert_eq!(store.load_deck().unwrap(), vec![Card::new("c", "3")]);
    }
}
