use crate::model::{Card, Deck, Side};

/// In-memory study state: the deck, the cursor, and which side of the
/// current card is showing.
///
/// Every operation is total. On an empty deck navigation and flipping are
/// no-ops and the cursor is reported as `None`; the cursor is always in
/// bounds whenever the deck is non-empty.
///
/// Navigation (`next`, `prev`, `select`) always lands on the front of the
/// target card. `push_card` appends without moving the cursor or touching
/// the flip state, so adding never interrupts the card being studied.
#[derive(Debug, Clone)]
pub struct StudySession {
    deck: Deck,
    cursor: usize,
    showing_front: bool,
}

impl Default for StudySession {
    fn default() -> Self {
        Self::new(Deck::new())
    }
}

impl StudySession {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            cursor: 0,
            showing_front: true,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Position of the current card, `None` when the deck is empty.
    pub fn cursor(&self) -> Option<usize> {
        if self.deck.is_empty() {
            None
        } else {
            Some(self.cursor)
        }
    }

    pub fn showing_front(&self) -> bool {
        self.showing_front
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.deck.get(self.cursor)
    }

    /// Text of the showing side of the current card.
    pub fn current_text(&self) -> Option<&str> {
        self.current_card().map(|card| {
            if self.showing_front {
                card.front.as_str()
            } else {
                card.back.as_str()
            }
        })
    }

    /// Front text of every card, in deck order, for selection lists.
    pub fn labels(&self) -> Vec<String> {
        self.deck.iter().map(|card| card.front.clone()).collect()
    }

    /// The side the next `flip` would reveal. Drives the label on any flip
    /// affordance: while the front is showing the answer is `Side::Back`.
    pub fn flip_reveals(&self) -> Side {
        if self.showing_front {
            Side::Back
        } else {
            Side::Front
        }
    }

    pub fn flip(&mut self) {
        if !self.deck.is_empty() {
            self.showing_front = !self.showing_front;
        }
    }

    /// Advance one card, wrapping to the first past the last.
    pub fn next(&mut self) {
        if self.deck.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.deck.len();
        self.showing_front = true;
    }

    /// Retreat one card, wrapping to the last before the first.
    pub fn prev(&mut self) {
        if self.deck.is_empty() {
            return;
        }
        self.cursor = (self.cursor + self.deck.len() - 1) % self.deck.len();
        self.showing_front = true;
    }

    /// Jump to `index`. Out-of-range indexes are ignored; selection UIs are
    /// expected to only offer valid positions.
    pub fn select(&mut self, index: usize) {
        if index < self.deck.len() {
            self.cursor = index;
            self.showing_front = true;
        }
    }

    /// Append a card. Cursor and flip state are left alone; the new card is
    /// not auto-selected.
    pub fn push_card(&mut self, card: Card) {
        self.deck.push(card);
    }
}
