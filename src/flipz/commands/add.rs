use crate::commands::{CmdMessage, CmdResult};
use crate::deck::StudySession;
use crate::error::Result;
use crate::model::Card;
use crate::store::DeckStore;

/// Append a card and write the deck through to the store.
///
/// Both sides are trimmed; an empty side rejects the add as a no-op (an
/// empty prompt is how the user cancels). The card is appended before the
/// save, so a failed write leaves it in the session for a later retry.
pub fn run<S: DeckStore>(
    session: &mut StudySession,
    store: &mut S,
    front: &str,
    back: &str,
) -> Result<CmdResult> {
    let front = front.trim();
    let back = back.trim();

    if front.is_empty() || back.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(
            "Both sides of a card need text; nothing was added.",
        ));
        return Ok(result);
    }

    session.push_card(Card::new(front, back));
    store.save_deck(session.deck())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Card added: {}", front)));
    Ok(result)
}
