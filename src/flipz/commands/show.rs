use crate::commands::CmdResult;
use crate::deck::StudySession;
use crate::error::Result;

/// The current card's showing side and the flip affordance label. Neither
/// is set while the deck is empty.
pub fn run(session: &StudySession) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if let Some(text) = session.current_text() {
        result = result.with_text(text).with_reveals(session.flip_reveals());
    }
    Ok(result)
}
