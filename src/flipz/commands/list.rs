use crate::commands::CmdResult;
use crate::deck::StudySession;
use crate::error::Result;

pub fn run(session: &StudySession) -> Result<CmdResult> {
    Ok(CmdResult::default().with_labels(session.labels()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Card;

    #[test]
    fn lists_fronts_in_deck_order() {
        let session = StudySession::new(vec![
            Card::new("apple", "苹果"),
            Card::new("banana", "香蕉"),
        ]);
        let result = run(&session).unwrap();
        assert_eq!(result.labels, vec!["apple", "banana"]);
    }

    #[test]
    fn empty_deck_lists_nothing() {
        let result = run(&StudySession::default()).unwrap();
        assert!(result.labels.is_empty());
    }
}
