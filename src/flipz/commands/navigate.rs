use crate::commands::{show, CmdResult};
use crate::deck::StudySession;
use crate::error::Result;

pub fn next(session: &mut StudySession) -> Result<CmdResult> {
    session.next();
    show::run(session)
}

pub fn prev(session: &mut StudySession) -> Result<CmdResult> {
    session.prev();
    show::run(session)
}

pub fn select(session: &mut StudySession, index: usize) -> Result<CmdResult> {
    session.select(index);
    show::run(session)
}
