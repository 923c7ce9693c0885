use crate::commands::{show, CmdResult};
use crate::deck::StudySession;
use crate::error::Result;

pub fn run(session: &mut StudySession) -> Result<CmdResult> {
    session.flip();
    show::run(session)
}
