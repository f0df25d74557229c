use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::query;
use crate::roster::Roster;
use crate::store::DataStore;

pub fn run<S: DataStore>(roster: &Roster<S>, term: &str) -> Result<CmdResult> {
    let found: Vec<_> = query::matching(roster.drivers(), term).cloned().collect();

    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info("No match found."));
    }
    Ok(result.with_listed_drivers(found))
}
