use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::query;
use crate::roster::Roster;
use crate::store::DataStore;

pub fn run<S: DataStore>(roster: &Roster<S>, top: usize) -> Result<CmdResult> {
    let ranked: Vec<_> = query::standings(roster.drivers(), top)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if ranked.is_empty() {
        result.add_message(CmdMessage::info("No drivers found."));
    }
    Ok(result.with_listed_drivers(ranked))
}
