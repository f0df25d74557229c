use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Driver;
use crate::roster::Roster;
use crate::store::DataStore;

/// Every driver, ordered by team and then racing number. The roster itself is
/// left in its own order.
pub fn run<S: DataStore>(roster: &Roster<S>) -> Result<CmdResult> {
    let mut listed: Vec<Driver> = roster.drivers().to_vec();
    listed.sort_by(|a, b| a.team.cmp(&b.team).then(a.number.cmp(&b.number)));

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No drivers found."));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Total drivers listed: {}",
            listed.len()
        )));
    }
    Ok(result.with_listed_drivers(listed))
}
