use crate::commands::{driver_label, save, CmdMessage, CmdResult};
use crate::error::{PitlaneError, Result};
use crate::model::Driver;
use crate::roster::Roster;
use crate::store::DataStore;
use tracing::info;

pub fn run<S: DataStore>(roster: &mut Roster<S>, driver: Driver) -> Result<CmdResult> {
    if roster.contains(driver.number) {
        return Err(PitlaneError::DuplicateIdentifier(driver.number));
    }

    roster.push(driver.clone());
    let mut result = match save::run(roster) {
        Ok(result) => result,
        Err(e) => {
            roster.remove(driver.number);
            return Err(e);
        }
    };
    info!(number = driver.number, name = %driver.name, "driver added");

    result.messages.insert(
        0,
        CmdMessage::success(format!("Added new driver: {}", driver_label(&driver))),
    );
    Ok(result.with_affected_drivers(vec![driver]))
}
