use crate::commands::{driver_label, save, CmdMessage, CmdResult, Confirm};
use crate::error::{PitlaneError, Result};
use crate::roster::Roster;
use crate::store::DataStore;
use tracing::info;

pub fn run<S: DataStore, C: Confirm + ?Sized>(
    roster: &mut Roster<S>,
    number: i64,
    confirm: &mut C,
) -> Result<CmdResult> {
    let driver = roster
        .find(number)
        .cloned()
        .ok_or(PitlaneError::NotFound(number))?;

    if !confirm.confirm(&driver) {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!(
            "Deletion cancelled: {}",
            driver_label(&driver)
        )));
        return Ok(result);
    }

    let removed = roster.remove(number);
    let mut result = match save::run(roster) {
        Ok(result) => result,
        Err(e) => {
            if let Some((pos, driver)) = removed {
                roster.insert(pos, driver);
            }
            return Err(e);
        }
    };
    info!(number, name = %driver.name, "driver deleted");

    result.messages.insert(
        0,
        CmdMessage::success(format!("Deleted driver: {}", driver_label(&driver))),
    );
    Ok(result.with_affected_drivers(vec![driver]))
}
