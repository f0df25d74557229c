use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;
use crate::store::DataStore;

pub const SAVED_MESSAGE: &str = "All changes have been saved to the file.";

pub fn run<S: DataStore>(roster: &mut Roster<S>) -> Result<CmdResult> {
    roster.save()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(SAVED_MESSAGE));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn saves_and_confirms() {
        let fixture = StoreFixture::new().with_grid();
        let (mut roster, _) = Roster::load(fixture.store).unwrap();

        let result = run(&mut roster).unwrap();
        assert_eq!(roster.store().save_count(), 1);
        assert_eq!(result.messages[0].content, SAVED_MESSAGE);
    }
}
