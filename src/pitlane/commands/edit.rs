use crate::commands::{driver_label, save, CmdMessage, CmdResult};
use crate::error::{PitlaneError, Result};
use crate::roster::Roster;
use crate::schema::EditableField;
use crate::store::DataStore;
use tracing::info;

/// Change one editable field of a driver.
///
/// The value is coerced before anything is touched, so a bad value leaves the
/// driver and the file as they were.
pub fn run<S: DataStore>(
    roster: &mut Roster<S>,
    number: i64,
    field: EditableField,
    raw_value: &str,
) -> Result<CmdResult> {
    if !roster.contains(number) {
        return Err(PitlaneError::NotFound(number));
    }

    let value = field.field().parse(raw_value)?;
    let shown = value.to_string();

    let driver = roster
        .find_mut(number)
        .ok_or(PitlaneError::NotFound(number))?;
    let previous = driver.value(field.field());
    driver.set(field.field(), value)?;
    let updated = driver.clone();

    let mut result = match save::run(roster) {
        Ok(result) => result,
        Err(e) => {
            if let Some(driver) = roster.find_mut(number) {
                driver.set(field.field(), previous)?;
            }
            return Err(e);
        }
    };
    info!(number, field = %field, value = %shown, "driver edited");

    result.messages.insert(
        0,
        CmdMessage::success(format!(
            "Updated {} for {}: {}",
            field,
            driver_label(&updated),
            shown
        )),
    );
    Ok(result.with_affected_drivers(vec![updated]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{hamilton, FailingStore, StoreFixture};

    fn roster() -> Roster<crate::store::memory::InMemoryStore> {
        let fixture = StoreFixture::new().with_driver(hamilton());
        Roster::load(fixture.store).unwrap().0
    }

    #[test]
    fn updates_field_and_saves() {
        let mut roster = roster();

        let result = run(&mut roster, 44, EditableField::Age, "41").unwrap();

        assert_eq!(roster.find(44).unwrap().age, 41);
        assert_eq!(roster.store().save_count(), 1);
        assert_eq!(roster.store().saved().unwrap()[0].age, 41);
        assert_eq!(result.messages[0].content, "Updated Age for #44 Lewis Hamilton: 41");
    }

    #[test]
    fn edits_team_and_season_points() {
        let mut roster = roster();
        run(&mut roster, 44, EditableField::Team, "Mercedes").unwrap();
        run(&mut roster, 44, EditableField::SeasonPoints, "133.5").unwrap();

        let driver = roster.find(44).unwrap();
        assert_eq!(driver.team, "Mercedes");
        assert_eq!(driver.season_points, 133.5);
    }

    #[test]
    fn bad_value_leaves_driver_unchanged() {
        let mut roster = roster();
        let field: EditableField = "Age".parse().unwrap();

        let err = run(&mut roster, 44, field, "not-a-number").unwrap_err();

        assert!(matches!(err, PitlaneError::InvalidValue { .. }));
        assert_eq!(roster.find(44).unwrap().age, 40);
        assert_eq!(roster.store().save_count(), 0);
    }

    #[test]
    fn unknown_driver_is_not_found() {
        let mut roster = roster();
        let err = run(&mut roster, 7, EditableField::Podiums, "3").unwrap_err();
        assert!(matches!(err, PitlaneError::NotFound(7)));
    }

    #[test]
    fn failed_save_restores_old_value() {
        let store = FailingStore::with_drivers(vec![hamilton()]);
        let (mut roster, _) = Roster::load(store).unwrap();

        let err = run(&mut roster, 44, EditableField::SeasonPoints, "150.5").unwrap_err();

        assert!(matches!(err, PitlaneError::Io(_)));
        assert_eq!(roster.find(44).unwrap(), &hamilton());
    }
}
