use crate::error::{PitlaneError, Result};
use crate::schema::{Field, Value};

/// One driver: every schema field, typed.
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub number: i64,
    pub name: String,
    pub team: String,
    pub age: i64,
    pub nationality: String,
    pub podiums: i64,
    pub entries: i64,
    pub championships: i64,
    pub career_points: f64,
    pub season_points: f64,
}

impl Driver {
    pub fn value(&self, field: Field) -> Value {
        match field {
            Field::Number => Value::Integer(self.number),
            Field::Name => Value::Text(self.name.clone()),
            Field::Team => Value::Text(self.team.clone()),
            Field::Age => Value::Integer(self.age),
            Field::Nationality => Value::Text(self.nationality.clone()),
            Field::Podiums => Value::Integer(self.podiums),
            Field::Entries => Value::Integer(self.entries),
            Field::Championships => Value::Integer(self.championships),
            Field::CareerPoints => Value::Real(self.career_points),
            Field::SeasonPoints => Value::Real(self.season_points),
        }
    }

    /// Assign a value to a field. The value's kind must match the field's.
    pub fn set(&mut self, field: Field, value: Value) -> Result<()> {
        match (field, value) {
            (Field::Number, Value::Integer(n)) => self.number = n,
            (Field::Name, Value::Text(s)) => self.name = s,
            (Field::Team, Value::Text(s)) => self.team = s,
            (Field::Age, Value::Integer(n)) => self.age = n,
            (Field::Nationality, Value::Text(s)) => self.nationality = s,
            (Field::Podiums, Value::Integer(n)) => self.podiums = n,
            (Field::Entries, Value::Integer(n)) => self.entries = n,
            (Field::Championships, Value::Integer(n)) => self.championships = n,
            (Field::CareerPoints, Value::Real(x)) => self.career_points = x,
            (Field::SeasonPoints, Value::Real(x)) => self.season_points = x,
            (field, value) => {
                return Err(PitlaneError::InvalidValue {
                    field: field.key(),
                    value: value.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Build a driver by parsing one raw value per field.
    ///
    /// `raw` is asked for each field in schema order; the first missing or
    /// unparsable value aborts the build.
    pub fn from_raw<'a, F>(mut raw: F) -> std::result::Result<Self, RawFieldError>
    where
        F: FnMut(Field) -> Option<&'a str>,
    {
        let mut driver = Driver::blank();
        for field in Field::ALL {
            let text = raw(field).ok_or(RawFieldError::Missing(field))?;
            let value = field.parse(text).map_err(|_| RawFieldError::Unparsable {
                field,
                value: text.to_string(),
            })?;
            driver
                .set(field, value)
                .map_err(|_| RawFieldError::Unparsable {
                    field,
                    value: text.to_string(),
                })?;
        }
        Ok(driver)
    }

    fn blank() -> Self {
        Self {
            number: 0,
            name: String::new(),
            team: String::new(),
            age: 0,
            nationality: String::new(),
            podiums: 0,
            entries: 0,
            championships: 0,
            career_points: 0.0,
            season_points: 0.0,
        }
    }
}

/// Why a set of raw values could not become a [`Driver`].
#[derive(Debug, Clone, PartialEq)]
pub enum RawFieldError {
    Missing(Field),
    Unparsable { field: Field, value: String },
}

impl std::fmt::Display for RawFieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawFieldError::Missing(field) => write!(f, "missing column {:?}", field.key()),
            RawFieldError::Unparsable { field, value } => {
                write!(f, "{:?} is not a valid {}", value, field.key())
            }
        }
    }
}
