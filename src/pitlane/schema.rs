//! # Roster Schema
//!
//! The roster has a fixed, ordered set of ten fields. The order here is the
//! column order of the persisted file and the order every row is written in.
//!
//! Each field carries a persistence key (the CSV header text) and a semantic
//! type. Raw text is coerced into a [`Value`] through [`Field::parse`]; the
//! codec and the edit command share that coercion so the on-disk rules and the
//! interactive rules never drift apart.
//!
//! Only a subset of fields can be changed after a driver is added. That subset
//! is [`EditableField`].

use crate::error::{PitlaneError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Real,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Number,
    Name,
    Team,
    Age,
    Nationality,
    Podiums,
    Entries,
    Championships,
    CareerPoints,
    SeasonPoints,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Number,
        Field::Name,
        Field::Team,
        Field::Age,
        Field::Nationality,
        Field::Podiums,
        Field::Entries,
        Field::Championships,
        Field::CareerPoints,
        Field::SeasonPoints,
    ];

    /// Header text used in the persisted file.
    pub fn key(self) -> &'static str {
        match self {
            Field::Number => "Racing Number",
            Field::Name => "Name",
            Field::Team => "Team",
            Field::Age => "Age",
            Field::Nationality => "Nationality",
            Field::Podiums => "Podiums",
            Field::Entries => "GP Entered",
            Field::Championships => "World Championships",
            Field::CareerPoints => "Career Points",
            Field::SeasonPoints => "Current Season Points",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Name | Field::Team | Field::Nationality => FieldKind::Text,
            Field::CareerPoints | Field::SeasonPoints => FieldKind::Real,
            _ => FieldKind::Integer,
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Coerce raw text into this field's type.
    ///
    /// Numbers tolerate surrounding whitespace; text is taken verbatim.
    pub fn parse(self, raw: &str) -> Result<Value> {
        let invalid = || PitlaneError::InvalidValue {
            field: self.key(),
            value: raw.to_string(),
        };
        match self.kind() {
            FieldKind::Integer => raw
                .trim()
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| invalid()),
            FieldKind::Real => raw
                .trim()
                .parse::<f64>()
                .map(Value::Real)
                .map_err(|_| invalid()),
            FieldKind::Text => Ok(Value::Text(raw.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl fmt::Display for Value {
    /// Canonical persisted form. Reals keep full precision and always show a
    /// decimal point when integral, so `5000.0` stays `5000.0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Real(x) => {
                let text = x.to_string();
                if text.contains(['.', 'e', 'i', 'N']) {
                    f.write_str(&text)
                } else {
                    write!(f, "{}.0", text)
                }
            }
            Value::Text(s) => f.write_str(s),
        }
    }
}

/// The fields an edit may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditableField {
    Team,
    SeasonPoints,
    Age,
    Podiums,
    Championships,
}

impl EditableField {
    /// Menu order: the position (1-based) is the number shown to the user.
    pub const ALL: [EditableField; 5] = [
        EditableField::Team,
        EditableField::SeasonPoints,
        EditableField::Age,
        EditableField::Podiums,
        EditableField::Championships,
    ];

    pub fn field(self) -> Field {
        match self {
            EditableField::Team => Field::Team,
            EditableField::SeasonPoints => Field::SeasonPoints,
            EditableField::Age => Field::Age,
            EditableField::Podiums => Field::Podiums,
            EditableField::Championships => Field::Championships,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            EditableField::Team => "team",
            EditableField::SeasonPoints => "season-points",
            EditableField::Age => "age",
            EditableField::Podiums => "podiums",
            EditableField::Championships => "championships",
        }
    }
}

impl fmt::Display for EditableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field().key())
    }
}

impl FromStr for EditableField {
    type Err = PitlaneError;

    /// Accepts the menu number, the slug, or the persistence key (any case).
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        if let Ok(n) = wanted.parse::<usize>() {
            return n
                .checked_sub(1)
                .and_then(|i| EditableField::ALL.get(i).copied())
                .ok_or_else(|| PitlaneError::InvalidField(s.to_string()));
        }
        EditableField::ALL
            .into_iter()
            .find(|e| {
                e.slug().eq_ignore_ascii_case(wanted) || e.field().key().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| PitlaneError::InvalidField(s.to_string()))
    }
}
