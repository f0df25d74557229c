use crate::config::PitlaneConfig;
use crate::model::Driver;

pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod list;
pub mod save;
pub mod search;
pub mod standings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Drivers a mutation touched, as they are after the change
    pub affected_drivers: Vec<Driver>,
    pub listed_drivers: Vec<Driver>,
    pub config: Option<PitlaneConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_drivers(mut self, drivers: Vec<Driver>) -> Self {
        self.affected_drivers = drivers;
        self
    }

    pub fn with_listed_drivers(mut self, drivers: Vec<Driver>) -> Self {
        self.listed_drivers = drivers;
        self
    }

    pub fn with_config(mut self, config: PitlaneConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Asks whoever is driving the session to approve a destructive change.
///
/// Returning `false` cancels; only an explicit yes should return `true`.
pub trait Confirm {
    fn confirm(&mut self, driver: &Driver) -> bool;
}

impl<F: FnMut(&Driver) -> bool> Confirm for F {
    fn confirm(&mut self, driver: &Driver) -> bool {
        self(driver)
    }
}

/// `y` or `yes`, any case. Everything else, including blank input, is a no.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

pub(crate) fn driver_label(driver: &Driver) -> String {
    format!("#{} {}", driver.number, driver.name)
}
