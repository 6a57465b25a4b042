// File: ./src/model/item.rs
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

fn default_birthday_range() -> u32 {
    10
}
fn default_event_range() -> u32 {
    15
}

/// One trackable event, as read from the config.
// Aliases accept the capitalized keys of older config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Date")]
    pub date: String,
    #[serde(default, alias = "Message", skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, alias = "OneTimeEvent", skip_serializing_if = "std::ops::Not::not")]
    pub one_time: bool,
    /// Overrides the category's lookahead window for this entry only.
    #[serde(default, alias = "ReminderRange", skip_serializing_if = "Option::is_none")]
    pub range: Option<u32>,
}

impl Reminder {
    pub fn new(name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            message: String::new(),
            one_time: false,
            range: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn one_time(mut self) -> Self {
        self.one_time = true;
        self
    }

    pub fn with_range(mut self, days: u32) -> Self {
        self.range = Some(days);
        self
    }
}

/// Default lookahead windows, in whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderRange {
    #[serde(default = "default_birthday_range", alias = "Birthdays")]
    pub birthdays: u32,
    #[serde(default = "default_event_range", alias = "Events")]
    pub events: u32,
}

impl Default for ReminderRange {
    fn default() -> Self {
        Self {
            birthdays: default_birthday_range(),
            events: default_event_range(),
        }
    }
}

impl ReminderRange {
    pub fn for_category(&self, category: Category) -> u32 {
        match category {
            Category::Birthday => self.birthdays,
            Category::Event => self.events,
        }
    }
}

/// Birthdays carry an age and use the long date pattern; events use the short one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Category {
    #[strum(to_string = "birthday")]
    Birthday,
    #[strum(to_string = "event")]
    Event,
}
