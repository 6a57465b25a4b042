// File: ./src/model/mod.rs
// Reminder data model and the date/template logic built on it.
pub mod date;
pub mod item;
pub mod occurrence;
pub mod template;

pub use date::{MonthDay, ResolvedDate};
pub use item::{Category, Reminder, ReminderRange};
pub use occurrence::Occurrence;
pub use template::{CompiledTemplates, TemplateSet};
