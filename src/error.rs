// File: ./src/error.rs
//! Error types for reminder evaluation.
//!
//! `ReminderError` is scoped to a single entry and never aborts a batch.
//! `TemplateError` means the active template set is unusable and the run
//! must stop before anything is printed.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReminderError {
    #[error("invalid date format '{text}' (expected DD/MM or DD/MM/YYYY)")]
    InvalidDateFormat { text: String },

    #[error("one-time event requires a year, got '{text}'")]
    MissingYear { text: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template '{field}': unclosed placeholder starting at byte {offset}")]
    Unclosed { field: String, offset: usize },

    #[error("template '{field}': unknown placeholder '{{{{{name}}}}}'")]
    UnknownPlaceholder { field: String, name: String },

    #[error("template '{field}': empty placeholder at byte {offset}")]
    EmptyPlaceholder { field: String, offset: usize },

    #[error("template '{field}': invalid date pattern '{pattern}'")]
    InvalidDateFormat { field: String, pattern: String },
}
