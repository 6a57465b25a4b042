// File: ./src/model/template.rs
//! Notification templates.
//!
//! Templates are plain text with `{{placeholder}}` markers. They are parsed
//! once into segments when the config is compiled, so a broken template is
//! reported before any reminder is looked at.
use crate::error::TemplateError;
use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::str::FromStr;
use strum::EnumString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Placeholder {
    Name,
    Due,
    Date,
    Age,
    Days,
    Message,
    /// Older configs: the age for birthdays, the day count otherwise.
    #[strum(serialize = "ageordays")]
    AgeOrDays,
}

const ALL_PLACEHOLDERS: &[Placeholder] = &[
    Placeholder::Name,
    Placeholder::Due,
    Placeholder::Date,
    Placeholder::Age,
    Placeholder::Days,
    Placeholder::Message,
    Placeholder::AgeOrDays,
];

// Due phrases are substituted into `{{due}}`, so they only see the day count.
const DUE_PLACEHOLDERS: &[Placeholder] = &[Placeholder::Days, Placeholder::AgeOrDays];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Placeholder),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parses `text`, accepting only placeholders listed in `allowed`.
    /// `field` names the config key in error messages.
    pub fn parse(field: &str, text: &str, allowed: &[Placeholder]) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = text;
        let mut offset = 0;

        while let Some(start) = rest.find("{{") {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }
            let after_open = &rest[start + 2..];
            let end = after_open.find("}}").ok_or_else(|| TemplateError::Unclosed {
                field: field.to_string(),
                offset: offset + start,
            })?;

            // `{{.Name}}` is the spelling used by older configs.
            let key = after_open[..end].trim();
            let key = key.strip_prefix('.').unwrap_or(key);
            if key.is_empty() {
                return Err(TemplateError::EmptyPlaceholder {
                    field: field.to_string(),
                    offset: offset + start,
                });
            }
            let placeholder = Placeholder::from_str(key)
                .ok()
                .filter(|p| allowed.contains(p))
                .ok_or_else(|| TemplateError::UnknownPlaceholder {
                    field: field.to_string(),
                    name: key.to_string(),
                })?;
            segments.push(Segment::Field(placeholder));

            let consumed = start + 2 + end + 2;
            offset += consumed;
            rest = &rest[consumed..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { segments })
    }

    pub fn uses(&self, placeholder: Placeholder) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Field(p) if *p == placeholder))
    }

    pub fn render(&self, value_of: impl Fn(Placeholder) -> String) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(p) => out.push_str(&value_of(*p)),
            }
        }
        out
    }
}

fn default_due_today() -> String {
    "today".to_string()
}
fn default_due_tomorrow() -> String {
    "tomorrow".to_string()
}
fn default_due_in() -> String {
    "in {{days}} days".to_string()
}
fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}
fn default_date_format_short() -> String {
    "%d/%m".to_string()
}
fn default_birthday_zero() -> String {
    "[{{name}}]'s birthday is {{due}}! {{date}}".to_string()
}
fn default_birthday() -> String {
    "[{{name}}] is turning {{age}} years old {{due}}! {{date}}".to_string()
}
fn default_reminder() -> String {
    "[{{name}}] is due {{due}}! {{date}}".to_string()
}

/// Raw template strings as they appear under `[template]` in the config.
/// Aliases accept the key names of older configs.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TemplateSet {
    #[serde(default = "default_due_today")]
    pub due_today: String,
    #[serde(default = "default_due_tomorrow")]
    pub due_tomorrow: String,
    #[serde(default = "default_due_in")]
    pub due_in: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_date_format_short")]
    pub date_format_short: String,
    #[serde(default = "default_birthday_zero", alias = "Birthday0")]
    pub birthday_zero: String,
    #[serde(default = "default_birthday", alias = "Birthday")]
    pub birthday: String,
    #[serde(default = "default_reminder", alias = "Reminder")]
    pub reminder: String,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self {
            due_today: default_due_today(),
            due_tomorrow: default_due_tomorrow(),
            due_in: default_due_in(),
            date_format: default_date_format(),
            date_format_short: default_date_format_short(),
            birthday_zero: default_birthday_zero(),
            birthday: default_birthday(),
            reminder: default_reminder(),
        }
    }
}

impl TemplateSet {
    /// Validates every template and date pattern. Fails on the first problem.
    pub fn compile(&self) -> Result<CompiledTemplates, TemplateError> {
        Ok(CompiledTemplates {
            due_today: Template::parse("due_today", &self.due_today, DUE_PLACEHOLDERS)?,
            due_tomorrow: Template::parse("due_tomorrow", &self.due_tomorrow, DUE_PLACEHOLDERS)?,
            due_in: Template::parse("due_in", &self.due_in, DUE_PLACEHOLDERS)?,
            date_format: validate_date_pattern("date_format", &self.date_format)?,
            date_format_short: validate_date_pattern("date_format_short", &self.date_format_short)?,
            birthday_zero: Template::parse("birthday_zero", &self.birthday_zero, ALL_PLACEHOLDERS)?,
            birthday: Template::parse("birthday", &self.birthday, ALL_PLACEHOLDERS)?,
            reminder: Template::parse("reminder", &self.reminder, ALL_PLACEHOLDERS)?,
        })
    }
}

// Layout tokens of older configs ("02/01/2006" style), longest first.
const LEGACY_LAYOUT_TOKENS: &[(&str, &str)] = &[
    ("January", "%B"),
    ("Monday", "%A"),
    ("2006", "%Y"),
    ("Jan", "%b"),
    ("Mon", "%a"),
    ("_2", "%e"),
    ("01", "%m"),
    ("02", "%d"),
    ("06", "%y"),
];

/// Rewrites an older reference-date layout into a strftime pattern.
/// Patterns that already contain a `%` specifier are returned unchanged.
pub fn translate_legacy_layout(pattern: &str) -> String {
    if pattern.contains('%') {
        return pattern.to_string();
    }
    let mut out = String::new();
    let mut rest = pattern;
    'scan: while let Some(c) = rest.chars().next() {
        for (token, spec) in LEGACY_LAYOUT_TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(spec);
                rest = tail;
                continue 'scan;
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

// Patterns are applied to dates only, so time fields (%H, %M, ...) are rejected
// as well as unknown specifiers.
fn validate_date_pattern(field: &str, pattern: &str) -> Result<String, TemplateError> {
    let pattern = translate_legacy_layout(pattern);
    let pattern = pattern.as_str();
    let mut probe = String::new();
    let malformed = StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error));
    if malformed || write!(probe, "{}", NaiveDate::MIN.format(pattern)).is_err() {
        return Err(TemplateError::InvalidDateFormat {
            field: field.to_string(),
            pattern: pattern.to_string(),
        });
    }
    Ok(pattern.to_string())
}

/// A validated [`TemplateSet`]. Only obtainable through [`TemplateSet::compile`].
#[derive(Debug, Clone)]
pub struct CompiledTemplates {
    pub(crate) due_today: Template,
    pub(crate) due_tomorrow: Template,
    pub(crate) due_in: Template,
    pub(crate) date_format: String,
    pub(crate) date_format_short: String,
    pub(crate) birthday_zero: Template,
    pub(crate) birthday: Template,
    pub(crate) reminder: Template,
}
