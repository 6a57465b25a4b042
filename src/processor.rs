// File: ./src/processor.rs
// Evaluates a list of reminders against a fixed "now".
use crate::config::Config;
use crate::error::{ReminderError, TemplateError};
use crate::model::date::resolve;
use crate::model::item::{Category, Reminder};
use crate::model::occurrence::{effective_range, is_due, scheduled_occurrence};
use crate::model::template::CompiledTemplates;
use crate::render::{RenderFields, render};
use chrono::NaiveDate;
use strum::IntoEnumIterator;

/// A reminder that could not be evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub name: String,
    pub reason: ReminderError,
}

/// Result of one pass over a category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    /// Rendered output, in input order.
    pub lines: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Runs every reminder of `category` through resolve, occurrence lookup,
/// window check and rendering. A failing entry is recorded in
/// `Batch::diagnostics` and logged; the rest of the batch is unaffected.
pub fn process(
    reminders: &[Reminder],
    now: NaiveDate,
    category: Category,
    templates: &CompiledTemplates,
    default_range: u32,
) -> Batch {
    let mut batch = Batch::default();

    for reminder in reminders {
        let resolved = match resolve(&reminder.date, reminder.one_time) {
            Ok(r) => r,
            Err(reason) => {
                log::warn!("[{}]: Failed to parse date: {}", reminder.name, reason);
                batch.diagnostics.push(Diagnostic {
                    name: reminder.name.clone(),
                    reason,
                });
                continue;
            }
        };

        let Some(occurrence) = scheduled_occurrence(&resolved, reminder.one_time, now) else {
            log::debug!("[{}]: one-time event already passed", reminder.name);
            continue;
        };

        let range = effective_range(reminder, default_range);
        if !is_due(occurrence.days_until, range) {
            log::debug!(
                "[{}]: next {} on {} is {} days away (window {})",
                reminder.name,
                category,
                occurrence.date,
                occurrence.days_until,
                range
            );
            continue;
        }

        let age = match category {
            Category::Birthday => occurrence.age(resolved.origin_year),
            Category::Event => 0,
        };
        let fields = RenderFields {
            category,
            name: &reminder.name,
            message: &reminder.message,
            date: occurrence.date,
            days_until: occurrence.days_until,
            age,
        };
        batch.lines.extend(render(templates, &fields));
    }

    batch
}

/// Evaluates both categories of `config`, birthdays first.
///
/// Templates are compiled before any reminder is processed; a broken
/// template fails the whole run and nothing is returned.
pub fn evaluate(config: &Config, now: NaiveDate) -> Result<Batch, TemplateError> {
    let templates = config.template.compile()?;

    let mut out = Batch::default();
    for category in Category::iter() {
        let reminders = match category {
            Category::Birthday => &config.birthdays,
            Category::Event => &config.reminders,
        };
        let batch = process(
            reminders,
            now,
            category,
            &templates,
            config.range.for_category(category),
        );
        out.lines.extend(batch.lines);
        out.diagnostics.extend(batch.diagnostics);
    }
    Ok(out)
}
