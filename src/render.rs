// File: ./src/render.rs
// Turns resolved facts about one reminder into output lines.
use crate::model::item::Category;
use crate::model::template::{CompiledTemplates, Placeholder, Template};
use chrono::NaiveDate;

/// Everything a notification can mention, passed in explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFields<'a> {
    pub category: Category,
    pub name: &'a str,
    pub message: &'a str,
    pub date: NaiveDate,
    pub days_until: i64,
    pub age: i32,
}

/// The `{{due}}` phrase for a day offset.
pub fn due_phrase(templates: &CompiledTemplates, days_until: i64) -> String {
    let template = match days_until {
        0 => &templates.due_today,
        1 => &templates.due_tomorrow,
        _ => &templates.due_in,
    };
    template.render(|_| days_until.to_string())
}

fn select_template<'t>(templates: &'t CompiledTemplates, fields: &RenderFields) -> &'t Template {
    match fields.category {
        Category::Birthday if fields.age <= 0 => &templates.birthday_zero,
        Category::Birthday => &templates.birthday,
        Category::Event => &templates.reminder,
    }
}

/// Renders the notification for one matched reminder.
///
/// Returns the primary line, followed by the free-text message as a second
/// line when it is non-empty and the template did not already place it.
pub fn render(templates: &CompiledTemplates, fields: &RenderFields) -> Vec<String> {
    let template = select_template(templates, fields);
    let pattern = match fields.category {
        Category::Birthday => &templates.date_format,
        Category::Event => &templates.date_format_short,
    };
    let due = due_phrase(templates, fields.days_until);
    let date = fields.date.format(pattern).to_string();

    let primary = template.render(|p| match p {
        Placeholder::Name => fields.name.to_string(),
        Placeholder::Due => due.clone(),
        Placeholder::Date => date.clone(),
        Placeholder::Age => fields.age.max(0).to_string(),
        Placeholder::Days => fields.days_until.to_string(),
        Placeholder::Message => fields.message.to_string(),
        Placeholder::AgeOrDays => match fields.category {
            Category::Birthday => fields.age.max(0).to_string(),
            Category::Event => fields.days_until.to_string(),
        },
    });
    let primary = primary.trim_end_matches('\n').to_string();

    let mut lines = vec![primary];
    if !fields.message.is_empty() && !template.uses(Placeholder::Message) {
        lines.push(fields.message.to_string());
    }
    lines
}
