use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::Macro;
use crate::session::{Field, FormMode};

/// Minimum Jaro-Winkler similarity for a typed field name to be offered.
const FIELD_MATCH_THRESHOLD: f64 = 0.8;

/// How a typed field name resolved against a form's fields.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldMatch {
    Exact(Field),
    /// Close matches, best first.
    Candidates(Vec<Field>),
    NoMatch,
}

/// Names a field answers to when typed.
fn aliases(field: Field) -> Vec<String> {
    let mut names = vec![field.label()];
    match field {
        Field::Calories => names.extend(["kcal", "cal", "calorie_goal"].map(String::from)),
        Field::Grams(m) => names.push(format!("{}_goal", m.name())),
        Field::Percent(m) => {
            names.push(format!("{}_percent", m.name()));
            names.push(format!("{}_pct", m.name()));
        }
    }
    if field == Field::Grams(Macro::Carbs) {
        names.push("carbohydrates".to_string());
    }
    names
}

/// Match a typed field name against the fields editable on `mode`.
pub fn resolve_field(input: &str, mode: FormMode) -> FieldMatch {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return FieldMatch::NoMatch;
    }

    let fields = mode.editable_fields();

    // Try exact match first (case-insensitive)
    if let Some(field) = fields
        .iter()
        .find(|f| aliases(**f).iter().any(|name| *name == needle))
    {
        return FieldMatch::Exact(*field);
    }

    // Try fuzzy matching
    let mut candidates: Vec<(Field, f64)> = fields
        .iter()
        .map(|f| {
            let score = aliases(*f)
                .iter()
                .map(|name| jaro_winkler(name, &needle))
                .fold(0.0, f64::max);
            (*f, score)
        })
        .filter(|(_, score)| *score > FIELD_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        FieldMatch::NoMatch
    } else {
        FieldMatch::Candidates(candidates.into_iter().map(|(f, _)| f).collect())
    }
}

/// Prompt for the next edit as `<field> <value>`.
///
/// Returns `None` when the user submits a blank line. A field name with no
/// value clears that field.
pub fn prompt_edit(mode: FormMode) -> Result<Option<(Field, String)>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Edit a field (e.g. `protein 25`), or press Enter to finish")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        let (name, value) = input.split_once(char::is_whitespace).unwrap_or((input, ""));
        let value = value.trim().to_string();

        match resolve_field(name, mode) {
            FieldMatch::Exact(field) => return Ok(Some((field, value))),
            FieldMatch::Candidates(candidates) if candidates.len() == 1 => {
                let field = candidates[0];
                let confirm = Confirm::new()
                    .with_prompt(format!("Did you mean '{}'?", field))
                    .default(true)
                    .interact()?;

                if confirm {
                    return Ok(Some((field, value)));
                }
            }
            FieldMatch::Candidates(candidates) => {
                // Multiple matches - let user select
                let mut options: Vec<String> = candidates.iter().map(|f| f.label()).collect();
                options.push("None of these".to_string());

                let selection = Select::new()
                    .with_prompt("Which field did you mean?")
                    .items(&options)
                    .default(0)
                    .interact()?;

                if let Some(field) = candidates.get(selection) {
                    return Ok(Some((*field, value)));
                }
            }
            FieldMatch::NoMatch => {
                let names: Vec<String> = mode.editable_fields().iter().map(|f| f.label()).collect();
                println!("No field named '{}'. Fields: {}", name, names.join(", "));
            }
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
