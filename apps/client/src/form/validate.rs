//! Field validation: evaluates a rule set against the current draft.

use serde::Serialize;

use super::draft::DraftRecord;
use super::rules::RuleSet;

/// One failed constraint, addressed to a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Field-keyed validation failures. Empty means the draft is valid.
///
/// Lifecycle: repopulated only on a submit attempt, and cleared per field
/// the moment that field is edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First message recorded against the given field, if any.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Drops any error recorded against the given field.
    pub fn clear(&mut self, field: &str) {
        self.errors.retain(|e| e.field != field);
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

/// Evaluates every rule against the draft. Pure: no side effects, no draft
/// mutation. Errors come back in the draft's field declaration order, and a
/// rule naming a field the draft does not have never fires.
pub fn validate(draft: &DraftRecord, rules: &RuleSet) -> ValidationErrors {
    let mut errors = Vec::new();
    for &field in draft.field_names() {
        if let Some(value) = draft.field(field) {
            for rule in rules.rules_for(field) {
                if !rule.passes(&value) {
                    errors.push(FieldError {
                        field: rule.field,
                        message: rule.message.clone(),
                    });
                }
            }
        }
    }
    ValidationErrors { errors }
}
