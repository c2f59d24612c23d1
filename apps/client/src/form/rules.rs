//! Declarative per-field validation rules.
//!
//! The observed constraint set is minimum lengths on the posting form's
//! text inputs; `Rule::predicate` generalizes the same machinery for any
//! per-field check a host wants to add.

use std::fmt;

use super::draft::{FieldValue, RecordKind};

/// Shortest accepted length for constrained text inputs.
const MIN_TEXT_LEN: usize = 5;

enum Check {
    MinLength { min: usize },
    Predicate(Box<dyn Fn(&FieldValue) -> bool + Send + Sync>),
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::MinLength { min } => f.debug_struct("MinLength").field("min", min).finish(),
            Check::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// A single constraint on one field, with the message shown when it fails.
#[derive(Debug)]
pub struct Rule {
    pub field: &'static str,
    pub message: String,
    check: Check,
}

impl Rule {
    /// Minimum-length rule with the standard message wording.
    pub fn min_length(field: &'static str, label: &str, min: usize) -> Self {
        Rule {
            field,
            message: format!("{label} must be at least {min} characters long"),
            check: Check::MinLength { min },
        }
    }

    /// Free-form rule; `passes` receives the field's current value.
    pub fn predicate<F>(field: &'static str, message: impl Into<String>, passes: F) -> Self
    where
        F: Fn(&FieldValue) -> bool + Send + Sync + 'static,
    {
        Rule {
            field,
            message: message.into(),
            check: Check::Predicate(Box::new(passes)),
        }
    }

    /// Whether the given value satisfies this rule. Length rules apply to
    /// text; date-typed values satisfy them vacuously.
    pub fn passes(&self, value: &FieldValue) -> bool {
        match &self.check {
            Check::MinLength { min } => value.as_text().map_or(true, |s| s.chars().count() >= *min),
            Check::Predicate(f) => f(value),
        }
    }
}

/// The rules one form validates against.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        RuleSet { rules: Vec::new() }
    }

    pub fn with(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules constraining the given field.
    pub fn rules_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Rule> + 'a {
        self.rules.iter().filter(move |r| r.field == field)
    }

    /// Canonical rule set for the given entity kind.
    pub fn for_kind(kind: RecordKind) -> Self {
        match kind {
            RecordKind::WorkExperience => Self::work_experience(),
            RecordKind::Education => Self::education(),
            RecordKind::JobPosting => Self::job_posting(),
        }
    }

    /// Posting form: every text input except the employment-type select
    /// requires at least five characters.
    pub fn job_posting() -> Self {
        RuleSet::new()
            .with(Rule::min_length("job_post_title", "Job title", MIN_TEXT_LEN))
            .with(Rule::min_length("company_name", "Company name", MIN_TEXT_LEN))
            .with(Rule::min_length("location", "Location", MIN_TEXT_LEN))
            .with(Rule::min_length(
                "job_description",
                "Job description",
                MIN_TEXT_LEN,
            ))
    }

    /// Experience entries save without constraints.
    pub fn work_experience() -> Self {
        RuleSet::new()
    }

    /// Education entries save without constraints.
    pub fn education() -> Self {
        RuleSet::new()
    }
}
