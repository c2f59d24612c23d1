//! Draft record store: the mutable, locally held copy of an entity being
//! created or edited through a form.
//!
//! Drafts are a tagged union over the three editable entity kinds. Field
//! access goes through string names (the form wiring is name-based), and the
//! update boundary rejects unknown names and type mismatches instead of
//! growing new fields.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Entity kinds and field tables
// ────────────────────────────────────────────────────────────────────────────

/// Entity kinds that can be edited through a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    WorkExperience,
    Education,
    JobPosting,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::WorkExperience => "work_experience",
            RecordKind::Education => "education",
            RecordKind::JobPosting => "job_posting",
        }
    }
}

/// Form fields per kind, in declaration order. Validation errors and any
/// field iteration follow this order.
pub const WORK_EXPERIENCE_FIELDS: &[&str] =
    &["occupation_title", "company_name", "years", "description"];

pub const EDUCATION_FIELDS: &[&str] =
    &["school_name", "years", "level", "orientation", "description"];

pub const JOB_POSTING_FIELDS: &[&str] = &[
    "company_name",
    "job_post_title",
    "job_description",
    "location",
    "employment_type",
    "expiration_date",
];

// ────────────────────────────────────────────────────────────────────────────
// Field values and per-kind draft shapes
// ────────────────────────────────────────────────────────────────────────────

/// A single field's value. Everything is free-form text except date-typed
/// fields, which hold a parsed calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Date(NaiveDate),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Date(_) => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            FieldValue::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkExperienceDraft {
    pub occupation_title: String,
    pub company_name: String,
    pub years: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationDraft {
    pub school_name: String,
    pub years: String,
    pub level: String,
    pub orientation: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPostingDraft {
    pub company_name: String,
    pub job_post_title: String,
    pub job_description: String,
    pub location: String,
    pub employment_type: String,
    pub expiration_date: NaiveDate,
}

impl JobPostingDraft {
    /// Blank posting form seeded with the given expiration date.
    pub fn blank_on(date: NaiveDate) -> Self {
        JobPostingDraft {
            company_name: String::new(),
            job_post_title: String::new(),
            job_description: String::new(),
            location: String::new(),
            employment_type: String::new(),
            expiration_date: date,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// DraftRecord: tagged union over the editable kinds
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DraftRecord {
    WorkExperience(WorkExperienceDraft),
    Education(EducationDraft),
    JobPosting(JobPostingDraft),
}

impl DraftRecord {
    /// Blank template for the given kind. Posting templates seed their
    /// expiration date with today's date, matching the posting form.
    pub fn blank(kind: RecordKind) -> Self {
        Self::blank_on(kind, Utc::now().naive_utc().date())
    }

    /// Blank template with an explicit seed date for the posting form.
    pub fn blank_on(kind: RecordKind, date: NaiveDate) -> Self {
        match kind {
            RecordKind::WorkExperience => {
                DraftRecord::WorkExperience(WorkExperienceDraft::default())
            }
            RecordKind::Education => DraftRecord::Education(EducationDraft::default()),
            RecordKind::JobPosting => DraftRecord::JobPosting(JobPostingDraft::blank_on(date)),
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            DraftRecord::WorkExperience(_) => RecordKind::WorkExperience,
            DraftRecord::Education(_) => RecordKind::Education,
            DraftRecord::JobPosting(_) => RecordKind::JobPosting,
        }
    }

    /// Field names for this record's kind, in declaration order.
    pub fn field_names(&self) -> &'static [&'static str] {
        match self.kind() {
            RecordKind::WorkExperience => WORK_EXPERIENCE_FIELDS,
            RecordKind::Education => EDUCATION_FIELDS,
            RecordKind::JobPosting => JOB_POSTING_FIELDS,
        }
    }

    /// Reads one field by name. `None` when the name does not belong to
    /// this record's kind.
    pub fn field(&self, name: &str) -> Option<FieldValue> {
        match self {
            DraftRecord::WorkExperience(d) => match name {
                "occupation_title" => Some(FieldValue::Text(d.occupation_title.clone())),
                "company_name" => Some(FieldValue::Text(d.company_name.clone())),
                "years" => Some(FieldValue::Text(d.years.clone())),
                "description" => Some(FieldValue::Text(d.description.clone())),
                _ => None,
            },
            DraftRecord::Education(d) => match name {
                "school_name" => Some(FieldValue::Text(d.school_name.clone())),
                "years" => Some(FieldValue::Text(d.years.clone())),
                "level" => Some(FieldValue::Text(d.level.clone())),
                "orientation" => Some(FieldValue::Text(d.orientation.clone())),
                "description" => Some(FieldValue::Text(d.description.clone())),
                _ => None,
            },
            DraftRecord::JobPosting(d) => match name {
                "company_name" => Some(FieldValue::Text(d.company_name.clone())),
                "job_post_title" => Some(FieldValue::Text(d.job_post_title.clone())),
                "job_description" => Some(FieldValue::Text(d.job_description.clone())),
                "location" => Some(FieldValue::Text(d.location.clone())),
                "employment_type" => Some(FieldValue::Text(d.employment_type.clone())),
                "expiration_date" => Some(FieldValue::Date(d.expiration_date)),
                _ => None,
            },
        }
    }

    /// Writes one field by name. Returns `false` (leaving the record
    /// untouched) when the name is unknown for this kind or the value's
    /// type does not match the field's type. All template fields stay
    /// present after any update; edits never add or remove fields.
    pub fn set_field(&mut self, name: &str, value: FieldValue) -> bool {
        match self {
            DraftRecord::WorkExperience(d) => {
                let slot = match name {
                    "occupation_title" => &mut d.occupation_title,
                    "company_name" => &mut d.company_name,
                    "years" => &mut d.years,
                    "description" => &mut d.description,
                    _ => return false,
                };
                set_text(slot, value)
            }
            DraftRecord::Education(d) => {
                let slot = match name {
                    "school_name" => &mut d.school_name,
                    "years" => &mut d.years,
                    "level" => &mut d.level,
                    "orientation" => &mut d.orientation,
                    "description" => &mut d.description,
                    _ => return false,
                };
                set_text(slot, value)
            }
            DraftRecord::JobPosting(d) => {
                if name == "expiration_date" {
                    return match value {
                        FieldValue::Date(date) => {
                            d.expiration_date = date;
                            true
                        }
                        FieldValue::Text(_) => false,
                    };
                }
                let slot = match name {
                    "company_name" => &mut d.company_name,
                    "job_post_title" => &mut d.job_post_title,
                    "job_description" => &mut d.job_description,
                    "location" => &mut d.location,
                    "employment_type" => &mut d.employment_type,
                    _ => return false,
                };
                set_text(slot, value)
            }
        }
    }
}

fn set_text(slot: &mut String, value: FieldValue) -> bool {
    match value {
        FieldValue::Text(text) => {
            *slot = text;
            true
        }
        FieldValue::Date(_) => false,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// DraftStore: one form's draft plus the template it resets to
// ────────────────────────────────────────────────────────────────────────────

/// Holds the record being edited and the blank template for its kind.
/// The template is fixed at construction; `reset` restores it. One store
/// serves one form instance and one kind for its whole lifetime.
#[derive(Debug, Clone)]
pub struct DraftStore {
    draft: DraftRecord,
    template: DraftRecord,
}

impl DraftStore {
    /// Create-mode store: draft and template start as the blank record.
    pub fn new(kind: RecordKind) -> Self {
        let template = DraftRecord::blank(kind);
        DraftStore {
            draft: template.clone(),
            template,
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.template.kind()
    }

    pub fn draft(&self) -> &DraftRecord {
        &self.draft
    }

    /// Replaces the whole draft with a copy of the given record. The reset
    /// template is untouched: it stays the kind's blank form.
    pub fn initialize(&mut self, record: DraftRecord) {
        self.draft = record;
    }

    /// Applies one field edit. Unknown names and type mismatches leave the
    /// draft untouched and return `false`.
    pub fn update_field(&mut self, name: &str, value: FieldValue) -> bool {
        self.draft.set_field(name, value)
    }

    /// Restores the blank template for this kind.
    pub fn reset(&mut self) {
        self.draft = self.template.clone();
    }
}
