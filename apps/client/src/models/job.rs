use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::form::draft::{DraftRecord, JobPostingDraft, RecordKind};
use crate::form::reconcile::{parse_wire_date, DraftError, EditTarget, TargetIdentity};

/// Employment forms offered by the posting form's select input. The draft
/// field itself stays free-form; the backend accepts any string.
pub const EMPLOYMENT_TYPES: &[&str] = &["Tillsvidareanställning", "Provanställning", "Deltid"];

/// Job posting as served by the backend. `expiration_date` stays in its
/// wire form (`YYYY-MM-DD`); it is parsed when converting to a draft.
/// `applications` is only populated in the employer's serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPost {
    pub id: i64,
    pub company_name: String,
    pub job_post_title: String,
    pub job_description: String,
    pub location: String,
    pub employment_type: String,
    pub expiration_date: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub applications: Vec<Application>,
}

/// A candidate's application to a posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub application_date: DateTime<Utc>,
    /// Wire name `profile_id`: the applying user's id.
    #[serde(rename = "profile_id")]
    pub applicant: i64,
    #[serde(default)]
    pub job_seeker_cv: Option<i64>,
}

/// Create/update body for a posting; the field set mirrors the posting
/// form. `expiration_date` serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize)]
pub struct JobPostPayload {
    pub company_name: String,
    pub job_post_title: String,
    pub job_description: String,
    pub location: String,
    pub employment_type: String,
    pub expiration_date: NaiveDate,
}

impl From<&JobPostingDraft> for JobPostPayload {
    fn from(draft: &JobPostingDraft) -> Self {
        JobPostPayload {
            company_name: draft.company_name.clone(),
            job_post_title: draft.job_post_title.clone(),
            job_description: draft.job_description.clone(),
            location: draft.location.clone(),
            employment_type: draft.employment_type.clone(),
            expiration_date: draft.expiration_date,
        }
    }
}

impl EditTarget for JobPost {
    fn identity(&self) -> TargetIdentity {
        TargetIdentity {
            kind: RecordKind::JobPosting,
            id: self.id,
        }
    }

    fn to_draft(&self) -> Result<DraftRecord, DraftError> {
        Ok(DraftRecord::JobPosting(JobPostingDraft {
            company_name: self.company_name.clone(),
            job_post_title: self.job_post_title.clone(),
            job_description: self.job_description.clone(),
            location: self.location.clone(),
            employment_type: self.employment_type.clone(),
            expiration_date: parse_wire_date("expiration_date", &self.expiration_date)?,
        }))
    }
}
