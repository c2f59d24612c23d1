use serde::{Deserialize, Serialize};

use crate::form::draft::{
    DraftRecord, EducationDraft, RecordKind, WorkExperienceDraft,
};
use crate::form::reconcile::{DraftError, EditTarget, TargetIdentity};

/// Work-experience entry on a candidate CV.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkExperience {
    pub id: i64,
    pub occupation_title: String,
    pub company_name: String,
    pub years: String,
    pub description: String,
    #[serde(default)]
    pub job_seeker: Option<i64>,
}

/// Education entry on a candidate CV.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub id: i64,
    pub school_name: String,
    pub years: String,
    pub level: String,
    pub orientation: String,
    pub description: String,
    #[serde(default)]
    pub job_seeker: Option<i64>,
}

/// Candidate CV aggregate: contact details plus entry collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSeekerCv {
    pub id: i64,
    pub email: String,
    pub mobile_number: String,
    #[serde(default)]
    pub work_experiences: Vec<WorkExperience>,
    #[serde(default)]
    pub educations: Vec<Education>,
}

/// Create/update body for an experience entry, built from the form draft.
/// The backend attaches the owning CV itself.
#[derive(Debug, Clone, Serialize)]
pub struct WorkExperiencePayload {
    pub occupation_title: String,
    pub company_name: String,
    pub years: String,
    pub description: String,
}

impl From<&WorkExperienceDraft> for WorkExperiencePayload {
    fn from(draft: &WorkExperienceDraft) -> Self {
        WorkExperiencePayload {
            occupation_title: draft.occupation_title.clone(),
            company_name: draft.company_name.clone(),
            years: draft.years.clone(),
            description: draft.description.clone(),
        }
    }
}

/// Create/update body for an education entry, built from the form draft.
#[derive(Debug, Clone, Serialize)]
pub struct EducationPayload {
    pub school_name: String,
    pub years: String,
    pub level: String,
    pub orientation: String,
    pub description: String,
}

impl From<&EducationDraft> for EducationPayload {
    fn from(draft: &EducationDraft) -> Self {
        EducationPayload {
            school_name: draft.school_name.clone(),
            years: draft.years.clone(),
            level: draft.level.clone(),
            orientation: draft.orientation.clone(),
            description: draft.description.clone(),
        }
    }
}

/// Partial CV contact update; only the fields that are set go on the wire.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CvUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
}

impl EditTarget for WorkExperience {
    fn identity(&self) -> TargetIdentity {
        TargetIdentity {
            kind: RecordKind::WorkExperience,
            id: self.id,
        }
    }

    fn to_draft(&self) -> Result<DraftRecord, DraftError> {
        Ok(DraftRecord::WorkExperience(WorkExperienceDraft {
            occupation_title: self.occupation_title.clone(),
            company_name: self.company_name.clone(),
            years: self.years.clone(),
            description: self.description.clone(),
        }))
    }
}

impl EditTarget for Education {
    fn identity(&self) -> TargetIdentity {
        TargetIdentity {
            kind: RecordKind::Education,
            id: self.id,
        }
    }

    fn to_draft(&self) -> Result<DraftRecord, DraftError> {
        Ok(DraftRecord::Education(EducationDraft {
            school_name: self.school_name.clone(),
            years: self.years.clone(),
            level: self.level.clone(),
            orientation: self.orientation.clone(),
            description: self.description.clone(),
        }))
    }
}
