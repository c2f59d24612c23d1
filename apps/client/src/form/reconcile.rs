//! Edit/create reconciliation: decides whether a form seeds its draft from
//! an existing entity (edit mode) or from the blank template (create mode),
//! and re-seeds only when the target's identity actually changes.

use chrono::NaiveDate;
use thiserror::Error;

use super::draft::{DraftRecord, DraftStore, RecordKind};

/// Stable identity of an edit target: entity kind plus backend id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetIdentity {
    pub kind: RecordKind,
    pub id: i64,
}

/// An existing entity a form can be seeded from. Conversion copies the
/// data into a fresh draft; the source is never mutated.
pub trait EditTarget {
    fn identity(&self) -> TargetIdentity;
    fn to_draft(&self) -> Result<DraftRecord, DraftError>;
}

/// Failure converting an external record into a draft.
#[derive(Debug, Error)]
pub enum DraftError {
    #[error("Field '{field}' holds '{value}', expected a YYYY-MM-DD date")]
    InvalidDate {
        field: &'static str,
        value: String,
    },
}

/// Parses a wire date (`YYYY-MM-DD`) into a calendar date.
pub fn parse_wire_date(field: &'static str, value: &str) -> Result<NaiveDate, DraftError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| DraftError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// What a reconcile call did to the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// Same target as last time; the draft, including any in-progress
    /// edits, survives untouched.
    Unchanged,
    /// A target appeared or its identity changed; the draft now copies it.
    SeededFromTarget,
    /// The target went away (or never existed); the draft is blank.
    SeededBlank,
}

/// Tracks which target identity the draft was last seeded from, so the
/// decision is driven by identity change and nothing else.
#[derive(Debug, Default)]
pub struct Reconciler {
    // None until the first call; Some(None) after seeding in create mode.
    seeded: Option<Option<TargetIdentity>>,
}

impl Reconciler {
    pub fn new() -> Self {
        Reconciler { seeded: None }
    }

    /// Seeds the store from the target (edit mode) or from its blank
    /// template (create mode). A repeat call with an unchanged identity is
    /// a no-op, so in-progress edits are never discarded by re-render
    /// churn. On a conversion error the previous seed, draft, and identity
    /// memory all stay intact and the call may be retried.
    pub fn reconcile<T: EditTarget>(
        &mut self,
        store: &mut DraftStore,
        target: Option<&T>,
    ) -> Result<Reconciliation, DraftError> {
        let identity = target.map(EditTarget::identity);
        if self.seeded == Some(identity) {
            return Ok(Reconciliation::Unchanged);
        }
        let outcome = match target {
            Some(t) => {
                store.initialize(t.to_draft()?);
                Reconciliation::SeededFromTarget
            }
            None => {
                store.reset();
                Reconciliation::SeededBlank
            }
        };
        self.seeded = Some(identity);
        Ok(outcome)
    }

    /// Drops the identity memory so the next call reseeds unconditionally.
    /// Used when a form surface is reopened for a fresh lifecycle.
    pub fn forget(&mut self) {
        self.seeded = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::draft::{FieldValue, JobPostingDraft};

    struct FakePosting {
        id: i64,
        title: String,
        expiration_date: String,
    }

    impl FakePosting {
        fn new(id: i64, title: &str, expiration_date: &str) -> Self {
            FakePosting {
                id,
                title: title.to_string(),
                expiration_date: expiration_date.to_string(),
            }
        }
    }

    impl EditTarget for FakePosting {
        fn identity(&self) -> TargetIdentity {
            TargetIdentity {
                kind: RecordKind::JobPosting,
                id: self.id,
            }
        }

        fn to_draft(&self) -> Result<DraftRecord, DraftError> {
            Ok(DraftRecord::JobPosting(JobPostingDraft {
                company_name: "Bygg AB".to_string(),
                job_post_title: self.title.clone(),
                job_description: "Bygga hus".to_string(),
                location: "Göteborg".to_string(),
                employment_type: "Deltid".to_string(),
                expiration_date: parse_wire_date("expiration_date", &self.expiration_date)?,
            }))
        }
    }

    #[test]
    fn test_first_call_seeds_from_target() {
        let mut store = DraftStore::new(RecordKind::JobPosting);
        let mut reconciler = Reconciler::new();
        let target = FakePosting::new(1, "Snickare", "2025-03-01");

        let outcome = reconciler.reconcile(&mut store, Some(&target)).unwrap();
        assert_eq!(outcome, Reconciliation::SeededFromTarget);
        assert_eq!(
            store.draft().field("job_post_title"),
            Some(FieldValue::text("Snickare"))
        );
    }

    #[test]
    fn test_unchanged_identity_preserves_in_progress_edits() {
        let mut store = DraftStore::new(RecordKind::JobPosting);
        let mut reconciler = Reconciler::new();
        let target = FakePosting::new(1, "Snickare", "2025-03-01");

        reconciler.reconcile(&mut store, Some(&target)).unwrap();
        store.update_field("job_post_title", FieldValue::text("Elektriker"));

        let outcome = reconciler.reconcile(&mut store, Some(&target)).unwrap();
        assert_eq!(outcome, Reconciliation::Unchanged);
        assert_eq!(
            store.draft().field("job_post_title"),
            Some(FieldValue::text("Elektriker"))
        );
    }

    #[test]
    fn test_identity_change_reseeds() {
        let mut store = DraftStore::new(RecordKind::JobPosting);
        let mut reconciler = Reconciler::new();

        let first = FakePosting::new(1, "Snickare", "2025-03-01");
        reconciler.reconcile(&mut store, Some(&first)).unwrap();
        store.update_field("job_post_title", FieldValue::text("Halvklar ändring"));

        let second = FakePosting::new(2, "Målare", "2025-04-01");
        let outcome = reconciler.reconcile(&mut store, Some(&second)).unwrap();
        assert_eq!(outcome, Reconciliation::SeededFromTarget);
        assert_eq!(
            store.draft().field("job_post_title"),
            Some(FieldValue::text("Målare"))
        );
    }

    #[test]
    fn test_target_removed_seeds_blank() {
        let mut store = DraftStore::new(RecordKind::JobPosting);
        let mut reconciler = Reconciler::new();
        let target = FakePosting::new(1, "Snickare", "2025-03-01");

        reconciler.reconcile(&mut store, Some(&target)).unwrap();
        let outcome = reconciler
            .reconcile(&mut store, None::<&FakePosting>)
            .unwrap();
        assert_eq!(outcome, Reconciliation::SeededBlank);
        assert_eq!(
            store.draft().field("job_post_title"),
            Some(FieldValue::text(""))
        );
    }

    #[test]
    fn test_create_mode_is_idempotent_too() {
        let mut store = DraftStore::new(RecordKind::JobPosting);
        let mut reconciler = Reconciler::new();

        let first = reconciler
            .reconcile(&mut store, None::<&FakePosting>)
            .unwrap();
        assert_eq!(first, Reconciliation::SeededBlank);

        store.update_field("company_name", FieldValue::text("Bygg AB"));
        let second = reconciler
            .reconcile(&mut store, None::<&FakePosting>)
            .unwrap();
        assert_eq!(second, Reconciliation::Unchanged);
        assert_eq!(
            store.draft().field("company_name"),
            Some(FieldValue::text("Bygg AB"))
        );
    }

    #[test]
    fn test_invalid_date_leaves_state_intact_and_is_retryable() {
        let mut store = DraftStore::new(RecordKind::JobPosting);
        let mut reconciler = Reconciler::new();

        let good = FakePosting::new(1, "Snickare", "2025-03-01");
        reconciler.reconcile(&mut store, Some(&good)).unwrap();

        let bad = FakePosting::new(2, "Målare", "01/04/2025");
        let err = reconciler.reconcile(&mut store, Some(&bad)).unwrap_err();
        match err {
            DraftError::InvalidDate { field, value } => {
                assert_eq!(field, "expiration_date");
                assert_eq!(value, "01/04/2025");
            }
        }
        // Draft still holds the previous seed.
        assert_eq!(
            store.draft().field("job_post_title"),
            Some(FieldValue::text("Snickare"))
        );

        // A fixed record with the same identity seeds normally.
        let fixed = FakePosting::new(2, "Målare", "2025-04-01");
        let outcome = reconciler.reconcile(&mut store, Some(&fixed)).unwrap();
        assert_eq!(outcome, Reconciliation::SeededFromTarget);
    }

    #[test]
    fn test_forget_forces_reseed() {
        let mut store = DraftStore::new(RecordKind::JobPosting);
        let mut reconciler = Reconciler::new();
        let target = FakePosting::new(1, "Snickare", "2025-03-01");

        reconciler.reconcile(&mut store, Some(&target)).unwrap();
        store.update_field("job_post_title", FieldValue::text("Elektriker"));

        reconciler.forget();
        let outcome = reconciler.reconcile(&mut store, Some(&target)).unwrap();
        assert_eq!(outcome, Reconciliation::SeededFromTarget);
        assert_eq!(
            store.draft().field("job_post_title"),
            Some(FieldValue::text("Snickare"))
        );
    }

    #[test]
    fn test_parse_wire_date() {
        let date = parse_wire_date("expiration_date", "2025-03-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert!(parse_wire_date("expiration_date", "not-a-date").is_err());
    }
}
