//! Form controller: ties the draft store, rule set, error map, and
//! reconciler together and drives the submit/cancel lifecycle.

use tracing::debug;

use super::draft::{DraftRecord, DraftStore, FieldValue, RecordKind};
use super::reconcile::{DraftError, EditTarget, Reconciler, Reconciliation};
use super::rules::RuleSet;
use super::validate::{validate, ValidationErrors};

/// Where a form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitted,
    Closed,
}

/// The callbacks a host page wires into a form: persist the submitted
/// draft, and dismiss the form surface.
pub trait FormSink {
    fn save(&mut self, record: &DraftRecord);
    fn close(&mut self);
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Draft passed validation and went to the sink; the form reset.
    Accepted,
    /// Validation failed (errors recorded), or the form was not editing.
    Rejected,
}

/// One form instance. Create-mode until [`FormController::reconcile`] sees
/// an edit target; the sink is injected per call rather than stored.
#[derive(Debug)]
pub struct FormController {
    store: DraftStore,
    rules: RuleSet,
    errors: ValidationErrors,
    reconciler: Reconciler,
    phase: FormPhase,
}

impl FormController {
    /// Controller with the canonical rule set for the kind.
    pub fn new(kind: RecordKind) -> Self {
        Self::with_rules(kind, RuleSet::for_kind(kind))
    }

    pub fn with_rules(kind: RecordKind, rules: RuleSet) -> Self {
        FormController {
            store: DraftStore::new(kind),
            rules,
            errors: ValidationErrors::default(),
            reconciler: Reconciler::new(),
            phase: FormPhase::Editing,
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.store.kind()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn draft(&self) -> &DraftRecord {
        self.store.draft()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Seeds or re-seeds the draft from the current edit target. An actual
    /// reseed starts a fresh lifecycle: stale errors are dropped and the
    /// form is editable again. After a submit or cancel the identity memory
    /// is cleared first, so reopening with the same target still reseeds.
    pub fn reconcile<T: EditTarget>(
        &mut self,
        target: Option<&T>,
    ) -> Result<Reconciliation, DraftError> {
        if self.phase != FormPhase::Editing {
            self.reconciler.forget();
        }
        let outcome = self.reconciler.reconcile(&mut self.store, target)?;
        if outcome != Reconciliation::Unchanged {
            self.errors = ValidationErrors::default();
            self.phase = FormPhase::Editing;
        }
        Ok(outcome)
    }

    /// Applies one field edit and clears that field's error so stale
    /// messages never linger over fresh input. No-op outside the editing
    /// phase; unknown names and type mismatches fall through unchanged.
    pub fn update_field(&mut self, name: &str, value: FieldValue) -> bool {
        if self.phase != FormPhase::Editing {
            return false;
        }
        let applied = self.store.update_field(name, value);
        if applied {
            self.errors.clear(name);
        }
        applied
    }

    /// Validate-then-commit. On failure the errors are recorded and the
    /// sink is never touched. On success the sink sees the draft, then the
    /// close, and the form resets to its blank template.
    pub fn submit(&mut self, sink: &mut dyn FormSink) -> SubmitOutcome {
        if self.phase != FormPhase::Editing {
            return SubmitOutcome::Rejected;
        }
        let errors = validate(self.store.draft(), &self.rules);
        if !errors.is_empty() {
            debug!("Submit rejected: {} validation error(s)", errors.len());
            self.errors = errors;
            return SubmitOutcome::Rejected;
        }
        sink.save(self.store.draft());
        sink.close();
        self.store.reset();
        self.errors = ValidationErrors::default();
        self.phase = FormPhase::Submitted;
        let kind = self.kind().as_str();
        debug!("Draft submitted and form reset ({kind})");
        SubmitOutcome::Accepted
    }

    /// Dismisses the form without saving: close first, then discard edits.
    /// No-op outside the editing phase.
    pub fn cancel(&mut self, sink: &mut dyn FormSink) {
        if self.phase != FormPhase::Editing {
            return;
        }
        sink.close();
        self.store.reset();
        self.errors = ValidationErrors::default();
        self.phase = FormPhase::Closed;
    }
}
