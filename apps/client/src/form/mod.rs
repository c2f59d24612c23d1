// Form engine: draft state, declarative validation, edit/create
// reconciliation, and the submit/cancel lifecycle.
// Framework-free: the host UI renders fields and wires callbacks.

pub mod controller;
pub mod draft;
pub mod reconcile;
pub mod rules;
pub mod validate;

// Re-export the surface hosts touch when wiring a form.
pub use controller::{FormController, FormPhase, FormSink, SubmitOutcome};
pub use draft::{DraftRecord, DraftStore, FieldValue, RecordKind};
pub use reconcile::{DraftError, EditTarget, Reconciliation, TargetIdentity};
pub use rules::{Rule, RuleSet};
pub use validate::{validate, FieldError, ValidationErrors};
