//! Framework-agnostic core of the job-match front end.
//!
//! Holds everything a host UI needs except the widgets: form drafting with
//! declarative validation and edit/create reconciliation, wire-faithful
//! models for the REST backend, thin HTTP service wrappers, and the
//! session/navigation contracts the page flows drive. The host renders
//! fields, wires callbacks, and owns the event loop; this crate owns the
//! state in between.

pub mod config;
pub mod errors;
pub mod flows;
pub mod form;
pub mod models;
pub mod services;
pub mod session;

pub use config::ClientConfig;
pub use errors::ServiceError;
pub use flows::{Navigator, Route};
pub use form::{
    DraftRecord, EditTarget, FieldValue, FormController, FormPhase, FormSink, RecordKind,
    SubmitOutcome, ValidationErrors,
};
pub use services::ApiClient;
pub use session::{AuthSession, SessionDisposition};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes structured logging. Call once from the host binary;
/// `default_filter` applies when `RUST_LOG` is unset (see
/// [`ClientConfig::rust_log`]).
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
