//! In-memory auth session: the signed-in user and their token pair, plus
//! the policy for which service failures end the session.
//!
//! The handle is passed explicitly into whatever needs it; nothing in this
//! crate reads it from ambient state. Persisting it across restarts is the
//! host's business.

use tracing::{info, warn};

use crate::errors::ServiceError;
use crate::models::user::{AuthTokens, User};

/// Whether the session survived a service failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionDisposition {
    Retained,
    Ended,
}

#[derive(Debug, Default)]
pub struct AuthSession {
    tokens: Option<AuthTokens>,
    user: Option<User>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session from a fresh login.
    pub fn begin(&mut self, tokens: AuthTokens, user: User) {
        info!("Session started for {}", user.email);
        self.tokens = Some(tokens);
        self.user = Some(user);
    }

    /// Ends the session, dropping the tokens and user.
    pub fn end(&mut self) {
        if let Some(user) = self.user.take() {
            info!("Session ended for {}", user.email);
        }
        self.tokens = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.tokens.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The access token for request auth. This is the route-guard
    /// primitive: signed-out callers get `NotAuthenticated`.
    pub fn access_token(&self) -> Result<&str, ServiceError> {
        self.tokens
            .as_ref()
            .map(|tokens| tokens.access.as_str())
            .ok_or(ServiceError::NotAuthenticated)
    }

    /// Applies the failure policy: auth-class failures end the session,
    /// everything else leaves it alone for the caller to surface.
    pub fn handle_failure(&mut self, error: &ServiceError) -> SessionDisposition {
        if error.invalidates_session() {
            warn!("Ending session: {error}");
            self.end();
            SessionDisposition::Ended
        } else {
            SessionDisposition::Retained
        }
    }
}
