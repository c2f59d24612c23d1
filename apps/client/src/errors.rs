use thiserror::Error;

/// Failure taxonomy for calls against the job-match backend.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Not signed in")]
    NotAuthenticated,

    #[error("Authentication rejected (status {status}): {message}")]
    AuthRejected { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ServiceError {
    /// True when the stored credentials are no longer usable: the backend
    /// answered 401/403, or there were no credentials to begin with.
    /// Server faults and network failures do not invalidate a session.
    pub fn invalidates_session(&self) -> bool {
        matches!(
            self,
            ServiceError::NotAuthenticated | ServiceError::AuthRejected { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_rejection_invalidates_session() {
        let err = ServiceError::AuthRejected {
            status: 401,
            message: "You are not logged in".to_string(),
        };
        assert!(err.invalidates_session());
        assert!(ServiceError::NotAuthenticated.invalidates_session());
    }

    #[test]
    fn test_server_faults_keep_session() {
        let err = ServiceError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(!err.invalidates_session());
        assert!(!ServiceError::NotFound("gone".to_string()).invalidates_session());
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_session() {
        // Port 1 is never listening; the connection is refused.
        let reqwest_err = reqwest::Client::new()
            .get("http://127.0.0.1:1/")
            .send()
            .await
            .unwrap_err();
        assert!(!ServiceError::from(reqwest_err).invalidates_session());
    }

    #[test]
    fn test_display_carries_status_and_message() {
        let err = ServiceError::Api {
            status: 500,
            message: "database exploded".to_string(),
        };
        assert_eq!(err.to_string(), "API error (status 500): database exploded");
    }
}
