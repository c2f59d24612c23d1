use serde::{Deserialize, Serialize};

/// Account record as served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub mobile_number: String,
    /// Wire name `is_ag` ("arbetsgivare"): marks employer accounts.
    #[serde(rename = "is_ag")]
    pub is_employer: bool,
}

/// JWT pair returned by a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access: String,
    pub refresh: String,
}

/// Registration payload for a new account.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub mobile_number: String,
    #[serde(rename = "is_ag")]
    pub is_employer: bool,
}
