//! Sign-in and account endpoints.

use reqwest::Method;
use serde::Serialize;

use super::ApiClient;
use crate::errors::ServiceError;
use crate::models::user::{AuthTokens, NewUser, User};

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Exchanges credentials for a JWT pair. Bad credentials come back as
/// [`ServiceError::AuthRejected`].
pub async fn login(
    api: &ApiClient,
    email: &str,
    password: &str,
) -> Result<AuthTokens, ServiceError> {
    api.send_json(Method::POST, None, "/login", &LoginRequest { email, password })
        .await
}

/// The account behind the given access token.
pub async fn current_user(api: &ApiClient, token: &str) -> Result<User, ServiceError> {
    api.get_json(token, "/user").await
}

/// Creates a new account. Unauthenticated, like `login`.
pub async fn register(api: &ApiClient, new_user: &NewUser) -> Result<User, ServiceError> {
    api.send_json(Method::POST, None, "/register", new_user).await
}
