//! Page-level flows composed from the service layer, the auth session,
//! and a navigation callback. The host wires [`Navigator`] to its router
//! and calls these from its event handlers.

use tracing::{info, warn};

use crate::errors::ServiceError;
use crate::services::{auth, employer, ApiClient};
use crate::session::{AuthSession, SessionDisposition};

/// Destinations the app navigates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Home,
    /// An employer's posting detail page.
    Job(i64),
    /// A candidate's application under a posting.
    Application { job_id: i64, application_id: i64 },
    /// Browser-style back.
    Back,
}

/// Navigation callback the host wires to its routing framework.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// Logs in, fetches the account, starts the session, and lands on Home.
/// On any failure the session is left untouched and the caller surfaces
/// the error on the login page.
pub async fn sign_in(
    api: &ApiClient,
    session: &mut AuthSession,
    nav: &mut dyn Navigator,
    email: &str,
    password: &str,
) -> Result<(), ServiceError> {
    let tokens = auth::login(api, email, password).await?;
    let user = auth::current_user(api, &tokens.access).await?;
    session.begin(tokens, user);
    nav.navigate(Route::Home);
    Ok(())
}

/// Ends the session and returns to the login page.
pub fn sign_out(session: &mut AuthSession, nav: &mut dyn Navigator) {
    session.end();
    nav.navigate(Route::Login);
}

/// Deletes a posting and goes Home. On failure the session policy
/// decides: auth failures end the session and land on Login, anything
/// else keeps the session so the page can show the error in place.
pub async fn remove_job_post(
    api: &ApiClient,
    session: &mut AuthSession,
    nav: &mut dyn Navigator,
    job_id: i64,
) -> Result<(), ServiceError> {
    let result = match session.access_token() {
        Ok(token) => employer::delete_job_post(api, token, job_id).await,
        Err(err) => Err(err),
    };
    match result {
        Ok(()) => {
            info!("Job post {job_id} removed");
            nav.navigate(Route::Home);
            Ok(())
        }
        Err(err) => {
            warn!("Removing job post {job_id} failed: {err}");
            if session.handle_failure(&err) == SessionDisposition::Ended {
                nav.navigate(Route::Login);
            }
            Err(err)
        }
    }
}
