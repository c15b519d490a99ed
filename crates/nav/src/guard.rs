// Authentication guard
//
// Decides each navigation attempt from the cached session alone. A cached
// record that fails to deserialize is deleted by the session layer and the
// attempt proceeds as unauthenticated; no error surfaces to the caller.

use docextract_session::{current_user, SessionStore};

use crate::routes::{Route, LOGIN_PATH};

/// Outcome of a navigation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDecision {
    /// Let the navigation proceed unchanged
    Proceed,
    /// Abort and send the user to the login view
    RedirectToLogin,
    /// Abort and send the user to the default view
    RedirectToHome,
}

/// Evaluate the guard for a navigation targeting `target`.
///
/// Authenticated means: the store holds a user record that deserializes and
/// carries a usable user identifier. Guarded target without authentication
/// redirects to login; the login view with authentication redirects home;
/// everything else proceeds.
pub fn check(target: &Route, store: &dyn SessionStore) -> NavDecision {
    let authenticated = current_user(store).is_some();

    if target.requires_auth && !authenticated {
        NavDecision::RedirectToLogin
    } else if target.path == LOGIN_PATH && authenticated {
        NavDecision::RedirectToHome
    } else {
        NavDecision::Proceed
    }
}
