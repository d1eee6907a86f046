//! Login form request lifecycle.
//!
//! `idle -> loading -> {idle, error}`: a successful exchange hands the token
//! to the session and returns the form to idle; a failure keeps the message
//! until the next submission.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use accounts::{ApiError, error::login_failure_message};

pub const SUBMIT_LABEL: &str = "Sign in";
pub const SUBMITTING_LABEL: &str = "Signing in...";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    pub loading: bool,
    pub error: Option<String>,
}

impl LoginState {
    /// Enter `loading`, clearing any earlier error.
    ///
    /// Returns `false` when a submission is already in flight; the caller
    /// must not send another request.
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    pub fn succeed(&mut self) {
        self.loading = false;
        self.error = None;
    }

    pub fn fail(&mut self, err: &ApiError) {
        self.loading = false;
        self.error = Some(login_failure_message(err));
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.loading { SUBMITTING_LABEL } else { SUBMIT_LABEL }
    }
}
