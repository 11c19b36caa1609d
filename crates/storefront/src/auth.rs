//! Simulated sign-in.
//!
//! There is no account backend. Submitting the sign-in form validates the
//! email, shows a "logging in" notification and redirects to the home page
//! after a short delay.

use std::time::Duration;

use pixalara_core::{Email, EmailError};
use thiserror::Error;
use tracing::info;

/// Page the user lands on after signing in.
pub const HOME_PAGE: &str = "index.html";

/// Delay before the redirect fires.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Errors that can occur while signing in.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// What the front end should do after a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRedirect {
    pub email: Email,
    /// Notification text shown while "logging in".
    pub message: String,
    pub target: &'static str,
    pub delay: Duration,
}

/// Validate `email` and produce the redirect.
///
/// # Errors
///
/// Returns [`AuthError::InvalidEmail`] if the address does not parse.
pub fn login(email: &str) -> Result<LoginRedirect, AuthError> {
    let email = Email::parse(email)?;
    info!(domain = email.domain(), "Simulated sign-in");
    Ok(LoginRedirect {
        message: format!("Logging in as {email}..."),
        email,
        target: HOME_PAGE,
        delay: REDIRECT_DELAY,
    })
}

/// Which of the two account forms is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthForm {
    #[default]
    Login,
    Register,
}

impl AuthForm {
    /// Swap to the other form.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_login_success() {
        let redirect = login(" shopper@example.com ").unwrap();
        assert_eq!(redirect.email.as_str(), "shopper@example.com");
        assert_eq!(redirect.message, "Logging in as shopper@example.com...");
        assert_eq!(redirect.target, "index.html");
        assert_eq!(redirect.delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_login_invalid_email() {
        assert_eq!(
            login("shopper"),
            Err(AuthError::InvalidEmail(EmailError::AtSymbol))
        );
    }

    #[test]
    fn test_toggle() {
        let form = AuthForm::default();
        assert_eq!(form, AuthForm::Login);
        assert_eq!(form.toggle(), AuthForm::Register);
        assert_eq!(form.toggle().toggle(), AuthForm::Login);
    }
}
