//! Mock form submissions
//!
//! Nothing is transmitted anywhere. Login and registration only perform the
//! local checks below; contact and newsletter submissions always succeed.

use serde::Serialize;
use thiserror::Error;

use super::notification::Notification;
use super::session::{SessionUser, save_session};
use super::storage::{KeyValueStore, StorageError};

/// Delay of the simulated generic form submission
pub const SIMULATED_SUBMIT_MS: u32 = 2000;

/// Delay between a successful login/logout and the redirect
pub const REDIRECT_DELAY_MS: u32 = 1000;

/// Redirect target after a mock login
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Redirect target after logout
pub const HOME_PATH: &str = "/";

pub const GENERIC_SUBMIT_SUCCESS: &str = "Form submitted successfully!";
pub const CONTACT_SUCCESS: &str = "Thank you for your message! We'll get back to you soon.";
pub const NEWSLETTER_SUCCESS: &str = "Successfully subscribed to our newsletter!";
pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const REGISTER_SUCCESS: &str = "Registration successful! Please log in.";
pub const LOGOUT_SUCCESS: &str = "Logged out successfully.";

/// Validation failures surfaced to the user as error notifications
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// Login form fields
#[derive(Debug, Clone, Default)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl LoginInput {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Any non-empty email and password are accepted
    pub fn validate(&self) -> Result<SessionUser, FormError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        Ok(SessionUser::mock(self.email.clone()))
    }
}

/// Registration form fields
///
/// Serialized for the diagnostic log only. No account is created.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
}

impl RegisterInput {
    /// Only a password/confirmation mismatch is rejected
    pub fn validate(&self) -> Result<(), FormError> {
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }
}

/// Contact form fields, logged and discarded
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

/// Newsletter subscription, logged and discarded
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct NewsletterSignup {
    pub email: String,
}

/// What the login form does after a submission
#[derive(Debug)]
pub struct LoginOutcome {
    pub notification: Notification,
    /// The signed-in user; `None` when validation failed
    pub user: Option<SessionUser>,
    /// Persisting the session failed; the login still holds for this page
    pub persist_error: Option<StorageError>,
}

impl LoginOutcome {
    /// Whether the page moves on to the dashboard
    pub fn redirects(&self) -> bool {
        self.user.is_some()
    }
}

/// Validate the login form and persist the fabricated session
///
/// Empty fields leave the store untouched. A store that cannot be written
/// does not block the login.
pub fn login_outcome(store: &impl KeyValueStore, input: &LoginInput) -> LoginOutcome {
    match input.validate() {
        Ok(user) => LoginOutcome {
            notification: Notification::success(LOGIN_SUCCESS),
            persist_error: save_session(store, &user).err(),
            user: Some(user),
        },
        Err(err) => LoginOutcome {
            notification: Notification::error(err.to_string()),
            user: None,
            persist_error: None,
        },
    }
}

/// Notification raised by a submission and whether the fields are cleared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub notification: Notification,
    pub reset: bool,
}

/// A mismatched confirmation keeps what was typed; success clears the form
pub fn register_outcome(input: &RegisterInput) -> SubmitOutcome {
    match input.validate() {
        Ok(()) => SubmitOutcome {
            notification: Notification::success(REGISTER_SUCCESS),
            reset: true,
        },
        Err(err) => SubmitOutcome {
            notification: Notification::error(err.to_string()),
            reset: false,
        },
    }
}

/// Render a submission for the console diagnostic channel
pub fn describe<T: Serialize>(label: &str, payload: &T) -> String {
    match serde_json::to_string(payload) {
        Ok(json) => format!("{label}: {json}"),
        Err(_) => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_accepts_any_non_empty_credentials() {
        let user = LoginInput::new("a@b.com", "x").validate().unwrap();
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.id, 1);
    }

    #[test]
    fn test_login_rejects_empty_fields() {
        assert_eq!(
            LoginInput::new("a@b.com", "").validate(),
            Err(FormError::MissingFields)
        );
        assert_eq!(
            LoginInput::new("", "secret").validate(),
            Err(FormError::MissingFields)
        );
    }

    #[test]
    fn test_register_mismatch() {
        let input = RegisterInput {
            password: "p1".into(),
            confirm_password: "p2".into(),
            ..Default::default()
        };
        assert_eq!(input.validate(), Err(FormError::PasswordMismatch));
        assert_eq!(
            FormError::PasswordMismatch.to_string(),
            "Passwords do not match."
        );
    }

    #[test]
    fn test_register_log_omits_passwords() {
        let input = RegisterInput {
            name: "Ann".into(),
            email: "ann@example.com".into(),
            password: "hunter2".into(),
            confirm_password: "hunter2".into(),
        };
        let line = describe("Registration data", &input);
        assert!(line.contains("ann@example.com"));
        assert!(!line.contains("hunter2"));
    }
}
