//! Auth context for the mock session
//!
//! This module provides a reactive authentication context that:
//! - Restores a stored session from localStorage after hydration
//! - Performs the mock login and persists the fabricated user
//! - Clears the session on logout
//!
//! No server is involved and stored records are trusted as-is.

use leptos::prelude::*;

use crate::core::forms::{LoginOutcome, login_outcome};
use crate::core::session::clear_session;
use crate::core::{LoginInput, SessionUser};
use crate::ui::browser::BrowserStore;

/// Auth context providing the current user and actions
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current user, `None` while logged out
    pub user: RwSignal<Option<SessionUser>>,
}

impl AuthContext {
    /// Check if user is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.user.with(Option::is_some)
    }

    /// Display name of the current user
    pub fn user_name(&self) -> Option<String> {
        self.user.with(|user| user.as_ref().map(|u| u.name.clone()))
    }

    /// Submit the login form, signing in on success
    ///
    /// A session that cannot be persisted still signs in for this page.
    pub fn login(&self, input: &LoginInput) -> LoginOutcome {
        let outcome = login_outcome(&BrowserStore::local(), input);
        if let Some(err) = &outcome.persist_error {
            leptos::logging::warn!("session not persisted: {err}");
        }
        if let Some(user) = &outcome.user {
            self.user.set(Some(user.clone()));
        }
        outcome
    }

    /// Forget the session in memory and in storage
    pub fn logout(&self) {
        self.user.set(None);
        if let Err(err) = clear_session(&BrowserStore::local()) {
            leptos::logging::warn!("could not clear stored session: {err}");
        }
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    // Start logged out on both server and client to avoid hydration mismatch
    let ctx = AuthContext {
        user: RwSignal::new(None),
    };

    #[cfg(feature = "hydrate")]
    {
        use crate::core::session::load_session;

        Effect::new(move |_| {
            match load_session(&BrowserStore::local()) {
                Ok(Some(user)) => ctx.user.set(Some(user)),
                Ok(None) => {}
                Err(err) => leptos::logging::warn!("ignoring stored session: {err}"),
            }
        });
    }

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}
