//! Authenticated-session state.
//!
//! One store for the whole app, provided at the root. Views read the
//! signals and dispatch the actions; nothing else mutates them. The token
//! itself is persisted by the `api` layer - the copy kept here exists only
//! so views can tell "logged in" from "token present but unverified": a
//! persisted token is not trusted until `check_auth` has confirmed it.

use dioxus::prelude::*;
use secrecy::SecretString;
use types::AdminUser;

use crate::toast::Toasts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Verifying a persisted token. Initial state on every full mount.
    Checking,
    Unauthenticated,
    Authenticated,
}

#[derive(Clone, Copy)]
pub struct SessionStore {
    pub user: Signal<Option<AdminUser>>,
    pub status: Signal<SessionStatus>,
    pub logging_in: Signal<bool>,
    pub logging_out: Signal<bool>,
    token: Signal<Option<SecretString>>,
    toasts: Toasts,
}

pub fn provide(toasts: Toasts) -> SessionStore {
    use_context_provider(|| SessionStore {
        user: Signal::new(None),
        status: Signal::new(SessionStatus::Checking),
        logging_in: Signal::new(false),
        logging_out: Signal::new(false),
        token: Signal::new(None),
        toasts,
    })
}

pub fn use_session() -> SessionStore {
    use_context()
}

impl SessionStore {
    pub fn is_authenticated(&self) -> bool {
        (self.status)() == SessionStatus::Authenticated
    }

    /// Submits credentials. Returns whether the session is now live, so the
    /// login view can decide to navigate; failures are reported as toasts.
    pub async fn login(mut self, email: String, password: String) -> bool {
        if *self.logging_in.peek() {
            return false;
        }
        self.logging_in.set(true);
        let result = api::auth::login(&email, &password).await;
        self.logging_in.set(false);

        match result {
            Ok(payload) if payload.user.is_super_admin() => {
                self.user.set(Some(payload.user));
                self.token.set(Some(payload.token));
                self.status.set(SessionStatus::Authenticated);
                self.toasts.success("Login successful");
                true
            }
            Ok(payload) => {
                tracing::warn!(role = %payload.user.role, "login with non-admin role rejected");
                api::token::clear();
                self.clear();
                self.toasts
                    .error("This account does not have administrator access");
                false
            }
            Err(err) => {
                self.clear();
                self.toasts.error(err.user_message());
                false
            }
        }
    }

    /// Ends the session. The server call is best-effort; local state and
    /// every persisted token alias are gone either way.
    pub async fn logout(mut self) -> bool {
        if *self.logging_out.peek() {
            return false;
        }
        self.logging_out.set(true);
        let result = api::auth::logout().await;
        self.logging_out.set(false);
        self.clear();
        self.toasts.success("Logged out");
        result.is_ok()
    }

    /// Verifies any persisted token and settles the status either way.
    ///
    /// Safe to call repeatedly and concurrently: the latest resolution wins,
    /// and both outcomes converge on the same end state for a given token.
    pub async fn check_auth(mut self) {
        self.status.set(SessionStatus::Checking);
        match api::auth::check_auth().await {
            Ok(Some(user)) => {
                self.user.set(Some(user));
                self.status.set(SessionStatus::Authenticated);
            }
            Ok(None) => self.clear(),
            Err(err) => {
                tracing::warn!(error = %err, "session check failed");
                self.clear();
            }
        }
    }

    /// Drops the in-memory session. Also the `auth-clear` handler, which is
    /// why it does not touch persisted storage: the transport layer already
    /// has by the time the event fires.
    pub fn clear(&mut self) {
        self.user.set(None);
        self.token.set(None);
        self.status.set(SessionStatus::Unauthenticated);
    }
}
