//! Request plumbing shared by every endpoint.
//!
//! Each request reads the bearer token fresh from persisted storage rather
//! than from in-memory session state, so storage updates made outside the
//! session store are picked up immediately. A 401/403 on a guarded endpoint
//! tears the session down (clears every token alias, broadcasts
//! `auth-clear`) unless it arrives within a short post-login grace window:
//! token propagation on the backend is not instantaneous, and a request
//! racing a fresh login must not log the user straight back out.

use std::cell::Cell;

use serde::Serialize;
use serde::de::DeserializeOwned;
use types::{ApiEnvelope, Paginated};

use crate::{ApiError, base_url, events, token};

/// How long after a login 401/403 responses are tolerated, in milliseconds.
const LOGIN_GRACE_MS: f64 = 2_000.0;

thread_local! {
    static LAST_LOGIN_MS: Cell<Option<f64>> = const { Cell::new(None) };
}

/// Stamps the grace-window clock. Called by `auth::login` on success.
pub(crate) fn note_login() {
    LAST_LOGIN_MS.with(|cell| cell.set(Some(js_sys::Date::now())));
}

pub(crate) fn forget_login() {
    LAST_LOGIN_MS.with(|cell| cell.set(None));
}

fn within_grace(now_ms: f64, last_login_ms: Option<f64>) -> bool {
    matches!(last_login_ms, Some(at) if now_ms - at <= LOGIN_GRACE_MS)
}

fn endpoint(path: &str) -> String {
    format!("{}{}", base_url(), path)
}

pub(crate) fn get(path: &str) -> Request {
    Request::new(reqwest::Client::new().get(endpoint(path)), path)
}

pub(crate) fn post(path: &str) -> Request {
    Request::new(reqwest::Client::new().post(endpoint(path)), path)
}

pub(crate) fn patch(path: &str) -> Request {
    Request::new(reqwest::Client::new().patch(endpoint(path)), path)
}

pub(crate) struct Request {
    builder: reqwest::RequestBuilder,
    path: String,
    guarded: bool,
}

impl Request {
    fn new(builder: reqwest::RequestBuilder, path: &str) -> Self {
        Self {
            builder,
            path: path.to_string(),
            guarded: true,
        }
    }

    /// Exempts the endpoint from 401/403 session teardown. The auth
    /// endpoints answer 401 as part of their normal contract.
    pub fn public(mut self) -> Self {
        self.guarded = false;
        self
    }

    pub fn query<T: Serialize + ?Sized>(mut self, query: &T) -> Self {
        self.builder = self.builder.query(query);
        self
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> Self {
        self.builder = self.builder.json(body);
        self
    }

    async fn send(self) -> Result<reqwest::Response, ApiError> {
        let mut builder = self.builder;
        if let Some(token) = token::read() {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let status = response.status().as_u16();
        if self.guarded && (status == 401 || status == 403) {
            let last_login = LAST_LOGIN_MS.with(|cell| cell.get());
            if within_grace(js_sys::Date::now(), last_login) {
                tracing::warn!(
                    path = %self.path,
                    status,
                    "auth failure within login grace window, keeping session"
                );
            } else {
                tracing::warn!(path = %self.path, status, "auth failure, tearing session down");
                token::clear();
                forget_login();
                events::emit_auth_cleared();
            }
            return Err(ApiError::Unauthorized);
        }

        Ok(response)
    }

    async fn envelope<T: DeserializeOwned>(self) -> Result<ApiEnvelope<T>, ApiError> {
        let response = self.send().await?;
        let status = response.status().as_u16();
        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        if !envelope.success {
            return Err(rejection(status, envelope.message));
        }
        Ok(envelope)
    }

    /// Sends the request and unwraps `data` from a successful envelope.
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        self.envelope::<T>()
            .await?
            .data
            .ok_or_else(|| ApiError::Decode("missing data in response".into()))
    }

    /// Sends the request and unwraps one page of a collection.
    pub async fn fetch_page<T: DeserializeOwned>(self) -> Result<Paginated<T>, ApiError> {
        let envelope = self.envelope::<Vec<T>>().await?;
        let items = envelope
            .data
            .ok_or_else(|| ApiError::Decode("missing data in response".into()))?;
        let pagination = envelope
            .pagination
            .ok_or_else(|| ApiError::Decode("missing pagination in response".into()))?;
        Ok(Paginated { items, pagination })
    }

    /// Sends the request for its side effect and returns the server message.
    pub async fn fetch_message(self) -> Result<Option<String>, ApiError> {
        Ok(self.envelope::<serde_json::Value>().await?.message)
    }
}

/// Maps a `success: false` envelope to an error. 401/403 only reach this
/// point on public (auth) endpoints, where they mean rejected credentials
/// rather than an expired session.
fn rejection(status: u16, message: Option<String>) -> ApiError {
    match (status, message) {
        (401, _) => ApiError::InvalidCredentials,
        (403, _) => ApiError::UnverifiedAccount,
        (_, Some(message)) => ApiError::Server(message),
        (status, None) => ApiError::Server(format!("Request failed with status {status}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grace_window_covers_two_seconds_inclusive() {
        assert!(within_grace(1_500.0, Some(0.0)));
        assert!(within_grace(2_000.0, Some(0.0)));
        assert!(!within_grace(2_001.0, Some(0.0)));
    }

    #[test]
    fn no_recorded_login_means_no_grace() {
        assert!(!within_grace(100.0, None));
    }

    #[test]
    fn auth_endpoint_rejections_map_to_credential_errors() {
        assert!(matches!(
            rejection(401, Some("Invalid credentials".into())),
            ApiError::InvalidCredentials
        ));
        assert!(matches!(
            rejection(403, None),
            ApiError::UnverifiedAccount
        ));
    }

    #[test]
    fn other_rejections_carry_the_server_message() {
        match rejection(400, Some("Trial already extended".into())) {
            ApiError::Server(message) => assert_eq!(message, "Trial already extended"),
            other => panic!("unexpected error: {other:?}"),
        }
        match rejection(500, None) {
            ApiError::Server(message) => {
                assert_eq!(message, "Request failed with status 500")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
