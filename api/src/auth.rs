//! Session endpoints under `/superadmin-auth`.

use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use types::{AdminUser, AuthPayload};

use crate::{ApiError, http, token};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Exchanges credentials for a token. On success the token is persisted
/// under every storage alias and the grace-window clock is stamped before
/// the caller sees the payload, so the first authenticated request cannot
/// race the persisted token.
pub async fn login(email: &str, password: &str) -> Result<AuthPayload, ApiError> {
    let payload = http::post("/superadmin-auth/login")
        .public()
        .json(&LoginRequest { email, password })
        .fetch::<AuthPayload>()
        .await?;

    token::store(payload.token.expose_secret());
    http::note_login();
    tracing::info!(user = %payload.user.email, "logged in");
    Ok(payload)
}

/// Best-effort server logout. Local token state is cleared regardless of
/// whether the backend call succeeds.
pub async fn logout() -> Result<(), ApiError> {
    let result = http::post("/superadmin-auth/logout")
        .public()
        .fetch_message()
        .await;

    token::clear();
    http::forget_login();

    match result {
        Ok(_) => {
            tracing::info!("logged out");
            Ok(())
        }
        Err(err) => {
            tracing::warn!(error = %err, "server logout failed, cleared local session anyway");
            Err(err)
        }
    }
}

#[derive(Deserialize)]
struct CheckData {
    user: AdminUser,
}

/// Verifies the persisted token against the backend.
///
/// Never touches the network when no token is persisted. `Ok(None)` means
/// "not logged in" (no token, or the token belongs to a non-admin role);
/// any error also leaves the client logged out with storage cleared.
pub async fn check_auth() -> Result<Option<AdminUser>, ApiError> {
    if token::read().is_none() {
        return Ok(None);
    }

    match http::get("/superadmin-auth/check")
        .public()
        .fetch::<CheckData>()
        .await
    {
        Ok(data) if data.user.is_super_admin() => Ok(Some(data.user)),
        Ok(data) => {
            tracing::warn!(role = %data.user.role, "token belongs to a non-admin role, discarding");
            token::clear();
            Ok(None)
        }
        Err(err) => {
            token::clear();
            Err(err)
        }
    }
}
