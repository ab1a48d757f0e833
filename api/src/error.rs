use thiserror::Error;

/// Failures surfaced by the API client.
///
/// `InvalidCredentials` and `UnverifiedAccount` are produced from 401/403
/// answers of the auth endpoints themselves; a 401/403 anywhere else means
/// the session is gone and maps to `Unauthorized` (after the transport layer
/// has torn local state down).
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Account email has not been verified")]
    UnverifiedAccount,
    #[error("Session is no longer valid")]
    Unauthorized,
    #[error("{0}")]
    Server(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message suitable for a user-facing toast. Server-provided messages
    /// are surfaced verbatim; transport details are not.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Network error. Please try again.".to_string(),
            ApiError::Decode(_) => "Unexpected server response.".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_messages_surface_verbatim() {
        let err = ApiError::Server("Plan does not exist".into());
        assert_eq!(err.user_message(), "Plan does not exist");
    }

    #[test]
    fn transport_details_stay_out_of_toasts() {
        let err = ApiError::Network("fetch: dns failure at 10.0.0.1".into());
        assert_eq!(err.user_message(), "Network error. Please try again.");
        assert!(err.to_string().contains("dns failure"));
    }
}
