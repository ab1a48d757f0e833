//! HTTP client for the HR-platform admin API.
//!
//! Thin wrapper over the backend's `/superadmin-auth` and `/superadmin`
//! namespaces. Token persistence, bearer attachment and session-teardown
//! interception live here so the UI layers above never touch transport
//! concerns directly.

pub mod admin;
pub mod auth;
mod error;
pub mod events;
mod http;
mod query;
pub mod token;

pub use error::ApiError;
pub use query::{CompanyQuery, LifetimeQuery, PaymentQuery, SubscriptionQuery};

/// Base URL of the platform API, baked in at compile time.
pub fn base_url() -> &'static str {
    option_env!("ADMIN_API_URL").unwrap_or("http://localhost:5000/api")
}
