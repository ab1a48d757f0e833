//! Resource endpoints under `/superadmin`.
//!
//! Mutations fall in two groups: those returning the full updated record
//! (subscription update, extend-trial, activate, revoke) and those returning
//! only a message (lifetime grant/revoke). Stores patch their cache by id in
//! the first case and refetch in the second.

use serde::Serialize;
use types::Paginated;
use types::analytics::{Distribution, RevenuePoint, SubscriptionStats, TrendPoint};
use types::company::{Company, CompanyDetail, CompanyStats, CompanyUpdate, LifetimeCompany};
use types::payment::Payment;
use types::subscription::{Subscription, SubscriptionUpdate};
use uuid::Uuid;

use crate::http;
use crate::query::{CompanyQuery, LifetimeQuery, PaymentQuery, SubscriptionQuery};
use crate::ApiError;

pub async fn list_companies(query: &CompanyQuery) -> Result<Paginated<Company>, ApiError> {
    http::get("/superadmin/companies").query(query).fetch_page().await
}

pub async fn company_stats() -> Result<CompanyStats, ApiError> {
    http::get("/superadmin/company-stats").fetch().await
}

pub async fn company_detail(id: i64) -> Result<CompanyDetail, ApiError> {
    http::get(&format!("/superadmin/company/{id}")).fetch().await
}

pub async fn update_company(id: i64, update: &CompanyUpdate) -> Result<CompanyDetail, ApiError> {
    http::patch(&format!("/superadmin/company/{id}"))
        .json(update)
        .fetch()
        .await
}

/// Grants the permanent-access override. Returns only the server message;
/// callers refetch the affected collection.
pub async fn grant_lifetime_access(company_id: i64) -> Result<Option<String>, ApiError> {
    http::post(&format!(
        "/superadmin/company/{company_id}/lifetime-access/grant"
    ))
    .fetch_message()
    .await
}

pub async fn revoke_lifetime_access(company_id: i64) -> Result<Option<String>, ApiError> {
    http::post(&format!(
        "/superadmin/company/{company_id}/lifetime-access/revoke"
    ))
    .fetch_message()
    .await
}

pub async fn list_lifetime_companies(
    query: &LifetimeQuery,
) -> Result<Paginated<LifetimeCompany>, ApiError> {
    http::get("/superadmin/companies/lifetime")
        .query(query)
        .fetch_page()
        .await
}

pub async fn list_subscriptions(
    query: &SubscriptionQuery,
) -> Result<Paginated<Subscription>, ApiError> {
    http::get("/superadmin/subscriptions")
        .query(query)
        .fetch_page()
        .await
}

pub async fn update_subscription(
    id: Uuid,
    update: &SubscriptionUpdate,
) -> Result<Subscription, ApiError> {
    http::patch(&format!("/superadmin/subscription/{id}"))
        .json(update)
        .fetch()
        .await
}

#[derive(Serialize)]
struct ExtendTrialRequest {
    days: u32,
}

pub async fn extend_trial(id: Uuid, days: u32) -> Result<Subscription, ApiError> {
    http::post(&format!("/superadmin/subscription/{id}/extend-trial"))
        .json(&ExtendTrialRequest { days })
        .fetch()
        .await
}

pub async fn activate_subscription(id: Uuid) -> Result<Subscription, ApiError> {
    http::post(&format!("/superadmin/subscription/{id}/activate"))
        .fetch()
        .await
}

/// Revokes access: the backend cancels the subscription and returns it.
pub async fn revoke_subscription(id: Uuid) -> Result<Subscription, ApiError> {
    http::post(&format!("/superadmin/subscription/{id}/revoke"))
        .fetch()
        .await
}

pub async fn list_payments(query: &PaymentQuery) -> Result<Paginated<Payment>, ApiError> {
    http::get("/superadmin/payments").query(query).fetch_page().await
}

pub async fn payment_detail(id: Uuid) -> Result<Payment, ApiError> {
    http::get(&format!("/superadmin/payment/{id}")).fetch().await
}

pub async fn subscription_trends(months: u32) -> Result<Vec<TrendPoint>, ApiError> {
    http::get("/superadmin/subscriptions/trends")
        .query(&[("months", months)])
        .fetch()
        .await
}

pub async fn subscription_distribution() -> Result<Distribution, ApiError> {
    http::get("/superadmin/subscriptions/distribution").fetch().await
}

pub async fn subscription_stats() -> Result<SubscriptionStats, ApiError> {
    http::get("/superadmin/subscriptions/stats").fetch().await
}

pub async fn subscription_revenue(months: u32) -> Result<Vec<RevenuePoint>, ApiError> {
    http::get("/superadmin/subscriptions/revenue")
        .query(&[("months", months)])
        .fetch()
        .await
}
