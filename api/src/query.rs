//! Filter objects for the paginated list endpoints.
//!
//! Serialized straight into query parameters; unset keys are omitted so the
//! backend applies its defaults.

use jiff::civil::Date;
use serde::Serialize;
use types::company::CompanyStatus;
use types::payment::PaymentStatus;
use types::subscription::SubscriptionStatus;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_status: Option<CompanyStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<Date>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifetimeQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<Date>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_filters_produce_no_parameters() {
        assert_eq!(
            serde_urlencoded::to_string(CompanyQuery::default()).unwrap(),
            ""
        );
    }

    #[test]
    fn company_filters_use_the_backend_parameter_names() {
        let query = CompanyQuery {
            page: Some(2),
            page_size: Some(10),
            search: Some("acme".into()),
            date_from: Some("2026-01-01".parse().unwrap()),
            date_to: None,
            subscription_status: Some(CompanyStatus::Lifetime),
        };
        assert_eq!(
            serde_urlencoded::to_string(query).unwrap(),
            "page=2&pageSize=10&search=acme&dateFrom=2026-01-01&subscriptionStatus=LIFETIME"
        );
    }

    #[test]
    fn subscription_filters_serialize_status_and_company() {
        let query = SubscriptionQuery {
            page: Some(1),
            status: Some(SubscriptionStatus::Trial),
            company_id: Some(42),
            ..Default::default()
        };
        assert_eq!(
            serde_urlencoded::to_string(query).unwrap(),
            "page=1&status=TRIAL&companyId=42"
        );
    }
}
