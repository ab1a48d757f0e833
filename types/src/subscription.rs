use jiff::Timestamp;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::company::CompanyRef;

/// Lifecycle states a subscription moves through. Transitions happen only on
/// the backend; the client requests them and reconciles with the returned
/// record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubscriptionStatus {
    Trial,
    Pending,
    Active,
    Expired,
    Cancelled,
}

impl SubscriptionStatus {
    pub const ALL: [SubscriptionStatus; 5] = [
        SubscriptionStatus::Trial,
        SubscriptionStatus::Pending,
        SubscriptionStatus::Active,
        SubscriptionStatus::Expired,
        SubscriptionStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Trial => "TRIAL",
            SubscriptionStatus::Pending => "PENDING",
            SubscriptionStatus::Active => "ACTIVE",
            SubscriptionStatus::Expired => "EXPIRED",
            SubscriptionStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubscriptionStatus::Trial => "Trial",
            SubscriptionStatus::Pending => "Pending",
            SubscriptionStatus::Active => "Active",
            SubscriptionStatus::Expired => "Expired",
            SubscriptionStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub max_employees: Option<u32>,
    #[serde(default)]
    pub features: Vec<String>,
}

/// A subscription record as returned by the list endpoint and embedded in
/// company payloads. `company` is only present on the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: Uuid,
    pub company_id: i64,
    pub status: SubscriptionStatus,
    #[serde(default)]
    pub start_date: Option<Timestamp>,
    #[serde(default)]
    pub end_date: Option<Timestamp>,
    #[serde(default)]
    pub trial_end_date: Option<Timestamp>,
    pub has_lifetime_access: bool,
    pub created_at: Timestamp,
    pub plan: Plan,
    #[serde(default)]
    pub company: Option<CompanyRef>,
}

/// Fields an administrator may change through the edit dialog. Unset fields
/// are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_end_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_wire_names() {
        for status in SubscriptionStatus::ALL {
            assert_eq!(SubscriptionStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(SubscriptionStatus::parse("LIFETIME"), None);
    }

    #[test]
    fn update_serializes_only_set_fields() {
        let update = SubscriptionUpdate {
            status: Some(SubscriptionStatus::Active),
            end_date: Some("2026-12-31".parse().unwrap()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "ACTIVE", "endDate": "2026-12-31"})
        );
    }

    #[test]
    fn list_record_decodes_without_company() {
        let sub: Subscription = serde_json::from_value(serde_json::json!({
            "id": "7f2c0a5e-95c1-4f6a-9e60-0f2f6b0c1a2b",
            "companyId": 42,
            "status": "TRIAL",
            "trialEndDate": "2026-09-01T00:00:00Z",
            "hasLifetimeAccess": false,
            "createdAt": "2026-08-01T12:00:00Z",
            "plan": {
                "id": "f8b7a7a6-4ad1-4a93-86a3-2a1b9f0e3c4d",
                "name": "BASIC",
                "price": 49.0
            }
        }))
        .unwrap();

        assert_eq!(sub.status, SubscriptionStatus::Trial);
        assert!(sub.company.is_none());
        assert!(sub.start_date.is_none());
        assert_eq!(sub.plan.name, "BASIC");
    }
}
