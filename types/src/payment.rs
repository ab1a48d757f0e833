use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::company::CompanyRef;
use crate::subscription::{Plan, SubscriptionStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 4] = [
        PaymentStatus::Pending,
        PaymentStatus::Completed,
        PaymentStatus::Failed,
        PaymentStatus::Refunded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Completed => "COMPLETED",
            PaymentStatus::Failed => "FAILED",
            PaymentStatus::Refunded => "REFUNDED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Completed => "Completed",
            PaymentStatus::Failed => "Failed",
            PaymentStatus::Refunded => "Refunded",
        }
    }
}

/// Subscription summary embedded in payment records. List rows carry only
/// the status and plan; the detail endpoint adds the period dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSubscription {
    pub id: Uuid,
    pub status: SubscriptionStatus,
    #[serde(default)]
    pub start_date: Option<Timestamp>,
    #[serde(default)]
    pub end_date: Option<Timestamp>,
    #[serde(default)]
    pub trial_end_date: Option<Timestamp>,
    pub plan: Plan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    pub company_id: i64,
    pub subscription_id: Uuid,
    pub amount: f64,
    pub status: PaymentStatus,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub paid_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub company: CompanyRef,
    pub subscription: PaymentSubscription,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_row_decodes_without_period_dates() {
        let payment: Payment = serde_json::from_value(serde_json::json!({
            "id": "0b6f5e3c-6a1d-4e3f-bd3c-9e1f2a3b4c5d",
            "companyId": 42,
            "subscriptionId": "7f2c0a5e-95c1-4f6a-9e60-0f2f6b0c1a2b",
            "amount": 199.0,
            "status": "COMPLETED",
            "reference": "MP-2026-000417",
            "paidAt": "2026-07-01T09:30:00Z",
            "createdAt": "2026-07-01T09:29:12Z",
            "company": {"id": 42, "name": "Acme GmbH"},
            "subscription": {
                "id": "7f2c0a5e-95c1-4f6a-9e60-0f2f6b0c1a2b",
                "status": "ACTIVE",
                "plan": {
                    "id": "f8b7a7a6-4ad1-4a93-86a3-2a1b9f0e3c4d",
                    "name": "PRO",
                    "price": 199.0
                }
            }
        }))
        .unwrap();

        assert_eq!(payment.status, PaymentStatus::Completed);
        assert_eq!(payment.company.name, "Acme GmbH");
        assert!(payment.subscription.start_date.is_none());
        assert!(!payment.company.has_lifetime_access);
    }
}
