use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::subscription::Subscription;

/// Effective access status shown for a company: its subscription status, or
/// `LIFETIME` when a lifetime override is in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CompanyStatus {
    Trial,
    Pending,
    Active,
    Expired,
    Cancelled,
    Lifetime,
}

impl CompanyStatus {
    pub const ALL: [CompanyStatus; 6] = [
        CompanyStatus::Trial,
        CompanyStatus::Pending,
        CompanyStatus::Active,
        CompanyStatus::Expired,
        CompanyStatus::Cancelled,
        CompanyStatus::Lifetime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyStatus::Trial => "TRIAL",
            CompanyStatus::Pending => "PENDING",
            CompanyStatus::Active => "ACTIVE",
            CompanyStatus::Expired => "EXPIRED",
            CompanyStatus::Cancelled => "CANCELLED",
            CompanyStatus::Lifetime => "LIFETIME",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompanyStatus::Trial => "Trial",
            CompanyStatus::Pending => "Pending",
            CompanyStatus::Active => "Active",
            CompanyStatus::Expired => "Expired",
            CompanyStatus::Cancelled => "Cancelled",
            CompanyStatus::Lifetime => "Lifetime",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

/// Company row in the paginated companies list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub tin: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub status: CompanyStatus,
    #[serde(default)]
    pub employee_count: u32,
    #[serde(default)]
    pub hr_manager_name: Option<String>,
    #[serde(default)]
    pub hr_manager_email: Option<String>,
    pub created_at: Timestamp,
    #[serde(default)]
    pub subscription: Option<Subscription>,
}

/// Abbreviated company reference embedded in subscription and payment rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRef {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub has_lifetime_access: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HrContact {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCounts {
    #[serde(default)]
    pub employees: u32,
    #[serde(default)]
    pub departments: u32,
    #[serde(default)]
    pub locations: u32,
}

/// Trial summary the backend precomputes for the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialInfo {
    pub is_trial: bool,
    pub days_remaining: i32,
    pub is_expired: bool,
    pub end_date: Timestamp,
}

/// Full company record for the detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDetail {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub tin: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    pub has_lifetime_access: bool,
    pub created_at: Timestamp,
    #[serde(default)]
    pub hr: Option<HrContact>,
    #[serde(default)]
    pub subscription: Option<Subscription>,
    #[serde(default)]
    pub trial_info: Option<TrialInfo>,
    #[serde(rename = "_count", default)]
    pub counts: ResourceCounts,
}

/// Company row in the lifetime-access list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifetimeCompany {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub tin: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub employee_count: u32,
    #[serde(default)]
    pub hr: Option<HrContact>,
    pub created_at: Timestamp,
}

/// Editable company profile fields. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Aggregate company counters for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyStats {
    pub total_companies: u32,
    pub companies_with_active_subscription: u32,
    pub companies_with_trial_subscription: u32,
    pub companies_with_expired_subscription: u32,
    pub companies_with_lifetime_access: u32,
    pub companies_with_pending_subscription: u32,
}

impl CompanyStats {
    /// Share of `part` among all companies, as a rounded percentage.
    pub fn percent(&self, part: u32) -> u32 {
        if self.total_companies == 0 {
            return 0;
        }
        ((part as f64 / self.total_companies as f64) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_includes_lifetime_override() {
        assert_eq!(CompanyStatus::parse("LIFETIME"), Some(CompanyStatus::Lifetime));
        assert_eq!(
            serde_json::to_value(CompanyStatus::Lifetime).unwrap(),
            serde_json::json!("LIFETIME")
        );
    }

    #[test]
    fn detail_decodes_count_group() {
        let detail: CompanyDetail = serde_json::from_value(serde_json::json!({
            "id": 42,
            "name": "Acme GmbH",
            "hasLifetimeAccess": true,
            "createdAt": "2025-03-01T08:00:00Z",
            "_count": {"employees": 12, "departments": 3, "locations": 1}
        }))
        .unwrap();

        assert_eq!(detail.counts.employees, 12);
        assert!(detail.hr.is_none());
        assert!(detail.subscription.is_none());
    }

    #[test]
    fn stats_percentages_round_and_guard_zero() {
        let stats = CompanyStats {
            total_companies: 3,
            companies_with_active_subscription: 2,
            ..Default::default()
        };
        assert_eq!(stats.percent(stats.companies_with_active_subscription), 67);
        assert_eq!(CompanyStats::default().percent(5), 0);
    }
}
