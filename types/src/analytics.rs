use serde::{Deserialize, Serialize};

/// Subscription counts per calendar month, for the dashboard trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    pub active: u32,
    pub trial: u32,
    pub expired: u32,
}

impl TrendPoint {
    pub fn peak(&self) -> u32 {
        self.active.max(self.trial).max(self.expired)
    }
}

/// Current subscription population broken down by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    pub active: u32,
    pub trial: u32,
    pub expired: u32,
    pub pending: u32,
    pub cancelled: u32,
}

impl Distribution {
    pub fn total(&self) -> u32 {
        self.active + self.trial + self.expired + self.pending + self.cancelled
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionStats {
    pub total: u32,
    pub active: u32,
    pub trial: u32,
    pub expired: u32,
    pub new_this_month: u32,
    pub expiring_this_month: u32,
    pub growth_rate: f64,
}

/// Completed payment volume per calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub month: String,
    pub revenue: f64,
    pub count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_total_sums_all_buckets() {
        let dist = Distribution {
            active: 10,
            trial: 4,
            expired: 3,
            pending: 2,
            cancelled: 1,
        };
        assert_eq!(dist.total(), 20);
        assert_eq!(Distribution::default().total(), 0);
    }

    #[test]
    fn trend_peak_picks_largest_series() {
        let point = TrendPoint {
            month: "2026-07".into(),
            active: 8,
            trial: 12,
            expired: 3,
        };
        assert_eq!(point.peak(), 12);
    }
}
