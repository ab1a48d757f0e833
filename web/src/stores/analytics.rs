use dioxus::prelude::*;
use types::analytics::{Distribution, RevenuePoint, SubscriptionStats, TrendPoint};

use super::Sequence;
use crate::toast::Toasts;

/// Subscription metrics backing the dashboard charts. Each series loads
/// independently so a failing endpoint degrades only its own card.
#[derive(Clone, Copy)]
pub struct AnalyticsStore {
    pub trends: Signal<Vec<TrendPoint>>,
    pub trends_loading: Signal<bool>,
    pub distribution: Signal<Option<Distribution>>,
    pub distribution_loading: Signal<bool>,
    pub stats: Signal<Option<SubscriptionStats>>,
    pub stats_loading: Signal<bool>,
    pub revenue: Signal<Vec<RevenuePoint>>,
    pub revenue_loading: Signal<bool>,
    trends_seq: Signal<Sequence>,
    revenue_seq: Signal<Sequence>,
    toasts: Toasts,
}

pub fn provide(toasts: Toasts) -> AnalyticsStore {
    use_context_provider(|| AnalyticsStore {
        trends: Signal::new(Vec::new()),
        trends_loading: Signal::new(false),
        distribution: Signal::new(None),
        distribution_loading: Signal::new(false),
        stats: Signal::new(None),
        stats_loading: Signal::new(false),
        revenue: Signal::new(Vec::new()),
        revenue_loading: Signal::new(false),
        trends_seq: Signal::new(Sequence::default()),
        revenue_seq: Signal::new(Sequence::default()),
        toasts,
    })
}

pub fn use_analytics() -> AnalyticsStore {
    use_context()
}

impl AnalyticsStore {
    /// Kicks off every series concurrently, the way the dashboard wants
    /// them on mount.
    pub fn fetch_all(self, months: u32) {
        spawn(async move { self.fetch_trends(months).await });
        spawn(async move { self.fetch_distribution().await });
        spawn(async move { self.fetch_stats().await });
        spawn(async move { self.fetch_revenue(months).await });
    }

    pub async fn fetch_trends(mut self, months: u32) {
        let ticket = self.trends_seq.write().begin();
        self.trends_loading.set(true);

        let result = api::admin::subscription_trends(months).await;
        if !self.trends_seq.peek().is_current(ticket) {
            return;
        }

        match result {
            Ok(trends) => self.trends.set(trends),
            Err(err) => {
                self.trends.set(Vec::new());
                self.toasts.error(err.user_message());
            }
        }
        self.trends_loading.set(false);
    }

    pub async fn fetch_distribution(mut self) {
        self.distribution_loading.set(true);
        match api::admin::subscription_distribution().await {
            Ok(distribution) => self.distribution.set(Some(distribution)),
            Err(err) => {
                self.distribution.set(None);
                self.toasts.error(err.user_message());
            }
        }
        self.distribution_loading.set(false);
    }

    pub async fn fetch_stats(mut self) {
        self.stats_loading.set(true);
        match api::admin::subscription_stats().await {
            Ok(stats) => self.stats.set(Some(stats)),
            Err(err) => {
                self.stats.set(None);
                self.toasts.error(err.user_message());
            }
        }
        self.stats_loading.set(false);
    }

    pub async fn fetch_revenue(mut self, months: u32) {
        let ticket = self.revenue_seq.write().begin();
        self.revenue_loading.set(true);

        let result = api::admin::subscription_revenue(months).await;
        if !self.revenue_seq.peek().is_current(ticket) {
            return;
        }

        match result {
            Ok(revenue) => self.revenue.set(revenue),
            Err(err) => {
                self.revenue.set(Vec::new());
                self.toasts.error(err.user_message());
            }
        }
        self.revenue_loading.set(false);
    }
}
