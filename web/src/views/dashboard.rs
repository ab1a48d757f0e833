use dioxus::prelude::*;
use types::analytics::{Distribution, RevenuePoint, TrendPoint};
use types::company::CompanyStats;

use super::components::{MetricCard, format_money};
use crate::stores::{analytics, companies};

/// How many months of history the trend and revenue charts cover.
const CHART_MONTHS: u32 = 6;

#[component]
pub fn Dashboard() -> Element {
    let companies = companies::use_companies();
    let analytics = analytics::use_analytics();

    use_effect(move || {
        spawn(async move { companies.fetch_stats().await });
        analytics.fetch_all(CHART_MONTHS);
    });

    let stats = (companies.stats)();
    let stats_loading = (companies.stats_loading)();

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { class: "page-title", "Dashboard Overview" }
                p { class: "page-subtitle", "Monitor platform subscriptions and metrics" }
            }

            if stats_loading && stats.is_none() {
                div { class: "metric-grid",
                    for i in 0..6 {
                        div { key: "{i}", class: "metric-card",
                            div { class: "skeleton skeleton-cell" }
                        }
                    }
                }
            } else {
                {
                    let stats = stats.unwrap_or_default();
                    rsx! {
                        div { class: "metric-grid",
                            MetricCard { title: "Total Companies", value: stats.total_companies, tone: "blue" }
                            MetricCard { title: "Active Subscriptions", value: stats.companies_with_active_subscription, tone: "green" }
                            MetricCard { title: "Trial Subscriptions", value: stats.companies_with_trial_subscription, tone: "amber" }
                            MetricCard { title: "Expired Subscriptions", value: stats.companies_with_expired_subscription, tone: "red" }
                            MetricCard { title: "Lifetime Access", value: stats.companies_with_lifetime_access, tone: "violet" }
                            MetricCard { title: "Pending Subscriptions", value: stats.companies_with_pending_subscription, tone: "teal" }
                        }
                    }
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Subscription Status Over Time" }
                    p { class: "card-subtitle", "Active, trial and expired subscriptions per month" }
                }
                div { class: "card-body",
                    if (analytics.trends_loading)() {
                        div { class: "chart-placeholder", "Loading chart data..." }
                    } else if (analytics.trends)().is_empty() {
                        div { class: "chart-placeholder", "No subscription data available" }
                    } else {
                        TrendChart { points: (analytics.trends)() }
                    }
                }
            }

            div { class: "card-grid",
                QuickStatsCard { stats: stats.unwrap_or_default() }
                SubscriptionStatsCard {}
            }

            div { class: "card-grid",
                DistributionCard {}
                RevenueCard {}
            }
        }
    }
}

/// Grouped bar chart, one group per month.
#[component]
fn TrendChart(points: Vec<TrendPoint>) -> Element {
    const GROUP_WIDTH: f64 = 90.0;
    const BAR_WIDTH: f64 = 22.0;
    const CHART_HEIGHT: f64 = 200.0;
    const LABEL_SPACE: f64 = 24.0;

    let max = points.iter().map(TrendPoint::peak).max().unwrap_or(0).max(1) as f64;
    let width = GROUP_WIDTH * points.len() as f64;
    let height = CHART_HEIGHT + LABEL_SPACE;
    let scale = move |value: u32| (value as f64 / max) * (CHART_HEIGHT - 10.0);

    rsx! {
        svg {
            class: "trend-chart",
            view_box: "0 0 {width} {height}",
            for (index, point) in points.iter().enumerate() {
                {
                    let group_x = index as f64 * GROUP_WIDTH;
                    let series = [
                        ("bar-active", point.active),
                        ("bar-trial", point.trial),
                        ("bar-expired", point.expired),
                    ];
                    let label_x = group_x + GROUP_WIDTH / 2.0;
                    rsx! {
                        g { key: "{point.month}",
                            for (offset, (class, value)) in series.into_iter().enumerate() {
                                {
                                    let bar_height = scale(value);
                                    let x = group_x + 8.0 + offset as f64 * (BAR_WIDTH + 3.0);
                                    let y = CHART_HEIGHT - bar_height;
                                    rsx! {
                                        rect {
                                            key: "{class}",
                                            class: "{class}",
                                            x: "{x}",
                                            y: "{y}",
                                            width: "{BAR_WIDTH}",
                                            height: "{bar_height}",
                                            rx: "3",
                                        }
                                    }
                                }
                            }
                            text {
                                class: "chart-label",
                                x: "{label_x}",
                                y: "{CHART_HEIGHT + 16.0}",
                                text_anchor: "middle",
                                "{point.month}"
                            }
                        }
                    }
                }
            }
        }
        div { class: "chart-legend",
            span { class: "legend-item legend-active", "Active" }
            span { class: "legend-item legend-trial", "Trial" }
            span { class: "legend-item legend-expired", "Expired" }
        }
    }
}

#[component]
fn QuickStatsCard(stats: CompanyStats) -> Element {
    let rows = [
        ("Active Rate", stats.percent(stats.companies_with_active_subscription)),
        ("Trial Rate", stats.percent(stats.companies_with_trial_subscription)),
        ("Churn Rate", stats.percent(stats.companies_with_expired_subscription)),
    ];

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Quick Stats" }
                p { class: "card-subtitle", "Key performance indicators" }
            }
            div { class: "card-body",
                for (label, percent) in rows {
                    div { key: "{label}", class: "stat-row",
                        span { class: "stat-label", "{label}" }
                        span { class: "stat-value", "{percent}%" }
                    }
                }
            }
        }
    }
}

#[component]
fn SubscriptionStatsCard() -> Element {
    let analytics = analytics::use_analytics();
    let stats = (analytics.stats)();

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Subscription Overview" }
                p { class: "card-subtitle", "Movement this month" }
            }
            div { class: "card-body",
                if (analytics.stats_loading)() && stats.is_none() {
                    div { class: "chart-placeholder", "Loading..." }
                } else {
                    {
                        let stats = stats.unwrap_or_default();
                        let growth = format!("{:+.1}%", stats.growth_rate);
                        rsx! {
                            div { class: "stat-row",
                                span { class: "stat-label", "Total Subscriptions" }
                                span { class: "stat-value", "{stats.total}" }
                            }
                            div { class: "stat-row",
                                span { class: "stat-label", "New This Month" }
                                span { class: "stat-value", "{stats.new_this_month}" }
                            }
                            div { class: "stat-row",
                                span { class: "stat-label", "Expiring This Month" }
                                span { class: "stat-value", "{stats.expiring_this_month}" }
                            }
                            div { class: "stat-row",
                                span { class: "stat-label", "Growth Rate" }
                                span { class: "stat-value", "{growth}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DistributionCard() -> Element {
    let analytics = analytics::use_analytics();
    let distribution = (analytics.distribution)();

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Status Distribution" }
                p { class: "card-subtitle", "Current subscription population" }
            }
            div { class: "card-body",
                if (analytics.distribution_loading)() && distribution.is_none() {
                    div { class: "chart-placeholder", "Loading..." }
                } else {
                    DistributionBars { distribution: distribution.unwrap_or_default() }
                }
            }
        }
    }
}

#[component]
fn DistributionBars(distribution: Distribution) -> Element {
    let total = distribution.total().max(1);
    let rows = [
        ("Active", "active", distribution.active),
        ("Trial", "trial", distribution.trial),
        ("Pending", "pending", distribution.pending),
        ("Expired", "expired", distribution.expired),
        ("Cancelled", "cancelled", distribution.cancelled),
    ];

    rsx! {
        for (label, tone, count) in rows {
            {
                let percent = (count as f64 / total as f64) * 100.0;
                rsx! {
                    div { key: "{label}", class: "dist-row",
                        span { class: "dist-label", "{label}" }
                        div { class: "dist-track",
                            div {
                                class: "dist-fill dist-{tone}",
                                style: "width: {percent:.1}%",
                            }
                        }
                        span { class: "dist-count", "{count}" }
                    }
                }
            }
        }
    }
}

#[component]
fn RevenueCard() -> Element {
    let analytics = analytics::use_analytics();
    let revenue = (analytics.revenue)();

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Revenue" }
                p { class: "card-subtitle", "Completed payments per month" }
            }
            div { class: "card-body",
                if (analytics.revenue_loading)() && revenue.is_empty() {
                    div { class: "chart-placeholder", "Loading..." }
                } else if revenue.is_empty() {
                    div { class: "chart-placeholder", "No revenue recorded" }
                } else {
                    RevenueRows { points: revenue }
                }
            }
        }
    }
}

#[component]
fn RevenueRows(points: Vec<RevenuePoint>) -> Element {
    let max = points
        .iter()
        .map(|point| point.revenue)
        .fold(0.0_f64, f64::max)
        .max(1.0);

    rsx! {
        for point in &points {
            {
                let percent = (point.revenue / max) * 100.0;
                let amount = format_money(point.revenue);
                rsx! {
                    div { key: "{point.month}", class: "dist-row",
                        span { class: "dist-label", "{point.month}" }
                        div { class: "dist-track",
                            div {
                                class: "dist-fill dist-active",
                                style: "width: {percent:.1}%",
                            }
                        }
                        span { class: "dist-count", "{amount} · {point.count}" }
                    }
                }
            }
        }
    }
}
