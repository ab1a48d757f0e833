use dioxus::prelude::*;
use jiff::Timestamp;
use jiff::civil::Date;
use types::Pagination;
use types::company::CompanyStatus;
use types::payment::PaymentStatus;
use types::subscription::SubscriptionStatus;

pub fn format_date(ts: &Timestamp) -> String {
    ts.strftime("%b %d, %Y").to_string()
}

pub fn format_date_opt(ts: Option<&Timestamp>) -> String {
    ts.map(format_date).unwrap_or_else(|| "-".to_string())
}

pub fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Empty strings from inputs become "filter unset".
pub fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Date-input values are `YYYY-MM-DD` or empty.
pub fn parse_date_input(value: &str) -> Option<Date> {
    value.parse().ok()
}

#[component]
pub fn StatusBadge(label: &'static str, tone: &'static str) -> Element {
    rsx! {
        span { class: "badge badge-{tone}", "{label}" }
    }
}

pub fn company_status_badge(status: CompanyStatus) -> Element {
    let tone = match status {
        CompanyStatus::Active => "active",
        CompanyStatus::Trial => "trial",
        CompanyStatus::Pending => "pending",
        CompanyStatus::Expired => "expired",
        CompanyStatus::Cancelled => "cancelled",
        CompanyStatus::Lifetime => "lifetime",
    };
    rsx! {
        StatusBadge { label: status.label(), tone }
    }
}

pub fn subscription_status_badge(status: SubscriptionStatus) -> Element {
    let tone = match status {
        SubscriptionStatus::Active => "active",
        SubscriptionStatus::Trial => "trial",
        SubscriptionStatus::Pending => "pending",
        SubscriptionStatus::Expired => "expired",
        SubscriptionStatus::Cancelled => "cancelled",
    };
    rsx! {
        StatusBadge { label: status.label(), tone }
    }
}

pub fn payment_status_badge(status: PaymentStatus) -> Element {
    let tone = match status {
        PaymentStatus::Completed => "active",
        PaymentStatus::Pending => "pending",
        PaymentStatus::Failed => "expired",
        PaymentStatus::Refunded => "cancelled",
    };
    rsx! {
        StatusBadge { label: status.label(), tone }
    }
}

#[component]
pub fn MetricCard(title: &'static str, value: u32, tone: &'static str) -> Element {
    rsx! {
        div { class: "metric-card metric-{tone}",
            span { class: "metric-title", "{title}" }
            span { class: "metric-value", "{value}" }
        }
    }
}

/// Previous/Next controls under every paginated table.
#[component]
pub fn Pager(pagination: Pagination, on_page: EventHandler<u32>) -> Element {
    rsx! {
        div { class: "pager",
            p { class: "pager-info",
                "Page {pagination.current_page} of {pagination.total_pages} · {pagination.total_count} total"
            }
            div { class: "pager-buttons",
                button {
                    class: "btn btn-secondary btn-sm",
                    disabled: !pagination.has_prev_page,
                    onclick: move |_| on_page.call(pagination.current_page.saturating_sub(1)),
                    "Previous"
                }
                button {
                    class: "btn btn-secondary btn-sm",
                    disabled: !pagination.has_next_page,
                    onclick: move |_| on_page.call(pagination.current_page + 1),
                    "Next"
                }
            }
        }
    }
}

#[component]
pub fn Modal(
    title: &'static str,
    on_close: EventHandler<()>,
    children: Element,
    footer: Element,
) -> Element {
    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div { class: "modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body", {children} }
                div { class: "modal-footer", {footer} }
            }
        }
    }
}

/// Placeholder rows shown on first load, before there is stale data worth
/// keeping on screen.
#[component]
pub fn SkeletonRows(columns: usize, rows: usize) -> Element {
    rsx! {
        for row in 0..rows {
            tr { key: "{row}",
                for column in 0..columns {
                    td { key: "{column}",
                        div { class: "skeleton skeleton-cell" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn EmptyRow(columns: usize, message: &'static str) -> Element {
    rsx! {
        tr {
            td { class: "table-empty", colspan: "{columns}", "{message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_render_human_readable() {
        let ts: Timestamp = "2026-08-07T10:30:00Z".parse().unwrap();
        assert_eq!(format_date(&ts), "Aug 07, 2026");
        assert_eq!(format_date_opt(Some(&ts)), "Aug 07, 2026");
        assert_eq!(format_date_opt(None), "-");
    }

    #[test]
    fn money_is_fixed_point() {
        assert_eq!(format_money(199.0), "$199.00");
        assert_eq!(format_money(49.5), "$49.50");
    }

    #[test]
    fn blank_search_input_clears_the_filter() {
        assert_eq!(non_empty("  ".to_string()), None);
        assert_eq!(non_empty(" acme ".to_string()), Some("acme".to_string()));
    }

    #[test]
    fn date_inputs_parse_or_unset() {
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("not a date"), None);
        assert!(parse_date_input("2026-01-31").is_some());
    }
}
