use api::PaymentQuery;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use types::payment::{Payment, PaymentStatus};

use super::components::{
    EmptyRow, Modal, Pager, SkeletonRows, format_date, format_date_opt, format_money, non_empty,
    parse_date_input, payment_status_badge, subscription_status_badge,
};
use crate::stores::payments;

const PAGE_SIZE: u32 = 10;
const SEARCH_DEBOUNCE_MS: u32 = 500;
const COLUMNS: usize = 6;

#[component]
pub fn Payments() -> Element {
    let store = payments::use_payments();

    let mut search = use_signal(String::new);
    let mut debounced_search = use_signal(String::new);
    let mut status_filter = use_signal(|| None::<PaymentStatus>);
    let mut date_from = use_signal(String::new);
    let mut date_to = use_signal(String::new);
    let mut page = use_signal(|| 1u32);
    let mut show_detail = use_signal(|| false);

    use_effect(move || {
        let typed = search();
        spawn(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if *search.peek() == typed && *debounced_search.peek() != typed {
                debounced_search.set(typed);
                page.set(1);
            }
        });
    });

    use_effect(move || {
        let query = PaymentQuery {
            page: Some(page()),
            page_size: Some(PAGE_SIZE),
            search: non_empty(debounced_search()),
            date_from: parse_date_input(&date_from()),
            date_to: parse_date_input(&date_to()),
            status: status_filter(),
            company_id: None,
        };
        spawn(async move {
            store.fetch(query).await;
        });
    });

    let items = (store.items)();
    let loading = (store.loading)();
    let pagination = (store.pagination)();

    let description = if loading {
        "Updating...".to_string()
    } else {
        match pagination {
            Some(page) => format!("{} total payments", page.total_count),
            None => String::new(),
        }
    };

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { class: "page-title", "Payments" }
                p { class: "page-subtitle", "Subscription payments across all companies" }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Payment History" }
                    p { class: "card-subtitle", "{description}" }
                }

                div { class: "filter-bar",
                    input {
                        class: "form-input filter-search",
                        r#type: "search",
                        placeholder: "Search by company or reference...",
                        value: "{search}",
                        oninput: move |e| search.set(e.value()),
                    }
                    select {
                        class: "form-input filter-select",
                        onchange: move |e| {
                            let parsed = PaymentStatus::ALL
                                .into_iter()
                                .find(|status| status.as_str() == e.value());
                            status_filter.set(parsed);
                            page.set(1);
                        },
                        option { value: "", "All Statuses" }
                        for status in PaymentStatus::ALL {
                            option {
                                key: "{status.as_str()}",
                                value: "{status.as_str()}",
                                selected: status_filter() == Some(status),
                                "{status.label()}"
                            }
                        }
                    }
                    input {
                        class: "form-input filter-date",
                        r#type: "date",
                        value: "{date_from}",
                        onchange: move |e| {
                            date_from.set(e.value());
                            page.set(1);
                        },
                    }
                    input {
                        class: "form-input filter-date",
                        r#type: "date",
                        value: "{date_to}",
                        onchange: move |e| {
                            date_to.set(e.value());
                            page.set(1);
                        },
                    }
                }

                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Reference" }
                                th { "Company" }
                                th { "Plan" }
                                th { "Amount" }
                                th { "Status" }
                                th { "Paid At" }
                            }
                        }
                        tbody {
                            if loading && items.is_empty() {
                                SkeletonRows { columns: COLUMNS, rows: 5 }
                            } else if items.is_empty() {
                                EmptyRow { columns: COLUMNS, message: "No payments found" }
                            } else {
                                for payment in items {
                                    {
                                        let id = payment.id;
                                        let reference = payment
                                            .reference
                                            .clone()
                                            .unwrap_or_else(|| "-".into());
                                        let amount = format_money(payment.amount);
                                        let paid_at = format_date_opt(payment.paid_at.as_ref());
                                        rsx! {
                                            tr {
                                                key: "{id}",
                                                class: "row-link",
                                                onclick: move |_| {
                                                    show_detail.set(true);
                                                    spawn(async move {
                                                        store.fetch_detail(id).await;
                                                    });
                                                },
                                                td { class: "cell-mono", "{reference}" }
                                                td {
                                                    div { class: "cell-primary", "{payment.company.name}" }
                                                    div { class: "cell-secondary", "#{payment.company_id}" }
                                                }
                                                td { "{payment.subscription.plan.name}" }
                                                td { "{amount}" }
                                                td { {payment_status_badge(payment.status)} }
                                                td { class: "cell-secondary", "{paid_at}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                if let Some(pagination) = pagination {
                    Pager {
                        pagination,
                        on_page: move |next| page.set(next),
                    }
                }
            }

            if show_detail() {
                PaymentDetailModal {
                    on_close: move |_| {
                        show_detail.set(false);
                        store.reset_detail();
                    },
                }
            }
        }
    }
}

#[component]
fn PaymentDetailModal(on_close: EventHandler<()>) -> Element {
    let store = payments::use_payments();
    let detail = (store.detail)();
    let loading = (store.detail_loading)();

    rsx! {
        Modal {
            title: "Payment Details",
            on_close: move |_| on_close.call(()),
            footer: rsx! {
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            },
            if loading {
                div { class: "chart-placeholder", "Loading..." }
            } else if let Some(payment) = detail {
                PaymentDetailBody { payment }
            } else {
                div { class: "chart-placeholder", "Payment not found" }
            }
        }
    }
}

#[component]
fn PaymentDetailBody(payment: Payment) -> Element {
    let reference = payment.reference.clone().unwrap_or_else(|| "-".into());
    let amount = format_money(payment.amount);
    let paid_at = format_date_opt(payment.paid_at.as_ref());
    let created = format_date(&payment.created_at);
    let company_email = payment.company.email.clone().unwrap_or_else(|| "-".into());
    let period_start = format_date_opt(payment.subscription.start_date.as_ref());
    let period_end = format_date_opt(payment.subscription.end_date.as_ref());

    rsx! {
        div { class: "stat-row",
            span { class: "stat-label", "Status" }
            {payment_status_badge(payment.status)}
        }
        div { class: "stat-row",
            span { class: "stat-label", "Amount" }
            span { class: "stat-value", "{amount}" }
        }
        div { class: "stat-row",
            span { class: "stat-label", "Reference" }
            span { class: "stat-value cell-mono", "{reference}" }
        }
        div { class: "stat-row",
            span { class: "stat-label", "Paid At" }
            span { class: "stat-value", "{paid_at}" }
        }
        div { class: "stat-row",
            span { class: "stat-label", "Recorded" }
            span { class: "stat-value", "{created}" }
        }

        div { class: "divider" }

        div { class: "stat-row",
            span { class: "stat-label", "Company" }
            span { class: "stat-value", "{payment.company.name}" }
        }
        div { class: "stat-row",
            span { class: "stat-label", "Company Email" }
            span { class: "stat-value", "{company_email}" }
        }

        div { class: "divider" }

        div { class: "stat-row",
            span { class: "stat-label", "Plan" }
            span { class: "stat-value", "{payment.subscription.plan.name}" }
        }
        div { class: "stat-row",
            span { class: "stat-label", "Subscription" }
            {subscription_status_badge(payment.subscription.status)}
        }
        div { class: "stat-row",
            span { class: "stat-label", "Period" }
            span { class: "stat-value", "{period_start} to {period_end}" }
        }
    }
}
