use api::CompanyQuery;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use types::company::CompanyStatus;

use super::components::{
    EmptyRow, Pager, SkeletonRows, company_status_badge, format_date, non_empty, parse_date_input,
};
use crate::Route;
use crate::stores::companies;

const PAGE_SIZE: u32 = 10;
const SEARCH_DEBOUNCE_MS: u32 = 500;
const COLUMNS: usize = 6;

#[component]
pub fn Companies() -> Element {
    let store = companies::use_companies();

    let mut search = use_signal(String::new);
    let mut debounced_search = use_signal(String::new);
    let mut status_filter = use_signal(|| None::<CompanyStatus>);
    let mut date_from = use_signal(String::new);
    let mut date_to = use_signal(String::new);
    let mut page = use_signal(|| 1u32);

    // Half a second of quiet after the last keystroke before the search
    // filter takes effect.
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
        let query = CompanyQuery {
            page: Some(page()),
            page_size: Some(PAGE_SIZE),
            search: non_empty(debounced_search()),
            date_from: parse_date_input(&date_from()),
            date_to: parse_date_input(&date_to()),
            subscription_status: status_filter(),
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
            Some(page) => format!("{} total companies", page.total_count),
            None => String::new(),
        }
    };

    let has_filters = !search().is_empty()
        || status_filter().is_some()
        || !date_from().is_empty()
        || !date_to().is_empty();

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { class: "page-title", "Companies" }
                p { class: "page-subtitle", "Manage and view all companies" }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Companies List" }
                    p { class: "card-subtitle", "{description}" }
                }

                div { class: "filter-bar",
                    input {
                        class: "form-input filter-search",
                        r#type: "search",
                        placeholder: "Search by name, email, or TIN...",
                        value: "{search}",
                        oninput: move |e| search.set(e.value()),
                    }
                    select {
                        class: "form-input filter-select",
                        onchange: move |e| {
                            status_filter.set(CompanyStatus::parse(&e.value()));
                            page.set(1);
                        },
                        option { value: "", "All Statuses" }
                        for status in CompanyStatus::ALL {
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
                    if has_filters {
                        button {
                            class: "btn btn-secondary btn-sm",
                            onclick: move |_| {
                                search.set(String::new());
                                debounced_search.set(String::new());
                                status_filter.set(None);
                                date_from.set(String::new());
                                date_to.set(String::new());
                                page.set(1);
                            },
                            "Clear"
                        }
                    }
                }

                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Company" }
                                th { "TIN" }
                                th { "Status" }
                                th { "Employees" }
                                th { "HR Manager" }
                                th { "Created" }
                            }
                        }
                        tbody {
                            if loading && items.is_empty() {
                                SkeletonRows { columns: COLUMNS, rows: 5 }
                            } else if items.is_empty() {
                                EmptyRow { columns: COLUMNS, message: "No companies found" }
                            } else {
                                for company in items {
                                    {
                                        let id = company.id;
                                        let email = company.email.clone().unwrap_or_default();
                                        let tin = company.tin.clone().unwrap_or_else(|| "-".into());
                                        let hr = company
                                            .hr_manager_name
                                            .clone()
                                            .unwrap_or_else(|| "-".into());
                                        let created = format_date(&company.created_at);
                                        rsx! {
                                            tr {
                                                key: "{id}",
                                                class: "row-link",
                                                onclick: move |_| {
                                                    navigator().push(Route::CompanyDetailPage { id });
                                                },
                                                td {
                                                    div { class: "cell-primary", "{company.name}" }
                                                    div { class: "cell-secondary", "{email}" }
                                                }
                                                td { "{tin}" }
                                                td { {company_status_badge(company.status)} }
                                                td { "{company.employee_count}" }
                                                td { "{hr}" }
                                                td { class: "cell-secondary", "{created}" }
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
        }
    }
}
