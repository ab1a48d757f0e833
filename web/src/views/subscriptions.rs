use api::{LifetimeQuery, SubscriptionQuery};
use dioxus::prelude::*;
use types::subscription::{Subscription, SubscriptionStatus, SubscriptionUpdate};

use super::components::{
    EmptyRow, Modal, Pager, SkeletonRows, format_date, format_date_opt, parse_date_input,
    subscription_status_badge,
};
use crate::stores::subscriptions;

const PAGE_SIZE: u32 = 10;
const COLUMNS: usize = 7;
const DEFAULT_TRIAL_EXTENSION_DAYS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    GrantLifetime,
    RevokeLifetime,
    ExtendTrial,
    Activate,
    Revoke,
}

impl Action {
    fn title(&self) -> &'static str {
        match self {
            Action::GrantLifetime => "Grant Lifetime Access",
            Action::RevokeLifetime => "Revoke Lifetime Access",
            Action::ExtendTrial => "Extend Trial Period",
            Action::Activate => "Activate Subscription",
            Action::Revoke => "Revoke Access",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Action::GrantLifetime => "This will grant permanent access to the company.",
            Action::RevokeLifetime => "This will remove lifetime access from the company.",
            Action::ExtendTrial => "Extend the trial period for this company.",
            Action::Activate => "This will activate the subscription immediately.",
            Action::Revoke => "This will revoke access and mark the subscription as cancelled.",
        }
    }
}

#[derive(Clone, PartialEq)]
struct PendingAction {
    action: Action,
    subscription: Subscription,
}

#[component]
pub fn Subscriptions() -> Element {
    let store = subscriptions::use_subscriptions();

    let mut status_filter = use_signal(|| None::<SubscriptionStatus>);
    let mut page = use_signal(|| 1u32);
    let mut pending = use_signal(|| None::<PendingAction>);
    let mut editing = use_signal(|| None::<Subscription>);
    let mut trial_days = use_signal(|| DEFAULT_TRIAL_EXTENSION_DAYS);
    let mut busy = use_signal(|| false);
    let mut lifetime_refresh = use_signal(|| 0u32);

    let build_query = move || SubscriptionQuery {
        page: Some(*page.peek()),
        page_size: Some(PAGE_SIZE),
        status: *status_filter.peek(),
        ..Default::default()
    };

    use_effect(move || {
        // subscribe to the filter signals, then snapshot them for the task
        let _ = (page(), status_filter());
        let query = build_query();
        spawn(async move {
            store.fetch(query).await;
        });
    });

    let run_pending = move |_| {
        let Some(PendingAction {
            action,
            subscription,
        }) = (*pending.peek()).clone()
        else {
            return;
        };
        let days = *trial_days.peek();
        let query = build_query();

        spawn(async move {
            busy.set(true);
            let refetch = match action {
                // no record in the response, the whole page is refetched
                Action::GrantLifetime => store.grant_lifetime(subscription.company_id).await,
                Action::RevokeLifetime => store.revoke_lifetime(subscription.company_id).await,
                // these return the record and patch the cached row in place
                Action::ExtendTrial => {
                    store.extend_trial(subscription.id, days).await;
                    false
                }
                Action::Activate => {
                    store.activate(subscription.id).await;
                    false
                }
                Action::Revoke => {
                    store.revoke(subscription.id).await;
                    false
                }
            };
            if refetch {
                store.fetch(query).await;
                lifetime_refresh += 1;
            }
            busy.set(false);
            pending.set(None);
        });
    };

    let items = (store.items)();
    let loading = (store.loading)();
    let pagination = (store.pagination)();

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { class: "page-title", "Subscriptions" }
                p { class: "page-subtitle", "Manage company subscriptions and access" }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Subscription Management" }
                    p { class: "card-subtitle",
                        if loading { "Updating..." } else { "View and manage all company subscriptions" }
                    }
                }

                div { class: "filter-bar",
                    select {
                        class: "form-input filter-select",
                        onchange: move |e| {
                            status_filter.set(SubscriptionStatus::parse(&e.value()));
                            page.set(1);
                        },
                        option { value: "", "All Status" }
                        for status in SubscriptionStatus::ALL {
                            option {
                                key: "{status.as_str()}",
                                value: "{status.as_str()}",
                                selected: status_filter() == Some(status),
                                "{status.label()}"
                            }
                        }
                    }
                }

                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Company" }
                                th { "Plan" }
                                th { "Status" }
                                th { "Start Date" }
                                th { "End Date" }
                                th { "Lifetime" }
                                th { class: "cell-right", "Actions" }
                            }
                        }
                        tbody {
                            if loading && items.is_empty() {
                                SkeletonRows { columns: COLUMNS, rows: 5 }
                            } else if items.is_empty() {
                                EmptyRow { columns: COLUMNS, message: "No subscriptions found" }
                            } else {
                                for subscription in items {
                                    SubscriptionRow {
                                        key: "{subscription.id}",
                                        subscription: subscription.clone(),
                                        on_action: move |(action, subscription)| {
                                            if action == Action::ExtendTrial {
                                                trial_days.set(DEFAULT_TRIAL_EXTENSION_DAYS);
                                            }
                                            pending.set(Some(PendingAction { action, subscription }));
                                        },
                                        on_edit: move |subscription| editing.set(Some(subscription)),
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

            LifetimeRoster { refresh: lifetime_refresh }

            if let Some(current) = pending() {
                Modal {
                    title: current.action.title(),
                    on_close: move |_| pending.set(None),
                    footer: rsx! {
                        button {
                            class: "btn btn-secondary",
                            disabled: busy(),
                            onclick: move |_| pending.set(None),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            disabled: busy(),
                            onclick: run_pending,
                            if busy() { "Working..." } else { "Confirm" }
                        }
                    },
                    p { "{current.action.description()}" }
                    if current.action == Action::ExtendTrial {
                        div { class: "form-group",
                            label { class: "form-label", r#for: "trial-days", "Number of Days" }
                            input {
                                id: "trial-days",
                                class: "form-input",
                                r#type: "number",
                                min: "1",
                                max: "365",
                                value: "{trial_days}",
                                oninput: move |e| {
                                    if let Ok(days) = e.value().parse::<u32>() {
                                        trial_days.set(days.clamp(1, 365));
                                    }
                                },
                            }
                        }
                    }
                }
            }

            if let Some(subscription) = editing() {
                EditSubscriptionModal {
                    subscription,
                    on_close: move |_| editing.set(None),
                }
            }
        }
    }
}

/// Companies holding the permanent-access override. Kept in sync with the
/// grant/revoke actions above via the `refresh` counter.
#[component]
fn LifetimeRoster(refresh: ReadSignal<u32>) -> Element {
    let store = subscriptions::use_subscriptions();
    let mut page = use_signal(|| 1u32);

    use_effect(move || {
        let _ = refresh();
        let query = LifetimeQuery {
            page: Some(page()),
            page_size: Some(PAGE_SIZE),
            ..Default::default()
        };
        spawn(async move {
            store.fetch_lifetime(query).await;
        });
    });

    let items = (store.lifetime_items)();
    let loading = (store.lifetime_loading)();
    let pagination = (store.lifetime_pagination)();

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Lifetime Access" }
                p { class: "card-subtitle",
                    if loading { "Updating..." } else { "Companies with a permanent-access override" }
                }
            }
            div { class: "table-container",
                table {
                    thead {
                        tr {
                            th { "Company" }
                            th { "TIN" }
                            th { "Employees" }
                            th { "HR Manager" }
                            th { "Granted Since" }
                        }
                    }
                    tbody {
                        if loading && items.is_empty() {
                            SkeletonRows { columns: 5, rows: 3 }
                        } else if items.is_empty() {
                            EmptyRow { columns: 5, message: "No companies with lifetime access" }
                        } else {
                            for company in items {
                                {
                                    let email = company.email.clone().unwrap_or_default();
                                    let tin = company.tin.clone().unwrap_or_else(|| "-".into());
                                    let hr = company
                                        .hr
                                        .as_ref()
                                        .map(|hr| hr.name.clone())
                                        .unwrap_or_else(|| "-".into());
                                    let created = format_date(&company.created_at);
                                    rsx! {
                                        tr { key: "{company.id}",
                                            td {
                                                div { class: "cell-primary", "{company.name}" }
                                                div { class: "cell-secondary", "{email}" }
                                            }
                                            td { "{tin}" }
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

#[component]
fn SubscriptionRow(
    subscription: Subscription,
    on_action: EventHandler<(Action, Subscription)>,
    on_edit: EventHandler<Subscription>,
) -> Element {
    let company_name = subscription
        .company
        .as_ref()
        .map(|company| company.name.clone())
        .unwrap_or_else(|| format!("#{}", subscription.company_id));
    let start = format_date_opt(subscription.start_date.as_ref());
    let end = format_date_opt(subscription.end_date.as_ref());
    let has_lifetime = subscription.has_lifetime_access;
    let is_trial = subscription.status == SubscriptionStatus::Trial;
    let is_active = subscription.status == SubscriptionStatus::Active;

    let for_action = subscription.clone();
    let for_edit = subscription.clone();

    rsx! {
        tr { key: "{subscription.id}",
            td {
                div { class: "cell-primary", "{company_name}" }
                div { class: "cell-secondary", "#{subscription.company_id}" }
            }
            td { "{subscription.plan.name}" }
            td { {subscription_status_badge(subscription.status)} }
            td { class: "cell-secondary", "{start}" }
            td { class: "cell-secondary", "{end}" }
            td {
                if has_lifetime {
                    span { class: "badge badge-lifetime", "∞" }
                } else {
                    span { class: "cell-secondary", "-" }
                }
            }
            td { class: "cell-right",
                div { class: "row-actions",
                    if has_lifetime {
                        button {
                            class: "btn btn-secondary btn-sm",
                            onclick: {
                                let subscription = for_action.clone();
                                move |_| on_action.call((Action::RevokeLifetime, subscription.clone()))
                            },
                            "Revoke Lifetime"
                        }
                    } else {
                        button {
                            class: "btn btn-secondary btn-sm",
                            onclick: {
                                let subscription = for_action.clone();
                                move |_| on_action.call((Action::GrantLifetime, subscription.clone()))
                            },
                            "Grant Lifetime"
                        }
                    }
                    if is_trial {
                        button {
                            class: "btn btn-secondary btn-sm",
                            onclick: {
                                let subscription = for_action.clone();
                                move |_| on_action.call((Action::ExtendTrial, subscription.clone()))
                            },
                            "Extend Trial"
                        }
                    }
                    if is_active {
                        button {
                            class: "btn btn-secondary btn-sm",
                            onclick: {
                                let subscription = for_action.clone();
                                move |_| on_action.call((Action::Revoke, subscription.clone()))
                            },
                            "Revoke"
                        }
                    } else {
                        button {
                            class: "btn btn-secondary btn-sm",
                            onclick: {
                                let subscription = for_action.clone();
                                move |_| on_action.call((Action::Activate, subscription.clone()))
                            },
                            "Activate"
                        }
                    }
                    button {
                        class: "btn btn-secondary btn-sm",
                        onclick: move |_| on_edit.call(for_edit.clone()),
                        "Edit"
                    }
                }
            }
        }
    }
}

/// Manual edit of status and period dates. The backend answers with the
/// full record, which replaces the cached row.
#[component]
fn EditSubscriptionModal(subscription: Subscription, on_close: EventHandler<()>) -> Element {
    let store = subscriptions::use_subscriptions();
    let mut status = use_signal(|| subscription.status);
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);
    let mut trial_end_date = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let id = subscription.id;

    rsx! {
        Modal {
            title: "Edit Subscription",
            on_close: move |_| on_close.call(()),
            footer: rsx! {
                button {
                    class: "btn btn-secondary",
                    disabled: saving(),
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    disabled: saving(),
                    onclick: move |_| {
                        let update = SubscriptionUpdate {
                            status: Some(*status.peek()),
                            start_date: parse_date_input(&start_date.peek()),
                            end_date: parse_date_input(&end_date.peek()),
                            trial_end_date: parse_date_input(&trial_end_date.peek()),
                            plan_id: None,
                        };
                        spawn(async move {
                            saving.set(true);
                            let ok = store.update(id, update).await;
                            saving.set(false);
                            if ok {
                                on_close.call(());
                            }
                        });
                    },
                    if saving() { "Saving..." } else { "Save" }
                }
            },
            div { class: "form-group",
                label { class: "form-label", r#for: "sub-status", "Status" }
                select {
                    id: "sub-status",
                    class: "form-input",
                    onchange: move |e| {
                        if let Some(parsed) = SubscriptionStatus::parse(&e.value()) {
                            status.set(parsed);
                        }
                    },
                    for option_status in SubscriptionStatus::ALL {
                        option {
                            key: "{option_status.as_str()}",
                            value: "{option_status.as_str()}",
                            selected: status() == option_status,
                            "{option_status.label()}"
                        }
                    }
                }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "sub-start", "Start Date" }
                input {
                    id: "sub-start",
                    class: "form-input",
                    r#type: "date",
                    value: "{start_date}",
                    onchange: move |e| start_date.set(e.value()),
                }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "sub-end", "End Date" }
                input {
                    id: "sub-end",
                    class: "form-input",
                    r#type: "date",
                    value: "{end_date}",
                    onchange: move |e| end_date.set(e.value()),
                }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "sub-trial-end", "Trial End Date" }
                input {
                    id: "sub-trial-end",
                    class: "form-input",
                    r#type: "date",
                    value: "{trial_end_date}",
                    onchange: move |e| trial_end_date.set(e.value()),
                }
            }
            p { class: "cell-secondary", "Dates left empty are not changed." }
        }
    }
}
