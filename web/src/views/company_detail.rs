use dioxus::prelude::*;
use types::company::{CompanyDetail, CompanyUpdate};

use super::components::{
    Modal, format_date, format_date_opt, non_empty, subscription_status_badge,
};
use crate::stores::{companies, subscriptions};

#[component]
pub fn CompanyDetailPage(id: i64) -> Element {
    rsx! {
        CompanyDetailView { id }
    }
}

#[component]
fn CompanyDetailView(id: ReadSignal<i64>) -> Element {
    let store = companies::use_companies();
    let mut show_edit = use_signal(|| false);

    use_effect(move || {
        let id = id();
        spawn(async move {
            store.fetch_detail(id).await;
        });
    });

    let detail = (store.detail)();
    let loading = (store.detail_loading)();

    rsx! {
        div { class: "page",
            if loading && detail.is_none() {
                div { class: "skeleton skeleton-block" }
            } else if let Some(company) = detail {
                {
                    let company_id = company.id;
                    rsx! {
                        div { class: "page-header",
                            div {
                                h1 { class: "page-title", "{company.name}" }
                                p { class: "page-subtitle", "Company profile and subscription" }
                            }
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| show_edit.set(true),
                                "Edit Profile"
                            }
                        }

                        div { class: "card-grid",
                            ProfileCard { company: company.clone() }
                            SubscriptionCard { company: company.clone() }
                        }
                        div { class: "card-grid",
                            ContactCard { company: company.clone() }
                            LifetimeCard { company: company.clone() }
                        }

                        if show_edit() {
                            EditCompanyModal {
                                company: company.clone(),
                                on_close: move |_| show_edit.set(false),
                                on_saved: move |_| {
                                    show_edit.set(false);
                                    spawn(async move {
                                        store.fetch_detail(company_id).await;
                                    });
                                },
                            }
                        }
                    }
                }
            } else {
                div { class: "chart-placeholder", "Company not found" }
            }
        }
    }
}

#[component]
fn ProfileCard(company: CompanyDetail) -> Element {
    let email = company.email.clone().unwrap_or_else(|| "-".into());
    let tin = company.tin.clone().unwrap_or_else(|| "-".into());
    let address = company.address.clone().unwrap_or_else(|| "-".into());
    let timezone = company.timezone.clone().unwrap_or_else(|| "-".into());
    let created = format_date(&company.created_at);

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Profile" }
            }
            div { class: "card-body",
                DetailRow { label: "Email", value: email }
                DetailRow { label: "TIN", value: tin }
                DetailRow { label: "Address", value: address }
                DetailRow { label: "Timezone", value: timezone }
                DetailRow { label: "Registered", value: created }
                if let Some(description) = company.description.clone() {
                    DetailRow { label: "About", value: description }
                }
            }
        }
    }
}

#[component]
fn ContactCard(company: CompanyDetail) -> Element {
    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "HR Contact & Resources" }
            }
            div { class: "card-body",
                if let Some(hr) = company.hr.clone() {
                    DetailRow { label: "HR Manager", value: hr.name.clone() }
                    DetailRow {
                        label: "HR Email",
                        value: hr.email.clone().unwrap_or_else(|| "-".into()),
                    }
                    DetailRow {
                        label: "HR Phone",
                        value: hr.phone.clone().unwrap_or_else(|| "-".into()),
                    }
                } else {
                    p { class: "cell-secondary", "No HR manager assigned" }
                }
                div { class: "divider" }
                DetailRow { label: "Employees", value: company.counts.employees.to_string() }
                DetailRow { label: "Departments", value: company.counts.departments.to_string() }
                DetailRow { label: "Locations", value: company.counts.locations.to_string() }
            }
        }
    }
}

#[component]
fn SubscriptionCard(company: CompanyDetail) -> Element {
    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Subscription" }
            }
            div { class: "card-body",
                if let Some(subscription) = company.subscription.clone() {
                    div { class: "stat-row",
                        span { class: "stat-label", "Status" }
                        {subscription_status_badge(subscription.status)}
                    }
                    DetailRow { label: "Plan", value: subscription.plan.name.clone() }
                    DetailRow {
                        label: "Start",
                        value: format_date_opt(subscription.start_date.as_ref()),
                    }
                    DetailRow {
                        label: "End",
                        value: format_date_opt(subscription.end_date.as_ref()),
                    }
                    DetailRow {
                        label: "Trial Ends",
                        value: format_date_opt(subscription.trial_end_date.as_ref()),
                    }
                } else {
                    p { class: "cell-secondary", "No subscription on record" }
                }
                if let Some(trial) = company.trial_info.clone() {
                    div { class: "divider" }
                    if trial.is_expired {
                        p { class: "trial-note trial-expired",
                            "Trial expired on {format_date(&trial.end_date)}"
                        }
                    } else if trial.is_trial {
                        p { class: "trial-note",
                            "{trial.days_remaining} trial days remaining"
                        }
                    }
                }
            }
        }
    }
}

/// Grant/revoke controls for the permanent-access override. Both actions
/// confirm first; the response carries no record, so the detail is
/// refetched afterwards.
#[component]
fn LifetimeCard(company: CompanyDetail) -> Element {
    let companies = companies::use_companies();
    let subscriptions = subscriptions::use_subscriptions();
    let mut confirming = use_signal(|| false);
    let mut busy = use_signal(|| false);

    let company_id = company.id;
    let has_lifetime = company.has_lifetime_access;
    let modal_title: &str = if has_lifetime {
        "Revoke Lifetime Access"
    } else {
        "Grant Lifetime Access"
    };

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Lifetime Access" }
            }
            div { class: "card-body",
                if has_lifetime {
                    p { "This company has permanent access, regardless of subscription status." }
                } else {
                    p { class: "cell-secondary", "No lifetime override in place." }
                }
                button {
                    class: if has_lifetime { "btn btn-danger" } else { "btn btn-primary" },
                    onclick: move |_| confirming.set(true),
                    if has_lifetime { "Revoke Lifetime Access" } else { "Grant Lifetime Access" }
                }
            }
        }

        if confirming() {
            Modal {
                title: modal_title,
                on_close: move |_| confirming.set(false),
                footer: rsx! {
                    button {
                        class: "btn btn-secondary",
                        disabled: busy(),
                        onclick: move |_| confirming.set(false),
                        "Cancel"
                    }
                    button {
                        class: if has_lifetime { "btn btn-danger" } else { "btn btn-primary" },
                        disabled: busy(),
                        onclick: move |_| {
                            spawn(async move {
                                busy.set(true);
                                let ok = if has_lifetime {
                                    subscriptions.revoke_lifetime(company_id).await
                                } else {
                                    subscriptions.grant_lifetime(company_id).await
                                };
                                busy.set(false);
                                confirming.set(false);
                                if ok {
                                    companies.fetch_detail(company_id).await;
                                }
                            });
                        },
                        if busy() { "Working..." } else { "Confirm" }
                    }
                },
                if has_lifetime {
                    p { "This will remove the permanent-access override from this company." }
                } else {
                    p { "This will grant the company permanent access regardless of its subscription." }
                }
            }
        }
    }
}

#[component]
fn EditCompanyModal(
    company: CompanyDetail,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let store = companies::use_companies();
    let mut name = use_signal(|| company.name.clone());
    let mut email = use_signal(|| company.email.clone().unwrap_or_default());
    let mut tin = use_signal(|| company.tin.clone().unwrap_or_default());
    let mut address = use_signal(|| company.address.clone().unwrap_or_default());
    let mut saving = use_signal(|| false);

    let company_id = company.id;
    let can_submit = !name().trim().is_empty();

    rsx! {
        Modal {
            title: "Edit Company",
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
                    disabled: !can_submit || saving(),
                    onclick: move |_| {
                        let update = CompanyUpdate {
                            name: non_empty(name()),
                            email: non_empty(email()),
                            tin: non_empty(tin()),
                            address: non_empty(address()),
                        };
                        spawn(async move {
                            saving.set(true);
                            let ok = store.update(company_id, update).await;
                            saving.set(false);
                            if ok {
                                on_saved.call(());
                            }
                        });
                    },
                    if saving() { "Saving..." } else { "Save" }
                }
            },
            div { class: "form-group",
                label { class: "form-label", r#for: "company-name", "Name" }
                input {
                    id: "company-name",
                    class: "form-input",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "company-email", "Email" }
                input {
                    id: "company-email",
                    class: "form-input",
                    r#type: "email",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "company-tin", "TIN" }
                input {
                    id: "company-tin",
                    class: "form-input",
                    value: "{tin}",
                    oninput: move |e| tin.set(e.value()),
                }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "company-address", "Address" }
                input {
                    id: "company-address",
                    class: "form-input",
                    value: "{address}",
                    oninput: move |e| address.set(e.value()),
                }
            }
        }
    }
}

#[component]
fn DetailRow(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "stat-row",
            span { class: "stat-label", "{label}" }
            span { class: "stat-value", "{value}" }
        }
    }
}
