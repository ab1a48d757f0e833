use dioxus::prelude::*;

mod session;
mod stores;
mod toast;
mod views;

use session::SessionStatus;
use toast::ToastHost;
use views::{Companies, CompanyDetailPage, Dashboard, Login, Payments, Subscriptions};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[layout(AuthenticatedLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/companies")]
        Companies {},
        #[route("/companies/:id")]
        CompanyDetailPage { id: i64 },
        #[route("/subscriptions")]
        Subscriptions {},
        #[route("/payments")]
        Payments {},
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let toasts = toast::provide();
    let session = session::provide(toasts);

    // The transport layer announces session teardown with a broadcast
    // event; it knows nothing about routing or this store.
    use_effect(move || {
        api::events::on_auth_cleared(move || {
            let mut session = session;
            session.clear();
        });
    });

    rsx! {
        document::Title { "HR Platform Admin" }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

/// Root redirect: straight to the dashboard for live sessions, otherwise to
/// the login form. Public, like the login route itself.
#[component]
fn Home() -> Element {
    let session = session::use_session();

    use_effect(move || {
        spawn(async move {
            session.check_auth().await;
        });
    });

    use_effect(move || match (session.status)() {
        SessionStatus::Authenticated => {
            navigator().replace(Route::Dashboard {});
        }
        SessionStatus::Unauthenticated => {
            navigator().replace(Route::Login {});
        }
        SessionStatus::Checking => {}
    });

    rsx! {
        div { class: "loading", "Loading..." }
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = matches!(
        (&current_route, &to),
        (Route::Dashboard {}, Route::Dashboard {})
            | (Route::Companies {}, Route::Companies {})
            | (Route::CompanyDetailPage { .. }, Route::Companies {})
            | (Route::Subscriptions {}, Route::Subscriptions {})
            | (Route::Payments {}, Route::Payments {})
    );

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

/// Route guard around every admin page.
///
/// Re-enters the checking state on every top-level mount, shows skeleton
/// placeholders while the persisted token is being verified, and redirects
/// to the login form the moment the session is known to be gone (including
/// via the transport layer's `auth-clear` broadcast).
#[component]
fn AuthenticatedLayout() -> Element {
    let session = session::use_session();

    let toasts = toast::use_toasts();
    stores::companies::provide(toasts);
    stores::subscriptions::provide(toasts);
    stores::payments::provide(toasts);
    stores::analytics::provide(toasts);

    use_effect(move || {
        spawn(async move {
            session.check_auth().await;
        });
    });

    match (session.status)() {
        SessionStatus::Checking => rsx! { ShellSkeleton {} },
        SessionStatus::Unauthenticated => {
            let nav = navigator();
            nav.replace(Route::Login {});
            rsx! {
                div { class: "loading", "Redirecting to login..." }
            }
        }
        SessionStatus::Authenticated => {
            let user = (session.user)();
            let (name, role, initial) = match &user {
                Some(user) => (
                    user.name.clone(),
                    user.role.clone(),
                    user.name
                        .chars()
                        .next()
                        .unwrap_or('?')
                        .to_uppercase()
                        .to_string(),
                ),
                None => ("Administrator".to_string(), String::new(), "?".to_string()),
            };

            rsx! {
                div { class: "app-layout",
                    aside { class: "sidebar",
                        div { class: "sidebar-header",
                            span { class: "sidebar-logo", "HR Platform" }
                            span { class: "sidebar-tag", "Super Admin" }
                        }
                        nav { class: "sidebar-nav",
                            NavLink { to: Route::Dashboard {}, "Dashboard" }
                            NavLink { to: Route::Companies {}, "Companies" }
                            NavLink { to: Route::Subscriptions {}, "Subscriptions" }
                            NavLink { to: Route::Payments {}, "Payments" }
                        }
                        div { class: "sidebar-footer",
                            div { class: "sidebar-user",
                                div { class: "sidebar-avatar", "{initial}" }
                                div { class: "sidebar-user-info",
                                    div { class: "sidebar-user-name", "{name}" }
                                    div { class: "sidebar-user-role", "{role}" }
                                }
                            }
                            SignOutButton {}
                        }
                    }
                    main { class: "main-content",
                        Outlet::<Route> {}
                    }
                }
                ToastHost {}
            }
        }
    }
}

#[component]
fn SignOutButton() -> Element {
    let session = session::use_session();
    let busy = (session.logging_out)();

    rsx! {
        button {
            class: "sidebar-logout",
            disabled: busy,
            onclick: move |_| {
                spawn(async move {
                    session.logout().await;
                    navigator().push(Route::Login {});
                });
            },
            if busy { "Signing out..." } else { "Sign out" }
        }
    }
}

/// Placeholder shell shown while the session check is in flight.
#[component]
fn ShellSkeleton() -> Element {
    rsx! {
        div { class: "app-layout",
            aside { class: "sidebar",
                div { class: "skeleton skeleton-logo" }
                div { class: "sidebar-nav",
                    for i in 0..4 {
                        div { key: "{i}", class: "skeleton skeleton-nav-item" }
                    }
                }
            }
            main { class: "main-content",
                div { class: "skeleton skeleton-block" }
            }
        }
    }
}
