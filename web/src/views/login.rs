use dioxus::prelude::*;

use crate::{Route, session};

const MIN_PASSWORD_LEN: usize = 6;

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[component]
pub fn Login() -> Element {
    let session = session::use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut email_error = use_signal(|| None::<&'static str>);
    let mut password_error = use_signal(|| None::<&'static str>);

    // Already signed in? Straight to the dashboard.
    use_effect(move || {
        if session.is_authenticated() {
            navigator().replace(Route::Dashboard {});
        }
    });

    let busy = (session.logging_in)();

    let submit = move |event: FormEvent| {
        event.prevent_default();

        let email_value = email.peek().trim().to_string();
        let password_value = password.peek().clone();

        let email_ok = is_valid_email(&email_value);
        let password_ok = password_value.len() >= MIN_PASSWORD_LEN;
        email_error.set((!email_ok).then_some("Please enter a valid email address"));
        password_error.set((!password_ok).then_some("Password must be at least 6 characters"));
        if !email_ok || !password_ok {
            return;
        }

        spawn(async move {
            if session.login(email_value, password_value).await {
                navigator().push(Route::Dashboard {});
            }
        });
    };

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "Sign in" }
                    p { class: "login-subtitle",
                        "Enter your credentials to access the super admin panel"
                    }
                }
                form { onsubmit: submit,
                    div { class: "form-group",
                        label { class: "form-label", r#for: "email", "Email" }
                        input {
                            id: "email",
                            class: "form-input",
                            r#type: "email",
                            placeholder: "Enter your email",
                            value: "{email}",
                            disabled: busy,
                            oninput: move |e| email.set(e.value()),
                        }
                        if let Some(message) = email_error() {
                            p { class: "form-error", "{message}" }
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "password", "Password" }
                        input {
                            id: "password",
                            class: "form-input",
                            r#type: "password",
                            placeholder: "Enter your password",
                            value: "{password}",
                            disabled: busy,
                            oninput: move |e| password.set(e.value()),
                        }
                        if let Some(message) = password_error() {
                            p { class: "form-error", "{message}" }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary login-btn",
                        disabled: busy,
                        if busy { "Signing in..." } else { "Sign In" }
                    }
                }
            }
            crate::toast::ToastHost {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plausible_addresses_pass() {
        assert!(is_valid_email("admin@x.com"));
        assert!(is_valid_email("a.b@sub.domain.org"));
    }

    #[test]
    fn malformed_addresses_fail() {
        assert!(!is_valid_email("admin"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("admin@nodot"));
        assert!(!is_valid_email("admin@.com"));
    }
}
