//! Transient success/error notifications.
//!
//! Store actions report every outcome here instead of returning errors to
//! the views. Entries dismiss themselves after a few seconds.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast state shared through context - use `use_toasts()` to access.
#[derive(Clone, Copy)]
pub struct Toasts {
    entries: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

pub fn provide() -> Toasts {
    use_context_provider(|| Toasts {
        entries: Signal::new(Vec::new()),
        next_id: Signal::new(0),
    })
}

pub fn use_toasts() -> Toasts {
    use_context()
}

impl Toasts {
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.write().retain(|toast| toast.id != id);
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        let id = self.next_id.peek().wrapping_add(1);
        self.next_id.set(id);
        self.entries.write().push(Toast { id, kind, message });

        let mut entries = self.entries;
        spawn(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            entries.write().retain(|toast| toast.id != id);
        });
    }
}

#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_toasts();
    let entries = (toasts.entries)();

    rsx! {
        div { class: "toast-stack",
            for toast in entries {
                {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    rsx! {
                        div { key: "{id}", class,
                            span { class: "toast-message", "{toast.message}" }
                            button {
                                class: "toast-close",
                                onclick: move |_| toasts.dismiss(id),
                                "×"
                            }
                        }
                    }
                }
            }
        }
    }
}
