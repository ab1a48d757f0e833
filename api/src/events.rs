//! Cross-component "session torn down" broadcast.
//!
//! Dispatched as a DOM event on `window` so the transport layer can announce
//! a teardown without knowing anything about routing or view state.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

pub const AUTH_CLEARED: &str = "auth-clear";

pub fn emit_auth_cleared() {
    if let Some(window) = web_sys::window() {
        if let Ok(event) = web_sys::CustomEvent::new(AUTH_CLEARED) {
            let _ = window.dispatch_event(&event);
        }
    }
}

/// Registers `handler` for the lifetime of the page.
///
/// The closure is leaked on purpose: the listener lives as long as the
/// document does.
pub fn on_auth_cleared(handler: impl Fn() + 'static) {
    let closure = Closure::<dyn Fn()>::new(handler);
    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback(AUTH_CLEARED, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
