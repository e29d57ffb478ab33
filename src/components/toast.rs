//! Toast notification stack.
//!
//! Renders pending toasts from the context and dismisses each one a
//! few seconds after it appears. Toasts are purely informational and
//! never feed back into application state.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::TOAST_DURATION_MS;
use crate::models::{Toast, ToastLevel};

stylance::import_crate_style!(css, "src/components/toast.module.css");

/// Fixed-position stack of active toasts.
#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <div class=css::stack>
            <For each=move || ctx.toasts.get() key=|toast| toast.id let:toast>
                <ToastItem toast />
            </For>
        </div>
    }
}

/// A single toast; schedules its own dismissal on mount.
#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let id = toast.id;

    // One dismiss timer per toast; dropped (cancelled) with the item.
    let timer = StoredValue::new_local(None::<Timeout>);
    Effect::new(move || {
        if timer.with_value(Option::is_none) {
            timer.set_value(Some(Timeout::new(TOAST_DURATION_MS, move || {
                ctx.dismiss_toast(id);
            })));
        }
    });

    let level_class = match toast.level {
        ToastLevel::Info => css::info,
        ToastLevel::Success => css::success,
        ToastLevel::Error => css::error,
    };

    view! { <div class=format!("{} {}", css::toast, level_class)>{toast.message.clone()}</div> }
}
