//! Markdown preview pane with view tabs and the copy button.
//!
//! The pane derives its content from the committed store and the
//! active view; the copy button is driven by the [`CopyFsm`] so the
//! reentrancy guard and the single feedback timer stay structurally
//! correct.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::COPY_FEEDBACK_MS;
use crate::core::{CopyFsm, CopyPhase, CopyStart, TimerCmd};
use crate::models::{PreviewView, ToastLevel};
use crate::utils::write_clipboard;

stylance::import_crate_style!(css, "src/components/markdown.module.css");

// ============================================================================
// CopyControl
// ============================================================================

/// Reactive wrapper around [`CopyFsm`] that owns the feedback timer.
///
/// The FSM decides; this hook executes. `TimerCmd::Arm` replaces the
/// stored handle (dropping a `Timeout` cancels it), so at most one
/// timer is ever pending. Phase and timer are updated in the same
/// synchronous step — there is no window for a second copy to slip
/// through during the awaited clipboard write.
#[derive(Clone, Copy)]
struct CopyControl {
    fsm: RwSignal<CopyFsm>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl CopyControl {
    fn new() -> Self {
        Self {
            fsm: RwSignal::new(CopyFsm::new()),
            timer: StoredValue::new_local(None),
        }
    }

    /// Current phase, tracked (drives the button rendering).
    fn phase(&self) -> CopyPhase {
        self.fsm.with(|fsm| fsm.phase())
    }

    fn request(&self, markdown: &str) -> CopyStart {
        self.fsm
            .try_update(|fsm| fsm.request(markdown))
            .unwrap_or(CopyStart::Denied)
    }

    fn write_succeeded(&self) {
        let cmd = self
            .fsm
            .try_update(|fsm| fsm.write_succeeded())
            .unwrap_or(TimerCmd::Keep);
        self.apply(cmd);
    }

    fn write_failed(&self) {
        let cmd = self
            .fsm
            .try_update(|fsm| fsm.write_failed())
            .unwrap_or(TimerCmd::Keep);
        self.apply(cmd);
    }

    fn apply(&self, cmd: TimerCmd) {
        match cmd {
            TimerCmd::Keep => {}
            TimerCmd::Cancel => self.clear_timer(),
            TimerCmd::Arm => self.arm_timer(),
        }
    }

    fn clear_timer(&self) {
        // Dropping the handle cancels the pending callback.
        self.timer.update_value(|timer| {
            timer.take();
        });
    }

    fn arm_timer(&self) {
        let control = *self;
        let timeout = Timeout::new(COPY_FEEDBACK_MS, move || {
            let cmd = control
                .fsm
                .try_update(|fsm| fsm.timer_fired())
                .unwrap_or(TimerCmd::Keep);
            control.apply(cmd);
            control.clear_timer();
        });
        // Replacing the stored handle drops (cancels) the old timer.
        self.timer.set_value(Some(timeout));
    }
}

/// Toast text for a successful copy of a given view.
fn copied_message(view: PreviewView) -> &'static str {
    match view {
        PreviewView::Html => "HTML markdown copied to clipboard!",
        PreviewView::Css => "CSS markdown copied to clipboard!",
        PreviewView::Js => "JavaScript markdown copied to clipboard!",
        PreviewView::Combined => "Combined markdown copied to clipboard!",
    }
}

// ============================================================================
// MarkdownPane Component
// ============================================================================

/// Markdown preview pane: tab row, rendered snippet (or placeholder),
/// and the copy button.
#[component]
pub fn MarkdownPane() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let control = CopyControl::new();

    let markdown = Memo::new(move |_| ctx.active_markdown());

    let on_copy = move |_| {
        let text = ctx.active_markdown_untracked();
        match control.request(&text) {
            // Copy already in flight: silent no-op, not queued.
            CopyStart::Denied => {}
            CopyStart::Empty => ctx.notify("No code to copy!", ToastLevel::Error),
            CopyStart::Write => {
                let view = ctx.active_view.get_untracked();
                spawn_local(async move {
                    match write_clipboard(&text).await {
                        Ok(()) => {
                            control.write_succeeded();
                            ctx.notify(copied_message(view), ToastLevel::Success);
                        }
                        Err(e) => {
                            control.write_failed();
                            ctx.notify(e.to_string(), ToastLevel::Error);
                        }
                    }
                });
            }
        }
    };

    let copy_disabled = move || {
        !ctx.store.with(|store| store.has_any()) || control.phase() == CopyPhase::Feedback
    };

    view! {
        <div class=css::pane>
            <div class=css::tabs>
                {PreviewView::ALL
                    .into_iter()
                    .map(|view| {
                        let tab_class = move || {
                            let mut class = css::tab.to_string();
                            if ctx.active_view.get() == view {
                                class.push(' ');
                                class.push_str(css::tabActive);
                            }
                            if !ctx.store.with(|store| view.is_available(store)) {
                                class.push(' ');
                                class.push_str(css::tabDisabled);
                            }
                            class
                        };
                        view! {
                            <button class=tab_class on:click=move |_| ctx.switch_view(view)>
                                {view.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class=css::body>
                {move || {
                    let md = markdown.get();
                    if md.trim().is_empty() {
                        let label = ctx.active_view.get().empty_label();
                        view! {
                            <div class=css::emptyState>
                                <div class=css::emptyIcon>"📄"</div>
                                <div class=css::emptyText>
                                    {format!(
                                        "No {label} code available. Write some code and click \"Run Code\"."
                                    )}
                                </div>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <pre class=css::markdown>
                                <code>{md}</code>
                            </pre>
                        }
                        .into_any()
                    }
                }}
            </div>

            <div class=css::footer>
                <button class=css::copyButton prop:disabled=copy_disabled on:click=on_copy>
                    {move || match control.phase() {
                        CopyPhase::Feedback => view! {
                            <Icon icon=ic::CHECK />
                            <span>" Copied!"</span>
                        }
                        .into_any(),
                        _ => view! {
                            <Icon icon=ic::COPY />
                            <span>" Copy Markdown"</span>
                        }
                        .into_any(),
                    }}
                </button>
            </div>
        </div>
    }
}
