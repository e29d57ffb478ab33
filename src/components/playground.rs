//! Main playground layout.
//!
//! Container component wiring the toolbar actions (Run, Export) to the
//! context, laying out the editor column, live preview, and Markdown
//! pane, and hosting the export dialog and toast stack.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::editors::Editors;
use crate::components::export::ExportModal;
use crate::components::icons as ic;
use crate::components::markdown::MarkdownPane;
use crate::components::preview::LivePreview;
use crate::components::toast::ToastStack;
use crate::config::APP_NAME;
use crate::models::ToastLevel;

stylance::import_crate_style!(css, "src/components/playground.module.css");

/// Playground shell: toolbar, three panes, dialog, toasts.
#[component]
pub fn Playground() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let run = move || {
        ctx.run();
        ctx.notify("Code executed successfully", ToastLevel::Success);
    };

    // Initial commit runs once so the preview reflects the seeded
    // snippets.
    let started = StoredValue::new(false);
    Effect::new(move || {
        if !started.get_value() {
            started.set_value(true);
            run();
        }
    });

    let open_export = move |_| {
        if ctx.store.with_untracked(|store| store.has_any()) {
            ctx.export_open.set(true);
        } else {
            ctx.notify("No code to export! Write some code first.", ToastLevel::Error);
        }
    };

    // Ctrl/Cmd+S runs the code instead of saving the page.
    let keydown = window_event_listener(ev::keydown, move |ev| {
        if (ev.ctrl_key() || ev.meta_key()) && ev.key() == "s" {
            ev.prevent_default();
            run();
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <div class=css::screen>
            <header class=css::toolbar>
                <span class=css::brand>{APP_NAME}</span>
                <div class=css::actions>
                    <button class=css::runButton on:click=move |_| run()>
                        <Icon icon=ic::RUN />
                        <span>" Run Code"</span>
                    </button>
                    <button class=css::exportButton on:click=open_export>
                        <Icon icon=ic::EXPORT />
                        <span>" Export"</span>
                    </button>
                </div>
            </header>

            <main class=css::panels>
                <section class=css::panel>
                    <Editors />
                </section>
                <section class=css::panelWide>
                    <LivePreview />
                </section>
                <section class=css::panel>
                    <MarkdownPane />
                </section>
            </main>

            <ExportModal />
            <ToastStack />
        </div>
    }
}
