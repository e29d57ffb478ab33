//! Editor pane components.
//!
//! The editor widgets are deliberately opaque to the rest of the app:
//! each pane exposes nothing but its buffer signal. Committing the
//! buffers into the store is the Run action's job, not the panes'.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::models::Fragment;

stylance::import_crate_style!(css, "src/components/editors.module.css");

/// Column of the three fragment editors.
#[component]
pub fn Editors() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <div class=css::column>
            {Fragment::ALL
                .into_iter()
                .map(|fragment| view! { <EditorPane fragment buffer=ctx.editors.buffer(fragment) /> })
                .collect_view()}
        </div>
    }
}

/// A single fragment editor: label header plus a plain textarea buffer.
#[component]
fn EditorPane(fragment: Fragment, buffer: RwSignal<String>) -> impl IntoView {
    view! {
        <div class=css::pane>
            <div class=css::header>{fragment.label()}</div>
            <textarea
                class=css::textarea
                spellcheck="false"
                prop:value=move || buffer.get()
                on:input:target=move |ev| buffer.set(ev.target().value())
            ></textarea>
        </div>
    }
}
