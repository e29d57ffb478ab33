//! Live preview pane.
//!
//! Renders the composed document in an iframe via `srcdoc`: the whole
//! document is replaced on every commit, never patched. Injected
//! content runs with full document privileges inside the frame — the
//! user is executing their own code, which is the accepted trust
//! boundary here.

use leptos::prelude::*;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/preview.module.css");

/// Iframe pane showing the committed code as a running document.
#[component]
pub fn LivePreview() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <div class=css::pane>
            <div class=css::header>"Preview"</div>
            <iframe
                class=css::frame
                title="Live preview"
                srcdoc=move || ctx.preview_doc()
            ></iframe>
        </div>
    }
}
