//! Export dialog component.
//!
//! Collects the ephemeral export request (project name, format,
//! fragment selection), hands it to the planner, and feeds the
//! resulting artifacts to the download capability. Planning failures
//! surface as toasts and leave every other piece of state alone.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::plan;
use crate::models::{ExportFormat, ExportRequest, Fragment, FragmentMask, ToastLevel};
use crate::utils::download_file;

stylance::import_crate_style!(css, "src/components/export.module.css");

/// Modal export dialog.
///
/// Mounted permanently, shown while `ctx.export_open` is set. Each time
/// it opens, the fragment checkboxes are re-seeded from current
/// availability: available fragments start checked, empty ones start
/// unchecked and disabled.
#[component]
pub fn ExportModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let project_name = RwSignal::new(String::new());
    let format = RwSignal::new(ExportFormat::Combined);
    let include_html = RwSignal::new(false);
    let include_css = RwSignal::new(false);
    let include_js = RwSignal::new(false);
    let availability = RwSignal::new(FragmentMask::NONE);

    // Re-seed the selection from availability on every open.
    Effect::new(move || {
        if ctx.export_open.get() {
            let mask = ctx.store.with_untracked(FragmentMask::available);
            availability.set(mask);
            include_html.set(mask.html);
            include_css.set(mask.css);
            include_js.set(mask.js);
        }
    });

    let include_signal = move |fragment: Fragment| match fragment {
        Fragment::Html => include_html,
        Fragment::Css => include_css,
        Fragment::Js => include_js,
    };

    let on_confirm = move |_| {
        let request = ExportRequest {
            project_name: project_name.get_untracked(),
            format: format.get_untracked(),
            include: FragmentMask {
                html: include_html.get_untracked(),
                css: include_css.get_untracked(),
                js: include_js.get_untracked(),
            },
        };
        let planned = ctx.store.with_untracked(|store| plan(&request, store));
        match planned {
            Ok(artifacts) if artifacts.is_empty() => {
                // Legal zero-artifact success: the selection was valid
                // but every selected fragment is empty. Keep the dialog
                // open so the user can adjust it.
                ctx.notify(
                    "Selected files have no content to export",
                    ToastLevel::Info,
                );
            }
            Ok(artifacts) => {
                for artifact in &artifacts {
                    download_file(&artifact.filename, &artifact.content, &artifact.mime_type);
                }
                ctx.export_open.set(false);
                ctx.notify(
                    format!("{} file(s) downloaded successfully!", artifacts.len()),
                    ToastLevel::Success,
                );
            }
            Err(e) => ctx.notify(e.to_string(), ToastLevel::Error),
        }
    };

    let format_option = move |value: ExportFormat, label: &'static str, hint: &'static str| {
        view! {
            <label class=css::formatOption>
                <input
                    type="radio"
                    name="exportFormat"
                    prop:checked=move || format.get() == value
                    on:change=move |_| format.set(value)
                />
                <span class=css::formatLabel>{label}</span>
                <span class=css::formatHint>{hint}</span>
            </label>
        }
    };

    let include_row = move |fragment: Fragment| {
        let checked = include_signal(fragment);
        let enabled = move || availability.get().includes(fragment);
        let row_class = move || {
            if enabled() {
                css::checkRow.to_string()
            } else {
                format!("{} {}", css::checkRow, css::checkRowDisabled)
            }
        };
        view! {
            <label class=row_class>
                <input
                    type="checkbox"
                    prop:checked=move || checked.get()
                    prop:disabled=move || !enabled()
                    on:change:target=move |ev| checked.set(ev.target().checked())
                />
                <span>{fragment.label()}</span>
            </label>
        }
    };

    view! {
        <Show when=move || ctx.export_open.get()>
            <div class=css::overlay on:click=move |_| ctx.export_open.set(false)>
                <div class=css::dialog on:click=|ev| ev.stop_propagation()>
                    <div class=css::header>
                        <h2 class=css::title>"Export Project"</h2>
                        <button
                            class=css::closeButton
                            title="Close"
                            on:click=move |_| ctx.export_open.set(false)
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    </div>

                    <div class=css::section>
                        <div class=css::fieldLabel>"Project name"</div>
                        <input
                            class=css::nameInput
                            type="text"
                            placeholder="untitled"
                            prop:value=move || project_name.get()
                            on:input:target=move |ev| project_name.set(ev.target().value())
                        />
                    </div>

                    <div class=css::section>
                        <div class=css::fieldLabel>"Format"</div>
                        {format_option(
                            ExportFormat::Combined,
                            "Combined Markdown",
                            "one .code.md with everything",
                        )}
                        {format_option(
                            ExportFormat::Markdown,
                            "Markdown files",
                            "one .md per selected file",
                        )}
                        {format_option(
                            ExportFormat::Files,
                            "Source files",
                            "raw .html / .css / .js",
                        )}
                    </div>

                    // Combined mode always exports everything available,
                    // so the selection section is hidden for it.
                    <Show when=move || format.get() != ExportFormat::Combined>
                        <div class=css::section>
                            <div class=css::fieldLabel>"Files to export"</div>
                            {Fragment::ALL.into_iter().map(include_row).collect_view()}
                        </div>
                    </Show>

                    <div class=css::footer>
                        <button
                            class=css::cancelButton
                            on:click=move |_| ctx.export_open.set(false)
                        >
                            "Cancel"
                        </button>
                        <button class=css::confirmButton on:click=on_confirm>
                            <Icon icon=ic::EXPORT />
                            <span>" Export"</span>
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
