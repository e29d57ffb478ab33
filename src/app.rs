//! Root application module.
//!
//! Contains the main App component, AppContext definition, EditorBuffers,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::Playground;
use crate::config::{DEFAULT_CSS, DEFAULT_HTML, DEFAULT_JS};
use crate::core::{markdown, preview};
use crate::models::{CodeStore, Fragment, PreviewView, Toast, ToastLevel, reconcile};

// ============================================================================
// EditorBuffers
// ============================================================================

/// Live editor contents, one buffer per fragment.
///
/// These are the uncommitted texts the user is typing into. They only
/// reach the rest of the application through [`AppContext::run`], which
/// snapshots all three at once into the [`CodeStore`].
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which
/// are cheap to copy (they're just pointers to the underlying reactive
/// state).
#[derive(Clone, Copy)]
pub struct EditorBuffers {
    pub html: RwSignal<String>,
    pub css: RwSignal<String>,
    pub js: RwSignal<String>,
}

impl EditorBuffers {
    /// Creates editor buffers seeded with the default snippets.
    pub fn new() -> Self {
        Self {
            html: RwSignal::new(DEFAULT_HTML.to_string()),
            css: RwSignal::new(DEFAULT_CSS.to_string()),
            js: RwSignal::new(DEFAULT_JS.to_string()),
        }
    }

    /// The buffer signal backing a fragment's editor pane.
    pub fn buffer(&self, fragment: Fragment) -> RwSignal<String> {
        match fragment {
            Fragment::Html => self.html,
            Fragment::Css => self.css,
            Fragment::Js => self.js,
        }
    }

    /// Snapshot all three buffers at once.
    fn snapshot(&self) -> CodeStore {
        CodeStore {
            html: self.html.get_untracked(),
            css: self.css.get_untracked(),
            js: self.js.get_untracked(),
        }
    }
}

impl Default for EditorBuffers {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can
/// be accessed from any child component using
/// `use_context::<AppContext>()`.
///
/// # Architecture
///
/// The committed [`CodeStore`] is the single source of truth; the live
/// preview document, the Markdown preview, and tab availability are all
/// derived from it reactively. The editor buffers stay independent
/// until the user runs the code.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Live (uncommitted) editor contents.
    pub editors: EditorBuffers,

    /// Last-committed code snapshot.
    pub store: RwSignal<CodeStore>,

    /// Active Markdown preview tab.
    pub active_view: RwSignal<PreviewView>,

    /// Pending toast notifications.
    pub toasts: RwSignal<Vec<Toast>>,

    /// Whether the export dialog is open.
    pub export_open: RwSignal<bool>,
}

impl AppContext {
    /// Creates a new application context.
    ///
    /// The store starts empty (nothing committed yet), the active view
    /// is `Combined`, and the editors hold the default snippets.
    pub fn new() -> Self {
        Self {
            editors: EditorBuffers::new(),
            store: RwSignal::new(CodeStore::empty()),
            active_view: RwSignal::new(PreviewView::Combined),
            toasts: RwSignal::new(Vec::new()),
            export_open: RwSignal::new(false),
        }
    }

    /// Commit the editor buffers into the store (the Run action).
    ///
    /// Replaces the snapshot unconditionally, then reconciles the
    /// active view against the new availability before any observer
    /// runs: the store update and the view fallback land in the same
    /// synchronous step, so no inconsistent intermediate state is
    /// observable.
    pub fn run(&self) {
        let snapshot = self.editors.snapshot();
        let next_view = reconcile(self.active_view.get_untracked(), &snapshot);

        self.store.set(snapshot);
        if self.active_view.get_untracked() != next_view {
            self.active_view.set(next_view);
        }
    }

    /// Switch the Markdown preview tab.
    ///
    /// No-op when the requested view has no available content.
    pub fn switch_view(&self, view: PreviewView) {
        let available = self.store.with_untracked(|store| view.is_available(store));
        if available {
            self.active_view.set(view);
        }
    }

    /// Markdown for the active view, tracked (drives the preview pane).
    pub fn active_markdown(&self) -> String {
        let view = self.active_view.get();
        self.store.with(|store| markdown::render(store, view.mask()))
    }

    /// Markdown for the active view at this instant, untracked (used
    /// by event handlers like copy).
    pub fn active_markdown_untracked(&self) -> String {
        let view = self.active_view.get_untracked();
        self.store
            .with_untracked(|store| markdown::render(store, view.mask()))
    }

    /// Full preview document for the iframe, tracked.
    pub fn preview_doc(&self) -> String {
        self.store.with(preview::compose)
    }

    /// Show a toast notification.
    pub fn notify(&self, message: impl Into<String>, level: ToastLevel) {
        self.toasts.update(|toasts| toasts.push(Toast::new(message, level)));
    }

    /// Remove a toast by ID (called when its dismiss timer fires).
    pub fn dismiss_toast(&self, id: usize) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the main Playground component
#[component]
pub fn App() -> impl IntoView {
    // Create and provide application context
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #1a1c24;
                    color: #e0e0e0;
                    font-family: sans-serif;
                ">
                    <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <p style="color: #a0a0a0; margin-bottom: 2rem;">
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul style="color: #ff6b6b; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <Playground />
        </ErrorBoundary>
    }
}
