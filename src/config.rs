//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the
//! application. Default snippets are loaded at compile time using
//! `include_str!`.

// =============================================================================
// Default Snippets (loaded at compile time)
// =============================================================================

/// Default HTML fragment seeded into the editor on load.
pub const DEFAULT_HTML: &str = include_str!("../assets/snippets/default.html");

/// Default CSS fragment seeded into the editor on load.
pub const DEFAULT_CSS: &str = include_str!("../assets/snippets/default.css");

/// Default JS fragment seeded into the editor on load.
pub const DEFAULT_JS: &str = include_str!("../assets/snippets/default.js");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the toolbar.
pub const APP_NAME: &str = "CodePorter";

// =============================================================================
// Export Configuration
// =============================================================================

/// Fallback project name when the sanitized user input is empty.
pub const DEFAULT_PROJECT_NAME: &str = "untitled";

/// Mime type for exported Markdown artifacts.
pub const MARKDOWN_MIME: &str = "text/markdown";

// =============================================================================
// Timing
// =============================================================================

/// How long the "Copied!" feedback stays on the copy button.
pub const COPY_FEEDBACK_MS: u32 = 2_000;

/// How long a toast notification stays visible.
pub const TOAST_DURATION_MS: u32 = 3_000;
