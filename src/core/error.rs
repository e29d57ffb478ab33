//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! for each domain:
//!
//! - [`ExportError`] - Export planning validation failures
//! - [`ClipboardError`] - Clipboard write failures
//!
//! All errors are recoverable by the user: they are surfaced through
//! the toast notification layer and never mutate the code store or the
//! active view.

use thiserror::Error;

/// Export planning errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// Nothing to export at all: every fragment is empty.
    #[error("No code available to export!")]
    NoContent,
    /// Export requested with no fragment types selected.
    #[error("Please select at least one file to export!")]
    NoSelection,
}

/// Clipboard write errors.
///
/// Any thrown or rejected outcome from the browser clipboard API is
/// treated uniformly as a failure; the distinction below only matters
/// for console diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// The clipboard write promise rejected
    #[error("Failed to copy to clipboard")]
    WriteFailed,
}
