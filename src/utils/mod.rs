//! Utility modules for browser capability access.
//!
//! Provides:
//! - [`write_clipboard`] - Async clipboard writes
//! - [`download_file`] - Blob-based file downloads
//! - [`dom`] - Window/document accessors and console logging

mod clipboard;
pub mod dom;
mod download;

pub use clipboard::write_clipboard;
pub use download::download_file;
