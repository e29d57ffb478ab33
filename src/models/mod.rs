//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`CodeStore`], [`Fragment`] - Committed source fragments
//! - [`PreviewView`], [`reconcile`] - Markdown preview tab state
//! - [`ExportRequest`], [`Artifact`], [`FragmentMask`] - Export planning
//! - [`Toast`], [`ToastLevel`] - Notification messages

mod code;
mod export;
mod toast;
mod view;

pub use code::{CodeStore, Fragment};
pub use export::{Artifact, ExportFormat, ExportRequest, FragmentMask};
pub use toast::{Toast, ToastLevel};
pub use view::{PreviewView, reconcile};
