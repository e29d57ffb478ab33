//! Clipboard capability.
//!
//! Thin async wrapper over the browser Clipboard API. Any rejected
//! promise is collapsed into [`ClipboardError::WriteFailed`]; the copy
//! state machine treats every failure uniformly.

use wasm_bindgen_futures::JsFuture;

use super::dom;
use crate::core::error::ClipboardError;

/// Write text to the system clipboard.
///
/// Asynchronous: the returned future suspends until the browser
/// resolves or rejects the write. There is no cancellation of an
/// in-flight write.
pub async fn write_clipboard(text: &str) -> Result<(), ClipboardError> {
    let window = dom::window().ok_or(ClipboardError::NoWindow)?;
    let promise = window.navigator().clipboard().write_text(text);

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|_| ClipboardError::WriteFailed)
}
