//! File download capability.
//!
//! Triggers a browser download by wrapping content in a Blob and
//! clicking a synthetic anchor. Fire-and-forget from the caller's
//! perspective: failures are logged to the console and never alter
//! application state.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::dom;

/// Download `content` as a file named `filename` with the given mime
/// type.
pub fn download_file(filename: &str, content: &str, mime_type: &str) {
    if let Err(e) = try_download(filename, content, mime_type) {
        dom::console_error(&format!("download of '{filename}' failed: {e:?}"));
    }
}

fn try_download(filename: &str, content: &str, mime_type: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(content));

    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;

    let document = dom::document().ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("anchor element cast failed"))?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();

    Url::revoke_object_url(&url)
}
