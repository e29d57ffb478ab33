//! Live preview document composition.

use crate::models::CodeStore;

/// Compose a standalone HTML document from the committed fragments.
///
/// Produces a minimal shell embedding the CSS in a style element, the
/// HTML as body content, and the JS in a script element. No escaping or
/// sandboxing is performed: the user is running their own code, and the
/// document executes with full privileges in whatever sink renders it.
///
/// The document is regenerated in full on every commit; the preview
/// iframe replaces its content wholesale rather than patching it.
pub fn compose(store: &CodeStore) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
           <meta charset=\"UTF-8\">\n\
           <style>{}</style>\n\
         </head>\n\
         <body>\n\
           {}\n\
           <script>{}</script>\n\
         </body>\n\
         </html>\n",
        store.css, store.html, store.js
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_embeds_all_fragments() {
        let store = CodeStore {
            html: "<p>hello</p>".to_string(),
            css: "p { color: red; }".to_string(),
            js: "console.log('hi');".to_string(),
        };
        let doc = compose(&store);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<style>p { color: red; }</style>"));
        assert!(doc.contains("<p>hello</p>"));
        assert!(doc.contains("<script>console.log('hi');</script>"));
    }

    #[test]
    fn test_compose_empty_store_is_still_a_document() {
        let doc = compose(&CodeStore::empty());
        assert!(doc.contains("<meta charset=\"UTF-8\">"));
        assert!(doc.contains("<style></style>"));
        assert!(doc.contains("<script></script>"));
    }

    #[test]
    fn test_compose_does_not_escape_content() {
        let store = CodeStore {
            html: "<div class=\"a\">&amp;</div>".to_string(),
            ..CodeStore::empty()
        };
        let doc = compose(&store);
        assert!(doc.contains("<div class=\"a\">&amp;</div>"));
    }
}
