//! Markdown snippet generation.
//!
//! Pure derivation from the committed code store: no DOM access, no
//! state. The output format is one section per included fragment, a
//! labeled heading followed by a fenced code block.

use crate::models::{CodeStore, Fragment, FragmentMask};

/// Render the selected fragments as Markdown.
///
/// For each fragment the mask selects whose trimmed content is
/// non-empty, appends a `### {heading}` line, a blank line, and the
/// content inside a fenced code block tagged with the fragment's
/// language, followed by a blank line. Sections always appear in HTML, CSS, JS
/// order regardless of how the mask was built. Selected-but-empty
/// fragments are silently omitted.
///
/// Returns the empty string when no section is produced; callers must
/// render their own placeholder rather than an empty code block.
///
/// Section output is associative: concatenating three single-fragment
/// renders equals one combined render.
pub fn render(store: &CodeStore, mask: FragmentMask) -> String {
    let mut markdown = String::new();

    for fragment in Fragment::ALL {
        if !mask.includes(fragment) || !store.has(fragment) {
            continue;
        }
        markdown.push_str(&format!(
            "### {}\n\n```{}\n{}\n```\n\n",
            fragment.heading(),
            fragment.language(),
            store.fragment(fragment)
        ));
    }

    markdown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(html: &str, css: &str, js: &str) -> CodeStore {
        CodeStore {
            html: html.to_string(),
            css: css.to_string(),
            js: js.to_string(),
        }
    }

    #[test]
    fn test_all_empty_renders_empty_string() {
        assert_eq!(render(&store("", "", ""), FragmentMask::ALL), "");
        assert_eq!(render(&store("  ", "\n", "\t"), FragmentMask::ALL), "");
    }

    #[test]
    fn test_single_fragment_section() {
        let out = render(&store("<p>x</p>", "", ""), FragmentMask::ALL);
        assert_eq!(out, "### 🌐 HTML\n\n```html\n<p>x</p>\n```\n\n");
    }

    #[test]
    fn test_mask_excludes_fragments() {
        let s = store("<p>x</p>", "a{}", "f()");
        let out = render(&s, FragmentMask::only(Fragment::Css));
        assert!(out.contains("```css\na{}\n```"));
        assert!(!out.contains("html"));
        assert!(!out.contains("javascript"));
    }

    #[test]
    fn test_sections_keep_canonical_order() {
        let s = store("<p>x</p>", "a{}", "f()");
        let out = render(&s, FragmentMask::ALL);
        let html_pos = out.find("🌐 HTML").unwrap();
        let css_pos = out.find("🎨 CSS").unwrap();
        let js_pos = out.find("📄 JavaScript").unwrap();
        assert!(html_pos < css_pos);
        assert!(css_pos < js_pos);
    }

    #[test]
    fn test_selected_but_empty_is_omitted() {
        let s = store("<p>x</p>", "", "f()");
        let out = render(&s, FragmentMask::ALL);
        assert!(!out.contains("🎨 CSS"));
        assert!(out.contains("🌐 HTML"));
        assert!(out.contains("📄 JavaScript"));
    }

    #[test]
    fn test_combined_equals_concatenated_singles() {
        let s = store("<p>x</p>", "a{}", "f()");
        let combined = render(&s, FragmentMask::ALL);
        let singles: String = Fragment::ALL
            .iter()
            .map(|&f| render(&s, FragmentMask::only(f)))
            .collect();
        assert_eq!(combined, singles);
    }
}
