//! Source fragment types and the committed code snapshot.

/// One of the three source texts held in the [`CodeStore`].
///
/// A fragment knows everything filename- and rendering-related about
/// itself: display label, Markdown fence language, native mime type,
/// and file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fragment {
    Html,
    Css,
    Js,
}

impl Fragment {
    /// Canonical fragment order: HTML, then CSS, then JS.
    ///
    /// Every derived output (Markdown sections, export artifacts) walks
    /// fragments in this order regardless of selection order.
    pub const ALL: [Fragment; 3] = [Fragment::Html, Fragment::Css, Fragment::Js];

    /// Display label for tabs and editor pane headers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Js => "JavaScript",
        }
    }

    /// Markdown section heading, including the emoji marker.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Html => "🌐 HTML",
            Self::Css => "🎨 CSS",
            Self::Js => "📄 JavaScript",
        }
    }

    /// Language tag used on fenced code blocks.
    pub fn language(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Css => "css",
            Self::Js => "javascript",
        }
    }

    /// Native content type for raw file export.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Html => "text/html",
            Self::Css => "text/css",
            Self::Js => "text/javascript",
        }
    }

    /// File extension (without the dot).
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Css => "css",
            Self::Js => "js",
        }
    }
}

/// Last-committed snapshot of the three editor buffers.
///
/// This is the single source of truth every dependent view derives
/// from: the live preview document, the Markdown preview, tab
/// availability, and the export planner all read from here. The store
/// is only ever replaced wholesale by a commit (the Run action) —
/// there are no partial updates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeStore {
    pub html: String,
    pub css: String,
    pub js: String,
}

impl CodeStore {
    /// Create an empty store (session start).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Content of a single fragment.
    pub fn fragment(&self, fragment: Fragment) -> &str {
        match fragment {
            Fragment::Html => &self.html,
            Fragment::Css => &self.css,
            Fragment::Js => &self.js,
        }
    }

    /// Whether a fragment has any non-whitespace content.
    pub fn has(&self, fragment: Fragment) -> bool {
        !self.fragment(fragment).trim().is_empty()
    }

    /// Whether any fragment has content at all.
    pub fn has_any(&self) -> bool {
        Fragment::ALL.iter().any(|&f| self.has(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_metadata() {
        assert_eq!(Fragment::Html.extension(), "html");
        assert_eq!(Fragment::Css.mime_type(), "text/css");
        assert_eq!(Fragment::Js.language(), "javascript");
        assert_eq!(Fragment::Js.label(), "JavaScript");
    }

    #[test]
    fn test_empty_store_has_nothing() {
        let store = CodeStore::empty();
        assert!(!store.has_any());
        for fragment in Fragment::ALL {
            assert!(!store.has(fragment));
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let store = CodeStore {
            html: "   \n\t".to_string(),
            ..CodeStore::empty()
        };
        assert!(!store.has(Fragment::Html));
        assert!(!store.has_any());
    }

    #[test]
    fn test_single_fragment_makes_store_non_empty() {
        let store = CodeStore {
            css: "body { margin: 0; }".to_string(),
            ..CodeStore::empty()
        };
        assert!(store.has(Fragment::Css));
        assert!(!store.has(Fragment::Html));
        assert!(store.has_any());
    }
}
