//! Export request and artifact types.

use super::code::{CodeStore, Fragment};

/// Per-fragment inclusion flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FragmentMask {
    pub html: bool,
    pub css: bool,
    pub js: bool,
}

impl FragmentMask {
    /// Every fragment selected.
    pub const ALL: FragmentMask = FragmentMask {
        html: true,
        css: true,
        js: true,
    };

    /// No fragment selected.
    pub const NONE: FragmentMask = FragmentMask {
        html: false,
        css: false,
        js: false,
    };

    /// Mask selecting exactly one fragment.
    pub fn only(fragment: Fragment) -> Self {
        let mut mask = Self::NONE;
        match fragment {
            Fragment::Html => mask.html = true,
            Fragment::Css => mask.css = true,
            Fragment::Js => mask.js = true,
        }
        mask
    }

    /// Mask of every fragment that currently has content.
    ///
    /// This is the mask combined exports are built from: "include
    /// everything available", ignoring any user selection.
    pub fn available(store: &CodeStore) -> Self {
        Self {
            html: store.has(Fragment::Html),
            css: store.has(Fragment::Css),
            js: store.has(Fragment::Js),
        }
    }

    /// Whether the mask selects a given fragment.
    pub fn includes(&self, fragment: Fragment) -> bool {
        match fragment {
            Fragment::Html => self.html,
            Fragment::Css => self.css,
            Fragment::Js => self.js,
        }
    }

    /// Whether at least one fragment is selected.
    pub fn any(&self) -> bool {
        self.html || self.css || self.js
    }
}

/// Export output format chosen in the export dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// One Markdown file with every available fragment.
    Combined,
    /// One Markdown file per selected fragment.
    Markdown,
    /// One raw source file per selected fragment.
    Files,
}

/// Ephemeral, user-supplied export parameters.
///
/// The project name is sanitized by the planner before any filename is
/// built; an empty sanitized name falls back to `untitled`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportRequest {
    pub project_name: String,
    pub format: ExportFormat,
    pub include: FragmentMask,
}

/// One exported file: name, content, and mime type.
///
/// Produced by the export planner, handed straight to the download
/// capability, never retained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub filename: String,
    pub content: String,
    pub mime_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_only_selects_one() {
        let mask = FragmentMask::only(Fragment::Css);
        assert!(!mask.includes(Fragment::Html));
        assert!(mask.includes(Fragment::Css));
        assert!(!mask.includes(Fragment::Js));
        assert!(mask.any());
    }

    #[test]
    fn test_mask_none_selects_nothing() {
        assert!(!FragmentMask::NONE.any());
        assert!(FragmentMask::ALL.any());
    }

    #[test]
    fn test_available_mask_tracks_store_content() {
        let store = CodeStore {
            html: "<p>x</p>".to_string(),
            css: "  ".to_string(),
            js: "f()".to_string(),
        };
        let mask = FragmentMask::available(&store);
        assert!(mask.html);
        assert!(!mask.css);
        assert!(mask.js);
    }
}
