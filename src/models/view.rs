//! Preview view selection and tab availability rules.

use super::code::{CodeStore, Fragment};
use super::export::FragmentMask;

/// Which view drives the Markdown preview and the default copy target.
///
/// `Combined` is the fallback: it is the initial view, and the view the
/// state is forced back to whenever the active fragment loses its
/// backing content after a commit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreviewView {
    #[default]
    Combined,
    Html,
    Css,
    Js,
}

impl PreviewView {
    /// Tab display order.
    pub const ALL: [PreviewView; 4] = [
        PreviewView::Combined,
        PreviewView::Html,
        PreviewView::Css,
        PreviewView::Js,
    ];

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Combined => "Combined",
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Js => "JS",
        }
    }

    /// Label used in the empty-state placeholder ("No {label} code
    /// available...").
    pub fn empty_label(&self) -> &'static str {
        match self {
            Self::Combined => "code",
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Js => "JS",
        }
    }

    /// The fragment backing this view, if it is a single-fragment view.
    pub fn fragment(&self) -> Option<Fragment> {
        match self {
            Self::Combined => None,
            Self::Html => Some(Fragment::Html),
            Self::Css => Some(Fragment::Css),
            Self::Js => Some(Fragment::Js),
        }
    }

    /// Inclusion mask the Markdown renderer uses for this view.
    pub fn mask(&self) -> FragmentMask {
        match self.fragment() {
            None => FragmentMask::ALL,
            Some(fragment) => FragmentMask::only(fragment),
        }
    }

    /// Whether this view's tab is selectable given the current store.
    ///
    /// Fragment tabs require their fragment to be non-empty; `Combined`
    /// requires at least one non-empty fragment.
    pub fn is_available(&self, store: &CodeStore) -> bool {
        match self.fragment() {
            None => store.has_any(),
            Some(fragment) => store.has(fragment),
        }
    }
}

/// Active-view invariant after a commit.
///
/// A fragment view whose content disappeared falls back to `Combined`;
/// `Combined` itself is always a legal resting state, even when every
/// fragment is empty.
pub fn reconcile(active: PreviewView, store: &CodeStore) -> PreviewView {
    match active {
        PreviewView::Combined => PreviewView::Combined,
        view if view.is_available(store) => view,
        _ => PreviewView::Combined,
    }
}
