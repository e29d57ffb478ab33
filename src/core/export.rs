//! Export planning: turning an export request into download artifacts.
//!
//! Planning is pure: it reads the committed store, never mutates it,
//! and a validation failure leaves every piece of application state
//! untouched.

use super::error::ExportError;
use super::markdown;
use crate::config::{DEFAULT_PROJECT_NAME, MARKDOWN_MIME};
use crate::models::{Artifact, CodeStore, ExportFormat, ExportRequest, Fragment, FragmentMask};

/// Sanitize a user-supplied project name for use in filenames.
///
/// Replaces every character outside `[A-Za-z0-9_-]` with `_`, collapses
/// runs of underscores, and strips leading/trailing underscores. The
/// result may be empty; [`plan`] substitutes the default name then.
pub fn sanitize_filename(name: &str) -> String {
    let mut sanitized = String::with_capacity(name.len());
    let mut prev_underscore = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '-' {
            sanitized.push(c);
            prev_underscore = false;
        } else if !prev_underscore {
            sanitized.push('_');
            prev_underscore = true;
        }
    }

    sanitized.trim_matches('_').to_string()
}

/// Build the ordered artifact list for an export request.
///
/// Validation (first failure wins):
/// 1. `Combined` requires at least one non-empty fragment, else
///    [`ExportError::NoContent`]. The request's per-fragment flags are
///    ignored: combined exports always include everything available.
/// 2. `Markdown`/`Files` require at least one selected fragment, else
///    [`ExportError::NoSelection`]. Selected-but-empty fragments are
///    silently skipped, so a successful plan can legally contain zero
///    artifacts; callers report the actual count.
///
/// Artifacts are always ordered HTML, CSS, JS; combined mode yields
/// exactly one artifact named `{name}.code.md`.
pub fn plan(request: &ExportRequest, store: &CodeStore) -> Result<Vec<Artifact>, ExportError> {
    let name = project_name(&request.project_name);

    match request.format {
        ExportFormat::Combined => {
            if !store.has_any() {
                return Err(ExportError::NoContent);
            }
            let content = markdown::render(store, FragmentMask::available(store));
            Ok(vec![Artifact {
                filename: format!("{name}.code.md"),
                content,
                mime_type: MARKDOWN_MIME.to_string(),
            }])
        }
        ExportFormat::Markdown => {
            plan_per_fragment(request, store, |fragment| Artifact {
                filename: format!("{name}.{}.md", fragment.extension()),
                content: markdown::render(store, FragmentMask::only(fragment)),
                mime_type: MARKDOWN_MIME.to_string(),
            })
        }
        ExportFormat::Files => {
            plan_per_fragment(request, store, |fragment| Artifact {
                filename: format!("{name}.{}", fragment.extension()),
                content: store.fragment(fragment).to_string(),
                mime_type: fragment.mime_type().to_string(),
            })
        }
    }
}

/// Sanitized project name with the `untitled` fallback.
fn project_name(raw: &str) -> String {
    let sanitized = sanitize_filename(raw.trim());
    if sanitized.is_empty() {
        DEFAULT_PROJECT_NAME.to_string()
    } else {
        sanitized
    }
}

/// Shared multi-file path: validate the selection, then emit one
/// artifact per selected non-empty fragment in canonical order.
fn plan_per_fragment(
    request: &ExportRequest,
    store: &CodeStore,
    build: impl Fn(Fragment) -> Artifact,
) -> Result<Vec<Artifact>, ExportError> {
    if !request.include.any() {
        return Err(ExportError::NoSelection);
    }

    Ok(Fragment::ALL
        .into_iter()
        .filter(|&f| request.include.includes(f) && store.has(f))
        .map(build)
        .collect())
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

    fn request(name: &str, format: ExportFormat, include: FragmentMask) -> ExportRequest {
        ExportRequest {
            project_name: name.to_string(),
            format,
            include,
        }
    }

    #[test]
    fn test_sanitize_replaces_and_collapses() {
        assert_eq!(sanitize_filename("My Proj!! 01"), "My_Proj_01");
        assert_eq!(sanitize_filename("a--b"), "a--b");
        assert_eq!(sanitize_filename("hello world"), "hello_world");
    }

    #[test]
    fn test_sanitize_strips_to_empty() {
        assert_eq!(sanitize_filename("___"), "");
        assert_eq!(sanitize_filename("!!!"), "");
        assert_eq!(sanitize_filename(""), "");
    }

    #[test]
    fn test_combined_defaults_to_untitled() {
        let s = store("<p>x</p>", "", "");
        let artifacts = plan(
            &request("", ExportFormat::Combined, FragmentMask::NONE),
            &s,
        )
        .unwrap();
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].filename, "untitled.code.md");
        assert_eq!(artifacts[0].mime_type, "text/markdown");
        assert!(artifacts[0].content.contains("🌐 HTML"));
        assert!(!artifacts[0].content.contains("🎨 CSS"));
    }

    #[test]
    fn test_combined_ignores_include_flags() {
        let s = store("<p>x</p>", "a{}", "");
        let artifacts = plan(
            &request(
                "demo",
                ExportFormat::Combined,
                FragmentMask::only(Fragment::Js),
            ),
            &s,
        )
        .unwrap();
        assert_eq!(artifacts.len(), 1);
        assert!(artifacts[0].content.contains("🌐 HTML"));
        assert!(artifacts[0].content.contains("🎨 CSS"));
    }

    #[test]
    fn test_combined_empty_store_is_no_content() {
        let result = plan(
            &request("demo", ExportFormat::Combined, FragmentMask::ALL),
            &store("", "", ""),
        );
        assert_eq!(result, Err(ExportError::NoContent));
    }

    #[test]
    fn test_files_require_a_selection() {
        let result = plan(
            &request("demo", ExportFormat::Files, FragmentMask::NONE),
            &store("<p>x</p>", "", ""),
        );
        assert_eq!(result, Err(ExportError::NoSelection));
    }

    #[test]
    fn test_files_ordered_html_then_css() {
        let s = store("<p>x</p>", "a{}", "f()");
        let include = FragmentMask {
            html: true,
            css: true,
            js: false,
        };
        let artifacts = plan(&request("demo", ExportFormat::Files, include), &s).unwrap();
        assert_eq!(artifacts.len(), 2);
        assert_eq!(artifacts[0].filename, "demo.html");
        assert_eq!(artifacts[0].content, "<p>x</p>");
        assert_eq!(artifacts[0].mime_type, "text/html");
        assert_eq!(artifacts[1].filename, "demo.css");
        assert_eq!(artifacts[1].mime_type, "text/css");
    }

    #[test]
    fn test_markdown_format_wraps_each_fragment() {
        let s = store("", "a{}", "");
        let artifacts = plan(
            &request("site", ExportFormat::Markdown, FragmentMask::ALL),
            &s,
        )
        .unwrap();
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].filename, "site.css.md");
        assert_eq!(artifacts[0].mime_type, "text/markdown");
        assert!(artifacts[0].content.contains("```css\na{}\n```"));
    }

    #[test]
    fn test_selected_but_empty_yields_zero_artifacts() {
        // Validation passed (a selection exists), but nothing matches:
        // zero-artifact success, not an error.
        let s = store("<p>x</p>", "", "");
        let artifacts = plan(
            &request(
                "demo",
                ExportFormat::Files,
                FragmentMask::only(Fragment::Js),
            ),
            &s,
        )
        .unwrap();
        assert!(artifacts.is_empty());
    }

    #[test]
    fn test_plan_does_not_mutate_store() {
        let s = store("<p>x</p>", "a{}", "f()");
        let before = s.clone();
        let _ = plan(&request("demo", ExportFormat::Files, FragmentMask::ALL), &s);
        assert_eq!(s, before);
    }
}
