//! Breadcrumb Navigation Component
//!
//! Renders the root-first folder trail produced by the workspace store.
//! Every segment except the last is clickable; the last one is the
//! current location and renders as plain text.

use dioxus::prelude::*;
use notespace_core::{Crumb, FolderId};

/// The page heading for a trail: the label of its last segment.
///
/// Empty trails fall back to the workspace root label.
pub fn trail_title(trail: &[Crumb]) -> &str {
    trail
        .last()
        .map(|crumb| crumb.label.as_str())
        .unwrap_or("All notes")
}

/// Properties for the Breadcrumb component
#[derive(Clone, PartialEq, Props)]
pub struct BreadcrumbProps {
    /// Root-first trail, e.g. from `Workspace::trail`
    pub trail: Vec<Crumb>,
    /// Called with the segment's folder id (`None` = workspace root)
    pub on_navigate: EventHandler<Option<FolderId>>,
}

/// Breadcrumb trail across the top of a folder page
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Breadcrumb {
///         trail: workspace.trail(&folder_id),
///         on_navigate: move |target| open_folder(target),
///     }
/// }
/// ```
#[component]
pub fn Breadcrumb(props: BreadcrumbProps) -> Element {
    let on_navigate = props.on_navigate;
    let last = props.trail.len().saturating_sub(1);

    rsx! {
        nav { class: "breadcrumb", "aria-label": "Folder path",
            for (index, crumb) in props.trail.into_iter().enumerate() {
                if index > 0 {
                    span { class: "crumb-separator", "/" }
                }
                if index == last {
                    span { class: "crumb-current", "{crumb.label}" }
                } else {
                    button {
                        class: "crumb-link",
                        onclick: {
                            let target = crumb.id.clone();
                            move |_| on_navigate.call(target.clone())
                        },
                        "{crumb.label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_title_is_last_label() {
        let trail = vec![
            Crumb::root(),
            Crumb::folder(FolderId::new(), "Reports"),
            Crumb::folder(FolderId::new(), "Archive"),
        ];
        assert_eq!(trail_title(&trail), "Archive");
    }

    #[test]
    fn trail_title_of_root_only() {
        assert_eq!(trail_title(&[Crumb::root()]), "All notes");
    }

    #[test]
    fn trail_title_of_empty_trail_falls_back() {
        assert_eq!(trail_title(&[]), "All notes");
    }
}
