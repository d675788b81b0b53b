//! Image Indicator Component
//!
//! Small badge shown on note rows that embed images. Hidden entirely for
//! notes without any, so lists stay quiet by default.

use dioxus::prelude::*;

/// Accessible label for an attachment count, `None` when nothing should
/// be shown.
pub fn indicator_label(count: u32) -> Option<String> {
    match count {
        0 => None,
        1 => Some("1 image attached".to_string()),
        n => Some(format!("{} images attached", n)),
    }
}

/// Properties for the ImageIndicator component
#[derive(Clone, PartialEq, Props)]
pub struct ImageIndicatorProps {
    /// Number of embedded images
    pub count: u32,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Badge showing that a note embeds images
///
/// Renders nothing at count 0, just the icon at 1, and icon plus count
/// above that.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ImageIndicator { count: note.image_count }
/// }
/// ```
#[component]
pub fn ImageIndicator(props: ImageIndicatorProps) -> Element {
    let Some(label) = indicator_label(props.count) else {
        return rsx! {};
    };
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "image-indicator".to_string()
    } else {
        format!("image-indicator {}", extra_class)
    };

    rsx! {
        span {
            class: "{full_class}",
            title: "{label}",
            role: "img",
            "aria-label": "{label}",
            span { class: "indicator-icon", "\u{1F5BC}" }
            if props.count > 1 {
                span { class: "indicator-count", "{props.count}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_images_shows_nothing() {
        assert_eq!(indicator_label(0), None);
    }

    #[test]
    fn one_image_is_singular() {
        assert_eq!(indicator_label(1), Some("1 image attached".to_string()));
    }

    #[test]
    fn many_images_are_plural() {
        assert_eq!(indicator_label(4), Some("4 images attached".to_string()));
    }
}
