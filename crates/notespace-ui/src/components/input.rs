//! Input Field Component
//!
//! Single-line text input with optional label and hint. Keyboard events
//! pass through so dialogs can bind Enter/Escape.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Optional keyboard handler (Enter-to-submit, Escape-to-cancel)
    #[props(default)]
    pub onkeydown: Option<EventHandler<KeyboardEvent>>,
    /// Placeholder text (displayed in muted italic)
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Hint text after the label (e.g., "(optional)")
    #[props(default)]
    pub hint: Option<String>,
    /// Input type (text, email, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Whether to grab focus on mount
    #[props(default = false)]
    pub autofocus: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Text input field following the design system
///
/// # Example
///
/// ```rust,ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: name(),
///         oninput: move |s| name.set(s),
///         label: "folder name".to_string(),
///         placeholder: "New folder".to_string()
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| format!("input-{}", rand_id()));
    let extra_class = props.class.as_deref().unwrap_or("");
    let input_class = if extra_class.is_empty() {
        "input-field".to_string()
    } else {
        format!("input-field {}", extra_class)
    };

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{id}",
                    "{label}"
                    if let Some(hint) = &props.hint {
                        span { class: "input-hint", " ({hint})" }
                    }
                }
            }
            input {
                id: "{id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                autofocus: props.autofocus,
                oninput: move |e| props.oninput.call(e.value()),
                onkeydown: move |e| {
                    if let Some(handler) = &props.onkeydown {
                        handler.call(e);
                    }
                },
            }
        }
    }
}

/// Generate a simple random ID for form elements
fn rand_id() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (duration.as_nanos() % 1_000_000) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rand_id_generates_number() {
        let id1 = rand_id();
        let id2 = rand_id();
        assert!(id1 < 1_000_000);
        assert!(id2 < 1_000_000);
    }
}
