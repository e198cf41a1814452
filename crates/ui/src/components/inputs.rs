//! # Input Components
//!
//! Reusable form controls for the console dialogs:
//! - **TextInput**: single-line text input with label, help and error text
//! - **TextArea**: multi-line buffer, used by the raw-JSON tab
//!
//! Both render through the embedded stylesheet's form classes and show
//! error text below the control when present.

use dioxus::prelude::*;

// ============================================================================
// TextInput Component
// ============================================================================

/// Properties for the TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Current value
    pub value: String,

    /// Label text displayed above the input
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text displayed below the input
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message (shown instead of help text when present)
    #[props(default)]
    pub error: Option<String>,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Callback when value changes
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = build_input_class(props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "input-group",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    "{label}"
                }
            }
            input {
                class: "{input_class}",
                r#type: "text",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |evt| props.on_change.call(evt.value()),
            }
            if let Some(error) = &props.error {
                p {
                    class: "input-error",
                    "{error}"
                }
            } else if let Some(help) = &props.help_text {
                p {
                    class: "input-help",
                    "{help}"
                }
            }
        }
    }
}

// ============================================================================
// TextArea Component
// ============================================================================

/// Properties for the TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    /// Current value
    pub value: String,

    /// Label text displayed above the textarea
    #[props(default)]
    pub label: Option<String>,

    /// Error message displayed below the textarea
    #[props(default)]
    pub error: Option<String>,

    /// Number of visible rows
    #[props(default = 4)]
    pub rows: i64,

    /// Whether the textarea is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Render with the monospace code styling
    #[props(default = false)]
    pub monospace: bool,

    /// Callback when value changes
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Multi-line text input component
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let textarea_class = build_textarea_class(props.error.is_some(), props.disabled, props.monospace);

    rsx! {
        div {
            class: "input-group",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    "{label}"
                }
            }
            textarea {
                class: "{textarea_class}",
                rows: "{props.rows}",
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |evt| props.on_change.call(evt.value()),
            }
            if let Some(error) = &props.error {
                p {
                    class: "input-error",
                    "{error}"
                }
            }
        }
    }
}

// ============================================================================
// Class Builders
// ============================================================================

/// Build the class list for a text input
fn build_input_class(has_error: bool, disabled: bool) -> String {
    let mut classes = vec!["console-input"];
    if has_error {
        classes.push("input-invalid");
    }
    if disabled {
        classes.push("input-disabled");
    }
    classes.join(" ")
}

/// Build the class list for a textarea
fn build_textarea_class(has_error: bool, disabled: bool, monospace: bool) -> String {
    let mut classes = vec!["console-input", "console-textarea"];
    if has_error {
        classes.push("input-invalid");
    }
    if disabled {
        classes.push("input-disabled");
    }
    if monospace {
        classes.push("input-code");
    }
    classes.join(" ")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_input_class_plain() {
        assert_eq!(build_input_class(false, false), "console-input");
    }

    #[test]
    fn test_build_input_class_error() {
        let class = build_input_class(true, false);
        assert!(class.contains("input-invalid"));
        assert!(!class.contains("input-disabled"));
    }

    #[test]
    fn test_build_input_class_disabled() {
        let class = build_input_class(false, true);
        assert!(class.contains("input-disabled"));
    }

    #[test]
    fn test_build_textarea_class_code() {
        let class = build_textarea_class(false, false, true);
        assert!(class.starts_with("console-input console-textarea"));
        assert!(class.contains("input-code"));
    }

    #[test]
    fn test_build_textarea_class_error_and_disabled() {
        let class = build_textarea_class(true, true, false);
        assert!(class.contains("input-invalid"));
        assert!(class.contains("input-disabled"));
        assert!(!class.contains("input-code"));
    }
}
