//! # Confirm Delete Dialog Component
//!
//! Two-button confirmation layered over an edit dialog before a delete
//! request is issued. It carries no network logic of its own: Delete
//! hands control to the parent dialog's delete routine, Cancel dismisses
//! the confirmation and returns to the edit dialog untouched.

use dioxus::prelude::*;

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDeleteDialogProps {
    /// Display label of the resource about to be deleted
    pub resource_name: String,

    /// Callback when deletion is confirmed
    #[props(default)]
    pub on_confirm: EventHandler<()>,

    /// Callback when the confirmation is dismissed
    #[props(default)]
    pub on_cancel: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Confirmation dialog for delete operations
#[component]
pub fn ConfirmDeleteDialog(props: ConfirmDeleteDialogProps) -> Element {
    rsx! {
        div {
            class: "dialog-overlay confirm-overlay",
            div {
                class: "dialog-panel confirm-panel",
                div {
                    class: "confirm-header",
                    span {
                        class: "confirm-icon",
                        "⚠"
                    }
                    h2 {
                        class: "dialog-title",
                        "Confirm Deletion"
                    }
                }
                p {
                    class: "confirm-message",
                    "Are you sure you want to delete "
                    strong { "\"{props.resource_name}\"" }
                    "? This cannot be undone."
                }
                div {
                    class: "dialog-footer",
                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: move |_| props.on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-danger",
                        onclick: move |_| props.on_confirm.call(()),
                        "Delete"
                    }
                }
            }
        }
    }
}
