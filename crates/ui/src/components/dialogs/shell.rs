//! # Dialog Shell Component
//!
//! Shared chrome for the edit dialogs: a fixed overlay, the panel with
//! header and close button, and the two-button tab strip switching
//! between the structured fields and the raw JSON buffer.

use dioxus::prelude::*;

use crate::state::EditTab;

// ============================================================================
// Dialog Shell
// ============================================================================

/// Properties for the DialogShell component
#[derive(Props, Clone, PartialEq)]
pub struct DialogShellProps {
    /// Title shown in the dialog header
    pub title: String,
    /// Called by the header close button
    pub on_dismiss: EventHandler<()>,
    /// Dialog body content
    pub children: Element,
}

/// Modal overlay and panel wrapping a dialog body
///
/// Backdrop clicks never dismiss; closing is explicit through the
/// header button or the dialog's own controls.
#[component]
pub fn DialogShell(props: DialogShellProps) -> Element {
    rsx! {
        div {
            class: "dialog-overlay",
            div {
                class: "dialog-panel",
                div {
                    class: "dialog-header",
                    h2 {
                        class: "dialog-title",
                        "{props.title}"
                    }
                    button {
                        r#type: "button",
                        class: "dialog-close",
                        onclick: move |_| props.on_dismiss.call(()),
                        "✕"
                    }
                }
                div {
                    class: "dialog-body",
                    {props.children}
                }
            }
        }
    }
}

// ============================================================================
// Edit Tabs
// ============================================================================

/// Tab strip for switching between the structured and raw input surfaces
#[component]
pub fn EditTabs(active: EditTab, on_change: EventHandler<EditTab>) -> Element {
    rsx! {
        div {
            class: "tab-strip",
            for tab in EditTab::all() {
                button {
                    r#type: "button",
                    class: if tab == active { "tab-button tab-active" } else { "tab-button" },
                    onclick: move |_| on_change.call(tab),
                    "{tab.label()}"
                }
            }
        }
    }
}
