//! # Store Dialog Component
//!
//! Edit dialog for key/value store entries. Entries come into being on
//! the backend, so there is no create mode: the key is always read-only,
//! only the value can change. The three server-side timestamps are shown
//! formatted for display and never written back.

use dioxus::prelude::*;

use console_api::StoreClient;
use console_core::{StoreEntry, format_utc};

use crate::components::dialogs::confirm_delete::ConfirmDeleteDialog;
use crate::components::dialogs::shell::DialogShell;
use crate::components::inputs::TextInput;

/// Apply the edited value, leaving key and timestamps untouched
fn apply_value(base: &StoreEntry, value: &str) -> StoreEntry {
    let mut entry = base.clone();
    entry.value = value.to_string();
    entry
}

// ============================================================================
// Store Dialog Props
// ============================================================================

/// Properties for the StoreDialog component
#[derive(Props, Clone, PartialEq)]
pub struct StoreDialogProps {
    /// The entry being edited
    pub entry: StoreEntry,
    /// Client for the store family
    pub client: StoreClient,
    /// Close callback carrying the reload flag
    pub on_close: EventHandler<bool>,
}

// ============================================================================
// Store Dialog Component
// ============================================================================

/// Store entry edit dialog
#[component]
pub fn StoreDialog(props: StoreDialogProps) -> Element {
    let mut value = use_signal(|| props.entry.value.clone());
    let mut confirming_delete = use_signal(|| false);

    let on_close = props.on_close;
    let title = format!("Edit {}", props.entry.key);

    let created = format_utc(&props.entry.created);
    let last_changed = format_utc(&props.entry.last_changed);
    let last_accessed = format_utc(&props.entry.last_accessed);

    let submit = {
        let base = props.entry.clone();
        let client = props.client.clone();
        move |_| {
            let entry = apply_value(&base, &value.read());
            let client = client.clone();
            spawn(async move {
                match client.update(&entry).await {
                    Ok(()) => on_close.call(true),
                    Err(error) => {
                        tracing::error!(%error, key = %entry.key, "store entry save failed");
                    }
                }
            });
        }
    };

    let confirm_delete = {
        let client = props.client.clone();
        let key = props.entry.key.clone();
        move |_| {
            let client = client.clone();
            let key = key.clone();
            spawn(async move {
                match client.delete(&key).await {
                    Ok(()) => on_close.call(true),
                    Err(error) => {
                        tracing::error!(%error, %key, "store entry delete failed");
                    }
                }
            });
        }
    };

    rsx! {
        DialogShell {
            title: title,
            on_dismiss: move |_| on_close.call(false),

            TextInput {
                label: "Key",
                value: props.entry.key.clone(),
                disabled: true,
            }
            TextInput {
                label: "Value",
                value: value.read().clone(),
                on_change: move |new_value| value.set(new_value),
            }
            TextInput {
                label: "Created",
                value: created,
                disabled: true,
            }
            TextInput {
                label: "Last Changed",
                value: last_changed,
                disabled: true,
            }
            TextInput {
                label: "Last Accessed",
                value: last_accessed,
                disabled: true,
            }

            div {
                class: "dialog-footer",
                button {
                    r#type: "button",
                    class: "btn btn-danger",
                    onclick: move |_| confirming_delete.set(true),
                    "Delete"
                }
                button {
                    r#type: "button",
                    class: "btn btn-primary",
                    onclick: submit,
                    "Save"
                }
                button {
                    r#type: "button",
                    class: "btn",
                    onclick: move |_| on_close.call(false),
                    "Close"
                }
            }
        }

        if *confirming_delete.read() {
            ConfirmDeleteDialog {
                resource_name: props.entry.key.clone(),
                on_confirm: confirm_delete,
                on_cancel: move |_| confirming_delete.set(false),
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_apply_value_touches_only_the_value() {
        let base = StoreEntry {
            key: "last_boot".to_string(),
            value: "ok".to_string(),
            created: "2024-05-01T06:30:00+00:00".to_string(),
            last_changed: "2024-05-02T08:00:00+00:00".to_string(),
            last_accessed: "2024-05-03T09:15:00+00:00".to_string(),
        };

        let updated = apply_value(&base, "degraded");
        assert_eq!(updated.value, "degraded");
        assert_eq!(updated.key, "last_boot");
        assert_eq!(updated.created, base.created);
        assert_eq!(updated.last_changed, base.last_changed);
        assert_eq!(updated.last_accessed, base.last_accessed);
    }
}
