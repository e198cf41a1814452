//! # Endpoint Dialog Component
//!
//! Create/edit dialog for endpoints with two input surfaces: structured
//! form fields and a raw JSON buffer seeded from the current object.
//! The identifier is only editable on create; the user id and the
//! decoded category and capability lists ride along unshown and survive
//! a form submit untouched.

use dioxus::prelude::*;

use console_api::EndpointClient;
use console_core::{ConsoleResult, Endpoint};

use crate::components::dialogs::confirm_delete::ConfirmDeleteDialog;
use crate::components::dialogs::shell::{DialogShell, EditTabs};
use crate::components::inputs::{TextArea, TextInput};
use crate::state::{DialogMode, EditTab, parse_raw, to_raw_buffer};

// ============================================================================
// Form State
// ============================================================================

/// Values of the structured-tab fields
#[derive(Debug, Clone, Default, PartialEq)]
struct EndpointFormState {
    endpoint_id: String,
    friendly_name: String,
    description: String,
    manufacturer_name: String,
}

impl EndpointFormState {
    /// Seed the form from an endpoint
    fn from_endpoint(endpoint: &Endpoint) -> Self {
        Self {
            endpoint_id: endpoint.endpoint_id.clone(),
            friendly_name: endpoint.friendly_name.clone(),
            description: endpoint.description.clone(),
            manufacturer_name: endpoint.manufacturer_name.clone(),
        }
    }

    /// Merge the field values into the resource, preserving everything
    /// the form does not show. An empty identifier never overwrites an
    /// existing one.
    fn merge_into(&self, base: &Endpoint) -> Endpoint {
        let mut endpoint = base.clone();
        if !self.endpoint_id.is_empty() {
            endpoint.endpoint_id = self.endpoint_id.clone();
        }
        endpoint.friendly_name = self.friendly_name.clone();
        endpoint.description = self.description.clone();
        endpoint.manufacturer_name = self.manufacturer_name.clone();
        endpoint
    }
}

/// Display label for titles and the delete confirmation
fn display_label(endpoint: &Endpoint) -> String {
    if endpoint.friendly_name.is_empty() {
        endpoint.endpoint_id.clone()
    } else {
        endpoint.friendly_name.clone()
    }
}

/// The record a save submits. Last active tab wins: the form merged over
/// the resource, or the raw buffer parsed as a full replacement. A
/// buffer that does not decode yields the error shown in the banner and
/// nothing is sent.
fn build_submission(
    tab: EditTab,
    form: &EndpointFormState,
    raw_buffer: &str,
    base: &Endpoint,
) -> ConsoleResult<Endpoint> {
    match tab {
        EditTab::Form => Ok(form.merge_into(base)),
        EditTab::Raw => parse_raw(raw_buffer),
    }
}

// ============================================================================
// Endpoint Dialog Props
// ============================================================================

/// Properties for the EndpointDialog component
#[derive(Props, Clone, PartialEq)]
pub struct EndpointDialogProps {
    /// The endpoint being edited, or an empty draft in create mode
    pub endpoint: Endpoint,
    /// Create or edit
    pub mode: DialogMode,
    /// Client for the endpoint family
    pub client: EndpointClient,
    /// Close callback carrying the reload flag
    pub on_close: EventHandler<bool>,
}

// ============================================================================
// Endpoint Dialog Component
// ============================================================================

/// Endpoint create/edit dialog
#[component]
pub fn EndpointDialog(props: EndpointDialogProps) -> Element {
    let mut form = use_signal(|| EndpointFormState::from_endpoint(&props.endpoint));
    let mut raw_buffer = use_signal(|| to_raw_buffer(&props.endpoint));
    let mut active_tab = use_signal(EditTab::default);
    let mut parse_error = use_signal(|| None::<String>);
    let mut confirming_delete = use_signal(|| false);

    let mode = props.mode;
    let on_close = props.on_close;

    let title = if mode.is_create() {
        "Add Endpoint".to_string()
    } else {
        format!("Edit {}", display_label(&props.endpoint))
    };

    let submit = {
        let base = props.endpoint.clone();
        let client = props.client.clone();
        move |_| {
            let built =
                build_submission(*active_tab.read(), &form.read(), &raw_buffer.read(), &base);
            let endpoint = match built {
                Ok(endpoint) => endpoint,
                Err(error) => {
                    parse_error.set(Some(error.to_string()));
                    return;
                }
            };
            parse_error.set(None);
            let client = client.clone();
            spawn(async move {
                let result = if mode.is_create() {
                    client.create(&endpoint).await
                } else {
                    client.update(&endpoint).await
                };
                match result {
                    Ok(()) => on_close.call(true),
                    Err(error) => {
                        tracing::error!(%error, endpoint_id = %endpoint.endpoint_id, "endpoint save failed");
                    }
                }
            });
        }
    };

    let confirm_delete = {
        let client = props.client.clone();
        let endpoint_id = props.endpoint.endpoint_id.clone();
        move |_| {
            let client = client.clone();
            let endpoint_id = endpoint_id.clone();
            spawn(async move {
                match client.delete(&endpoint_id).await {
                    Ok(()) => on_close.call(true),
                    Err(error) => {
                        tracing::error!(%error, %endpoint_id, "endpoint delete failed");
                    }
                }
            });
        }
    };

    rsx! {
        DialogShell {
            title: title,
            on_dismiss: move |_| on_close.call(false),

            EditTabs {
                active: *active_tab.read(),
                on_change: move |tab| active_tab.set(tab),
            }

            if let Some(message) = parse_error.read().clone() {
                div {
                    class: "error-banner",
                    "{message}"
                }
            }

            if *active_tab.read() == EditTab::Form {
                TextInput {
                    label: "Endpoint ID",
                    value: form.read().endpoint_id.clone(),
                    disabled: mode.is_edit(),
                    help_text: if mode.is_create() {
                        Some("Unique identifier, e.g. sensor-kitchen-01".to_string())
                    } else {
                        None
                    },
                    on_change: move |value| form.write().endpoint_id = value,
                }
                TextInput {
                    label: "Friendly Name",
                    value: form.read().friendly_name.clone(),
                    on_change: move |value| form.write().friendly_name = value,
                }
                TextInput {
                    label: "Description",
                    value: form.read().description.clone(),
                    on_change: move |value| form.write().description = value,
                }
                TextInput {
                    label: "Manufacturer",
                    value: form.read().manufacturer_name.clone(),
                    on_change: move |value| form.write().manufacturer_name = value,
                }
            } else {
                TextArea {
                    label: "Endpoint JSON",
                    value: raw_buffer.read().clone(),
                    rows: 14,
                    monospace: true,
                    on_change: move |value| raw_buffer.set(value),
                }
            }

            div {
                class: "dialog-footer",
                if mode.is_edit() {
                    button {
                        r#type: "button",
                        class: "btn btn-danger",
                        onclick: move |_| confirming_delete.set(true),
                        "Delete"
                    }
                }
                button {
                    r#type: "button",
                    class: "btn btn-primary",
                    onclick: submit,
                    "{mode.submit_label()}"
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
                resource_name: display_label(&props.endpoint),
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
    use serde_json::json;

    fn lamp() -> Endpoint {
        Endpoint {
            endpoint_id: "lamp-01".to_string(),
            user_id: "amzn1.account.AF6Z".to_string(),
            friendly_name: "Kitchen Lamp".to_string(),
            description: "Smart lamp".to_string(),
            manufacturer_name: "Acme".to_string(),
            display_categories: vec!["LIGHT".to_string()],
            capabilities: vec![json!({"interface": "Alexa.PowerController"})],
        }
    }

    #[test]
    fn test_form_seeded_from_endpoint() {
        let form = EndpointFormState::from_endpoint(&lamp());
        assert_eq!(form.endpoint_id, "lamp-01");
        assert_eq!(form.friendly_name, "Kitchen Lamp");
        assert_eq!(form.description, "Smart lamp");
        assert_eq!(form.manufacturer_name, "Acme");
    }

    #[test]
    fn test_merge_preserves_hidden_fields() {
        let base = lamp();
        let mut form = EndpointFormState::from_endpoint(&base);
        form.friendly_name = "Pantry Lamp".to_string();

        let merged = form.merge_into(&base);
        assert_eq!(merged.friendly_name, "Pantry Lamp");
        assert_eq!(merged.user_id, "amzn1.account.AF6Z");
        assert_eq!(merged.display_categories, vec!["LIGHT".to_string()]);
        assert_eq!(merged.capabilities.len(), 1);
    }

    #[test]
    fn test_empty_id_field_keeps_existing_id() {
        let base = lamp();
        let mut form = EndpointFormState::from_endpoint(&base);
        form.endpoint_id = String::new();
        form.description = "Moved to pantry".to_string();

        let merged = form.merge_into(&base);
        assert_eq!(merged.endpoint_id, "lamp-01");
        assert_eq!(merged.description, "Moved to pantry");
    }

    #[test]
    fn test_id_field_fills_create_draft() {
        let mut form = EndpointFormState::default();
        form.endpoint_id = "sensor-42".to_string();
        form.friendly_name = "Hall Sensor".to_string();

        let merged = form.merge_into(&Endpoint::default());
        assert_eq!(merged.endpoint_id, "sensor-42");
        assert_eq!(merged.friendly_name, "Hall Sensor");
        assert!(merged.capabilities.is_empty());
    }

    #[test]
    fn test_display_label_falls_back_to_id() {
        let mut endpoint = lamp();
        assert_eq!(display_label(&endpoint), "Kitchen Lamp");
        endpoint.friendly_name.clear();
        assert_eq!(display_label(&endpoint), "lamp-01");
    }

    #[test]
    fn test_malformed_raw_buffer_builds_no_submission() {
        let result = build_submission(
            EditTab::Raw,
            &EndpointFormState::from_endpoint(&lamp()),
            "{\"endpointId\": ",
            &lamp(),
        );

        assert!(result.unwrap_err().is_decode());
    }

    #[test]
    fn test_raw_buffer_submission_replaces_the_resource() {
        let submitted = build_submission(
            EditTab::Raw,
            &EndpointFormState::from_endpoint(&lamp()),
            r#"{"endpointId": "lamp-01", "friendlyName": "Hall Lamp"}"#,
            &lamp(),
        )
        .unwrap();

        assert_eq!(submitted.friendly_name, "Hall Lamp");
        assert!(submitted.capabilities.is_empty());
    }

    #[test]
    fn test_form_submission_ignores_stale_raw_buffer() {
        let base = lamp();
        let mut form = EndpointFormState::from_endpoint(&base);
        form.friendly_name = "Pantry Lamp".to_string();

        let submitted = build_submission(EditTab::Form, &form, "{not json", &base).unwrap();
        assert_eq!(submitted.friendly_name, "Pantry Lamp");
        assert_eq!(submitted.user_id, "amzn1.account.AF6Z");
    }
}
