//! Application State Management for Sensor Console
//!
//! This module provides the shared state machinery for the resource
//! manager panels: dialog modes, the structured/raw edit tabs, the
//! per-panel dialog state, and the guarded raw-JSON parse used by the
//! dialogs' JSON tab.

use console_core::ConsoleResult;
use serde::Serialize;
use serde::de::DeserializeOwned;

// ============================================================================
// Dialog Mode
// ============================================================================

/// Whether a dialog creates a new resource or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogMode {
    /// Blank draft, submit issues a create
    #[default]
    Create,
    /// Seeded from a fetched resource, submit issues an update
    Edit,
}

impl DialogMode {
    /// Check if this dialog creates a new resource
    pub fn is_create(&self) -> bool {
        matches!(self, DialogMode::Create)
    }

    /// Check if this dialog edits an existing resource
    pub fn is_edit(&self) -> bool {
        matches!(self, DialogMode::Edit)
    }

    /// Label for the primary footer button
    pub fn submit_label(&self) -> &'static str {
        match self {
            DialogMode::Create => "Create",
            DialogMode::Edit => "Save",
        }
    }
}

// ============================================================================
// Edit Tabs
// ============================================================================

/// Input surface of an edit dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditTab {
    /// Individually labeled form fields
    #[default]
    Form,
    /// One text buffer holding the full JSON object
    Raw,
}

impl EditTab {
    /// Get the display label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            EditTab::Form => "Input",
            EditTab::Raw => "JSON",
        }
    }

    /// All tabs in display order
    pub fn all() -> [EditTab; 2] {
        [EditTab::Form, EditTab::Raw]
    }
}

// ============================================================================
// Dialog State
// ============================================================================

/// Per-panel dialog state: closed, or open on one resource
///
/// The nested delete confirmation is owned by the open dialog itself and
/// layers over this state without replacing it, so dismissing the
/// confirmation returns to the edit dialog untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogState<T> {
    Closed,
    Open { resource: T, mode: DialogMode },
}

impl<T> Default for DialogState<T> {
    fn default() -> Self {
        DialogState::Closed
    }
}

impl<T> DialogState<T> {
    /// Open in create mode on an empty draft
    pub fn create(draft: T) -> Self {
        DialogState::Open {
            resource: draft,
            mode: DialogMode::Create,
        }
    }

    /// Open in edit mode on an existing resource
    pub fn edit(resource: T) -> Self {
        DialogState::Open {
            resource,
            mode: DialogMode::Edit,
        }
    }

    /// Check if a dialog is open
    pub fn is_open(&self) -> bool {
        matches!(self, DialogState::Open { .. })
    }
}

// ============================================================================
// Raw JSON Buffers
// ============================================================================

/// Parse the raw-tab buffer as a complete replacement object
///
/// Malformed input comes back as an error for the dialog to surface
/// inline; nothing is sent to the backend until this succeeds.
pub fn parse_raw<T: DeserializeOwned>(buffer: &str) -> ConsoleResult<T> {
    Ok(serde_json::from_str(buffer)?)
}

/// Pretty-print a resource for seeding the raw tab
pub fn to_raw_buffer<T: Serialize>(resource: &T) -> String {
    serde_json::to_string_pretty(resource).unwrap_or_default()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use console_core::Endpoint;

    #[test]
    fn test_dialog_mode_labels() {
        assert_eq!(DialogMode::Create.submit_label(), "Create");
        assert_eq!(DialogMode::Edit.submit_label(), "Save");
        assert!(DialogMode::Create.is_create());
        assert!(DialogMode::Edit.is_edit());
        assert!(!DialogMode::Edit.is_create());
    }

    #[test]
    fn test_edit_tab_order_and_labels() {
        let [first, second] = EditTab::all();
        assert_eq!(first, EditTab::Form);
        assert_eq!(second, EditTab::Raw);
        assert_eq!(first.label(), "Input");
        assert_eq!(second.label(), "JSON");
        assert_eq!(EditTab::default(), EditTab::Form);
    }

    #[test]
    fn test_dialog_state_transitions() {
        let mut state: DialogState<Endpoint> = DialogState::default();
        assert!(!state.is_open());

        let endpoint = Endpoint {
            endpoint_id: "sensor-1".to_string(),
            ..Default::default()
        };
        state = DialogState::edit(endpoint.clone());
        assert!(state.is_open());
        match &state {
            DialogState::Open { resource, mode } => {
                assert_eq!(resource.endpoint_id, "sensor-1");
                assert!(mode.is_edit());
            }
            DialogState::Closed => panic!("expected open dialog"),
        }

        state = DialogState::create(Endpoint::default());
        match &state {
            DialogState::Open { mode, .. } => assert!(mode.is_create()),
            DialogState::Closed => panic!("expected open dialog"),
        }

        state = DialogState::Closed;
        assert!(!state.is_open());
    }

    #[test]
    fn test_parse_raw_accepts_full_object() {
        let parsed: Endpoint = parse_raw(
            r#"{"endpointId": "sensor-1", "friendlyName": "Kitchen", "capabilities": [{"interface": "Alexa.TemperatureSensor"}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.endpoint_id, "sensor-1");
        assert_eq!(parsed.friendly_name, "Kitchen");
        assert_eq!(parsed.capabilities.len(), 1);
    }

    #[test]
    fn test_parse_raw_rejects_malformed_json() {
        let result: ConsoleResult<Endpoint> = parse_raw("{\"endpointId\": ");
        assert!(result.is_err());
        assert!(result.unwrap_err().is_decode());
    }

    #[test]
    fn test_raw_buffer_is_pretty_printed() {
        let endpoint = Endpoint {
            endpoint_id: "sensor-1".to_string(),
            ..Default::default()
        };
        let buffer = to_raw_buffer(&endpoint);
        assert!(buffer.contains('\n'));
        assert!(buffer.contains("\"endpointId\": \"sensor-1\""));
    }
}
