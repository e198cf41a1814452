//! # Schedule Dialog Component
//!
//! Create/edit dialog for scheduler jobs. The structured tab exposes the
//! identifier, name, run date and the single argument line; the executor
//! function and trigger kind are constants injected on every form
//! submit, so they never appear as fields. The raw JSON tab bypasses the
//! injection and sends the buffer as-is.

use dioxus::prelude::*;

use console_api::ScheduleClient;
use console_core::{ConsoleResult, Schedule};

use crate::components::dialogs::confirm_delete::ConfirmDeleteDialog;
use crate::components::dialogs::shell::{DialogShell, EditTabs};
use crate::components::inputs::{TextArea, TextInput};
use crate::state::{DialogMode, EditTab, parse_raw, to_raw_buffer};

// ============================================================================
// Form State
// ============================================================================

/// Values of the structured-tab fields
#[derive(Debug, Clone, Default, PartialEq)]
struct ScheduleFormState {
    id: String,
    name: String,
    run_date: String,
    args_line: String,
}

impl ScheduleFormState {
    /// Seed the form from a schedule
    fn from_schedule(schedule: &Schedule) -> Self {
        Self {
            id: schedule.id.clone(),
            name: schedule.name.clone(),
            run_date: schedule.run_date.clone(),
            args_line: schedule.args_line(),
        }
    }

    /// Merge the field values into the job, preserving the unmodeled
    /// fields the backend sent along. The argument line becomes the
    /// job's single argument; an empty identifier never overwrites an
    /// existing one.
    fn merge_into(&self, base: &Schedule) -> Schedule {
        let mut schedule = base.clone();
        if !self.id.is_empty() {
            schedule.id = self.id.clone();
        }
        schedule.name = self.name.clone();
        schedule.run_date = self.run_date.clone();
        schedule.args = vec![self.args_line.clone()];
        schedule
    }
}

/// Display label for titles and the delete confirmation
fn display_label(schedule: &Schedule) -> String {
    if schedule.name.is_empty() {
        schedule.id.clone()
    } else {
        schedule.name.clone()
    }
}

/// The job a save submits. Form submits always carry the fixed executor
/// and trigger kind; the raw tab sends the buffer verbatim. A buffer
/// that does not decode yields the error shown in the banner and
/// nothing is sent.
fn build_submission(
    tab: EditTab,
    form: &ScheduleFormState,
    raw_buffer: &str,
    base: &Schedule,
) -> ConsoleResult<Schedule> {
    match tab {
        EditTab::Form => Ok(form.merge_into(base).with_fixed_trigger()),
        EditTab::Raw => parse_raw(raw_buffer),
    }
}

// ============================================================================
// Schedule Dialog Props
// ============================================================================

/// Properties for the ScheduleDialog component
#[derive(Props, Clone, PartialEq)]
pub struct ScheduleDialogProps {
    /// The job being edited, or an empty draft in create mode
    pub schedule: Schedule,
    /// Create or edit
    pub mode: DialogMode,
    /// Client for the scheduler family
    pub client: ScheduleClient,
    /// Close callback carrying the reload flag
    pub on_close: EventHandler<bool>,
}

// ============================================================================
// Schedule Dialog Component
// ============================================================================

/// Schedule create/edit dialog
#[component]
pub fn ScheduleDialog(props: ScheduleDialogProps) -> Element {
    let mut form = use_signal(|| ScheduleFormState::from_schedule(&props.schedule));
    let mut raw_buffer = use_signal(|| to_raw_buffer(&props.schedule));
    let mut active_tab = use_signal(EditTab::default);
    let mut parse_error = use_signal(|| None::<String>);
    let mut confirming_delete = use_signal(|| false);

    let mode = props.mode;
    let on_close = props.on_close;

    let title = if mode.is_create() {
        "Add Schedule".to_string()
    } else {
        format!("Edit {}", display_label(&props.schedule))
    };

    let submit = {
        let base = props.schedule.clone();
        let client = props.client.clone();
        move |_| {
            let built =
                build_submission(*active_tab.read(), &form.read(), &raw_buffer.read(), &base);
            let schedule = match built {
                Ok(schedule) => schedule,
                Err(error) => {
                    parse_error.set(Some(error.to_string()));
                    return;
                }
            };
            parse_error.set(None);
            let client = client.clone();
            spawn(async move {
                let result = if mode.is_create() {
                    client.create(&schedule).await
                } else {
                    client.update(&schedule).await
                };
                match result {
                    Ok(()) => on_close.call(true),
                    Err(error) => {
                        tracing::error!(%error, job_id = %schedule.id, "schedule save failed");
                    }
                }
            });
        }
    };

    let confirm_delete = {
        let client = props.client.clone();
        let job_id = props.schedule.id.clone();
        move |_| {
            let client = client.clone();
            let job_id = job_id.clone();
            spawn(async move {
                match client.delete(&job_id).await {
                    Ok(()) => on_close.call(true),
                    Err(error) => {
                        tracing::error!(%error, %job_id, "schedule delete failed");
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
                    label: "Job ID",
                    value: form.read().id.clone(),
                    disabled: mode.is_edit(),
                    on_change: move |value| form.write().id = value,
                }
                TextInput {
                    label: "Name",
                    value: form.read().name.clone(),
                    on_change: move |value| form.write().name = value,
                }
                TextInput {
                    label: "Run Date",
                    value: form.read().run_date.clone(),
                    help_text: "e.g. 2024-05-01T06:30:00+00:00",
                    on_change: move |value| form.write().run_date = value,
                }
                TextInput {
                    label: "Argument",
                    value: form.read().args_line.clone(),
                    help_text: "Event name handed to the trigger function",
                    on_change: move |value| form.write().args_line = value,
                }
            } else {
                TextArea {
                    label: "Job JSON",
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
                resource_name: display_label(&props.schedule),
                on_confirm: confirm_delete,
                on_cancel: move |_| confirming_delete.set(false),
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
