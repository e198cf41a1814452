//! # Schedules Panel
//!
//! List view for the scheduler jobs: fetches the collection when the
//! panel mounts, renders it through the generic table, and wires the
//! edit dialog per row plus the Add button for create mode. A fetch
//! failure is logged and leaves the current rows in their skeleton
//! state.

use dioxus::prelude::*;

use console_api::ScheduleClient;
use console_core::Schedule;

use crate::components::dialogs::ScheduleDialog;
use crate::components::table::{ResourceTable, TableRow};
use crate::state::DialogState;

/// Properties for the SchedulesPanel component
#[derive(Props, Clone, PartialEq)]
pub struct SchedulesPanelProps {
    /// Scheduler API base URL from the loaded configuration
    pub base_url: String,
}

/// Schedule list panel
#[component]
pub fn SchedulesPanel(props: SchedulesPanelProps) -> Element {
    let client = use_hook(|| ScheduleClient::new(props.base_url.clone()));
    let mut items = use_signal(|| Schedule::placeholder_rows());
    let mut is_loading = use_signal(|| true);
    let mut dialog = use_signal(DialogState::<Schedule>::default);
    let mut refresh = use_signal(|| 0u32);

    use_effect({
        let client = client.clone();
        move || {
            let _tick = refresh();
            let client = client.clone();
            is_loading.set(true);
            spawn(async move {
                match client.list().await {
                    Ok(fetched) => {
                        items.set(fetched);
                        is_loading.set(false);
                    }
                    Err(error) => {
                        tracing::error!(%error, "schedule list fetch failed");
                    }
                }
            });
        }
    });

    let on_dialog_close = move |reload: bool| {
        dialog.set(DialogState::Closed);
        if reload {
            refresh += 1;
        }
    };

    let dialog_view = match dialog.read().clone() {
        DialogState::Open { resource, mode } => rsx! {
            ScheduleDialog {
                schedule: resource,
                mode: mode,
                client: client.clone(),
                on_close: on_dialog_close,
            }
        },
        DialogState::Closed => rsx! {},
    };

    let title = Schedule::TITLE;

    rsx! {
        section {
            class: "console-card",
            div {
                class: "card-header",
                h5 {
                    class: "card-title",
                    "{title}"
                }
                button {
                    r#type: "button",
                    class: "btn btn-primary btn-small",
                    onclick: move |_| dialog.set(DialogState::create(Schedule::default())),
                    "Add"
                }
            }
            ResourceTable {
                items: items.read().clone(),
                is_loading: *is_loading.read(),
                on_row_click: move |schedule: Schedule| dialog.set(DialogState::edit(schedule)),
            }
            {dialog_view}
        }
    }
}
