//! # Endpoints Panel
//!
//! List view for the endpoint family: fetches the collection when the
//! panel mounts, renders it through the generic table with skeleton rows
//! while a fetch is pending, and wires the edit dialog per row plus the
//! Add button for create mode. A fetch failure is logged and leaves the
//! current rows in their skeleton state.

use dioxus::prelude::*;

use console_api::EndpointClient;
use console_core::Endpoint;

use crate::components::dialogs::EndpointDialog;
use crate::components::table::{ResourceTable, TableRow};
use crate::state::DialogState;

/// Properties for the EndpointsPanel component
#[derive(Props, Clone, PartialEq)]
pub struct EndpointsPanelProps {
    /// Endpoint API base URL from the loaded configuration
    pub base_url: String,
}

/// Endpoint list panel
#[component]
pub fn EndpointsPanel(props: EndpointsPanelProps) -> Element {
    let client = use_hook(|| EndpointClient::new(props.base_url.clone()));
    let mut items = use_signal(|| Endpoint::placeholder_rows());
    let mut is_loading = use_signal(|| true);
    let mut dialog = use_signal(DialogState::<Endpoint>::default);
    let mut refresh = use_signal(|| 0u32);

    // Runs on mount and again on every refresh bump after a mutation;
    // rows keep their previous data under skeleton styling meanwhile
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
                        tracing::error!(%error, "endpoint list fetch failed");
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
            EndpointDialog {
                endpoint: resource,
                mode: mode,
                client: client.clone(),
                on_close: on_dialog_close,
            }
        },
        DialogState::Closed => rsx! {},
    };

    let title = Endpoint::TITLE;

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
                    onclick: move |_| dialog.set(DialogState::create(Endpoint::default())),
                    "Add"
                }
            }
            ResourceTable {
                items: items.read().clone(),
                is_loading: *is_loading.read(),
                on_row_click: move |endpoint: Endpoint| dialog.set(DialogState::edit(endpoint)),
            }
            {dialog_view}
        }
    }
}
