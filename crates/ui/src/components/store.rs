//! # Store Panel
//!
//! List view for the key/value store. Entries come into being on the
//! backend, so the panel carries no Add button: rows open straight into
//! the edit dialog. A fetch failure is logged and leaves the current
//! rows in their skeleton state.

use dioxus::prelude::*;

use console_api::StoreClient;
use console_core::StoreEntry;

use crate::components::dialogs::StoreDialog;
use crate::components::table::{ResourceTable, TableRow};

/// Properties for the StorePanel component
#[derive(Props, Clone, PartialEq)]
pub struct StorePanelProps {
    /// Store API base URL from the loaded configuration
    pub base_url: String,
}

/// Store entry list panel
#[component]
pub fn StorePanel(props: StorePanelProps) -> Element {
    let client = use_hook(|| StoreClient::new(props.base_url.clone()));
    let mut items = use_signal(|| StoreEntry::placeholder_rows());
    let mut is_loading = use_signal(|| true);
    let mut dialog = use_signal(|| None::<StoreEntry>);
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
                        tracing::error!(%error, "store list fetch failed");
                    }
                }
            });
        }
    });

    let on_dialog_close = move |reload: bool| {
        dialog.set(None);
        if reload {
            refresh += 1;
        }
    };

    let dialog_view = match dialog.read().clone() {
        Some(entry) => rsx! {
            StoreDialog {
                entry: entry,
                client: client.clone(),
                on_close: on_dialog_close,
            }
        },
        None => rsx! {},
    };

    let title = StoreEntry::TITLE;

    rsx! {
        section {
            class: "console-card",
            div {
                class: "card-header",
                h5 {
                    class: "card-title",
                    "{title}"
                }
            }
            ResourceTable {
                items: items.read().clone(),
                is_loading: *is_loading.read(),
                on_row_click: move |entry: StoreEntry| dialog.set(Some(entry)),
            }
            {dialog_view}
        }
    }
}
