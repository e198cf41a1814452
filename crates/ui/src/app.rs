//! Main Application Component for Sensor Console
//!
//! This module contains the root Dioxus component. It reads the loaded
//! configuration out of the launch context, renders the static navbar,
//! and stacks the three resource manager panels, handing each its
//! backend base URL.

use dioxus::prelude::*;

use console_core::ConsoleConfig;

use crate::components::{EndpointsPanel, SchedulesPanel, StorePanel};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    let config = use_context::<ConsoleConfig>();

    use_effect(|| {
        tracing::info!("Sensor Console UI initialized");
    });

    let heading = crate::TITLE;

    rsx! {
        div {
            class: "app-root",

            // Static navbar, no navigation targets
            header {
                class: "app-navbar",
                span {
                    class: "navbar-icon",
                    "📡"
                }
                span {
                    class: "navbar-heading",
                    "{heading}"
                }
            }

            // Resource manager panels
            main {
                class: "app-main",
                EndpointsPanel { base_url: config.api.endpoint_api.clone() }
                SchedulesPanel { base_url: config.api.scheduler_api.clone() }
                StorePanel { base_url: config.api.store_api.clone() }
            }
        }
    }
}
