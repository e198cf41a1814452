//! # Console UI
//!
//! Dioxus Desktop UI for Sensor Console.
//!
//! This crate provides the admin surface for the sensor platform's three
//! backend resource families.
//!
//! ## Features
//!
//! - One list panel per family with skeleton rows while a fetch is pending
//! - Modal edit dialogs with structured fields and a raw JSON buffer
//! - Nested delete confirmation layered over the edit dialogs
//! - Window and backend base URLs taken from the loaded configuration
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use console_api;
pub use console_core;

// Re-export main components
pub use app::App;
pub use state::{DialogMode, DialogState, EditTab, parse_raw, to_raw_buffer};

// Re-export components
pub use components::{
    ConfirmDeleteDialog, DialogShell, EditTabs, EndpointDialog, EndpointsPanel, ResourceTable,
    ScheduleDialog, SchedulesPanel, StoreDialog, StorePanel, TableRow, TextArea, TextInput,
};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Sensor Console";

/// Application display title
pub const TITLE: &str = "API Sensor Console";

/// CSS styles for the application, included at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the console desktop application
///
/// This is the main entry point for the Dioxus desktop app. The loaded
/// configuration provides the window geometry here and travels into the
/// component tree as a launch context.
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     let config = ConsoleConfig::load(None)?;
///     console_ui::launch(config);
/// }
/// ```
pub fn launch(config: console_core::ConsoleConfig) {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    // Build custom head with embedded CSS
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    let window = config.window.clone();

    // Configure and launch Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(window.title.clone())
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            window.width,
                            window.height,
                        ))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(800.0, 600.0)),
                )
                .with_menu(None) // Disable default menu, the navbar is the only chrome
                .with_custom_head(custom_head),
        )
        .with_context(config)
        .launch(App);
}

/// Get the embedded CSS styles
///
/// This can be used if you need to access the styles separately
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "Sensor Console");
    }

    #[test]
    fn test_title() {
        assert!(TITLE.contains("Sensor Console"));
    }

    #[test]
    fn test_styles_loaded() {
        // Verify CSS is loaded and contains the table and dialog classes
        assert!(!STYLES.is_empty());
        assert!(STYLES.contains(".app-table"));
        assert!(STYLES.contains(".dialog-overlay"));
        assert!(STYLES.contains(".skeleton-cell"));
    }
}
