//! # Dialog Components
//!
//! This module provides the modal dialogs for the console UI.
//!
//! ## Dialogs
//!
//! - **DialogShell**: shared overlay, panel and header chrome
//! - **EditTabs**: strip switching between form fields and the raw JSON buffer
//! - **EndpointDialog**: create and edit endpoints
//! - **ScheduleDialog**: create and edit scheduler jobs
//! - **StoreDialog**: edit key/value store entries
//! - **ConfirmDeleteDialog**: nested confirmation for destructive actions
//!
//! ## Usage
//!
//! ```rust,ignore
//! use console_ui::components::dialogs::EndpointDialog;
//! use console_ui::state::DialogMode;
//!
//! fn MyComponent() -> Element {
//!     rsx! {
//!         EndpointDialog {
//!             endpoint: Endpoint::default(),
//!             mode: DialogMode::Create,
//!             client: client.clone(),
//!             on_close: move |reload: bool| {},
//!         }
//!     }
//! }
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod confirm_delete;
pub mod endpoint_dialog;
pub mod schedule_dialog;
pub mod shell;
pub mod store_dialog;

// ============================================================================
// Re-exports
// ============================================================================

pub use confirm_delete::ConfirmDeleteDialog;
pub use endpoint_dialog::{EndpointDialog, EndpointDialogProps};
pub use schedule_dialog::{ScheduleDialog, ScheduleDialogProps};
pub use shell::{DialogShell, EditTabs};
pub use store_dialog::{StoreDialog, StoreDialogProps};
