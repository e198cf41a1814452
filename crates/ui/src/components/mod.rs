//! # UI Components
//!
//! Reusable Dioxus components for the console UI.
//!
//! This module provides:
//! - **Table**: the generic two-column resource table with skeleton rows
//! - **Inputs**: form input components (text input, textarea)
//! - **Panels**: one list panel per resource family
//! - **Dialogs**: modal dialogs for create/edit/delete flows
//!
//! ## Component Hierarchy
//!
//! ```text
//! App
//! ├── EndpointsPanel
//! │   ├── ResourceTable<Endpoint>
//! │   └── EndpointDialog
//! │       └── ConfirmDeleteDialog
//! ├── SchedulesPanel
//! │   ├── ResourceTable<Schedule>
//! │   └── ScheduleDialog
//! │       └── ConfirmDeleteDialog
//! └── StorePanel
//!     ├── ResourceTable<StoreEntry>
//!     └── StoreDialog
//!         └── ConfirmDeleteDialog
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod dialogs;
pub mod endpoints;
pub mod inputs;
pub mod schedules;
pub mod store;
pub mod table;

// ============================================================================
// Re-exports
// ============================================================================

// Resource panels
pub use endpoints::EndpointsPanel;
pub use schedules::SchedulesPanel;
pub use store::StorePanel;

// Table components
pub use table::{ResourceTable, TableRow};

// Re-export input components
pub use inputs::{TextArea, TextInput};

// Re-export dialog components
pub use dialogs::{
    ConfirmDeleteDialog, DialogShell, EditTabs, EndpointDialog, ScheduleDialog, StoreDialog,
};
