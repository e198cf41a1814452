//! # Resource Table Component
//!
//! One generic table shared by the three resource panels. Each resource
//! family describes itself through [`TableRow`]: card title, the two
//! column labels, the two displayed cells, and the filler rows shown
//! with skeleton styling before the first fetch resolves.

use dioxus::prelude::*;

use console_core::{Endpoint, Schedule, StoreEntry};

// ============================================================================
// Row Schema
// ============================================================================

/// Row schema for [`ResourceTable`]
///
/// Placeholder rows carry filler strings so the skeleton cells have a
/// width to shimmer over; they are replaced wholesale by the first
/// successful fetch and must never be written back to the backend.
pub trait TableRow: Clone + PartialEq {
    /// Card heading shown above the table
    const TITLE: &'static str;

    /// Column labels, left to right
    const COLUMNS: [&'static str; 2];

    /// The two displayed cells for this row
    fn cells(&self) -> [String; 2];

    /// Filler rows rendered with skeleton styling while a fetch is pending
    fn placeholder_rows() -> Vec<Self>;
}

impl TableRow for Endpoint {
    const TITLE: &'static str = "Endpoints";
    const COLUMNS: [&'static str; 2] = ["Friendly Name", "Description"];

    fn cells(&self) -> [String; 2] {
        [self.friendly_name.clone(), self.description.clone()]
    }

    fn placeholder_rows() -> Vec<Self> {
        (0..3)
            .map(|_| Endpoint {
                endpoint_id: "xxxxxxxx-xxxx".to_string(),
                friendly_name: "xxxxx".to_string(),
                description: "xxxxxxxxxx".to_string(),
                ..Default::default()
            })
            .collect()
    }
}

impl TableRow for Schedule {
    const TITLE: &'static str = "Schedules";
    const COLUMNS: [&'static str; 2] = ["Name", "Run Date"];

    fn cells(&self) -> [String; 2] {
        [self.name.clone(), self.run_date.clone()]
    }

    fn placeholder_rows() -> Vec<Self> {
        (0..3)
            .map(|_| Schedule {
                id: "xxxxxxxx".to_string(),
                name: "xxxxx".to_string(),
                run_date: "xxxxxxxxxx".to_string(),
                ..Default::default()
            })
            .collect()
    }
}

impl TableRow for StoreEntry {
    const TITLE: &'static str = "Store";
    const COLUMNS: [&'static str; 2] = ["Key", "Value"];

    fn cells(&self) -> [String; 2] {
        [self.key.clone(), self.value.clone()]
    }

    fn placeholder_rows() -> Vec<Self> {
        (0..3)
            .map(|_| StoreEntry {
                key: "xxxxx".to_string(),
                value: "xxxxxxxxxx".to_string(),
                ..Default::default()
            })
            .collect()
    }
}

// ============================================================================
// Table Component
// ============================================================================

/// Generic two-column table with skeleton styling while loading
///
/// Row clicks are swallowed while a fetch is pending so a skeleton row
/// can never open a dialog on placeholder data.
#[component]
pub fn ResourceTable<T: TableRow + 'static>(
    items: Vec<T>,
    is_loading: bool,
    on_row_click: EventHandler<T>,
) -> Element {
    rsx! {
        table {
            class: "app-table",
            thead {
                tr {
                    for column in T::COLUMNS {
                        th { "{column}" }
                    }
                }
            }
            tbody {
                for (index, item) in items.iter().enumerate() {
                    tr {
                        key: "{index}",
                        class: if is_loading { "row-skeleton" } else { "row-interactive" },
                        onclick: {
                            let item = item.clone();
                            move |_| {
                                if !is_loading {
                                    on_row_click.call(item.clone());
                                }
                            }
                        },
                        for cell in item.cells() {
                            td {
                                span {
                                    class: if is_loading { "skeleton-cell" } else { "" },
                                    "{cell}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
