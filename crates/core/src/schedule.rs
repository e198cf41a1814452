//! # Schedule Model
//!
//! Triggered jobs managed through the scheduler API. The scheduler reports
//! more fields than the console edits (kwargs, misfire_grace_time,
//! next_run_time, ...), so everything unmodeled is kept in a flattened map
//! and travels untouched through the raw-JSON edit path.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Executor reference written into every schedule submitted from the console
pub const SCHEDULE_FUNC: &str = "scheduler:trigger_event";

/// Trigger kind written into every schedule submitted from the console
pub const SCHEDULE_TRIGGER: &str = "date";

/// A scheduled job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Schedule {
    /// Unique identifier
    pub id: String,

    /// Human-readable job name
    pub name: String,

    /// ISO-like run timestamp, e.g. "2024-01-01T00:00:00"
    pub run_date: String,

    /// Positional arguments passed to the executor
    pub args: Vec<String>,

    /// Executor reference; forced to [`SCHEDULE_FUNC`] on submit
    pub func: String,

    /// Trigger kind; forced to [`SCHEDULE_TRIGGER`] on submit
    pub trigger: String,

    /// Fields reported by the scheduler that the console does not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Schedule {
    /// Overwrite the executor and trigger fields with the console's fixed
    /// values. Applied to every structured-form submission regardless of
    /// what the buffer holds.
    pub fn with_fixed_trigger(mut self) -> Self {
        self.func = SCHEDULE_FUNC.to_string();
        self.trigger = SCHEDULE_TRIGGER.to_string();
        self
    }

    /// The args list as one editable line
    pub fn args_line(&self) -> String {
        self.args.join(",")
    }
}

// ============================================================================
// Tests
// ============================================================================
