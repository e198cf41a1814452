//! # Schedule Client
//!
//! CRUD against the scheduler's job resource. The scheduler speaks plain
//! objects, no envelope: create posts the schedule directly, update patches
//! the job under its own id, delete targets the same path.

use console_core::{ConsoleResult, Schedule};

use crate::client::ApiClient;

/// Typed client for the scheduler API
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleClient {
    api: ApiClient,
}

impl ScheduleClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiClient::new(base_url),
        }
    }

    /// Fetch the full job list
    pub async fn list(&self) -> ConsoleResult<Vec<Schedule>> {
        self.api.get_json("/jobs").await
    }

    /// POST a new job
    pub async fn create(&self, schedule: &Schedule) -> ConsoleResult<()> {
        self.api.post_json("/jobs", schedule).await
    }

    /// PATCH the job under its identifier
    pub async fn update(&self, schedule: &Schedule) -> ConsoleResult<()> {
        self.api
            .patch_json(&format!("/jobs/{}", schedule.id), schedule)
            .await
    }

    /// Delete by identifier
    pub async fn delete(&self, id: &str) -> ConsoleResult<()> {
        self.api.delete(&format!("/jobs/{id}")).await
    }
}
