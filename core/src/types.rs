//! Domain DTOs for the tasks API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently
//! so the client compiles without pulling in Axum. Integration tests catch
//! any schema drift between the two crates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single task returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
}

/// Request payload for creating a new task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
}
