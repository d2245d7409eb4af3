use chrono::Utc;
use serde::Serialize;

pub const UNKNOWN_ASSIGNEE: &str = "Unknown";

#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub assigned_to: String, // weak reference to users.id, kept as text
    pub completed: bool,     // ⇔ tasks.completed (INT 0/1)
    pub created_at: String,  // ⇔ tasks.created_at (TEXT, ISO8601)
}

/// Task enriched with the assignee's display name, for the full listing.
/// A dangling `assigned_to` resolves to [`UNKNOWN_ASSIGNEE`].
#[derive(Debug, Clone, Serialize)]
pub struct TaskWithAssignee {
    #[serde(flatten)]
    pub task: Task,
    pub assigned_to_name: String,
}

impl Task {
    /// Constructor for tasks created from the CLI.
    /// - `completed` starts false
    /// - `created_at` = now() in ISO8601
    pub fn new(title: &str, description: &str, assigned_to: &str) -> Self {
        Self {
            id: 0,
            title: title.to_string(),
            description: description.to_string(),
            assigned_to: assigned_to.to_string(),
            completed: false,
            created_at: Utc::now().to_rfc3339(),
        }
    }

    pub fn status_str(&self) -> &'static str {
        if self.completed { "done" } else { "open" }
    }
}
