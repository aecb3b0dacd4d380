//! Core ticket data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum length of a ticket title.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum length of a ticket description.
pub const MAX_DESCRIPTION_LEN: usize = 4000;

/// Maximum length of a ticket status.
pub const MAX_STATUS_LEN: usize = 50;

/// A support ticket.
///
/// Wire representation uses camelCase field names. On create, `id` is
/// store-assigned and `status`/`createdAt` default when omitted from the
/// request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created_by: i64,
    #[serde(default)]
    pub assign_to: Option<i64>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
}

fn default_status() -> String {
    "Open".to_string()
}

impl Ticket {
    /// Validate field-level constraints (required / max length).
    ///
    /// Status is free text; any non-empty string within the length limit is
    /// accepted.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("title is required".to_string());
        } else if self.title.chars().count() > MAX_TITLE_LEN {
            errors.push(format!("title must be at most {} characters", MAX_TITLE_LEN));
        }

        if self.description.trim().is_empty() {
            errors.push("description is required".to_string());
        } else if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            errors.push(format!(
                "description must be at most {} characters",
                MAX_DESCRIPTION_LEN
            ));
        }

        if self.status.trim().is_empty() {
            errors.push("status is required".to_string());
        } else if self.status.chars().count() > MAX_STATUS_LEN {
            errors.push(format!(
                "status must be at most {} characters",
                MAX_STATUS_LEN
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
