//! Task lifecycle status.
//!
//! The service has shipped two label sets over time:
//!
//! ```text
//! legacy:   pending → running     → complete
//!                                 → failed
//! current:  pending → in_progress → completed
//!                                 → failed
//!                                 → cancelled
//! ```
//!
//! The current set is canonical and is what gets serialized. The two legacy
//! labels that differ (`running`, `complete`) are accepted on decode and map
//! onto their current equivalents. Any other label is rejected.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a submitted task as reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    #[serde(alias = "running")]
    InProgress,
    #[serde(alias = "complete")]
    Completed,
    Failed,
    Cancelled,
}

impl TaskStatus {
    /// Return the canonical wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
        }
    }

    /// The service will not move the task out of this state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Cancelled)
    }

    /// Terminal and successful: `result` is populated.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
