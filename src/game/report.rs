//! Serializable reports handed back to callers
//!
//! Field names are PascalCase on the wire (`GameStatus`, `AttemptsUsed`,
//! `WinningAttempt`, `TryWord`, `IsValidWord`, `TryResult`). A turn report is
//! one flat object: status fields and attempt fields side by side.

use super::state::{Attempt, GameStatus};
use serde::Serialize;
use tracing::warn;

/// Where a game stands after an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusReport {
    pub game_status: GameStatus,
    pub attempts_used: usize,
    /// Present only once the game is won
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winning_attempt: Option<usize>,
}

/// Status plus the attempt that was just scored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    #[serde(flatten)]
    pub status: StatusReport,
    #[serde(flatten)]
    pub attempt: Attempt,
}

impl StatusReport {
    /// JSON form, or `{}` if serialization fails
    #[must_use]
    pub fn to_json(&self) -> String {
        to_json_or_empty(self)
    }
}

impl TurnReport {
    /// JSON form, or `{}` if serialization fails
    #[must_use]
    pub fn to_json(&self) -> String {
        to_json_or_empty(self)
    }
}

/// Serialize to JSON, degrading to an empty object instead of failing
pub(crate) fn to_json_or_empty<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        warn!(error = %err, "report serialization failed");
        "{}".to_string()
    })
}
