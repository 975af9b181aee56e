//! Per-region answer records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of one scored answer.
///
/// Appended to the session history exactly once per region, at the moment
/// the region moves from unanswered to answered. Records are immutable
/// values; the history they form replays the whole round in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredRecord {
    /// Region the question asked about.
    pub region_id: String,
    /// The answer that was correct.
    pub correct_answer: String,
    /// The option the user picked.
    pub user_answer: String,
    /// Whether the user picked the correct answer.
    pub was_correct: bool,
    /// When the answer was scored.
    pub answered_at: DateTime<Utc>,
}
