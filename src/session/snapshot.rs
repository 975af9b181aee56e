//! Read-only results snapshot for external exporters.

use super::history::AnsweredRecord;
use serde::{Deserialize, Serialize};

/// Immutable view of a session's results.
///
/// Taken with [`QuizSession::snapshot`](super::QuizSession::snapshot); the
/// exporter renders it to a document without touching the live session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultsSnapshot {
    /// Document title.
    pub title: String,
    /// Total regions in the round, answered or not.
    pub total_questions: usize,
    /// Correctly answered regions.
    pub correct_count: usize,
    /// Incorrectly answered regions.
    pub incorrect_count: usize,
    /// Correct answers as a percentage of the total, rounded to two
    /// decimal places.
    pub accuracy_percent: f64,
    /// Every scored answer, in the order it was given.
    pub history: Vec<AnsweredRecord>,
}

impl ResultsSnapshot {
    /// Final-score summary in the wording the end screen shows.
    pub fn summary_line(&self) -> String {
        format!(
            "Correct Answers: {}\nIncorrect Answers: {}\nPercentage: {:.2}%",
            self.correct_count, self.incorrect_count, self.accuracy_percent
        )
    }

    /// Serialize the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
