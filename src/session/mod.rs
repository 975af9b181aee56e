//! The quiz session state machine.
//!
//! A [`QuizSession`] tracks which regions have been answered, the question
//! currently open (if any), score counters, and the history of results.
//! It is the single mutable aggregate of the crate; the presentation layer
//! owns one session and drives it through [`open_question`](QuizSession::open_question),
//! [`submit_answer`](QuizSession::submit_answer),
//! [`close_question`](QuizSession::close_question) and
//! [`reset`](QuizSession::reset).

use crate::builder::SessionBuilder;
use crate::catalog::RegionCatalog;
use crate::question::{Question, QuestionFactory};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub mod error;
pub mod history;
pub mod snapshot;

pub use error::SessionError;
pub use history::AnsweredRecord;
pub use snapshot::ResultsSnapshot;

/// The two phases a session can be in.
///
/// There is no separate terminal phase; a session with every region
/// answered is `Idle` with [`QuizSession::is_complete`] true, and the
/// caller treats a complete [`AnswerOutcome`] as the end of the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No question is open.
    Idle,
    /// A question is open and awaiting an answer.
    QuestionOpen,
}

/// What a call to [`QuizSession::submit_answer`] reports back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    /// Whether the submitted choice matched the correct answer.
    pub was_correct: bool,
    /// The correct answer, for the result dialog.
    pub correct_answer: String,
    /// True iff every region in the catalog is now answered.
    pub quiz_complete: bool,
}

/// One run-through of the quiz, from first question to reset.
///
/// # Example
///
/// ```rust
/// use rohe::QuizSession;
/// use rohe::catalog::RegionCatalog;
///
/// let mut session = QuizSession::with_seed(RegionCatalog::aotearoa(), 42);
///
/// let question = session.open_question("Northland")?;
/// let choice = question.correct_answer.clone();
///
/// let outcome = session.submit_answer(&choice)?;
/// assert!(outcome.was_correct);
/// assert_eq!(session.correct_count(), 1);
/// # Ok::<(), rohe::session::SessionError>(())
/// ```
#[derive(Debug)]
pub struct QuizSession {
    catalog: RegionCatalog,
    factory: QuestionFactory,
    pending: Option<Question>,
    answered: BTreeSet<String>,
    correct_count: usize,
    incorrect_count: usize,
    history: Vec<AnsweredRecord>,
    rng: StdRng,
}

impl QuizSession {
    /// Create a session over `catalog` with an entropy-seeded generator
    /// and the default distractor count.
    pub fn new(catalog: RegionCatalog) -> Self {
        Self::with_parts(catalog, QuestionFactory::default(), StdRng::from_entropy())
    }

    /// Create a session with a fixed seed, for reproducible runs.
    pub fn with_seed(catalog: RegionCatalog, seed: u64) -> Self {
        Self::with_parts(
            catalog,
            QuestionFactory::default(),
            StdRng::seed_from_u64(seed),
        )
    }

    /// Start building a session with a fluent [`SessionBuilder`].
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub(crate) fn with_parts(catalog: RegionCatalog, factory: QuestionFactory, rng: StdRng) -> Self {
        QuizSession {
            catalog,
            factory,
            pending: None,
            answered: BTreeSet::new(),
            correct_count: 0,
            incorrect_count: 0,
            history: Vec::new(),
            rng,
        }
    }

    /// Open a question for `region_id`.
    ///
    /// Fails with [`SessionError::AlreadyAnswered`] if the region has been
    /// scored this session, and propagates catalog and pool failures from
    /// question building. Successfully opening while another question is
    /// open abandons the previous question: nothing is scored or recorded
    /// for it. A failed open leaves the previous question in place, so
    /// the caller's view of the open question stays valid.
    pub fn open_question(&mut self, region_id: &str) -> Result<&Question, SessionError> {
        if self.answered.contains(region_id) {
            return Err(SessionError::AlreadyAnswered(region_id.to_string()));
        }

        let question = self.factory.build(&self.catalog, region_id, &mut self.rng)?;

        if let Some(abandoned) = self.pending.take() {
            tracing::debug!(region = %abandoned.region_id, "abandoning open question");
        }
        tracing::debug!(region = region_id, "question opened");
        Ok(self.pending.insert(question))
    }

    /// Discard the open question without scoring it.
    ///
    /// Fails with [`SessionError::NoOpenQuestion`] when nothing is open,
    /// identically on every repeated call; score and history are never
    /// touched.
    pub fn close_question(&mut self) -> Result<(), SessionError> {
        match self.pending.take() {
            Some(question) => {
                tracing::debug!(region = %question.region_id, "question closed unanswered");
                Ok(())
            }
            None => Err(SessionError::NoOpenQuestion),
        }
    }

    /// Score `choice` against the open question.
    ///
    /// The comparison is exact and case-sensitive; options are drawn from
    /// the canonical name table, so no normalization is needed for
    /// multiple choice. Appends one [`AnsweredRecord`], marks the region
    /// answered, bumps the matching counter, and returns to [`SessionPhase::Idle`].
    ///
    /// Fails with [`SessionError::NoOpenQuestion`] when no question is
    /// open; counters stay untouched in that case.
    pub fn submit_answer(&mut self, choice: &str) -> Result<AnswerOutcome, SessionError> {
        let question = self.pending.take().ok_or(SessionError::NoOpenQuestion)?;

        let was_correct = choice == question.correct_answer;
        if was_correct {
            self.correct_count += 1;
        } else {
            self.incorrect_count += 1;
        }

        self.answered.insert(question.region_id.clone());
        self.history.push(AnsweredRecord {
            region_id: question.region_id.clone(),
            correct_answer: question.correct_answer.clone(),
            user_answer: choice.to_string(),
            was_correct,
            answered_at: Utc::now(),
        });

        let quiz_complete = self.is_complete();
        tracing::debug!(
            region = %question.region_id,
            was_correct,
            quiz_complete,
            "answer recorded"
        );

        Ok(AnswerOutcome {
            was_correct,
            correct_answer: question.correct_answer,
            quiz_complete,
        })
    }

    /// Clear everything for "play again": answered set, history, counters,
    /// and any pending question. Valid from any phase.
    pub fn reset(&mut self) {
        self.pending = None;
        self.answered.clear();
        self.correct_count = 0;
        self.incorrect_count = 0;
        self.history.clear();
        tracing::debug!("session reset");
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> SessionPhase {
        if self.pending.is_some() {
            SessionPhase::QuestionOpen
        } else {
            SessionPhase::Idle
        }
    }

    /// Region of the open question, if any.
    pub fn open_region(&self) -> Option<&str> {
        self.pending.as_ref().map(|question| question.region_id.as_str())
    }

    /// The open question, if any.
    pub fn current_question(&self) -> Option<&Question> {
        self.pending.as_ref()
    }

    /// Regions scored so far.
    pub fn answered_regions(&self) -> &BTreeSet<String> {
        &self.answered
    }

    /// Correctly answered regions.
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    /// Incorrectly answered regions.
    pub fn incorrect_count(&self) -> usize {
        self.incorrect_count
    }

    /// Every scored answer, oldest first.
    pub fn history(&self) -> &[AnsweredRecord] {
        &self.history
    }

    /// The catalog this session plays over.
    pub fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    /// Number of regions in the round.
    pub fn total_regions(&self) -> usize {
        self.catalog.len()
    }

    /// True iff every region has been answered.
    pub fn is_complete(&self) -> bool {
        self.answered.len() == self.catalog.len()
    }

    /// Correct answers as a percentage of the fixed region total, rounded
    /// to two decimal places.
    ///
    /// The denominator is the total region count, not the answered count,
    /// so mid-session values read as progress toward a perfect round.
    pub fn accuracy_percent(&self) -> f64 {
        if self.catalog.is_empty() {
            return 0.0;
        }
        let raw = self.correct_count as f64 / self.catalog.len() as f64 * 100.0;
        (raw * 100.0).round() / 100.0
    }

    /// Take a read-only results snapshot for an external exporter.
    ///
    /// Pure accessor: the session is not modified.
    pub fn snapshot(&self) -> ResultsSnapshot {
        ResultsSnapshot {
            title: "Aotearoa Names Quiz Results".to_string(),
            total_questions: self.total_regions(),
            correct_count: self.correct_count,
            incorrect_count: self.incorrect_count,
            accuracy_percent: self.accuracy_percent(),
            history: self.history.clone(),
        }
    }
}
