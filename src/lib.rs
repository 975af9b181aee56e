//! Rohe: the quiz session state machine behind an Aotearoa place-names quiz.
//!
//! The user picks a region on a map and must choose its Māori name from a
//! small multiple-choice set. This crate is the core the presentation
//! layer drives: question generation with unique distractors, answer
//! validation, scoring, completion detection, and a replayable result
//! history. Rendering, dialogs, and document export live outside the
//! crate and consume read-only accessors.
//!
//! # Core Concepts
//!
//! - **Catalog**: immutable region-to-names table, validated at construction
//! - **Question**: one correct name plus sampled distractors, shuffled
//! - **Session**: the state machine tracking answered regions, score, and history
//!
//! # Example
//!
//! ```rust
//! use rohe::catalog::RegionCatalog;
//! use rohe::QuizSession;
//!
//! let mut session = QuizSession::builder()
//!     .catalog(RegionCatalog::aotearoa())
//!     .seed(7)
//!     .build()?;
//!
//! let question = session.open_question("Northland")?;
//! let choice = question.correct_answer.clone();
//!
//! let outcome = session.submit_answer(&choice)?;
//! assert!(outcome.was_correct);
//! assert!(!outcome.quiz_complete);
//!
//! let snapshot = session.snapshot();
//! assert_eq!(snapshot.correct_count, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod catalog;
pub mod question;
pub mod session;

// Re-export commonly used types
pub use builder::{BuildError, SessionBuilder};
pub use catalog::{CatalogError, Region, RegionCatalog};
pub use question::{Question, QuestionError, QuestionFactory};
pub use session::{AnswerOutcome, AnsweredRecord, QuizSession, ResultsSnapshot, SessionError, SessionPhase};
