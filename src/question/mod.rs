//! Question generation: distractor sampling and question assembly.

use serde::{Deserialize, Serialize};

pub mod error;
pub mod factory;
pub mod sampler;

pub use error::QuestionError;
pub use factory::{QuestionFactory, DEFAULT_DISTRACTOR_COUNT};
pub use sampler::sample_distractors;

/// A presentable multiple-choice question.
///
/// Invariants, upheld by [`QuestionFactory`]:
/// - `correct_answer` is one of the region's acceptable names and is a
///   member of `options`
/// - `options` are pairwise distinct, already shuffled into display order
/// - no non-correct option is itself acceptable for this region
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Region the question asks about.
    pub region_id: String,
    /// Prompt text for the presentation layer.
    pub prompt: String,
    /// The answer the user must pick.
    pub correct_answer: String,
    /// Display-ordered options, correct answer included.
    pub options: Vec<String>,
}
