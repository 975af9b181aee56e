//! Call-sequencing and question-building errors for a quiz session.

use crate::catalog::CatalogError;
use crate::question::QuestionError;
use thiserror::Error;

/// Errors that can occur while driving a [`QuizSession`](super::QuizSession).
///
/// All variants are local precondition violations, recoverable by the
/// caller; the presentation layer relies on them to keep its widget state
/// consistent with the model.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("Region {0} has already been answered this session")]
    AlreadyAnswered(String),

    #[error("No question is currently open")]
    NoOpenQuestion,

    #[error(transparent)]
    Question(#[from] QuestionError),
}

impl From<CatalogError> for SessionError {
    fn from(err: CatalogError) -> Self {
        SessionError::Question(QuestionError::Catalog(err))
    }
}
