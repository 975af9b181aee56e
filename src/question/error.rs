//! Errors raised while building a question.

use crate::catalog::CatalogError;
use thiserror::Error;

/// Errors that can occur when sampling distractors or building a question.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum QuestionError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Distractor pool too small: needed {needed}, only {available} candidates")]
    InsufficientPool { needed: usize, available: usize },
}
