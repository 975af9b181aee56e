//! Validation and lookup errors for the region catalog.

use thiserror::Error;

/// Errors that can occur when building or querying a region catalog.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("Duplicate region id: {0}")]
    DuplicateRegion(String),

    #[error("Region {0} has no acceptable names")]
    NoNames(String),

    #[error("Region {0} has a blank acceptable name")]
    BlankName(String),

    #[error("Region {region} lists {name:?} more than once")]
    DuplicateName { region: String, name: String },
}
