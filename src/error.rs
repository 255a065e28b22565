//! Error types for the tournament scoring core

use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::PyErr;
use thiserror::Error;

/// Main error type for the tournament scoring core
#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("Species already configured: {0}")]
    DuplicateSpecies(String),

    #[error("Custom species name must not be blank")]
    BlankSpeciesName,

    #[error("Species not configured: {0}")]
    SpeciesNotConfigured(String),

    #[error("Species not in catalog: {0}")]
    SpeciesNotInCatalog(String),

    #[error("Invalid scoring field: {0}")]
    InvalidField(String),

    #[error("Catch has already been reviewed: {0}")]
    CatchAlreadyReviewed(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl From<ScoringError> for PyErr {
    fn from(err: ScoringError) -> PyErr {
        match err {
            ScoringError::DuplicateSpecies(id) => {
                PyValueError::new_err(format!("Species already configured: {}", id))
            }
            ScoringError::BlankSpeciesName => {
                PyValueError::new_err("Custom species name must not be blank")
            }
            ScoringError::SpeciesNotConfigured(id) => {
                PyKeyError::new_err(format!("Species not configured: {}", id))
            }
            ScoringError::SpeciesNotInCatalog(id) => {
                PyKeyError::new_err(format!("Species not in catalog: {}", id))
            }
            ScoringError::InvalidField(name) => {
                PyValueError::new_err(format!("Invalid scoring field: {}", name))
            }
            ScoringError::CatchAlreadyReviewed(id) => {
                PyValueError::new_err(format!("Catch has already been reviewed: {}", id))
            }
            ScoringError::DeserializationError(msg) => {
                PyValueError::new_err(format!("Deserialization error: {}", msg))
            }
        }
    }
}

/// Result type alias for the tournament scoring core
pub type Result<T> = std::result::Result<T, ScoringError>;
