//! Shared error types for the services crate.

use thiserror::Error;

use lab_core::model::{LabId, ModuleId};

/// Errors emitted by `LabsApi` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LabsApiError {
    #[error("labs API is not configured")]
    NotConfigured,
    #[error("lab {0} not found")]
    NotFound(LabId),
    #[error("lab {0} is locked")]
    Locked(LabId),
    #[error("labs API request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `ModuleService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModuleError {
    #[error("module {0} not found")]
    NotFound(ModuleId),
}
