use std::sync::Arc;

use async_trait::async_trait;
use lab_core::model::{Module, ModuleId};

use crate::error::ModuleError;

/// Where module content comes from.
#[async_trait]
pub trait ModuleSource: Send + Sync {
    /// # Errors
    ///
    /// Returns `ModuleError` if the source cannot be read.
    async fn list_modules(&self) -> Result<Vec<Module>, ModuleError>;

    /// # Errors
    ///
    /// Returns `ModuleError::NotFound` if the id is unknown.
    async fn get_module(&self, id: ModuleId) -> Result<Module, ModuleError>;
}

#[derive(Clone)]
pub struct ModuleService {
    source: Arc<dyn ModuleSource>,
}

impl ModuleService {
    #[must_use]
    pub fn new(source: Arc<dyn ModuleSource>) -> Self {
        Self { source }
    }

    /// # Errors
    ///
    /// Returns `ModuleError` if the source cannot be read.
    pub async fn list_modules(&self) -> Result<Vec<Module>, ModuleError> {
        self.source.list_modules().await
    }

    /// Look up a module for the content viewer.
    ///
    /// # Errors
    ///
    /// Returns `ModuleError::NotFound` if the id is unknown.
    pub async fn get_module(&self, id: ModuleId) -> Result<Module, ModuleError> {
        let result = self.source.get_module(id).await;
        if let Err(err) = &result {
            tracing::debug!(module = %id, error = %err, "module lookup failed");
        }
        result
    }
}
