use std::sync::Arc;

use lab_core::model::{Lab, ModuleId};

use crate::error::LabsApiError;
use crate::labs_api::LabsApi;

/// Lab access for the UI.
#[derive(Clone)]
pub struct LabService {
    api: Arc<dyn LabsApi>,
}

impl LabService {
    #[must_use]
    pub fn new(api: Arc<dyn LabsApi>) -> Self {
        Self { api }
    }

    /// Labs for the dashboard's "new labs" widget, exactly as the source
    /// returns them.
    ///
    /// # Errors
    ///
    /// Returns `LabsApiError` if the source cannot be read.
    pub async fn new_labs(&self) -> Result<Vec<Lab>, LabsApiError> {
        let labs = self.api.list_labs().await?;
        tracing::debug!(count = labs.len(), "loaded labs");
        Ok(labs)
    }

    /// Labs belonging to one module, in source order.
    ///
    /// # Errors
    ///
    /// Returns `LabsApiError` if the source cannot be read.
    pub async fn labs_for_module(&self, module_id: ModuleId) -> Result<Vec<Lab>, LabsApiError> {
        let labs = self.api.list_labs().await?;
        Ok(labs
            .into_iter()
            .filter(|lab| lab.module_id == module_id)
            .collect())
    }
}
