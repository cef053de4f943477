#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod lab_service;
pub mod labs_api;
pub mod module_service;

pub use catalog::StaticCatalog;
pub use error::{LabsApiError, ModuleError};
pub use lab_service::LabService;
pub use labs_api::{HttpLabsApi, LabsApi, LabsApiConfig};
pub use module_service::{ModuleService, ModuleSource};
