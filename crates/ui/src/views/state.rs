use dioxus::prelude::*;
use services::{LabsApiError, ModuleError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    NotFound,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NotFound => "We couldn't find what you were looking for.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<ModuleError> for ViewError {
    fn from(err: ModuleError) -> Self {
        tracing::warn!(error = %err, "module load failed");
        match err {
            ModuleError::NotFound(_) => Self::NotFound,
            _ => Self::Unknown,
        }
    }
}

impl From<LabsApiError> for ViewError {
    fn from(err: LabsApiError) -> Self {
        tracing::warn!(error = %err, "lab load failed");
        match err {
            LabsApiError::NotFound(_) => Self::NotFound,
            _ => Self::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
