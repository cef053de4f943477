use async_trait::async_trait;
use lab_core::model::{Lab, LabId, LabInstanceStatus};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::LabsApiError;

/// Remote (or mock) source of lab records and lab instance state.
#[async_trait]
pub trait LabsApi: Send + Sync {
    /// List every lab visible to the current user.
    ///
    /// # Errors
    ///
    /// Returns `LabsApiError` if the source cannot be reached.
    async fn list_labs(&self) -> Result<Vec<Lab>, LabsApiError>;

    /// Fetch one lab.
    ///
    /// # Errors
    ///
    /// Returns `LabsApiError::NotFound` if the id is unknown.
    async fn get_lab(&self, id: LabId) -> Result<Lab, LabsApiError>;

    /// Ask the backend to start a container for the lab.
    ///
    /// # Errors
    ///
    /// Returns `LabsApiError` if the lab is unknown, locked, or the request fails.
    async fn start_lab(&self, id: LabId) -> Result<LabInstanceStatus, LabsApiError>;

    /// Current state of the lab's container.
    ///
    /// # Errors
    ///
    /// Returns `LabsApiError` if the lab is unknown or the request fails.
    async fn lab_status(&self, id: LabId) -> Result<LabInstanceStatus, LabsApiError>;

    /// Tear down the lab's container.
    ///
    /// # Errors
    ///
    /// Returns `LabsApiError` if the lab is unknown or the request fails.
    async fn stop_lab(&self, id: LabId) -> Result<LabInstanceStatus, LabsApiError>;
}

#[derive(Clone, Debug)]
pub struct LabsApiConfig {
    pub base_url: String,
    pub api_token: Option<String>,
}

impl LabsApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: api_token.filter(|token| !token.trim().is_empty()),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// `LabsApi` over HTTP/JSON.
#[derive(Clone)]
pub struct HttpLabsApi {
    client: Client,
    config: Option<LabsApiConfig>,
}

impl HttpLabsApi {
    #[must_use]
    pub fn new(config: Option<LabsApiConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, LabsApiError> {
        let config = self.config.as_ref().ok_or(LabsApiError::NotConfigured)?;
        let url = config.endpoint(path);
        tracing::debug!(%method, %url, "labs api request");

        let builder = self.client.request(method, url);
        Ok(match &config.api_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        lab: Option<LabId>,
    ) -> Result<T, LabsApiError> {
        let response = builder.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            if let Some(id) = lab {
                return Err(LabsApiError::NotFound(id));
            }
        }
        if !status.is_success() {
            tracing::warn!(%status, "labs api returned an error status");
            return Err(LabsApiError::HttpStatus(status));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl LabsApi for HttpLabsApi {
    async fn list_labs(&self) -> Result<Vec<Lab>, LabsApiError> {
        let request = self.request(Method::GET, "labs")?;
        self.send(request, None).await
    }

    async fn get_lab(&self, id: LabId) -> Result<Lab, LabsApiError> {
        let request = self.request(Method::GET, &format!("labs/{id}"))?;
        self.send(request, Some(id)).await
    }

    async fn start_lab(&self, id: LabId) -> Result<LabInstanceStatus, LabsApiError> {
        let request = self.request(Method::POST, &format!("labs/{id}/start"))?;
        self.send(request, Some(id)).await
    }

    async fn lab_status(&self, id: LabId) -> Result<LabInstanceStatus, LabsApiError> {
        let request = self.request(Method::GET, &format!("labs/{id}/status"))?;
        self.send(request, Some(id)).await
    }

    async fn stop_lab(&self, id: LabId) -> Result<LabInstanceStatus, LabsApiError> {
        let request = self.request(Method::POST, &format!("labs/{id}/stop"))?;
        self.send(request, Some(id)).await
    }
}
