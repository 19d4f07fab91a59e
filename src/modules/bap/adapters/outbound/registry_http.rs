use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use crate::modules::bap::adapters::outbound::registry::{LookupRequest, Registry, Subscriber};
use crate::shared::core::errors::RegistryError;

/// Registry reached over `POST {base_url}/lookup`.
pub struct HttpRegistry {
    client: Client,
    base_url: String,
}

impl HttpRegistry {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn lookup_url(&self) -> String {
        format!("{}/lookup", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Registry for HttpRegistry {
    async fn lookup(&self, request: &LookupRequest) -> Result<Vec<Subscriber>, RegistryError> {
        let url = self.lookup_url();
        debug!(url = %url, ?request, "Looking up subscribers");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "Registry lookup failed");
                RegistryError::Internal
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(url = %url, status = status.as_u16(), "Registry lookup returned error status");
            return Err(RegistryError::Internal);
        }

        let bytes = response.bytes().await.map_err(|e| {
            error!(url = %url, error = %e, "Failed to read registry response");
            RegistryError::Internal
        })?;

        serde_json::from_slice::<Option<Vec<Subscriber>>>(&bytes)
            .ok()
            .flatten()
            .ok_or(RegistryError::NullResponse)
    }
}
