use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::debug;

use crate::modules::bap::adapters::outbound::counterparty::{
    CounterpartyClient, CounterpartyClientFactory, CounterpartyResponse, TransportError,
};
use crate::modules::bap::core::requests::OutboundRequest;
use crate::shared::core::ack::AckResponse;
use crate::shared::core::context::Action;

/// Shares one connection pool across every counterparty endpoint.
#[derive(Clone)]
pub struct HttpCounterpartyClientFactory {
    client: Client,
}

impl HttpCounterpartyClientFactory {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl CounterpartyClientFactory for HttpCounterpartyClientFactory {
    fn client(&self, base_endpoint: &str) -> Arc<dyn CounterpartyClient> {
        Arc::new(HttpCounterpartyClient::new(self.client.clone(), base_endpoint))
    }
}

pub struct HttpCounterpartyClient {
    client: Client,
    base_url: String,
}

impl HttpCounterpartyClient {
    pub fn new(client: Client, base_endpoint: &str) -> Self {
        let base_url = if base_endpoint.ends_with('/') {
            base_endpoint.to_string()
        } else {
            format!("{base_endpoint}/")
        };
        Self { client, base_url }
    }

    pub fn endpoint(&self, action: Action) -> String {
        format!("{}{}", self.base_url, action.as_str())
    }
}

#[async_trait]
impl CounterpartyClient for HttpCounterpartyClient {
    async fn send(&self, request: &OutboundRequest) -> Result<CounterpartyResponse, TransportError> {
        let url = self.endpoint(request.action());

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::Timeout
                } else {
                    TransportError::Request(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;
        let body = serde_json::from_slice::<AckResponse>(&bytes).ok();
        debug!(url = %url, status, parsed = body.is_some(), "Counterparty answered");

        Ok(CounterpartyResponse { status, body })
    }
}
