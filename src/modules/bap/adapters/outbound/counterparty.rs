use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::modules::bap::core::requests::OutboundRequest;
use crate::shared::core::ack::AckResponse;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Request(String),
}

/// Raw outcome of one outbound call: the status code and the acknowledgement
/// body, when the body parsed as one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterpartyResponse {
    pub status: u16,
    pub body: Option<AckResponse>,
}

impl CounterpartyResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait CounterpartyClient: Send + Sync {
    async fn send(&self, request: &OutboundRequest) -> Result<CounterpartyResponse, TransportError>;
}

/// Hands out a client bound to one counterparty base endpoint.
pub trait CounterpartyClientFactory: Send + Sync {
    fn client(&self, base_endpoint: &str) -> Arc<dyn CounterpartyClient>;
}
