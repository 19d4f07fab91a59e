use std::sync::Arc;
use tracing::{error, info};

use crate::modules::bap::adapters::outbound::counterparty::{
    CounterpartyClientFactory, CounterpartyResponse,
};
use crate::modules::bap::core::requests::DispatchPayload;
use crate::shared::core::ack::AckResponse;
use crate::shared::core::context::Context;
use crate::shared::core::errors::BppError;

/// Maps a raw counterparty answer onto the dispatch outcome.
///
/// Checked in order: a non-2xx status is `Internal`, a missing or unparsable
/// body is `NullResponse`, an explicit NACK is `Nack`. Anything else is an ACK.
pub fn classify(response: CounterpartyResponse) -> Result<AckResponse, BppError> {
    if !response.is_success() {
        return Err(BppError::Internal);
    }
    let Some(body) = response.body else {
        return Err(BppError::NullResponse);
    };
    if body.is_nack() {
        return Err(BppError::Nack);
    }
    Ok(body)
}

/// Sends one protocol request to a counterparty and reports whether it was
/// synchronously acknowledged. Never touches the ledger.
pub struct OutboundDispatcher {
    clients: Arc<dyn CounterpartyClientFactory>,
}

impl OutboundDispatcher {
    pub fn new(clients: Arc<dyn CounterpartyClientFactory>) -> Self {
        Self { clients }
    }

    pub async fn dispatch(
        &self,
        endpoint: &str,
        context: &Context,
        payload: &DispatchPayload,
    ) -> Result<AckResponse, BppError> {
        let action = payload.action().as_str();
        let request = payload.to_request(context).map_err(|e| {
            error!(action, message_id = %context.message_id, error = %e, "Could not build request");
            BppError::Internal
        })?;

        info!(endpoint, action, message_id = %context.message_id, "Invoking counterparty");
        let response = self
            .clients
            .client(endpoint)
            .send(&request)
            .await
            .map_err(|e| {
                error!(endpoint, action, error = %e, "Error invoking counterparty");
                BppError::Internal
            })?;
        info!(endpoint, action, status = response.status, "Counterparty responded");

        classify(response).inspect_err(|e| {
            error!(endpoint, action, error = %e, "Counterparty did not acknowledge");
        })
    }
}
