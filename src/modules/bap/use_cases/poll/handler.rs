use std::sync::Arc;
use tracing::{error, info};

use crate::modules::bap::core::aggregate::{PollResponse, aggregate};
use crate::modules::bap::core::callbacks::{CallbackEnvelope, CallbackMessage};
use crate::shared::core::context::ContextFactory;
use crate::shared::core::errors::{DatabaseError, PollError};
use crate::shared::infrastructure::callback_store::CallbackStore;
use crate::shared::infrastructure::message_ledger::MessageLedger;

/// Answers "what has arrived for this message id so far" for one callback type.
///
/// Only message ids recorded in the ledger are answerable; the callback store
/// is not consulted for unknown ids. The recorded message type is not checked.
pub struct OnPollHandler<M: CallbackMessage> {
    ledger: Arc<dyn MessageLedger>,
    store: Arc<dyn CallbackStore<CallbackEnvelope<M>>>,
    contexts: Arc<ContextFactory>,
}

impl<M: CallbackMessage> OnPollHandler<M> {
    pub fn new(
        ledger: Arc<dyn MessageLedger>,
        store: Arc<dyn CallbackStore<CallbackEnvelope<M>>>,
        contexts: Arc<ContextFactory>,
    ) -> Self {
        Self {
            ledger,
            store,
            contexts,
        }
    }

    pub fn contexts(&self) -> &ContextFactory {
        &self.contexts
    }

    pub async fn on_poll(&self, message_id: &str) -> Result<PollResponse<M::Aggregate>, PollError> {
        let known = self.ledger.exists(message_id).await.map_err(|e| {
            error!(message_id, error = %e, "Failed to read message ledger");
            DatabaseError::OnRead
        })?;
        if !known {
            info!(message_id, action = M::ACTION.as_str(), "Poll for unknown message");
            return Err(PollError::NotFound {
                message_id: message_id.to_string(),
            });
        }

        let records = self
            .store
            .find_all_by_message_id(message_id)
            .await
            .map_err(|e| {
                error!(message_id, error = %e, "Failed to read callbacks");
                DatabaseError::OnRead
            })?;
        info!(
            message_id,
            action = M::ACTION.as_str(),
            count = records.len(),
            "Aggregating callbacks"
        );

        Ok(aggregate(message_id, records, &self.contexts))
    }
}
