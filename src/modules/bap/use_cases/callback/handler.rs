use std::sync::Arc;
use tracing::{error, info};

use crate::modules::bap::core::callbacks::{CallbackEnvelope, CallbackMessage};
use crate::shared::core::errors::DatabaseError;
use crate::shared::infrastructure::callback_store::CallbackStore;

/// Persists callbacks posted by counterparties, one handler per callback type.
pub struct CallbackHandler<M: CallbackMessage> {
    store: Arc<dyn CallbackStore<CallbackEnvelope<M>>>,
}

impl<M: CallbackMessage> CallbackHandler<M> {
    pub fn new(store: Arc<dyn CallbackStore<CallbackEnvelope<M>>>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, record: CallbackEnvelope<M>) -> Result<(), DatabaseError> {
        let message_id = record.context.message_id.clone();
        let bpp_id = record.context.bpp_id.clone().unwrap_or_default();

        self.store.append(record).await.map_err(|e| {
            error!(message_id = %message_id, error = %e, "Failed to store callback");
            DatabaseError::OnWrite
        })?;
        info!(
            message_id = %message_id,
            bpp_id = %bpp_id,
            action = M::ACTION.as_str(),
            "Callback stored"
        );
        Ok(())
    }
}
