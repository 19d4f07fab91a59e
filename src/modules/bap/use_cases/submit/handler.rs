use axum::http::StatusCode;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

use crate::modules::bap::adapters::outbound::registry::Registry;
use crate::modules::bap::core::cart::{
    CartItem, ClientOrder, SearchCriteria, Selection, validate_selection,
};
use crate::modules::bap::core::requests::DispatchPayload;
use crate::modules::bap::use_cases::dispatch::handler::OutboundDispatcher;
use crate::shared::core::ack::ProtocolError;
use crate::shared::core::context::Context;
use crate::shared::core::errors::{
    BppError, DatabaseError, HttpError, RegistryError, ValidationError,
};
use crate::shared::infrastructure::message_ledger::{LedgerEntry, MessageLedger};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Bpp(#[from] BppError),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl HttpError for ApplicationError {
    fn status(&self) -> StatusCode {
        match self {
            ApplicationError::Validation(e) => e.status(),
            ApplicationError::Registry(e) => e.status(),
            ApplicationError::Bpp(e) => e.status(),
            ApplicationError::Database(e) => e.status(),
        }
    }

    fn error(&self) -> ProtocolError {
        match self {
            ApplicationError::Validation(e) => e.error(),
            ApplicationError::Registry(e) => e.error(),
            ApplicationError::Bpp(e) => e.error(),
            ApplicationError::Database(e) => e.error(),
        }
    }
}

/// Client-facing submissions. Each one resolves its counterparty, dispatches,
/// and records the message id only once the counterparty acknowledged it.
///
/// `Ok(None)` means the submission was accepted without calling anyone.
pub struct SubmitHandler {
    registry: Arc<dyn Registry>,
    dispatcher: OutboundDispatcher,
    ledger: Arc<dyn MessageLedger>,
}

impl SubmitHandler {
    pub fn new(
        registry: Arc<dyn Registry>,
        dispatcher: OutboundDispatcher,
        ledger: Arc<dyn MessageLedger>,
    ) -> Self {
        Self {
            registry,
            dispatcher,
            ledger,
        }
    }

    pub async fn search(
        &self,
        context: &Context,
        criteria: SearchCriteria,
    ) -> Result<Option<LedgerEntry>, ApplicationError> {
        let endpoint = match criteria.bpp_id.as_deref().filter(|id| !id.trim().is_empty()) {
            Some(bpp_id) => self.registry.lookup_bpp(bpp_id).await?,
            None => {
                self.registry
                    .lookup_gateway(&context.domain, &context.country, &context.city)
                    .await?
            }
        }
        .subscriber_url;

        self.submit(&endpoint, context, DispatchPayload::Search(criteria))
            .await
            .map(Some)
    }

    pub async fn get_quote(
        &self,
        context: &Context,
        items: Vec<CartItem>,
    ) -> Result<Option<LedgerEntry>, ApplicationError> {
        let Some(endpoint) = self.resolve_selection(&items).await? else {
            return Ok(None);
        };
        self.submit(&endpoint, context, DispatchPayload::Select(items))
            .await
            .map(Some)
    }

    pub async fn initialize_order(
        &self,
        context: &Context,
        order: ClientOrder,
    ) -> Result<Option<LedgerEntry>, ApplicationError> {
        let Some(endpoint) = self.resolve_selection(&order.items).await? else {
            return Ok(None);
        };
        self.submit(&endpoint, context, DispatchPayload::Init(order))
            .await
            .map(Some)
    }

    pub async fn confirm_order(
        &self,
        context: &Context,
        order: ClientOrder,
    ) -> Result<Option<LedgerEntry>, ApplicationError> {
        let Some(endpoint) = self.resolve_selection(&order.items).await? else {
            return Ok(None);
        };
        self.submit(&endpoint, context, DispatchPayload::Confirm(order))
            .await
            .map(Some)
    }

    pub async fn track(
        &self,
        context: &Context,
        order_id: String,
        callback_url: Option<String>,
    ) -> Result<Option<LedgerEntry>, ApplicationError> {
        let endpoint = self.resolve_bpp(context.bpp_id.as_deref()).await?;
        self.submit(
            &endpoint,
            context,
            DispatchPayload::Track {
                order_id,
                callback_url,
            },
        )
        .await
        .map(Some)
    }

    pub async fn get_support(
        &self,
        context: &Context,
        bpp_id: Option<&str>,
        ref_id: String,
    ) -> Result<Option<LedgerEntry>, ApplicationError> {
        let endpoint = self.resolve_bpp(bpp_id).await?;
        self.submit(&endpoint, context, DispatchPayload::Support { ref_id })
            .await
            .map(Some)
    }

    async fn resolve_selection(
        &self,
        items: &[CartItem],
    ) -> Result<Option<String>, ApplicationError> {
        match validate_selection(items)? {
            Selection::Empty => {
                info!("Empty selection, nothing to send");
                Ok(None)
            }
            Selection::Single { bpp_id, .. } => {
                Ok(Some(self.registry.lookup_bpp(bpp_id).await?.subscriber_url))
            }
        }
    }

    async fn resolve_bpp(&self, bpp_id: Option<&str>) -> Result<String, ApplicationError> {
        let bpp_id = bpp_id
            .filter(|id| !id.trim().is_empty())
            .ok_or(ValidationError::BppIdNotPresent)?;
        Ok(self.registry.lookup_bpp(bpp_id).await?.subscriber_url)
    }

    async fn submit(
        &self,
        endpoint: &str,
        context: &Context,
        payload: DispatchPayload,
    ) -> Result<LedgerEntry, ApplicationError> {
        self.dispatcher.dispatch(endpoint, context, &payload).await?;

        let entry = LedgerEntry::new(&context.message_id, payload.action().into());
        let recorded = self.ledger.record(entry).await.map_err(|e| {
            error!(message_id = %context.message_id, error = %e, "Failed to record message");
            DatabaseError::OnWrite
        })?;
        info!(message_id = %recorded.message_id, message_type = ?recorded.message_type, "Message recorded");
        Ok(recorded)
    }
}
