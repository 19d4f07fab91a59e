// Collapses the callback records stored under one message id into the
// response a polling client receives.
//
// - Context comes from the first record, or is minted for the requested
//   message id when nothing has arrived yet.
// - The first error found among the records is surfaced.
// - The payload fold is per callback type (see `CallbackMessage::fold`).

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::modules::bap::core::callbacks::{CallbackEnvelope, CallbackMessage};
use crate::modules::bap::core::schema::Catalog;
use crate::shared::core::ack::ProtocolError;
use crate::shared::core::context::{Context, ContextFactory};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollResponse<A> {
    pub context: Context,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub message: Option<A>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ProtocolError>,
}

/// A catalog tagged with the counterparty that sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientCatalog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bpp_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bpp_uri: Option<String>,
    #[serde(flatten)]
    pub catalog: Catalog,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchAggregate {
    pub catalogs: Vec<ClientCatalog>,
}

pub fn aggregate<M: CallbackMessage>(
    message_id: &str,
    records: Vec<CallbackEnvelope<M>>,
    contexts: &ContextFactory,
) -> PollResponse<M::Aggregate> {
    let context = match records.first() {
        Some(record) => canonical_context::<M>(&record.context),
        None => contexts.with_message_id(M::ACTION, message_id),
    };
    let error = records.iter().find_map(|record| record.error.clone());
    let message = M::fold(records);

    PollResponse {
        context,
        message,
        error,
    }
}

/// The first record is authoritative for single-responder actions.
pub fn first_message<M: CallbackMessage>(records: Vec<CallbackEnvelope<M>>) -> Option<M> {
    if records.len() > 1 {
        warn!(
            action = M::ACTION.as_str(),
            count = records.len(),
            "Multiple callbacks for a single-responder action, keeping the first"
        );
    }
    records.into_iter().next().and_then(|record| record.message)
}

fn canonical_context<M: CallbackMessage>(context: &Context) -> Context {
    let mut context = context.clone();
    context.action = M::ACTION;
    if M::BROADCAST {
        context.bpp_id = None;
        context.bpp_uri = None;
    }
    context
}
