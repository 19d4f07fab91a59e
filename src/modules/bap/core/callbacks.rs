use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::modules::bap::core::aggregate::{ClientCatalog, SearchAggregate, first_message};
use crate::modules::bap::core::schema::{Catalog, Order, Tracking};
use crate::shared::core::ack::ProtocolError;
use crate::shared::core::context::{Action, Context};
use crate::shared::infrastructure::callback_store::Correlated;

/// One asynchronous callback as a counterparty posted it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackEnvelope<M> {
    pub context: Context,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub message: Option<M>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ProtocolError>,
}

impl<M> Correlated for CallbackEnvelope<M> {
    fn message_id(&self) -> &str {
        &self.context.message_id
    }
}

/// Payload of a callback type, and how records of that type collapse into
/// the single answer a polling client receives.
pub trait CallbackMessage:
    Debug + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const ACTION: Action;
    /// Broadcast actions collect answers from several responders.
    const BROADCAST: bool = false;

    type Aggregate: Debug + Clone + PartialEq + Serialize + Send + Sync + 'static;

    fn fold(records: Vec<CallbackEnvelope<Self>>) -> Option<Self::Aggregate>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnSearchMessage {
    #[serde(default)]
    pub catalog: Catalog,
}

impl CallbackMessage for OnSearchMessage {
    const ACTION: Action = Action::OnSearch;
    const BROADCAST: bool = true;

    type Aggregate = SearchAggregate;

    fn fold(records: Vec<CallbackEnvelope<Self>>) -> Option<SearchAggregate> {
        let catalogs = records
            .into_iter()
            .filter_map(|record| {
                let catalog = record.message?.catalog;
                Some(ClientCatalog {
                    bpp_id: record.context.bpp_id,
                    bpp_uri: record.context.bpp_uri,
                    catalog,
                })
            })
            .collect();
        Some(SearchAggregate { catalogs })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnSelectMessage {
    #[serde(default)]
    pub selected: Order,
}

impl CallbackMessage for OnSelectMessage {
    const ACTION: Action = Action::OnSelect;
    type Aggregate = Self;

    fn fold(records: Vec<CallbackEnvelope<Self>>) -> Option<Self> {
        first_message(records)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnInitMessage {
    #[serde(default)]
    pub initialized: Order,
}

impl CallbackMessage for OnInitMessage {
    const ACTION: Action = Action::OnInit;
    type Aggregate = Self;

    fn fold(records: Vec<CallbackEnvelope<Self>>) -> Option<Self> {
        first_message(records)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnConfirmMessage {
    #[serde(default)]
    pub order: Order,
}

impl CallbackMessage for OnConfirmMessage {
    const ACTION: Action = Action::OnConfirm;
    type Aggregate = Self;

    fn fold(records: Vec<CallbackEnvelope<Self>>) -> Option<Self> {
        first_message(records)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnTrackMessage {
    #[serde(default)]
    pub tracking: Tracking,
}

impl CallbackMessage for OnTrackMessage {
    const ACTION: Action = Action::OnTrack;
    type Aggregate = Self;

    fn fold(records: Vec<CallbackEnvelope<Self>>) -> Option<Self> {
        first_message(records)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnSupportMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl CallbackMessage for OnSupportMessage {
    const ACTION: Action = Action::OnSupport;
    type Aggregate = Self;

    fn fold(records: Vec<CallbackEnvelope<Self>>) -> Option<Self> {
        first_message(records)
    }
}

pub type OnSearch = CallbackEnvelope<OnSearchMessage>;
pub type OnSelect = CallbackEnvelope<OnSelectMessage>;
pub type OnInit = CallbackEnvelope<OnInitMessage>;
pub type OnConfirm = CallbackEnvelope<OnConfirmMessage>;
pub type OnTrack = CallbackEnvelope<OnTrackMessage>;
pub type OnSupport = CallbackEnvelope<OnSupportMessage>;
