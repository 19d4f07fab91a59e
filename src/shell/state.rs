use std::sync::Arc;

use crate::modules::bap::adapters::outbound::counterparty::CounterpartyClientFactory;
use crate::modules::bap::adapters::outbound::registry::Registry;
use crate::modules::bap::core::callbacks::{
    OnConfirm, OnConfirmMessage, OnInit, OnInitMessage, OnSearch, OnSearchMessage, OnSelect,
    OnSelectMessage, OnSupport, OnSupportMessage, OnTrack, OnTrackMessage,
};
use crate::modules::bap::use_cases::callback::handler::CallbackHandler;
use crate::modules::bap::use_cases::dispatch::handler::OutboundDispatcher;
use crate::modules::bap::use_cases::poll::handler::OnPollHandler;
use crate::modules::bap::use_cases::submit::handler::SubmitHandler;
use crate::shared::core::context::ContextFactory;
use crate::shared::infrastructure::callback_store::CallbackStore;
use crate::shared::infrastructure::callback_store::in_memory::InMemoryCallbackStore;
use crate::shared::infrastructure::message_ledger::MessageLedger;

/// One callback store per callback type.
#[derive(Clone)]
pub struct CallbackStores {
    pub on_search: Arc<dyn CallbackStore<OnSearch>>,
    pub on_select: Arc<dyn CallbackStore<OnSelect>>,
    pub on_init: Arc<dyn CallbackStore<OnInit>>,
    pub on_confirm: Arc<dyn CallbackStore<OnConfirm>>,
    pub on_track: Arc<dyn CallbackStore<OnTrack>>,
    pub on_support: Arc<dyn CallbackStore<OnSupport>>,
}

impl CallbackStores {
    pub fn in_memory() -> Self {
        Self {
            on_search: Arc::new(InMemoryCallbackStore::<OnSearch>::new()),
            on_select: Arc::new(InMemoryCallbackStore::<OnSelect>::new()),
            on_init: Arc::new(InMemoryCallbackStore::<OnInit>::new()),
            on_confirm: Arc::new(InMemoryCallbackStore::<OnConfirm>::new()),
            on_track: Arc::new(InMemoryCallbackStore::<OnTrack>::new()),
            on_support: Arc::new(InMemoryCallbackStore::<OnSupport>::new()),
        }
    }
}

pub struct Pollers {
    pub on_search: OnPollHandler<OnSearchMessage>,
    pub on_select: OnPollHandler<OnSelectMessage>,
    pub on_init: OnPollHandler<OnInitMessage>,
    pub on_confirm: OnPollHandler<OnConfirmMessage>,
    pub on_track: OnPollHandler<OnTrackMessage>,
    pub on_support: OnPollHandler<OnSupportMessage>,
}

pub struct CallbackHandlers {
    pub on_search: CallbackHandler<OnSearchMessage>,
    pub on_select: CallbackHandler<OnSelectMessage>,
    pub on_init: CallbackHandler<OnInitMessage>,
    pub on_confirm: CallbackHandler<OnConfirmMessage>,
    pub on_track: CallbackHandler<OnTrackMessage>,
    pub on_support: CallbackHandler<OnSupportMessage>,
}

#[derive(Clone)]
pub struct AppState {
    pub contexts: Arc<ContextFactory>,
    pub submit_handler: Arc<SubmitHandler>,
    pub pollers: Arc<Pollers>,
    pub callbacks: Arc<CallbackHandlers>,
}

impl AppState {
    pub fn new(
        contexts: ContextFactory,
        registry: Arc<dyn Registry>,
        clients: Arc<dyn CounterpartyClientFactory>,
        ledger: Arc<dyn MessageLedger>,
        stores: CallbackStores,
    ) -> Self {
        let contexts = Arc::new(contexts);
        let submit_handler = Arc::new(SubmitHandler::new(
            registry,
            OutboundDispatcher::new(clients),
            ledger.clone(),
        ));
        let pollers = Arc::new(Pollers {
            on_search: OnPollHandler::new(ledger.clone(), stores.on_search.clone(), contexts.clone()),
            on_select: OnPollHandler::new(ledger.clone(), stores.on_select.clone(), contexts.clone()),
            on_init: OnPollHandler::new(ledger.clone(), stores.on_init.clone(), contexts.clone()),
            on_confirm: OnPollHandler::new(ledger.clone(), stores.on_confirm.clone(), contexts.clone()),
            on_track: OnPollHandler::new(ledger.clone(), stores.on_track.clone(), contexts.clone()),
            on_support: OnPollHandler::new(ledger, stores.on_support.clone(), contexts.clone()),
        });
        let callbacks = Arc::new(CallbackHandlers {
            on_search: CallbackHandler::new(stores.on_search),
            on_select: CallbackHandler::new(stores.on_select),
            on_init: CallbackHandler::new(stores.on_init),
            on_confirm: CallbackHandler::new(stores.on_confirm),
            on_track: CallbackHandler::new(stores.on_track),
            on_support: CallbackHandler::new(stores.on_support),
        });

        Self {
            contexts,
            submit_handler,
            pollers,
            callbacks,
        }
    }
}
