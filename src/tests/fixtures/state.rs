use axum::Router;
use std::sync::Arc;

use crate::modules::bap::adapters::outbound::registry_static::StaticRegistry;
use crate::modules::bap::core::callbacks::{OnConfirm, OnInit, OnSearch, OnSelect, OnSupport, OnTrack};
use crate::shared::infrastructure::callback_store::Correlated;
use crate::shared::infrastructure::callback_store::in_memory::InMemoryCallbackStore;
use crate::shared::infrastructure::message_ledger::in_memory::InMemoryMessageLedger;
use crate::shell::http::router;
use crate::shell::state::{AppState, CallbackStores};
use crate::tests::fixtures::contexts::context_factory;
use crate::tests::fixtures::counterparty::{Reply, StubCounterparties};
use crate::tests::fixtures::registry::{bpp, gateway};

/// Fully wired application over in-memory storage, a static registry and a
/// scripted counterparty network.
pub struct TestApp {
    pub state: AppState,
    pub registry: Arc<StaticRegistry>,
    pub network: Arc<StubCounterparties>,
    pub ledger: Arc<InMemoryMessageLedger>,
    pub stores: CallbackStores,
}

fn offline<R: Correlated + Clone + Send + Sync + 'static>() -> Arc<InMemoryCallbackStore<R>> {
    let mut store = InMemoryCallbackStore::new();
    store.toggle_offline();
    Arc::new(store)
}

impl TestApp {
    pub fn new(reply: Reply) -> Self {
        Self::build(reply, CallbackStores::in_memory())
    }

    pub fn with_offline_stores(reply: Reply) -> Self {
        let stores = CallbackStores {
            on_search: offline::<OnSearch>(),
            on_select: offline::<OnSelect>(),
            on_init: offline::<OnInit>(),
            on_confirm: offline::<OnConfirm>(),
            on_track: offline::<OnTrack>(),
            on_support: offline::<OnSupport>(),
        };
        Self::build(reply, stores)
    }

    fn build(reply: Reply, stores: CallbackStores) -> Self {
        let registry = Arc::new(StaticRegistry::new(vec![
            gateway("bg-1"),
            bpp("bpp-1"),
            bpp("bpp-2"),
        ]));
        let network = Arc::new(StubCounterparties::replying(reply));
        let ledger = Arc::new(InMemoryMessageLedger::new());
        let state = AppState::new(
            context_factory(),
            registry.clone(),
            network.clone(),
            ledger.clone(),
            stores.clone(),
        );
        Self {
            state,
            registry,
            network,
            ledger,
            stores,
        }
    }

    pub fn router(&self) -> Router {
        router(self.state.clone())
    }
}
