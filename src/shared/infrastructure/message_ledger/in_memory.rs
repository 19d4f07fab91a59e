// In memory implementation of the MessageLedger port.
//
// Purpose
// - Back local runs and handler tests without a document store.
//
// Responsibilities
// - Keep one entry per message id.
// - Fail every call while offline.

use crate::shared::infrastructure::message_ledger::{LedgerEntry, LedgerError, MessageLedger};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryMessageLedger {
    entries: RwLock<HashMap<String, LedgerEntry>>,
    is_offline: bool,
}

impl InMemoryMessageLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl MessageLedger for InMemoryMessageLedger {
    async fn record(&self, entry: LedgerEntry) -> Result<LedgerEntry, LedgerError> {
        if self.is_offline {
            return Err(LedgerError::Backend("Message ledger offline".into()));
        }

        let mut guard = self.entries.write().await;
        let stored = guard
            .entry(entry.message_id.clone())
            .or_insert(entry)
            .clone();
        Ok(stored)
    }

    async fn find(&self, message_id: &str) -> Result<Option<LedgerEntry>, LedgerError> {
        if self.is_offline {
            return Err(LedgerError::Backend("Message ledger offline".into()));
        }

        Ok(self.entries.read().await.get(message_id).cloned())
    }
}
