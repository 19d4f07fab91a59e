use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::core::context::Action;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    Search,
    Select,
    Init,
    Confirm,
    Track,
    Support,
}

impl From<Action> for MessageType {
    fn from(action: Action) -> Self {
        match action.request() {
            Action::Search => MessageType::Search,
            Action::Select => MessageType::Select,
            Action::Init => MessageType::Init,
            Action::Confirm => MessageType::Confirm,
            Action::Track => MessageType::Track,
            _ => MessageType::Support,
        }
    }
}

/// Proof that a message id was submitted and acknowledged by a counterparty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub message_id: String,
    pub message_type: MessageType,
    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    pub fn new(message_id: impl Into<String>, message_type: MessageType) -> Self {
        Self {
            message_id: message_id.into(),
            message_type,
            created_at: Utc::now(),
        }
    }
}

#[async_trait]
pub trait MessageLedger: Send + Sync {
    /// Writes the entry once; recording an already known id keeps the first entry.
    async fn record(&self, entry: LedgerEntry) -> Result<LedgerEntry, LedgerError>;
    async fn find(&self, message_id: &str) -> Result<Option<LedgerEntry>, LedgerError>;

    async fn exists(&self, message_id: &str) -> Result<bool, LedgerError> {
        Ok(self.find(message_id).await?.is_some())
    }
}

pub mod in_memory;
