use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CallbackStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Anything stored under a correlation key.
pub trait Correlated {
    fn message_id(&self) -> &str;
}

/// Append-only store of callback records. Reads return every record with the
/// given message id in insertion order, duplicates included.
#[async_trait]
pub trait CallbackStore<R>: Send + Sync
where
    R: Correlated + Clone + Send + Sync + 'static,
{
    async fn append(&self, record: R) -> Result<(), CallbackStoreError>;
    async fn find_all_by_message_id(&self, message_id: &str) -> Result<Vec<R>, CallbackStoreError>;
}

pub mod in_memory;
