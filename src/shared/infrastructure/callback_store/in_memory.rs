use crate::shared::infrastructure::callback_store::{CallbackStore, CallbackStoreError, Correlated};
use tokio::sync::RwLock;

pub struct InMemoryCallbackStore<R: Correlated + Clone + Send + Sync + 'static> {
    rows: RwLock<Vec<R>>,
    is_offline: bool,
}

impl<R: Correlated + Clone + Send + Sync + 'static> Default for InMemoryCallbackStore<R> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            is_offline: false,
        }
    }
}

impl<R: Correlated + Clone + Send + Sync + 'static> InMemoryCallbackStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn clear(&self) {
        self.rows.write().await.clear();
    }
}

#[async_trait::async_trait]
impl<R> CallbackStore<R> for InMemoryCallbackStore<R>
where
    R: Correlated + Clone + Send + Sync + 'static,
{
    async fn append(&self, record: R) -> Result<(), CallbackStoreError> {
        if self.is_offline {
            return Err(CallbackStoreError::Backend("Callback store offline".into()));
        }

        self.rows.write().await.push(record);
        Ok(())
    }

    async fn find_all_by_message_id(&self, message_id: &str) -> Result<Vec<R>, CallbackStoreError> {
        if self.is_offline {
            return Err(CallbackStoreError::Backend("Callback store offline".into()));
        }

        let guard = self.rows.read().await;
        Ok(guard
            .iter()
            .filter(|row| row.message_id() == message_id)
            .cloned()
            .collect())
    }
}
