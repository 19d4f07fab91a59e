// Fixed subscriber list standing in for a network registry.
//
// Purpose
// - Back handler and router tests without a registry service.
//
// Responsibilities
// - Answer lookups by filtering the configured subscribers.
// - Remember every lookup it served.
// - Fail every lookup while offline.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::modules::bap::adapters::outbound::registry::{LookupRequest, Registry, Subscriber};
use crate::shared::core::errors::RegistryError;

#[derive(Default)]
pub struct StaticRegistry {
    subscribers: Vec<Subscriber>,
    lookups: Mutex<Vec<LookupRequest>>,
    is_offline: bool,
}

impl StaticRegistry {
    pub fn new(subscribers: Vec<Subscriber>) -> Self {
        Self {
            subscribers,
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn lookups(&self) -> Vec<LookupRequest> {
        self.lookups.lock().await.clone()
    }
}

fn matches(filter: &Option<String>, value: &Option<String>) -> bool {
    match (filter, value) {
        (Some(wanted), Some(actual)) => wanted == actual,
        _ => true,
    }
}

#[async_trait]
impl Registry for StaticRegistry {
    async fn lookup(&self, request: &LookupRequest) -> Result<Vec<Subscriber>, RegistryError> {
        self.lookups.lock().await.push(request.clone());
        if self.is_offline {
            return Err(RegistryError::Internal);
        }

        Ok(self
            .subscribers
            .iter()
            .filter(|s| {
                request
                    .subscriber_id
                    .as_ref()
                    .is_none_or(|id| *id == s.subscriber_id)
            })
            .filter(|s| {
                request
                    .subscriber_type
                    .is_none_or(|kind| kind == s.subscriber_type)
            })
            .filter(|s| matches(&request.domain, &s.domain))
            .filter(|s| matches(&request.country, &s.country))
            .filter(|s| matches(&request.city, &s.city))
            .cloned()
            .collect())
    }
}
