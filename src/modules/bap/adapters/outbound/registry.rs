use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::core::errors::RegistryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubscriberType {
    Bap,
    Bpp,
    Bg,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscriber {
    pub subscriber_id: String,
    pub subscriber_url: String,
    #[serde(rename = "type")]
    pub subscriber_type: SubscriberType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriber_id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub subscriber_type: Option<SubscriberType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl LookupRequest {
    pub fn bpp(bpp_id: &str) -> Self {
        Self {
            subscriber_id: Some(bpp_id.to_string()),
            subscriber_type: Some(SubscriberType::Bpp),
            ..Self::default()
        }
    }

    pub fn gateways(domain: &str, country: &str, city: &str) -> Self {
        Self {
            subscriber_type: Some(SubscriberType::Bg),
            domain: Some(domain.to_string()),
            country: Some(country.to_string()),
            city: Some(city.to_string()),
            ..Self::default()
        }
    }
}

/// Resolves counterparty identities to network endpoints.
#[async_trait]
pub trait Registry: Send + Sync {
    async fn lookup(&self, request: &LookupRequest) -> Result<Vec<Subscriber>, RegistryError>;

    async fn lookup_bpp(&self, bpp_id: &str) -> Result<Subscriber, RegistryError> {
        self.lookup(&LookupRequest::bpp(bpp_id))
            .await?
            .into_iter()
            .next()
            .ok_or(RegistryError::NoBppFound)
    }

    async fn lookup_gateway(
        &self,
        domain: &str,
        country: &str,
        city: &str,
    ) -> Result<Subscriber, RegistryError> {
        self.lookup(&LookupRequest::gateways(domain, country, city))
            .await?
            .into_iter()
            .next()
            .ok_or(RegistryError::NoGatewayFound)
    }
}
