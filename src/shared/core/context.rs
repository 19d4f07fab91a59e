use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Search,
    Select,
    Init,
    Confirm,
    Track,
    Support,
    OnSearch,
    OnSelect,
    OnInit,
    OnConfirm,
    OnTrack,
    OnSupport,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Search => "search",
            Action::Select => "select",
            Action::Init => "init",
            Action::Confirm => "confirm",
            Action::Track => "track",
            Action::Support => "support",
            Action::OnSearch => "on_search",
            Action::OnSelect => "on_select",
            Action::OnInit => "on_init",
            Action::OnConfirm => "on_confirm",
            Action::OnTrack => "on_track",
            Action::OnSupport => "on_support",
        }
    }

    /// The action a counterparty answers with. Callback actions map to themselves.
    pub fn callback(&self) -> Action {
        match self {
            Action::Search | Action::OnSearch => Action::OnSearch,
            Action::Select | Action::OnSelect => Action::OnSelect,
            Action::Init | Action::OnInit => Action::OnInit,
            Action::Confirm | Action::OnConfirm => Action::OnConfirm,
            Action::Track | Action::OnTrack => Action::OnTrack,
            Action::Support | Action::OnSupport => Action::OnSupport,
        }
    }

    /// The request action a callback answers. Request actions map to themselves.
    pub fn request(&self) -> Action {
        match self {
            Action::Search | Action::OnSearch => Action::Search,
            Action::Select | Action::OnSelect => Action::Select,
            Action::Init | Action::OnInit => Action::Init,
            Action::Confirm | Action::OnConfirm => Action::Confirm,
            Action::Track | Action::OnTrack => Action::Track,
            Action::Support | Action::OnSupport => Action::Support,
        }
    }
}

/// Protocol context attached to every request and callback.
///
/// `message_id` is the correlation key: a callback belongs to the submission
/// whose context carried the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub domain: String,
    pub country: String,
    pub city: String,
    pub action: Action,
    pub core_version: String,
    pub bap_id: String,
    pub bap_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bpp_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bpp_uri: Option<String>,
    pub transaction_id: String,
    pub message_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextDefaults {
    pub domain: String,
    pub country: String,
    pub city: String,
    pub core_version: String,
    pub bap_id: String,
    pub bap_uri: String,
}

#[derive(Debug, Clone)]
pub struct ContextFactory {
    defaults: ContextDefaults,
}

impl ContextFactory {
    pub fn new(defaults: ContextDefaults) -> Self {
        Self { defaults }
    }

    pub fn create(&self, action: Action, transaction_id: Option<&str>) -> Context {
        let transaction_id = transaction_id
            .filter(|id| !id.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::now_v7().to_string());
        self.build(action, transaction_id, Uuid::now_v7().to_string())
    }

    pub fn with_message_id(&self, action: Action, message_id: &str) -> Context {
        self.build(action, Uuid::now_v7().to_string(), message_id.to_string())
    }

    fn build(&self, action: Action, transaction_id: String, message_id: String) -> Context {
        Context {
            domain: self.defaults.domain.clone(),
            country: self.defaults.country.clone(),
            city: self.defaults.city.clone(),
            action,
            core_version: self.defaults.core_version.clone(),
            bap_id: self.defaults.bap_id.clone(),
            bap_uri: self.defaults.bap_uri.clone(),
            bpp_id: None,
            bpp_uri: None,
            transaction_id,
            message_id,
            timestamp: Utc::now(),
        }
    }
}
