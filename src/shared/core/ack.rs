use serde::{Deserialize, Serialize};

use crate::shared::core::context::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AckStatus {
    Ack,
    Nack,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub status: AckStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMessage {
    pub ack: Ack,
}

impl ResponseMessage {
    pub fn ack() -> Self {
        Self {
            ack: Ack {
                status: AckStatus::Ack,
            },
        }
    }

    pub fn nack() -> Self {
        Self {
            ack: Ack {
                status: AckStatus::Nack,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolError {
    pub code: String,
    pub message: String,
}

impl ProtocolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Synchronous acknowledgement, both the one counterparties send us and the
/// one we send to clients and callback senders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
    pub message: ResponseMessage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ProtocolError>,
}

impl AckResponse {
    pub fn ack(context: Context) -> Self {
        Self {
            context: Some(context),
            message: ResponseMessage::ack(),
            error: None,
        }
    }

    pub fn nack(context: Context, error: ProtocolError) -> Self {
        Self {
            context: Some(context),
            message: ResponseMessage::nack(),
            error: Some(error),
        }
    }

    pub fn is_nack(&self) -> bool {
        self.message.ack.status == AckStatus::Nack
    }
}
