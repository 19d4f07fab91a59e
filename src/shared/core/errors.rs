// Error catalog shared by every flow.
//
// Each family knows its HTTP status and the protocol error body clients see,
// so inbound adapters can answer any failure with the same NACK shape.

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::core::ack::{ProtocolError, ResponseMessage};

pub trait HttpError {
    fn status(&self) -> StatusCode;
    fn error(&self) -> ProtocolError;
    fn message(&self) -> ResponseMessage {
        ResponseMessage::nack()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BppError {
    #[error("BPP returned error")]
    Internal,
    #[error("BPP returned null")]
    NullResponse,
    #[error("BPP returned nack")]
    Nack,
}

impl HttpError for BppError {
    fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error(&self) -> ProtocolError {
        let code = match self {
            BppError::Internal => "BAP_011",
            BppError::NullResponse => "BAP_012",
            BppError::Nack => "BAP_013",
        };
        ProtocolError::new(code, self.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("More than one Provider's item(s) selected/initialized")]
    MultipleProviders,
    #[error("More than one BPP's item(s) selected/initialized")]
    MultipleBpps,
    #[error("BPP Id is mandatory")]
    BppIdNotPresent,
    #[error("Request body could not be read")]
    MalformedBody,
    #[error("Message Id is mandatory")]
    MessageIdNotPresent,
}

impl HttpError for ValidationError {
    fn status(&self) -> StatusCode {
        match self {
            ValidationError::MalformedBody => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error(&self) -> ProtocolError {
        let code = match self {
            ValidationError::MultipleProviders => "BAP_010",
            ValidationError::MultipleBpps => "BAP_014",
            ValidationError::BppIdNotPresent => "BAP_015",
            ValidationError::MalformedBody => "BAP_017",
            ValidationError::MessageIdNotPresent => "BAP_018",
        };
        ProtocolError::new(code, self.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatabaseError {
    #[error("Error when reading from DB")]
    OnRead,
    #[error("Error when writing to DB")]
    OnWrite,
}

impl HttpError for DatabaseError {
    fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error(&self) -> ProtocolError {
        let code = match self {
            DatabaseError::OnWrite => "BAP_006",
            DatabaseError::OnRead => "BAP_007",
        };
        ProtocolError::new(code, self.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Registry lookup returned error")]
    Internal,
    #[error("Registry lookup did not return any gateways")]
    NoGatewayFound,
    #[error("Registry lookup returned null")]
    NullResponse,
    #[error("Registry lookup did not return any BPPs")]
    NoBppFound,
}

impl HttpError for RegistryError {
    fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error(&self) -> ProtocolError {
        let code = match self {
            RegistryError::Internal => "BAP_001",
            RegistryError::NoGatewayFound => "BAP_002",
            RegistryError::NullResponse => "BAP_003",
            RegistryError::NoBppFound => "BAP_004",
        };
        ProtocolError::new(code, self.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PollError {
    #[error("No message with the given ID")]
    NotFound { message_id: String },
    #[error(transparent)]
    Storage(#[from] DatabaseError),
}

impl HttpError for PollError {
    fn status(&self) -> StatusCode {
        match self {
            PollError::NotFound { .. } => StatusCode::NOT_FOUND,
            PollError::Storage(e) => e.status(),
        }
    }

    fn error(&self) -> ProtocolError {
        match self {
            PollError::NotFound { .. } => ProtocolError::new("BAP_016", self.to_string()),
            PollError::Storage(e) => e.error(),
        }
    }
}
