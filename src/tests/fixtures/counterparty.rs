// Scripted counterparty network: every client it hands out answers the same
// way and every call is recorded with the endpoint it was addressed to.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::modules::bap::adapters::outbound::counterparty::{
    CounterpartyClient, CounterpartyClientFactory, CounterpartyResponse, TransportError,
};
use crate::modules::bap::core::requests::OutboundRequest;
use crate::shared::core::ack::{AckResponse, ResponseMessage};

#[derive(Debug, Clone, Copy)]
pub enum Reply {
    Ack,
    Nack,
    NullBody,
    Status(u16),
    Unreachable,
    TimedOut,
}

#[derive(Debug, Clone)]
pub struct Call {
    pub endpoint: String,
    pub request: OutboundRequest,
}

pub struct StubCounterparties {
    reply: Reply,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl StubCounterparties {
    pub fn replying(reply: Reply) -> Self {
        Self {
            reply,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.calls.lock().await.clone()
    }
}

impl CounterpartyClientFactory for StubCounterparties {
    fn client(&self, base_endpoint: &str) -> Arc<dyn CounterpartyClient> {
        Arc::new(StubClient {
            endpoint: base_endpoint.to_string(),
            reply: self.reply,
            calls: self.calls.clone(),
        })
    }
}

struct StubClient {
    endpoint: String,
    reply: Reply,
    calls: Arc<Mutex<Vec<Call>>>,
}

#[async_trait]
impl CounterpartyClient for StubClient {
    async fn send(&self, request: &OutboundRequest) -> Result<CounterpartyResponse, TransportError> {
        self.calls.lock().await.push(Call {
            endpoint: self.endpoint.clone(),
            request: request.clone(),
        });

        let answer = |message: ResponseMessage| AckResponse {
            context: Some(request.context().clone()),
            message,
            error: None,
        };
        match self.reply {
            Reply::Ack => Ok(CounterpartyResponse {
                status: 200,
                body: Some(answer(ResponseMessage::ack())),
            }),
            Reply::Nack => Ok(CounterpartyResponse {
                status: 200,
                body: Some(answer(ResponseMessage::nack())),
            }),
            Reply::NullBody => Ok(CounterpartyResponse {
                status: 200,
                body: None,
            }),
            Reply::Status(status) => Ok(CounterpartyResponse { status, body: None }),
            Reply::Unreachable => Err(TransportError::Request("connection refused".into())),
            Reply::TimedOut => Err(TransportError::Timeout),
        }
    }
}
