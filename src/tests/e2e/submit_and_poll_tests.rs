use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::modules::bap::adapters::outbound::counterparty_http::HttpCounterpartyClientFactory;
use crate::modules::bap::adapters::outbound::registry_static::StaticRegistry;
use crate::modules::bap::use_cases::dispatch::handler::OutboundDispatcher;
use crate::modules::bap::use_cases::submit::handler::{ApplicationError, SubmitHandler};
use crate::shared::core::context::Action;
use crate::shared::core::errors::BppError;
use crate::shared::infrastructure::message_ledger::MessageLedger;
use crate::shared::infrastructure::message_ledger::in_memory::InMemoryMessageLedger;
use crate::tests::fixtures::callbacks::on_search;
use crate::tests::fixtures::carts::cart_item;
use crate::tests::fixtures::contexts::{callback_context, context_factory};
use crate::tests::fixtures::counterparty::Reply;
use crate::tests::fixtures::registry::bpp;
use crate::tests::fixtures::state::TestApp;
use crate::tests::fixtures::upstream::MockUpstream;

async fn call(app: &TestApp, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn poll_request(uri: &str, message_id: &str) -> Request<Body> {
    Request::get(format!("{uri}?messageId={message_id}"))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn it_should_correlate_a_quote_callback_with_its_submission() {
    let app = TestApp::new(Reply::Ack);
    let submit = json!({
        "context": { "transaction_id": "txn-7" },
        "message": { "cart": { "items": [{
            "id": "item-1",
            "bpp_id": "bpp-1",
            "provider": { "id": "provider-1", "locations": ["location-1"] },
            "quantity": { "count": 3 }
        }] } }
    });

    let (status, ack) = call(&app, json_request("PUT", "/client/v1/get_quote", submit)).await;
    assert_eq!(status, StatusCode::OK);
    let message_id = ack["context"]["message_id"].as_str().unwrap().to_string();

    let (status, pending) = call(&app, poll_request("/client/v1/on_get_quote", &message_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(pending.get("message").is_none());

    let callback = json!({
        "context": callback_context(Action::OnSelect, &message_id, "bpp-1"),
        "message": { "selected": {
            "provider": { "id": "provider-1" },
            "items": [{ "id": "item-1", "quantity": { "count": 3 } }],
            "quote": { "price": { "currency": "INR", "value": "300" } }
        } }
    });
    let (status, _) = call(&app, json_request("POST", "/protocol/v1/on_select", callback)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, answer) = call(&app, poll_request("/client/v1/on_get_quote", &message_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(answer["context"]["message_id"], message_id.as_str());
    assert_eq!(answer["context"]["action"], "on_select");
    assert_eq!(answer["message"]["selected"]["quote"]["price"]["value"], "300");
}

#[tokio::test]
async fn it_should_collect_catalogs_from_every_responder() {
    let app = TestApp::new(Reply::Ack);
    let submit = json!({ "message": { "criteria": { "search_string": "soap" } } });

    let (_, ack) = call(&app, json_request("POST", "/client/v1/search", submit)).await;
    let message_id = ack["context"]["message_id"].as_str().unwrap().to_string();

    for (bpp_id, store) in [("bpp-1", "Corner Store"), ("bpp-2", "Farm Fresh")] {
        let body = serde_json::to_value(on_search(&message_id, bpp_id, store)).unwrap();
        let (status, _) = call(&app, json_request("POST", "/protocol/v1/on_search", body)).await;
        assert_eq!(status, StatusCode::OK);
    }
    let stray = serde_json::to_value(on_search("someone-else", "bpp-3", "Stray")).unwrap();
    call(&app, json_request("POST", "/protocol/v1/on_search", stray)).await;

    let (status, answer) = call(&app, poll_request("/client/v1/on_search", &message_id)).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = answer["message"]["catalogs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["bpp/descriptor"]["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Corner Store", "Farm Fresh"]);
}

#[tokio::test]
async fn it_should_not_answer_polls_for_a_nacked_submission() {
    let app = TestApp::new(Reply::Nack);
    let submit = json!({ "message": { "ref_id": "order-1", "bpp_id": "bpp-1" } });

    let (status, nack) = call(&app, json_request("POST", "/client/v1/get_support", submit)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(nack["error"]["code"], "BAP_013");
    let message_id = nack["context"]["message_id"].as_str().unwrap().to_string();

    let (status, answer) = call(&app, poll_request("/client/v1/on_support", &message_id)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(answer["error"]["code"], "BAP_016");
}

#[tokio::test]
async fn it_should_leave_a_timed_out_quote_unrecorded() {
    let upstream = MockUpstream::start_delayed(
        200,
        r#"{"message":{"ack":{"status":"ACK"}}}"#,
        Duration::from_millis(800),
    )
    .await;
    let mut slow_bpp = bpp("bpp-1");
    slow_bpp.subscriber_url = upstream.base_url();
    let client = Client::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let ledger = Arc::new(InMemoryMessageLedger::new());
    let handler = SubmitHandler::new(
        Arc::new(StaticRegistry::new(vec![slow_bpp])),
        OutboundDispatcher::new(Arc::new(HttpCounterpartyClientFactory::new(client))),
        ledger.clone(),
    );
    let context = context_factory().create(Action::Select, None);

    let result = handler
        .get_quote(&context, vec![cart_item("item-1", "bpp-1", "provider-1")])
        .await;

    assert_eq!(result, Err(ApplicationError::Bpp(BppError::Internal)));
    assert!(!ledger.exists(&context.message_id).await.unwrap());
    assert!(ledger.is_empty().await);
    upstream.stop().await;
}
