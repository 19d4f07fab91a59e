use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::bap::core::aggregate::PollResponse;
use crate::modules::bap::core::callbacks::CallbackMessage;
use crate::modules::bap::use_cases::poll::handler::OnPollHandler;
use crate::shared::core::errors::{HttpError, ValidationError};
use crate::shell::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PollParams {
    #[serde(rename = "messageId")]
    pub message_id: String,
}

type Params = Result<Query<PollParams>, QueryRejection>;

fn failure<M: CallbackMessage>(
    poller: &OnPollHandler<M>,
    message_id: Option<&str>,
    e: &impl HttpError,
) -> Response {
    let context = match message_id {
        Some(id) => poller.contexts().with_message_id(M::ACTION, id),
        None => poller.contexts().create(M::ACTION, None),
    };
    let body: PollResponse<M::Aggregate> = PollResponse {
        context,
        message: None,
        error: Some(e.error()),
    };
    (e.status(), Json(body)).into_response()
}

async fn poll<M: CallbackMessage>(poller: &OnPollHandler<M>, params: Params) -> Response {
    let message_id = match params {
        Ok(Query(params)) if !params.message_id.trim().is_empty() => params.message_id,
        _ => return failure(poller, None, &ValidationError::MessageIdNotPresent),
    };

    match poller.on_poll(&message_id).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => failure(poller, Some(&message_id), &e),
    }
}

pub async fn on_search(State(state): State<AppState>, params: Params) -> Response {
    poll(&state.pollers.on_search, params).await
}

pub async fn on_get_quote(State(state): State<AppState>, params: Params) -> Response {
    poll(&state.pollers.on_select, params).await
}

pub async fn on_initialize_order(State(state): State<AppState>, params: Params) -> Response {
    poll(&state.pollers.on_init, params).await
}

pub async fn on_confirm_order(State(state): State<AppState>, params: Params) -> Response {
    poll(&state.pollers.on_confirm, params).await
}

pub async fn on_track(State(state): State<AppState>, params: Params) -> Response {
    poll(&state.pollers.on_track, params).await
}

pub async fn on_support(State(state): State<AppState>, params: Params) -> Response {
    poll(&state.pollers.on_support, params).await
}
