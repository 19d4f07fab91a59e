use axum::{
    Json,
    extract::State,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::modules::bap::core::callbacks::{
    CallbackEnvelope, CallbackMessage, OnConfirm, OnInit, OnSearch, OnSelect, OnSupport, OnTrack,
};
use crate::modules::bap::use_cases::callback::handler::CallbackHandler;
use crate::shared::core::ack::AckResponse;
use crate::shared::core::context::ContextFactory;
use crate::shared::core::errors::{HttpError, ValidationError};
use crate::shell::state::AppState;

async fn ingest<M: CallbackMessage>(
    contexts: &ContextFactory,
    handler: &CallbackHandler<M>,
    body: Result<Json<CallbackEnvelope<M>>, JsonRejection>,
) -> Response {
    let record = match body {
        Ok(Json(record)) => record,
        Err(rejection) => {
            warn!(action = M::ACTION.as_str(), error = %rejection, "Rejected callback body");
            let error = ValidationError::MalformedBody;
            let context = contexts.create(M::ACTION, None);
            return (error.status(), Json(AckResponse::nack(context, error.error())))
                .into_response();
        }
    };
    let context = record.context.clone();

    match handler.handle(record).await {
        Ok(()) => (StatusCode::OK, Json(AckResponse::ack(context))).into_response(),
        Err(e) => (e.status(), Json(AckResponse::nack(context, e.error()))).into_response(),
    }
}

pub async fn on_search(
    State(state): State<AppState>,
    body: Result<Json<OnSearch>, JsonRejection>,
) -> Response {
    ingest(&state.contexts, &state.callbacks.on_search, body).await
}

pub async fn on_select(
    State(state): State<AppState>,
    body: Result<Json<OnSelect>, JsonRejection>,
) -> Response {
    ingest(&state.contexts, &state.callbacks.on_select, body).await
}

pub async fn on_init(
    State(state): State<AppState>,
    body: Result<Json<OnInit>, JsonRejection>,
) -> Response {
    ingest(&state.contexts, &state.callbacks.on_init, body).await
}

pub async fn on_confirm(
    State(state): State<AppState>,
    body: Result<Json<OnConfirm>, JsonRejection>,
) -> Response {
    ingest(&state.contexts, &state.callbacks.on_confirm, body).await
}

pub async fn on_track(
    State(state): State<AppState>,
    body: Result<Json<OnTrack>, JsonRejection>,
) -> Response {
    ingest(&state.contexts, &state.callbacks.on_track, body).await
}

pub async fn on_support(
    State(state): State<AppState>,
    body: Result<Json<OnSupport>, JsonRejection>,
) -> Response {
    ingest(&state.contexts, &state.callbacks.on_support, body).await
}
