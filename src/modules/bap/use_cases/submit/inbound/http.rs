use axum::{
    Json,
    extract::State,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::bap::core::cart::{Cart, ClientOrder, SearchCriteria};
use crate::modules::bap::use_cases::submit::handler::ApplicationError;
use crate::shared::core::ack::AckResponse;
use crate::shared::core::context::{Action, Context};
use crate::shared::core::errors::{HttpError, ValidationError};
use crate::shared::infrastructure::message_ledger::LedgerEntry;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ClientContextBody {
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub bpp_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ClientRequestBody<M> {
    #[serde(default)]
    pub context: ClientContextBody,
    pub message: M,
}

#[derive(Debug, Deserialize)]
pub struct SearchBody {
    pub criteria: SearchCriteria,
}

#[derive(Debug, Deserialize)]
pub struct GetQuoteBody {
    pub cart: Cart,
}

#[derive(Debug, Deserialize)]
pub struct OrderBody {
    pub order: ClientOrder,
}

#[derive(Debug, Deserialize)]
pub struct TrackBody {
    pub order_id: String,
    #[serde(default)]
    pub callback_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SupportBody {
    pub ref_id: String,
    #[serde(default)]
    pub bpp_id: Option<String>,
}

fn respond(context: Context, result: Result<Option<LedgerEntry>, ApplicationError>) -> Response {
    match result {
        Ok(_) => (StatusCode::OK, Json(AckResponse::ack(context))).into_response(),
        Err(e) => (
            e.status(),
            Json(AckResponse {
                context: Some(context),
                message: e.message(),
                error: Some(e.error()),
            }),
        )
            .into_response(),
    }
}

fn rejected(state: &AppState, action: Action) -> Response {
    let error = ValidationError::MalformedBody;
    let context = state.contexts.create(action, None);
    (error.status(), Json(AckResponse::nack(context, error.error()))).into_response()
}

fn mint(state: &AppState, action: Action, client: &ClientContextBody) -> Context {
    state
        .contexts
        .create(action, client.transaction_id.as_deref())
}

pub async fn search(
    State(state): State<AppState>,
    body: Result<Json<ClientRequestBody<SearchBody>>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return rejected(&state, Action::Search);
    };
    let context = mint(&state, Action::Search, &body.context);
    let result = state
        .submit_handler
        .search(&context, body.message.criteria)
        .await;
    respond(context, result)
}

pub async fn get_quote(
    State(state): State<AppState>,
    body: Result<Json<ClientRequestBody<GetQuoteBody>>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return rejected(&state, Action::Select);
    };
    let context = mint(&state, Action::Select, &body.context);
    let result = state
        .submit_handler
        .get_quote(&context, body.message.cart.items)
        .await;
    respond(context, result)
}

pub async fn initialize_order(
    State(state): State<AppState>,
    body: Result<Json<ClientRequestBody<OrderBody>>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return rejected(&state, Action::Init);
    };
    let context = mint(&state, Action::Init, &body.context);
    let result = state
        .submit_handler
        .initialize_order(&context, body.message.order)
        .await;
    respond(context, result)
}

pub async fn confirm_order(
    State(state): State<AppState>,
    body: Result<Json<ClientRequestBody<OrderBody>>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return rejected(&state, Action::Confirm);
    };
    let context = mint(&state, Action::Confirm, &body.context);
    let result = state
        .submit_handler
        .confirm_order(&context, body.message.order)
        .await;
    respond(context, result)
}

pub async fn track(
    State(state): State<AppState>,
    body: Result<Json<ClientRequestBody<TrackBody>>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return rejected(&state, Action::Track);
    };
    let mut context = mint(&state, Action::Track, &body.context);
    context.bpp_id = body.context.bpp_id;
    let result = state
        .submit_handler
        .track(&context, body.message.order_id, body.message.callback_url)
        .await;
    respond(context, result)
}

pub async fn get_support(
    State(state): State<AppState>,
    body: Result<Json<ClientRequestBody<SupportBody>>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return rejected(&state, Action::Support);
    };
    let context = mint(&state, Action::Support, &body.context);
    let bpp_id = body.message.bpp_id.or(body.context.bpp_id);
    let result = state
        .submit_handler
        .get_support(&context, bpp_id.as_deref(), body.message.ref_id)
        .await;
    respond(context, result)
}
