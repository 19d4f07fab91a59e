use axum::{
    Router,
    routing::{get, post, put},
};

use crate::modules::bap::use_cases::callback::inbound::http as callback_http;
use crate::modules::bap::use_cases::poll::inbound::http as poll_http;
use crate::modules::bap::use_cases::submit::inbound::http as submit_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/client/v1/search", post(submit_http::search))
        .route("/client/v1/get_quote", put(submit_http::get_quote))
        .route("/client/v1/initialize_order", post(submit_http::initialize_order))
        .route("/client/v1/confirm_order", post(submit_http::confirm_order))
        .route("/client/v1/track", post(submit_http::track))
        .route("/client/v1/get_support", post(submit_http::get_support))
        .route("/client/v1/on_search", get(poll_http::on_search))
        .route("/client/v1/on_get_quote", get(poll_http::on_get_quote))
        .route("/client/v1/on_initialize_order", get(poll_http::on_initialize_order))
        .route("/client/v1/on_confirm_order", get(poll_http::on_confirm_order))
        .route("/client/v1/on_track", get(poll_http::on_track))
        .route("/client/v1/on_support", get(poll_http::on_support))
        .route("/protocol/v1/on_search", post(callback_http::on_search))
        .route("/protocol/v1/on_select", post(callback_http::on_select))
        .route("/protocol/v1/on_init", post(callback_http::on_init))
        .route("/protocol/v1/on_confirm", post(callback_http::on_confirm))
        .route("/protocol/v1/on_track", post(callback_http::on_track))
        .route("/protocol/v1/on_support", post(callback_http::on_support))
        .with_state(state)
}
