// Outbound request envelopes and the field mappings that build them from
// client payloads.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::modules::bap::core::cart::{CartItem, ClientOrder, SearchCriteria};
use crate::modules::bap::core::schema::{
    Contact, Customer, Fulfillment, FulfillmentEnd, Intent, IntentProvider, Location, Order,
    Payment, PaymentStatus, Person, SelectedItem, SelectedProvider,
};
use crate::shared::core::context::{Action, Context};

pub const HOME_DELIVERY: &str = "home_delivery";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestBuildError {
    #[error("no items to order")]
    NoItems,
    #[error("provider {0} has no location")]
    MissingProviderLocation(String),
    #[error("payment is required to confirm an order")]
    MissingPayment,
    #[error("context action {actual:?} does not match payload action {expected:?}")]
    ActionMismatch { expected: Action, actual: Action },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMessage {
    pub intent: Intent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedOrder {
    pub provider: SelectedProvider,
    pub items: Vec<SelectedItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectMessage {
    pub selected: SelectedOrder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderMessage {
    pub order: Order,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackMessage {
    pub order_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportMessage {
    pub ref_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<M> {
    pub context: Context,
    pub message: M,
}

pub type SearchRequest = Envelope<SearchMessage>;
pub type SelectRequest = Envelope<SelectMessage>;
pub type InitRequest = Envelope<OrderMessage>;
pub type ConfirmRequest = Envelope<OrderMessage>;
pub type TrackRequest = Envelope<TrackMessage>;
pub type SupportRequest = Envelope<SupportMessage>;

/// A request ready to be posted to a counterparty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OutboundRequest {
    Search(SearchRequest),
    Select(SelectRequest),
    Init(InitRequest),
    Confirm(ConfirmRequest),
    Track(TrackRequest),
    Support(SupportRequest),
}

impl OutboundRequest {
    pub fn action(&self) -> Action {
        match self {
            OutboundRequest::Search(_) => Action::Search,
            OutboundRequest::Select(_) => Action::Select,
            OutboundRequest::Init(_) => Action::Init,
            OutboundRequest::Confirm(_) => Action::Confirm,
            OutboundRequest::Track(_) => Action::Track,
            OutboundRequest::Support(_) => Action::Support,
        }
    }

    pub fn context(&self) -> &Context {
        match self {
            OutboundRequest::Search(r) => &r.context,
            OutboundRequest::Select(r) => &r.context,
            OutboundRequest::Init(r) | OutboundRequest::Confirm(r) => &r.context,
            OutboundRequest::Track(r) => &r.context,
            OutboundRequest::Support(r) => &r.context,
        }
    }
}

/// What a submit flow hands to outbound dispatch, before it is mapped onto
/// the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchPayload {
    Search(SearchCriteria),
    Select(Vec<CartItem>),
    Init(ClientOrder),
    Confirm(ClientOrder),
    Track {
        order_id: String,
        callback_url: Option<String>,
    },
    Support {
        ref_id: String,
    },
}

impl DispatchPayload {
    pub fn action(&self) -> Action {
        match self {
            DispatchPayload::Search(_) => Action::Search,
            DispatchPayload::Select(_) => Action::Select,
            DispatchPayload::Init(_) => Action::Init,
            DispatchPayload::Confirm(_) => Action::Confirm,
            DispatchPayload::Track { .. } => Action::Track,
            DispatchPayload::Support { .. } => Action::Support,
        }
    }

    pub fn to_request(&self, context: &Context) -> Result<OutboundRequest, RequestBuildError> {
        if context.action != self.action() {
            return Err(RequestBuildError::ActionMismatch {
                expected: self.action(),
                actual: context.action,
            });
        }

        let context = context.clone();
        let request = match self {
            DispatchPayload::Search(criteria) => OutboundRequest::Search(Envelope {
                context,
                message: SearchMessage {
                    intent: search_intent(criteria),
                },
            }),
            DispatchPayload::Select(items) => OutboundRequest::Select(Envelope {
                context,
                message: SelectMessage {
                    selected: selected_order(items)?,
                },
            }),
            DispatchPayload::Init(order) => OutboundRequest::Init(Envelope {
                context,
                message: OrderMessage {
                    order: initialized_order(order)?,
                },
            }),
            DispatchPayload::Confirm(order) => OutboundRequest::Confirm(Envelope {
                context,
                message: OrderMessage {
                    order: confirmed_order(order)?,
                },
            }),
            DispatchPayload::Track {
                order_id,
                callback_url,
            } => OutboundRequest::Track(Envelope {
                context,
                message: TrackMessage {
                    order_id: order_id.clone(),
                    callback_url: callback_url.clone(),
                },
            }),
            DispatchPayload::Support { ref_id } => OutboundRequest::Support(Envelope {
                context,
                message: SupportMessage {
                    ref_id: ref_id.clone(),
                },
            }),
        };
        Ok(request)
    }
}

pub fn search_intent(criteria: &SearchCriteria) -> Intent {
    let fulfillment = criteria
        .delivery_location
        .as_deref()
        .filter(|gps| !gps.trim().is_empty())
        .map(|gps| Fulfillment {
            end: Some(FulfillmentEnd {
                location: Some(Location {
                    gps: Some(gps.to_string()),
                    ..Location::default()
                }),
                contact: None,
            }),
            ..Fulfillment::default()
        });

    Intent {
        query_string: criteria.search_string.clone(),
        provider: criteria
            .provider_id
            .as_ref()
            .map(|id| IntentProvider { id: id.clone() }),
        fulfillment,
    }
}

pub fn selected_order(items: &[CartItem]) -> Result<SelectedOrder, RequestBuildError> {
    let first = items.first().ok_or(RequestBuildError::NoItems)?;

    Ok(SelectedOrder {
        provider: SelectedProvider {
            id: Some(first.provider.id.clone()),
            locations: first
                .provider
                .locations
                .iter()
                .map(|id| Location {
                    id: Some(id.clone()),
                    ..Location::default()
                })
                .collect(),
        },
        items: selected_items(items),
    })
}

pub fn initialized_order(order: &ClientOrder) -> Result<Order, RequestBuildError> {
    let first = order.items.first().ok_or(RequestBuildError::NoItems)?;
    let location_id = first
        .provider
        .locations
        .first()
        .ok_or_else(|| RequestBuildError::MissingProviderLocation(first.provider.id.clone()))?;

    let delivery = &order.delivery_info;
    Ok(Order {
        provider: Some(SelectedProvider {
            id: Some(first.provider.id.clone()),
            locations: vec![Location {
                id: Some(location_id.clone()),
                ..Location::default()
            }],
        }),
        items: selected_items(&order.items),
        billing: Some(order.billing_info.clone()),
        fulfillment: Some(Fulfillment {
            fulfillment_type: Some(HOME_DELIVERY.to_string()),
            end: Some(FulfillmentEnd {
                location: Some(delivery.location.clone()),
                contact: Some(Contact {
                    phone: delivery.phone.clone(),
                    email: delivery.email.clone(),
                }),
            }),
            customer: Some(Customer {
                person: Some(Person {
                    name: Some(delivery.name.clone()),
                }),
            }),
            ..Fulfillment::default()
        }),
        ..Order::default()
    })
}

pub fn confirmed_order(order: &ClientOrder) -> Result<Order, RequestBuildError> {
    let payment = order
        .payment
        .as_ref()
        .ok_or(RequestBuildError::MissingPayment)?;

    Ok(Order {
        payment: Some(Payment {
            params: BTreeMap::from([("amount".to_string(), payment.paid_amount.to_string())]),
            status: Some(PaymentStatus::Paid),
            ..Payment::default()
        }),
        ..initialized_order(order)?
    })
}

fn selected_items(items: &[CartItem]) -> Vec<SelectedItem> {
    items
        .iter()
        .map(|item| SelectedItem {
            id: Some(item.id.clone()),
            quantity: Some(item.quantity.clone()),
        })
        .collect()
}
