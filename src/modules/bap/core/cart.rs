// Client-side shapes of a selection and an order, plus the rule that a
// single submission may only address one provider of one counterparty.

use serde::{Deserialize, Serialize};

use crate::modules::bap::core::schema::{Billing, Location, Quantity};
use crate::shared::core::errors::ValidationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartProvider {
    pub id: String,
    #[serde(default)]
    pub locations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub bpp_id: String,
    pub provider: CartProvider,
    pub quantity: Quantity,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayment {
    pub paid_amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientOrder {
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub billing_info: Billing,
    #[serde(default)]
    pub delivery_info: DeliveryInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<OrderPayment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    /// `"lat,lng"` of the delivery address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bpp_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Empty,
    Single { bpp_id: &'a str, provider_id: &'a str },
}

pub fn validate_selection(items: &[CartItem]) -> Result<Selection<'_>, ValidationError> {
    let Some(first) = items.first() else {
        return Ok(Selection::Empty);
    };

    if items.iter().any(|item| item.provider.id != first.provider.id) {
        return Err(ValidationError::MultipleProviders);
    }
    if items.iter().any(|item| item.bpp_id != first.bpp_id) {
        return Err(ValidationError::MultipleBpps);
    }

    Ok(Selection::Single {
        bpp_id: &first.bpp_id,
        provider_id: &first.provider.id,
    })
}
