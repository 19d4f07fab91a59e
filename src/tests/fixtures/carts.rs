// Builders for client selections and orders.
// The default order is read from `json/client_order.json`.

use std::fs;

use crate::modules::bap::core::cart::{CartItem, CartProvider, ClientOrder, OrderPayment};
use crate::modules::bap::core::schema::Quantity;

pub fn cart_item(id: &str, bpp_id: &str, provider_id: &str) -> CartItem {
    CartItem {
        id: id.to_string(),
        bpp_id: bpp_id.to_string(),
        provider: CartProvider {
            id: provider_id.to_string(),
            locations: vec!["location-1".to_string()],
        },
        quantity: Quantity {
            count: 1,
            measure: None,
        },
    }
}

pub struct ClientOrderBuilder {
    inner: ClientOrder,
}

impl Default for ClientOrderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ClientOrderBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/tests/fixtures/json/client_order.json").unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn items(mut self, v: Vec<CartItem>) -> Self {
        self.inner.items = v;
        self
    }

    pub fn payment(mut self, v: OrderPayment) -> Self {
        self.inner.payment = Some(v);
        self
    }

    pub fn paid(self, amount: f64) -> Self {
        self.payment(OrderPayment {
            paid_amount: amount,
        })
    }

    pub fn build(self) -> ClientOrder {
        self.inner
    }
}

#[cfg(test)]
mod client_order_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = ClientOrderBuilder::default().build();

        assert_eq!(built.items.len(), 1);
        assert_eq!(built.items[0].provider.locations, vec!["location-1"]);
        assert_eq!(built.billing_info.name, "Asha Rao");
        assert_eq!(built.delivery_info.location.gps.as_deref(), Some("12.9716,77.5946"));
        assert!(built.payment.is_none());
    }

    #[rstest]
    fn setters_override_fields() {
        let built = ClientOrderBuilder::new().items(vec![]).paid(10.0).build();

        assert!(built.items.is_empty());
        assert_eq!(built.payment, Some(OrderPayment { paid_amount: 10.0 }));
    }
}
