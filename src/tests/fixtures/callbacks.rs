use crate::modules::bap::core::callbacks::{
    CallbackEnvelope, OnSearch, OnSearchMessage, OnSupport, OnSupportMessage,
};
use crate::modules::bap::core::schema::{Catalog, Descriptor, Item, Provider};
use crate::shared::core::context::Action;
use crate::tests::fixtures::contexts::callback_context;

pub fn on_search(message_id: &str, bpp_id: &str, store_name: &str) -> OnSearch {
    CallbackEnvelope {
        context: callback_context(Action::OnSearch, message_id, bpp_id),
        message: Some(OnSearchMessage {
            catalog: Catalog {
                bpp_descriptor: Some(Descriptor {
                    name: Some(store_name.to_string()),
                    ..Descriptor::default()
                }),
                bpp_providers: vec![Provider {
                    id: Some(format!("{bpp_id}-provider")),
                    items: vec![Item {
                        id: Some(format!("{bpp_id}-item")),
                        ..Item::default()
                    }],
                    ..Provider::default()
                }],
                ..Catalog::default()
            },
        }),
        error: None,
    }
}

pub fn on_support(message_id: &str, phone: &str) -> OnSupport {
    CallbackEnvelope {
        context: callback_context(Action::OnSupport, message_id, "bpp-1"),
        message: Some(OnSupportMessage {
            phone: Some(phone.to_string()),
            email: Some("support@bpp-1.example.org".into()),
            uri: None,
        }),
        error: None,
    }
}
