use crate::modules::bap::adapters::outbound::registry::{Subscriber, SubscriberType};

pub fn bpp(id: &str) -> Subscriber {
    Subscriber {
        subscriber_id: id.to_string(),
        subscriber_url: format!("https://{id}.example.org"),
        subscriber_type: SubscriberType::Bpp,
        domain: None,
        country: None,
        city: None,
    }
}

pub fn gateway(id: &str) -> Subscriber {
    Subscriber {
        subscriber_id: id.to_string(),
        subscriber_url: format!("https://{id}.example.org"),
        subscriber_type: SubscriberType::Bg,
        domain: Some("nic2004:52110".into()),
        country: Some("IND".into()),
        city: Some("std:080".into()),
    }
}
