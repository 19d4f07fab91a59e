use chrono::{DateTime, TimeZone, Utc};

use crate::shared::core::context::{Action, Context, ContextDefaults, ContextFactory};

pub fn context_defaults() -> ContextDefaults {
    ContextDefaults {
        domain: "nic2004:52110".into(),
        country: "IND".into(),
        city: "std:080".into(),
        core_version: "0.9.1".into(),
        bap_id: "beckn-bap.example.org".into(),
        bap_uri: "https://beckn-bap.example.org/protocol/v1".into(),
    }
}

pub fn context_factory() -> ContextFactory {
    ContextFactory::new(context_defaults())
}

pub fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 10, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Context as a counterparty would send it back on a callback.
pub fn callback_context(action: Action, message_id: &str, bpp_id: &str) -> Context {
    let mut context = context_factory().with_message_id(action, message_id);
    context.transaction_id = format!("txn-{message_id}");
    context.bpp_id = Some(bpp_id.to_string());
    context.bpp_uri = Some(format!("https://{bpp_id}.example.org"));
    context.timestamp = fixed_timestamp();
    context
}
