pub mod shared {
    pub mod core {
        pub mod ack;
        pub mod context;
        pub mod errors;
    }
    pub mod infrastructure {
        pub mod callback_store;
        pub mod message_ledger;
    }
}

pub mod modules {
    pub mod bap {
        pub mod core {
            pub mod aggregate;
            pub mod callbacks;
            pub mod cart;
            pub mod requests;
            pub mod schema;
        }
        pub mod use_cases {
            pub mod dispatch {
                pub mod handler;
            }
            pub mod submit {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod poll {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod callback {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod counterparty;
                pub mod counterparty_http;
                pub mod registry;
                pub mod registry_http;
                pub mod registry_static;
            }
        }
    }
}

pub mod shell;
