pub mod callbacks;
pub mod carts;
pub mod contexts;
pub mod counterparty;
pub mod registry;
pub mod state;
pub mod upstream;
