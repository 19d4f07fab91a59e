// Composition root for the BAP gateway.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers and HTTP routes.

pub mod config;
pub mod http;
pub mod state;
