//! HTTP API layer for the auction authentication service.
//!
//! Exposes the authentication gateway over actix-web: request DTOs with
//! validator derives, bearer-token extraction, and a stable domain-error to
//! HTTP mapping.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::auth::AppState;
