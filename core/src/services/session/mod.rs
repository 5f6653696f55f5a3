//! Session token management.

mod config;
mod service;

pub use config::SessionServiceConfig;
pub use service::{IssuedSession, SessionService};
