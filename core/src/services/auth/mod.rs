//! Authentication gateway.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::{AuthService, CodeCheck, CodeCheckReason};
