//! Verification code management.

mod config;
mod service;

pub use config::CodeServiceConfig;
pub use service::{CodeService, CodeStatus};
