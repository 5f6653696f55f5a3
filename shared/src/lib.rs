//! # Auction Shared
//!
//! Shared configuration, response types, and validation utilities used by
//! the core, infrastructure, and API crates of the auction backend.

pub mod config;
pub mod types;
pub mod utils;
