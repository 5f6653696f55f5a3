//! Request handling support.

pub mod error;
