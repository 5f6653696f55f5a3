//! HTTP middleware and request helpers.

pub mod auth;
pub mod cors;
