//! Tests for the authentication gateway.
