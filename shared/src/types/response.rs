//! API response types.

use serde::{Deserialize, Serialize};

/// Error response body for failed requests
///
/// Carries only a stable machine-readable code and a human-readable message.
/// No per-request fields (timestamps, request ids) are included: responses on
/// enumeration-sensitive paths such as login must be byte-identical across
/// requests that fail for different internal reasons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,

    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_serialization_is_stable() {
        let a = ErrorResponse::new("INVALID_CREDENTIALS", "Invalid email or password");
        let b = ErrorResponse::new("INVALID_CREDENTIALS", "Invalid email or password");

        let json_a = serde_json::to_vec(&a).unwrap();
        let json_b = serde_json::to_vec(&b).unwrap();
        assert_eq!(json_a, json_b);
    }
}
