//! Bearer token extraction.
//!
//! Session tokens are opaque strings presented in the `Authorization`
//! header; no other transport is accepted.

use actix_web::http::header::AUTHORIZATION;
use actix_web::HttpRequest;

/// Extract the bearer token from the Authorization header
///
/// Returns `None` for a missing header, a non-Bearer scheme, or an empty
/// credential. The scheme comparison is case-insensitive per RFC 7235.
pub fn bearer_token(req: &HttpRequest) -> Option<String> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;

    let (scheme, credential) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let credential = credential.trim();
    if credential.is_empty() {
        return None;
    }

    Some(credential.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extracts_bearer_token() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer abc123"))
            .to_http_request();
        assert_eq!(bearer_token(&req).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "bearer abc123"))
            .to_http_request();
        assert_eq!(bearer_token(&req).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_rejects_other_schemes_and_missing_header() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Basic dXNlcjpwYXNz"))
            .to_http_request();
        assert!(bearer_token(&req).is_none());

        let req = TestRequest::default().to_http_request();
        assert!(bearer_token(&req).is_none());
    }

    #[test]
    fn test_rejects_empty_credential() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer  "))
            .to_http_request();
        assert!(bearer_token(&req).is_none());
    }
}
