//! Domain error to HTTP response mapping.
//!
//! Error bodies are `{error, message}` with no per-request fields, so that
//! enumeration-sensitive paths such as login produce byte-identical bodies
//! for every failure cause they cover.

use actix_web::HttpResponse;

use auction_core::errors::{AuthError, DomainError};
use auction_shared::types::response::ErrorResponse;

/// Map a domain error to its HTTP response
pub fn to_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth) => auth_error_response(auth),
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("VALIDATION_ERROR", message))
        }
        DomainError::ValidationErr(err) => {
            HttpResponse::BadRequest().json(ErrorResponse::new("VALIDATION_ERROR", err.to_string()))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "NOT_FOUND",
            format!("{} not found", resource),
        )),
        DomainError::Database { message } => {
            log::error!("Database error: {}", message);
            internal_error_response()
        }
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            internal_error_response()
        }
    }
}

fn auth_error_response(error: &AuthError) -> HttpResponse {
    let message = error.to_string();
    match error {
        AuthError::EmailAlreadyRegistered => HttpResponse::Conflict()
            .json(ErrorResponse::new("EMAIL_ALREADY_REGISTERED", message)),
        AuthError::AccountAlreadyVerified => HttpResponse::Conflict()
            .json(ErrorResponse::new("ACCOUNT_ALREADY_VERIFIED", message)),
        AuthError::AccountNotFound => {
            HttpResponse::NotFound().json(ErrorResponse::new("ACCOUNT_NOT_FOUND", message))
        }
        AuthError::InvalidVerificationCode => HttpResponse::BadRequest()
            .json(ErrorResponse::new("INVALID_VERIFICATION_CODE", message)),
        AuthError::VerificationCodeExpired => HttpResponse::BadRequest()
            .json(ErrorResponse::new("VERIFICATION_CODE_EXPIRED", message)),
        AuthError::InvalidCredentials => {
            HttpResponse::Unauthorized().json(ErrorResponse::new("INVALID_CREDENTIALS", message))
        }
        AuthError::AccountNotVerified => {
            HttpResponse::Forbidden().json(ErrorResponse::new("ACCOUNT_NOT_VERIFIED", message))
        }
        AuthError::Unauthorized => {
            HttpResponse::Unauthorized().json(ErrorResponse::new("UNAUTHORIZED", message))
        }
        AuthError::MailDeliveryFailed => {
            HttpResponse::BadGateway().json(ErrorResponse::new("MAIL_DELIVERY_FAILED", message))
        }
    }
}

/// Generic 500 body; store-level detail stays in the log
fn internal_error_response() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse::new(
        "INTERNAL_ERROR",
        "An internal error occurred",
    ))
}

/// Map validator failures on a request DTO to a 400 response
pub fn validation_error_response(errors: &validator::ValidationErrors) -> HttpResponse {
    let fields: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();
    HttpResponse::BadRequest().json(ErrorResponse::new(
        "VALIDATION_ERROR",
        format!("Invalid request fields: {}", fields.join(", ")),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_maps_to_401() {
        let response = to_response(&DomainError::Auth(AuthError::InvalidCredentials));
        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_conflict_errors_map_to_409() {
        let response = to_response(&DomainError::Auth(AuthError::EmailAlreadyRegistered));
        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);

        let response = to_response(&DomainError::Auth(AuthError::AccountAlreadyVerified));
        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_mail_delivery_maps_to_502() {
        let response = to_response(&DomainError::Auth(AuthError::MailDeliveryFailed));
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_store_errors_hide_detail() {
        let response = to_response(&DomainError::Database {
            message: "connection refused to mysql://secret-host".to_string(),
        });
        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
