use actix_web::{web, HttpResponse};
use validator::Validate;

use auction_core::repositories::{
    AccountRepository, SessionRepository, VerificationCodeRepository,
};
use auction_core::services::Mailer;

use crate::dto::auth::{CheckCodeRequest, CheckCodeResponse};
use crate::handlers::error::{to_response, validation_error_response};

use super::AppState;

/// Handler for POST /api/auth/check-code
///
/// Non-mutating preview of a verification code. Validity outcomes are
/// reported in a 200 body, never as error statuses; a malformed code is
/// one such outcome.
pub async fn check_code<A, C, S, M>(
    state: web::Data<AppState<A, C, S, M>>,
    request: web::Json<CheckCodeRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: VerificationCodeRepository + 'static,
    S: SessionRepository + 'static,
    M: Mailer + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .auth_service
        .check_code(&request.email, &request.code)
        .await
    {
        Ok(check) => {
            let message = if check.valid {
                "Code is valid".to_string()
            } else {
                "Code is not valid".to_string()
            };
            HttpResponse::Ok().json(CheckCodeResponse {
                valid: check.valid,
                reason: check.reason.map(|r| r.as_str().to_string()),
                message,
            })
        }
        Err(error) => to_response(&error),
    }
}
