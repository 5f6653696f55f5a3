use actix_web::{web, HttpResponse};
use validator::Validate;

use auction_core::repositories::{
    AccountRepository, SessionRepository, VerificationCodeRepository,
};
use auction_core::services::Mailer;

use crate::dto::auth::{MessageResponse, ResendCodeRequest};
use crate::handlers::error::{to_response, validation_error_response};

use super::AppState;

/// Handler for POST /api/auth/resend-code
///
/// Issues a fresh code for a not-yet-verified account, invalidating every
/// prior one.
pub async fn resend_code<A, C, S, M>(
    state: web::Data<AppState<A, C, S, M>>,
    request: web::Json<ResendCodeRequest>,
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

    match state.auth_service.resend(&request.email).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new(
            "A new verification code has been sent.",
        )),
        Err(error) => to_response(&error),
    }
}
