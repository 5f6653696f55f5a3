use actix_web::{web, HttpResponse};
use validator::Validate;

use auction_core::repositories::{
    AccountRepository, SessionRepository, VerificationCodeRepository,
};
use auction_core::services::Mailer;

use crate::dto::auth::{SessionResponse, VerifyRequest};
use crate::handlers::error::{to_response, validation_error_response};

use super::AppState;

/// Handler for POST /api/auth/verify
///
/// Consumes the verification code, marks the account verified, and opens
/// the first session.
pub async fn verify<A, C, S, M>(
    state: web::Data<AppState<A, C, S, M>>,
    request: web::Json<VerifyRequest>,
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
        .verify(&request.email, &request.code)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(SessionResponse {
            message: "Email verified".to_string(),
            token: response.token,
            account: response.account,
        }),
        Err(error) => to_response(&error),
    }
}
