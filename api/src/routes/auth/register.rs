use actix_web::{web, HttpResponse};
use validator::Validate;

use auction_core::repositories::{
    AccountRepository, SessionRepository, VerificationCodeRepository,
};
use auction_core::services::Mailer;

use crate::dto::auth::{MessageResponse, RegisterRequest};
use crate::handlers::error::{to_response, validation_error_response};

use super::AppState;

/// Handler for POST /api/auth/register
///
/// Creates (or overwrites) an unverified account and mails a verification
/// code. The response acknowledges delivery only; the code never appears
/// in it.
pub async fn register<A, C, S, M>(
    state: web::Data<AppState<A, C, S, M>>,
    request: web::Json<RegisterRequest>,
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
        .register(&request.email, &request.password, request.name.as_deref())
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new(
            "Registration accepted. Check your email for a verification code.",
        )),
        Err(error) => to_response(&error),
    }
}
