use actix_web::{web, HttpResponse};
use validator::Validate;

use auction_core::repositories::{
    AccountRepository, SessionRepository, VerificationCodeRepository,
};
use auction_core::services::Mailer;

use crate::dto::auth::{LoginRequest, SessionResponse};
use crate::handlers::error::{to_response, validation_error_response};

use super::AppState;

/// Handler for POST /api/auth/login
///
/// Unknown email and wrong password produce byte-identical 401 bodies;
/// the distinction never leaves the service.
pub async fn login<A, C, S, M>(
    state: web::Data<AppState<A, C, S, M>>,
    request: web::Json<LoginRequest>,
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
        .login(&request.email, &request.password)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(SessionResponse {
            message: "Login successful".to_string(),
            token: response.token,
            account: response.account,
        }),
        Err(error) => to_response(&error),
    }
}
