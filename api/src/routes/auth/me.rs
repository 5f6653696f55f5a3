use actix_web::{web, HttpRequest, HttpResponse};

use auction_core::errors::{AuthError, DomainError};
use auction_core::repositories::{
    AccountRepository, SessionRepository, VerificationCodeRepository,
};
use auction_core::services::Mailer;

use crate::dto::auth::AccountResponse;
use crate::handlers::error::to_response;
use crate::middleware::auth::bearer_token;

use super::AppState;

/// Handler for GET /api/auth/me
///
/// Returns the public fields of the account owning the presented session.
pub async fn me<A, C, S, M>(
    req: HttpRequest,
    state: web::Data<AppState<A, C, S, M>>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: VerificationCodeRepository + 'static,
    S: SessionRepository + 'static,
    M: Mailer + 'static,
{
    let token = match bearer_token(&req) {
        Some(token) => token,
        None => return to_response(&DomainError::Auth(AuthError::Unauthorized)),
    };

    match state.auth_service.me(&token).await {
        Ok(account) => HttpResponse::Ok().json(AccountResponse { account }),
        Err(error) => to_response(&error),
    }
}
