use actix_web::{web, HttpRequest, HttpResponse};

use auction_core::errors::{AuthError, DomainError};
use auction_core::repositories::{
    AccountRepository, SessionRepository, VerificationCodeRepository,
};
use auction_core::services::Mailer;

use crate::dto::auth::{MessageResponse, SessionsClearedResponse};
use crate::handlers::error::to_response;
use crate::middleware::auth::bearer_token;

use super::AppState;

/// Handler for POST /api/auth/logout
///
/// Idempotent from the client's point of view: a missing or unknown token
/// still yields a 200.
pub async fn logout<A, C, S, M>(
    req: HttpRequest,
    state: web::Data<AppState<A, C, S, M>>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: VerificationCodeRepository + 'static,
    S: SessionRepository + 'static,
    M: Mailer + 'static,
{
    let token = bearer_token(&req);

    match state.auth_service.logout(token.as_deref()).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Logged out")),
        Err(error) => to_response(&error),
    }
}

/// Handler for DELETE /api/auth/sessions
///
/// Revokes every session of the account owning the presented token,
/// including the presented one.
pub async fn clear_sessions<A, C, S, M>(
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

    match state.auth_service.logout_all(&token).await {
        Ok(count) => HttpResponse::Ok().json(SessionsClearedResponse {
            message: "All sessions cleared".to_string(),
            sessions_cleared: count,
        }),
        Err(error) => to_response(&error),
    }
}
