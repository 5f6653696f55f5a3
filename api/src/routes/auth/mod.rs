//! Authentication route handlers
//!
//! Endpoints under `/api/auth`:
//! - registration and email verification (register, verify, resend-code)
//! - non-mutating code checks (check-code)
//! - session lifecycle (login, me, logout, DELETE /sessions)

use std::sync::Arc;

use actix_web::web;

use auction_core::repositories::{
    AccountRepository, SessionRepository, VerificationCodeRepository,
};
use auction_core::services::auth::AuthService;
use auction_core::services::Mailer;

pub mod check_code;
pub mod login;
pub mod logout;
pub mod me;
pub mod register;
pub mod resend;
pub mod verify;

/// Application state that holds shared services
pub struct AppState<A, C, S, M>
where
    A: AccountRepository,
    C: VerificationCodeRepository,
    S: SessionRepository,
    M: Mailer,
{
    pub auth_service: Arc<AuthService<A, C, S, M>>,
}

/// Register the authentication routes under `/api/auth`
pub fn configure<A, C, S, M>(cfg: &mut web::ServiceConfig)
where
    A: AccountRepository + 'static,
    C: VerificationCodeRepository + 'static,
    S: SessionRepository + 'static,
    M: Mailer + 'static,
{
    cfg.service(
        web::scope("/api/auth")
            .route("/register", web::post().to(register::register::<A, C, S, M>))
            .route("/verify", web::post().to(verify::verify::<A, C, S, M>))
            .route("/login", web::post().to(login::login::<A, C, S, M>))
            .route(
                "/resend-code",
                web::post().to(resend::resend_code::<A, C, S, M>),
            )
            .route(
                "/check-code",
                web::post().to(check_code::check_code::<A, C, S, M>),
            )
            .route("/me", web::get().to(me::me::<A, C, S, M>))
            .route("/logout", web::post().to(logout::logout::<A, C, S, M>))
            .route(
                "/sessions",
                web::delete().to(logout::clear_sessions::<A, C, S, M>),
            ),
    );
}
