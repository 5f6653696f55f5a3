//! End-to-end HTTP tests over mock-backed services.

use std::sync::Arc;

use actix_web::{test, web, App};
use async_trait::async_trait;
use tokio::sync::RwLock;

use auction_api::routes::auth::{self, AppState};
use auction_core::repositories::{
    MockAccountRepository, MockSessionRepository, MockVerificationCodeRepository,
};
use auction_core::services::auth::{AuthService, AuthServiceConfig};
use auction_core::services::session::{SessionService, SessionServiceConfig};
use auction_core::services::verification::{CodeService, CodeServiceConfig};
use auction_core::services::{Mailer, MailerError};

/// Recording mailer for HTTP round trips
struct RecordingMailer {
    sent: RwLock<Vec<(String, String)>>,
}

impl RecordingMailer {
    fn new() -> Self {
        Self {
            sent: RwLock::new(Vec::new()),
        }
    }

    async fn last_code_for(&self, email: &str) -> Option<String> {
        let sent = self.sent.read().await;
        sent.iter()
            .rev()
            .find(|(to, _)| to == email)
            .map(|(_, code)| code.clone())
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<(), MailerError> {
        self.sent
            .write()
            .await
            .push((to.to_string(), code.to_string()));
        Ok(())
    }
}

type TestAppState = AppState<
    MockAccountRepository,
    MockVerificationCodeRepository,
    MockSessionRepository,
    RecordingMailer,
>;

fn build_state() -> (web::Data<TestAppState>, Arc<RecordingMailer>) {
    let mailer = Arc::new(RecordingMailer::new());

    let auth_service = Arc::new(AuthService::new(
        Arc::new(MockAccountRepository::new()),
        Arc::new(CodeService::new(
            Arc::new(MockVerificationCodeRepository::new()),
            CodeServiceConfig::default(),
        )),
        Arc::new(SessionService::new(
            Arc::new(MockSessionRepository::new()),
            SessionServiceConfig::default(),
        )),
        Arc::clone(&mailer),
        AuthServiceConfig::default().with_bcrypt_cost(4),
    ));

    (web::Data::new(TestAppState { auth_service }), mailer)
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new().app_data($state.clone()).configure(
                auth::configure::<
                    MockAccountRepository,
                    MockVerificationCodeRepository,
                    MockSessionRepository,
                    RecordingMailer,
                >,
            ),
        )
        .await
    };
}

#[actix_rt::test]
async fn test_register_verify_login_round_trip() {
    let (state, mailer) = build_state();
    let app = test_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "email": "ann@example.com",
                "password": "hunter2",
                "name": "Ann"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    // The code travels by mail only
    assert!(body.get("code").is_none());
    assert!(!body["message"].as_str().unwrap().is_empty());

    let code = mailer.last_code_for("ann@example.com").await.unwrap();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/verify")
            .set_json(serde_json::json!({
                "email": "ann@example.com",
                "code": code
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().unwrap().to_string();
    assert_eq!(body["account"]["email"], "ann@example.com");
    assert_eq!(body["account"]["is_verified"], true);
    assert!(body["account"].get("password_hash").is_none());

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["account"]["name"], "Ann");
}

#[actix_rt::test]
async fn test_login_failures_are_byte_identical() {
    let (state, mailer) = build_state();
    let app = test_app!(state);

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "email": "known@example.com",
                "password": "correct"
            }))
            .to_request(),
    )
    .await;
    let code = mailer.last_code_for("known@example.com").await.unwrap();
    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/verify")
            .set_json(serde_json::json!({
                "email": "known@example.com",
                "code": code
            }))
            .to_request(),
    )
    .await;

    let resp_unknown = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "nobody@example.com",
                "password": "whatever"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp_unknown.status(), 401);
    let body_unknown = test::read_body(resp_unknown).await;

    let resp_wrong = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "known@example.com",
                "password": "incorrect"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp_wrong.status(), 401);
    let body_wrong = test::read_body(resp_wrong).await;

    assert_eq!(body_unknown, body_wrong);
}

#[actix_rt::test]
async fn test_login_before_verification_is_forbidden() {
    let (state, _mailer) = build_state();
    let app = test_app!(state);

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "email": "pending@example.com",
                "password": "pw"
            }))
            .to_request(),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "pending@example.com",
                "password": "pw"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 403);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "ACCOUNT_NOT_VERIFIED");
}

#[actix_rt::test]
async fn test_check_code_reports_reason_with_200() {
    let (state, mailer) = build_state();
    let app = test_app!(state);

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "email": "check@example.com",
                "password": "pw"
            }))
            .to_request(),
    )
    .await;
    let code = mailer.last_code_for("check@example.com").await.unwrap();

    // Malformed code is an outcome, not an error status
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/check-code")
            .set_json(serde_json::json!({
                "email": "check@example.com",
                "code": "12ab"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["valid"], false);
    assert_eq!(body["reason"], "malformed");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/check-code")
            .set_json(serde_json::json!({
                "email": "check@example.com",
                "code": code
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["valid"], true);
    assert!(body.get("reason").is_none());

    // The check consumed nothing; verify still succeeds
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/verify")
            .set_json(serde_json::json!({
                "email": "check@example.com",
                "code": code
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
}

#[actix_rt::test]
async fn test_logout_and_clear_sessions() {
    let (state, mailer) = build_state();
    let app = test_app!(state);

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "email": "bee@example.com",
                "password": "pw"
            }))
            .to_request(),
    )
    .await;
    let code = mailer.last_code_for("bee@example.com").await.unwrap();
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/verify")
            .set_json(serde_json::json!({
                "email": "bee@example.com",
                "code": code
            }))
            .to_request(),
    )
    .await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let first_token = body["token"].as_str().unwrap().to_string();

    // Second session through login
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "bee@example.com",
                "password": "pw"
            }))
            .to_request(),
    )
    .await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let second_token = body["token"].as_str().unwrap().to_string();

    // Logout without a token is still a 200
    let resp = test::call_service(
        &app,
        test::TestRequest::post().uri("/api/auth/logout").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    // Clear all sessions with the second token
    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/api/auth/sessions")
            .insert_header(("Authorization", format!("Bearer {}", second_token)))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["sessions_cleared"], 2);

    // Both tokens are now dead
    for token in [first_token, second_token] {
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/auth/me")
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 401);
    }
}

#[actix_rt::test]
async fn test_me_without_token_is_unauthorized() {
    let (state, _mailer) = build_state();
    let app = test_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/auth/me").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 401);
}

#[actix_rt::test]
async fn test_register_rejects_invalid_email() {
    let (state, _mailer) = build_state();
    let app = test_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "email": "not-an-email",
                "password": "pw"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[actix_rt::test]
async fn test_resend_conflicts_after_verification() {
    let (state, mailer) = build_state();
    let app = test_app!(state);

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "email": "done@example.com",
                "password": "pw"
            }))
            .to_request(),
    )
    .await;
    let code = mailer.last_code_for("done@example.com").await.unwrap();
    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/verify")
            .set_json(serde_json::json!({
                "email": "done@example.com",
                "code": code
            }))
            .to_request(),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/resend-code")
            .set_json(serde_json::json!({ "email": "done@example.com" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 409);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "ACCOUNT_ALREADY_VERIFIED");
}
