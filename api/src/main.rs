use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenvy::dotenv;
use log::info;

use auction_api::routes::auth::{self, AppState};
use auction_api::middleware::cors::create_cors;
use auction_core::services::auth::{AuthService, AuthServiceConfig};
use auction_core::services::session::{SessionService, SessionServiceConfig};
use auction_core::services::verification::{CodeService, CodeServiceConfig};
use auction_infra::database::{
    DatabasePool, MySqlAccountRepository, MySqlSessionRepository,
    MySqlVerificationCodeRepository,
};
use auction_infra::mail::SmtpMailer;
use auction_shared::config::AppConfig;

type LiveAppState = AppState<
    MySqlAccountRepository,
    MySqlVerificationCodeRepository,
    MySqlSessionRepository,
    SmtpMailer,
>;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting auction auth API server");

    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();

    let pool = DatabasePool::new(config.database.clone())
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let account_repository = Arc::new(MySqlAccountRepository::new(pool.pool().clone()));
    let code_repository = Arc::new(MySqlVerificationCodeRepository::new(pool.pool().clone()));
    let session_repository = Arc::new(MySqlSessionRepository::new(pool.pool().clone()));

    let mailer = SmtpMailer::new(&config.email)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let auth_service = Arc::new(AuthService::new(
        account_repository,
        Arc::new(CodeService::new(
            code_repository,
            CodeServiceConfig::new(config.auth.code_ttl_minutes),
        )),
        Arc::new(SessionService::new(
            session_repository,
            SessionServiceConfig::new(config.auth.session_ttl_days),
        )),
        Arc::new(mailer),
        AuthServiceConfig::default().with_bcrypt_cost(config.auth.bcrypt_cost),
    ));

    let state = web::Data::new(LiveAppState { auth_service });

    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(state.clone())
            .route("/health", web::get().to(health_check))
            .configure(
                auth::configure::<
                    MySqlAccountRepository,
                    MySqlVerificationCodeRepository,
                    MySqlSessionRepository,
                    SmtpMailer,
                >,
            )
            .default_service(web::route().to(|| async {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": "NOT_FOUND",
                    "message": "The requested resource was not found"
                }))
            }))
    })
    .bind(&bind_address)?
    .run()
    .await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "auction-auth-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
