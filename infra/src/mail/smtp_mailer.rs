//! SMTP delivery of verification codes via lettre.

use async_trait::async_trait;
use lettre::{
    message::header::ContentType,
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use auction_core::services::{Mailer, MailerError};
use auction_shared::config::EmailConfig;

/// SMTP implementation of the Mailer port
///
/// When the relay settings are incomplete the mailer runs in development
/// mode: codes are written to the log instead of being sent, and delivery
/// always reports success.
pub struct SmtpMailer {
    from_address: Option<String>,
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
}

impl SmtpMailer {
    /// Build a mailer from the SMTP configuration
    ///
    /// # Errors
    /// Fails only when the relay settings are present but malformed; an
    /// absent relay yields a development-mode mailer.
    pub fn new(config: &EmailConfig) -> Result<Self, MailerError> {
        if !config.is_configured() {
            tracing::warn!(
                event = "mailer_dev_mode",
                "SMTP relay not configured; verification codes will be logged"
            );
            return Ok(Self {
                from_address: None,
                transport: None,
            });
        }

        // is_configured() guarantees host and username are present
        let host = config.smtp_host.clone().unwrap_or_default();
        let username = config.smtp_username.clone().unwrap_or_default();
        let password = config.smtp_password.clone().unwrap_or_default();

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&host)
            .map_err(|e| MailerError::Transport {
                message: format!("Invalid SMTP relay: {}", e),
            })?
            .port(config.smtp_port)
            .credentials(Credentials::new(username, password))
            .build();

        Ok(Self {
            from_address: config.from_address.clone(),
            transport: Some(transport),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<(), MailerError> {
        let (transport, from) = match (&self.transport, &self.from_address) {
            (Some(transport), Some(from)) => (transport, from),
            _ => {
                // Development mode: surface the code in the log
                tracing::info!(
                    to = %to,
                    code = %code,
                    event = "verification_code_logged",
                    "Development mode: verification code not sent by mail"
                );
                return Ok(());
            }
        };

        let message = Message::builder()
            .from(from.parse().map_err(|e| MailerError::Transport {
                message: format!("Invalid from address: {}", e),
            })?)
            .to(to.parse().map_err(|e| MailerError::Transport {
                message: format!("Invalid recipient address: {}", e),
            })?)
            .subject("Your verification code")
            .header(ContentType::TEXT_PLAIN)
            .body(format!(
                "Your verification code is {}.\n\nIt expires in 60 minutes.",
                code
            ))
            .map_err(|e| MailerError::Transport {
                message: format!("Failed to build message: {}", e),
            })?;

        transport
            .send(message)
            .await
            .map_err(|e| MailerError::Transport {
                message: format!("SMTP delivery failed: {}", e),
            })?;

        tracing::info!(
            to = %to,
            event = "verification_code_sent",
            "Verification code delivered"
        );

        Ok(())
    }
}
