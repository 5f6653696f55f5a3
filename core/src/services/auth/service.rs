//! Authentication gateway: orchestrates accounts, codes, sessions, and mail.

use std::sync::Arc;

use crate::domain::entities::Account;
use crate::domain::value_objects::{AccountPublic, AuthResponse};
use crate::errors::{AuthError, DomainResult, ValidationError};
use crate::repositories::{AccountRepository, SessionRepository, VerificationCodeRepository};
use crate::services::mailer::Mailer;
use crate::services::password::PasswordHasher;
use crate::services::session::SessionService;
use crate::services::verification::{CodeService, CodeStatus};

use auction_shared::utils::validation::{is_valid_code_format, normalize_email};

use super::config::AuthServiceConfig;

/// Reason a check-code request reported invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeCheckReason {
    /// Not exactly 6 digits; the store was not consulted
    Malformed,
    /// No live code matches
    NotFound,
    /// A matching code exists but is past expiry
    Expired,
}

impl CodeCheckReason {
    /// Stable string form for response bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeCheckReason::Malformed => "malformed",
            CodeCheckReason::NotFound => "not_found",
            CodeCheckReason::Expired => "expired",
        }
    }
}

/// Result of a non-mutating code check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeCheck {
    /// Whether the code would currently be accepted by verify
    pub valid: bool,
    /// Why not, when `valid` is false
    pub reason: Option<CodeCheckReason>,
}

impl CodeCheck {
    fn valid() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    fn invalid(reason: CodeCheckReason) -> Self {
        Self {
            valid: false,
            reason: Some(reason),
        }
    }
}

/// Authentication gateway
///
/// The only component that talks to the outside world: composes the account
/// repository, the code service, the session service, and the mail
/// collaborator. Holds no state of its own.
///
/// Account state machine: `unregistered -> pending_verification -> verified`;
/// no transition ever leaves `verified`.
pub struct AuthService<A, C, S, M>
where
    A: AccountRepository,
    C: VerificationCodeRepository,
    S: SessionRepository,
    M: Mailer,
{
    /// Account repository for credential storage
    account_repository: Arc<A>,
    /// Verification code manager
    code_service: Arc<CodeService<C>>,
    /// Session manager
    session_service: Arc<SessionService<S>>,
    /// Outbound mail collaborator
    mailer: Arc<M>,
    /// Password hashing with the configured cost
    password_hasher: PasswordHasher,
}

impl<A, C, S, M> AuthService<A, C, S, M>
where
    A: AccountRepository,
    C: VerificationCodeRepository,
    S: SessionRepository,
    M: Mailer,
{
    /// Create a new authentication gateway
    pub fn new(
        account_repository: Arc<A>,
        code_service: Arc<CodeService<C>>,
        session_service: Arc<SessionService<S>>,
        mailer: Arc<M>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            account_repository,
            code_service,
            session_service,
            mailer,
            password_hasher: PasswordHasher::new(config.bcrypt_cost),
        }
    }

    /// Register an account and send a verification code
    ///
    /// Creates a new unverified account, or overwrites the credentials of an
    /// existing unverified one; a verified account for the same email refuses
    /// the registration. A fresh code is issued (superseding any prior code)
    /// and delivered through the mail collaborator strictly after the store
    /// writes have committed.
    ///
    /// A delivery failure is reported as
    /// [`AuthError::MailDeliveryFailed`] but never rolls back the committed
    /// account and code state; resend is the recovery path. The response
    /// acknowledges delivery only - the code itself never appears in it.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> DomainResult<()> {
        if password.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "password".to_string(),
            }
            .into());
        }

        let email = normalize_email(email);
        let password_hash = self.password_hasher.hash(password)?;

        let account = self
            .account_repository
            .create_or_replace_unverified(Account::new(
                email.clone(),
                password_hash,
                name.map(|n| n.to_string()),
            ))
            .await?;

        tracing::info!(
            account_id = %account.id,
            email = %email,
            event = "account_registered",
            "Registered account pending verification"
        );

        let code = self.code_service.issue(account.id).await?;

        self.deliver_code(&email, &code.code).await
    }

    /// Verify an email address with a code and open a session
    ///
    /// Consumes the code, flips the account to verified, and issues a
    /// session. The consume is ordered first so that no crash point can
    /// leave a verified account with a still-live code.
    pub async fn verify(&self, email: &str, code: &str) -> DomainResult<AuthResponse> {
        let email = normalize_email(email);

        let account = self
            .account_repository
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        match self.code_service.consume(account.id, code).await? {
            CodeStatus::NotFound => return Err(AuthError::InvalidVerificationCode.into()),
            CodeStatus::Expired => return Err(AuthError::VerificationCodeExpired.into()),
            CodeStatus::Valid => {}
        }

        self.account_repository.mark_verified(account.id).await?;

        tracing::info!(
            account_id = %account.id,
            event = "account_verified",
            "Account verified"
        );

        let mut account = account;
        account.verify();
        self.open_session(&account).await
    }

    /// Re-send a verification code to a not-yet-verified account
    ///
    /// Issues a fresh code, invalidating every prior one, then delivers it.
    pub async fn resend(&self, email: &str) -> DomainResult<()> {
        let email = normalize_email(email);

        let account = self
            .account_repository
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        if account.is_verified {
            return Err(AuthError::AccountAlreadyVerified.into());
        }

        let code = self.code_service.issue(account.id).await?;

        self.deliver_code(&email, &code.code).await
    }

    /// Check a code without consuming it
    ///
    /// Never mutates state: malformed input short-circuits before the store
    /// is consulted, and a valid match is left untouched for the subsequent
    /// verify call.
    pub async fn check_code(&self, email: &str, code: &str) -> DomainResult<CodeCheck> {
        if !is_valid_code_format(code) {
            return Ok(CodeCheck::invalid(CodeCheckReason::Malformed));
        }

        let email = normalize_email(email);

        let account = match self.account_repository.find_by_email(&email).await? {
            Some(account) => account,
            None => return Ok(CodeCheck::invalid(CodeCheckReason::NotFound)),
        };

        Ok(match self.code_service.check(account.id, code).await? {
            CodeStatus::Valid => CodeCheck::valid(),
            CodeStatus::NotFound => CodeCheck::invalid(CodeCheckReason::NotFound),
            CodeStatus::Expired => CodeCheck::invalid(CodeCheckReason::Expired),
        })
    }

    /// Authenticate with email and password, opening a session
    ///
    /// Unknown email and wrong password both fail with the single
    /// [`AuthError::InvalidCredentials`] variant so the two cases are
    /// externally indistinguishable. An unverified account fails with
    /// [`AuthError::AccountNotVerified`] before the password is examined.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let email = normalize_email(email);

        let account = self
            .account_repository
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !account.is_verified {
            return Err(AuthError::AccountNotVerified.into());
        }

        if !self
            .password_hasher
            .verify(password, &account.password_hash)?
        {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!(
            account_id = %account.id,
            event = "login_succeeded",
            "Login succeeded"
        );

        self.open_session(&account).await
    }

    /// Return the public fields of the account owning a session token
    pub async fn me(&self, token: &str) -> DomainResult<AccountPublic> {
        let session = self
            .session_service
            .resolve(token)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        let account = self
            .account_repository
            .find_by_id(session.account_id)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        Ok(AccountPublic::from(&account))
    }

    /// Revoke a single session
    ///
    /// A missing or unknown token is tolerated as a no-op success: logout is
    /// idempotent from the client's point of view.
    pub async fn logout(&self, token: Option<&str>) -> DomainResult<()> {
        if let Some(token) = token {
            self.session_service.revoke(token).await?;
        }
        Ok(())
    }

    /// Revoke every session of the account owning a token
    ///
    /// # Returns
    /// The number of sessions removed, including the presented one.
    pub async fn logout_all(&self, token: &str) -> DomainResult<u64> {
        let session = self
            .session_service
            .resolve(token)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        self.session_service.revoke_all(session.account_id).await
    }

    /// Issue a session and assemble the auth response
    async fn open_session(&self, account: &Account) -> DomainResult<AuthResponse> {
        let issued = self.session_service.issue(account.id).await?;

        Ok(AuthResponse {
            token: issued.token,
            account: AccountPublic::from(account),
        })
    }

    /// Deliver a code through the mail collaborator
    ///
    /// Called only after the store writes for this step have committed.
    async fn deliver_code(&self, email: &str, code: &str) -> DomainResult<()> {
        self.mailer
            .send_verification_code(email, code)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %email,
                    error = %e,
                    event = "mail_delivery_failed",
                    "Verification mail delivery failed; account and code state remain committed"
                );
                AuthError::MailDeliveryFailed.into()
            })
    }
}
