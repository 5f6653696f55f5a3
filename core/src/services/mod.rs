//! Business services.

pub mod auth;
pub mod mailer;
pub mod password;
pub mod session;
pub mod verification;

pub use auth::AuthService;
pub use mailer::{Mailer, MailerError};
pub use password::PasswordHasher;
pub use session::SessionService;
pub use verification::CodeService;
