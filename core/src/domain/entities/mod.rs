//! Domain entities.

pub mod account;
pub mod session;
pub mod verification_code;

pub use account::Account;
pub use session::Session;
pub use verification_code::VerificationCode;
