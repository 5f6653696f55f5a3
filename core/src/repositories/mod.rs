//! Repository interfaces for domain entity persistence.
//!
//! Each record kind is owned by exactly one repository; no service reaches
//! into another entity's storage. Implementations live in the infrastructure
//! crate; in-memory mocks for tests live alongside each trait.

pub mod account;
pub mod session;
pub mod verification_code;

pub use account::{AccountRepository, MockAccountRepository};
pub use session::{MockSessionRepository, SessionRepository};
pub use verification_code::{MockVerificationCodeRepository, VerificationCodeRepository};
