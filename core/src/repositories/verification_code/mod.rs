//! Verification code repository interface and mock implementation.

mod mock;
#[path = "trait.rs"]
mod r#trait;

pub use mock::MockVerificationCodeRepository;
pub use r#trait::VerificationCodeRepository;
