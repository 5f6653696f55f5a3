//! MySQL repository implementations.

pub mod account_repository_impl;
pub mod session_repository_impl;
pub mod verification_code_repository_impl;

pub use account_repository_impl::MySqlAccountRepository;
pub use session_repository_impl::MySqlSessionRepository;
pub use verification_code_repository_impl::MySqlVerificationCodeRepository;
