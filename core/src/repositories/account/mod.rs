//! Account repository interface and mock implementation.

mod mock;
#[path = "trait.rs"]
mod r#trait;

pub use mock::MockAccountRepository;
pub use r#trait::AccountRepository;
