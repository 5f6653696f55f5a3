//! Session repository interface and mock implementation.

mod mock;
#[path = "trait.rs"]
mod r#trait;

pub use mock::MockSessionRepository;
pub use r#trait::SessionRepository;
