// Domain layer - Pure keep-alive logic
// No dependencies on infrastructure or application layers

pub mod account;
pub mod login;
pub mod shared;

// Re-exports for convenience
pub use account::{parse_accounts, Account, ParsedAccounts};
pub use shared::{DomainError, LoginError, RequestStage};
