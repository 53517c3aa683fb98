mod aggregate;

pub use aggregate::{parse_accounts, Account, ParsedAccounts};
