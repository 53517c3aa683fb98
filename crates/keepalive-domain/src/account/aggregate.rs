use crate::shared::DomainError;

/// Control panel login credentials for one account
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    username: String,
    password: String,
}

impl Account {
    pub fn new(username: &str, password: &str) -> Result<Self, DomainError> {
        let username = username.trim();
        let password = password.trim();

        if username.is_empty() {
            return Err(DomainError::InvalidInput(
                "Username cannot be empty".to_string(),
            ));
        }

        if password.is_empty() {
            return Err(DomainError::InvalidInput(
                "Password cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Password stays out of logs
impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Result of parsing an account list
#[derive(Debug, Default)]
pub struct ParsedAccounts {
    /// Accounts in configuration order
    pub accounts: Vec<Account>,
    /// Raw segments that could not be parsed
    pub rejected: Vec<String>,
}

/// Parse `username,password;username,password;...`
///
/// Blank segments are ignored. A segment without a comma, or with an empty
/// username or password after trimming, is reported in `rejected` instead of
/// failing the whole list. Only the first comma splits, so passwords may
/// contain commas.
pub fn parse_accounts(raw: &str) -> ParsedAccounts {
    let mut parsed = ParsedAccounts::default();

    for segment in raw.split(';') {
        if segment.trim().is_empty() {
            continue;
        }

        let account = segment
            .split_once(',')
            .and_then(|(username, password)| Account::new(username, password).ok());

        match account {
            Some(account) => parsed.accounts.push(account),
            None => parsed.rejected.push(segment.to_string()),
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_accounts_in_order() {
        let parsed = parse_accounts("alice,secret1;bob,secret2");

        assert_eq!(parsed.accounts.len(), 2);
        assert!(parsed.rejected.is_empty());
        assert_eq!(parsed.accounts[0].username(), "alice");
        assert_eq!(parsed.accounts[0].password(), "secret1");
        assert_eq!(parsed.accounts[1].username(), "bob");
        assert_eq!(parsed.accounts[1].password(), "secret2");
    }

    #[test]
    fn test_parse_trims_whitespace_and_skips_blank_segments() {
        let parsed = parse_accounts("  alice , secret1 ;; ;\n bob,secret2;");

        assert_eq!(parsed.accounts.len(), 2);
        assert!(parsed.rejected.is_empty());
        assert_eq!(parsed.accounts[0].username(), "alice");
        assert_eq!(parsed.accounts[0].password(), "secret1");
    }

    #[test]
    fn test_parse_rejects_malformed_segments() {
        let parsed = parse_accounts("nocomma;alice,secret1;,onlypass;onlyuser,");

        assert_eq!(parsed.accounts.len(), 1);
        assert_eq!(parsed.accounts[0].username(), "alice");
        assert_eq!(parsed.rejected, vec!["nocomma", ",onlypass", "onlyuser,"]);
    }

    #[test]
    fn test_parse_keeps_commas_in_password() {
        let parsed = parse_accounts("alice,pa,ss,word");

        assert_eq!(parsed.accounts.len(), 1);
        assert_eq!(parsed.accounts[0].password(), "pa,ss,word");
    }

    #[test]
    fn test_parse_empty_input() {
        let parsed = parse_accounts("");
        assert!(parsed.accounts.is_empty());
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn test_debug_hides_password() {
        let account = Account::new("alice", "hunter2").unwrap();
        let debug = format!("{:?}", account);

        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }
}
