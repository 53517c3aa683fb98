mod settings;

pub use settings::{
    redact_entry, Settings, ACCOUNTS_VAR, LOGIN_URL_VAR, LOG_DIR_VAR, MAX_RETRIES_VAR,
};
