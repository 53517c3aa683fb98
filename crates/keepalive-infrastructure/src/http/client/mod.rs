mod session;
mod types;

pub use types::{PortalConfig, DEFAULT_LOGIN_URL};

use async_trait::async_trait;
use reqwest::Client;

use keepalive_domain::login::{LoginPortal, PortalSession};
use keepalive_domain::shared::LoginError;

use session::HttpPortalSession;
use types::USER_AGENT;

/// reqwest-backed access to the control panel login endpoint
pub struct HttpLoginPortal {
    config: PortalConfig,
}

impl HttpLoginPortal {
    pub fn new(config: PortalConfig) -> Self {
        Self { config }
    }

    fn build_client(&self) -> Result<Client, reqwest::Error> {
        Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .timeout(self.config.request_timeout)
            .build()
    }
}

#[async_trait]
impl LoginPortal for HttpLoginPortal {
    async fn open_session(&self) -> Result<Box<dyn PortalSession>, LoginError> {
        // A new client means a new cookie jar
        let client = self.build_client().map_err(|e| {
            LoginError::Transport(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Box::new(HttpPortalSession::new(
            client,
            self.config.login_url.clone(),
        )))
    }
}

/// Flatten an error and its sources into one line
fn describe_error(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
