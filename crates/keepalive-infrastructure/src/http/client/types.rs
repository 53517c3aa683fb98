use std::time::Duration;

use url::Url;

pub(super) const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/138.0.0.0 Safari/537.36";

pub(super) const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub const DEFAULT_LOGIN_URL: &str = "https://client.webhostmost.com/login";

/// Where and how to reach the control panel login endpoint
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Used for both the page GET and the form POST
    pub login_url: Url,
    pub request_timeout: Duration,
}

impl PortalConfig {
    pub fn new(login_url: Url, request_timeout: Duration) -> Self {
        Self {
            login_url,
            request_timeout,
        }
    }
}
