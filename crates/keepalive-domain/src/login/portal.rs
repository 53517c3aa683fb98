use async_trait::async_trait;

use crate::shared::LoginError;

/// Fields submitted with the login form
#[derive(Clone)]
pub struct LoginForm {
    pub token: String,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("token", &self.token)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Entry point to the control panel login endpoint
#[async_trait]
pub trait LoginPortal: Send + Sync {
    /// Start a fresh session with its own cookie jar.
    /// One session is opened per attempt and dropped when the attempt ends.
    async fn open_session(&self) -> Result<Box<dyn PortalSession>, LoginError>;
}

/// One cookie-scoped browsing session against the login endpoint
#[async_trait]
pub trait PortalSession: Send {
    /// GET the login page and return its body
    async fn fetch_login_page(&mut self) -> Result<String, LoginError>;

    /// POST the login form and return the response body
    async fn submit_credentials(&mut self, form: &LoginForm) -> Result<String, LoginError>;
}
