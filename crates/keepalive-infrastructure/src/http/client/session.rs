use async_trait::async_trait;
use reqwest::{header, Client, Response};
use url::Url;

use keepalive_domain::login::{LoginForm, PortalSession};
use keepalive_domain::shared::{LoginError, RequestStage};

use super::describe_error;
use super::types::FORM_CONTENT_TYPE;

/// One cookie-carrying session; the client's jar lives as long as this value
pub(super) struct HttpPortalSession {
    client: Client,
    login_url: Url,
}

impl HttpPortalSession {
    pub(super) fn new(client: Client, login_url: Url) -> Self {
        Self { client, login_url }
    }

    async fn read_body(response: Response, stage: RequestStage) -> Result<String, LoginError> {
        let status = response.status();

        log::debug!("{} response status: {}", stage, status);

        if !status.is_success() {
            return Err(LoginError::HttpStatus {
                stage,
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| {
            LoginError::Transport(format!("Failed to read {} response: {}", stage, describe_error(&e)))
        })
    }
}

#[async_trait]
impl PortalSession for HttpPortalSession {
    async fn fetch_login_page(&mut self) -> Result<String, LoginError> {
        let response = self
            .client
            .get(self.login_url.clone())
            .header(
                header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .send()
            .await
            .map_err(|e| {
                LoginError::Transport(format!("Failed to fetch login page: {}", describe_error(&e)))
            })?;

        Self::read_body(response, RequestStage::LoginPage).await
    }

    async fn submit_credentials(&mut self, form: &LoginForm) -> Result<String, LoginError> {
        let response = self
            .client
            .post(self.login_url.clone())
            .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(encode_login_form(form))
            .send()
            .await
            .map_err(|e| {
                LoginError::Transport(format!("Failed to submit login form: {}", describe_error(&e)))
            })?;

        Self::read_body(response, RequestStage::FormSubmit).await
    }
}

/// Build the form body.
///
/// The token goes in exactly as the page served it; username and password
/// are percent-encoded.
pub(super) fn encode_login_form(form: &LoginForm) -> String {
    format!(
        "token={}&username={}&password={}",
        form.token,
        urlencoding::encode(&form.username),
        urlencoding::encode(&form.password)
    )
}
