use log::{debug, info};

use keepalive_domain::account::Account;
use keepalive_domain::login::{
    classify_login_response, detect_countdown, extract_authenticity_token, AttemptOutcome,
    CountdownIndicator, LoginForm, LoginPortal, PageClassification, PortalSession,
};
use keepalive_domain::shared::LoginError;

/// One full fetch, submit and classify cycle on a fresh session
pub(super) async fn run_attempt(portal: &dyn LoginPortal, account: &Account) -> AttemptOutcome {
    match login_once(portal, account).await {
        Ok(indicator) => AttemptOutcome::Succeeded(indicator),
        Err(err) => AttemptOutcome::from_error(err),
    }
}

async fn login_once(
    portal: &dyn LoginPortal,
    account: &Account,
) -> Result<CountdownIndicator, LoginError> {
    let username = account.username();

    // Session is dropped with its cookies when this function returns
    let mut session = portal.open_session().await?;

    let page = session.fetch_login_page().await?;
    let token = extract_authenticity_token(&page).ok_or(LoginError::TokenNotFound)?;
    debug!("[{}] Authenticity token extracted", username);

    let form = LoginForm {
        token,
        username: username.to_string(),
        password: account.password().to_string(),
    };
    let body = session.submit_credentials(&form).await?;

    match classify_login_response(&body) {
        PageClassification::CredentialRejected => Err(LoginError::CredentialRejected),
        PageClassification::Unrecognized => Err(LoginError::UnrecognizedPage),
        PageClassification::LoggedIn => {
            info!("[{}] Login accepted", username);
            detect_countdown(&body).ok_or(LoginError::CountdownNotDetected)
        }
    }
}
