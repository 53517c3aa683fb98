/// What the page returned after the login form submit looks like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageClassification {
    /// The panel displayed a login error
    CredentialRejected,
    /// The panel displayed the client area
    LoggedIn,
    /// Neither marker was found
    Unrecognized,
}

const FAILURE_KEYWORDS: &[&str] = &[
    "invalid credentials",
    "invalid login",
    "incorrect",
    "login failed",
];

const SUCCESS_KEYWORDS: &[&str] = &["client area", "dashboard", "my services", "clientarea.php"];

/// Classify a post-login response body.
///
/// Matching is a case-insensitive substring search over the whole body.
/// Failure markers are checked before success markers, so a client area page
/// that also shows a login error counts as rejected.
pub fn classify_login_response(html: &str) -> PageClassification {
    let body = html.to_lowercase();

    if FAILURE_KEYWORDS.iter().any(|keyword| body.contains(keyword)) {
        PageClassification::CredentialRejected
    } else if SUCCESS_KEYWORDS.iter().any(|keyword| body.contains(keyword)) {
        PageClassification::LoggedIn
    } else {
        PageClassification::Unrecognized
    }
}
