/// Which of the two login requests produced an HTTP error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStage {
    LoginPage,
    FormSubmit,
}

impl std::fmt::Display for RequestStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStage::LoginPage => write!(f, "login page"),
            RequestStage::FormSubmit => write!(f, "form submit"),
        }
    }
}

/// Everything that can go wrong during one login attempt
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("token not found")]
    TokenNotFound,

    #[error("{stage} request failed with status {status}")]
    HttpStatus { stage: RequestStage, status: u16 },

    #[error("invalid credentials")]
    CredentialRejected,

    #[error("unrecognized page structure")]
    UnrecognizedPage,

    #[error("no countdown detected")]
    CountdownNotDetected,

    #[error("transport error: {0}")]
    Transport(String),
}

impl LoginError {
    /// Whether a fresh attempt could produce a different result.
    ///
    /// A dashboard without a countdown will look the same on the next
    /// login, so that case is final.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, LoginError::CountdownNotDetected)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
