use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use keepalive_domain::account::Account;
use keepalive_domain::login::{LoginForm, LoginPortal, PortalSession};
use keepalive_domain::shared::{LoginError, RequestStage};
use keepalive_infrastructure::config::TimeoutConfig;

use super::LoginAttempter;

const TOKEN_PAGE: &str = r#"<form><input type="hidden" name="token" value="tok-1"></form>"#;
const COUNTDOWN_PAGE: &str =
    "<h1>Client Area</h1><span>Time until suspension</span><b>44 days</b>";
const COUNTDOWN_TIMER_PAGE: &str = r#"<h1>Dashboard</h1><div id="custom-timer">44:00:00</div>"#;
const NO_COUNTDOWN_PAGE: &str = "<h1>Dashboard</h1><p>Welcome back</p>";
const REJECTED_PAGE: &str = "<div class=\"alert\">Invalid login details</div>";
const UNKNOWN_PAGE: &str = "<p>Please verify you are human</p>";

// Mock portal replaying a fixed script for every session it opens

#[derive(Clone)]
struct SessionScript {
    page: Result<String, LoginError>,
    response: Result<String, LoginError>,
}

impl SessionScript {
    fn new(page: &str, response: &str) -> Self {
        Self {
            page: Ok(page.to_string()),
            response: Ok(response.to_string()),
        }
    }
}

struct MockPortal {
    /// Script for session N; the last entry repeats
    scripts: Vec<SessionScript>,
    sessions_opened: AtomicU32,
    submitted: Arc<Mutex<Vec<LoginForm>>>,
}

impl MockPortal {
    fn new(scripts: Vec<SessionScript>) -> Self {
        Self {
            scripts,
            sessions_opened: AtomicU32::new(0),
            submitted: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn always(script: SessionScript) -> Self {
        Self::new(vec![script])
    }

    fn sessions_opened(&self) -> u32 {
        self.sessions_opened.load(Ordering::SeqCst)
    }

    fn submitted_forms(&self) -> Vec<LoginForm> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl LoginPortal for MockPortal {
    async fn open_session(&self) -> Result<Box<dyn PortalSession>, LoginError> {
        let index = self.sessions_opened.fetch_add(1, Ordering::SeqCst) as usize;
        let script = self
            .scripts
            .get(index)
            .or_else(|| self.scripts.last())
            .cloned()
            .expect("mock portal needs at least one script");

        Ok(Box::new(MockSession {
            script,
            submitted: Arc::clone(&self.submitted),
        }))
    }
}

struct MockSession {
    script: SessionScript,
    submitted: Arc<Mutex<Vec<LoginForm>>>,
}

#[async_trait]
impl PortalSession for MockSession {
    async fn fetch_login_page(&mut self) -> Result<String, LoginError> {
        self.script.page.clone()
    }

    async fn submit_credentials(&mut self, form: &LoginForm) -> Result<String, LoginError> {
        self.submitted.lock().unwrap().push(form.clone());
        self.script.response.clone()
    }
}

fn attempter(portal: &Arc<MockPortal>, max_retries: u32) -> LoginAttempter {
    let portal: Arc<dyn LoginPortal> = portal.clone();
    LoginAttempter::new(portal, max_retries, TimeoutConfig::without_delays())
}

fn alice() -> Account {
    Account::new("alice", "secret1").unwrap()
}

#[tokio::test]
async fn test_success_with_countdown_phrase() {
    let portal = Arc::new(MockPortal::always(SessionScript::new(
        TOKEN_PAGE,
        COUNTDOWN_PAGE,
    )));

    let result = attempter(&portal, 2).attempt_login(&alice()).await;

    assert!(result.success);
    assert_eq!(result.username, "alice");
    assert_eq!(
        result.countdown.as_deref(),
        Some("countdown confirmed (English)")
    );
    assert!(result.error.is_none());
    assert_eq!(result.attempts, 1);
    assert_eq!(portal.sessions_opened(), 1);
}

#[tokio::test]
async fn test_success_with_timer_element() {
    let portal = Arc::new(MockPortal::always(SessionScript::new(
        TOKEN_PAGE,
        COUNTDOWN_TIMER_PAGE,
    )));

    let result = attempter(&portal, 2).attempt_login(&alice()).await;

    assert!(result.success);
    assert_eq!(result.countdown.as_deref(), Some("countdown confirmed"));
}

#[tokio::test]
async fn test_submits_extracted_token_and_credentials() {
    let portal = Arc::new(MockPortal::always(SessionScript::new(
        TOKEN_PAGE,
        COUNTDOWN_PAGE,
    )));

    attempter(&portal, 0).attempt_login(&alice()).await;

    let forms = portal.submitted_forms();
    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0].token, "tok-1");
    assert_eq!(forms[0].username, "alice");
    assert_eq!(forms[0].password, "secret1");
}

#[tokio::test]
async fn test_missing_countdown_is_terminal() {
    let portal = Arc::new(MockPortal::always(SessionScript::new(
        TOKEN_PAGE,
        NO_COUNTDOWN_PAGE,
    )));

    let result = attempter(&portal, 3).attempt_login(&alice()).await;

    assert!(!result.success);
    assert!(result.countdown.is_none());
    assert_eq!(result.error.as_deref(), Some("no countdown detected"));
    assert_eq!(result.attempts, 1);
    assert_eq!(portal.sessions_opened(), 1, "must not retry");
}

#[tokio::test]
async fn test_credential_rejection_retries_then_fails() {
    let portal = Arc::new(MockPortal::always(SessionScript::new(
        TOKEN_PAGE,
        REJECTED_PAGE,
    )));

    let result = attempter(&portal, 2).attempt_login(&alice()).await;

    assert!(!result.success);
    assert!(result.countdown.is_none(), "countdown logic must not run");
    assert_eq!(result.error.as_deref(), Some("invalid credentials"));
    assert_eq!(result.attempts, 3);
    assert_eq!(portal.sessions_opened(), 3);
}

#[tokio::test]
async fn test_rejection_wins_over_countdown_markers() {
    let body = format!("{}{}", COUNTDOWN_PAGE, REJECTED_PAGE);
    let portal = Arc::new(MockPortal::always(SessionScript::new(TOKEN_PAGE, &body)));

    let result = attempter(&portal, 0).attempt_login(&alice()).await;

    assert!(!result.success);
    assert!(result.countdown.is_none());
    assert_eq!(result.error.as_deref(), Some("invalid credentials"));
}

#[tokio::test]
async fn test_unrecognized_page_retries_up_to_limit() {
    let portal = Arc::new(MockPortal::always(SessionScript::new(
        TOKEN_PAGE,
        UNKNOWN_PAGE,
    )));

    let result = attempter(&portal, 2).attempt_login(&alice()).await;

    assert!(!result.success);
    assert!(result.error.as_deref().unwrap().contains("unrecognized"));
    assert_eq!(result.attempts, 3);
    assert_eq!(portal.sessions_opened(), 3);
}

#[tokio::test]
async fn test_missing_token_skips_submit() {
    let portal = Arc::new(MockPortal::always(SessionScript::new(
        "<html>no form here</html>",
        COUNTDOWN_PAGE,
    )));

    let result = attempter(&portal, 1).attempt_login(&alice()).await;

    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("token not found"));
    assert_eq!(result.attempts, 2);
    assert!(portal.submitted_forms().is_empty());
}

#[tokio::test]
async fn test_http_error_recovers_on_retry() {
    let failing = SessionScript {
        page: Err(LoginError::HttpStatus {
            stage: RequestStage::LoginPage,
            status: 502,
        }),
        response: Ok(String::new()),
    };
    let portal = Arc::new(MockPortal::new(vec![
        failing,
        SessionScript::new(TOKEN_PAGE, COUNTDOWN_PAGE),
    ]));

    let result = attempter(&portal, 2).attempt_login(&alice()).await;

    assert!(result.success);
    assert_eq!(result.attempts, 2);
    assert_eq!(portal.sessions_opened(), 2);
}

#[tokio::test]
async fn test_last_error_is_recorded() {
    let transport = SessionScript {
        page: Err(LoginError::Transport("connection reset".to_string())),
        response: Ok(String::new()),
    };
    let portal = Arc::new(MockPortal::new(vec![
        transport,
        SessionScript::new(TOKEN_PAGE, UNKNOWN_PAGE),
    ]));

    let result = attempter(&portal, 1).attempt_login(&alice()).await;

    assert_eq!(result.error.as_deref(), Some("unrecognized page structure"));
    assert_eq!(result.attempts, 2);
}

#[tokio::test]
async fn test_zero_retries_means_single_attempt() {
    let portal = Arc::new(MockPortal::always(SessionScript::new(
        TOKEN_PAGE,
        UNKNOWN_PAGE,
    )));

    let result = attempter(&portal, 0).attempt_login(&alice()).await;

    assert!(!result.success);
    assert_eq!(result.attempts, 1);
    assert_eq!(portal.sessions_opened(), 1);
}

#[tokio::test]
async fn test_largest_retry_count_still_attempts_login() {
    let portal = Arc::new(MockPortal::always(SessionScript::new(
        TOKEN_PAGE,
        COUNTDOWN_PAGE,
    )));

    let result = attempter(&portal, u32::MAX).attempt_login(&alice()).await;

    assert!(result.success);
    assert_eq!(result.attempts, 1);
    assert_eq!(portal.sessions_opened(), 1);
}

#[tokio::test]
async fn test_largest_retry_count_stops_on_terminal_outcome() {
    let portal = Arc::new(MockPortal::always(SessionScript::new(
        TOKEN_PAGE,
        NO_COUNTDOWN_PAGE,
    )));

    let result = attempter(&portal, u32::MAX).attempt_login(&alice()).await;

    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("no countdown detected"));
    assert_eq!(result.attempts, 1);
}

#[tokio::test(start_paused = true)]
async fn test_linear_backoff_between_attempts() {
    let portal = Arc::new(MockPortal::always(SessionScript::new(
        TOKEN_PAGE,
        UNKNOWN_PAGE,
    )));
    let dyn_portal: Arc<dyn LoginPortal> = portal.clone();
    let attempter = LoginAttempter::new(dyn_portal, 2, TimeoutConfig::default());

    let started = tokio::time::Instant::now();
    attempter.attempt_login(&alice()).await;

    // 5 + 1*5, then 5 + 2*5
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_secs(25), "waited {:?}", elapsed);
    assert!(elapsed < Duration::from_secs(26), "waited {:?}", elapsed);
    assert_eq!(portal.sessions_opened(), 3);
}
