mod classifier;
mod countdown;
mod portal;
mod token_extractor;
mod value_objects;


pub use classifier::{classify_login_response, PageClassification};
pub use countdown::{detect_countdown, CountdownIndicator};
pub use portal::{LoginForm, LoginPortal, PortalSession};
pub use token_extractor::extract_authenticity_token;
pub use value_objects::{AttemptOutcome, AttemptResult, RunSummary};
