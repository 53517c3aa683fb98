/// Evidence that the session reached the account dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountdownIndicator {
    /// A localized "time until suspension" phrase
    Phrase { language: String },
    /// The countdown timer element, found by id
    TimerElement,
}

impl CountdownIndicator {
    /// Human-readable detail recorded on the attempt result
    pub fn detail(&self) -> String {
        match self {
            CountdownIndicator::Phrase { language } => {
                format!("countdown confirmed ({})", language)
            }
            CountdownIndicator::TimerElement => "countdown confirmed".to_string(),
        }
    }
}

/// Phrase table, checked in order
const COUNTDOWN_PHRASES: &[(&str, &str)] = &[
    ("Time until suspension", "English"),
    ("Tijd tot schorsing", "Dutch"),
    ("Zeit bis zur Sperrung", "German"),
    ("停止までの時間", "Japanese"),
    ("Tiempo hasta la suspensión", "Spanish"),
];

const TIMER_ELEMENT_IDS: &[&str] = &[r#"id="custom-timer""#, "id='custom-timer'"];

/// Look for the suspension countdown on a logged-in page.
///
/// Phrases are matched case-insensitively and the first table entry found
/// wins. The timer element id is the fallback and is matched exactly.
pub fn detect_countdown(html: &str) -> Option<CountdownIndicator> {
    let body = html.to_lowercase();

    let phrase = COUNTDOWN_PHRASES
        .iter()
        .find(|(phrase, _)| body.contains(&phrase.to_lowercase()));

    if let Some((_, language)) = phrase {
        return Some(CountdownIndicator::Phrase {
            language: language.to_string(),
        });
    }

    if TIMER_ELEMENT_IDS.iter().any(|id| html.contains(id)) {
        return Some(CountdownIndicator::TimerElement);
    }

    None
}
