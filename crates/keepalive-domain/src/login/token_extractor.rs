use once_cell::sync::Lazy;
use regex::Regex;

/// Token patterns in priority order
static TOKEN_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r#"name="token" value="(.*?)""#,
        r"csrfToken = '(.*?)'",
        r#"token: "(.*?)""#,
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("token pattern must compile"))
    .collect()
});

/// Extract the authenticity token from a login page
///
/// Strategy:
/// 1. Hidden form input `name="token" value="..."`
/// 2. JS assignment `csrfToken = '...'`
/// 3. JSON-like `token: "..."`
///
/// Patterns are tried in that order regardless of where each one appears in
/// the document; the first capture of the first matching pattern wins.
pub fn extract_authenticity_token(html: &str) -> Option<String> {
    TOKEN_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(html)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}
