// Wordseek query parsing
// Turns free-text queries and natural-language constraint queries into
// typed query structures; parsing never fails, unmatched parts are absent

use crate::types::{Constraint, ParsedQuery, Pattern, WILDCARD};
use once_cell::sync::Lazy;
use regex::Regex;

static REQUIRED_CHAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([a-z])\]").expect("hard-coded regex"));

static LENGTH_PHRASE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*letters?\b").expect("hard-coded regex"));

static STARTS_WITH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bstart(?:s|ing)?\s+with\s+([a-z]+)").expect("hard-coded regex"));

static ENDS_WITH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bend(?:s|ing)?\s+with\s+([a-z]+)").expect("hard-coded regex"));

static POSITION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([a-z])\s+as\s+(?:the\s+)?(\d+)(?:st|nd|rd|th)?\s+letter")
        .expect("hard-coded regex")
});

static CONTAINS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bcontain(?:s|ing)?\s+([a-z])\b").expect("hard-coded regex"));

/// Parse a free-text query into its three independent parts.
///
/// The query is lowercased first, mirroring load-time word
/// normalization. Pattern detection is all-or-nothing: the pattern is
/// present only when the ENTIRE query is letters and wildcard markers
/// ("w___s"); any other character anywhere leaves the pattern absent
/// rather than partially matched. Required characters (`[o]`) and the
/// "N letter" length phrase are extracted by independent scans and do
/// not need pattern mode to be active.
///
/// # Examples
/// ```
/// # use wordseek::query::parse_query;
/// let q = parse_query("w___s");
/// assert!(q.pattern.is_some());
///
/// let q = parse_query("5 letters [o] [k]");
/// assert!(q.pattern.is_none());
/// assert_eq!(q.required, vec!['o', 'k']);
/// assert_eq!(q.length, Some(5));
/// ```
pub fn parse_query(query: &str) -> ParsedQuery {
    let query = query.trim().to_lowercase();

    ParsedQuery {
        pattern: Pattern::parse(&query),
        required: required_chars(&query),
        length: length_phrase(&query),
    }
}

/// Recover a pattern from a noisy query by dropping every character
/// that is not a letter or a wildcard marker. Used by suggestions,
/// where best-effort recovery beats the strict whole-query rule.
pub fn salvage_pattern(query: &str) -> Option<Pattern> {
    let stripped: String = query
        .trim()
        .to_lowercase()
        .chars()
        .filter(|&ch| ch.is_ascii_lowercase() || ch == WILDCARD)
        .collect();
    Pattern::parse(&stripped)
}

/// Translate a natural-language advanced query into a constraint list.
///
/// Each phrase kind is extracted by its own scan over the whole text,
/// first match wins per kind, and every kind is optional:
/// - length: "5 letters"
/// - prefix: "starts with wo" / "starting with wo"
/// - suffix: "ends with s" / "ending with s"
/// - position: "w as 3rd letter" (one-based in the phrase)
/// - containment: "contains o" / "containing o"
///
/// Phrases that match nothing contribute nothing, so unrecognized text
/// is silently ignored rather than rejected. The parsing is
/// deliberately approximate; it is a convenience layer over
/// `advanced_search`, not a natural-language front end.
pub fn parse_constraints(text: &str) -> Vec<Constraint> {
    let text = text.trim().to_lowercase();
    let mut constraints = Vec::new();

    if let Some(value) = length_phrase(&text) {
        constraints.push(Constraint::Length { value });
    }
    if let Some(caps) = STARTS_WITH_RE.captures(&text) {
        constraints.push(Constraint::StartsWith {
            value: caps[1].to_string(),
        });
    }
    if let Some(caps) = ENDS_WITH_RE.captures(&text) {
        constraints.push(Constraint::EndsWith {
            value: caps[1].to_string(),
        });
    }
    if let Some(caps) = POSITION_RE.captures(&text) {
        let ch = caps[1].chars().next().unwrap_or_default();
        if let Ok(ordinal) = caps[2].parse::<usize>() {
            // Phrases are one-based; "0th letter" matches nothing.
            if ordinal > 0 {
                constraints.push(Constraint::ContainsAtPosition {
                    ch,
                    position: ordinal - 1,
                });
            }
        }
    }
    if let Some(caps) = CONTAINS_RE.captures(&text) {
        constraints.push(Constraint::Contains {
            ch: caps[1].chars().next().unwrap_or_default(),
        });
    }

    constraints
}

/// Characters wrapped in literal brackets, in order of appearance,
/// deduplicated.
fn required_chars(query: &str) -> Vec<char> {
    let mut required = Vec::new();
    for caps in REQUIRED_CHAR_RE.captures_iter(query) {
        if let Some(ch) = caps[1].chars().next() {
            if !required.contains(&ch) {
                required.push(ch);
            }
        }
    }
    required
}

/// First "N letter"/"N letters" phrase in the query, if any.
fn length_phrase(query: &str) -> Option<usize> {
    LENGTH_PHRASE_RE
        .captures(query)
        .and_then(|caps| caps[1].parse().ok())
}
