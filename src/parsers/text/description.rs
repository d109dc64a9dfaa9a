use std::sync::OnceLock;

use regex::Regex;

use super::classifier::TRANSACTION_KEYWORDS;
use crate::types::EMPTY_DESCRIPTION;

/// Debit/credit shorthands stripped alongside the classifier keywords.
const MARKER_TOKENS: [&str; 2] = ["DR", "CR"];

fn marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let alternation = TRANSACTION_KEYWORDS
            .iter()
            .chain(MARKER_TOKENS.iter())
            .copied()
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("marker token regex")
    })
}

fn currency_amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"(?i)(?:(?:^|\s)[-+]\s*|\b)",
            r"(?:(?:INR|USD|EUR)\s*[-+]?\s*)?",
            r"(?:\d{1,3}(?:,\d{2,3})+|\d+)(?:\.\d+)?\b"
        ))
        .expect("currency amount regex")
    })
}

/// Clean a transaction line into a description usable as a category key.
///
/// Everything up to `date_end` is dropped first so date digits are never read
/// as amounts. Then word-bounded type markers go, then amounts with an
/// optional currency code and sign, then whitespace is collapsed. A sign is
/// only taken when it starts a token, so `ABC-123` keeps its hyphen.
pub fn normalize_description(line: &str, date_end: Option<usize>) -> String {
    let rest = date_end.and_then(|end| line.get(end..)).unwrap_or(line);

    let without_markers = marker_re().replace_all(rest, " ");
    let without_amounts = currency_amount_re().replace_all(&without_markers, " ");
    let collapsed = without_amounts.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.is_empty() {
        EMPTY_DESCRIPTION.to_string()
    } else {
        collapsed
    }
}
