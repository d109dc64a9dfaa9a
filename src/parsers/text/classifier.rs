//! Two-signal heuristic deciding whether a line is a transaction.
//!
//! A line qualifies when it mentions a transaction keyword and carries a
//! number. Keywords are matched as case-insensitive substrings, so `CREDITED`
//! counts as `CREDIT`. Non-transaction lines that happen to hold both signals
//! (e.g. "Total credit limit 50,000.00") are accepted as false positives, and
//! transactions worded without any listed keyword are missed.

use std::sync::OnceLock;

use regex::Regex;

pub const TRANSACTION_KEYWORDS: [&str; 10] = [
    "DEBIT",
    "CREDIT",
    "TRANSFER",
    "IMPS",
    "NEFT",
    "PAYMENT",
    "PURCHASE",
    "SALE",
    "WITHDRAWAL",
    "DEPOSIT",
];

/// Digits, optionally comma-grouped, with exactly two decimals: `1,234.56`.
/// Lakh grouping (`1,23,456.00`) is read as one amount too.
pub(crate) fn grouped_amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:\d{1,3}(?:,\d{2,3})+|\d+)\.\d{2}\b").expect("grouped amount regex")
    })
}

fn digits_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").expect("digits regex"))
}

/// Strongest numeric evidence found on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericSignal {
    GroupedAmount,
    Digits,
}

pub fn contains_keyword(line: &str) -> bool {
    let upper = line.to_uppercase();
    TRANSACTION_KEYWORDS.iter().any(|kw| upper.contains(kw))
}

pub fn numeric_signal(line: &str) -> Option<NumericSignal> {
    if grouped_amount_re().is_match(line) {
        Some(NumericSignal::GroupedAmount)
    } else if digits_re().is_match(line) {
        Some(NumericSignal::Digits)
    } else {
        None
    }
}

pub fn is_transaction_line(line: &str) -> bool {
    contains_keyword(line) && numeric_signal(line).is_some()
}
