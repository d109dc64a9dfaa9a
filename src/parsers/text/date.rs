use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::types::TransactionDate;

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Date shapes recognized on a statement line.
///
/// Formats are tried in [`DateFormat::PRIORITY`] order and the first one that
/// matches anywhere on the line wins, even if another format appears earlier
/// in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormat {
    /// `15 Mar 2023`
    DayMonthNameYear,
    /// `05/03/2023`, day-first with a month-first fallback
    SlashNumeric,
    /// `2023-03-05`, kept as written
    IsoNumeric,
}

impl DateFormat {
    pub const PRIORITY: [DateFormat; 3] = [
        DateFormat::DayMonthNameYear,
        DateFormat::SlashNumeric,
        DateFormat::IsoNumeric,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            DateFormat::DayMonthNameYear => {
                static RE: OnceLock<Regex> = OnceLock::new();
                RE.get_or_init(|| {
                    Regex::new(
                        r"(?i)\b(\d{1,2})\s+(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\s+(\d{4})\b",
                    )
                    .expect("month name date regex")
                })
            }
            DateFormat::SlashNumeric => {
                static RE: OnceLock<Regex> = OnceLock::new();
                RE.get_or_init(|| {
                    Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b").expect("slash date regex")
                })
            }
            DateFormat::IsoNumeric => {
                static RE: OnceLock<Regex> = OnceLock::new();
                RE.get_or_init(|| {
                    Regex::new(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b").expect("iso date regex")
                })
            }
        }
    }

    /// Turn a structural match into a date. `None` means no interpretation is
    /// a valid calendar date; the caller keeps the raw text instead.
    fn normalize(self, caps: &Captures<'_>) -> Option<TransactionDate> {
        match self {
            DateFormat::DayMonthNameYear => {
                let day: u32 = caps[1].parse().ok()?;
                let name = caps[2].to_ascii_lowercase();
                let month = MONTHS.iter().position(|m| *m == name)? as u32 + 1;
                let year: i32 = caps[3].parse().ok()?;
                NaiveDate::from_ymd_opt(year, month, day).map(TransactionDate::Normalized)
            }
            DateFormat::SlashNumeric => {
                let first: u32 = caps[1].parse().ok()?;
                let second: u32 = caps[2].parse().ok()?;
                let year: i32 = caps[3].parse().ok()?;
                NaiveDate::from_ymd_opt(year, second, first)
                    .or_else(|| NaiveDate::from_ymd_opt(year, first, second))
                    .map(TransactionDate::Normalized)
            }
            DateFormat::IsoNumeric => Some(TransactionDate::from(&caps[0])),
        }
    }
}

/// A date located on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    pub format: DateFormat,
    pub date: TransactionDate,
    /// The matched substring, verbatim.
    pub raw: String,
    /// Byte offset just past the match.
    pub end: usize,
}

/// Locate exactly one date on `line`, trying formats in priority order.
pub fn match_date(line: &str) -> Option<DateMatch> {
    DateFormat::PRIORITY.iter().find_map(|&format| {
        let caps = format.pattern().captures(line)?;
        let whole = caps.get(0)?;
        let raw = whole.as_str().to_string();
        let date = format
            .normalize(&caps)
            .unwrap_or_else(|| TransactionDate::Raw(raw.clone()));

        Some(DateMatch {
            format,
            date,
            raw,
            end: whole.end(),
        })
    })
}
