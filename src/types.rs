use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Placeholder used when cleaning removes every character of a description.
pub const EMPTY_DESCRIPTION: &str = "No description extracted";

/// Date found on a transaction line.
///
/// `Normalized` holds a real calendar date. `Raw` keeps the matched text when
/// no interpretation produced a valid date, or when a `YYYY-M-D` match was not
/// in canonical form. Both serialize as a plain string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionDate {
    Normalized(NaiveDate),
    Raw(String),
}

impl TransactionDate {
    pub fn is_normalized(&self) -> bool {
        matches!(self, TransactionDate::Normalized(_))
    }

    pub fn as_naive_date(&self) -> Option<NaiveDate> {
        match self {
            TransactionDate::Normalized(date) => Some(*date),
            TransactionDate::Raw(_) => None,
        }
    }
}

impl fmt::Display for TransactionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionDate::Normalized(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            TransactionDate::Raw(raw) => f.write_str(raw),
        }
    }
}

impl From<&str> for TransactionDate {
    fn from(value: &str) -> Self {
        match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            Ok(date) if value.len() == 10 => TransactionDate::Normalized(date),
            _ => TransactionDate::Raw(value.to_string()),
        }
    }
}

impl Serialize for TransactionDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TransactionDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(|s| TransactionDate::from(s.as_str()))
    }
}

/// One recognized transaction line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// `None` when the line carried no recognizable date.
    pub date: Option<TransactionDate>,
    /// Cleaned description, never empty.
    pub description: String,
    /// First grouped-decimal amount after the date, commas removed.
    pub amount: Option<Decimal>,
    /// The trimmed source line.
    pub original_line: String,
}

impl TransactionRecord {
    /// Keys tried, in order, when looking this record up in the category memory.
    pub fn lookup_keys(&self) -> [&str; 2] {
        [&self.description, &self.original_line]
    }
}

/// A record joined with the category remembered for it, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizedTransaction {
    #[serde(flatten)]
    pub record: TransactionRecord,
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn sample_record() -> TransactionRecord {
        TransactionRecord {
            date: Some(TransactionDate::Normalized(
                NaiveDate::from_ymd_opt(2023, 3, 5).unwrap(),
            )),
            description: "AMAZON".to_string(),
            amount: Some(Decimal::from_str("1250.00").unwrap()),
            original_line: "05/03/2023 DEBIT PURCHASE INR 1,250.00 AMAZON".to_string(),
        }
    }

    #[rstest]
    #[case("2023-03-15", true)]
    #[case("2023-3-15", false)]
    #[case("2023-02-30", false)]
    #[case("31/02/2023", false)]
    fn test_transaction_date_from_str(#[case] input: &str, #[case] normalized: bool) {
        let date = TransactionDate::from(input);
        assert_eq!(date.is_normalized(), normalized);
        assert_eq!(date.to_string(), input);
    }

    #[test]
    fn test_transaction_date_as_naive_date() {
        let date = TransactionDate::from("2023-11-02");
        assert_eq!(date.as_naive_date(), NaiveDate::from_ymd_opt(2023, 11, 2));
        assert_eq!(TransactionDate::Raw("99/99/2023".into()).as_naive_date(), None);
    }

    #[test]
    fn test_record_serializes_date_as_string() {
        let json = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(json["date"], "2023-03-05");
        assert_eq!(json["description"], "AMAZON");
        assert_eq!(
            json["original_line"],
            "05/03/2023 DEBIT PURCHASE INR 1,250.00 AMAZON"
        );
    }

    #[test]
    fn test_record_without_date_serializes_null() {
        let mut record = sample_record();
        record.date = None;
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["date"].is_null());

        let back: TransactionRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back.date, None);
    }

    #[test]
    fn test_raw_date_survives_serialization() {
        let mut record = sample_record();
        record.date = Some(TransactionDate::Raw("45/13/2023".to_string()));
        let json = serde_json::to_string(&record).unwrap();
        let back: TransactionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.date, Some(TransactionDate::Raw("45/13/2023".to_string())));
    }

    #[test]
    fn test_lookup_keys_prefer_description() {
        let record = sample_record();
        assert_eq!(record.lookup_keys()[0], "AMAZON");
        assert_eq!(record.lookup_keys()[1], record.original_line);
    }

    #[test]
    fn test_categorized_transaction_flattens_record() {
        let categorized = CategorizedTransaction {
            record: sample_record(),
            category: Some("Shopping".to_string()),
        };
        let json = serde_json::to_value(&categorized).unwrap();
        assert_eq!(json["description"], "AMAZON");
        assert_eq!(json["category"], "Shopping");
    }
}
