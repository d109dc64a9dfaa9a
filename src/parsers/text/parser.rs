use std::str::FromStr;

use log::trace;
use rust_decimal::Decimal;

use super::classifier::{grouped_amount_re, is_transaction_line};
use super::date::match_date;
use super::description::normalize_description;
use crate::parsers::traits::Parser;
use crate::types::TransactionRecord;

pub struct TextStatementParser;

impl Parser for TextStatementParser {
    type Output = TransactionRecord;

    fn parse(content: &str) -> Vec<Self::Output> {
        split_lines(content).filter_map(parse_line).collect()
    }
}

/// Non-blank trimmed lines of a page. `\r\n`, `\n` and `\r` all end a line.
pub fn split_lines(page: &str) -> impl Iterator<Item = &str> {
    page.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// Build a record from one trimmed line, or `None` if it is not a transaction.
pub fn parse_line(line: &str) -> Option<TransactionRecord> {
    if !is_transaction_line(line) {
        trace!("skipping non-transaction line: {line}");
        return None;
    }

    let found = match_date(line);
    let date_end = found.as_ref().map(|m| m.end);
    let rest = date_end.and_then(|end| line.get(end..)).unwrap_or(line);

    Some(TransactionRecord {
        date: found.map(|m| m.date),
        description: normalize_description(line, date_end),
        amount: first_amount(rest),
        original_line: line.to_string(),
    })
}

fn first_amount(text: &str) -> Option<Decimal> {
    let found = grouped_amount_re().find(text)?;
    Decimal::from_str(&found.as_str().replace(',', "")).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EMPTY_DESCRIPTION, TransactionDate};
    use chrono::NaiveDate;
    use rstest::rstest;

    const SAMPLE_PAGE: &str = "HDFC BANK LTD\r\n\
Statement of account\r\n\
\r\n\
05/03/2023 DEBIT PURCHASE INR 1,250.00 AMAZON\r\n\
15 Mar 2023 UPI CREDIT FROM RAHUL 2,000.00\n\
   \n\
2023-11-02 NEFT TRANSFER TO JOHN DOE 500\r\
Closing balance 10,250.00\n";

    #[test]
    fn test_parse_sample_page() {
        let records = TextStatementParser::parse(SAMPLE_PAGE);
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].date.as_ref().unwrap().to_string(), "2023-03-05");
        assert_eq!(records[0].description, "AMAZON");
        assert_eq!(records[0].amount, Some(Decimal::from_str("1250.00").unwrap()));

        assert_eq!(
            records[1].date,
            Some(TransactionDate::Normalized(
                NaiveDate::from_ymd_opt(2023, 3, 15).unwrap()
            ))
        );
        assert_eq!(records[1].description, "UPI FROM RAHUL");

        assert_eq!(records[2].date.as_ref().unwrap().to_string(), "2023-11-02");
        assert!(records[2].description.contains("TO JOHN DOE"));
        assert_eq!(records[2].amount, None);
        assert_eq!(records[2].original_line, "2023-11-02 NEFT TRANSFER TO JOHN DOE 500");
    }

    #[test]
    fn test_line_terminators_are_equivalent() {
        let lf = "DEBIT A 1.00\nDEBIT B 2.00\nDEBIT C 3.00";
        let crlf = "DEBIT A 1.00\r\nDEBIT B 2.00\r\nDEBIT C 3.00";
        let cr = "DEBIT A 1.00\rDEBIT B 2.00\rDEBIT C 3.00";

        let expected: Vec<_> = split_lines(lf).collect();
        assert_eq!(expected, vec!["DEBIT A 1.00", "DEBIT B 2.00", "DEBIT C 3.00"]);
        assert_eq!(split_lines(crlf).collect::<Vec<_>>(), expected);
        assert_eq!(split_lines(cr).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_parse_line_without_date() {
        let record = parse_line("ATM WITHDRAWAL MG ROAD 2,000.00").unwrap();
        assert_eq!(record.date, None);
        assert_eq!(record.description, "ATM MG ROAD");
        assert_eq!(record.amount, Some(Decimal::from_str("2000.00").unwrap()));
    }

    #[test]
    fn test_parse_line_keeps_raw_date() {
        let record = parse_line("31/31/2023 DEBIT GYM 999.00").unwrap();
        assert_eq!(record.date, Some(TransactionDate::Raw("31/31/2023".to_string())));
        assert_eq!(record.description, "GYM");
    }

    #[test]
    fn test_parse_line_placeholder_description() {
        let record = parse_line("05/03/2023 DEBIT 1,250.00").unwrap();
        assert_eq!(record.description, EMPTY_DESCRIPTION);
    }

    #[rstest]
    #[case("Opening balance 1,000.00")]
    #[case("DEBIT CARD SERVICES")]
    #[case("")]
    fn test_parse_line_rejects(#[case] line: &str) {
        assert!(parse_line(line).is_none());
    }
}
