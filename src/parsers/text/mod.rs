//! Line-oriented parsing of statement text: date matching, transaction line
//! classification and description cleanup.

pub mod classifier;
pub mod date;
pub mod description;
pub mod parser;

pub mod prelude {
    pub use super::classifier::{NumericSignal, is_transaction_line};
    pub use super::date::{DateFormat, DateMatch, match_date};
    pub use super::description::normalize_description;
    pub use super::parser::{TextStatementParser, parse_line, split_lines};
}
