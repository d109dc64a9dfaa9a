pub trait Parser {
    type Output;

    /// Parse one page of text. Lines that do not qualify are skipped, not errors.
    fn parse(content: &str) -> Vec<Self::Output>;
}
