//! Input tokenization.
//!
//! Splits a raw line on whitespace. Tokens keep their original case so that
//! stopword removal can compare them exactly; lower-casing happens during
//! term resolution.

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Splits a raw input line into whitespace-separated tokens.
    ///
    /// Line terminators (`\r`, `\n`) count as whitespace, so a line read
    /// straight off a connection can be passed in unchanged.
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<&str> {
        input.split_whitespace().collect()
    }

    /// Tokenizes and drops every token equal to one of `stopwords`.
    ///
    /// The comparison is case-sensitive: `"At"` survives when the stopword
    /// list holds `"at"`.
    #[must_use]
    pub fn tokenize_without<'a, S: AsRef<str>>(input: &'a str, stopwords: &[S]) -> Vec<&'a str> {
        input
            .split_whitespace()
            .filter(|token| !stopwords.iter().any(|stop| stop.as_ref() == *token))
            .collect()
    }
}
