//! Tokenizers splitting normalized text into terms.
//!
//! Tokenizers run after [`normalize`](crate::analyzer::normalize), so they see lowercase
//! text made of alphanumeric characters and whitespace only. The same tokenizer is
//! used for record text during indexing and for keywords during search, which keeps
//! both sides producing identical terms.
//!
//! Tokenizers return iterators of string slices borrowed from their input.

pub mod unicode_word;
pub mod whitespace;

use cadence_common::{Result, error::Error};
pub use unicode_word::UnicodeWordTokenizer;
pub use whitespace::WhitespaceTokenizer;

/// Default maximum length of a single term in bytes
pub const DEFAULT_MAX_TERM_LENGTH: usize = 128;

/// Default minimum length of a single term in bytes
pub const DEFAULT_MIN_TERM_LENGTH: usize = 1;

/// A tokenizer extracts terms from a string.
///
/// Terms outside the length limits are dropped, never shortened, so every emitted
/// term is a whole word of the input and lookups stay exact.
pub trait Tokenizer {
    /// The iterator type returned by tokenize.
    type TokenIter<'a>: Iterator<Item = &'a str>
    where
        Self: 'a;

    /// Extract terms from the input string as an iterator of string slices.
    fn tokenize<'a>(&'a self, input: &'a str) -> Self::TokenIter<'a>;

    /// Get the kind of the tokenizer.
    fn kind(&self) -> TokenizerKind;

    /// Get the name of the tokenizer kind as a static string.
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Maximum length of a single term in bytes; longer terms are dropped.
    fn max_term_length(&self) -> usize;

    /// Minimum length of a single term in bytes; shorter terms are dropped.
    fn min_term_length(&self) -> usize;
}

/// Creates a tokenizer by name with the given term length limits.
///
/// # Errors
/// Returns an [`Error::invalid_arg`] if the provided tokenizer name is not recognized.
pub fn create_tokenizer(
    name: &str,
    max_term_length: usize,
    min_term_length: usize,
) -> Result<TokenizerType> {
    match name.try_into()? {
        TokenizerKind::Whitespace => Ok(TokenizerType::Whitespace(
            WhitespaceTokenizer::with_lengths(max_term_length, min_term_length),
        )),
        TokenizerKind::UnicodeWord => Ok(TokenizerType::UnicodeWord(
            UnicodeWordTokenizer::with_lengths(max_term_length, min_term_length),
        )),
    }
}

/// Applies the length limits to a raw term: `None` when it is empty or falls
/// outside `min_term_length..=max_term_length`.
pub(crate) fn bounded_term(term: &str, max_term_length: usize, min_term_length: usize) -> Option<&str> {
    let len = term.len();
    (len > 0 && len >= min_term_length && len <= max_term_length).then_some(term)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerKind {
    /// Splits on runs of whitespace.
    Whitespace,
    /// Extracts the longest runs of alphanumeric characters.
    UnicodeWord,
}

impl TryFrom<&str> for TokenizerKind {
    type Error = cadence_common::error::Error;

    fn try_from(name: &str) -> Result<Self> {
        match name {
            "whitespace" => Ok(TokenizerKind::Whitespace),
            "unicode-word" => Ok(TokenizerKind::UnicodeWord),
            _ => Err(Error::invalid_arg(
                "name",
                format!("Unrecognized tokenizer: {name}"),
            )),
        }
    }
}

impl TokenizerKind {
    pub const fn name(&self) -> &'static str {
        match self {
            TokenizerKind::Whitespace => "whitespace",
            TokenizerKind::UnicodeWord => "unicode-word",
        }
    }
}

/// Enum that holds all available tokenizer types.
pub enum TokenizerType {
    Whitespace(WhitespaceTokenizer),
    UnicodeWord(UnicodeWordTokenizer),
}

impl Tokenizer for TokenizerType {
    type TokenIter<'a> = Box<dyn Iterator<Item = &'a str> + 'a>;

    fn tokenize<'a>(&'a self, input: &'a str) -> Self::TokenIter<'a> {
        match self {
            TokenizerType::Whitespace(tokenizer) => Box::new(tokenizer.tokenize(input)),
            TokenizerType::UnicodeWord(tokenizer) => Box::new(tokenizer.tokenize(input)),
        }
    }

    fn kind(&self) -> TokenizerKind {
        match self {
            TokenizerType::Whitespace(tokenizer) => tokenizer.kind(),
            TokenizerType::UnicodeWord(tokenizer) => tokenizer.kind(),
        }
    }

    fn max_term_length(&self) -> usize {
        match self {
            TokenizerType::Whitespace(tokenizer) => tokenizer.max_term_length(),
            TokenizerType::UnicodeWord(tokenizer) => tokenizer.max_term_length(),
        }
    }

    fn min_term_length(&self) -> usize {
        match self {
            TokenizerType::Whitespace(tokenizer) => tokenizer.min_term_length(),
            TokenizerType::UnicodeWord(tokenizer) => tokenizer.min_term_length(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tokenizer() {
        let whitespace = create_tokenizer("whitespace", 128, 1).unwrap();
        assert_eq!(whitespace.name(), "whitespace");
        let word = create_tokenizer("unicode-word", 16, 2).unwrap();
        assert_eq!(word.name(), "unicode-word");
        assert_eq!(word.max_term_length(), 16);
        assert_eq!(word.min_term_length(), 2);
        assert!(create_tokenizer("unknown", 128, 1).is_err());
    }

    #[test]
    fn test_dispatch_through_enum() {
        let tokenizer = create_tokenizer("whitespace", 128, 1).unwrap();
        let terms: Vec<&str> = tokenizer.tokenize("la  la\techo").collect();
        assert_eq!(terms, vec!["la", "la", "echo"]);
    }

    #[test]
    fn test_bounded_term() {
        assert_eq!(bounded_term("", 10, 1), None);
        assert_eq!(bounded_term("ab", 10, 3), None);
        assert_eq!(bounded_term("abcd", 4, 1), Some("abcd"));
        assert_eq!(bounded_term("abcdef", 4, 1), None);
        // Multi-byte characters count by their encoded length.
        assert_eq!(bounded_term("café", 4, 1), None);
        assert_eq!(bounded_term(&"x".repeat(129), DEFAULT_MAX_TERM_LENGTH, 1), None);
    }
}
