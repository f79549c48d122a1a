//! Unicode Word Tokenizer - extracts runs of alphanumeric characters.

use std::str::CharIndices;

use super::{DEFAULT_MAX_TERM_LENGTH, DEFAULT_MIN_TERM_LENGTH, Tokenizer, TokenizerKind, bounded_term};

/// Extracts "words", the longest runs of alphanumeric characters.
///
/// Unlike the whitespace tokenizer this one also splits on punctuation, which
/// matters when text reaches it without passing through normalization.
pub struct UnicodeWordTokenizer {
    max_term_length: usize,
    min_term_length: usize,
}

impl UnicodeWordTokenizer {
    pub fn with_lengths(max_term_length: usize, min_term_length: usize) -> Self {
        Self {
            max_term_length,
            min_term_length,
        }
    }

    pub fn new() -> Self {
        Self::with_lengths(DEFAULT_MAX_TERM_LENGTH, DEFAULT_MIN_TERM_LENGTH)
    }
}

impl Default for UnicodeWordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

pub struct WordTokenIterator<'a> {
    input: &'a str,
    char_indices: CharIndices<'a>,
    max_term_length: usize,
    min_term_length: usize,
}

impl<'a> WordTokenIterator<'a> {
    pub fn new(input: &'a str, max_term_length: usize, min_term_length: usize) -> Self {
        Self {
            input,
            char_indices: input.char_indices(),
            max_term_length,
            min_term_length,
        }
    }

    /// Byte range of the next alphanumeric run, or `None` at the end of input.
    fn next_run(&mut self) -> Option<(usize, usize)> {
        let mut start = None;
        for (pos, ch) in self.char_indices.by_ref() {
            match (ch.is_alphanumeric(), start) {
                (true, None) => start = Some(pos),
                (false, Some(begin)) => return Some((begin, pos)),
                _ => {}
            }
        }
        start.map(|begin| (begin, self.input.len()))
    }
}

impl<'a> Iterator for WordTokenIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((start, end)) = self.next_run() {
            let word = &self.input[start..end];
            if let Some(term) = bounded_term(word, self.max_term_length, self.min_term_length) {
                return Some(term);
            }
        }
        None
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    type TokenIter<'a> = WordTokenIterator<'a>;

    fn tokenize<'a>(&'a self, input: &'a str) -> Self::TokenIter<'a> {
        WordTokenIterator::new(input, self.max_term_length, self.min_term_length)
    }

    fn kind(&self) -> TokenizerKind {
        TokenizerKind::UnicodeWord
    }

    fn max_term_length(&self) -> usize {
        self.max_term_length
    }

    fn min_term_length(&self) -> usize {
        self.min_term_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(tokenizer: &UnicodeWordTokenizer, text: &str) -> Vec<String> {
        tokenizer.tokenize(text).map(str::to_string).collect()
    }

    #[test]
    fn test_splits_on_punctuation() {
        let tokenizer = UnicodeWordTokenizer::new();
        assert_eq!(
            words(&tokenizer, "Don't stop, believin'!"),
            vec!["Don", "t", "stop", "believin"]
        );
        assert_eq!(words(&tokenizer, "track-07 (live)"), vec!["track", "07", "live"]);
        assert!(words(&tokenizer, "... !!! ---").is_empty());
        assert!(words(&tokenizer, "").is_empty());
    }

    #[test]
    fn test_unicode_runs() {
        let tokenizer = UnicodeWordTokenizer::new();
        assert_eq!(
            words(&tokenizer, "naïve café, Überraschung"),
            vec!["naïve", "café", "Überraschung"]
        );
        assert_eq!(words(&tokenizer, "你好 世界"), vec!["你好", "世界"]);
    }

    #[test]
    fn test_skips_many_short_words() {
        let tokenizer = UnicodeWordTokenizer::with_lengths(128, 3);
        let text = format!("{} chorus", "a ".repeat(50_000));
        assert_eq!(words(&tokenizer, &text), vec!["chorus"]);
    }

    #[test]
    fn test_drops_long_words() {
        let tokenizer = UnicodeWordTokenizer::with_lengths(5, 1);
        assert_eq!(
            words(&tokenizer, "extraordinary day"),
            vec!["day"]
        );
        let tokenizer = UnicodeWordTokenizer::with_lengths(4, 1);
        assert!(words(&tokenizer, "cafés").is_empty());
    }
}
