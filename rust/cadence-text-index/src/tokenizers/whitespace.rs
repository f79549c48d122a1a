//! Whitespace Tokenizer - splits text on runs of whitespace.

use std::str::SplitWhitespace;

use super::{DEFAULT_MAX_TERM_LENGTH, DEFAULT_MIN_TERM_LENGTH, Tokenizer, TokenizerKind, bounded_term};

/// Splits input on runs of Unicode whitespace. Empty pieces never appear.
pub struct WhitespaceTokenizer {
    max_term_length: usize,
    min_term_length: usize,
}

impl WhitespaceTokenizer {
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

impl Default for WhitespaceTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

pub struct WhitespaceTokenIterator<'a> {
    pieces: SplitWhitespace<'a>,
    max_term_length: usize,
    min_term_length: usize,
}

impl<'a> Iterator for WhitespaceTokenIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let (max, min) = (self.max_term_length, self.min_term_length);
        self.pieces.find_map(|piece| bounded_term(piece, max, min))
    }
}

impl Tokenizer for WhitespaceTokenizer {
    type TokenIter<'a> = WhitespaceTokenIterator<'a>;

    fn tokenize<'a>(&'a self, input: &'a str) -> Self::TokenIter<'a> {
        WhitespaceTokenIterator {
            pieces: input.split_whitespace(),
            max_term_length: self.max_term_length,
            min_term_length: self.min_term_length,
        }
    }

    fn kind(&self) -> TokenizerKind {
        TokenizerKind::Whitespace
    }

    fn max_term_length(&self) -> usize {
        self.max_term_length
    }

    fn min_term_length(&self) -> usize {
        self.min_term_length
    }
}
