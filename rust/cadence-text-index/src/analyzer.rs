//! Text analysis: normalization, tokenization, stop-word filtering and per-record
//! deduplication.

use ahash::AHashSet;

use crate::{
    stop_words::StopFilter,
    tokenizers::{Tokenizer, TokenizerType, WhitespaceTokenizer},
};

/// Lowercases `text` and drops every character that is neither alphanumeric nor
/// whitespace, so `"Don't Stop!"` becomes `"dont stop"`.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Turns text into index terms.
///
/// Record fields and search keywords go through the same analyzer, so a keyword
/// matches exactly the terms that indexing produced.
pub struct TextAnalyzer {
    tokenizer: TokenizerType,
    stop_filter: StopFilter,
}

impl TextAnalyzer {
    pub fn new(tokenizer: TokenizerType, stop_filter: StopFilter) -> TextAnalyzer {
        TextAnalyzer {
            tokenizer,
            stop_filter,
        }
    }

    pub fn tokenizer(&self) -> &TokenizerType {
        &self.tokenizer
    }

    pub fn stop_filter(&self) -> &StopFilter {
        &self.stop_filter
    }

    /// Appends to `out` every term of `text` that is not a stop word and not
    /// already in `seen`, recording it in `seen`.
    ///
    /// Sharing one `seen` set across the fields of a record makes each term
    /// appear once per record.
    pub fn analyze_into(&self, text: &str, seen: &mut AHashSet<String>, out: &mut Vec<String>) {
        let normalized = normalize(text);
        for term in self.tokenizer.tokenize(&normalized) {
            if self.stop_filter.is_stop_word(term) || seen.contains(term) {
                continue;
            }
            seen.insert(term.to_string());
            out.push(term.to_string());
        }
    }

    /// Distinct, non-stop-word terms of `text` in first-occurrence order.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let mut seen = AHashSet::new();
        let mut out = Vec::new();
        self.analyze_into(text, &mut seen, &mut out);
        out
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        TextAnalyzer::new(
            TokenizerType::Whitespace(WhitespaceTokenizer::new()),
            StopFilter::english(),
        )
    }
}
