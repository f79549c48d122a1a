//! Stop-word filtering.

/// Common English words excluded from indexing and search.
///
/// Kept in byte-wise ascending order; lookups binary search it.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "did", "do", "does", "doing", "down", "during", "each",
    "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here",
    "hers", "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it",
    "its", "itself", "just", "me", "more", "most", "my", "myself", "no", "nor", "not",
    "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves",
    "out", "over", "own", "same", "she", "should", "so", "some", "such", "than", "that",
    "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they",
    "this", "those", "through", "to", "too", "under", "until", "up", "very", "was", "we",
    "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with",
    "you", "your", "yours", "yourself", "yourselves",
];

/// Rejects tokens found in a sorted stop-word list.
#[derive(Debug, Clone, Copy)]
pub struct StopFilter {
    words: &'static [&'static str],
}

impl StopFilter {
    pub fn english() -> StopFilter {
        StopFilter {
            words: ENGLISH_STOP_WORDS,
        }
    }

    /// A filter that lets every token through.
    pub fn disabled() -> StopFilter {
        StopFilter { words: &[] }
    }

    pub fn is_enabled(&self) -> bool {
        !self.words.is_empty()
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.words.binary_search(&token).is_ok()
    }

    pub fn words(&self) -> &'static [&'static str] {
        self.words
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        StopFilter::english()
    }
}
