//! Keyword inverted index over a corpus of records.
//!
//! Each distinct term gets a sequential word id on first sight. The id selects a
//! posting list, an [`OrderedTree`] of every record containing the term, ordered by
//! the index's record comparator.
//!
//! The index is a derived cache of the corpus. Postings are never patched in place:
//! after the corpus changes the owner calls [`InvertedIndex::mark_stale`], and the
//! index stays stale until [`InvertedIndex::rebuild`] re-indexes the whole corpus.

use ahash::AHashSet;
use cadence_collections::{ChainedMap, Comparator, OrderedTree};
use cadence_common::Result;
use log::{debug, trace, warn};

use crate::{
    analyzer::TextAnalyzer,
    record::TextRecord,
    stop_words::StopFilter,
    tokenizers::{DEFAULT_MAX_TERM_LENGTH, DEFAULT_MIN_TERM_LENGTH, create_tokenizer},
    word_id::WordId,
};

/// Default number of buckets in the word map.
pub const DEFAULT_BUCKET_COUNT: usize = 101;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvertedIndexConfig {
    /// Buckets in the word map. The map never resizes.
    pub bucket_count: usize,
    /// Tokenizer name, see [`create_tokenizer`].
    pub tokenizer: String,
    /// Whether English stop words are dropped.
    pub stop_words: bool,
    pub max_term_length: usize,
    pub min_term_length: usize,
}

impl Default for InvertedIndexConfig {
    fn default() -> Self {
        InvertedIndexConfig {
            bucket_count: DEFAULT_BUCKET_COUNT,
            tokenizer: "whitespace".to_string(),
            stop_words: true,
            max_term_length: DEFAULT_MAX_TERM_LENGTH,
            min_term_length: DEFAULT_MIN_TERM_LENGTH,
        }
    }
}

/// Whether the postings reflect the current corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexState {
    Built,
    /// The corpus changed since the last build; only a rebuild leaves this state.
    Stale,
}

pub struct InvertedIndex<R, C> {
    config: InvertedIndexConfig,
    analyzer: TextAnalyzer,
    comparator: C,
    words: ChainedMap<WordId>,
    postings: Vec<OrderedTree<R>>,
    empty: OrderedTree<R>,
    state: IndexState,
}

impl<R, C> InvertedIndex<R, C>
where
    R: TextRecord + Clone,
    C: Comparator<R>,
{
    /// Creates an empty index with the default configuration.
    pub fn new(comparator: C) -> Result<Self> {
        Self::with_config(InvertedIndexConfig::default(), comparator)
    }

    /// Creates an empty index.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error for a zero bucket count or an unknown
    /// tokenizer name.
    pub fn with_config(config: InvertedIndexConfig, comparator: C) -> Result<Self> {
        let words = ChainedMap::new(config.bucket_count)?;
        let tokenizer = create_tokenizer(
            &config.tokenizer,
            config.max_term_length,
            config.min_term_length,
        )?;
        let stop_filter = if config.stop_words {
            StopFilter::english()
        } else {
            StopFilter::disabled()
        };
        Ok(InvertedIndex {
            analyzer: TextAnalyzer::new(tokenizer, stop_filter),
            config,
            comparator,
            words,
            postings: Vec::new(),
            empty: OrderedTree::new(),
            state: IndexState::Built,
        })
    }

    /// Adds `record` to the posting list of every distinct term in its text fields.
    pub fn index_record(&mut self, record: R) -> Result<()> {
        let mut seen = AHashSet::new();
        let mut terms = Vec::new();
        for field in record.text_fields() {
            self.analyzer.analyze_into(&field, &mut seen, &mut terms);
        }
        for term in &terms {
            let id = self.word_id(term)?;
            self.postings[id].insert(record.clone(), &self.comparator);
        }
        Ok(())
    }

    /// Returns the id of `word`, allocating the next id and an empty posting list
    /// when the word is new.
    pub fn word_id(&mut self, word: &str) -> Result<usize> {
        if let Some(stored) = self.words.get(&WordId::lookup_key(word))? {
            return Ok(stored.id());
        }
        let id = self.postings.len();
        self.words.add(WordId::new(word, id))?;
        self.postings.push(OrderedTree::new());
        trace!("word {word:?} assigned id {id}");
        Ok(id)
    }

    /// Returns the id of an already known `word`.
    pub fn lookup_word(&self, word: &str) -> Option<usize> {
        self.words
            .get(&WordId::lookup_key(word))
            .ok()
            .flatten()
            .map(WordId::id)
    }

    /// Returns the posting list for `keyword`.
    ///
    /// The keyword is analyzed like record text. When that yields no term (empty
    /// input or a stop word), more than one term, or an unknown term, the result is
    /// an empty tree.
    pub fn search(&self, keyword: &str) -> &OrderedTree<R> {
        if self.state == IndexState::Stale {
            warn!("searching stale index for {keyword:?}; results may not match the corpus");
        }
        let terms = self.analyzer.analyze(keyword);
        let [term] = terms.as_slice() else {
            return &self.empty;
        };
        match self.lookup_word(term) {
            Some(id) => &self.postings[id],
            None => &self.empty,
        }
    }

    /// Like [`search`](Self::search) but returns an independent copy of the posting
    /// list, unaffected by later changes to the index.
    pub fn search_snapshot(&self, keyword: &str) -> OrderedTree<R> {
        self.search(keyword).copy_with(&self.comparator)
    }

    /// Discards every word and posting list, then indexes `corpus` from scratch.
    pub fn rebuild(&mut self, corpus: impl IntoIterator<Item = R>) -> Result<()> {
        self.words.clear();
        self.postings.clear();
        let mut records = 0usize;
        for record in corpus {
            self.index_record(record)?;
            records += 1;
        }
        self.state = IndexState::Built;
        debug!(
            "rebuilt inverted index: {records} records, {} words, load factor {:.2}",
            self.postings.len(),
            self.words.load_factor()
        );
        Ok(())
    }

    /// Records that the corpus changed after the last build.
    pub fn mark_stale(&mut self) {
        if self.state == IndexState::Built {
            debug!("inverted index marked stale");
        }
        self.state = IndexState::Stale;
    }

    pub fn state(&self) -> IndexState {
        self.state
    }

    pub fn is_stale(&self) -> bool {
        self.state == IndexState::Stale
    }

    /// Number of distinct words, which is also the next word id.
    pub fn word_count(&self) -> usize {
        self.postings.len()
    }

    pub fn posting_list(&self, id: usize) -> Option<&OrderedTree<R>> {
        self.postings.get(id)
    }

    /// Known words with their ids, in map order.
    pub fn words(&self) -> impl Iterator<Item = &WordId> {
        self.words.iter()
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn config(&self) -> &InvertedIndexConfig {
        &self.config
    }

    pub fn analyzer(&self) -> &TextAnalyzer {
        &self.analyzer
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;

    fn by_text(a: &String, b: &String) -> Ordering {
        a.cmp(b)
    }

    fn index() -> InvertedIndex<String, fn(&String, &String) -> Ordering> {
        InvertedIndex::new(by_text as fn(&String, &String) -> Ordering).unwrap()
    }

    #[test]
    fn test_word_ids_are_sequential() {
        let mut index = index();
        assert_eq!(index.word_id("la").unwrap(), 0);
        assert_eq!(index.word_id("echo").unwrap(), 1);
        assert_eq!(index.word_id("la").unwrap(), 0);
        assert_eq!(index.word_count(), 2);
        assert_eq!(index.lookup_word("echo"), Some(1));
        assert_eq!(index.lookup_word("missing"), None);
        assert!(index.posting_list(1).unwrap().is_empty());
        assert!(index.posting_list(2).is_none());
        assert!(index.word_id("").is_err());
    }

    #[test]
    fn test_multi_term_keyword_is_empty() {
        let mut index = index();
        index.index_record("la la echo".to_string()).unwrap();
        assert_eq!(index.search("echo").size(), 1);
        assert_eq!(index.search("  ECHO! ").size(), 1);
        assert!(index.search("la echo").is_empty());
        assert!(index.search("").is_empty());
        assert!(index.search("the").is_empty());
    }

    #[test]
    fn test_record_posted_once_per_term() {
        let mut index = index();
        index.index_record("echo echo Echo".to_string()).unwrap();
        assert_eq!(index.word_count(), 1);
        assert_eq!(index.search("echo").size(), 1);
    }

    #[test]
    fn test_state_machine() {
        let mut index = index();
        assert_eq!(index.state(), IndexState::Built);
        index.mark_stale();
        assert!(index.is_stale());
        index.index_record("still stale".to_string()).unwrap();
        assert!(index.is_stale());
        index.rebuild(["fresh start".to_string()]).unwrap();
        assert_eq!(index.state(), IndexState::Built);
        assert_eq!(index.word_count(), 2);
        assert!(index.search("still").is_empty());
    }

    #[test]
    fn test_invalid_config() {
        let config = InvertedIndexConfig {
            bucket_count: 0,
            ..Default::default()
        };
        assert!(InvertedIndex::<String, _>::with_config(config, by_text).is_err());

        let config = InvertedIndexConfig {
            tokenizer: "ngram".to_string(),
            ..Default::default()
        };
        assert!(InvertedIndex::<String, _>::with_config(config, by_text).is_err());
    }
}
