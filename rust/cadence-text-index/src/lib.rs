//! Keyword search over in-memory records.
//!
//! Text is normalized, split by a [`Tokenizer`](tokenizers::Tokenizer), filtered by a
//! [`StopFilter`] and deduplicated per record before it reaches the
//! [`InvertedIndex`], which maps each term to an ordered posting list of records.

pub mod analyzer;
pub mod collation;
pub mod inverted_index;
pub mod record;
pub mod stop_words;
pub mod tokenizers;
pub mod word_id;

pub use analyzer::{TextAnalyzer, normalize};
pub use collation::{Collation, create_collation};
pub use inverted_index::{IndexState, InvertedIndex, InvertedIndexConfig};
pub use record::TextRecord;
pub use stop_words::StopFilter;
pub use word_id::WordId;
