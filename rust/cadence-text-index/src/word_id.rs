use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use cadence_collections::{ChainKey, chained_map::text_hash_code};

/// A term paired with the slot id of its posting list.
///
/// Identity is the word alone: equality, hashing and ordering ignore `id`, so a
/// [`WordId::lookup_key`] carrying no real id finds the stored mapping in a map.
#[derive(Clone)]
pub struct WordId {
    word: String,
    id: usize,
}

impl WordId {
    pub fn new(word: impl Into<String>, id: usize) -> WordId {
        WordId {
            word: word.into(),
            id,
        }
    }

    /// A lookup key for `word` with a placeholder id.
    pub fn lookup_key(word: impl Into<String>) -> WordId {
        WordId::new(word, usize::MAX)
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn id(&self) -> usize {
        self.id
    }
}

impl PartialEq for WordId {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
    }
}

impl Eq for WordId {}

impl Hash for WordId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.word.hash(state);
    }
}

impl PartialOrd for WordId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WordId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.word.cmp(&other.word)
    }
}

impl ChainKey for WordId {
    fn hash_code(&self) -> i32 {
        text_hash_code(&self.word)
    }

    fn is_absent(&self) -> bool {
        self.word.is_empty()
    }
}

impl fmt::Debug for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.word, self.id)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use cadence_collections::ChainedMap;

    use super::*;

    #[test]
    fn test_identity_ignores_id() {
        assert_eq!(WordId::new("echo", 3), WordId::lookup_key("echo"));
        assert_ne!(WordId::new("echo", 3), WordId::new("la", 3));
        assert_eq!(WordId::new("la", 9).cmp(&WordId::new("la", 0)), Ordering::Equal);
        assert_eq!(WordId::new("echo", 0).hash_code(), "echo".hash_code());

        let set: HashSet<WordId> = [WordId::new("la", 0), WordId::new("la", 1)].into();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_map_returns_stored_id() {
        let mut map = ChainedMap::new(7).unwrap();
        map.add(WordId::new("nonsense", 0)).unwrap();
        map.add(WordId::new("echo", 1)).unwrap();
        let stored = map.get(&WordId::lookup_key("echo")).unwrap().unwrap();
        assert_eq!(stored.id(), 1);
        assert!(map.get(&WordId::lookup_key("la")).unwrap().is_none());
        assert!(map.get(&WordId::lookup_key("")).unwrap_err().to_string().contains("get"));
    }
}
