//! Fixed-capacity hash map with separate chaining.
//!
//! The map stores whole values: a value is its own key, and equality decides which
//! stored value a lookup resolves to. Types that carry a payload next to their key
//! (for example a word paired with an id) define equality over the key part only,
//! so a lookup with a placeholder payload returns the stored value with the real one.
//!
//! The bucket count is fixed at construction. The map never rehashes, so chains grow
//! with the load factor.

use std::fmt;

use cadence_common::{Result, error::Error, verify_arg};

use crate::bucket_list::BucketList;

/// Hashing contract for values stored in a [`ChainedMap`].
///
/// `hash_code` must agree with `Eq`: equal values return equal hash codes.
pub trait ChainKey: Eq {
    /// Signed 32-bit hash code of the key part of the value.
    fn hash_code(&self) -> i32;

    /// Returns `true` when the value carries no usable key. Absent keys are
    /// rejected by every map operation.
    fn is_absent(&self) -> bool {
        false
    }
}

/// 31-polynomial hash over the UTF-16 code units of `s`, wrapping on overflow.
///
/// Any two maps that bucket text with this function agree on which bucket a string
/// lands in, which keeps bucket layout reproducible across runs.
pub fn text_hash_code(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32))
}

impl ChainKey for String {
    fn hash_code(&self) -> i32 {
        text_hash_code(self)
    }

    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl ChainKey for &str {
    fn hash_code(&self) -> i32 {
        text_hash_code(self)
    }

    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! impl_chain_key_narrow {
    ($($t:ty),*) => {
        $(
            impl ChainKey for $t {
                fn hash_code(&self) -> i32 {
                    *self as i32
                }
            }
        )*
    };
}

macro_rules! impl_chain_key_wide {
    ($($t:ty),*) => {
        $(
            impl ChainKey for $t {
                fn hash_code(&self) -> i32 {
                    let v = *self as u64;
                    (v ^ (v >> 32)) as i32
                }
            }
        )*
    };
}

impl_chain_key_narrow!(u8, u16, u32, i8, i16, i32, char);
impl_chain_key_wide!(u64, i64, usize, isize);

/// Hash map with a fixed number of buckets, each a [`BucketList`].
///
/// `add` appends without a duplicate check, so the map behaves as a multiset when
/// equal values are added more than once; lookups and deletes always act on the
/// first equal value in the chain.
///
/// # Examples
///
/// ```
/// use cadence_collections::ChainedMap;
///
/// let mut map = ChainedMap::new(4).unwrap();
/// map.add("ab".to_string()).unwrap();
/// map.add("cd".to_string()).unwrap();
/// assert_eq!(map.find(&"ab".to_string()).unwrap(), Some(1));
/// assert_eq!(map.count_bucket(1).unwrap(), 2);
/// ```
#[derive(Clone)]
pub struct ChainedMap<T> {
    buckets: Vec<BucketList<T>>,
    len: usize,
}

impl<T: ChainKey> ChainedMap<T> {
    /// Creates an empty map with `bucket_count` buckets.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error when `bucket_count` is zero.
    pub fn new(bucket_count: usize) -> Result<ChainedMap<T>> {
        verify_arg!(bucket_count, bucket_count > 0);
        Ok(ChainedMap {
            buckets: (0..bucket_count).map(|_| BucketList::new()).collect(),
            len: 0,
        })
    }

    /// Creates a map with `bucket_count` buckets holding every value of `values`.
    ///
    /// # Errors
    ///
    /// Fails when `bucket_count` is zero or when any value is absent. Nothing is
    /// returned on failure, so no partially filled map is observable.
    pub fn from_values(
        values: impl IntoIterator<Item = T>,
        bucket_count: usize,
    ) -> Result<ChainedMap<T>> {
        let mut map = ChainedMap::new(bucket_count)?;
        for value in values {
            map.add(value)?;
        }
        Ok(map)
    }

    /// Total number of values across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Average chain length.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Bucket index of `value`: `abs(hash_code) mod bucket_count`.
    pub fn bucket_of(&self, value: &T) -> usize {
        value.hash_code().unsigned_abs() as usize % self.buckets.len()
    }

    /// Appends `value` at the tail of its bucket.
    ///
    /// # Errors
    ///
    /// Returns a null-key error when `value` is absent; the map is unchanged.
    pub fn add(&mut self, value: T) -> Result<()> {
        Self::check_key(&value, "add")?;
        let index = self.bucket_of(&value);
        self.buckets[index].push_back(value);
        self.len += 1;
        Ok(())
    }

    /// Returns the stored value equal to `key`, which may carry a payload `key` lacks.
    ///
    /// # Errors
    ///
    /// Returns a null-key error when `key` is absent.
    pub fn get(&self, key: &T) -> Result<Option<&T>> {
        Self::check_key(key, "get")?;
        if self.len == 0 {
            return Ok(None);
        }
        let bucket = &self.buckets[self.bucket_of(key)];
        Ok(bucket.find_handle(key).and_then(|handle| bucket.get(handle)))
    }

    /// Returns whether a value equal to `key` is stored.
    ///
    /// # Errors
    ///
    /// Returns a null-key error when `key` is absent.
    pub fn contains(&self, key: &T) -> Result<bool> {
        Self::check_key(key, "contains")?;
        Ok(self.find(key)?.is_some())
    }

    /// Returns the bucket index holding a value equal to `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a null-key error when `key` is absent.
    pub fn find(&self, key: &T) -> Result<Option<usize>> {
        Self::check_key(key, "find")?;
        let index = self.bucket_of(key);
        Ok(self.buckets[index].find(key).map(|_| index))
    }

    /// Removes the first stored value equal to `key` and reports whether one was found.
    ///
    /// # Errors
    ///
    /// Returns a null-key error when `key` is absent.
    pub fn delete(&mut self, key: &T) -> Result<bool> {
        Self::check_key(key, "delete")?;
        let index = self.bucket_of(key);
        let bucket = &mut self.buckets[index];
        let Some(handle) = bucket.find_handle(key) else {
            return Ok(false);
        };
        let removed = bucket.remove(handle).is_some();
        if removed {
            self.len -= 1;
        }
        Ok(removed)
    }

    /// Removes every value, keeping the bucket count.
    pub fn clear(&mut self) {
        let bucket_count = self.buckets.len();
        self.buckets = (0..bucket_count).map(|_| BucketList::new()).collect();
        self.len = 0;
    }

    /// Number of values stored in bucket `index`.
    ///
    /// # Errors
    ///
    /// Returns an out-of-bounds error when `index >= bucket_count`.
    pub fn count_bucket(&self, index: usize) -> Result<usize> {
        Ok(self.bucket_at(index, "count_bucket")?.len())
    }

    /// Borrows bucket `index`.
    ///
    /// # Errors
    ///
    /// Returns an out-of-bounds error when `index >= bucket_count`.
    pub fn bucket(&self, index: usize) -> Result<&BucketList<T>> {
        self.bucket_at(index, "bucket")
    }

    /// Iterates over all values, bucket by bucket, each chain front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buckets.iter().flat_map(|bucket| bucket.iter())
    }

    fn bucket_at(&self, index: usize, operation: &str) -> Result<&BucketList<T>> {
        self.buckets
            .get(index)
            .ok_or_else(|| Error::out_of_bounds(operation, index, self.buckets.len()))
    }

    fn check_key(key: &T, operation: &str) -> Result<()> {
        if key.is_absent() {
            Err(Error::null_key(operation))
        } else {
            Ok(())
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ChainedMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (index, bucket) in self.buckets.iter().enumerate() {
            if !bucket.is_empty() {
                map.entry(&index, bucket);
            }
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_common::error::ErrorKind;

    fn key(s: &str) -> String {
        s.to_string()
    }

    #[test]
    fn test_text_hash_code() {
        assert_eq!(text_hash_code(""), 0);
        assert_eq!(text_hash_code("ab"), 3105);
        assert_eq!(text_hash_code("cd"), 3169);
        // Wraps instead of overflowing.
        let long = "z".repeat(64);
        let _ = text_hash_code(&long);
    }

    #[test]
    fn test_colliding_keys_share_a_bucket() {
        let mut map = ChainedMap::new(4).unwrap();
        map.add(key("ab")).unwrap();
        map.add(key("cd")).unwrap();

        assert_eq!(map.count_bucket(1).unwrap(), 2);
        assert_eq!(map.find(&key("ab")).unwrap(), Some(1));
        assert_eq!(map.find(&key("cd")).unwrap(), Some(1));
        assert_eq!(map.len(), 2);

        assert!(map.delete(&key("ab")).unwrap());
        assert!(!map.contains(&key("ab")).unwrap());
        assert!(map.contains(&key("cd")).unwrap());
        assert_eq!(map.len(), 1);
        assert_eq!(map.count_bucket(1).unwrap(), 1);
    }

    #[test]
    fn test_zero_buckets_rejected() {
        let err = ChainedMap::<String>::new(0).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));
    }

    #[test]
    fn test_absent_keys_rejected() {
        let mut map = ChainedMap::new(7).unwrap();
        for err in [
            map.add(key("")).unwrap_err(),
            map.get(&key("")).unwrap_err(),
            map.contains(&key("")).unwrap_err(),
            map.find(&key("")).unwrap_err(),
            map.delete(&key("")).unwrap_err(),
        ] {
            assert!(matches!(err.kind(), ErrorKind::NullKey { .. }));
        }
        assert!(map.is_empty());
    }

    #[test]
    fn test_out_of_bounds_bucket() {
        let map = ChainedMap::<u32>::new(3).unwrap();
        assert_eq!(map.count_bucket(2).unwrap(), 0);
        let err = map.count_bucket(3).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::OutOfBounds { index: 3, len: 3, .. }));
        assert!(map.bucket(10).is_err());
    }

    #[test]
    fn test_multiset_semantics() {
        let mut map = ChainedMap::from_values([5u32, 5, 9], 4).unwrap();
        assert_eq!(map.len(), 3);
        assert!(map.delete(&5).unwrap());
        assert!(map.contains(&5).unwrap());
        assert!(map.delete(&5).unwrap());
        assert!(!map.contains(&5).unwrap());
        assert!(!map.delete(&5).unwrap());
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_negative_hash_codes() {
        let mut map = ChainedMap::new(5).unwrap();
        map.add(-7i32).unwrap();
        map.add(i32::MIN).unwrap();
        assert_eq!(map.find(&-7).unwrap(), Some(2));
        assert!(map.contains(&i32::MIN).unwrap());
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut map = ChainedMap::from_values(0u64..50, 8).unwrap();
        assert_eq!(map.len(), 50);
        assert!((map.load_factor() - 6.25).abs() < f64::EPSILON);
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.bucket_count(), 8);
        assert_eq!(map.iter().count(), 0);
    }

    #[derive(Debug)]
    struct Tagged {
        name: &'static str,
        tag: u32,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.name == other.name
        }
    }

    impl Eq for Tagged {}

    impl ChainKey for Tagged {
        fn hash_code(&self) -> i32 {
            text_hash_code(self.name)
        }
    }

    #[test]
    fn test_get_returns_stored_value() {
        let mut map = ChainedMap::new(11).unwrap();
        map.add(Tagged { name: "x", tag: 1 }).unwrap();
        map.add(Tagged { name: "x", tag: 2 }).unwrap();
        let stored = map.get(&Tagged { name: "x", tag: 0 }).unwrap().unwrap();
        assert_eq!(stored.tag, 1);
        assert!(map.get(&Tagged { name: "y", tag: 0 }).unwrap().is_none());
    }
}
