//! Hash map with a fixed bucket array and linear chaining.
//!
//! This module provides [`AssociativeMap`], a key/value store that hashes
//! each key into one of `B` buckets and keeps colliding pairs in that
//! bucket's vector. It is used to group records by a derived key, such as
//! tag to questions, or to count occurrences.
//!
//! The bucket count is fixed when the map is created; the map never
//! rehashes. Lookups are O(1) on average and O(bucket size) in the worst
//! case.
//!
//! # Hashing
//!
//! Equal keys always hash to the same bucket within one process. The
//! default hasher is selected by feature flags:
//!
//! - default: `std`'s `DefaultHasher` with its fixed keys
//! - `fxhash`: `rustc_hash::FxBuildHasher`
//! - `ahash`: `ahash::RandomState` (seeded once per map)
//!
//! No cross-process stability is promised.
//!
//! # Examples
//!
//! ```rust
//! use auxindex::collections::AssociativeMap;
//!
//! let mut map = AssociativeMap::new();
//! assert_eq!(map.insert("rust".to_string(), 1), None);
//! assert_eq!(map.insert("rust".to_string(), 2), Some(1));
//! assert_eq!(map.len(), 1);
//! assert_eq!(map.get("rust"), Some(&2));
//!
//! assert_eq!(map.remove("rust"), Some(2));
//! assert!(!map.contains_key("rust"));
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

/// Number of buckets used by [`AssociativeMap::new`].
pub const DEFAULT_BUCKET_COUNT: usize = 16;

/// The hasher builder used when none is given explicitly.
#[cfg(feature = "fxhash")]
pub type DefaultBuildHasher = rustc_hash::FxBuildHasher;

/// The hasher builder used when none is given explicitly.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultBuildHasher = ahash::RandomState;

/// The hasher builder used when none is given explicitly.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultBuildHasher =
    std::hash::BuildHasherDefault<std::collections::hash_map::DefaultHasher>;

type Bucket<K, V> = Vec<(K, V)>;

/// A hash map backed by a fixed array of chained buckets.
///
/// Every stored pair is reachable by hashing its key modulo the bucket
/// count and scanning that bucket.
///
/// # Type Parameters
///
/// * `K` - The key type. Lookups need `Hash + Eq`.
/// * `V` - The value type.
/// * `S` - The hasher builder. Defaults to [`DefaultBuildHasher`].
///
/// # Examples
///
/// ```rust
/// use auxindex::collections::AssociativeMap;
///
/// let mut by_tag: AssociativeMap<&str, Vec<u32>> = AssociativeMap::with_buckets(4);
/// by_tag.entry_or_insert_with("rust", Vec::new).push(1);
/// by_tag.entry_or_insert_with("rust", Vec::new).push(7);
/// by_tag.entry_or_insert_with("web", Vec::new).push(3);
///
/// assert_eq!(by_tag.get("rust"), Some(&vec![1, 7]));
/// assert_eq!(by_tag.len(), 2);
/// ```
#[derive(Clone)]
pub struct AssociativeMap<K, V, S = DefaultBuildHasher> {
    buckets: Vec<Bucket<K, V>>,
    length: usize,
    hash_builder: S,
}

impl<K, V> AssociativeMap<K, V> {
    /// Creates an empty map with [`DEFAULT_BUCKET_COUNT`] buckets.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKET_COUNT)
    }

    /// Creates an empty map with `bucket_count` buckets.
    ///
    /// A bucket count of zero is raised to one.
    #[must_use]
    pub fn with_buckets(bucket_count: usize) -> Self {
        Self::with_buckets_and_hasher(bucket_count, DefaultBuildHasher::default())
    }
}

impl<K, V, S> AssociativeMap<K, V, S> {
    /// Creates an empty map with `bucket_count` buckets and the given hasher.
    ///
    /// A bucket count of zero is raised to one.
    #[must_use]
    pub fn with_buckets_and_hasher(bucket_count: usize, hash_builder: S) -> Self {
        let mut buckets = Vec::with_capacity(bucket_count.max(1));
        buckets.resize_with(bucket_count.max(1), Vec::new);
        Self {
            buckets,
            length: 0,
            hash_builder,
        }
    }

    /// Returns the number of stored pairs.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map holds no pairs.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of buckets.
    #[inline]
    #[must_use]
    pub const fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Removes every pair, keeping the bucket array.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.length = 0;
    }

    /// Iterates over `(key, value)` pairs in bucket-traversal order.
    ///
    /// The iterator borrows the map, so it always reflects the map as it is
    /// when the iterator is created.
    #[must_use]
    pub fn iter(&self) -> AssociativeMapIterator<'_, K, V> {
        AssociativeMapIterator {
            buckets: self.buckets.iter(),
            current: std::slice::Iter::default(),
            remaining: self.length,
        }
    }

    /// Iterates over the keys in bucket-traversal order.
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Iterates over the values in bucket-traversal order.
    #[must_use]
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<K, V, S> AssociativeMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    // The remainder is below the bucket count, so it always fits in usize.
    #[allow(clippy::cast_possible_truncation)]
    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        (hash % self.buckets.len() as u64) as usize
    }

    /// Stores `value` under `key`.
    ///
    /// If an equal key is already present its value is replaced and the old
    /// value is returned; otherwise the pair is appended to its bucket.
    ///
    /// # Complexity
    ///
    /// O(1) average, O(bucket size) worst case.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];
        if let Some((_, existing)) = bucket.iter_mut().find(|(stored, _)| *stored == key) {
            return Some(std::mem::replace(existing, value));
        }
        bucket.push((key, value));
        self.length += 1;
        None
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use auxindex::collections::AssociativeMap;
    ///
    /// let map: AssociativeMap<String, i32> = [("a".to_string(), 1)].into_iter().collect();
    /// assert_eq!(map.get("a"), Some(&1));
    /// assert_eq!(map.get("b"), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter()
            .find(|(stored, _)| stored.borrow() == key)
            .map(|(_, value)| value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|(stored, _)| stored.borrow() == key)
            .map(|(_, value)| value)
    }

    /// Returns `true` if a pair with an equal key is stored.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes the pair stored under `key` and returns its value.
    ///
    /// `None` means no pair was found.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];
        let position = bucket.iter().position(|(stored, _)| stored.borrow() == key)?;
        self.length -= 1;
        Some(bucket.remove(position).1)
    }

    /// Returns the value under `key`, inserting `default()` first if absent.
    ///
    /// This is the get-or-create step used when grouping records by key.
    pub fn entry_or_insert_with<D>(&mut self, key: K, default: D) -> &mut V
    where
        D: FnOnce() -> V,
    {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];
        let position = bucket
            .iter()
            .position(|(stored, _)| *stored == key)
            .unwrap_or_else(|| {
                bucket.push((key, default()));
                self.length += 1;
                bucket.len() - 1
            });
        &mut bucket[position].1
    }
}

impl<K, V, S: Default> Default for AssociativeMap<K, V, S> {
    fn default() -> Self {
        Self::with_buckets_and_hasher(DEFAULT_BUCKET_COUNT, S::default())
    }
}

impl<K, V, S> FromIterator<(K, V)> for AssociativeMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, S> Extend<(K, V)> for AssociativeMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a AssociativeMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = AssociativeMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for AssociativeMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over the pairs of an [`AssociativeMap`] in bucket order.
pub struct AssociativeMapIterator<'a, K, V> {
    buckets: std::slice::Iter<'a, Bucket<K, V>>,
    current: std::slice::Iter<'a, (K, V)>,
    remaining: usize,
}

impl<'a, K, V> Iterator for AssociativeMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, value)) = self.current.next() {
                self.remaining -= 1;
                return Some((key, value));
            }
            self.current = self.buckets.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for AssociativeMapIterator<'_, K, V> {}

impl<K, V> FusedIterator for AssociativeMapIterator<'_, K, V> {}

/// Iterator over the keys of an [`AssociativeMap`].
pub struct Keys<'a, K, V> {
    inner: AssociativeMapIterator<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// Iterator over the values of an [`AssociativeMap`].
pub struct Values<'a, K, V> {
    inner: AssociativeMapIterator<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

// =============================================================================
// Tests
// =============================================================================
