//! Immutable array collection backed by an insertion-ordered map.
//!
//! This module provides [`ArrayCollection`], the canonical implementation
//! of the [`Collection`] contract. It wraps a single
//! [`IndexMap`] — the insertion-ordered associative primitive — behind a
//! shared pointer and realizes every write-style operation as
//! copy-then-mutate: duplicate the mapping, apply the native ordered-map
//! operation to the copy, wrap the copy in a new instance.
//!
//! # Examples
//!
//! ```rust
//! use pack::collection::{ArrayCollection, Collection};
//!
//! let collection = ArrayCollection::from_values([10, 20, 30]);
//! let spliced = collection.splice(2, Some(1), &[99]);
//!
//! assert_eq!(spliced.values(), vec![10, 20, 99]);
//! assert_eq!(collection.values(), vec![10, 20, 30]); // Original unchanged
//! ```

use super::{Collection, Key, KeyValuePair};
use crate::ReferenceCounter;
use indexmap::IndexMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

// =============================================================================
// ArrayCollection Definition
// =============================================================================

/// An immutable ordered key-value collection.
///
/// `ArrayCollection` wraps one insertion-ordered mapping from [`Key`]s to
/// values. Reads go straight to the wrapped mapping; every write-style
/// operation copies the mapping and returns a new instance, so an
/// `ArrayCollection` observed once never changes. Instances share their
/// backing storage, which makes cloning a collection O(1).
///
/// # Time Complexity
///
/// | Operation            | Complexity   |
/// |----------------------|--------------|
/// | `new`                | O(1)         |
/// | `get` / `exists`     | O(1) average |
/// | `len` / `is_empty`   | O(1)         |
/// | `clone`              | O(1)         |
/// | any write operation  | O(n)         |
///
/// # Immutability
///
/// Write access through indexing is rejected at compile time, because
/// `ArrayCollection` deliberately does not implement `IndexMut`. Only the
/// named copy-producing operations of [`Collection`] exist:
///
/// ```compile_fail
/// use pack::collection::ArrayCollection;
///
/// let collection = ArrayCollection::from_values([1, 2, 3]);
/// collection[0] = 10; // no `IndexMut`: cannot assign through an index
/// ```
///
/// The same holds for compound assignment:
///
/// ```compile_fail
/// use pack::collection::ArrayCollection;
///
/// let collection = ArrayCollection::from_values([1, 2, 3]);
/// collection[0] += 1; // no `IndexMut`
/// ```
///
/// Read access through indexing stays available and panics on an absent
/// key, exactly like the standard library maps.
///
/// # Examples
///
/// ```rust
/// use pack::collection::{ArrayCollection, Collection};
///
/// let collection = ArrayCollection::from_values([1, 2, 3]);
///
/// let updated = collection.set("four", 4);
/// assert_eq!(updated.get("four"), Some(&4));
/// assert_eq!(collection.len(), 3); // Original unchanged
///
/// // Indexed reads work with both key shapes
/// assert_eq!(collection[0], 1);
/// assert_eq!(updated["four"], 4);
/// ```
#[derive(Clone)]
pub struct ArrayCollection<V> {
    /// The wrapped ordered mapping, shared between snapshots.
    entries: ReferenceCounter<IndexMap<Key, V>>,
}

impl<V> ArrayCollection<V> {
    /// Creates a new empty collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pack::collection::{ArrayCollection, Collection};
    ///
    /// let collection: ArrayCollection<i32> = ArrayCollection::new();
    /// assert!(collection.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_entries(IndexMap::new())
    }

    /// Creates a collection containing a single entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pack::collection::{ArrayCollection, Collection};
    ///
    /// let collection = ArrayCollection::singleton("answer", 42);
    /// assert_eq!(collection.get("answer"), Some(&42));
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton<Q: Into<Key>>(key: Q, value: V) -> Self {
        Self::with_entries(IndexMap::from_iter([(key.into(), value)]))
    }

    /// Creates a collection from a sequence of values, keyed by sequential
    /// integer keys starting at 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pack::collection::{ArrayCollection, Collection, Key};
    ///
    /// let collection = ArrayCollection::from_values([10, 20, 30]);
    /// assert_eq!(collection.keys(), vec![Key::Int(0), Key::Int(1), Key::Int(2)]);
    /// assert_eq!(collection.get(1), Some(&20));
    /// ```
    #[must_use]
    pub fn from_values<I: IntoIterator<Item = V>>(values: I) -> Self {
        let entries = (0_i64..)
            .zip(values)
            .map(|(index, value)| (Key::Int(index), value))
            .collect();

        Self::with_entries(entries)
    }

    /// Returns an iterator over the entries in insertion order.
    ///
    /// The iterator is a read-only view; re-calling `iter` starts a fresh
    /// traversal, and no later operation on this instance can invalidate
    /// it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pack::collection::{ArrayCollection, Key};
    ///
    /// let collection = ArrayCollection::from_values([10, 20]);
    /// let entries: Vec<(&Key, &i32)> = collection.iter().collect();
    ///
    /// assert_eq!(entries, vec![(&Key::Int(0), &10), (&Key::Int(1), &20)]);
    /// ```
    #[inline]
    pub fn iter(&self) -> ArrayCollectionIterator<'_, V> {
        ArrayCollectionIterator {
            inner: self.entries.iter(),
        }
    }

    /// Wraps a freshly built mapping in a new instance.
    #[inline]
    fn with_entries(entries: IndexMap<Key, V>) -> Self {
        Self {
            entries: ReferenceCounter::new(entries),
        }
    }
}

// =============================================================================
// Internal Helpers
// =============================================================================

/// Clones a borrowed entry into an owned `(key, value)` pair.
fn clone_entry<V: Clone>((key, value): (&Key, &V)) -> (Key, V) {
    (key.clone(), value.clone())
}

/// Rebuilds a mapping from an entry sequence, assigning sequential integer
/// keys starting at 0 to every integer-keyed entry in encounter order.
///
/// String keys pass through unchanged; on a string-key collision the later
/// value wins while the first occurrence keeps its position (ordered-map
/// insertion semantics). This is the shared renumbering rule behind slice,
/// splice, and merge.
fn renumber<V>(entries: impl IntoIterator<Item = (Key, V)>) -> IndexMap<Key, V> {
    let mut renumbered = IndexMap::new();
    let mut next = 0_i64;

    for (key, value) in entries {
        match key {
            Key::Int(_) => {
                renumbered.insert(Key::Int(next), value);
                next += 1;
            }
            Key::Str(_) => {
                renumbered.insert(key, value);
            }
        }
    }

    renumbered
}

/// Resolves an `(offset, length)` argument pair against an entry count,
/// returning the half-open positional range `start..end`.
///
/// A negative offset counts from the end; `length: None` extends through
/// the end; a negative length stops that many entries before the end. The
/// result is clamped so that `start <= end <= count` always holds.
fn normalized_range(count: usize, offset: i64, length: Option<i64>) -> (usize, usize) {
    let count = i64::try_from(count).unwrap_or(i64::MAX);

    let start = if offset < 0 {
        count.saturating_add(offset).max(0)
    } else {
        offset.min(count)
    };
    let end = match length {
        None => count,
        Some(length) if length < 0 => count.saturating_add(length).max(start),
        Some(length) => start.saturating_add(length).min(count),
    };

    (
        usize::try_from(start).unwrap_or(0),
        usize::try_from(end).unwrap_or(0),
    )
}

// =============================================================================
// Collection Implementation
// =============================================================================

impl<V: Clone> Collection<V> for ArrayCollection<V> {
    type Mapped<W: Clone> = ArrayCollection<W>;

    fn keys(&self) -> Vec<Key> {
        self.entries.keys().cloned().collect()
    }

    fn values(&self) -> Vec<V> {
        self.entries.values().cloned().collect()
    }

    fn to_map(&self) -> IndexMap<Key, V> {
        (*self.entries).clone()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn exists<Q: Into<Key>>(&self, key: Q) -> bool {
        self.entries.contains_key(&key.into())
    }

    fn get<Q: Into<Key>>(&self, key: Q) -> Option<&V> {
        self.entries.get(&key.into())
    }

    fn set<Q: Into<Key>>(&self, key: Q, value: V) -> Self {
        let mut entries = self.to_map();
        entries.insert(key.into(), value);

        Self::with_entries(entries)
    }

    fn unset<Q: Into<Key>>(&self, key: Q) -> Self {
        let mut entries = self.to_map();
        entries.shift_remove(&key.into());

        Self::with_entries(entries)
    }

    fn first(&self) -> Option<KeyValuePair<V>> {
        self.entries
            .first()
            .map(|(key, value)| KeyValuePair::new(key, value.clone()))
    }

    fn last(&self) -> Option<KeyValuePair<V>> {
        self.entries
            .last()
            .map(|(key, value)| KeyValuePair::new(key, value.clone()))
    }

    fn find_by_value(&self, search: &V) -> Option<KeyValuePair<V>>
    where
        V: PartialEq,
    {
        self.find_by_callback(|value, _| value == search)
    }

    fn find_by_callback<F>(&self, mut callback: F) -> Option<KeyValuePair<V>>
    where
        F: FnMut(&V, &Key) -> bool,
    {
        self.entries
            .iter()
            .find(|&(key, value)| callback(value, key))
            .map(|(key, value)| KeyValuePair::new(key, value.clone()))
    }

    fn slice(&self, offset: i64, length: Option<i64>, preserve_keys: bool) -> Self {
        let (start, end) = normalized_range(self.entries.len(), offset, length);
        let window = self
            .entries
            .iter()
            .skip(start)
            .take(end - start)
            .map(clone_entry);

        if preserve_keys {
            Self::with_entries(window.collect())
        } else {
            Self::with_entries(renumber(window))
        }
    }

    fn splice(&self, offset: i64, length: Option<i64>, replacement: &[V]) -> Self {
        let (start, end) = normalized_range(self.entries.len(), offset, length);
        let head = self.entries.iter().take(start).map(clone_entry);
        // Replacement values enter the sequence positionally; renumbering
        // assigns their final integer keys.
        let inserted = replacement.iter().cloned().map(|value| (Key::Int(0), value));
        let tail = self.entries.iter().skip(end).map(clone_entry);

        Self::with_entries(renumber(head.chain(inserted).chain(tail)))
    }

    fn merge<I>(&self, collection: I) -> Self
    where
        I: IntoIterator<Item = (Key, V)>,
    {
        let entries = self.entries.iter().map(clone_entry).chain(collection);

        Self::with_entries(renumber(entries))
    }

    fn map_keys<Q, F>(&self, mut callback: F) -> Self
    where
        Q: Into<Key>,
        F: FnMut(&V, &Key) -> Q,
    {
        let mut entries = IndexMap::with_capacity(self.entries.len());

        for (key, value) in self.entries.iter() {
            entries.insert(callback(value, key).into(), value.clone());
        }

        Self::with_entries(entries)
    }

    fn map_values<W, F>(&self, mut callback: F) -> ArrayCollection<W>
    where
        W: Clone,
        F: FnMut(&V, &Key) -> W,
    {
        let entries = self
            .entries
            .iter()
            .map(|(key, value)| (key.clone(), callback(value, key)))
            .collect();

        ArrayCollection::with_entries(entries)
    }

    fn map_key_value_pairs<W, F>(&self, mut callback: F) -> ArrayCollection<W>
    where
        W: Clone,
        F: FnMut(&V, &Key) -> Option<KeyValuePair<W>>,
    {
        let mut entries = IndexMap::new();

        for (key, value) in self.entries.iter() {
            if let Some(pair) = callback(value, key) {
                entries.insert(pair.key, pair.value);
            }
        }

        ArrayCollection::with_entries(entries)
    }
}

// =============================================================================
// Indexed Read Access
// =============================================================================

/// Read-style indexed access, `collection[key]`.
///
/// Accepts anything convertible into a [`Key`], so both `collection[0]`
/// and `collection["name"]` work.
///
/// # Panics
///
/// Panics if the key is not present in the collection, mirroring the
/// standard library maps. Use [`Collection::get`] or guard with
/// [`Collection::exists`] when the key may be absent.
impl<V, Q: Into<Key>> Index<Q> for ArrayCollection<V> {
    type Output = V;

    fn index(&self, key: Q) -> &V {
        self.entries
            .get(&key.into())
            .expect("no entry found for key")
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// A borrowing iterator over the entries of an [`ArrayCollection`] in
/// insertion order.
pub struct ArrayCollectionIterator<'a, V> {
    inner: indexmap::map::Iter<'a, Key, V>,
}

impl<'a, V> Iterator for ArrayCollectionIterator<'a, V> {
    type Item = (&'a Key, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for ArrayCollectionIterator<'_, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<V> DoubleEndedIterator for ArrayCollectionIterator<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

/// An owning iterator over the entries of an [`ArrayCollection`] in
/// insertion order.
pub struct ArrayCollectionIntoIterator<V> {
    inner: indexmap::map::IntoIter<Key, V>,
}

impl<V> Iterator for ArrayCollectionIntoIterator<V> {
    type Item = (Key, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for ArrayCollectionIntoIterator<V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<V> DoubleEndedIterator for ArrayCollectionIntoIterator<V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'a, V> IntoIterator for &'a ArrayCollection<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = ArrayCollectionIterator<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: Clone> IntoIterator for ArrayCollection<V> {
    type Item = (Key, V);
    type IntoIter = ArrayCollectionIntoIterator<V>;

    fn into_iter(self) -> Self::IntoIter {
        let entries = ReferenceCounter::try_unwrap(self.entries)
            .unwrap_or_else(|shared| (*shared).clone());

        ArrayCollectionIntoIterator {
            inner: entries.into_iter(),
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<V> Default for ArrayCollection<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<IndexMap<Key, V>> for ArrayCollection<V> {
    fn from(entries: IndexMap<Key, V>) -> Self {
        Self::with_entries(entries)
    }
}

impl<V> From<Vec<V>> for ArrayCollection<V> {
    fn from(values: Vec<V>) -> Self {
        Self::from_values(values)
    }
}

impl<V, const N: usize> From<[V; N]> for ArrayCollection<V> {
    fn from(values: [V; N]) -> Self {
        Self::from_values(values)
    }
}

impl<V> FromIterator<(Key, V)> for ArrayCollection<V> {
    fn from_iter<I: IntoIterator<Item = (Key, V)>>(iter: I) -> Self {
        Self::with_entries(iter.into_iter().collect())
    }
}

impl<V> FromIterator<V> for ArrayCollection<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

/// Structural equality: same keys, same order, same values.
///
/// Note that insertion order is part of a collection's identity, so two
/// collections holding equal entries in different orders are not equal.
impl<V: PartialEq> PartialEq for ArrayCollection<V> {
    fn eq(&self, other: &Self) -> bool {
        if ReferenceCounter::ptr_eq(&self.entries, &other.entries) {
            return true;
        }
        if self.entries.len() != other.entries.len() {
            return false;
        }

        self.iter().zip(other.iter()).all(|(left, right)| left == right)
    }
}

impl<V: Eq> Eq for ArrayCollection<V> {}

/// Computes a hash value for this collection.
///
/// The hash covers the length and then each `(key, value)` pair in
/// insertion order, matching the order-sensitive equality: equal
/// collections produce equal hash values.
impl<V: Hash> Hash for ArrayCollection<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.len().hash(state);
        for (key, value) in self.iter() {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for ArrayCollection<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<V: fmt::Display> fmt::Display for ArrayCollection<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Thread Safety
// =============================================================================

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(ArrayCollection<i32>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(ArrayCollection<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
