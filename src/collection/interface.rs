//! The collection capability contract.

use super::{Key, KeyValuePair};
use indexmap::IndexMap;

/// The capability contract any collection type must support: read access,
/// indexed lookup, counting, and copy-producing "mutation" operations.
///
/// Implementations are value-semantic: none of the operations below may
/// mutate the receiver. Every write-style operation returns a new instance
/// and leaves the original untouched.
///
/// [`ArrayCollection`](super::ArrayCollection) is the canonical
/// implementation; its documentation carries worked examples for every
/// operation.
pub trait Collection<V: Clone>: Sized {
    /// The same collection shape over a transformed value type, produced by
    /// the type-changing mapping operations.
    type Mapped<W: Clone>: Collection<W>;

    // region Getters

    /// Returns the ordered list of keys as a snapshot copy.
    ///
    /// Mutating the returned list never affects the collection.
    #[must_use]
    fn keys(&self) -> Vec<Key>;

    /// Returns the ordered list of values as a snapshot copy.
    ///
    /// Mutating the returned list never affects the collection.
    #[must_use]
    fn values(&self) -> Vec<V>;

    /// Returns the full ordered mapping as a snapshot copy.
    ///
    /// Mutating the returned mapping never affects the collection.
    #[must_use]
    fn to_map(&self) -> IndexMap<Key, V>;

    /// Returns the number of entries.
    #[must_use]
    fn len(&self) -> usize;

    /// Returns `true` if the collection contains no entries.
    #[inline]
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // endregion
    // region Base methods

    /// Returns `true` if the collection contains the key.
    #[must_use]
    fn exists<Q: Into<Key>>(&self, key: Q) -> bool;

    /// Returns a reference to the value stored under the key, or `None` if
    /// the key is absent.
    ///
    /// Callers that cannot tolerate absence should guard with
    /// [`exists`](Collection::exists) first, or use indexed access, which
    /// panics on an absent key the way the standard library maps do.
    #[must_use]
    fn get<Q: Into<Key>>(&self, key: Q) -> Option<&V>;

    /// Returns a new collection with the value stored under the key.
    ///
    /// Overwriting an existing key keeps its position; a new key is
    /// appended. The original collection is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pack::collection::{ArrayCollection, Collection};
    ///
    /// let collection = ArrayCollection::from_values([1, 2, 3]);
    /// let updated = collection.set(3, 4);
    ///
    /// assert_eq!(updated.get(3), Some(&4));
    /// assert_eq!(collection.len(), 3); // Original unchanged
    /// ```
    #[must_use]
    fn set<Q: Into<Key>>(&self, key: Q, value: V) -> Self;

    /// Returns a new collection with the key removed.
    ///
    /// All other entries are unchanged and keep their order and keys.
    /// Removing an absent key returns an equal collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pack::collection::{ArrayCollection, Collection};
    ///
    /// let collection = ArrayCollection::from_values([1, 2, 3]);
    ///
    /// assert_eq!(collection.unset(2).len(), 2);
    /// assert_eq!(collection.len(), 3); // Original unchanged
    /// ```
    #[must_use]
    fn unset<Q: Into<Key>>(&self, key: Q) -> Self;

    /// Returns the first entry, or `None` if the collection is empty.
    #[must_use]
    fn first(&self) -> Option<KeyValuePair<V>>;

    /// Returns the last entry, or `None` if the collection is empty.
    #[must_use]
    fn last(&self) -> Option<KeyValuePair<V>>;

    /// Returns the first entry, in iteration order, whose value equals
    /// `search`, or `None` if no value matches.
    ///
    /// Matching uses structural equality (`==`), never any coercion.
    #[must_use]
    fn find_by_value(&self, search: &V) -> Option<KeyValuePair<V>>
    where
        V: PartialEq;

    /// Returns the first entry, in iteration order, for which the callback
    /// returns `true`, or `None` if none matches.
    ///
    /// The callback receives the value and the key of each entry.
    #[must_use]
    fn find_by_callback<F>(&self, callback: F) -> Option<KeyValuePair<V>>
    where
        F: FnMut(&V, &Key) -> bool;

    // endregion
    // region Collection "modification" methods

    /// Returns a new collection holding a contiguous sub-range of the
    /// ordered entries.
    ///
    /// A negative `offset` counts from the end; an offset past the end
    /// yields an empty collection. `length: None` extends the range through
    /// the end, and a negative length stops that many entries before the
    /// end. When `preserve_keys` is `false`, integer keys in the result are
    /// renumbered sequentially from 0; string keys are always kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pack::collection::{ArrayCollection, Collection, Key};
    ///
    /// let collection = ArrayCollection::from_values([10, 20, 30]);
    ///
    /// let preserved = collection.slice(1, None, true);
    /// assert_eq!(preserved.keys(), vec![Key::Int(1), Key::Int(2)]);
    ///
    /// let renumbered = collection.slice(0, Some(2), false);
    /// assert_eq!(renumbered.keys(), vec![Key::Int(0), Key::Int(1)]);
    /// assert_eq!(renumbered.values(), vec![10, 20]);
    /// ```
    #[must_use]
    fn slice(&self, offset: i64, length: Option<i64>, preserve_keys: bool) -> Self;

    /// Returns a new collection with a range of entries removed and the
    /// replacement values spliced in at that position.
    ///
    /// Offset and length follow the same rules as
    /// [`slice`](Collection::slice); `length: None` removes through the
    /// end. Integer keys in the result are renumbered sequentially from 0;
    /// string keys are kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pack::collection::{ArrayCollection, Collection};
    ///
    /// let collection = ArrayCollection::from_values([10, 20, 30]);
    ///
    /// assert_eq!(collection.splice(0, Some(1), &[]).values(), vec![20, 30]);
    /// assert_eq!(collection.splice(2, Some(1), &[99]).values(), vec![10, 20, 99]);
    /// ```
    #[must_use]
    fn splice(&self, offset: i64, length: Option<i64>, replacement: &[V]) -> Self;

    /// Returns a new collection produced by overlaying another collection's
    /// entries onto this collection's entries.
    ///
    /// The result holds this collection's entries followed by the other's.
    /// Every integer-keyed entry is renumbered sequentially from 0 in
    /// result order, so integer-keyed values never collide and are simply
    /// appended. A colliding string key overwrites the value while keeping
    /// the first occurrence's position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pack::collection::{ArrayCollection, Collection};
    ///
    /// let collection = ArrayCollection::from_values([1, 2, 3]);
    /// let merged = collection.merge(ArrayCollection::from_values([4, 5]));
    ///
    /// assert_eq!(merged.values(), vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    fn merge<I>(&self, collection: I) -> Self
    where
        I: IntoIterator<Item = (Key, V)>;

    /// Returns a new collection with every entry's key replaced by the
    /// callback's result.
    ///
    /// When the callback produces a colliding key, the later-produced value
    /// wins, at the first occurrence's position (ordered-map insertion
    /// semantics).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pack::collection::{ArrayCollection, Collection, Key};
    ///
    /// let collection = ArrayCollection::from_values([1, 2, 3]);
    /// let mapped = collection.map_keys(|_, key| key.as_int().unwrap_or(0) * 2);
    ///
    /// assert_eq!(mapped.keys(), vec![Key::Int(0), Key::Int(2), Key::Int(4)]);
    /// assert_eq!(mapped.values(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    fn map_keys<Q, F>(&self, callback: F) -> Self
    where
        Q: Into<Key>,
        F: FnMut(&V, &Key) -> Q;

    /// Returns a new collection with the same keys, each value replaced by
    /// the callback's result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pack::collection::{ArrayCollection, Collection};
    ///
    /// let collection = ArrayCollection::from_values([1, 2, 3]);
    /// let doubled = collection.map_values(|value, _| value * 2);
    ///
    /// assert_eq!(doubled.values(), vec![2, 4, 6]);
    /// ```
    #[must_use]
    fn map_values<W, F>(&self, callback: F) -> Self::Mapped<W>
    where
        W: Clone,
        F: FnMut(&V, &Key) -> W;

    /// Returns a new collection built from the pairs the callback produces.
    ///
    /// Returning `None` skips the entry. The output consists of the
    /// non-skipped pairs, keyed by the returned key, in callback-invocation
    /// order; colliding keys follow last-write-wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pack::collection::{ArrayCollection, Collection, KeyValuePair};
    ///
    /// let collection = ArrayCollection::from_values([1, 2, 3]);
    /// let odd_squares = collection.map_key_value_pairs(|value, key| {
    ///     (value % 2 == 1).then(|| KeyValuePair::new(key, value * value))
    /// });
    ///
    /// assert_eq!(odd_squares.values(), vec![1, 9]);
    /// ```
    #[must_use]
    fn map_key_value_pairs<W, F>(&self, callback: F) -> Self::Mapped<W>
    where
        W: Clone,
        F: FnMut(&V, &Key) -> Option<KeyValuePair<W>>;

    // endregion
}
