//! Immutable ordered key-value collections.
//!
//! This module provides [`ArrayCollection`], an immutable collection that
//! wraps a single insertion-ordered mapping from keys to values, together
//! with the [`Collection`] contract it implements.
//!
//! # Copy-on-Write
//!
//! No operation ever mutates a collection in place. Every write-style
//! operation (`set`, `unset`, `slice`, `splice`, `merge`, the mapping
//! operations) copies the wrapped mapping, applies the change to the copy,
//! and returns a new instance. The original stays valid and unchanged, so
//! holding on to earlier snapshots is always safe. Cloning a collection
//! itself is O(1): instances share their backing storage.
//!
//! # Keys
//!
//! Keys are drawn from a small closed set, modeled by [`Key`]: integers or
//! strings. Insertion order is significant, observable during iteration,
//! and preserved by every operation except where slice, splice, or merge
//! explicitly renumber positional integer keys.
//!
//! # Examples
//!
//! ```rust
//! use pack::collection::{ArrayCollection, Collection};
//!
//! let collection = ArrayCollection::from_values([10, 20, 30]);
//!
//! // Reads
//! assert_eq!(collection.get(1), Some(&20));
//! assert_eq!(collection.len(), 3);
//!
//! // Writes return new instances, the original is preserved
//! let updated = collection.set(1, 99);
//! assert_eq!(collection.get(1), Some(&20)); // Original unchanged
//! assert_eq!(updated.get(1), Some(&99));    // New version
//!
//! // Structural transforms mirror the native array primitives
//! let merged = collection.merge(ArrayCollection::from_values([40, 50]));
//! assert_eq!(merged.values(), vec![10, 20, 30, 40, 50]);
//! ```

mod array;
mod interface;
mod key;
mod pair;

pub use array::ArrayCollection;
pub use array::ArrayCollectionIntoIterator;
pub use array::ArrayCollectionIterator;
pub use interface::Collection;
pub use key::Key;
pub use pair::KeyValuePair;
