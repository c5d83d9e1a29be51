//! # pack
//!
//! An immutable collection library providing copy-on-write ordered
//! key-value collections.
//!
//! ## Overview
//!
//! This library provides value-semantic collection types that can never be
//! mutated in place. Every "modifying" operation returns a new instance and
//! leaves the original untouched:
//!
//! - [`ArrayCollection`](collection::ArrayCollection): an immutable ordered
//!   key-value collection with slice/splice/merge/mapping operations
//! - [`Collection`](collection::Collection): the capability contract any
//!   collection type supports
//! - [`Pack`](pack::Pack): an immutable sequence of values
//!
//! ## Feature Flags
//!
//! - `arc`: use `Arc` instead of `Rc` for the shared backing storage,
//!   making the collection types `Send + Sync`
//!
//! ## Example
//!
//! ```rust
//! use pack::prelude::*;
//!
//! let collection = ArrayCollection::from_values([10, 20, 30]);
//! let updated = collection.set(3, 40);
//!
//! // The original is never touched
//! assert_eq!(collection.len(), 3);
//! assert_eq!(updated.len(), 4);
//! assert_eq!(updated.get(3), Some(&40));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use pack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::{ArrayCollection, Collection, Key, KeyValuePair};
    pub use crate::pack::Pack;
}

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

pub mod collection;
pub mod pack;

// =============================================================================
// Tests
// =============================================================================
