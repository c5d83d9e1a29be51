//! Collection keys.
//!
//! Keys in an [`ArrayCollection`](super::ArrayCollection) are restricted to
//! a small closed set: integers or strings. [`Key`] models that set as an
//! enum, so a single collection may freely mix both shapes while lookups
//! stay strictly typed (no numeric-string coercion of any kind).

use std::fmt;

// =============================================================================
// Key Definition
// =============================================================================

/// A key of an ordered collection entry: an integer or a string.
///
/// Conversions from the primitive integer types (up to `i64`) and from
/// string types are provided, so the collection operations accept plain
/// values wherever a key is expected:
///
/// ```rust
/// use pack::collection::Key;
///
/// assert_eq!(Key::from(3), Key::Int(3));
/// assert_eq!(Key::from("three"), Key::Str("three".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// An integer key.
    Int(i64),
    /// A string key.
    Str(String),
}

impl Key {
    /// Returns `true` if this is an integer key.
    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Returns `true` if this is a string key.
    #[inline]
    #[must_use]
    pub const fn is_str(&self) -> bool {
        matches!(self, Self::Str(_))
    }

    /// Returns the integer value of this key, or `None` for a string key.
    #[inline]
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(key) => Some(*key),
            Self::Str(_) => None,
        }
    }

    /// Returns the string value of this key, or `None` for an integer key.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Str(key) => Some(key),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

macro_rules! impl_key_from_int {
    ($($int:ident),* $(,)?) => {
        $(
            paste::paste! {
                impl From<$int> for Key {
                    #[doc = "Converts an `" $int "` into [`Key::Int`]."]
                    #[inline]
                    fn from(key: $int) -> Self {
                        Self::Int(i64::from(key))
                    }
                }
            }
        )*
    };
}

impl_key_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<&str> for Key {
    /// Converts a string slice into [`Key::Str`].
    #[inline]
    fn from(key: &str) -> Self {
        Self::Str(key.to_string())
    }
}

impl From<String> for Key {
    /// Converts an owned string into [`Key::Str`].
    #[inline]
    fn from(key: String) -> Self {
        Self::Str(key)
    }
}

impl From<&Key> for Key {
    /// Clones a borrowed key.
    #[inline]
    fn from(key: &Self) -> Self {
        key.clone()
    }
}

// =============================================================================
// Display
// =============================================================================

impl fmt::Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(key) => write!(formatter, "{key}"),
            Self::Str(key) => write!(formatter, "{key}"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
