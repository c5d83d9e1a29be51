//! Property-based tests for `ArrayCollection`.
//!
//! These tests verify that `ArrayCollection` satisfies the copy-on-write
//! laws and the native ordered-map semantics using proptest.

use pack::collection::{ArrayCollection, Collection, Key, KeyValuePair};
use proptest::prelude::*;
use std::hash::{DefaultHasher, Hash, Hasher};

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

/// Strategy for generating a key of either shape.
fn arbitrary_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        any::<i16>().prop_map(|key| Key::Int(key.into())),
        "[a-z]{1,6}".prop_map(Key::Str),
    ]
}

/// Strategy for generating an `ArrayCollection` from key-value pairs.
fn arbitrary_collection(max_size: usize) -> impl Strategy<Value = ArrayCollection<i32>> {
    prop::collection::vec((arbitrary_key(), any::<i32>()), 0..max_size)
        .prop_map(|entries| entries.into_iter().collect::<ArrayCollection<i32>>())
}

fn hash_of(collection: &ArrayCollection<i32>) -> u64 {
    let mut hasher = DefaultHasher::new();
    collection.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Immutability Laws
// =============================================================================

proptest! {
    /// Law: no write-style operation changes the receiver.
    #[test]
    fn prop_write_operations_leave_the_original_unchanged(
        collection in arbitrary_collection(20),
        key in arbitrary_key(),
        value: i32,
        offset in -5_i64..5,
        length in prop::option::of(-5_i64..5),
    ) {
        let snapshot = collection.to_map();

        let _set = collection.set(key.clone(), value);
        let _unset = collection.unset(key);
        let _slice = collection.slice(offset, length, false);
        let _splice = collection.splice(offset, length, &[value]);
        let _merge = collection.merge(ArrayCollection::from_values([value]));
        let _map_keys = collection.map_keys(|_, key| key.clone());
        let _map_values = collection.map_values(|value, _| value + 1);
        let _map_pairs = collection.map_key_value_pairs(|_, _| None::<KeyValuePair<i32>>);

        prop_assert_eq!(collection.to_map(), snapshot);
    }
}

// =============================================================================
// Get-Set Laws
// =============================================================================

proptest! {
    /// Law: get after set returns the stored value.
    /// collection.set(key, value).get(key) == Some(&value)
    #[test]
    fn prop_set_get_round_trip(
        collection in arbitrary_collection(20),
        key in arbitrary_key(),
        value: i32,
    ) {
        let updated = collection.set(key.clone(), value);
        prop_assert_eq!(updated.get(key), Some(&value));
    }

    /// Law: set does not affect other keys.
    #[test]
    fn prop_set_does_not_affect_other_keys(
        collection in arbitrary_collection(20),
        key1 in arbitrary_key(),
        key2 in arbitrary_key(),
        value: i32,
    ) {
        prop_assume!(key1 != key2);
        let updated = collection.set(key1, value);
        prop_assert_eq!(updated.get(key2.clone()), collection.get(key2));
    }
}

// =============================================================================
// Unset Laws
// =============================================================================

proptest! {
    /// Law: unset of an existing key removes exactly that entry, leaving
    /// every other entry unchanged, in order.
    #[test]
    fn prop_unset_removes_exactly_one(collection in arbitrary_collection(20)) {
        if let Some(first) = collection.first() {
            let removed = collection.unset(first.key.clone());

            prop_assert_eq!(removed.len(), collection.len() - 1);

            let expected: Vec<(Key, i32)> = collection
                .clone()
                .into_iter()
                .filter(|(key, _)| *key != first.key)
                .collect();
            let actual: Vec<(Key, i32)> = removed.into_iter().collect();
            prop_assert_eq!(actual, expected);
        }
    }

    /// Law: unset of an absent key is an identity.
    #[test]
    fn prop_unset_of_absent_key_is_identity(
        collection in arbitrary_collection(20),
        key in arbitrary_key(),
    ) {
        prop_assume!(!collection.exists(key.clone()));
        prop_assert_eq!(collection.unset(key), collection);
    }
}

// =============================================================================
// Counting Laws
// =============================================================================

proptest! {
    /// Law: len agrees with every snapshot getter.
    #[test]
    fn prop_count_consistency(collection in arbitrary_collection(20)) {
        prop_assert_eq!(collection.len(), collection.to_map().len());
        prop_assert_eq!(collection.len(), collection.keys().len());
        prop_assert_eq!(collection.len(), collection.values().len());
        prop_assert_eq!(collection.len(), collection.iter().count());
        prop_assert_eq!(collection.is_empty(), collection.len() == 0);
    }
}

// =============================================================================
// Merge Laws
// =============================================================================

proptest! {
    /// Law: merging integer-keyed collections concatenates their values.
    #[test]
    fn prop_merge_concatenates_integer_keyed_values(
        left in prop::collection::vec(any::<i32>(), 0..20),
        right in prop::collection::vec(any::<i32>(), 0..20),
    ) {
        let merged = ArrayCollection::from_values(left.clone())
            .merge(ArrayCollection::from_values(right.clone()));

        let concatenated: Vec<i32> = left.into_iter().chain(right).collect();
        prop_assert_eq!(merged, ArrayCollection::from_values(concatenated));
    }

    /// Law: merging with an empty collection is an identity for
    /// integer-keyed collections.
    #[test]
    fn prop_merge_with_empty_is_identity(
        values in prop::collection::vec(any::<i32>(), 0..20),
    ) {
        let collection = ArrayCollection::from_values(values);
        let merged = collection.merge(ArrayCollection::new());
        prop_assert_eq!(merged, collection);
    }
}

// =============================================================================
// Slice / Splice Laws
// =============================================================================

proptest! {
    /// Law: slicing an integer-keyed collection matches slicing the value
    /// sequence, with the result renumbered from 0.
    #[test]
    fn prop_slice_matches_sequence_semantics(
        values in prop::collection::vec(any::<i32>(), 0..20),
        offset in 0_usize..25,
        length in prop::option::of(0_usize..25),
    ) {
        let collection = ArrayCollection::from_values(values.clone());

        let start = offset.min(values.len());
        let end = length.map_or(values.len(), |length| (start + length).min(values.len()));
        let expected = ArrayCollection::from_values(values[start..end].to_vec());

        let sliced = collection.slice(
            i64::try_from(offset).unwrap(),
            length.map(|length| i64::try_from(length).unwrap()),
            false,
        );
        prop_assert_eq!(sliced, expected);
    }

    /// Law: splicing an integer-keyed collection matches `Vec::splice` on
    /// the value sequence.
    #[test]
    fn prop_splice_matches_vector_semantics(
        values in prop::collection::vec(any::<i32>(), 0..20),
        replacement in prop::collection::vec(any::<i32>(), 0..5),
        offset in 0_usize..25,
        length in prop::option::of(0_usize..25),
    ) {
        let collection = ArrayCollection::from_values(values.clone());

        let start = offset.min(values.len());
        let end = length.map_or(values.len(), |length| (start + length).min(values.len()));
        let mut model = values;
        let _removed: Vec<i32> = model
            .splice(start..end, replacement.iter().copied())
            .collect();

        let spliced = collection.splice(
            i64::try_from(offset).unwrap(),
            length.map(|length| i64::try_from(length).unwrap()),
            &replacement,
        );
        prop_assert_eq!(spliced, ArrayCollection::from_values(model));
    }
}

// =============================================================================
// Mapping Laws
// =============================================================================

proptest! {
    /// Law: mapping values with the identity returns an equal collection.
    #[test]
    fn prop_map_values_identity(collection in arbitrary_collection(20)) {
        let mapped = collection.map_values(|value, _| *value);
        prop_assert_eq!(mapped, collection);
    }

    /// Law: map_values preserves keys and order.
    #[test]
    fn prop_map_values_preserves_keys(collection in arbitrary_collection(20)) {
        let mapped = collection.map_values(|value, _| i64::from(*value) * 2);
        prop_assert_eq!(mapped.keys(), collection.keys());
    }

    /// Law: map_keys with the identity returns an equal collection.
    #[test]
    fn prop_map_keys_identity(collection in arbitrary_collection(20)) {
        let mapped = collection.map_keys(|_, key| key.clone());
        prop_assert_eq!(mapped, collection);
    }

    /// Law: map_key_value_pairs passing entries through unchanged returns
    /// an equal collection.
    #[test]
    fn prop_map_key_value_pairs_identity(collection in arbitrary_collection(20)) {
        let mapped = collection
            .map_key_value_pairs(|value, key| Some(KeyValuePair::new(key, *value)));
        prop_assert_eq!(mapped, collection);
    }
}

// =============================================================================
// Find Laws
// =============================================================================

proptest! {
    /// Law: a found entry is stored under the reported key, holds the
    /// searched value, and is the earliest match in iteration order.
    #[test]
    fn prop_find_by_value_reports_the_earliest_match(
        collection in arbitrary_collection(20),
        needle: i32,
    ) {
        match collection.find_by_value(&needle) {
            Some(pair) => {
                prop_assert_eq!(collection.get(pair.key.clone()), Some(&needle));
                prop_assert_eq!(&pair.value, &needle);

                let earliest = collection
                    .iter()
                    .find(|&(_, value)| *value == needle)
                    .map(|(key, _)| key.clone());
                prop_assert_eq!(Some(pair.key), earliest);
            }
            None => {
                prop_assert!(collection.values().iter().all(|value| *value != needle));
            }
        }
    }

    /// Law: find_by_callback agrees with find_by_value for an equality
    /// predicate.
    #[test]
    fn prop_find_by_callback_agrees_with_find_by_value(
        collection in arbitrary_collection(20),
        needle: i32,
    ) {
        let by_callback = collection.find_by_callback(|value, _| *value == needle);
        prop_assert_eq!(by_callback, collection.find_by_value(&needle));
    }
}

// =============================================================================
// First / Last Laws
// =============================================================================

proptest! {
    /// Law: first and last agree with iteration order, and are None exactly
    /// when the collection is empty.
    #[test]
    fn prop_first_last_agree_with_iteration(collection in arbitrary_collection(20)) {
        let expected_first = collection
            .iter()
            .next()
            .map(|(key, value)| KeyValuePair::new(key, *value));
        let expected_last = collection
            .iter()
            .next_back()
            .map(|(key, value)| KeyValuePair::new(key, *value));

        prop_assert_eq!(collection.first(), expected_first);
        prop_assert_eq!(collection.last(), expected_last);
        prop_assert_eq!(collection.first().is_none(), collection.is_empty());
    }
}

// =============================================================================
// Equality and Hash Laws
// =============================================================================

proptest! {
    /// Law: collections built from the same pairs are equal and hash
    /// equally.
    #[test]
    fn prop_equal_collections_hash_equally(
        entries in prop::collection::vec((arbitrary_key(), any::<i32>()), 0..20),
    ) {
        let left: ArrayCollection<i32> = entries.clone().into_iter().collect();
        let right: ArrayCollection<i32> = entries.into_iter().collect();

        prop_assert_eq!(&left, &right);
        prop_assert_eq!(hash_of(&left), hash_of(&right));
    }
}
