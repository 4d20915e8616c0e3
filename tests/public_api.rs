//! Integration tests for the public hrid API.
//!
//! Coverage:
//! - mixed-radix encode/decode with scrambling disabled (frozen examples)
//! - scrambled encode/decode: round trip, bijection, de-correlation
//! - frozen scrambled values for a 10x10 space (multiplier 2654435769)
//! - range and format error reporting
//! - determinism across identically-configured instances
//! - seeded `generate()` reproducibility
//! - built-in word-list mappings
//! - property-based round trips over arbitrary configurations

use proptest::prelude::*;
use std::collections::HashSet;

use hrid::{Hrid, HridError};

/// Two digit-word lists spanning a 100-value space: `t0..t9` x `u0..u9`.
/// The unseeded multiplier for space 100 is the first constant,
/// 2654435769, so the scramble step is `n * 69 mod 100`.
fn digit_codec(scramble: bool) -> Hrid {
    let tens: Vec<String> = (0..10).map(|i| format!("t{}", i)).collect();
    let units: Vec<String> = (0..10).map(|i| format!("u{}", i)).collect();
    Hrid::builder()
        .elements([tens, units])
        .scramble(scramble)
        .build()
        .unwrap()
}

/// Smallest non-trivial configuration: ["a","b"] x ["x","y","z"].
fn tiny_codec() -> Hrid {
    Hrid::builder()
        .elements([vec!["a", "b"], vec!["x", "y", "z"]])
        .scramble(false)
        .build()
        .unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
// Plain mixed radix (scramble disabled) — frozen examples
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn unscrambled_tiny_space_all_values() {
    let hrid = tiny_codec();
    let expected = ["a-x", "a-y", "a-z", "b-x", "b-y", "b-z"];
    for (n, want) in expected.iter().enumerate() {
        assert_eq!(hrid.encode(n as u64).unwrap(), *want, "encode({})", n);
        assert_eq!(hrid.decode(want).unwrap(), n as u64, "decode({})", want);
    }
}

#[test]
fn max_value_is_space_size_minus_one() {
    assert_eq!(tiny_codec().max_value(), 5);
    assert_eq!(digit_codec(true).max_value(), 99);

    let singleton = Hrid::builder()
        .elements([vec!["only"]])
        .build()
        .unwrap();
    assert_eq!(singleton.max_value(), 0);
    assert_eq!(singleton.encode(0).unwrap(), "only");
    assert_eq!(singleton.decode("only").unwrap(), 0);
}

// ═══════════════════════════════════════════════════════════════════════
// Scrambling — frozen values, round trip, bijection, de-correlation
// ═══════════════════════════════════════════════════════════════════════

/// Frozen scrambled encodings for the 10x10 space. The multiplier
/// constant is part of the compatibility surface: these values must
/// never change for an unseeded configuration.
#[test]
fn scrambled_digit_space_frozen_values() {
    let hrid = digit_codec(true);
    // n * 69 mod 100, split into tens and units.
    assert_eq!(hrid.encode(0).unwrap(), "t0-u0");
    assert_eq!(hrid.encode(1).unwrap(), "t6-u9");
    assert_eq!(hrid.encode(2).unwrap(), "t3-u8");
    assert_eq!(hrid.encode(3).unwrap(), "t0-u7");
    assert_eq!(hrid.encode(50).unwrap(), "t5-u0");
    assert_eq!(hrid.encode(99).unwrap(), "t3-u1");

    assert_eq!(hrid.decode("t6-u9").unwrap(), 1);
    assert_eq!(hrid.decode("t3-u1").unwrap(), 99);
}

#[test]
fn scrambled_round_trip_full_space() {
    let hrid = digit_codec(true);
    for n in 0..100 {
        let id = hrid.encode(n).unwrap();
        assert_eq!(hrid.decode(&id).unwrap(), n, "round trip failed for {}", n);
    }
}

#[test]
fn scrambled_encodings_are_distinct() {
    let hrid = Hrid::builder()
        .elements([vec!["a", "b", "c", "d", "e"], vec!["p", "q", "r", "s"], vec!["x", "y", "z"]])
        .scramble_seed("bijection-check")
        .build()
        .unwrap();
    let space = hrid.max_value() + 1;
    let ids: HashSet<String> = (0..space).map(|n| hrid.encode(n).unwrap()).collect();
    assert_eq!(ids.len(), space as usize);
}

/// With multiplier 69 over a 10x10 space, consecutive indices always
/// change both words: the units digit moves by 9 and the tens digit by
/// 6 or 7. Sequential inputs never differ in just the trailing word.
#[test]
fn consecutive_inputs_decorrelate() {
    let hrid = digit_codec(true);
    for n in 0..99 {
        let a = hrid.encode(n).unwrap();
        let b = hrid.encode(n + 1).unwrap();
        let (a_tens, a_units) = a.split_once('-').unwrap();
        let (b_tens, b_units) = b.split_once('-').unwrap();
        assert_ne!(a_units, b_units, "units unchanged at {}", n);
        assert_ne!(a_tens, b_tens, "tens unchanged at {}", n);
    }
}

#[test]
fn scramble_disabled_is_plain_mixed_radix() {
    let scrambled = digit_codec(true);
    let plain = digit_codec(false);
    // Plain encoding of n is just its decimal digits.
    assert_eq!(plain.encode(42).unwrap(), "t4-u2");
    // Scrambling permutes the space rather than reordering words.
    assert_ne!(scrambled.encode(42).unwrap(), plain.encode(42).unwrap());
}

#[test]
fn default_configuration_round_trips() {
    let hrid = Hrid::new();
    for n in [0, 1, 7919, 1_000_000, hrid.max_value()] {
        let id = hrid.encode(n).unwrap();
        assert_eq!(hrid.decode(&id).unwrap(), n);
        assert_eq!(id.split('-').count(), 4);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Determinism across instances
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn identical_configurations_encode_identically() {
    let build = || {
        Hrid::builder()
            .elements([vec!["a", "b", "c", "d", "e", "f", "g"], vec!["x", "y", "z"]])
            .scramble_seed("tenant-42")
            .build()
            .unwrap()
    };
    let first = build();
    let second = build();
    for n in 0..21 {
        assert_eq!(first.encode(n).unwrap(), second.encode(n).unwrap());
    }
}

#[test]
fn distinct_scramble_seeds_produce_distinct_patterns() {
    let build = |seed: &str| {
        Hrid::builder()
            .elements([vec!["a", "b", "c", "d", "e", "f", "g"], vec!["x", "y", "z"]])
            .scramble_seed(seed)
            .build()
            .unwrap()
    };
    let first = build("tenant-1");
    let second = build("tenant-2");
    let a: Vec<String> = (0..21).map(|n| first.encode(n).unwrap()).collect();
    let b: Vec<String> = (0..21).map(|n| second.encode(n).unwrap()).collect();
    assert_ne!(a, b, "seeds selected the same scramble multiplier");
}

#[test]
fn unseeded_scramble_is_stable_across_instances() {
    let first = digit_codec(true);
    let second = digit_codec(true);
    for n in 0..100 {
        assert_eq!(first.encode(n).unwrap(), second.encode(n).unwrap());
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Error reporting
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn encode_out_of_range_reports_bound() {
    let hrid = tiny_codec();
    assert_eq!(
        hrid.encode(6).unwrap_err(),
        HridError::ValueOutOfRange {
            value: 6,
            space_size: 6,
        }
    );
    assert_eq!(
        hrid.encode(u64::MAX).unwrap_err(),
        HridError::ValueOutOfRange {
            value: u64::MAX,
            space_size: 6,
        }
    );
}

#[test]
fn decode_unknown_word_reports_word_and_position() {
    let hrid = tiny_codec();
    assert_eq!(
        hrid.decode("c-x").unwrap_err(),
        HridError::UnknownWord {
            word: "c".to_string(),
            position: 0,
        }
    );
    assert_eq!(
        hrid.decode("a-w").unwrap_err(),
        HridError::UnknownWord {
            word: "w".to_string(),
            position: 1,
        }
    );
}

#[test]
fn decode_wrong_part_count_reports_counts() {
    let hrid = tiny_codec();
    assert_eq!(
        hrid.decode("a").unwrap_err(),
        HridError::PartCountMismatch {
            expected: 2,
            actual: 1,
        }
    );
    assert_eq!(
        hrid.decode("a-x-y").unwrap_err(),
        HridError::PartCountMismatch {
            expected: 2,
            actual: 3,
        }
    );
}

#[test]
fn degenerate_configurations_fail_at_construction() {
    let empty = Hrid::builder().elements(Vec::<Vec<String>>::new()).build();
    assert_eq!(empty.unwrap_err(), HridError::NoElements);

    let hollow = Hrid::builder().elements([Vec::<&str>::new()]).build();
    assert_eq!(hollow.unwrap_err(), HridError::EmptyWordList { position: 0 });
}

// ═══════════════════════════════════════════════════════════════════════
// Random generation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn seeded_generate_is_reproducible() {
    let mut first = Hrid::builder().seed(99).build().unwrap();
    let mut second = Hrid::builder().seed(99).build().unwrap();
    for _ in 0..10 {
        assert_eq!(first.generate(), second.generate());
    }
}

#[test]
fn different_seeds_diverge() {
    let mut first = Hrid::builder().seed(1).build().unwrap();
    let mut second = Hrid::builder().seed(2).build().unwrap();
    let a: Vec<String> = (0..5).map(|_| first.generate()).collect();
    let b: Vec<String> = (0..5).map(|_| second.generate()).collect();
    assert_ne!(a, b);
}

#[test]
fn generated_ids_decode() {
    // generate() draws from the same lists encode() indexes, so every
    // generated ID is decodable even though the index is meaningless.
    let mut hrid = Hrid::builder().seed(5).build().unwrap();
    for _ in 0..10 {
        let id = hrid.generate();
        assert!(hrid.decode(&id).unwrap() <= hrid.max_value());
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Built-in word lists
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn nice_lists_cover_all_categories() {
    let hrid = Hrid::builder()
        .elements([
            "adjective", "mood", "noun", "verb", "adverb", "animal",
            "flower", "place", "tree", "weather", "fabric", "number",
        ])
        .word_lists(hrid::nice_word_lists())
        .build()
        .unwrap();
    for n in [0, 12345, hrid.max_value()] {
        let id = hrid.encode(n).unwrap();
        assert_eq!(id.split('-').count(), 12);
        assert_eq!(hrid.decode(&id).unwrap(), n);
    }
}

#[test]
fn default_elements_resolve_against_general_lists() {
    assert_eq!(hrid::DEFAULT_ELEMENTS, ["adjective", "noun", "verb", "adverb"]);
    let map = hrid::word_lists();
    for name in hrid::DEFAULT_ELEMENTS {
        assert!(map.contains_key(name));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Property-based round trips
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    /// decode(encode(n)) == n for arbitrary element shapes, with and
    /// without scrambling, seeded and unseeded.
    #[test]
    fn prop_round_trip(
        shape in prop::collection::vec(1usize..12, 1..5),
        n_raw in any::<u64>(),
        scramble in any::<bool>(),
        seed in prop::option::of("[a-z]{1,8}"),
    ) {
        let elements: Vec<Vec<String>> = shape
            .iter()
            .enumerate()
            .map(|(i, &len)| (0..len).map(|j| format!("w{}x{}", i, j)).collect())
            .collect();
        let mut builder = Hrid::builder().elements(elements).scramble(scramble);
        if let Some(seed) = seed {
            builder = builder.scramble_seed(seed);
        }
        let hrid = builder.build().unwrap();
        let n = n_raw % (hrid.max_value() + 1);
        prop_assert_eq!(hrid.decode(&hrid.encode(n).unwrap()).unwrap(), n);
    }

    /// Encoded output always has one part per element.
    #[test]
    fn prop_part_count_matches_elements(
        shape in prop::collection::vec(1usize..10, 1..6),
        n_raw in any::<u64>(),
    ) {
        let elements: Vec<Vec<String>> = shape
            .iter()
            .enumerate()
            .map(|(i, &len)| (0..len).map(|j| format!("w{}x{}", i, j)).collect())
            .collect();
        let hrid = Hrid::builder().elements(elements).build().unwrap();
        let n = n_raw % (hrid.max_value() + 1);
        let id = hrid.encode(n).unwrap();
        prop_assert_eq!(id.split('-').count(), shape.len());
    }
}
