//! Built-in word-list mappings.
//!
//! Static data backing the named element categories. Two variants exist: a
//! general-purpose mapping ([`word_lists`]) and a curated positive-tone
//! mapping ([`nice_word_lists`]). Words within each built-in list are
//! unique; uniqueness is what keeps decode well-defined, and for
//! user-supplied lists it is the caller's responsibility.

use std::collections::HashMap;

mod nice;

pub use nice::nice_word_lists;

/// Mapping from category name to ordered word list, as consumed by
/// [`HridBuilder::word_lists`](crate::HridBuilder::word_lists).
pub type WordListMap = HashMap<String, Vec<String>>;

/// Copies a static word list into owned strings.
pub(crate) fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

const ADJECTIVES: &[&str] = &[
    "amber", "ancient", "bold", "brave", "bright", "calm", "cheerful",
    "clever", "cold", "crimson", "curious", "daring", "deep", "distant",
    "eager", "early", "electric", "fierce", "gentle", "giant", "golden",
    "grand", "green", "hidden", "humble", "icy", "jolly", "keen", "little",
    "lively", "lonely", "loud", "lucky", "mellow", "mighty", "nimble",
    "patient", "polished", "proud", "quiet", "rapid", "rustic", "silent",
    "silver", "swift", "vivid", "wild", "young",
];

const NOUNS: &[&str] = &[
    "anchor", "badger", "beacon", "bridge", "canyon", "castle", "comet",
    "compass", "coral", "cottage", "crystal", "dolphin", "ember", "falcon",
    "feather", "forest", "fountain", "garden", "glacier", "harbor", "hawk",
    "island", "lagoon", "lantern", "meadow", "meteor", "mountain", "oasis",
    "ocean", "orchard", "otter", "panther", "pebble", "prairie", "raven",
    "reef", "river", "saddle", "sparrow", "spruce", "summit", "thicket",
    "tiger", "tundra", "valley", "village", "willow", "wolf",
];

const VERBS: &[&str] = &[
    "ambles", "beams", "bounces", "builds", "carries", "climbs", "dances",
    "dashes", "dreams", "drifts", "explores", "flies", "floats", "flows",
    "gallops", "gathers", "gazes", "glides", "glows", "hops", "hums",
    "jumps", "leaps", "listens", "marches", "paddles", "paints", "rambles",
    "rises", "roams", "rolls", "sails", "sings", "skates", "soars", "spins",
    "swims", "wanders", "waves", "whistles",
];

const ADVERBS: &[&str] = &[
    "boldly", "bravely", "brightly", "briskly", "calmly", "carefully",
    "cheerfully", "cleverly", "daily", "dearly", "deeply", "eagerly",
    "easily", "fiercely", "fondly", "freely", "gently", "gladly",
    "gracefully", "happily", "keenly", "kindly", "lightly", "loudly",
    "merrily", "neatly", "nicely", "openly", "patiently", "proudly",
    "quickly", "quietly", "softly", "swiftly", "warmly", "wildly",
];

/// Returns the general-purpose built-in mapping: `adjective`, `noun`,
/// `verb`, and `adverb` categories. This is the mapping used when the
/// builder is given no override.
pub fn word_lists() -> WordListMap {
    HashMap::from([
        ("adjective".to_string(), owned(ADJECTIVES)),
        ("noun".to_string(), owned(NOUNS)),
        ("verb".to_string(), owned(VERBS)),
        ("adverb".to_string(), owned(ADVERBS)),
    ])
}
