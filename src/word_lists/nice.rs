//! Curated positive-tone word lists.
//!
//! A friendlier alternative to the general-purpose mapping, for IDs shown
//! to end users: upbeat adjectives and moods, pastoral nouns, and extra
//! categories (animals, flowers, places, trees, weather, fabrics, and
//! two-digit numbers).

use super::{owned, WordListMap};

const ADJECTIVES: &[&str] = &[
    "amiable", "beaming", "breezy", "bright", "calm", "charming",
    "cheerful", "cozy", "dandy", "dapper", "dreamy", "gentle", "glad",
    "gleaming", "golden", "graceful", "grateful", "happy", "jolly",
    "joyful", "kind", "lucky", "mellow", "merry", "peachy", "playful",
    "radiant", "serene", "sunny", "tender", "vivid", "warm",
];

const MOODS: &[&str] = &[
    "blissful", "buoyant", "carefree", "content", "curious", "eager",
    "excited", "hopeful", "inspired", "peaceful", "proud", "relaxed",
    "satisfied", "thankful", "tranquil", "upbeat",
];

const NOUNS: &[&str] = &[
    "blossom", "breeze", "brook", "cloud", "dawn", "dew", "garden",
    "glade", "grove", "harbor", "hill", "horizon", "lagoon", "lake",
    "meadow", "moon", "morning", "oasis", "orchard", "pond", "rainbow",
    "ripple", "shore", "sky", "spring", "star", "stream", "sunrise",
    "sunset", "trail", "valley", "wave",
];

const VERBS: &[&str] = &[
    "beams", "blooms", "bubbles", "dances", "dazzles", "delights",
    "flourishes", "flows", "glimmers", "glistens", "glows", "grins",
    "hums", "laughs", "prospers", "radiates", "rejoices", "shines",
    "smiles", "sparkles", "thrives", "twinkles", "waltzes", "wonders",
];

const ADVERBS: &[&str] = &[
    "blissfully", "brightly", "calmly", "cheerfully", "dearly", "fondly",
    "gently", "gladly", "gracefully", "happily", "joyfully", "kindly",
    "merrily", "peacefully", "playfully", "softly", "sweetly", "tenderly",
    "warmly", "wonderfully",
];

const ANIMALS: &[&str] = &[
    "bunny", "chickadee", "deer", "dolphin", "dove", "duckling", "fawn",
    "finch", "hedgehog", "hummingbird", "kitten", "koala", "lamb", "otter",
    "panda", "pony", "puppy", "quokka", "robin", "seal", "sparrow",
    "squirrel", "swan", "wren",
];

const FLOWERS: &[&str] = &[
    "aster", "buttercup", "daffodil", "daisy", "freesia", "iris",
    "jasmine", "lavender", "lilac", "lily", "magnolia", "marigold",
    "peony", "rose", "tulip", "violet",
];

const PLACES: &[&str] = &[
    "bay", "cove", "dale", "fjord", "glen", "harbor", "haven", "isle",
    "knoll", "lagoon", "marina", "meadow", "orchard", "shore", "vale",
    "village",
];

const TREES: &[&str] = &[
    "alder", "aspen", "birch", "cedar", "cherry", "chestnut", "cypress",
    "elm", "fir", "juniper", "maple", "oak", "pine", "rowan", "spruce",
    "willow",
];

const WEATHER: &[&str] = &[
    "breeze", "drizzle", "frost", "mist", "rainbow", "shower", "snowfall",
    "sunbeam", "sunshine", "thaw", "wind", "zephyr",
];

const FABRICS: &[&str] = &[
    "cashmere", "chiffon", "corduroy", "cotton", "denim", "flannel",
    "linen", "satin", "silk", "tweed", "velvet", "wool",
];

/// Returns the curated positive-tone mapping.
///
/// Covers the four default categories plus `mood`, `animal`, `flower`,
/// `place`, `tree`, `weather`, `fabric`, and `number` (the strings `"10"`
/// through `"98"`).
pub fn nice_word_lists() -> WordListMap {
    WordListMap::from([
        ("adjective".to_string(), owned(ADJECTIVES)),
        ("mood".to_string(), owned(MOODS)),
        ("noun".to_string(), owned(NOUNS)),
        ("verb".to_string(), owned(VERBS)),
        ("adverb".to_string(), owned(ADVERBS)),
        ("animal".to_string(), owned(ANIMALS)),
        ("flower".to_string(), owned(FLOWERS)),
        ("place".to_string(), owned(PLACES)),
        ("tree".to_string(), owned(TREES)),
        ("weather".to_string(), owned(WEATHER)),
        ("fabric".to_string(), owned(FABRICS)),
        (
            "number".to_string(),
            (10..99).map(|n| n.to_string()).collect(),
        ),
    ])
}
