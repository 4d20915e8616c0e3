//! Hrid: reversible human-readable identifier codec.
//!
//! Orchestrates element resolution, mixed-radix conversion, and
//! multiplicative scrambling into the public encode/decode/generate
//! surface. An instance is immutable after construction except for the
//! random cursor consumed by [`generate`](Hrid::generate).

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::element::ElementSpec;
use crate::error::HridError;
use crate::radix;
use crate::scramble::Scrambler;
use crate::word_lists::{word_lists, WordListMap};

/// Element categories used when the builder is given none.
pub const DEFAULT_ELEMENTS: [&str; 4] = ["adjective", "noun", "verb", "adverb"];

/// Delimiter used when the builder is given none.
const DEFAULT_DELIMITER: &str = "-";

/// Reversible human-readable identifier codec.
///
/// # Architecture
///
/// Each configured element is backed by an ordered word list; the lists'
/// lengths are the digit bases of a mixed-radix number system, and an HRID
/// is one number written in that system, one word per digit, joined by the
/// delimiter. With scrambling enabled, the index is first permuted by a
/// modular multiplication with a multiplier coprime to the space size, so
/// sequential inputs produce visually unrelated IDs; decode applies the
/// multiplier's modular inverse to recover the original index.
///
/// [`encode`](Self::encode) and [`decode`](Self::decode) are pure
/// functions of the frozen configuration and safe to call from multiple
/// threads through a shared reference. [`generate`](Self::generate)
/// advances an internal random cursor and therefore takes `&mut self`.
#[derive(Debug)]
pub struct Hrid {
    delimiter: String,
    elements: Vec<Vec<String>>,
    bases: Vec<u64>,
    space_size: u64,
    scrambler: Option<Scrambler>,
    rng: ChaCha8Rng,
}

impl Default for Hrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Hrid {
    /// Creates an Hrid with the default configuration: `"-"` delimiter,
    /// adjective-noun-verb-adverb elements from the built-in word lists,
    /// scrambling enabled, and an entropy-seeded generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use hrid::Hrid;
    ///
    /// let hrid = Hrid::new();
    /// let id = hrid.encode(12345).unwrap();
    /// assert_eq!(hrid.decode(&id).unwrap(), 12345);
    /// ```
    pub fn new() -> Self {
        // The built-in defaults cannot produce a degenerate space.
        HridBuilder::default()
            .build()
            .expect("default configuration is valid")
    }

    /// Returns a builder for a custom configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use hrid::Hrid;
    ///
    /// let hrid = Hrid::builder()
    ///     .delimiter(".")
    ///     .elements(["adjective", "animal"])
    ///     .word_lists(hrid::nice_word_lists())
    ///     .build()
    ///     .unwrap();
    /// let id = hrid.encode(100).unwrap();
    /// assert_eq!(id.split('.').count(), 2);
    /// ```
    pub fn builder() -> HridBuilder {
        HridBuilder::default()
    }

    /// Returns the maximum encodable value, `space_size - 1`.
    pub fn max_value(&self) -> u64 {
        self.space_size - 1
    }

    /// Encodes an integer into a human-readable ID.
    ///
    /// The scrambled (or raw, if scrambling is disabled) index is
    /// decomposed into mixed-radix digits, least-significant element
    /// last; each digit selects a word from its element's list, and the
    /// words are joined with the delimiter. The mapping is a bijection
    /// over `[0, space_size)`.
    ///
    /// # Errors
    /// Returns [`HridError::ValueOutOfRange`] if `n > max_value()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hrid::Hrid;
    ///
    /// let hrid = Hrid::builder()
    ///     .elements([vec!["a", "b"], vec!["x", "y", "z"]])
    ///     .scramble(false)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(hrid.encode(5).unwrap(), "b-z");
    /// assert!(hrid.encode(6).is_err());
    /// ```
    pub fn encode(&self, n: u64) -> Result<String, HridError> {
        if n >= self.space_size {
            return Err(HridError::ValueOutOfRange {
                value: n,
                space_size: self.space_size,
            });
        }

        let n = match &self.scrambler {
            Some(s) => s.apply(n),
            None => n,
        };

        let digits = radix::decompose(n, &self.bases);
        let words: Vec<&str> = digits
            .iter()
            .zip(&self.elements)
            .map(|(&digit, list)| list[digit].as_str())
            .collect();
        Ok(words.join(self.delimiter.as_str()))
    }

    /// Decodes a human-readable ID back to its integer.
    ///
    /// Exact inverse of [`encode`](Self::encode):
    /// `decode(encode(n)) == n` for every in-range `n`. Word lookup is
    /// positional first-match, so a list with duplicate words decodes to
    /// the lower index.
    ///
    /// # Errors
    /// Returns [`HridError::PartCountMismatch`] if the input does not
    /// split into exactly one part per element, or
    /// [`HridError::UnknownWord`] if a part is absent from the
    /// corresponding word list.
    ///
    /// # Examples
    ///
    /// ```
    /// use hrid::Hrid;
    ///
    /// let hrid = Hrid::builder()
    ///     .elements([vec!["a", "b"], vec!["x", "y", "z"]])
    ///     .scramble(false)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(hrid.decode("b-z").unwrap(), 5);
    /// assert!(hrid.decode("c-x").is_err());
    /// ```
    pub fn decode(&self, hrid: &str) -> Result<u64, HridError> {
        let parts: Vec<&str> = hrid.split(&self.delimiter).collect();
        if parts.len() != self.elements.len() {
            return Err(HridError::PartCountMismatch {
                expected: self.elements.len(),
                actual: parts.len(),
            });
        }

        let mut digits = Vec::with_capacity(parts.len());
        for (position, (part, list)) in parts.iter().zip(&self.elements).enumerate() {
            let digit = list
                .iter()
                .position(|word| word == part)
                .ok_or_else(|| HridError::UnknownWord {
                    word: (*part).to_string(),
                    position,
                })?;
            digits.push(digit);
        }

        let n = radix::compose(&digits, &self.bases);
        Ok(match &self.scrambler {
            Some(s) => s.invert(n),
            None => n,
        })
    }

    /// Generates a random human-readable ID.
    ///
    /// Draws one word uniformly from each element's list and joins them
    /// with the delimiter. Not invertible, and unrelated to the
    /// encode/decode index space: this consumes the instance's random
    /// stream, so sequential calls on a seeded instance yield a
    /// deterministic sequence.
    pub fn generate(&mut self) -> String {
        let words: Vec<&str> = self
            .elements
            .iter()
            .map(|list| {
                let digit = self.rng.gen_range(0..list.len());
                list[digit].as_str()
            })
            .collect();
        words.join(self.delimiter.as_str())
    }
}

/// Builder for [`Hrid`] instances.
///
/// All parameters have defaults; see the setter methods. Validation
/// happens in [`build`](Self::build).
#[derive(Debug)]
pub struct HridBuilder {
    delimiter: String,
    elements: Option<Vec<ElementSpec>>,
    seed: Option<u64>,
    word_lists: Option<WordListMap>,
    scramble: bool,
    scramble_seed: Option<String>,
}

impl Default for HridBuilder {
    fn default() -> Self {
        HridBuilder {
            delimiter: DEFAULT_DELIMITER.to_string(),
            elements: None,
            seed: None,
            word_lists: None,
            scramble: true,
            scramble_seed: None,
        }
    }
}

impl HridBuilder {
    /// Sets the string joining the words of an ID. Defaults to `"-"`.
    ///
    /// Words containing the delimiter make decode ambiguous; keeping
    /// them apart is the caller's responsibility.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Sets the ordered element specs, most significant first. Defaults
    /// to [`DEFAULT_ELEMENTS`].
    ///
    /// Accepts anything convertible to [`ElementSpec`]: category names,
    /// literal words, or literal word lists.
    pub fn elements<I, S>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ElementSpec>,
    {
        self.elements = Some(elements.into_iter().map(Into::into).collect());
        self
    }

    /// Seeds the random source behind [`generate`](Hrid::generate) for a
    /// reproducible ID stream. Defaults to OS entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the word-list mapping used to resolve named elements.
    /// Defaults to the general-purpose built-in mapping
    /// ([`word_lists`](fn@crate::word_lists)); see also
    /// [`nice_word_lists`](crate::nice_word_lists).
    pub fn word_lists(mut self, word_lists: WordListMap) -> Self {
        self.word_lists = Some(word_lists);
        self
    }

    /// Enables or disables index scrambling. Defaults to enabled.
    ///
    /// With scrambling disabled, `encode` is the plain mixed-radix
    /// decomposition, so sequential inputs differ only in trailing
    /// words.
    pub fn scramble(mut self, scramble: bool) -> Self {
        self.scramble = scramble;
        self
    }

    /// Seeds the scramble-multiplier selection, giving each seed its own
    /// deterministic scrambling pattern (e.g. one per logical
    /// namespace). Defaults to a fixed constant-based selection.
    pub fn scramble_seed(mut self, seed: impl Into<String>) -> Self {
        self.scramble_seed = Some(seed.into());
        self
    }

    /// Resolves the configuration into an [`Hrid`].
    ///
    /// # Errors
    /// Returns [`HridError::NoElements`] if an explicitly empty element
    /// sequence was given, [`HridError::EmptyWordList`] if any element
    /// resolves to an empty list, or [`HridError::SpaceSizeOverflow`] if
    /// the product of the list lengths exceeds `u64`.
    pub fn build(self) -> Result<Hrid, HridError> {
        let map = self.word_lists.unwrap_or_else(word_lists);
        let specs = match self.elements {
            Some(specs) => specs,
            None => DEFAULT_ELEMENTS.iter().map(|&name| name.into()).collect(),
        };
        if specs.is_empty() {
            return Err(HridError::NoElements);
        }

        let elements: Vec<Vec<String>> =
            specs.into_iter().map(|spec| spec.resolve(&map)).collect();

        let mut bases = Vec::with_capacity(elements.len());
        let mut space_size: u64 = 1;
        for (position, list) in elements.iter().enumerate() {
            if list.is_empty() {
                return Err(HridError::EmptyWordList { position });
            }
            let base = list.len() as u64;
            space_size = space_size
                .checked_mul(base)
                .ok_or(HridError::SpaceSizeOverflow)?;
            bases.push(base);
        }

        let scrambler = self
            .scramble
            .then(|| Scrambler::new(space_size, self.scramble_seed.as_deref()));

        let rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Ok(Hrid {
            delimiter: self.delimiter,
            elements,
            bases,
            space_size,
            scrambler,
            rng,
        })
    }
}
