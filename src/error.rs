//! Error types for the hrid library.

use thiserror::Error;

/// Errors produced by the hrid library.
///
/// The variants fall into three groups: configuration errors surfaced at
/// construction time ([`NoElements`](Self::NoElements),
/// [`EmptyWordList`](Self::EmptyWordList),
/// [`SpaceSizeOverflow`](Self::SpaceSizeOverflow)), range errors from
/// [`encode`](crate::Hrid::encode), and format errors from
/// [`decode`](crate::Hrid::decode). All are detected synchronously at the
/// offending call; none are retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HridError {
    /// Element resolution produced no elements.
    #[error("at least one element is required")]
    NoElements,
    /// The word list backing an element is empty, so the ID space would be
    /// zero-sized and encode/decode undefined.
    #[error("word list for element {position} is empty")]
    EmptyWordList {
        /// Zero-based position of the offending element.
        position: usize,
    },
    /// The product of the word-list lengths does not fit in a `u64`.
    #[error("ID space size overflows u64")]
    SpaceSizeOverflow,
    /// `encode` was called with a value outside `[0, space_size)`.
    #[error("value {value} out of range, must be less than {space_size}")]
    ValueOutOfRange {
        /// The rejected input value.
        value: u64,
        /// Total number of encodable values.
        space_size: u64,
    },
    /// `decode` input split into the wrong number of parts.
    #[error("expected {expected} parts, got {actual}")]
    PartCountMismatch {
        /// Number of configured elements.
        expected: usize,
        /// Number of parts the input split into.
        actual: usize,
    },
    /// `decode` input contains a word absent from its element's word list.
    #[error("word '{word}' not found in word list for element {position}")]
    UnknownWord {
        /// The unrecognized word.
        word: String,
        /// Zero-based position of the element whose list was searched.
        position: usize,
    },
}
