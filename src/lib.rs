//! hrid: human-readable identifiers with reversible encoding.
//!
//! An HRID is a delimiter-joined sequence of words drawn from configurable
//! word lists ("elements"). Beyond random generation, the codec maps an
//! integer index bijectively to an HRID and back via mixed-radix positional
//! encoding, with an optional multiplicative scrambling pass that makes
//! sequential indices produce visually unrelated IDs.
//!
//! # Architecture
//!
//! ```text
//! word lists    (ordered word list per element — digit alphabet & base)
//!     ↓ resolved once at construction
//! mixed radix   (integer ↔ per-element digit sequence)
//!     ↕ wrapped by
//! scrambler     (modular multiplicative bijection over the ID space)
//!     ↕ orchestrated by
//! Hrid          (encode / decode / generate, delimiter-joined words)
//! ```
//!
//! Scrambling is a reversible permutation for de-correlation, not a
//! cipher; it carries no cryptographic guarantees.
//!
//! # Examples
//!
//! Encode a sequential ID and reverse it:
//!
//! ```
//! use hrid::Hrid;
//!
//! let hrid = Hrid::new();
//! let id = hrid.encode(42).unwrap();
//! assert_eq!(hrid.decode(&id).unwrap(), 42);
//! ```
//!
//! Per-namespace scrambling patterns and curated word lists:
//!
//! ```
//! use hrid::Hrid;
//!
//! let hrid = Hrid::builder()
//!     .elements(["adjective", "animal", "number"])
//!     .word_lists(hrid::nice_word_lists())
//!     .scramble_seed("billing-service")
//!     .build()
//!     .unwrap();
//!
//! let id = hrid.encode(7).unwrap();
//! assert_eq!(hrid.decode(&id).unwrap(), 7);
//! ```
//!
//! Random, non-reversible generation:
//!
//! ```
//! use hrid::Hrid;
//!
//! let mut hrid = Hrid::new();
//! let id = hrid.generate();
//! assert_eq!(id.split('-').count(), 4);
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod word_lists;

mod element;
mod hrid;
mod radix;
mod scramble;

pub use crate::element::ElementSpec;
pub use crate::error::HridError;
pub use crate::hrid::{Hrid, HridBuilder, DEFAULT_ELEMENTS};
pub use crate::word_lists::{nice_word_lists, word_lists, WordListMap};
