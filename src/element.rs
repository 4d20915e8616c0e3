//! Element specification and resolution.
//!
//! Each positional slot of an HRID is configured by an [`ElementSpec`]:
//! either a name looked up in a word-list mapping, or a literal list of
//! words. Specs are resolved once at construction into plain word lists;
//! no variant inspection happens afterward.

use crate::word_lists::WordListMap;

/// Specification of one HRID element, prior to resolution.
///
/// Usually built through the `From` conversions rather than the variants
/// directly: `"adjective".into()` names a category, while
/// `vec!["red".to_string(), "blue".to_string()].into()` supplies a
/// literal word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementSpec {
    /// A name resolved against the word-list mapping. A name absent from
    /// the mapping resolves to a single-word literal list, so fixed words
    /// can be embedded in an ID: `["ticket", "adjective", "noun"]`.
    Name(String),
    /// A literal word list, used as-is.
    List(Vec<String>),
}

impl ElementSpec {
    /// Resolves this spec into a word list using the given mapping.
    pub(crate) fn resolve(self, word_lists: &WordListMap) -> Vec<String> {
        match self {
            ElementSpec::Name(name) => match word_lists.get(&name) {
                Some(list) => list.clone(),
                None => vec![name],
            },
            ElementSpec::List(list) => list,
        }
    }
}

impl From<&str> for ElementSpec {
    fn from(name: &str) -> Self {
        ElementSpec::Name(name.to_string())
    }
}

impl From<String> for ElementSpec {
    fn from(name: String) -> Self {
        ElementSpec::Name(name)
    }
}

impl From<Vec<String>> for ElementSpec {
    fn from(list: Vec<String>) -> Self {
        ElementSpec::List(list)
    }
}

impl From<Vec<&str>> for ElementSpec {
    fn from(list: Vec<&str>) -> Self {
        ElementSpec::List(list.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for ElementSpec {
    fn from(list: &[&str]) -> Self {
        ElementSpec::List(list.iter().map(|w| w.to_string()).collect())
    }
}
