//! Language-tagged string sets.

use indexmap::IndexMap;
use indexmap::map::Iter;
use smol_str::SmolStr;

/// A set of strings, each annotated with the language it is written in.
///
/// One text per language; insertion order is kept so that a set built from a
/// document is reproduced in the same order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LangStringSet {
    entries: IndexMap<SmolStr, String>,
}

impl LangStringSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the text for a language.
    pub fn with(mut self, language: impl Into<SmolStr>, text: impl Into<String>) -> Self {
        self.insert(language, text);
        self
    }

    /// Set the text for a language, returning the previous text if any.
    ///
    /// Replacing an existing language keeps its original position.
    pub fn insert(
        &mut self,
        language: impl Into<SmolStr>,
        text: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(language.into(), text.into())
    }

    /// Text for a language tag (exact match).
    pub fn get(&self, language: &str) -> Option<&str> {
        self.entries.get(language).map(String::as_str)
    }

    /// Remove a language, keeping the order of the remaining entries.
    pub fn remove(&mut self, language: &str) -> Option<String> {
        self.entries.shift_remove(language)
    }

    /// Languages in insertion order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(SmolStr::as_str)
    }

    /// `(language, text)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, SmolStr, String> {
        self.entries.iter()
    }

    /// Number of languages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no language is present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<L, T> FromIterator<(L, T)> for LangStringSet
where
    L: Into<SmolStr>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, T)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(language, text)| (language.into(), text.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LangStringSet {
    type Item = (&'a SmolStr, &'a String);
    type IntoIter = Iter<'a, SmolStr, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
