//! Phrase List
//!
//! The ordered, read-only list of phrases the cycler types out. A
//! [`PhraseList`] can only be built non-empty, so every index the cycler
//! computes resolves to a phrase.
//!
//! Phrases are measured in characters (Unicode scalar values), not bytes.
//! Each [`Phrase`] records its character boundaries up front so that taking
//! a prefix during an animation step is a constant-time slice.

use std::fmt;
use std::sync::Arc;

use crate::error::CyclerError;

/// Phrases shown when no configuration overrides them
pub const DEFAULT_PHRASES: &[&str] = &["Software Developer", "Data Scientist", "Creative Coder"];

/// A single phrase with precomputed character boundaries
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Phrase {
    text: String,
    /// Byte offset of the end of each prefix; `boundaries[n]` ends the
    /// `n`-character prefix, so the slice always has `char_len + 1` entries
    boundaries: Box<[usize]>,
}

impl Phrase {
    /// Create a phrase from any string
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let boundaries = std::iter::once(0)
            .chain(text.char_indices().map(|(at, ch)| at + ch.len_utf8()))
            .collect();
        Self { text, boundaries }
    }

    /// The full phrase text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Whether the phrase has no characters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The first `chars` characters, clamped to the phrase length
    #[must_use]
    pub fn prefix(&self, chars: usize) -> &str {
        let end = self.boundaries[chars.min(self.char_len())];
        &self.text[..end]
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Phrase {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Phrase {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// A validated, non-empty, shareable list of phrases
///
/// Cloning is cheap: the phrases live behind an `Arc`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhraseList {
    phrases: Arc<[Phrase]>,
}

impl PhraseList {
    /// Build a phrase list, rejecting an empty input
    ///
    /// # Errors
    ///
    /// Returns [`CyclerError::EmptyPhraseList`] if `phrases` yields nothing.
    pub fn new<I, T>(phrases: I) -> Result<Self, CyclerError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Phrase>,
    {
        let phrases: Arc<[Phrase]> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(CyclerError::EmptyPhraseList);
        }
        Ok(Self { phrases })
    }

    /// Number of phrases (always at least one)
    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Always `false` for a constructed list
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Phrase at `index`, wrapping around the end of the list
    #[must_use]
    pub fn get(&self, index: usize) -> &Phrase {
        &self.phrases[index % self.phrases.len()]
    }

    /// Index following `index`, wrapping to 0 after the last phrase
    #[must_use]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.phrases.len()
    }

    /// Iterate over the phrases in order
    pub fn iter(&self) -> impl Iterator<Item = &Phrase> {
        self.phrases.iter()
    }
}

impl Default for PhraseList {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().copied().map(Phrase::new).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_prefix_ascii() {
        let phrase = Phrase::new("Hi");
        assert_eq!(phrase.char_len(), 2);
        assert_eq!(phrase.prefix(0), "");
        assert_eq!(phrase.prefix(1), "H");
        assert_eq!(phrase.prefix(2), "Hi");
        // Clamped past the end
        assert_eq!(phrase.prefix(10), "Hi");
    }

    #[test]
    fn test_phrase_prefix_multibyte() {
        let phrase = Phrase::new("Café ☕");
        assert_eq!(phrase.char_len(), 6);
        assert_eq!(phrase.prefix(4), "Café");
        assert_eq!(phrase.prefix(6), "Café ☕");
    }

    #[test]
    fn test_empty_phrase() {
        let phrase = Phrase::new("");
        assert!(phrase.is_empty());
        assert_eq!(phrase.char_len(), 0);
        assert_eq!(phrase.prefix(3), "");
    }

    #[test]
    fn test_list_rejects_empty() {
        let result = PhraseList::new(Vec::<String>::new());
        assert_eq!(result, Err(CyclerError::EmptyPhraseList));
    }

    #[test]
    fn test_list_wraps_indices() {
        let list = PhraseList::new(["A", "B", "C"]).unwrap();
        assert_eq!(list.len(), 3);
        assert!(!list.is_empty());
        assert_eq!(list.next_index(0), 1);
        assert_eq!(list.next_index(2), 0);
        assert_eq!(list.get(4).as_str(), "B");
    }

    #[test]
    fn test_single_phrase_wraps_to_itself() {
        let list = PhraseList::new(["only"]).unwrap();
        assert_eq!(list.next_index(0), 0);
    }

    #[test]
    fn test_default_list() {
        let list = PhraseList::default();
        let texts: Vec<&str> = list.iter().map(Phrase::as_str).collect();
        assert_eq!(texts, DEFAULT_PHRASES);
    }
}
