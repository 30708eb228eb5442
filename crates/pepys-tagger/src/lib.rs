//! Pepys Tagging Provider Layer
//!
//! Pluggable tagging backends for the extraction pipeline.
//!
//! # Architecture
//!
//! This crate provides implementations of the `TaggingProvider` trait from
//! `pepys-domain`. The pipeline only sees the trait, so a statistical tagger
//! can replace these without touching extraction logic.
//!
//! # Providers
//!
//! - `MockTagger`: Deterministic tagger driven by a configured vocabulary, for testing
//! - `RuleTagger`: Heuristic rule-based tagger with built-in gazetteers
//!
//! # Examples
//!
//! ```
//! use pepys_tagger::MockTagger;
//! use pepys_domain::traits::TaggingProvider;
//! use pepys_domain::{Tag, TagScheme};
//!
//! let mut tagger = MockTagger::new().with_person("Sarah");
//! let tokens = tagger.tag_tokens("I met Sarah.", TagScheme::NamedEntity);
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(tokens[0].tag, Tag::PersonalName);
//! ```

#![warn(missing_docs)]

pub mod lemma;
pub mod rules;
pub mod segment;

use pepys_domain::traits::TaggingProvider;
use pepys_domain::{Tag, TagScheme, TaggedToken};
use std::collections::HashMap;
use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub use rules::RuleTagger;

/// Mock tagging provider for deterministic testing
///
/// Tags exactly what it is told to: configured names and places are found
/// as case-sensitive whole-word phrases, configured nouns and verbs are
/// matched case-insensitively word by word, and lemmas are only reported for
/// words given one. Sentences are split with [`segment::split_sentences`].
///
/// # Examples
///
/// ```
/// use pepys_tagger::MockTagger;
/// use pepys_domain::traits::TaggingProvider;
/// use pepys_domain::{Tag, TagScheme};
///
/// let mut tagger = MockTagger::new()
///     .with_noun("gardens")
///     .with_lemma("gardens", "garden");
///
/// let classes = tagger.tag_tokens("Two gardens", TagScheme::LexicalClass);
/// assert_eq!(classes[1].tag, Tag::Noun);
///
/// let lemmas = tagger.tag_tokens("Two gardens", TagScheme::Lemma);
/// assert_eq!(lemmas, vec![pepys_domain::TaggedToken::new(Tag::Lemma("garden".into()), 4..11)]);
/// assert_eq!(tagger.call_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTagger {
    entities: Vec<(String, Tag)>,
    lexical: HashMap<String, Tag>,
    lemmas: HashMap<String, String>,
    call_count: Arc<AtomicUsize>,
}

impl MockTagger {
    /// Create a mock tagger that tags nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag every occurrence of `name` as a personal name
    pub fn with_person(mut self, name: impl Into<String>) -> Self {
        self.entities.push((name.into(), Tag::PersonalName));
        self
    }

    /// Tag every occurrence of `place` as a place name
    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.entities.push((place.into(), Tag::PlaceName));
        self
    }

    /// Tag every occurrence of `name` as an organization name
    pub fn with_organization(mut self, name: impl Into<String>) -> Self {
        self.entities.push((name.into(), Tag::OrganizationName));
        self
    }

    /// Tag `word` as a noun wherever it appears
    pub fn with_noun(mut self, word: impl AsRef<str>) -> Self {
        self.lexical.insert(word.as_ref().to_lowercase(), Tag::Noun);
        self
    }

    /// Tag `word` as a verb wherever it appears
    pub fn with_verb(mut self, word: impl AsRef<str>) -> Self {
        self.lexical.insert(word.as_ref().to_lowercase(), Tag::Verb);
        self
    }

    /// Report `lemma` as the base form of `word`
    pub fn with_lemma(mut self, word: impl AsRef<str>, lemma: impl Into<String>) -> Self {
        self.lemmas.insert(word.as_ref().to_lowercase(), lemma.into());
        self
    }

    /// Get the number of provider calls made so far (shared between clones)
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::SeqCst);
    }

    fn tag_entities(&self, text: &str) -> Vec<TaggedToken> {
        let mut hits: Vec<TaggedToken> = self
            .entities
            .iter()
            .flat_map(|(phrase, tag)| {
                find_phrase(text, phrase)
                    .into_iter()
                    .map(move |range| TaggedToken::new(tag.clone(), range))
            })
            .collect();

        // Leftmost first, longest first among equal starts; then drop overlaps
        hits.sort_by(|a, b| {
            a.range
                .start
                .cmp(&b.range.start)
                .then(b.range.end.cmp(&a.range.end))
        });
        let mut accepted: Vec<TaggedToken> = Vec::with_capacity(hits.len());
        for hit in hits {
            if accepted.last().is_none_or(|prev| prev.range.end <= hit.range.start) {
                accepted.push(hit);
            }
        }
        accepted
    }

    fn tag_words(&self, text: &str, scheme: TagScheme) -> Vec<TaggedToken> {
        segment::word_spans(text)
            .into_iter()
            .filter_map(|range| {
                let word = text[range.clone()].to_lowercase();
                match scheme {
                    TagScheme::LexicalClass => {
                        let tag = self.lexical.get(&word).cloned().unwrap_or(Tag::Other);
                        Some(TaggedToken::new(tag, range))
                    }
                    TagScheme::Lemma => self
                        .lemmas
                        .get(&word)
                        .map(|lemma| TaggedToken::new(Tag::Lemma(lemma.clone()), range)),
                    TagScheme::NamedEntity => None,
                }
            })
            .collect()
    }
}

impl TaggingProvider for MockTagger {
    fn tag_tokens(&mut self, text: &str, scheme: TagScheme) -> Vec<TaggedToken> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        match scheme {
            TagScheme::NamedEntity => self.tag_entities(text),
            TagScheme::LexicalClass | TagScheme::Lemma => self.tag_words(text, scheme),
        }
    }

    fn segment_sentences(&mut self, text: &str) -> Vec<Range<usize>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        segment::split_sentences(text)
    }
}

/// Byte ranges of whole-word, case-sensitive occurrences of `phrase`
fn find_phrase(text: &str, phrase: &str) -> Vec<Range<usize>> {
    if phrase.is_empty() {
        return Vec::new();
    }
    text.match_indices(phrase)
        .map(|(start, _)| start..start + phrase.len())
        .filter(|range| {
            let before = text[..range.start].chars().next_back();
            let after = text[range.end..].chars().next();
            !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_tags_configured_names_only() {
        let mut tagger = MockTagger::new().with_person("Sarah");
        let text = "Sarah talked to Sarah and sarah.";
        let ranges: Vec<Range<usize>> = tagger
            .tag_tokens(text, TagScheme::NamedEntity)
            .into_iter()
            .map(|t| t.range)
            .collect();
        assert_eq!(ranges, vec![0..5, 16..21]);
    }

    #[test]
    fn test_mock_whole_words_only() {
        let mut tagger = MockTagger::new().with_place("Rome");
        assert!(tagger.tag_tokens("Romeo left.", TagScheme::NamedEntity).is_empty());
    }

    #[test]
    fn test_mock_longest_match_wins() {
        let mut tagger = MockTagger::new()
            .with_person("Sarah")
            .with_person("Sarah Jane");
        let text = "I saw Sarah Jane.";
        let tokens = tagger.tag_tokens(text, TagScheme::NamedEntity);
        assert_eq!(tokens.len(), 1);
        assert_eq!(&text[tokens[0].range.clone()], "Sarah Jane");
    }

    #[test]
    fn test_mock_lexical_defaults_to_other() {
        let mut tagger = MockTagger::new().with_verb("walked");
        let tags: Vec<Tag> = tagger
            .tag_tokens("We Walked home", TagScheme::LexicalClass)
            .into_iter()
            .map(|t| t.tag)
            .collect();
        assert_eq!(tags, vec![Tag::Other, Tag::Verb, Tag::Other]);
    }

    #[test]
    fn test_mock_call_count() {
        let mut tagger = MockTagger::new();
        let observer = tagger.clone();

        tagger.segment_sentences("One. Two.");
        tagger.tag_tokens("One", TagScheme::Lemma);
        assert_eq!(observer.call_count(), 2);

        observer.reset_call_count();
        assert_eq!(tagger.call_count(), 0);
    }
}
