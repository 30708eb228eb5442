//! Tagging vocabulary shared between providers and the pipeline

use std::ops::Range;

/// Category system a provider applies to the tokens of a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagScheme {
    /// Named-entity categories (person, place, organization, other)
    NamedEntity,

    /// Lexical class (noun, verb, other)
    LexicalClass,

    /// Base form of each word
    Lemma,
}

/// A tag assigned to a token under one [`TagScheme`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Personal name (named-entity scheme)
    PersonalName,

    /// Place name (named-entity scheme)
    PlaceName,

    /// Organization name (named-entity scheme)
    OrganizationName,

    /// Noun (lexical-class scheme)
    Noun,

    /// Verb (lexical-class scheme)
    Verb,

    /// Base form of the token (lemma scheme)
    Lemma(String),

    /// Anything the scheme does not single out
    Other,
}

/// A tag together with the byte range of the token it applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    /// The assigned tag
    pub tag: Tag,

    /// Byte range into the tagged text
    pub range: Range<usize>,
}

impl TaggedToken {
    /// Create a new tagged token
    pub fn new(tag: Tag, range: Range<usize>) -> Self {
        Self { tag, range }
    }

    /// Slice the token's surface text out of the text it was tagged from
    ///
    /// Returns `None` if the range does not fall on character boundaries of
    /// `text`, which happens when the token came from a different text.
    pub fn text<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.range.clone())
    }

    /// Check whether this token's range overlaps another range
    pub fn overlaps(&self, other: &Range<usize>) -> bool {
        ranges_overlap(&self.range, other)
    }
}

/// Check whether two half-open byte ranges share at least one byte
pub fn ranges_overlap(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}
