//! Request and result types for entity extraction

use serde::{Deserialize, Serialize};
use std::fmt;

/// Emotional tone attached to a person mention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Valence {
    /// Thankful, appreciative
    Grateful,
    /// Annoyed, fed up
    Frustrated,
    /// Happy, delighted
    Joyful,
    /// Worried, nervous
    Anxious,
    /// Missing someone, upset
    Sad,
    /// Affectionate
    Loving,
    /// Angry, resentful
    Angry,
    /// Looking forward
    Hopeful,
    /// Proud, admiring
    Proud,
    /// Unsure, conflicted
    Confused,
}

impl Valence {
    /// Lowercase label, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            Valence::Grateful => "grateful",
            Valence::Frustrated => "frustrated",
            Valence::Joyful => "joyful",
            Valence::Anxious => "anxious",
            Valence::Sad => "sad",
            Valence::Loving => "loving",
            Valence::Angry => "angry",
            Valence::Hopeful => "hopeful",
            Valence::Proud => "proud",
            Valence::Confused => "confused",
        }
    }
}

impl fmt::Display for Valence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the author relates to a person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    /// Parents, siblings, partners, children, relatives
    Family,
    /// Friends
    Friend,
    /// People from work
    Colleague,
    /// Therapists, doctors, coaches and similar
    Professional,
    /// Neighbours, congregations, clubs
    Community,
}

impl Relationship {
    /// Lowercase label, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::Family => "family",
            Relationship::Friend => "friend",
            Relationship::Colleague => "colleague",
            Relationship::Professional => "professional",
            Relationship::Community => "community",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A person mentioned in the text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedPerson {
    /// Name as written, or the relationship phrase ("my mom")
    pub name: String,

    /// Normalized identifier
    pub identifier: String,

    /// Sentence the person was first mentioned in
    pub context: Option<String>,

    /// Emotional tone of that sentence
    pub valence: Option<Valence>,

    /// Relationship to the author
    pub relationship: Option<Relationship>,
}

/// A place mentioned in the text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedPlace {
    /// Name as written
    pub name: String,

    /// Normalized identifier
    pub identifier: String,

    /// Sentence the place was first mentioned in
    pub context: Option<String>,
}

/// A recurring or meaningful concept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedConcept {
    /// Capitalized base form
    pub name: String,

    /// Normalized identifier
    pub identifier: String,

    /// Relative weight within this text, in [0, 1]
    pub salience: f64,
}

/// Everything extracted from one input
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtractedEntities {
    /// People, named-entity hits first, then relationship phrases
    pub people: Vec<ExtractedPerson>,

    /// Places in order of first mention
    pub places: Vec<ExtractedPlace>,

    /// Concepts by descending salience
    pub concepts: Vec<ExtractedConcept>,

    /// Question sentences in order of occurrence
    pub questions: Vec<String>,

    /// Commitment sentences in order of occurrence
    pub commitments: Vec<String>,

    /// The single most reflective sentence, if any scored
    pub key_excerpt: Option<String>,
}

impl ExtractedEntities {
    /// The canonical empty result
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when nothing at all was extracted
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
            && self.places.is_empty()
            && self.concepts.is_empty()
            && self.questions.is_empty()
            && self.commitments.is_empty()
            && self.key_excerpt.is_none()
    }
}

/// Input to a single extraction
///
/// The primary text is required; secondary and tertiary texts (for example a
/// prompt response and a follow-up note) are appended when present. The key
/// excerpt is chosen from the secondary text when it has content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractionInput {
    /// Main text
    pub primary: String,

    /// Optional second text
    pub secondary: Option<String>,

    /// Optional third text
    pub tertiary: Option<String>,
}

impl ExtractionInput {
    /// Create an input from the primary text
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: None,
            tertiary: None,
        }
    }

    /// Add a secondary text
    pub fn with_secondary(mut self, secondary: impl Into<String>) -> Self {
        self.secondary = Some(secondary.into());
        self
    }

    /// Add a tertiary text
    pub fn with_tertiary(mut self, tertiary: impl Into<String>) -> Self {
        self.tertiary = Some(tertiary.into());
        self
    }

    /// All texts with content, joined by blank lines
    pub fn combined_text(&self) -> String {
        [
            Some(self.primary.as_str()),
            self.secondary.as_deref(),
            self.tertiary.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
    }

    /// Text the key excerpt is chosen from
    pub fn excerpt_source(&self) -> &str {
        match self.secondary.as_deref() {
            Some(secondary) if !secondary.trim().is_empty() => secondary,
            _ => &self.primary,
        }
    }
}

impl From<&str> for ExtractionInput {
    fn from(primary: &str) -> Self {
        Self::new(primary)
    }
}
