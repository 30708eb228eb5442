//! Fixed word lists and rule tables
//!
//! Every table is an ordered list evaluated first-match-wins, so precedence
//! is exactly the declaration order below. All entries are lowercase and use
//! straight apostrophes; callers compare against [`crate::text::fold`]ed text.

use crate::types::{Relationship, Valence};
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Words never counted as concepts
pub const STOP_WORDS: &[&str] = &[
    "about", "after", "again", "also", "back", "because", "been", "before", "being",
    "came", "come", "could", "does", "doing", "done", "down", "even", "ever", "everything",
    "feel", "from", "getting", "goes", "going", "gonna", "have", "having", "into", "just",
    "kind", "know", "like", "made", "make", "maybe", "more", "most", "much", "nothing",
    "only", "other", "over", "really", "said", "something", "sort", "still", "take",
    "than", "that", "their", "them", "then", "there", "these", "they", "thing", "think",
    "this", "those", "time", "today", "tomorrow", "very", "want", "well", "went", "were",
    "what", "when", "where", "which", "while", "with", "would", "yeah", "yesterday",
];

/// Vocabulary of meaningful concepts, boosted when present in the text
pub const MEANINGFUL_CONCEPTS: &[&str] = &[
    // growth
    "growth", "change", "progress", "learning", "healing", "transformation", "becoming",
    "potential", "goals",
    // relationships
    "relationship", "connection", "love", "trust", "family", "friendship", "community",
    "belonging", "intimacy", "support",
    // emotion
    "joy", "gratitude", "fear", "anxiety", "grief", "anger", "peace", "sadness",
    "loneliness", "happiness",
    // values
    "purpose", "meaning", "values", "integrity", "honesty", "kindness", "compassion",
    "faith", "freedom", "balance",
    // challenge
    "challenge", "struggle", "conflict", "failure", "loss", "boundaries", "stress",
    "resilience", "patience", "courage",
    // self-knowledge
    "identity", "self-awareness", "authenticity", "mindfulness", "intuition",
    "confidence", "reflection", "insight", "vulnerability", "acceptance", "forgiveness",
    "wisdom",
];

/// Emotional tone keywords, first matching category wins
pub const VALENCE_RULES: &[(&[&str], Valence)] = &[
    (
        &[
            "grateful", "thankful", "thankfully", "appreciate", "appreciated", "appreciative",
            "appreciating", "blessed", "thanks",
        ],
        Valence::Grateful,
    ),
    (
        &[
            "frustrated", "frustrating", "frustration", "annoyed", "annoying", "irritated",
            "fed up",
        ],
        Valence::Frustrated,
    ),
    (
        &["happy", "joy", "joyful", "delighted", "excited", "fun", "laughed", "glad"],
        Valence::Joyful,
    ),
    (
        &[
            "anxious", "anxiety", "worried", "worrying", "nervous", "scared", "afraid",
            "stressed", "overwhelmed",
        ],
        Valence::Anxious,
    ),
    (
        &[
            "sad", "sadly", "miss", "missed", "missing", "misses", "lonely", "heartbroken",
            "cried", "crying", "grief", "upset",
        ],
        Valence::Sad,
    ),
    (
        &["love", "loved", "loving", "loves", "adore", "cherish", "caring", "close to"],
        Valence::Loving,
    ),
    (&["angry", "mad", "furious", "resent", "resentful", "betrayed"], Valence::Angry),
    (
        &["hope", "hopeful", "hoping", "looking forward", "optimistic", "can't wait"],
        Valence::Hopeful,
    ),
    (&["proud", "accomplished", "impressed", "admire"], Valence::Proud),
    (
        &["confused", "unsure", "uncertain", "conflicted", "torn", "don't know"],
        Valence::Confused,
    ),
];

/// Relationship keywords, first matching category wins
pub const RELATIONSHIP_RULES: &[(&[&str], Relationship)] = &[
    (
        &[
            "mom", "mother", "mum", "mama", "dad", "father", "papa", "parents", "sister",
            "brother", "sibling", "grandma", "grandmother", "grandpa", "grandfather", "aunt",
            "uncle", "cousin", "wife", "husband", "son", "daughter", "family", "kids",
            "stepmother", "stepfather", "stepmom", "stepdad", "stepsister", "stepbrother",
            "mother-in-law", "father-in-law",
        ],
        Relationship::Family,
    ),
    (
        &["friend", "friends", "buddy", "pal", "bestie", "roommate"],
        Relationship::Friend,
    ),
    (
        &[
            "coworker", "co-worker", "colleague", "boss", "manager", "team", "teammate",
            "office", "work", "meeting",
        ],
        Relationship::Colleague,
    ),
    (
        &[
            "therapist", "doctor", "counselor", "coach", "mentor", "lawyer", "teacher", "nurse",
            "dentist",
        ],
        Relationship::Professional,
    ),
    (
        &["neighbor", "neighbour", "church", "community", "volunteer", "club", "congregation", "pastor"],
        Relationship::Community,
    ),
];

/// Phrases that mark a sentence as a commitment
pub const COMMITMENT_PHRASES: &[&str] = &[
    "i want to",
    "i need to",
    "i'm going to",
    "i will",
    "i commit to",
    "i promise",
    "i intend to",
    "my goal is",
    "i'm committed to",
    "i plan to",
    "i should",
    "i must",
];

/// Openings that mark a sentence as a question even without a question mark
pub const QUESTION_LEADS: &[&str] = &["i wonder", "i'm wondering", "i ask myself"];

/// Phrase that marks a sentence as a question anywhere it appears
pub const QUESTION_MARKER: &str = "the question is";

/// Self-reflection markers used by the key excerpt ranker
pub const REFLECTION_MARKERS: &[&str] = &["i realize", "i noticed", "i feel", "i think"];

/// Insight markers used by the key excerpt ranker
pub const INSIGHT_MARKERS: &[&str] = &["because", "which means", "i understand", "now i see"];

/// A relationship-revealing phrase not caught by named-entity tagging
#[derive(Debug)]
pub struct PersonPattern {
    /// Case-insensitive pattern; name groups opt back into case with `(?-i:...)`
    pub regex: Regex,

    /// Relationship assigned to every match
    pub relationship: Relationship,
}

const PERSON_PATTERN_SOURCES: &[(&str, Relationship)] = &[
    (r"\bmy (mom|mother|mama|mum)\b", Relationship::Family),
    (r"\bmy (dad|father|papa)\b", Relationship::Family),
    (r"\bmy (sister|brother)\b", Relationship::Family),
    (r"\bmy (grandma|grandmother|grandpa|grandfather)\b", Relationship::Family),
    (r"\bmy (wife|husband|partner|spouse)\b", Relationship::Family),
    (r"\bmy (son|daughter)\b", Relationship::Family),
    (r"\bmy (aunt|uncle|cousin)\b", Relationship::Family),
    (r"\bmy (?:best )?friend,? ((?-i:[A-Z][a-z]+))", Relationship::Friend),
    (
        r"\bmy (boss|manager|supervisor)\b(?:,? ((?-i:[A-Z][a-z]+)))?",
        Relationship::Colleague,
    ),
    (
        r"\bmy (coworker|co-worker|colleague|teammate)\b(?:,? ((?-i:[A-Z][a-z]+)))?",
        Relationship::Colleague,
    ),
    (r"\bmy (therapist|counselor|coach|mentor)\b", Relationship::Professional),
    (r"\b(?:dr|doctor)\.? ((?-i:[A-Z][a-z]+))", Relationship::Professional),
    (r"\bmy (neighbor|neighbour|pastor)\b", Relationship::Community),
];

/// Ordered person patterns, compiled once per process
pub static PERSON_PATTERNS: LazyLock<Vec<PersonPattern>> = LazyLock::new(|| {
    PERSON_PATTERN_SOURCES
        .iter()
        .map(|(source, relationship)| PersonPattern {
            regex: RegexBuilder::new(source)
                .case_insensitive(true)
                .build()
                .expect("person pattern is valid"),
            relationship: *relationship,
        })
        .collect()
});
