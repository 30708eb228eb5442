//! Rule-based tagging backend
//!
//! A deterministic stand-in for a statistical tagger. Named entities come
//! from capitalization runs checked against small gazetteers, lexical class
//! from closed-class word lists and suffixes, lemmas from [`lemmatize`].

use crate::lemma::lemmatize;
use crate::segment::{split_sentences, word_spans};
use pepys_domain::traits::TaggingProvider;
use pepys_domain::{Tag, TagScheme, TaggedToken};
use std::collections::HashSet;
use std::ops::Range;
use tracing::debug;

/// Capitalized words that never start a name
const NON_NAMES: &[&str] = &[
    "i", "i'm", "i've", "i'd", "i'll", "the", "a", "an", "my", "our", "your", "his", "her",
    "their", "this", "that", "these", "those", "it", "we", "he", "she", "they", "you", "but",
    "and", "or", "so", "if", "when", "then", "today", "yesterday", "tomorrow", "tonight",
    "dear", "hi", "hello", "thanks", "monday", "tuesday", "wednesday", "thursday", "friday",
    "saturday", "sunday", "january", "february", "march", "april", "may", "june", "july",
    "august", "september", "october", "november", "december", "god", "mom", "dad", "mum",
    "grandma", "grandpa", "christmas", "easter", "thanksgiving", "english", "spanish", "ok",
    "okay", "yes", "no", "maybe", "also", "still", "after", "before", "during", "while",
    "what", "why", "how", "where", "who", "because", "since", "now", "just", "even",
    "dr", "mr", "mrs", "ms", "prof",
];

/// First names recognized even at the start of a sentence
const FIRST_NAMES: &[&str] = &[
    "aaron", "adam", "alex", "alice", "amy", "andrew", "anna", "ben", "beth", "bob",
    "carlos", "carol", "charlie", "chris", "claire", "daniel", "david", "diana", "ella",
    "emily", "emma", "eric", "frank", "grace", "hannah", "henry", "isaac", "jack", "jake",
    "james", "jane", "jason", "jen", "jenny", "jessica", "john", "jordan", "josh", "julia",
    "kate", "katie", "kevin", "laura", "leo", "liam", "lily", "lisa", "lucy", "maria",
    "mark", "mary", "matt", "maya", "mia", "michael", "mike", "nina", "noah", "olivia",
    "omar", "paul", "peter", "priya", "rachel", "raj", "rebecca", "robert", "rosa", "ryan",
    "sam", "sara", "sarah", "sofia", "sophie", "steve", "susan", "tim", "tom", "tyler",
    "victor", "zoe",
];

/// Known places, lowercase, single- or multi-word
const PLACES: &[&str] = &[
    "london", "paris", "berlin", "rome", "madrid", "tokyo", "kyoto", "beijing", "delhi",
    "mumbai", "sydney", "toronto", "vancouver", "chicago", "boston", "seattle", "portland",
    "denver", "austin", "dallas", "houston", "atlanta", "miami", "brooklyn", "manhattan",
    "new york", "los angeles", "san francisco", "san diego", "new orleans", "las vegas",
    "mexico city", "hong kong", "europe", "asia", "africa", "america", "canada", "mexico",
    "france", "germany", "italy", "spain", "japan", "china", "india", "brazil", "ireland",
    "scotland", "england", "australia", "california", "texas", "florida", "oregon",
    "colorado", "minnesota", "central park", "yosemite",
];

/// Prepositions that mark the following capitalized run as a place
const PLACE_CUES: &[&str] = &["in", "from", "near", "visiting", "visited", "around"];

/// Final words that mark a capitalized run as an organization
const ORGANIZATION_SUFFIXES: &[&str] = &[
    "inc", "corp", "company", "university", "college", "school", "hospital", "church",
    "bank", "group", "foundation", "institute", "clinic", "library",
];

/// Function words and other closed-class words
const CLOSED_CLASS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "nor", "so", "yet", "for", "of", "in", "on", "at",
    "to", "from", "by", "with", "about", "into", "over", "under", "after", "before", "than",
    "i", "me", "my", "mine", "myself", "you", "your", "he", "him", "his", "she", "her", "it",
    "its", "we", "us", "our", "they", "them", "their", "this", "that", "these", "those",
    "what", "which", "who", "whom", "whose", "when", "where", "why", "how", "if", "then",
    "not", "no", "yes", "very", "too", "also", "just", "only", "even", "still", "really",
    "much", "many", "more", "most", "some", "any", "all", "each", "every", "other", "such",
    "own", "same", "can", "could", "would", "should", "must", "might", "may", "will",
    "shall", "am", "is", "are", "was", "were", "be", "been", "being", "do", "does", "did",
    "have", "has", "had", "i'm", "i've", "i'll", "i'd", "don't", "didn't", "can't",
    "won't", "it's", "there", "here", "now", "today", "tomorrow", "yesterday", "again",
    "always", "never", "often", "sometimes", "maybe", "because", "while", "though",
    "although", "since", "until", "good", "bad", "new", "old", "big", "small", "little",
    "great", "long", "last", "first", "next", "few", "lot", "well",
];

/// Base forms treated as verbs
const VERBS: &[&str] = &[
    "feel", "think", "know", "want", "need", "try", "make", "take", "give", "tell", "say",
    "talk", "call", "walk", "work", "help", "learn", "grow", "change", "realize", "notice",
    "understand", "remember", "forget", "hope", "wish", "love", "hate", "like", "miss",
    "worry", "wonder", "decide", "plan", "promise", "commit", "write", "read", "listen",
    "speak", "meet", "visit", "leave", "stay", "come", "go", "see", "look", "find", "lose",
    "keep", "start", "stop", "finish", "begin", "run", "sit", "sleep", "cry", "laugh",
    "share", "trust", "forgive", "accept", "struggle", "appreciate", "celebrate", "create",
];

/// Suffixes that usually mark adjectives or adverbs
const MODIFIER_SUFFIXES: &[&str] = &["ly", "ful", "ous", "ive", "able", "ible", "ish", "less", "ical"];

/// Rule-based tagging provider
///
/// Keeps the most recently analyzed text as a cursor, so tagging the same
/// text under several schemes reuses one word and sentence scan. Analyzing a
/// different text replaces the cursor entirely; nothing carries over.
///
/// # Examples
///
/// ```
/// use pepys_tagger::RuleTagger;
/// use pepys_domain::traits::TaggingProvider;
/// use pepys_domain::{Tag, TagScheme};
///
/// let mut tagger = RuleTagger::new();
/// let text = "Yesterday I walked with Sarah in Paris.";
/// let found: Vec<(Tag, &str)> = tagger
///     .tag_tokens(text, TagScheme::NamedEntity)
///     .into_iter()
///     .filter(|t| t.tag != Tag::Other)
///     .map(|t| (t.tag, &text[t.range]))
///     .collect();
/// assert_eq!(found, vec![(Tag::PersonalName, "Sarah"), (Tag::PlaceName, "Paris")]);
/// ```
#[derive(Debug, Default)]
pub struct RuleTagger {
    cursor: Option<Cursor>,
    extra_people: HashSet<String>,
    extra_places: HashSet<String>,
}

/// Text under analysis plus its cached boundaries
#[derive(Debug, Default)]
struct Cursor {
    text: String,
    words: Vec<Range<usize>>,
    sentences: Vec<Range<usize>>,
}

impl RuleTagger {
    /// Create a tagger with the built-in gazetteers
    pub fn new() -> Self {
        Self::default()
    }

    /// Recognize an additional first name
    pub fn with_person(mut self, name: impl AsRef<str>) -> Self {
        self.extra_people.insert(name.as_ref().to_lowercase());
        self
    }

    /// Recognize an additional place (single- or multi-word)
    pub fn with_place(mut self, place: impl AsRef<str>) -> Self {
        self.extra_places.insert(place.as_ref().to_lowercase());
        self
    }

    /// Point the cursor at `text`, rescanning only when the text changed
    fn analyze(&mut self, text: &str) -> &Cursor {
        let stale = self.cursor.as_ref().is_none_or(|c| c.text != text);
        if stale {
            debug!("RuleTagger analyzing new text ({} bytes)", text.len());
            self.cursor = Some(Cursor {
                text: text.to_string(),
                words: word_spans(text),
                sentences: split_sentences(text),
            });
        }
        self.cursor.get_or_insert_with(Cursor::default)
    }

    fn is_first_name(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        FIRST_NAMES.contains(&lower.as_str()) || self.extra_people.contains(&lower)
    }

    fn is_place(&self, phrase: &str) -> bool {
        let lower = phrase.to_lowercase();
        PLACES.contains(&lower.as_str()) || self.extra_places.contains(&lower)
    }

    fn tag_named_entities(&mut self, text: &str) -> Vec<TaggedToken> {
        let (words, sentence_starts) = {
            let cursor = self.analyze(text);
            let starts: HashSet<usize> = cursor.sentences.iter().map(|s| s.start).collect();
            (cursor.words.clone(), starts)
        };

        let mut tokens = Vec::new();
        let mut i = 0;
        while i < words.len() {
            let run = capitalized_run(text, &words, i);
            if run.is_empty() {
                tokens.push(TaggedToken::new(Tag::Other, words[i].clone()));
                i += 1;
                continue;
            }
            i = run.end;

            let mut run_words: Vec<Range<usize>> = words[run.clone()].to_vec();
            let mut sentence_initial = sentence_starts.contains(&run_words[0].start);
            while let Some(first) = run_words.first() {
                let lower = strip_possessive(&text[first.clone()]).to_lowercase();
                let drop = NON_NAMES.contains(&lower.as_str())
                    || (sentence_initial && run_words.len() > 1 && !self.is_first_name(&lower)
                        && !self.is_place(&lower));
                if !drop {
                    break;
                }
                tokens.push(TaggedToken::new(Tag::Other, run_words.remove(0)));
                sentence_initial = false;
            }
            let (Some(first), Some(last)) = (run_words.first(), run_words.last()) else {
                continue;
            };

            let start = first.start;
            let end = start + strip_possessive(&text[start..last.end]).len();
            let phrase = &text[start..end];
            let last_word = strip_possessive(&text[last.clone()]).to_lowercase();
            let previous = previous_word(text, &words, first.start);

            let tag = if self.is_place(phrase) {
                Some(Tag::PlaceName)
            } else if ORGANIZATION_SUFFIXES.contains(&last_word.as_str()) {
                Some(Tag::OrganizationName)
            } else if previous.is_some_and(|p| PLACE_CUES.contains(&p.as_str()))
                && !self.is_first_name(phrase.split_whitespace().next().unwrap_or(phrase))
            {
                Some(Tag::PlaceName)
            } else if sentence_initial && run_words.len() == 1 && !self.is_first_name(phrase) {
                None
            } else {
                Some(Tag::PersonalName)
            };

            match tag {
                Some(tag) => tokens.push(TaggedToken::new(tag, start..end)),
                None => tokens.extend(run_words.into_iter().map(|w| TaggedToken::new(Tag::Other, w))),
            }
        }

        tokens
    }

    fn tag_lexical_classes(&mut self, text: &str) -> Vec<TaggedToken> {
        let words = self.analyze(text).words.clone();
        words
            .into_iter()
            .map(|range| {
                let tag = lexical_class(&text[range.clone()]);
                TaggedToken::new(tag, range)
            })
            .collect()
    }

    fn tag_lemmas(&mut self, text: &str) -> Vec<TaggedToken> {
        let words = self.analyze(text).words.clone();
        words
            .into_iter()
            .map(|range| {
                let lemma = lemmatize(&text[range.clone()]);
                TaggedToken::new(Tag::Lemma(lemma), range)
            })
            .collect()
    }
}

impl TaggingProvider for RuleTagger {
    fn tag_tokens(&mut self, text: &str, scheme: TagScheme) -> Vec<TaggedToken> {
        match scheme {
            TagScheme::NamedEntity => self.tag_named_entities(text),
            TagScheme::LexicalClass => self.tag_lexical_classes(text),
            TagScheme::Lemma => self.tag_lemmas(text),
        }
    }

    fn segment_sentences(&mut self, text: &str) -> Vec<Range<usize>> {
        self.analyze(text).sentences.clone()
    }
}

/// Index range of consecutive capitalized words starting at `i`, joined by single spaces
fn capitalized_run(text: &str, words: &[Range<usize>], i: usize) -> Range<usize> {
    let mut end = i;
    while end < words.len() && starts_uppercase(&text[words[end].clone()]) {
        if end > i && &text[words[end - 1].end..words[end].start] != " " {
            break;
        }
        end += 1;
    }
    i..end
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn strip_possessive(word: &str) -> &str {
    word.strip_suffix("'s")
        .or_else(|| word.strip_suffix("’s"))
        .unwrap_or(word)
}

fn previous_word(text: &str, words: &[Range<usize>], start: usize) -> Option<String> {
    words
        .iter()
        .take_while(|w| w.end <= start)
        .last()
        .map(|w| text[w.clone()].to_lowercase())
}

fn lexical_class(word: &str) -> Tag {
    let lower = word.to_lowercase().replace('’', "'");
    if CLOSED_CLASS.contains(&lower.as_str()) || lower.chars().all(|c| c.is_numeric()) {
        return Tag::Other;
    }
    let lemma = lemmatize(&lower);
    if VERBS.contains(&lemma.as_str()) {
        return Tag::Verb;
    }
    if lower.len() > 4 && MODIFIER_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return Tag::Other;
    }
    if lemma != lower && (lower.ends_with("ing") || lower.ends_with("ed")) {
        return Tag::Verb;
    }
    Tag::Noun
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities(tagger: &mut RuleTagger, text: &str) -> Vec<(Tag, String)> {
        tagger
            .tag_tokens(text, TagScheme::NamedEntity)
            .into_iter()
            .filter(|t| t.tag != Tag::Other)
            .map(|t| (t.tag.clone(), text[t.range].to_string()))
            .collect()
    }

    #[test]
    fn test_person_mid_sentence() {
        let mut tagger = RuleTagger::new();
        let found = entities(&mut tagger, "Today I had coffee with Marguerite Okafor.");
        assert_eq!(found, vec![(Tag::PersonalName, "Marguerite Okafor".to_string())]);
    }

    #[test]
    fn test_sentence_initial_known_name() {
        let mut tagger = RuleTagger::new();
        let found = entities(&mut tagger, "Sarah talked to Sarah and sarah.");
        assert_eq!(
            found,
            vec![
                (Tag::PersonalName, "Sarah".to_string()),
                (Tag::PersonalName, "Sarah".to_string()),
            ]
        );
    }

    #[test]
    fn test_sentence_initial_unknown_word_is_not_a_name() {
        let mut tagger = RuleTagger::new();
        assert!(entities(&mut tagger, "Honestly the day was long.").is_empty());
    }

    #[test]
    fn test_leading_non_name_is_dropped() {
        let mut tagger = RuleTagger::new();
        let found = entities(&mut tagger, "Yesterday Priya called.");
        assert_eq!(found, vec![(Tag::PersonalName, "Priya".to_string())]);
    }

    #[test]
    fn test_places() {
        let mut tagger = RuleTagger::new();
        let found = entities(&mut tagger, "We flew to New York and then stayed in Lisbon.");
        assert_eq!(
            found,
            vec![
                (Tag::PlaceName, "New York".to_string()),
                (Tag::PlaceName, "Lisbon".to_string()),
            ]
        );
    }

    #[test]
    fn test_possessive_is_trimmed() {
        let mut tagger = RuleTagger::new();
        let found = entities(&mut tagger, "I stayed at Jordan's place.");
        assert_eq!(found, vec![(Tag::PersonalName, "Jordan".to_string())]);
    }

    #[test]
    fn test_organization() {
        let mut tagger = RuleTagger::new();
        let found = entities(&mut tagger, "She works at Riverside Hospital now.");
        assert_eq!(found, vec![(Tag::OrganizationName, "Riverside Hospital".to_string())]);
    }

    #[test]
    fn test_custom_gazetteers() {
        let mut tagger = RuleTagger::new().with_person("Ximena").with_place("Ljubljana");
        let found = entities(&mut tagger, "Ximena moved. Ljubljana is lovely.");
        assert_eq!(
            found,
            vec![
                (Tag::PersonalName, "Ximena".to_string()),
                (Tag::PlaceName, "Ljubljana".to_string()),
            ]
        );
    }

    #[test]
    fn test_lexical_classes() {
        let mut tagger = RuleTagger::new();
        let text = "I noticed my growth quickly";
        let tags: Vec<Tag> = tagger
            .tag_tokens(text, TagScheme::LexicalClass)
            .into_iter()
            .map(|t| t.tag)
            .collect();
        assert_eq!(tags, vec![Tag::Other, Tag::Verb, Tag::Other, Tag::Noun, Tag::Other]);
    }

    #[test]
    fn test_lemmas_align_with_words() {
        let mut tagger = RuleTagger::new();
        let text = "Friends realized";
        let lemmas: Vec<Tag> = tagger
            .tag_tokens(text, TagScheme::Lemma)
            .into_iter()
            .map(|t| t.tag)
            .collect();
        assert_eq!(
            lemmas,
            vec![Tag::Lemma("friend".to_string()), Tag::Lemma("realize".to_string())]
        );
    }

    #[test]
    fn test_cursor_does_not_leak_between_texts() {
        let mut tagger = RuleTagger::new();
        let first = tagger.segment_sentences("One. Two. Three.");
        let second = tagger.segment_sentences("Only one here.");
        assert_eq!(first.len(), 3);
        assert_eq!(second, vec![0..14]);
    }
}
