//! Person extraction
//!
//! Two passes over the combined text. The first keeps every distinct
//! personal-name tag. The second catches relationship phrases the tagger
//! cannot see ("my mom", "my friend Jo") using [`PERSON_PATTERNS`].

use crate::config::ExtractorConfig;
use crate::lexicon::{PERSON_PATTERNS, RELATIONSHIP_RULES, VALENCE_RULES};
use crate::mentions::distinct_mentions;
use crate::text::{first_match, sentence_context};
use crate::types::{ExtractedPerson, Relationship, Valence};
use pepys_domain::{normalize_identifier, Tag, TaggedToken};
use std::collections::HashSet;
use std::ops::Range;
use tracing::debug;

/// Extract people from `text`
pub(crate) fn extract_people(
    text: &str,
    sentences: &[Range<usize>],
    entity_tags: &[TaggedToken],
    config: &ExtractorConfig,
) -> Vec<ExtractedPerson> {
    let (mentions, tagged) = distinct_mentions(
        text,
        sentences,
        entity_tags,
        &Tag::PersonalName,
        config.context_max_chars,
    );

    let mut people: Vec<ExtractedPerson> = mentions
        .into_iter()
        .map(|mention| {
            let (valence, relationship) = match mention.context.as_deref() {
                Some(context) => (infer_valence(context), infer_relationship(context)),
                None => (None, None),
            };
            ExtractedPerson {
                name: mention.name,
                identifier: mention.identifier,
                context: mention.context,
                valence,
                relationship,
            }
        })
        .collect();
    let tagged_count = people.len();

    people.extend(pattern_people(text, sentences, &tagged, config));

    debug!(
        "Extracted {} tagged and {} pattern people",
        tagged_count,
        people.len() - tagged_count
    );
    people
}

/// People found by relationship phrases, skipping names already tagged
fn pattern_people(
    text: &str,
    sentences: &[Range<usize>],
    tagged: &HashSet<String>,
    config: &ExtractorConfig,
) -> Vec<ExtractedPerson> {
    let mut matched = HashSet::new();
    let mut people = Vec::new();

    for pattern in PERSON_PATTERNS.iter() {
        for captures in pattern.regex.captures_iter(text) {
            let Some(whole) = captures.get(0) else {
                continue;
            };
            // the last group that reads as a name wins, else the whole phrase
            let name = (1..captures.len())
                .rev()
                .filter_map(|i| captures.get(i))
                .map(|group| group.as_str())
                .find(|candidate| looks_like_name(candidate))
                .unwrap_or(whole.as_str());
            let identifier = normalize_identifier(name);
            if tagged.contains(&identifier) {
                continue;
            }
            if config.dedupe_pattern_matches && !matched.insert(identifier.clone()) {
                continue;
            }

            let context = sentence_context(text, sentences, &whole.range(), config.context_max_chars);
            people.push(ExtractedPerson {
                name: name.to_string(),
                identifier,
                valence: context.as_deref().and_then(infer_valence),
                context,
                relationship: Some(pattern.relationship),
            });
        }
    }

    people
}

fn looks_like_name(candidate: &str) -> bool {
    candidate.chars().next().is_some_and(char::is_uppercase) && candidate.chars().count() > 2
}

/// Emotional tone of a sentence, first matching category wins
pub(crate) fn infer_valence(context: &str) -> Option<Valence> {
    first_match(context, VALENCE_RULES)
}

/// Relationship implied by a sentence, first matching category wins
pub(crate) fn infer_relationship(context: &str) -> Option<Relationship> {
    first_match(context, RELATIONSHIP_RULES)
}
