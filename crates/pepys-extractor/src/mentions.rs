//! Named-entity mentions shared by the person and place extractors

use crate::text::sentence_context;
use pepys_domain::{normalize_identifier, Tag, TaggedToken};
use std::collections::HashSet;
use std::ops::Range;

/// One distinct named-entity mention
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Mention {
    pub name: String,
    pub identifier: String,
    pub range: Range<usize>,
    pub context: Option<String>,
}

/// Distinct mentions carrying `wanted`, in order of first occurrence
///
/// Names shorter than two characters are dropped. Later mentions whose
/// identifier was already seen are skipped, so "Sarah" and "sarah" collapse.
/// Returns the mentions and the set of identifiers seen.
pub(crate) fn distinct_mentions(
    text: &str,
    sentences: &[Range<usize>],
    tokens: &[TaggedToken],
    wanted: &Tag,
    context_max_chars: usize,
) -> (Vec<Mention>, HashSet<String>) {
    let mut seen = HashSet::new();
    let mut mentions = Vec::new();

    for token in tokens.iter().filter(|t| &t.tag == wanted) {
        let Some(name) = token.text(text).map(str::trim) else {
            continue;
        };
        if name.chars().count() < 2 {
            continue;
        }
        let identifier = normalize_identifier(name);
        if !seen.insert(identifier.clone()) {
            continue;
        }
        mentions.push(Mention {
            name: name.to_string(),
            identifier,
            range: token.range.clone(),
            context: sentence_context(text, sentences, &token.range, context_max_chars),
        });
    }

    (mentions, seen)
}
