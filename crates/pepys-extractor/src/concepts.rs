//! Concept extraction by frequency and vocabulary

use crate::config::ExtractorConfig;
use crate::lexicon::{MEANINGFUL_CONCEPTS, STOP_WORDS};
use crate::text::{capitalize, fold};
use crate::types::ExtractedConcept;
use pepys_domain::{normalize_identifier, Tag, TaggedToken};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Candidate tallies kept in first-seen order
#[derive(Debug, Default)]
struct Tally {
    counts: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl Tally {
    fn add(&mut self, candidate: &str, amount: usize) {
        match self.index.get(candidate) {
            Some(&i) => self.counts[i].1 += amount,
            None => {
                self.index.insert(candidate.to_string(), self.counts.len());
                self.counts.push((candidate.to_string(), amount));
            }
        }
    }

    fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }
}

/// Rank recurring nouns and verbs, boosted by the meaningful vocabulary
///
/// Tallies come from noun and verb tokens (by lemma where one is reported)
/// plus `vocabulary_boost` per vocabulary term found anywhere in the text.
/// Of the `max_concepts` highest tallies, a candidate survives if it recurs
/// or is a vocabulary term.
pub(crate) fn extract_concepts(
    text: &str,
    lexical_tags: &[TaggedToken],
    lemma_tags: &[TaggedToken],
    config: &ExtractorConfig,
) -> Vec<ExtractedConcept> {
    let lemmas: HashMap<(usize, usize), &str> = lemma_tags
        .iter()
        .filter_map(|token| match &token.tag {
            Tag::Lemma(lemma) => Some(((token.range.start, token.range.end), lemma.as_str())),
            _ => None,
        })
        .collect();

    let mut tally = Tally::default();
    for token in lexical_tags {
        if !matches!(token.tag, Tag::Noun | Tag::Verb) {
            continue;
        }
        let Some(surface) = token.text(text) else {
            continue;
        };
        let candidate = match lemmas.get(&(token.range.start, token.range.end)) {
            Some(lemma) => lemma.to_lowercase(),
            None => surface.to_lowercase(),
        };
        if candidate.chars().count() < config.min_concept_length
            || STOP_WORDS.contains(&candidate.as_str())
        {
            continue;
        }
        tally.add(&candidate, 1);
    }

    let lower = fold(text);
    let mut vocabulary_hits = HashSet::new();
    for term in MEANINGFUL_CONCEPTS {
        if lower.contains(term) {
            tally.add(term, config.vocabulary_boost);
            vocabulary_hits.insert(*term);
        }
    }

    let total = tally.total();
    if total == 0 {
        return Vec::new();
    }

    let mut ranked = tally.counts;
    // stable: equal tallies keep first-seen order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let concepts: Vec<ExtractedConcept> = ranked
        .into_iter()
        .take(config.max_concepts)
        .filter(|(candidate, count)| *count > 1 || vocabulary_hits.contains(candidate.as_str()))
        .map(|(candidate, count)| ExtractedConcept {
            name: capitalize(&candidate),
            identifier: normalize_identifier(&candidate),
            salience: (count as f64 / total as f64 * 2.0).min(1.0),
        })
        .collect();

    debug!(
        "Kept {} of {} concept candidates ({} vocabulary hits)",
        concepts.len(),
        tally.index.len(),
        vocabulary_hits.len()
    );
    concepts
}
