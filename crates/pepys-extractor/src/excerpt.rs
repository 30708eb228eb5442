//! Key excerpt ranking

use crate::config::ExtractorConfig;
use crate::lexicon::{INSIGHT_MARKERS, MEANINGFUL_CONCEPTS, REFLECTION_MARKERS};
use crate::text::{fold, sentence_texts};
use pepys_domain::traits::TaggingProvider;
use pepys_domain::{Tag, TagScheme};
use tracing::debug;

/// Pick the most reflective sentence of `source`
///
/// Only sentences within the configured length bounds are scored. The first
/// of equally scored sentences wins, and nothing is returned unless some
/// sentence scores above zero.
pub(crate) fn select_key_excerpt<T: TaggingProvider + ?Sized>(
    tagger: &mut T,
    source: &str,
    config: &ExtractorConfig,
) -> Option<String> {
    let sentences = tagger.segment_sentences(source);

    let mut best: Option<(usize, &str)> = None;
    for sentence in sentence_texts(source, &sentences) {
        let length = sentence.chars().count();
        if length < config.excerpt_min_chars || length > config.excerpt_max_chars {
            continue;
        }
        let score = score_sentence(tagger, sentence, length, config);
        if score > best.map_or(0, |(top, _)| top) {
            best = Some((score, sentence));
        }
    }

    match best {
        Some((score, _)) => debug!("Key excerpt scored {}", score),
        None => debug!("No key excerpt scored above 0"),
    }
    best.map(|(_, sentence)| sentence.to_string())
}

fn score_sentence<T: TaggingProvider + ?Sized>(
    tagger: &mut T,
    sentence: &str,
    length: usize,
    config: &ExtractorConfig,
) -> usize {
    let lower = fold(sentence);
    let mut score = 0;

    score += 2 * MEANINGFUL_CONCEPTS
        .iter()
        .filter(|term| lower.contains(*term))
        .count();
    if REFLECTION_MARKERS.iter().any(|m| lower.contains(m)) {
        score += 3;
    }
    if INSIGHT_MARKERS.iter().any(|m| lower.contains(m)) {
        score += 4;
    }
    if sentence.ends_with('?') {
        score += 2;
    }
    score += 2 * tagger
        .tag_tokens(sentence, TagScheme::NamedEntity)
        .iter()
        .filter(|token| token.tag == Tag::PersonalName)
        .count();
    if (config.excerpt_preferred_min_chars..=config.excerpt_preferred_max_chars).contains(&length) {
        score += 1;
    }

    score
}
