//! Question and commitment detection

use crate::lexicon::{COMMITMENT_PHRASES, QUESTION_LEADS, QUESTION_MARKER};
use crate::text::{fold, sentence_texts};
use std::ops::Range;

/// Sentences that ask something, in order
///
/// A sentence qualifies if it ends with `?`, opens with a wondering phrase
/// ("I wonder", "I'm wondering", "I ask myself"), or contains "the question is".
pub(crate) fn detect_questions(text: &str, sentences: &[Range<usize>]) -> Vec<String> {
    sentence_texts(text, sentences)
        .into_iter()
        .filter(|sentence| {
            let lower = fold(sentence);
            sentence.ends_with('?')
                || QUESTION_LEADS.iter().any(|lead| lower.starts_with(lead))
                || lower.contains(QUESTION_MARKER)
        })
        .map(str::to_string)
        .collect()
}

/// Sentences that state an intention, in order
pub(crate) fn detect_commitments(text: &str, sentences: &[Range<usize>]) -> Vec<String> {
    sentence_texts(text, sentences)
        .into_iter()
        .filter(|sentence| {
            let lower = fold(sentence);
            COMMITMENT_PHRASES.iter().any(|phrase| lower.contains(phrase))
        })
        .map(str::to_string)
        .collect()
}
