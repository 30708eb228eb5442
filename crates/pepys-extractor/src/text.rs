//! Small text helpers shared by the extraction stages

use pepys_domain::tag::ranges_overlap;
use std::ops::Range;

/// Lowercase with typographic apostrophes folded to `'`
pub(crate) fn fold(text: &str) -> String {
    text.to_lowercase().replace('’', "'")
}

/// Space-padded word sequence for whole-word keyword lookup
///
/// Letters, digits, apostrophes and hyphens are kept; everything else
/// separates words. `keyword_text("Feeling fed-up, honestly!")` is
/// `" feeling fed-up honestly "`.
pub(crate) fn keyword_text(text: &str) -> String {
    let folded: String = fold(text)
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '\'' || c == '-' {
                c
            } else {
                ' '
            }
        })
        .collect();
    let mut padded = String::with_capacity(folded.len() + 2);
    padded.push(' ');
    for word in folded.split_whitespace() {
        padded.push_str(word);
        padded.push(' ');
    }
    padded
}

/// True if `keyword` (one or more words) occurs whole in a [`keyword_text`]
pub(crate) fn has_keyword(padded: &str, keyword: &str) -> bool {
    padded.contains(&format!(" {} ", keyword))
}

/// First entry of an ordered rule table with a keyword present in `text`
pub(crate) fn first_match<L: Copy>(text: &str, rules: &[(&[&str], L)]) -> Option<L> {
    let padded = keyword_text(text);
    rules
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| has_keyword(&padded, k)))
        .map(|(_, label)| *label)
}

/// Trimmed text of the first sentence overlapping `range`, truncated
pub(crate) fn sentence_context(
    text: &str,
    sentences: &[Range<usize>],
    range: &Range<usize>,
    max_chars: usize,
) -> Option<String> {
    let sentence = sentences
        .iter()
        .find(|s| ranges_overlap(s, range))
        .and_then(|s| text.get(s.clone()))?
        .trim();
    if sentence.is_empty() {
        return None;
    }
    Some(truncate(sentence, max_chars))
}

/// Cut `text` to `max_chars` characters, the last three being "..."
pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Uppercase the first character
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Trimmed, non-empty sentence texts in order
pub(crate) fn sentence_texts<'a>(text: &'a str, sentences: &[Range<usize>]) -> Vec<&'a str> {
    sentences
        .iter()
        .filter_map(|s| text.get(s.clone()))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
