//! Word and sentence boundaries shared by every tagger

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Letters and digits, with internal apostrophes or hyphens ("don't", "co-worker")
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['’\-][\p{L}\p{N}]+)*").expect("word pattern is valid")
});

/// Abbreviations whose trailing period does not end a sentence
const ABBREVIATIONS: &[&str] = &[
    "dr", "mr", "mrs", "ms", "st", "jr", "sr", "prof", "vs", "etc", "e.g", "i.e", "mt",
];

/// Byte ranges of every word in `text`, left to right
pub fn word_spans(text: &str) -> Vec<Range<usize>> {
    WORD_RE.find_iter(text).map(|m| m.range()).collect()
}

/// Split `text` into sentence ranges
///
/// A sentence ends at a run of `.`, `!` or `?` (plus any closing quotes or
/// brackets) followed by whitespace or the end of the text, or at a blank
/// line. Ranges exclude surrounding whitespace and never overlap.
///
/// # Examples
///
/// ```
/// use pepys_tagger::segment::split_sentences;
///
/// let text = "I wonder why. Dr. Lee knows!";
/// let sentences: Vec<&str> = split_sentences(text)
///     .into_iter()
///     .map(|r| &text[r])
///     .collect();
/// assert_eq!(sentences, vec!["I wonder why.", "Dr. Lee knows!"]);
/// ```
pub fn split_sentences(text: &str) -> Vec<Range<usize>> {
    let mut sentences = Vec::new();
    let mut start: Option<usize> = None;
    let mut last_end = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c.is_whitespace() {
            if c == '\n' {
                if let Some(s) = start {
                    let gap = text[i + 1..].trim_start_matches([' ', '\t', '\r']);
                    if gap.starts_with('\n') {
                        sentences.push(s..last_end);
                        start = None;
                    }
                }
            }
            continue;
        }

        let sentence_start = *start.get_or_insert(i);
        last_end = i + c.len_utf8();

        if !matches!(c, '.' | '!' | '?') {
            continue;
        }

        while let Some(&(j, next)) = chars.peek() {
            if matches!(next, '.' | '!' | '?' | '"' | '\'' | ')' | '”' | '’') {
                last_end = j + next.len_utf8();
                chars.next();
            } else {
                break;
            }
        }

        let at_boundary = chars.peek().is_none_or(|&(_, next)| next.is_whitespace());
        if at_boundary && !(c == '.' && ends_with_abbreviation(&text[sentence_start..i])) {
            sentences.push(sentence_start..last_end);
            start = None;
        }
    }

    if let Some(s) = start {
        sentences.push(s..last_end);
    }

    sentences
}

fn ends_with_abbreviation(prefix: &str) -> bool {
    let last_word = prefix
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(['(', '"', '“', '\''])
        .to_lowercase();
    ABBREVIATIONS.contains(&last_word.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(text: &str) -> Vec<&str> {
        split_sentences(text).into_iter().map(|r| &text[r]).collect()
    }

    #[test]
    fn test_basic_split() {
        assert_eq!(
            sentences("I wonder if this will work. I am fine."),
            vec!["I wonder if this will work.", "I am fine."]
        );
    }

    #[test]
    fn test_question_and_exclamation() {
        assert_eq!(
            sentences("Why now?! Because.  Really"),
            vec!["Why now?!", "Because.", "Really"]
        );
    }

    #[test]
    fn test_decimal_is_not_a_boundary() {
        assert_eq!(sentences("It cost 3.50 today. Fine."), vec!["It cost 3.50 today.", "Fine."]);
    }

    #[test]
    fn test_closing_quote_stays_with_sentence() {
        assert_eq!(
            sentences("She said \"no.\" Then left."),
            vec!["She said \"no.\"", "Then left."]
        );
    }

    #[test]
    fn test_blank_line_ends_sentence() {
        assert_eq!(
            sentences("A title without a period\n\nThe body starts here."),
            vec!["A title without a period", "The body starts here."]
        );
    }

    #[test]
    fn test_abbreviation() {
        assert_eq!(
            sentences("I saw Dr. Patel today. It helped."),
            vec!["I saw Dr. Patel today.", "It helped."]
        );
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\n ").is_empty());
    }

    #[test]
    fn test_word_spans() {
        let text = "My co-worker didn't call, ok?";
        let words: Vec<&str> = word_spans(text).into_iter().map(|r| &text[r]).collect();
        assert_eq!(words, vec!["My", "co-worker", "didn't", "call", "ok"]);
    }
}
