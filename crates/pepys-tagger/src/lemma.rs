//! Suffix-stripping lemmatizer for English words

/// Irregular forms that suffix rules get wrong
const IRREGULAR: &[(&str, &str)] = &[
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("has", "have"),
    ("had", "have"),
    ("did", "do"),
    ("does", "do"),
    ("done", "do"),
    ("went", "go"),
    ("gone", "go"),
    ("goes", "go"),
    ("felt", "feel"),
    ("thought", "think"),
    ("made", "make"),
    ("said", "say"),
    ("told", "tell"),
    ("knew", "know"),
    ("known", "know"),
    ("saw", "see"),
    ("seen", "see"),
    ("came", "come"),
    ("took", "take"),
    ("taken", "take"),
    ("gave", "give"),
    ("given", "give"),
    ("found", "find"),
    ("left", "leave"),
    ("kept", "keep"),
    ("began", "begin"),
    ("brought", "bring"),
    ("bought", "buy"),
    ("taught", "teach"),
    ("learnt", "learn"),
    ("wrote", "write"),
    ("written", "write"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("understood", "understand"),
    ("children", "child"),
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("lives", "life"),
    ("wives", "wife"),
    ("selves", "self"),
];

/// Stem endings that need their silent `e` restored ("realiz" -> "realize")
const RESTORE_E: &[&str] = &[
    "at", "iz", "iv", "ur", "ag", "us", "dg", "nc", "rg", "ac", "ic", "os", "bl", "pl", "tl",
];

/// Nouns ending in "ing" that are not verb forms
const ING_NOUNS: &[&str] = &[
    "thing", "nothing", "something", "anything", "everything", "morning", "evening",
    "feeling", "meaning", "wedding", "building", "ceiling", "spring", "string", "king",
    "ring", "wing", "sibling", "belonging", "wellbeing", "being",
];

/// Word endings that look plural but are not
const NOT_PLURAL: &[&str] = &["ss", "us", "is", "ous", "ics"];

/// Reduce a word to its base form
///
/// Always returns a lowercase string. Words the rules do not recognize come
/// back unchanged apart from case.
///
/// # Examples
///
/// ```
/// use pepys_tagger::lemma::lemmatize;
///
/// assert_eq!(lemmatize("Realized"), "realize");
/// assert_eq!(lemmatize("stories"), "story");
/// assert_eq!(lemmatize("running"), "run");
/// assert_eq!(lemmatize("felt"), "feel");
/// ```
pub fn lemmatize(word: &str) -> String {
    let lower = word.to_lowercase().replace('’', "'");
    let lower = lower
        .strip_suffix("'s")
        .map(str::to_string)
        .unwrap_or(lower);

    if let Some((_, base)) = IRREGULAR.iter().find(|(form, _)| *form == lower) {
        return (*base).to_string();
    }

    if lower.chars().count() <= 3 || !lower.chars().all(char::is_alphabetic) {
        return lower;
    }

    if let Some(stem) = lower.strip_suffix("ies") {
        return format!("{}y", stem);
    }
    if let Some(stem) = lower.strip_suffix("ied") {
        return format!("{}y", stem);
    }
    if let Some(stem) = lower.strip_suffix("ing") {
        if stem.chars().count() >= 3 && !ING_NOUNS.contains(&lower.as_str()) {
            return restore_stem(stem);
        }
    }
    if let Some(stem) = lower.strip_suffix("ed") {
        if stem.chars().count() >= 3 {
            return restore_stem(stem);
        }
    }
    if let Some(stem) = lower.strip_suffix("es") {
        if ["sh", "ch", "x", "ss", "zz"].iter().any(|s| stem.ends_with(s)) {
            return stem.to_string();
        }
    }
    if lower.ends_with('s') && !NOT_PLURAL.iter().any(|s| lower.ends_with(s)) {
        return lower[..lower.len() - 1].to_string();
    }

    lower
}

/// Undo consonant doubling or restore a dropped `e` after removing a suffix
fn restore_stem(stem: &str) -> String {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n >= 2 && bytes[n - 1] == bytes[n - 2] && !b"aeioulsz".contains(&bytes[n - 1]) {
        return stem[..n - 1].to_string();
    }
    if RESTORE_E.iter().any(|e| stem.ends_with(e)) {
        return format!("{}e", stem);
    }
    stem.to_string()
}
