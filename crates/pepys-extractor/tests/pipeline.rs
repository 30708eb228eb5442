use pepys_extractor::{EntityExtractor, ExtractedEntities, ExtractionInput};
use pepys_tagger::RuleTagger;
use proptest::prelude::*;

const ENTRY: &str = "Had lunch with my best friend Jordan near Central Park. \
    I realize I have been avoiding conflict because it scares me. \
    My therapist said boundaries are a form of kindness. \
    I'm going to practice saying no this week. \
    Why is trust so hard for me?";

#[test]
fn extraction_is_deterministic() {
    let first = EntityExtractor::new(RuleTagger::new()).extract_text(ENTRY);
    let second = EntityExtractor::new(RuleTagger::new()).extract_text(ENTRY);
    assert_eq!(first, second);

    let reused = EntityExtractor::new(RuleTagger::new());
    reused.extract_text("Something unrelated happened in Tokyo.");
    assert_eq!(reused.extract_text(ENTRY), first);
}

#[test]
fn json_output_is_stable_and_self_describing() {
    let extractor = EntityExtractor::new(RuleTagger::new());
    let first = serde_json::to_string(&extractor.extract_text(ENTRY)).unwrap();
    let second = serde_json::to_string(&extractor.extract_text(ENTRY)).unwrap();
    assert_eq!(first, second);

    let value: serde_json::Value = serde_json::from_str(&first).unwrap();
    for key in ["people", "places", "concepts", "questions", "commitments", "key_excerpt"] {
        assert!(value.get(key).is_some(), "missing {}", key);
    }

    let parsed: ExtractedEntities = serde_json::from_str(&first).unwrap();
    assert_eq!(parsed, extractor.extract_text(ENTRY));
}

#[test]
fn journal_entry_signals() {
    let extractor = EntityExtractor::new(RuleTagger::new());
    let entities = extractor.extract(&ExtractionInput::new(ENTRY));

    assert_eq!(entities.questions, vec!["Why is trust so hard for me?"]);
    assert_eq!(
        entities.commitments,
        vec!["I'm going to practice saying no this week."]
    );
    assert_eq!(
        entities.key_excerpt.as_deref(),
        Some("I realize I have been avoiding conflict because it scares me.")
    );

    let people: Vec<&str> = entities.people.iter().map(|p| p.name.as_str()).collect();
    assert!(people.contains(&"Jordan"));
    assert!(people.contains(&"My therapist"));
    assert_eq!(entities.places[0].name, "Central Park");

    let concepts: Vec<&str> = entities.concepts.iter().map(|c| c.identifier.as_str()).collect();
    for term in ["conflict", "boundaries", "kindness", "trust"] {
        assert!(concepts.contains(&term), "missing concept {}", term);
    }
}

proptest! {
    #[test]
    fn salience_stays_in_unit_interval(text in "[A-Za-z ,.?'\n]{0,300}") {
        let extractor = EntityExtractor::new(RuleTagger::new());
        let entities = extractor.extract_text(&text);
        for concept in &entities.concepts {
            prop_assert!((0.0..=1.0).contains(&concept.salience));
        }
        for reference in entities.entity_references() {
            prop_assert!(!reference.identifier.is_empty());
        }
    }

    #[test]
    fn identical_input_gives_identical_output(text in "[A-Za-z ,.?'\n]{0,200}") {
        let a = EntityExtractor::new(RuleTagger::new()).extract_text(&text);
        let b = EntityExtractor::new(RuleTagger::new()).extract_text(&text);
        prop_assert_eq!(a, b);
    }
}
