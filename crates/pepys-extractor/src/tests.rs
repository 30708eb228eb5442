//! Scenario tests for the EntityExtractor

#[cfg(test)]
mod tests {
    use crate::{
        EntityExtractor, ExtractedEntities, ExtractionInput, ExtractorConfig, Relationship,
    };
    use pepys_domain::traits::TaggingProvider;
    use pepys_domain::{EntityType, TagScheme, TaggedToken};
    use pepys_tagger::{MockTagger, RuleTagger};
    use std::ops::Range;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::Arc;
    use std::thread;

    const JOURNAL: &str = "Yesterday I walked with Sarah in Paris. \
        I felt grateful because she listened. \
        I want to call my mom more often. \
        What does growth mean to me?";

    #[test]
    fn test_full_journal_entry() {
        let extractor = EntityExtractor::new(RuleTagger::new());
        let entities = extractor.extract_text(JOURNAL);

        let people: Vec<&str> = entities.people.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(people, vec!["Sarah", "my mom"]);
        assert_eq!(
            entities.people[0].context.as_deref(),
            Some("Yesterday I walked with Sarah in Paris.")
        );
        assert_eq!(entities.people[1].relationship, Some(Relationship::Family));

        assert_eq!(entities.places.len(), 1);
        assert_eq!(entities.places[0].identifier, "paris");

        assert_eq!(entities.questions, vec!["What does growth mean to me?"]);
        assert_eq!(entities.commitments, vec!["I want to call my mom more often."]);
        assert_eq!(
            entities.key_excerpt.as_deref(),
            Some("I felt grateful because she listened.")
        );

        let concepts: Vec<&str> = entities.concepts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(concepts, vec!["Growth"]);

        let types: Vec<EntityType> = entities
            .entity_references()
            .iter()
            .map(|r| r.entity_type)
            .collect();
        assert_eq!(
            types,
            vec![
                EntityType::Person,
                EntityType::Person,
                EntityType::Place,
                EntityType::Concept
            ]
        );
    }

    #[test]
    fn test_repeated_name_collapses() {
        let text = "Sarah talked to Sarah and sarah.";

        let mock = EntityExtractor::new(MockTagger::new().with_person("Sarah"));
        let entities = mock.extract_text(text);
        assert_eq!(entities.people.len(), 1);
        assert_eq!(entities.people[0].identifier, "sarah");

        let rules = EntityExtractor::new(RuleTagger::new());
        let entities = rules.extract_text(text);
        assert_eq!(entities.people.len(), 1);
        assert_eq!(entities.people[0].identifier, "sarah");
    }

    #[test]
    fn test_question_detection() {
        let extractor = EntityExtractor::new(MockTagger::new());
        let entities = extractor.extract_text("I wonder if this will work. I am fine.");
        assert_eq!(entities.questions, vec!["I wonder if this will work."]);
        assert!(entities.commitments.is_empty());
    }

    #[test]
    fn test_commitment_with_relationship_phrase() {
        for entities in [
            EntityExtractor::new(MockTagger::new()).extract_text("I will call my mom tomorrow."),
            EntityExtractor::new(RuleTagger::new()).extract_text("I will call my mom tomorrow."),
        ] {
            assert_eq!(entities.commitments, vec!["I will call my mom tomorrow."]);
            assert_eq!(entities.people.len(), 1);
            assert_eq!(entities.people[0].name, "my mom");
            assert_eq!(entities.people[0].relationship, Some(Relationship::Family));
        }
    }

    #[test]
    fn test_key_excerpt_prefers_insight() {
        let extractor = EntityExtractor::new(MockTagger::new());
        let entities = extractor.extract_text(
            "We walked along the river for a while. I stayed quiet because the walk felt long.",
        );
        assert_eq!(
            entities.key_excerpt.as_deref(),
            Some("I stayed quiet because the walk felt long.")
        );
    }

    #[test]
    fn test_key_excerpt_comes_from_secondary() {
        let extractor = EntityExtractor::new(MockTagger::new());
        let input = ExtractionInput::new("I stayed quiet because the walk felt long.")
            .with_secondary("I think the soup was a bit cold today.")
            .with_tertiary("Now I see that it was all because of the rain.");
        let entities = extractor.extract(&input);
        assert_eq!(
            entities.key_excerpt.as_deref(),
            Some("I think the soup was a bit cold today.")
        );
    }

    #[test]
    fn test_secondary_and_tertiary_feed_every_other_stage() {
        let extractor = EntityExtractor::new(MockTagger::new().with_place("Lisbon"));
        let input = ExtractionInput::new("Quiet day.")
            .with_secondary("Why did I go?")
            .with_tertiary("Lisbon was warm. I promise to rest.");
        let entities = extractor.extract(&input);
        assert_eq!(entities.places[0].name, "Lisbon");
        assert_eq!(entities.questions, vec!["Why did I go?"]);
        assert_eq!(entities.commitments, vec!["I promise to rest."]);
    }

    #[test]
    fn test_empty_input_skips_provider() {
        let tagger = MockTagger::new();
        let observer = tagger.clone();
        let extractor = EntityExtractor::new(tagger);

        assert_eq!(extractor.extract_text(""), ExtractedEntities::empty());
        assert_eq!(extractor.extract_text("  \n\t "), ExtractedEntities::empty());
        let blank = ExtractionInput::new(" ").with_secondary("").with_tertiary("\n");
        assert!(extractor.extract(&blank).is_empty());
        assert_eq!(observer.call_count(), 0);
    }

    #[test]
    fn test_provider_calls_per_extraction() {
        let tagger = MockTagger::new();
        let observer = tagger.clone();
        let extractor = EntityExtractor::new(tagger);

        extractor.extract_text("Short.");
        // sentences + three tag schemes + excerpt source sentences
        assert_eq!(observer.call_count(), 5);
    }

    #[test]
    fn test_configured_reference_threshold() {
        let config = ExtractorConfig {
            min_reference_salience: 0.9,
            ..Default::default()
        };
        let extractor = EntityExtractor::with_config(RuleTagger::new(), config).unwrap();
        let entities = extractor.extract_text(JOURNAL);

        assert!(entities.concepts.iter().all(|c| c.salience < 0.9));
        let references = extractor.references(&entities);
        assert!(references.iter().all(|r| r.entity_type != EntityType::Concept));
        assert_eq!(references.len(), 3);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ExtractorConfig {
            max_concepts: 0,
            ..Default::default()
        };
        assert!(EntityExtractor::with_config(MockTagger::new(), config).is_err());
    }

    #[test]
    fn test_shared_extractor_across_threads() {
        let extractor = Arc::new(EntityExtractor::new(RuleTagger::new()));
        let expected = extractor.extract_text(JOURNAL);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let extractor = Arc::clone(&extractor);
                thread::spawn(move || extractor.extract_text(JOURNAL))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    /// Panics on its first call only
    #[derive(Debug, Default)]
    struct FlakyTagger {
        panicked: bool,
    }

    impl TaggingProvider for FlakyTagger {
        fn tag_tokens(&mut self, _text: &str, _scheme: TagScheme) -> Vec<TaggedToken> {
            Vec::new()
        }

        fn segment_sentences(&mut self, text: &str) -> Vec<Range<usize>> {
            if !self.panicked {
                self.panicked = true;
                panic!("tagger failure");
            }
            vec![0..text.len()]
        }
    }

    #[test]
    fn test_poisoned_provider_lock_recovers() {
        let extractor = EntityExtractor::new(FlakyTagger::default());

        let first = catch_unwind(AssertUnwindSafe(|| extractor.extract_text("Why now?")));
        assert!(first.is_err());

        let second = extractor.extract_text("Why now?");
        assert_eq!(second.questions, vec!["Why now?"]);
        assert!(extractor.into_tagger().panicked);
    }
}
