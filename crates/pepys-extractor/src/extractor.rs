//! Core EntityExtractor implementation

use crate::concepts::extract_concepts;
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::excerpt::select_key_excerpt;
use crate::people::extract_people;
use crate::places::extract_places;
use crate::references::to_entity_references;
use crate::signals::{detect_commitments, detect_questions};
use crate::types::{ExtractedEntities, ExtractionInput};
use pepys_domain::traits::TaggingProvider;
use pepys_domain::{EntityReference, TagScheme};
use std::sync::{Mutex, MutexGuard};
use tracing::{info, warn};

/// The EntityExtractor turns free text into people, places, concepts,
/// questions, commitments and a key excerpt
///
/// The extractor owns its tagging provider. Providers keep per-text cursor
/// state, so every extraction holds the provider lock for its whole
/// duration: concurrent callers sharing one extractor are serialized. Build
/// one extractor per worker for parallel extraction.
#[derive(Debug)]
pub struct EntityExtractor<T: TaggingProvider> {
    tagger: Mutex<T>,
    config: ExtractorConfig,
}

impl<T: TaggingProvider> EntityExtractor<T> {
    /// Create an extractor with the default configuration
    pub fn new(tagger: T) -> Self {
        Self {
            tagger: Mutex::new(tagger),
            config: ExtractorConfig::default(),
        }
    }

    /// Create an extractor with a validated configuration
    pub fn with_config(tagger: T, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate()?;
        Ok(Self {
            tagger: Mutex::new(tagger),
            config,
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Give back the tagging provider
    pub fn into_tagger(self) -> T {
        self.tagger
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Extract entities from `input`
    ///
    /// Never fails: input without content yields [`ExtractedEntities::empty`]
    /// without touching the provider.
    pub fn extract(&self, input: &ExtractionInput) -> ExtractedEntities {
        let text = input.combined_text();
        if text.trim().is_empty() {
            return ExtractedEntities::empty();
        }

        info!("Extracting entities from {} chars", text.len());

        let mut tagger = self.lock_tagger();
        let sentences = tagger.segment_sentences(&text);
        let entity_tags = tagger.tag_tokens(&text, TagScheme::NamedEntity);
        let lexical_tags = tagger.tag_tokens(&text, TagScheme::LexicalClass);
        let lemma_tags = tagger.tag_tokens(&text, TagScheme::Lemma);

        let people = extract_people(&text, &sentences, &entity_tags, &self.config);
        let places = extract_places(&text, &sentences, &entity_tags, &self.config);
        let concepts = extract_concepts(&text, &lexical_tags, &lemma_tags, &self.config);
        let questions = detect_questions(&text, &sentences);
        let commitments = detect_commitments(&text, &sentences);
        let key_excerpt = select_key_excerpt(&mut *tagger, input.excerpt_source(), &self.config);
        drop(tagger);

        info!(
            "Extracted {} people, {} places, {} concepts, {} questions, {} commitments",
            people.len(),
            places.len(),
            concepts.len(),
            questions.len(),
            commitments.len()
        );

        ExtractedEntities {
            people,
            places,
            concepts,
            questions,
            commitments,
            key_excerpt,
        }
    }

    /// Extract entities from a single text
    pub fn extract_text(&self, text: &str) -> ExtractedEntities {
        self.extract(&ExtractionInput::new(text))
    }

    /// Entity references for `entities`, using the configured salience threshold
    pub fn references(&self, entities: &ExtractedEntities) -> Vec<EntityReference> {
        to_entity_references(entities, self.config.min_reference_salience)
    }

    fn lock_tagger(&self) -> MutexGuard<'_, T> {
        self.tagger.lock().unwrap_or_else(|poisoned| {
            warn!("Tagging provider lock was poisoned; recovering");
            poisoned.into_inner()
        })
    }
}
