//! Pepys Extractor
//!
//! Pulls structured entities out of free-form personal writing.
//!
//! # Overview
//!
//! Given a primary text (and optionally a secondary and tertiary text, such
//! as a prompt response and a follow-up note), the extractor produces one
//! [`ExtractedEntities`] value holding:
//!
//! - **People**, with context sentence, emotional valence and relationship
//! - **Places**, with context sentence
//! - **Concepts**, ranked by frequency and a meaningful-concepts vocabulary
//! - **Questions** and **commitments** the author wrote down
//! - A single **key excerpt**, the most reflective sentence
//!
//! The result projects onto [`pepys_domain::EntityReference`]s for storage
//! alongside a record.
//!
//! # Architecture
//!
//! ```text
//! Text → TaggingProvider → stage extractors → ExtractedEntities → EntityReference
//! ```
//!
//! Tagging is delegated to an injected [`TaggingProvider`](pepys_domain::traits::TaggingProvider).
//! Everything else is a deterministic function of the text, the tags and
//! fixed lexicons. Extraction has no failure mode.
//!
//! # Example Usage
//!
//! ```
//! use pepys_extractor::{EntityExtractor, ExtractionInput};
//! use pepys_tagger::RuleTagger;
//!
//! let extractor = EntityExtractor::new(RuleTagger::new());
//!
//! let input = ExtractionInput::new("I will call my mom tomorrow.");
//! let entities = extractor.extract(&input);
//!
//! assert_eq!(entities.commitments, vec!["I will call my mom tomorrow."]);
//! assert_eq!(entities.people[0].name, "my mom");
//!
//! let references = entities.entity_references();
//! assert_eq!(references[0].identifier, "my-mom");
//! ```

#![warn(missing_docs)]

mod concepts;
mod config;
mod error;
mod excerpt;
mod extractor;
mod lexicon;
mod mentions;
mod people;
mod places;
mod references;
mod signals;
mod text;
mod types;

#[cfg(test)]
mod tests;

pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::EntityExtractor;
pub use references::{to_entity_references, DEFAULT_MIN_REFERENCE_SALIENCE};
pub use types::{
    ExtractedConcept, ExtractedEntities, ExtractedPerson, ExtractedPlace, ExtractionInput,
    Relationship, Valence,
};
