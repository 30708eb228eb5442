//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Configuration for the Extractor
///
/// Every field has a default, so a TOML document only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Longest context sentence kept on a person or place (characters, ellipsis included)
    pub context_max_chars: usize,

    /// Number of top-tallied concept candidates considered
    pub max_concepts: usize,

    /// Shortest concept candidate accepted (characters)
    pub min_concept_length: usize,

    /// Tally added for each vocabulary term present in the text
    pub vocabulary_boost: usize,

    /// Lowest concept salience projected into entity references
    pub min_reference_salience: f64,

    /// Shortest sentence the key excerpt ranker considers (characters)
    pub excerpt_min_chars: usize,

    /// Longest sentence the key excerpt ranker considers (characters)
    pub excerpt_max_chars: usize,

    /// Lower bound of the length band that earns a bonus point
    pub excerpt_preferred_min_chars: usize,

    /// Upper bound of the length band that earns a bonus point
    pub excerpt_preferred_max_chars: usize,

    /// Collapse repeated relationship-pattern matches into one person
    ///
    /// When false, only names found by named-entity tagging suppress pattern
    /// matches, so "my mom" mentioned twice yields two people.
    pub dedupe_pattern_matches: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            context_max_chars: 200,
            max_concepts: 10,
            min_concept_length: 4,
            vocabulary_boost: 2,
            min_reference_salience: 0.1,
            excerpt_min_chars: 30,
            excerpt_max_chars: 300,
            excerpt_preferred_min_chars: 50,
            excerpt_preferred_max_chars: 150,
            dedupe_pattern_matches: true,
        }
    }
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        let reject = |msg: &str| {
            warn!(reason = msg, "Rejected extractor configuration");
            Err(ExtractorError::Config(msg.to_string()))
        };

        if self.context_max_chars < 4 {
            return reject("context_max_chars must be at least 4");
        }
        if self.max_concepts == 0 {
            return reject("max_concepts must be greater than 0");
        }
        if !(0.0..=1.0).contains(&self.min_reference_salience) {
            return reject("min_reference_salience must be within [0, 1]");
        }
        if self.excerpt_min_chars > self.excerpt_max_chars {
            return reject("excerpt_min_chars cannot exceed excerpt_max_chars");
        }
        if self.excerpt_preferred_min_chars > self.excerpt_preferred_max_chars {
            return reject("excerpt_preferred_min_chars cannot exceed excerpt_preferred_max_chars");
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ExtractorError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }
}
