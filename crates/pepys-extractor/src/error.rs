//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while configuring the extractor
///
/// Extraction itself never fails; these cover loading and validating
/// [`ExtractorConfig`](crate::ExtractorConfig).
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration rejected by validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(String),

    /// TOML serialization error
    #[error("TOML serialize error: {0}")]
    TomlSerialize(String),

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<toml::de::Error> for ExtractorError {
    fn from(e: toml::de::Error) -> Self {
        ExtractorError::TomlParse(e.to_string())
    }
}

impl From<toml::ser::Error> for ExtractorError {
    fn from(e: toml::ser::Error) -> Self {
        ExtractorError::TomlSerialize(e.to_string())
    }
}

impl From<std::io::Error> for ExtractorError {
    fn from(e: std::io::Error) -> Self {
        ExtractorError::Io(e.to_string())
    }
}
