//! Entity references - the generic projection of extracted entities

use std::fmt;

/// Kind of entity a reference points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityType {
    /// A person mentioned in the text
    Person,

    /// A place mentioned in the text
    Place,

    /// A salient concept or theme
    Concept,

    /// An organization (company, school, team)
    Organization,

    /// A dated or named event
    Event,
}

impl EntityType {
    /// Get the type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Person => "person",
            EntityType::Place => "place",
            EntityType::Concept => "concept",
            EntityType::Organization => "organization",
            EntityType::Event => "event",
        }
    }

    /// Parse a type from its string name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "person" => Some(EntityType::Person),
            "place" => Some(EntityType::Place),
            "concept" => Some(EntityType::Concept),
            "organization" => Some(EntityType::Organization),
            "event" => Some(EntityType::Event),
            _ => None,
        }
    }

    /// All entity types, in declaration order
    pub fn all() -> [EntityType; 5] {
        [
            EntityType::Person,
            EntityType::Place,
            EntityType::Concept,
            EntityType::Organization,
            EntityType::Event,
        ]
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to an entity, suitable for merging into a record store
///
/// The identifier is derived from the display name with
/// [`normalize_identifier`], never generated, so repeated runs over
/// equivalent text produce the same reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityReference {
    /// Kind of entity
    pub entity_type: EntityType,

    /// Normalized identifier
    pub identifier: String,

    /// Human-readable name
    pub display_name: String,
}

impl EntityReference {
    /// Create a reference whose identifier is derived from the display name
    pub fn new(entity_type: EntityType, display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        Self {
            entity_type,
            identifier: normalize_identifier(&display_name),
            display_name,
        }
    }

    /// Create a reference with an identifier that was already derived
    pub fn with_identifier(
        entity_type: EntityType,
        identifier: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            entity_type,
            identifier: identifier.into(),
            display_name: display_name.into(),
        }
    }
}

/// Derive an identifier from display text
///
/// Lowercases the text and joins its whitespace-separated words with
/// hyphens. Two names that differ only in case or spacing collapse to the
/// same identifier.
///
/// # Examples
///
/// ```
/// use pepys_domain::normalize_identifier;
///
/// assert_eq!(normalize_identifier("Sarah"), "sarah");
/// assert_eq!(normalize_identifier("New  York"), "new-york");
/// assert_eq!(normalize_identifier("my Mom"), "my-mom");
/// ```
pub fn normalize_identifier(text: &str) -> String {
    text.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
