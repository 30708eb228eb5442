//! Record module - the unit exchanged with a record store

use crate::entity::{EntityReference, EntityType};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Unique identifier for a record based on UUIDv7
///
/// UUIDv7 keeps identifiers chronologically sortable, which matches the
/// creation-date range queries record stores support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(u128);

impl RecordId {
    /// Generate a new UUIDv7-based RecordId
    ///
    /// # Examples
    ///
    /// ```
    /// use pepys_domain::RecordId;
    ///
    /// let id = RecordId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a RecordId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a RecordId from its UUID string form
    ///
    /// # Examples
    ///
    /// ```
    /// use pepys_domain::RecordId;
    ///
    /// let id = RecordId::new();
    /// let parsed = RecordId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid record id '{}': {}", s, e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// A record handed to a record store
///
/// The payload is opaque to the store; Pepys puts the serialized extraction
/// result there.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Unique identifier
    pub id: RecordId,

    /// Creation time (seconds since Unix epoch)
    pub created_at: u64,

    /// Label of the application that produced the record
    pub origin_app: String,

    /// Entities the record mentions
    pub entities: Vec<EntityReference>,

    /// Opaque payload bytes
    pub payload: Vec<u8>,
}

impl Record {
    /// Create a record stamped with a fresh id and the current time
    pub fn new(
        origin_app: impl Into<String>,
        entities: Vec<EntityReference>,
        payload: Vec<u8>,
    ) -> Self {
        let created_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        Self {
            id: RecordId::new(),
            created_at,
            origin_app: origin_app.into(),
            entities,
            payload,
        }
    }

    /// Override the creation timestamp
    pub fn with_created_at(mut self, created_at: u64) -> Self {
        self.created_at = created_at;
        self
    }

    /// Check whether the record mentions an entity with the given identifier
    pub fn mentions(&self, identifier: &str) -> bool {
        self.entities.iter().any(|e| e.identifier == identifier)
    }

    /// Check whether the record mentions any entity of the given type
    pub fn mentions_type(&self, entity_type: EntityType) -> bool {
        self.entities.iter().any(|e| e.entity_type == entity_type)
    }

    /// Merge another record's content into this one
    ///
    /// References are unioned by `(type, identifier)`, keeping this record's
    /// order and appending new ones. The payload is replaced. The earlier
    /// creation timestamp is kept.
    pub fn merge(&mut self, other: Record) {
        for reference in other.entities {
            let known = self.entities.iter().any(|e| {
                e.entity_type == reference.entity_type && e.identifier == reference.identifier
            });
            if !known {
                self.entities.push(reference);
            }
        }
        self.payload = other.payload;
        self.created_at = self.created_at.min(other.created_at);
    }
}
