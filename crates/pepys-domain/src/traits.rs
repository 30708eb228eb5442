//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the extraction pipeline and
//! the infrastructure around it. Implementations live in other crates.

use crate::entity::EntityType;
use crate::record::{Record, RecordId};
use crate::tag::{TagScheme, TaggedToken};
use std::collections::BTreeMap;
use std::ops::Range;

/// Trait for tagging and sentence segmentation
///
/// Implemented by the infrastructure layer (pepys-tagger).
///
/// Methods take `&mut self` because real tagging engines keep the text under
/// analysis as internal cursor state. An instance must therefore only serve
/// one extraction at a time; share one behind a lock or give each worker its
/// own instance.
///
/// Implementations must be deterministic for a given text and scheme, and
/// must not let state from one text leak into a call on another text.
pub trait TaggingProvider {
    /// Tag the tokens of `text` under `scheme`
    ///
    /// Ranges are byte ranges into `text`, in left-to-right order. A hit may
    /// span several words (e.g. a full personal name).
    fn tag_tokens(&mut self, text: &str, scheme: TagScheme) -> Vec<TaggedToken>;

    /// Split `text` into non-overlapping sentence ranges, left to right
    fn segment_sentences(&mut self, text: &str) -> Vec<Range<usize>>;
}

impl<T: TaggingProvider + ?Sized> TaggingProvider for &mut T {
    fn tag_tokens(&mut self, text: &str, scheme: TagScheme) -> Vec<TaggedToken> {
        (**self).tag_tokens(text, scheme)
    }

    fn segment_sentences(&mut self, text: &str) -> Vec<Range<usize>> {
        (**self).segment_sentences(text)
    }
}

impl<T: TaggingProvider + ?Sized> TaggingProvider for Box<T> {
    fn tag_tokens(&mut self, text: &str, scheme: TagScheme) -> Vec<TaggedToken> {
        (**self).tag_tokens(text, scheme)
    }

    fn segment_sentences(&mut self, text: &str) -> Vec<Range<usize>> {
        (**self).segment_sentences(text)
    }
}

/// Trait for storing and retrieving records
///
/// Implemented by the infrastructure layer (pepys-store)
pub trait RecordStore {
    /// Error type for store operations
    type Error;

    /// Save a record, merging into an existing record with the same id
    fn save(&mut self, record: Record) -> Result<RecordId, Self::Error>;

    /// Get a record by ID
    fn get(&self, id: RecordId) -> Result<Option<Record>, Self::Error>;

    /// Query records matching criteria, oldest first
    fn query(&self, filter: &RecordFilter) -> Result<Vec<Record>, Self::Error>;

    /// Delete a record by ID, returning whether it existed
    fn delete(&mut self, id: RecordId) -> Result<bool, Self::Error>;

    /// Delete every record from one origin app, returning how many went
    fn delete_by_origin(&mut self, origin_app: &str) -> Result<usize, Self::Error>;

    /// Count records per origin app
    fn count_by_origin(&self) -> Result<BTreeMap<String, usize>, Self::Error>;
}

/// Query criteria for retrieving records
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Filter by origin app label
    pub origin_app: Option<String>,

    /// Filter by a mentioned entity identifier
    pub entity_identifier: Option<String>,

    /// Filter by a mentioned entity type
    pub entity_type: Option<EntityType>,

    /// Inclusive lower bound on creation time (seconds since epoch)
    pub created_after: Option<u64>,

    /// Inclusive upper bound on creation time (seconds since epoch)
    pub created_before: Option<u64>,

    /// Maximum results to return
    pub limit: Option<usize>,
}

impl RecordFilter {
    /// Check whether a record satisfies every criterion except `limit`
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(origin) = &self.origin_app {
            if &record.origin_app != origin {
                return false;
            }
        }
        if let Some(identifier) = &self.entity_identifier {
            if !record.mentions(identifier) {
                return false;
            }
        }
        if let Some(entity_type) = self.entity_type {
            if !record.mentions_type(entity_type) {
                return false;
            }
        }
        if let Some(after) = self.created_after {
            if record.created_at < after {
                return false;
            }
        }
        if let Some(before) = self.created_before {
            if record.created_at > before {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityReference;

    fn record(origin: &str, created_at: u64, people: &[&str]) -> Record {
        let entities = people
            .iter()
            .map(|p| EntityReference::new(EntityType::Person, *p))
            .collect();
        Record::new(origin, entities, Vec::new()).with_created_at(created_at)
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = RecordFilter::default();
        assert!(filter.matches(&record("journal", 10, &[])));
    }

    #[test]
    fn test_filter_by_origin_and_entity() {
        let filter = RecordFilter {
            origin_app: Some("journal".to_string()),
            entity_identifier: Some("sarah".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&record("journal", 10, &["Sarah"])));
        assert!(!filter.matches(&record("notes", 10, &["Sarah"])));
        assert!(!filter.matches(&record("journal", 10, &["Tom"])));
    }

    #[test]
    fn test_filter_by_date_range_is_inclusive() {
        let filter = RecordFilter {
            created_after: Some(100),
            created_before: Some(200),
            ..Default::default()
        };
        assert!(filter.matches(&record("journal", 100, &[])));
        assert!(filter.matches(&record("journal", 200, &[])));
        assert!(!filter.matches(&record("journal", 99, &[])));
        assert!(!filter.matches(&record("journal", 201, &[])));
    }

    #[test]
    fn test_filter_by_type() {
        let filter = RecordFilter {
            entity_type: Some(EntityType::Person),
            ..Default::default()
        };
        assert!(filter.matches(&record("journal", 1, &["Sarah"])));
        assert!(!filter.matches(&record("journal", 1, &[])));
    }
}
