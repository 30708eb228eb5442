//! Projection of extraction results onto entity references

use crate::types::ExtractedEntities;
use pepys_domain::{EntityReference, EntityType};

/// Concept salience below which no reference is produced, by default
pub const DEFAULT_MIN_REFERENCE_SALIENCE: f64 = 0.1;

/// Flatten extracted entities into references for a record
///
/// People come first, then places, then concepts whose salience is at least
/// `min_concept_salience`, each group in extraction order.
pub fn to_entity_references(
    entities: &ExtractedEntities,
    min_concept_salience: f64,
) -> Vec<EntityReference> {
    let people = entities.people.iter().map(|person| {
        EntityReference::with_identifier(
            EntityType::Person,
            person.identifier.clone(),
            person.name.clone(),
        )
    });
    let places = entities.places.iter().map(|place| {
        EntityReference::with_identifier(
            EntityType::Place,
            place.identifier.clone(),
            place.name.clone(),
        )
    });
    let concepts = entities
        .concepts
        .iter()
        .filter(|concept| concept.salience >= min_concept_salience)
        .map(|concept| {
            EntityReference::with_identifier(
                EntityType::Concept,
                concept.identifier.clone(),
                concept.name.clone(),
            )
        });

    people.chain(places).chain(concepts).collect()
}

impl ExtractedEntities {
    /// Entity references using the default concept salience threshold
    pub fn entity_references(&self) -> Vec<EntityReference> {
        to_entity_references(self, DEFAULT_MIN_REFERENCE_SALIENCE)
    }
}
