//! Pepys Domain Layer
//!
//! This crate contains the core vocabulary shared by every other Pepys crate.
//! It carries no serialization or runtime dependencies and defines the value
//! objects and trait interfaces that the extraction pipeline, the tagging
//! backends and the record store implementations agree on.
//!
//! ## Key Concepts
//!
//! - **Tagging**: schemes, tags and token ranges produced by a tagging provider
//! - **Entity references**: `{type, identifier, display name}` projections of
//!   extracted people, places and concepts
//! - **Identifiers**: a pure function of display text, so the same logical
//!   entity maps to the same identifier on every run
//! - **Records**: the unit handed to a record store at the system boundary
//!
//! ## Architecture
//!
//! - No serialization crates, no I/O
//! - Trait definitions for every external collaborator
//! - Implementations live in `pepys-tagger` and `pepys-store`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entity;
pub mod record;
pub mod tag;
pub mod traits;

// Re-exports for convenience
pub use entity::{normalize_identifier, EntityReference, EntityType};
pub use record::{Record, RecordId};
pub use tag::{Tag, TagScheme, TaggedToken};
