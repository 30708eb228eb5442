//! Record command implementation.

use crate::cli::RecordArgs;
use crate::commands::read_input;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use pepys_domain::traits::{RecordStore, TaggingProvider};
use pepys_domain::Record;
use pepys_extractor::EntityExtractor;
use pepys_store::MemoryStore;
use tracing::info;

/// Execute the record command and return the rendered output.
///
/// The extraction result is serialized as the record payload and its entity
/// references become the record's entities. The record is saved to `store`
/// and read back, so what is printed is what the store holds.
pub fn execute_record<T: TaggingProvider>(
    args: RecordArgs,
    extractor: &EntityExtractor<T>,
    store: &mut MemoryStore,
    formatter: &Formatter,
) -> Result<String> {
    let origin = args.origin.trim();
    if origin.is_empty() {
        return Err(CliError::InvalidInput("--origin must not be empty".to_string()));
    }

    let input = read_input(&args.input)?;
    let entities = extractor.extract(&input);
    let record = Record::new(
        origin,
        extractor.references(&entities),
        serde_json::to_vec(&entities)?,
    );

    let id = store.save(record)?;
    info!("Built record {} from {}", id, origin);
    formatter.format_record(&store.require(id)?)
}
