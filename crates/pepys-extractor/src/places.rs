//! Place extraction

use crate::config::ExtractorConfig;
use crate::mentions::distinct_mentions;
use crate::types::ExtractedPlace;
use pepys_domain::{Tag, TaggedToken};
use std::ops::Range;
use tracing::debug;

/// Distinct place-name tags in order of first mention
pub(crate) fn extract_places(
    text: &str,
    sentences: &[Range<usize>],
    entity_tags: &[TaggedToken],
    config: &ExtractorConfig,
) -> Vec<ExtractedPlace> {
    let (mentions, _) = distinct_mentions(
        text,
        sentences,
        entity_tags,
        &Tag::PlaceName,
        config.context_max_chars,
    );
    debug!("Extracted {} places", mentions.len());

    mentions
        .into_iter()
        .map(|mention| ExtractedPlace {
            name: mention.name,
            identifier: mention.identifier,
            context: mention.context,
        })
        .collect()
}
