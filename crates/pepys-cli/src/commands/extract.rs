//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::commands::read_input;
use crate::error::Result;
use crate::output::Formatter;
use pepys_domain::traits::TaggingProvider;
use pepys_extractor::EntityExtractor;
use tracing::debug;

/// Execute the extract command and return the rendered output.
pub fn execute_extract<T: TaggingProvider>(
    args: ExtractArgs,
    extractor: &EntityExtractor<T>,
    formatter: &Formatter,
) -> Result<String> {
    let input = read_input(&args.input)?;
    let entities = extractor.extract(&input);
    debug!(
        "Extracted {} people, {} places, {} concepts",
        entities.people.len(),
        entities.places.len(),
        entities.concepts.len()
    );
    formatter.format_entities(&entities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::text_args;
    use crate::config::OutputFormat;
    use pepys_tagger::RuleTagger;

    #[test]
    fn test_extract_json() {
        let extractor = EntityExtractor::new(RuleTagger::new());
        let formatter = Formatter::new(OutputFormat::Json, false);
        let args = ExtractArgs {
            input: text_args("I will call my mom tomorrow."),
        };

        let output = execute_extract(args, &extractor, &formatter).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["people"][0]["identifier"], "my-mom");
        assert_eq!(value["commitments"][0], "I will call my mom tomorrow.");
    }

    #[test]
    fn test_extract_requires_input() {
        let extractor = EntityExtractor::new(RuleTagger::new());
        let formatter = Formatter::new(OutputFormat::Table, false);
        let mut input = text_args("");
        input.text = None;

        assert!(execute_extract(ExtractArgs { input }, &extractor, &formatter).is_err());
    }
}
