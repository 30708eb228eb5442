//! Refs command implementation.

use crate::cli::RefsArgs;
use crate::commands::read_input;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use pepys_domain::traits::TaggingProvider;
use pepys_extractor::{to_entity_references, EntityExtractor};

/// Execute the refs command and return the rendered output.
pub fn execute_refs<T: TaggingProvider>(
    args: RefsArgs,
    extractor: &EntityExtractor<T>,
    formatter: &Formatter,
) -> Result<String> {
    let min_salience = match args.min_salience {
        Some(value) if !(0.0..=1.0).contains(&value) => {
            return Err(CliError::InvalidInput(format!(
                "--min-salience must be between 0.0 and 1.0, got {}",
                value
            )));
        }
        Some(value) => value,
        None => extractor.config().min_reference_salience,
    };

    let input = read_input(&args.input)?;
    let entities = extractor.extract(&input);
    let references = to_entity_references(&entities, min_salience);
    formatter.format_references(&references)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::text_args;
    use crate::config::OutputFormat;
    use pepys_tagger::RuleTagger;

    const TEXT: &str = "I visited Paris with Sarah. Paris felt like growth. Growth takes time.";

    fn run(min_salience: Option<f64>) -> Result<String> {
        let extractor = EntityExtractor::new(
            RuleTagger::new().with_person("Sarah").with_place("Paris"),
        );
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let args = RefsArgs {
            input: text_args(TEXT),
            min_salience,
        };
        execute_refs(args, &extractor, &formatter)
    }

    #[test]
    fn test_people_and_places_first() {
        let output = run(None).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(&lines[..2], &["person:sarah", "place:paris"]);
    }

    #[test]
    fn test_threshold_override() {
        let everything = run(Some(0.0)).unwrap();
        let strict = run(Some(1.0)).unwrap();
        assert!(everything.contains("concept:growth"));
        assert!(strict.lines().count() <= everything.lines().count());
        assert!(strict.starts_with("person:sarah"));
    }

    #[test]
    fn test_out_of_range_threshold() {
        assert!(matches!(run(Some(1.5)), Err(CliError::InvalidInput(_))));
    }
}
