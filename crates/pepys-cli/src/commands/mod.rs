//! Command implementations.

pub mod config;
pub mod extract;
pub mod record;
pub mod refs;

pub use self::config::execute_config;
pub use self::extract::execute_extract;
pub use self::record::execute_record;
pub use self::refs::execute_refs;

use crate::cli::InputArgs;
use crate::error::{CliError, Result};
use pepys_extractor::ExtractionInput;
use std::fs;
use std::io::{self, Read};

/// Build the extraction input from the positional text, `--file` or `--stdin`.
pub fn read_input(args: &InputArgs) -> Result<ExtractionInput> {
    read_input_from(args, io::stdin().lock())
}

fn read_input_from<R: Read>(args: &InputArgs, mut stdin: R) -> Result<ExtractionInput> {
    let primary = if let Some(text) = &args.text {
        text.clone()
    } else if let Some(path) = &args.file {
        fs::read_to_string(path)?
    } else if args.stdin {
        let mut buffer = String::new();
        stdin.read_to_string(&mut buffer)?;
        buffer
    } else {
        return Err(CliError::InvalidInput(
            "No text provided (pass TEXT, --file or --stdin)".to_string(),
        ));
    };

    let mut input = ExtractionInput::new(primary);
    if let Some(secondary) = &args.secondary {
        input = input.with_secondary(secondary.clone());
    }
    if let Some(tertiary) = &args.tertiary {
        input = input.with_tertiary(tertiary.clone());
    }
    Ok(input)
}
