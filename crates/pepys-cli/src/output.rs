//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use pepys_domain::{EntityReference, Record};
use pepys_extractor::{ExtractedEntities, ExtractedPerson};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an extraction result.
    pub fn format_entities(&self, entities: &ExtractedEntities) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(entities)?),
            OutputFormat::Table => Ok(self.format_entities_table(entities)),
            OutputFormat::Quiet => Ok(format_entities_quiet(entities)),
        }
    }

    /// Format entity references.
    pub fn format_references(&self, references: &[EntityReference]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = references.iter().map(reference_json).collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => Ok(self.format_references_table(references)),
            OutputFormat::Quiet => Ok(references
                .iter()
                .map(|r| format!("{}:{}", r.entity_type, r.identifier))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a record.
    pub fn format_record(&self, record: &Record) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let payload: serde_json::Value = serde_json::from_slice(&record.payload)?;
                let json = serde_json::json!({
                    "id": record.id.to_string(),
                    "created_at": record.created_at,
                    "origin_app": record.origin_app,
                    "entities": record.entities.iter().map(reference_json).collect::<Vec<_>>(),
                    "payload": payload,
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                let header = format!(
                    "{} {}\n{} {}\n{} {}\n{} {} bytes",
                    self.colorize("Record:", "cyan"),
                    record.id,
                    self.colorize("Created:", "cyan"),
                    record.created_at,
                    self.colorize("Origin:", "cyan"),
                    record.origin_app,
                    self.colorize("Payload:", "cyan"),
                    record.payload.len(),
                );
                Ok(format!(
                    "{}\n{}",
                    header,
                    self.format_references_table(&record.entities)
                ))
            }
            OutputFormat::Quiet => Ok(record.id.to_string()),
        }
    }

    fn format_entities_table(&self, entities: &ExtractedEntities) -> String {
        if entities.is_empty() {
            return self.colorize("Nothing extracted.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Kind", "Value", "Detail"]);

        for person in &entities.people {
            builder.push_record(["person", person.name.as_str(), &person_detail(person)]);
        }
        for place in &entities.places {
            builder.push_record(["place", place.name.as_str(), ""]);
        }
        for concept in &entities.concepts {
            let salience = format!("salience {:.2}", concept.salience);
            builder.push_record(["concept", concept.name.as_str(), &salience]);
        }
        for question in &entities.questions {
            builder.push_record(["question", question.as_str(), ""]);
        }
        for commitment in &entities.commitments {
            builder.push_record(["commitment", commitment.as_str(), ""]);
        }
        if let Some(excerpt) = &entities.key_excerpt {
            builder.push_record(["excerpt", excerpt.as_str(), ""]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    fn format_references_table(&self, references: &[EntityReference]) -> String {
        if references.is_empty() {
            return self.colorize("No entity references.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Type", "Identifier", "Display Name"]);
        for reference in references {
            builder.push_record([
                reference.entity_type.as_str(),
                reference.identifier.as_str(),
                reference.display_name.as_str(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn person_detail(person: &ExtractedPerson) -> String {
    [
        person.relationship.map(|r| r.to_string()),
        person.valence.map(|v| v.to_string()),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(", ")
}

fn format_entities_quiet(entities: &ExtractedEntities) -> String {
    entities
        .people
        .iter()
        .map(|p| p.identifier.as_str())
        .chain(entities.places.iter().map(|p| p.identifier.as_str()))
        .chain(entities.concepts.iter().map(|c| c.identifier.as_str()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn reference_json(reference: &EntityReference) -> serde_json::Value {
    serde_json::json!({
        "type": reference.entity_type.as_str(),
        "identifier": reference.identifier,
        "display_name": reference.display_name,
    })
}
