//! Schema module for validating dataset files.
//!
//! This module validates periodic-table and bond-catalog JSON documents against
//! the JSON schemas derived from [`PeriodicTable`] and [`BondRecord`]. Schema
//! validation is strict: blank strings in place of numbers, which the loaders
//! tolerate, are reported here.

use std::{error::Error, fmt};

use colored::Colorize;
use jsonschema::validator_for;
use schemars::{schema_for, JsonSchema};
use serde_json::Value;

use crate::bonds::BondRecord;
use crate::table::PeriodicTable;

/// Report containing validation results
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ValidationReport {
    /// Whether the document is valid
    pub valid: bool,
    /// List of validation errors if any
    pub errors: Vec<ValidationError>,
}

/// Individual validation error details
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ValidationError {
    /// JSON path where the error occurred
    pub location: String,
    /// Description of the validation error
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n\t└── {}",
            self.location.bold(),
            self.message.bold().red()
        )
    }
}

/// Validates a periodic-table document against its JSON schema
///
/// # Arguments
/// * `content` - JSON string containing an object of element records keyed by symbol
///
/// # Returns
/// * `Result<ValidationReport, Box<dyn Error>>` - Validation report, or an error if
///   the content is not JSON at all
pub fn validate_json(content: &str) -> Result<ValidationReport, Box<dyn Error>> {
    validate_against::<PeriodicTable>(content)
}

/// Validates a bond-catalog document, a JSON array of bond records
pub fn validate_bonds_json(content: &str) -> Result<ValidationReport, Box<dyn Error>> {
    validate_against::<Vec<BondRecord>>(content)
}

fn validate_against<T: JsonSchema>(content: &str) -> Result<ValidationReport, Box<dyn Error>> {
    let json: Value = serde_json::from_str(content)?;
    let schema = serde_json::to_value(schema_for!(T))?;
    let validator = validator_for(&schema).map_err(|error| error.to_string())?;

    let errors: Vec<ValidationError> = validator
        .iter_errors(&json)
        .map(|error| ValidationError {
            location: error.instance_path.to_string(),
            message: error.to_string().replace('"', "'"),
        })
        .collect();

    Ok(ValidationReport {
        valid: errors.is_empty(),
        errors,
    })
}
