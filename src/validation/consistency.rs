//! Consistency checks for periodic-table datasets.
//!
//! This module validates a periodic table together with a bond catalog by checking:
//! - Element records against the keys they are stored under
//! - Bond records against the elements of the table
//! - The built-in conversion tables
//!
//! The main entry point is the `check_consistency` function which runs all element
//! and bond checks and returns a `Report` with the results.

use std::fmt;

use colored::Colorize;

use crate::bonds::BondRecord;
use crate::table::PeriodicTable;
use crate::units::UnitCategory;
use crate::validation::bonds::check_bonds;
use crate::validation::elements::check_elements;

/// Checks a periodic table and a bond catalog for consistency.
///
/// # Arguments
///
/// * `table` - The periodic table to check
/// * `bonds` - The bond catalog, checked against `table`
///
/// # Returns
///
/// Returns a `Report` containing the results of the consistency checks.
pub fn check_consistency(table: &PeriodicTable, bonds: &[BondRecord]) -> Report {
    let mut report = Report::new();

    check_elements(table, &mut report);
    check_bonds(table, bonds, &mut report);

    report
}

/// Checks the built-in conversion tables for non-positive coefficients and
/// entries stored in both directions.
pub fn check_conversion_tables() -> Report {
    let mut report = Report::new();

    for category in UnitCategory::ALL {
        if let Err(error) = category.conversion_table().validate() {
            report.add_result(ValidationResult::new(
                format!("/conversion/{category}"),
                error.to_string(),
                Severity::Error,
                None,
            ));
        }
    }

    report
}

/// The `Report` struct is used to store the results of the validation checks.
///
/// The dataset is considered invalid if any validation results have Error severity.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct Report {
    /// Whether the dataset is valid overall. False if any errors were found.
    pub is_valid: bool,
    /// Vector of individual validation results found during checks.
    pub errors: Vec<ValidationResult>,
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

impl Report {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Adds a validation result to the report.
    ///
    /// If the result has Error severity, marks the overall report as invalid.
    pub fn add_result(&mut self, result: ValidationResult) {
        if result.severity == Severity::Error {
            self.is_valid = false;
        }
        self.errors.push(result);
    }

    /// Results attached to the given identifier, usually an element symbol.
    pub fn filter_results(&self, identifier: &str) -> Vec<ValidationResult> {
        self.errors
            .iter()
            .filter(|result| result.identifier.as_deref() == Some(identifier))
            .cloned()
            .collect()
    }

    /// Number of results with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.errors
            .iter()
            .filter(|result| result.severity == severity)
            .count()
    }
}

/// A single validation issue found during checking.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ValidationResult {
    /// JSON pointer path to the location of the validation issue
    location: String,
    /// Human readable description of the validation issue
    message: String,
    /// Severity level of the validation issue
    severity: Severity,
    /// The element symbol the issue relates to, if any
    identifier: Option<String>,
}

impl ValidationResult {
    pub fn new(
        location: String,
        message: String,
        severity: Severity,
        identifier: Option<String>,
    ) -> Self {
        Self {
            location,
            message,
            severity,
            identifier,
        }
    }

    /// JSON pointer path of the issue, e.g. `/C/covalent_radius_pm` or `/bonds/3`.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> &Severity {
        &self.severity
    }

    pub fn identifier(&self) -> &Option<String> {
        &self.identifier
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self.severity {
            Severity::Error => self.message.bold().red(),
            Severity::Warning => self.message.bold().yellow(),
            Severity::Info => self.message.bold().green(),
        };

        let severity = match self.severity {
            Severity::Error => "Error".bold().red(),
            Severity::Warning => "Warning".bold().yellow(),
            Severity::Info => "Info".bold().green(),
        };

        write!(
            f,
            "[{}] {}:\n\t└── {}",
            self.location.bold(),
            severity,
            message
        )
    }
}

/// Severity levels for validation issues.
///
/// - Error: The dataset is invalid and lookups may fail or be wrong
/// - Warning: The dataset is usable but should be reviewed
/// - Info: Informational message
#[derive(Debug, Clone, PartialEq, Copy, serde::Serialize, serde::Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "Error"),
            Severity::Warning => write!(f, "Warning"),
            Severity::Info => write!(f, "Info"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bonds::embedded_bonds;

    #[test]
    fn test_embedded_dataset_is_consistent() {
        let report = check_consistency(PeriodicTable::embedded(), embedded_bonds());

        assert!(report.is_valid, "{:#?}", report.errors);
        assert_eq!(report.count(Severity::Warning), 0);
    }

    #[test]
    fn test_builtin_conversion_tables() {
        let report = check_conversion_tables();

        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_filter_results() {
        let mut report = Report::new();
        report.add_result(ValidationResult::new(
            "/C".to_string(),
            "first".to_string(),
            Severity::Warning,
            Some("C".to_string()),
        ));
        report.add_result(ValidationResult::new(
            "/N".to_string(),
            "second".to_string(),
            Severity::Error,
            Some("N".to_string()),
        ));

        assert!(!report.is_valid);
        assert_eq!(report.filter_results("C").len(), 1);
        assert_eq!(report.filter_results("N")[0].message(), "second");
        assert!(report.filter_results("O").is_empty());
    }
}
