use crate::table::{ElementRecord, PeriodicTable};
use crate::utils::canonical_symbol;
use crate::validation::consistency::{Report, Severity, ValidationResult};

/// Validates the element records of a periodic table
///
/// # Arguments
/// * `table` - The periodic table to validate
/// * `report` - Validation report to add any validation errors to
///
/// # Details
/// For each record, checks that it is stored under its own symbol, that the
/// symbol is in canonical letter case and that the covalent radius is usable
/// for bond inference. Missing optional properties are not reported.
pub fn check_elements(table: &PeriodicTable, report: &mut Report) {
    for (key, record) in table.entries() {
        check_symbol(report, key, record);
        check_covalent_radius(report, key, record);
    }
}

fn check_symbol(report: &mut Report, key: &str, record: &ElementRecord) {
    if record.symbol != key {
        report.add_result(ValidationResult::new(
            format!("/{key}/symbol"),
            format!(
                "Element stored under '{key}' has symbol '{}'.",
                record.symbol
            ),
            Severity::Error,
            Some(key.to_string()),
        ));
    }

    let canonical = canonical_symbol(key);
    if canonical != key {
        report.add_result(ValidationResult::new(
            format!("/{key}"),
            format!("Symbol '{key}' is not in canonical form, expected '{canonical}'."),
            Severity::Error,
            Some(key.to_string()),
        ));
    }
}

fn check_covalent_radius(report: &mut Report, key: &str, record: &ElementRecord) {
    let radius = record.covalent_radius_pm;

    if !radius.is_finite() || radius <= 0.0 {
        report.add_result(ValidationResult::new(
            format!("/{key}/covalent_radius_pm"),
            format!("Element '{key}' has a non-positive covalent radius ({radius} pm)."),
            Severity::Error,
            Some(key.to_string()),
        ));
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn table_from(value: serde_json::Value) -> PeriodicTable {
        serde_json::from_value(value).expect("Failed to parse table")
    }

    #[test]
    fn test_valid_elements() {
        let mut report = Report::new();
        let table = table_from(json!({
            "H": {
                "symbol": "H",
                "name": "Hydrogen",
                "atomic_number": 1,
                "atomic_mass": 1.008,
                "covalent_radius_pm": 31
            },
            "He": {
                "symbol": "He",
                "name": "Helium",
                "atomic_number": 2,
                "atomic_mass": 4.0026,
                "covalent_radius_pm": 28,
                "pauling_negativity": ""
            }
        }));

        check_elements(&table, &mut report);

        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_mismatched_and_lowercase_keys() {
        let mut report = Report::new();
        let table = table_from(json!({
            "Na": {
                "symbol": "K",
                "name": "Potassium",
                "atomic_number": 19,
                "atomic_mass": 39.098,
                "covalent_radius_pm": 203
            },
            "cl": {
                "symbol": "cl",
                "name": "Chlorine",
                "atomic_number": 17,
                "atomic_mass": 35.45,
                "covalent_radius_pm": 102
            }
        }));

        check_elements(&table, &mut report);

        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.filter_results("Na")[0].location(), "/Na/symbol");
        assert_eq!(report.filter_results("cl")[0].location(), "/cl");
    }

    #[test]
    fn test_non_positive_covalent_radius() {
        let mut report = Report::new();
        let table = table_from(json!({
            "Og": {
                "symbol": "Og",
                "name": "Oganesson",
                "atomic_number": 118,
                "atomic_mass": 294.0,
                "covalent_radius_pm": 0
            }
        }));

        check_elements(&table, &mut report);

        assert!(!report.is_valid);
        assert_eq!(report.errors[0].location(), "/Og/covalent_radius_pm");
    }
}
