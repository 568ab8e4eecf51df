//! Information display module for periodic-table data
//!
//! This module renders element records, bond records and flat property listings
//! as human-readable tables. It implements the `Display` trait for
//! `PeriodicTable` and provides helper functions used by the command-line tool.

use std::fmt::{self, Display};

use serde_json::Value;
use tabled::{builder::Builder, settings::Style};

use crate::{bonds::BondRecord, connectivity::Bond, table::ElementRecord, table::PeriodicTable};

/// Conversion of records into table rows
///
/// Implementors provide the column headers and one row of string values per
/// instance.
pub trait TableRecord {
    /// Get the column headers for the table
    fn columns() -> Vec<String>;

    /// Convert the instance to a row of the table
    fn to_record(&self) -> Vec<String>;
}

impl Display for PeriodicTable {
    /// Formats all elements as a single table, ordered by atomic number
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let records: Vec<ElementRecord> = self.iter().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(vec!["Periodic Table"]);
        builder.push_record(vec![to_table(&records)]);

        let mut table = builder.build();
        table.with(Style::sharp());
        write!(f, "{table}")
    }
}

/// Converts a collection of TableRecord implementors to a formatted table string
///
/// # Arguments
/// * `records` - A slice of objects implementing TableRecord
///
/// # Returns
/// * A formatted string containing the table representation
pub fn to_table<T: TableRecord>(records: &[T]) -> String {
    let mut builder = Builder::default();
    builder.push_record(T::columns());

    for record in records {
        builder.push_record(record.to_record());
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// Formats `(key, value)` pairs, as produced by
/// [`atomic_properties_flat`](crate::properties::atomic_properties_flat), as a
/// two-column table.
pub fn properties_table(properties: &[(String, Value)]) -> String {
    let mut builder = Builder::default();
    builder.push_record(vec!["Property".to_string(), "Value".to_string()]);

    for (key, value) in properties {
        let value = match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        builder.push_record(vec![key.clone(), value]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

fn optional<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |value| value.to_string())
}

impl TableRecord for ElementRecord {
    fn columns() -> Vec<String> {
        [
            "Z",
            "Symbol",
            "Name",
            "Mass (amu)",
            "Covalent r (pm)",
            "Atomic r (pm)",
            "vdW r (pm)",
            "1st IE (kJ/mol)",
            "Pauling EN",
            "Density (g/cm³)",
        ]
        .map(String::from)
        .to_vec()
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.atomic_number.to_string(),
            self.symbol.clone(),
            self.name.clone(),
            self.atomic_mass.to_string(),
            self.covalent_radius_pm.to_string(),
            optional(self.atomic_radius_pm),
            optional(self.van_der_waals_radius_pm),
            optional(self.first_ionizing_kj_mol),
            optional(self.pauling_negativity),
            optional(self.density_g_per_cm3),
        ]
    }
}

impl TableRecord for BondRecord {
    fn columns() -> Vec<String> {
        ["Elements", "Order", "Length", "Energy"]
            .map(String::from)
            .to_vec()
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            format!("{}-{}", self.elements[0], self.elements[1]),
            optional(self.order),
            format!("{} {}", self.length.value, self.length.units),
            optional(
                self.energy
                    .map(|energy| format!("{} {}", energy.value, energy.units)),
            ),
        ]
    }
}

impl TableRecord for Bond {
    fn columns() -> Vec<String> {
        ["First", "Second", "Distance (ang)", "Order"]
            .map(String::from)
            .to_vec()
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.first.to_string(),
            self.second.to_string(),
            format!("{:.4}", self.distance),
            optional(self.order),
        ]
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::bonds::Quantity;
    use crate::units::Unit;

    #[test]
    fn test_bond_record_row() {
        let bond = BondRecord::new("C", "O", Quantity::new(1.2, Unit::Angstrom)).with_order(2);

        assert_eq!(
            bond.to_record(),
            vec!["C-O", "2", "1.2 ang", "-"]
        );
    }

    #[test]
    fn test_element_table_contains_missing_marker() {
        let table = PeriodicTable::embedded();
        let lawrencium = table.get("Lr").expect("Lr is missing");

        let rendered = to_table(std::slice::from_ref(lawrencium));

        assert!(rendered.contains("Lawrencium"));
        assert!(rendered.contains(" - "));
    }

    #[test]
    fn test_properties_table() {
        let rendered = properties_table(&[
            ("name:H".to_string(), json!("Hydrogen")),
            ("atomic_number:H".to_string(), json!(1)),
        ]);

        assert!(rendered.contains("Hydrogen"));
        assert!(!rendered.contains("\"Hydrogen\""));
        assert!(rendered.contains("atomic_number:H"));
    }
}
