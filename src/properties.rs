//! Flat listings of element properties.
//!
//! Properties are addressed by their dataset key (e.g. `atomic_radius_pm`,
//! `pauling_negativity`), which makes this module the dynamic counterpart of
//! the typed getters on [`ChemicalElement`](crate::element::ChemicalElement).

use std::collections::HashMap;

use serde_json::Value;

use crate::table::{ElementRecord, PeriodicTable};

lazy_static::lazy_static! {
    static ref PROPERTY_NAMES: Vec<String> = match serde_json::to_value(ElementRecord::default()) {
        Ok(Value::Object(fields)) => fields.keys().cloned().collect(),
        _ => Vec::new(),
    };
}

/// All valid property keys of an element record.
pub fn property_names() -> &'static [String] {
    &PROPERTY_NAMES
}

/// Whether `property` is a key of an element record.
pub fn is_valid_property(property: &str) -> bool {
    PROPERTY_NAMES.iter().any(|name| name == property)
}

/// Lists selected properties of selected elements as flat `(key, value)` pairs.
///
/// Keys have the form `{name}{separator}{symbol}`, where `name` is the property
/// key, or its replacement from `properties_map` when present. Pairs are ordered
/// by property first and element second, following the input order.
///
/// Unknown symbols and invalid property keys are skipped, as are values that
/// are absent, blank strings or arrays.
///
/// # Arguments
///
/// * `table` - Periodic table to read from
/// * `elements` - Element symbols, matched case-insensitively
/// * `properties` - Property keys
/// * `properties_map` - Optional renaming of property keys in the output
/// * `separator` - Separator between property name and symbol, usually `":"`
///
/// # Examples
///
/// ```
/// use periodic_table::{properties::atomic_properties_flat, table::PeriodicTable};
///
/// let flat = atomic_properties_flat(
///     PeriodicTable::embedded(),
///     &["H", "C"],
///     &["pauling_negativity"],
///     None,
///     ":",
/// );
///
/// assert_eq!(flat[0].0, "pauling_negativity:H");
/// assert_eq!(flat[1].0, "pauling_negativity:C");
/// ```
pub fn atomic_properties_flat(
    table: &PeriodicTable,
    elements: &[&str],
    properties: &[&str],
    properties_map: Option<&HashMap<String, String>>,
    separator: &str,
) -> Vec<(String, Value)> {
    let records: Vec<(&str, Value)> = elements
        .iter()
        .filter_map(|symbol| table.resolve_symbol(symbol).ok())
        .filter_map(|symbol| {
            let record = table.get(symbol)?;
            serde_json::to_value(record).ok().map(|value| (symbol, value))
        })
        .collect();

    let mut flat = Vec::new();

    for property in properties.iter().filter(|p| is_valid_property(p)) {
        let name = properties_map
            .and_then(|map| map.get(*property))
            .map(String::as_str)
            .unwrap_or(*property);

        for (symbol, record) in &records {
            let Some(value) = record.get(*property) else {
                continue;
            };

            if is_listable(value) {
                flat.push((format!("{name}{separator}{symbol}"), value.clone()));
            }
        }
    }

    flat
}

fn is_listable(value: &Value) -> bool {
    match value {
        Value::Null | Value::Array(_) => false,
        Value::String(text) => !text.is_empty(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_property_names() {
        assert!(is_valid_property("atomic_number"));
        assert!(is_valid_property("van_der_Waals_radius_pm"));
        assert!(is_valid_property("density_g_per_cm3"));
        assert!(!is_valid_property("van_der_waals_radius_pm"));
        assert!(!is_valid_property("color"));
    }

    #[test]
    fn test_flat_electronegativity() {
        // Arrange
        let table = PeriodicTable::embedded();

        // Act
        let flat = atomic_properties_flat(table, &["H", "C"], &["pauling_negativity"], None, ":");

        // Assert
        assert_eq!(
            flat,
            vec![
                ("pauling_negativity:H".to_string(), json!(2.2)),
                ("pauling_negativity:C".to_string(), json!(2.55)),
            ]
        );
    }

    #[test]
    fn test_flat_with_renaming_and_missing_values() {
        let table = PeriodicTable::embedded();
        let map = HashMap::from([("density_g_per_cm3".to_string(), "density".to_string())]);

        let flat = atomic_properties_flat(
            table,
            &["Pd", "Ds"],
            &["density_g_per_cm3", "atomic_number"],
            Some(&map),
            ":",
        );

        assert_eq!(
            flat,
            vec![
                ("density:Pd".to_string(), json!(12.02)),
                ("atomic_number:Pd".to_string(), json!(46)),
                ("atomic_number:Ds".to_string(), json!(110)),
            ]
        );
    }

    #[test]
    fn test_flat_skips_invalid_inputs() {
        let table = PeriodicTable::embedded();

        let flat = atomic_properties_flat(table, &["xx", "na"], &["bogus", "name"], None, "/");

        assert_eq!(flat, vec![("name/Na".to_string(), json!("Sodium"))]);
    }
}
