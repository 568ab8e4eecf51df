//! Reference datasets compiled into the library.
//!
//! The JSON sources under `data/` are embedded at compile time and parsed once,
//! on first access. They are immutable for the lifetime of the process.

use crate::{bonds::BondRecord, colors::ElementColors, table::PeriodicTable};

/// Raw periodic table dataset, keyed by element symbol.
pub const PERIODIC_TABLE_JSON: &str = include_str!("../data/periodic-table.json");

/// Raw bond catalog.
pub const ELEMENT_BONDS_JSON: &str = include_str!("../data/element-bonds.json");

/// Raw element color palette.
pub const ELEMENT_COLORS_JSON: &str = include_str!("../data/element-colors.json");

lazy_static::lazy_static! {
    pub static ref PERIODIC_TABLE: PeriodicTable = serde_json::from_str(PERIODIC_TABLE_JSON)
        .expect("Embedded periodic table is not valid");

    pub static ref ELEMENT_BONDS: Vec<BondRecord> = serde_json::from_str(ELEMENT_BONDS_JSON)
        .expect("Embedded bond catalog is not valid");

    pub static ref ELEMENT_COLORS: ElementColors = serde_json::from_str(ELEMENT_COLORS_JSON)
        .expect("Embedded color palette is not valid");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_datasets_parse() {
        assert_eq!(PERIODIC_TABLE.len(), 118);
        assert!(!ELEMENT_BONDS.is_empty());
        assert!(ELEMENT_COLORS.len() > 100);
    }

    #[test]
    fn test_embedded_table_is_keyed_by_record_symbol() {
        for record in PERIODIC_TABLE.iter() {
            assert_eq!(PERIODIC_TABLE.get(&record.symbol), Some(record));
        }
    }
}
