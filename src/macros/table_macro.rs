//! Conversion Table Macro Module
//!
//! This module provides the `conversion_table` macro for declaring sparse
//! conversion tables in a compact, nested form.
//!
//! # Macro Behavior
//!
//! Each source unit lists the target units it has a forward coefficient for:
//!
//! ```
//! use periodic_table::{conversion_table, units::Unit};
//!
//! let table = conversion_table! {
//!     Unit::Angstrom => { Unit::Picometer => 100.0 },
//!     Unit::Bohr => {
//!         Unit::Picometer => 52.9177210903,
//!         Unit::Angstrom => 0.529177210903,
//!     },
//! };
//!
//! assert_eq!(table.coefficient(&Unit::Angstrom, &Unit::Picometer), Some(100.0));
//! assert_eq!(table.coefficient(&Unit::Picometer, &Unit::Angstrom), None);
//! ```
//!
//! Only forward entries are stored; the reverse direction is resolved by
//! division at conversion time.

/// Builds a `ConversionTable` from nested `from => { to => coefficient }` entries.
#[macro_export]
macro_rules! conversion_table {
    () => {
        $crate::conversion::ConversionTable::new()
    };

    ($($from:expr => { $($to:expr => $coefficient:expr),+ $(,)? }),+ $(,)?) => {
        {
            let mut table = $crate::conversion::ConversionTable::new();
            $(
                $(
                    table.insert($from, $to, $coefficient);
                )+
            )+
            table
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::conversion::ConversionTable;

    #[test]
    fn test_conversion_table_macro() {
        let table = conversion_table! {
            "hartree" => { "eV" => 27.211386245988, "J" => 4.3597447222071e-18 },
            "eV" => { "J" => 1.602176634e-19 },
        };

        assert_eq!(table.len(), 3);
        assert_eq!(table.coefficient(&"hartree", &"eV"), Some(27.211386245988));
        assert_eq!(table.coefficient(&"eV", &"J"), Some(1.602176634e-19));
        assert_eq!(table.coefficient(&"J", &"eV"), None);
    }

    #[test]
    fn test_conversion_table_macro_empty() {
        let table: ConversionTable<&str> = conversion_table!();
        assert!(table.is_empty());
    }
}
