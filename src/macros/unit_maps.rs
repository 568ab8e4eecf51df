//! Built-in conversion tables, one per unit category.
//!
//! Coefficients follow CODATA 2018 values.

use crate::{conversion::ConversionTable, units::Unit};

lazy_static::lazy_static! {
    pub static ref LENGTH_CONVERSION: ConversionTable<Unit> = conversion_table! {
        Unit::Angstrom => {
            Unit::Picometer => 100.0,
        },
        Unit::Bohr => {
            Unit::Picometer => 52.9177210903,
            Unit::Angstrom => 0.529177210903,
        },
        Unit::Nanometer => {
            Unit::Angstrom => 10.0,
            Unit::Picometer => 1e3,
        },
        Unit::Micrometer => {
            Unit::Nanometer => 1e3,
            Unit::Angstrom => 1e4,
            Unit::Picometer => 1e6,
        },
        Unit::Millimeter => {
            Unit::Micrometer => 1e3,
            Unit::Nanometer => 1e6,
            Unit::Angstrom => 1e7,
        },
        Unit::Meter => {
            Unit::Millimeter => 1e3,
            Unit::Micrometer => 1e6,
            Unit::Nanometer => 1e9,
            Unit::Angstrom => 1e10,
            Unit::Picometer => 1e12,
        },
    };

    pub static ref ENERGY_CONVERSION: ConversionTable<Unit> = conversion_table! {
        Unit::Hartree => {
            Unit::Electronvolt => 27.211386245988,
            Unit::KjPerMol => 2625.4996394799,
            Unit::KcalPerMol => 627.5094740631,
            Unit::Joule => 4.3597447222071e-18,
            Unit::Wavenumber => 219474.6313632,
        },
        Unit::Electronvolt => {
            Unit::KjPerMol => 96.48533212331287,
            Unit::KcalPerMol => 23.06054783062068,
            Unit::Joule => 1.602176634e-19,
        },
    };

    pub static ref MASS_CONVERSION: ConversionTable<Unit> = conversion_table! {
        Unit::AtomicMassUnit => {
            Unit::Kilogram => 1.660539066e-27,
            Unit::Dalton => 1.0,
        },
    };
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::units::UnitCategory;

    #[test]
    fn test_builtin_tables_are_well_formed() {
        for category in UnitCategory::ALL {
            let table = category.conversion_table();
            assert!(table.validate().is_ok(), "{category} table is malformed");

            for unit in table.units() {
                assert_eq!(unit.category(), category);
            }
        }
    }

    #[test]
    fn test_bohr_to_picometer() {
        let result = LENGTH_CONVERSION
            .convert(1.0, &Unit::Bohr, &Unit::Picometer)
            .unwrap();
        assert_relative_eq!(result, 52.9177210903);
    }

    #[test]
    fn test_picometer_to_bohr_uses_reverse_entry() {
        let result = LENGTH_CONVERSION
            .convert(25.0, &Unit::Picometer, &Unit::Bohr)
            .unwrap();
        assert_relative_eq!(result, 0.47243, epsilon = 1e-4);
    }

    #[test]
    fn test_bohr_to_nanometer_is_not_convertible() {
        let result = LENGTH_CONVERSION.convert(1.0, &Unit::Bohr, &Unit::Nanometer);
        assert!(result.is_err());
    }
}
