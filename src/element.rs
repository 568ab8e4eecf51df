//! Element property facade.
//!
//! [`ChemicalElement`] binds a normalized symbol to its record in a
//! [`PeriodicTable`] and exposes the stored properties, optionally converted to
//! other units through the built-in conversion tables. Properties that are not
//! known for an element, or that cannot be expressed in the requested unit, come
//! back as `None`.

use thiserror::Error;

use crate::{
    colors::ElementColors,
    conversion::convert_units,
    table::{ElementRecord, PeriodicTable},
    units::Unit,
};

/// Fallback atomic radius in Å used by [`atomic_radius_or_default`].
///
/// Keeps lattice sizes derived from atomic radii from collapsing to zero.
pub const DEFAULT_ATOMIC_RADIUS: f64 = 1.0;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElementError {
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),
    #[error("Unknown element: {0}")]
    UnknownElement(String),
}

/// A chemical element resolved against a periodic table.
#[derive(Debug, Clone, Copy)]
pub struct ChemicalElement<'a> {
    record: &'a ElementRecord,
}

impl<'a> ChemicalElement<'a> {
    /// Resolves `symbol` against `table`.
    ///
    /// The symbol is matched exactly first and case-insensitively second, so
    /// `"li"` and `"LI"` both resolve to lithium.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::InvalidSymbol`] if the symbol matches no element.
    pub fn new(table: &'a PeriodicTable, symbol: &str) -> Result<Self, ElementError> {
        let key = table.resolve_symbol(symbol)?;
        let record = table.record(key)?;
        Ok(Self { record })
    }

    /// Underlying record.
    pub fn record(&self) -> &'a ElementRecord {
        self.record
    }

    pub fn symbol(&self) -> &'a str {
        &self.record.symbol
    }

    pub fn name(&self) -> &'a str {
        &self.record.name
    }

    pub fn atomic_number(&self) -> u32 {
        self.record.atomic_number
    }

    /// Atomic mass in amu.
    pub fn mass(&self) -> f64 {
        self.record.atomic_mass
    }

    pub fn mass_in(&self, unit: Unit) -> Option<f64> {
        in_units(Some(self.mass()), Unit::AtomicMassUnit, unit)
    }

    /// Empirical atomic radius in pm.
    pub fn atomic_radius(&self) -> Option<f64> {
        self.record.atomic_radius_pm
    }

    pub fn atomic_radius_in(&self, unit: Unit) -> Option<f64> {
        in_units(self.atomic_radius(), Unit::Picometer, unit)
    }

    /// Van der Waals radius in pm.
    pub fn van_der_waals_radius(&self) -> Option<f64> {
        self.record.van_der_waals_radius_pm
    }

    pub fn van_der_waals_radius_in(&self, unit: Unit) -> Option<f64> {
        in_units(self.van_der_waals_radius(), Unit::Picometer, unit)
    }

    /// Covalent radius in pm.
    pub fn covalent_radius(&self) -> f64 {
        self.record.covalent_radius_pm
    }

    pub fn covalent_radius_in(&self, unit: Unit) -> Option<f64> {
        in_units(Some(self.covalent_radius()), Unit::Picometer, unit)
    }

    /// First ionization potential in eV.
    pub fn ionization_potential(&self) -> Option<f64> {
        in_units(
            self.record.first_ionizing_kj_mol,
            Unit::KjPerMol,
            Unit::Electronvolt,
        )
    }

    pub fn ionization_potential_in(&self, unit: Unit) -> Option<f64> {
        in_units(self.ionization_potential(), Unit::Electronvolt, unit)
    }

    /// Electronegativity on the Pauling scale.
    pub fn electronegativity(&self) -> Option<f64> {
        self.record.pauling_negativity
    }

    /// Density in g/cm³.
    pub fn density(&self) -> Option<f64> {
        self.record.density_g_per_cm3
    }

    /// Display color from `colors`, `#999` if the palette has none.
    pub fn color<'c>(&self, colors: &'c ElementColors) -> &'c str {
        colors.color_by_symbol(self.symbol())
    }
}

fn in_units(value: Option<f64>, from: Unit, to: Unit) -> Option<f64> {
    value.and_then(|value| convert_units(value, from, to).ok())
}

/// Electronegativity of the element with the exact symbol, if known.
pub fn electronegativity(table: &PeriodicTable, symbol: &str) -> Option<f64> {
    table.electronegativity(symbol)
}

/// Atomic radius in Å, falling back to [`DEFAULT_ATOMIC_RADIUS`].
///
/// The fallback applies both to unknown symbols and to elements without a
/// recorded atomic radius.
pub fn atomic_radius_or_default(table: &PeriodicTable, symbol: &str) -> f64 {
    table
        .atomic_radius(symbol)
        .and_then(|radius| convert_units(radius, Unit::Picometer, Unit::Angstrom).ok())
        .unwrap_or(DEFAULT_ATOMIC_RADIUS)
}

/// Whether `symbol` names an element of `table`.
pub fn is_valid_symbol(table: &PeriodicTable, symbol: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        table.contains(symbol)
    } else {
        table.resolve_symbol(symbol).is_ok()
    }
}

/// Whether `name` is the exact name of an element of `table`.
pub fn is_valid_name(table: &PeriodicTable, name: &str) -> bool {
    table.by_name(name).is_some()
}
