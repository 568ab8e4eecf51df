//! Units and unit categories.
//!
//! This module defines the closed set of physical units the library knows about,
//! grouped into [`UnitCategory`]s. Every unit carries a canonical symbol
//! (e.g. `"ang"`, `"eV"`, `"amu"`) which is also its serialized form, so bond and
//! property datasets can reference units directly by symbol.
//!
//! Units are plain keys. All numeric relationships between them live in
//! [`ConversionTable`]s, never in the unit type itself.

use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{conversion::ConversionTable, macros::unit_maps};

/// Kind of physical quantity a unit measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    Length,
    Energy,
    Mass,
}

impl UnitCategory {
    /// All known categories.
    pub const ALL: [UnitCategory; 3] = [
        UnitCategory::Length,
        UnitCategory::Energy,
        UnitCategory::Mass,
    ];

    /// Returns the fixed set of units belonging to this category.
    pub fn units(&self) -> &'static [Unit] {
        match self {
            UnitCategory::Length => &[
                Unit::Angstrom,
                Unit::Bohr,
                Unit::Picometer,
                Unit::Nanometer,
                Unit::Micrometer,
                Unit::Millimeter,
                Unit::Meter,
            ],
            UnitCategory::Energy => &[
                Unit::Hartree,
                Unit::Electronvolt,
                Unit::KjPerMol,
                Unit::KcalPerMol,
                Unit::Wavenumber,
                Unit::Joule,
            ],
            UnitCategory::Mass => &[Unit::Kilogram, Unit::Dalton, Unit::AtomicMassUnit],
        }
    }

    /// Returns the built-in conversion table for this category.
    pub fn conversion_table(&self) -> &'static ConversionTable<Unit> {
        match self {
            UnitCategory::Length => &unit_maps::LENGTH_CONVERSION,
            UnitCategory::Energy => &unit_maps::ENERGY_CONVERSION,
            UnitCategory::Mass => &unit_maps::MASS_CONVERSION,
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnitCategory::Length => "length",
            UnitCategory::Energy => "energy",
            UnitCategory::Mass => "mass",
        };
        write!(f, "{name}")
    }
}

/// A physical unit, serialized by its canonical symbol.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum Unit {
    // Length
    #[serde(rename = "ang", alias = "angstrom")]
    Angstrom,
    #[serde(rename = "bohr")]
    Bohr,
    #[serde(rename = "pm")]
    Picometer,
    #[serde(rename = "nm")]
    Nanometer,
    #[serde(rename = "µm")]
    Micrometer,
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "m")]
    Meter,

    // Energy
    #[serde(rename = "hartree")]
    Hartree,
    #[serde(rename = "eV")]
    Electronvolt,
    #[serde(rename = "kJ/mol")]
    KjPerMol,
    #[serde(rename = "kcal/mol")]
    KcalPerMol,
    #[serde(rename = "cm-1")]
    Wavenumber,
    #[serde(rename = "J")]
    Joule,

    // Mass
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "Da")]
    Dalton,
    #[serde(rename = "amu")]
    AtomicMassUnit,
}

impl Unit {
    /// Every known unit, grouped by category.
    pub const ALL: [Unit; 16] = [
        Unit::Angstrom,
        Unit::Bohr,
        Unit::Picometer,
        Unit::Nanometer,
        Unit::Micrometer,
        Unit::Millimeter,
        Unit::Meter,
        Unit::Hartree,
        Unit::Electronvolt,
        Unit::KjPerMol,
        Unit::KcalPerMol,
        Unit::Wavenumber,
        Unit::Joule,
        Unit::Kilogram,
        Unit::Dalton,
        Unit::AtomicMassUnit,
    ];

    /// Canonical symbol of the unit, identical to its serialized form.
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Angstrom => "ang",
            Unit::Bohr => "bohr",
            Unit::Picometer => "pm",
            Unit::Nanometer => "nm",
            Unit::Micrometer => "µm",
            Unit::Millimeter => "mm",
            Unit::Meter => "m",
            Unit::Hartree => "hartree",
            Unit::Electronvolt => "eV",
            Unit::KjPerMol => "kJ/mol",
            Unit::KcalPerMol => "kcal/mol",
            Unit::Wavenumber => "cm-1",
            Unit::Joule => "J",
            Unit::Kilogram => "kg",
            Unit::Dalton => "Da",
            Unit::AtomicMassUnit => "amu",
        }
    }

    /// Long name of the unit.
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Angstrom => "angstrom",
            Unit::Bohr => "bohr",
            Unit::Picometer => "picometer",
            Unit::Nanometer => "nanometer",
            Unit::Micrometer => "micrometer",
            Unit::Millimeter => "millimeter",
            Unit::Meter => "meter",
            Unit::Hartree => "hartree",
            Unit::Electronvolt => "electronvolt",
            Unit::KjPerMol => "kJ_mol",
            Unit::KcalPerMol => "kcal_mol",
            Unit::Wavenumber => "wavenumber",
            Unit::Joule => "joule",
            Unit::Kilogram => "kilogram",
            Unit::Dalton => "dalton",
            Unit::AtomicMassUnit => "atomicMassUnit",
        }
    }

    /// Category the unit belongs to.
    pub fn category(&self) -> UnitCategory {
        match self {
            Unit::Angstrom
            | Unit::Bohr
            | Unit::Picometer
            | Unit::Nanometer
            | Unit::Micrometer
            | Unit::Millimeter
            | Unit::Meter => UnitCategory::Length,
            Unit::Hartree
            | Unit::Electronvolt
            | Unit::KjPerMol
            | Unit::KcalPerMol
            | Unit::Wavenumber
            | Unit::Joule => UnitCategory::Energy,
            Unit::Kilogram | Unit::Dalton | Unit::AtomicMassUnit => UnitCategory::Mass,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown unit '{0}'")]
pub struct UnknownUnitError(pub String);

/// Looks a unit up by its canonical symbol or long name.
///
/// This is an exact key lookup, not a parser: `"ang"` and `"angstrom"` resolve,
/// `"Angstroms"` or `"1 ang"` do not.
impl FromStr for Unit {
    type Err = UnknownUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .iter()
            .find(|unit| unit.symbol() == s || unit.name() == s)
            .copied()
            .ok_or_else(|| UnknownUnitError(s.to_string()))
    }
}
