//! The periodic table data source.
//!
//! [`PeriodicTable`] is an immutable, explicitly passed handle over a set of
//! [`ElementRecord`]s keyed by canonical symbol. Every lookup-based API in this
//! crate takes a `&PeriodicTable`, so synthetic datasets can be swapped in for
//! the embedded one (see [`PeriodicTable::embedded`]).

use std::collections::BTreeMap;

use derive_builder::Builder;
use itertools::Itertools;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{data, element::ElementError, utils};

/// Reference data for a single chemical element.
///
/// Radii are stored in picometers, ionization energy in kJ/mol and mass in amu,
/// as in the source dataset. Properties not known for an element are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Builder, Default)]
pub struct ElementRecord {
    /// Atomic symbol in canonical form, e.g. `Fe`.
    #[builder(setter(into))]
    pub symbol: String,

    /// English element name.
    #[builder(setter(into))]
    pub name: String,

    /// Number of protons.
    #[builder(default)]
    pub atomic_number: u32,

    /// Standard atomic weight in amu.
    #[builder(default)]
    pub atomic_mass: f64,

    /// Single-bond covalent radius in pm.
    pub covalent_radius_pm: f64,

    /// Empirical atomic radius in pm.
    #[serde(default, deserialize_with = "utils::deserialize_optional_number")]
    #[schemars(with = "Option<f64>")]
    #[builder(default, setter(strip_option))]
    pub atomic_radius_pm: Option<f64>,

    /// Van der Waals radius in pm.
    #[serde(
        rename = "van_der_Waals_radius_pm",
        default,
        deserialize_with = "utils::deserialize_optional_number"
    )]
    #[schemars(with = "Option<f64>")]
    #[builder(default, setter(strip_option))]
    pub van_der_waals_radius_pm: Option<f64>,

    /// First ionization energy in kJ/mol.
    #[serde(
        rename = "first_ionizing_kJ_mol",
        default,
        deserialize_with = "utils::deserialize_optional_number"
    )]
    #[schemars(with = "Option<f64>")]
    #[builder(default, setter(strip_option))]
    pub first_ionizing_kj_mol: Option<f64>,

    /// Electronegativity on the Pauling scale.
    #[serde(default, deserialize_with = "utils::deserialize_optional_number")]
    #[schemars(with = "Option<f64>")]
    #[builder(default, setter(strip_option))]
    pub pauling_negativity: Option<f64>,

    /// Density at standard conditions in g/cm³.
    #[serde(default, deserialize_with = "utils::deserialize_optional_number")]
    #[schemars(with = "Option<f64>")]
    #[builder(default, setter(strip_option))]
    pub density_g_per_cm3: Option<f64>,
}

/// Immutable collection of element records keyed by symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct PeriodicTable {
    elements: BTreeMap<String, ElementRecord>,
}

impl PeriodicTable {
    /// Returns the dataset compiled into the library, covering all 118 elements.
    pub fn embedded() -> &'static PeriodicTable {
        &data::PERIODIC_TABLE
    }

    /// Builds a table from records, keyed by each record's symbol.
    ///
    /// Later records replace earlier ones with the same symbol.
    pub fn from_records(records: impl IntoIterator<Item = ElementRecord>) -> Self {
        let elements = records
            .into_iter()
            .map(|record| (record.symbol.clone(), record))
            .collect();

        Self { elements }
    }

    /// Record for an exact (case-sensitive) symbol.
    pub fn get(&self, symbol: &str) -> Option<&ElementRecord> {
        self.elements.get(symbol)
    }

    /// Record for an exact symbol, or [`ElementError::UnknownElement`].
    pub fn record(&self, symbol: &str) -> Result<&ElementRecord, ElementError> {
        self.get(symbol)
            .ok_or_else(|| ElementError::UnknownElement(symbol.to_string()))
    }

    /// Whether the exact symbol is present.
    pub fn contains(&self, symbol: &str) -> bool {
        self.elements.contains_key(symbol)
    }

    /// Resolves a symbol in any letter case to the key stored in the table.
    ///
    /// An exact match wins; otherwise the comparison is case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::InvalidSymbol`] if no key matches.
    pub fn resolve_symbol(&self, symbol: &str) -> Result<&str, ElementError> {
        if let Some((key, _)) = self.elements.get_key_value(symbol) {
            return Ok(key.as_str());
        }

        let canonical = utils::canonical_symbol(symbol);
        if let Some((key, _)) = self.elements.get_key_value(&canonical) {
            return Ok(key.as_str());
        }

        self.elements
            .keys()
            .find(|key| key.eq_ignore_ascii_case(symbol.trim()))
            .map(String::as_str)
            .ok_or_else(|| ElementError::InvalidSymbol(symbol.to_string()))
    }

    /// Record with the given atomic number.
    pub fn by_number(&self, atomic_number: u32) -> Option<&ElementRecord> {
        self.elements
            .values()
            .find(|record| record.atomic_number == atomic_number)
    }

    /// Record with the given element name (exact match).
    pub fn by_name(&self, name: &str) -> Option<&ElementRecord> {
        self.elements.values().find(|record| record.name == name)
    }

    /// Iterates over all records in order of atomic number.
    pub fn iter(&self) -> impl Iterator<Item = &ElementRecord> {
        self.elements
            .values()
            .sorted_by_key(|record| record.atomic_number)
    }

    /// All symbols in the table, alphabetically.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    /// Iterates over `(key, record)` pairs as stored, alphabetically by key.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ElementRecord)> {
        self.elements
            .iter()
            .map(|(key, record)| (key.as_str(), record))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Covalent radius in pm.
    pub fn covalent_radius(&self, symbol: &str) -> Option<f64> {
        self.get(symbol).map(|record| record.covalent_radius_pm)
    }

    /// Empirical atomic radius in pm.
    pub fn atomic_radius(&self, symbol: &str) -> Option<f64> {
        self.get(symbol)?.atomic_radius_pm
    }

    /// Van der Waals radius in pm.
    pub fn van_der_waals_radius(&self, symbol: &str) -> Option<f64> {
        self.get(symbol)?.van_der_waals_radius_pm
    }

    /// Atomic mass in amu.
    pub fn mass(&self, symbol: &str) -> Option<f64> {
        self.get(symbol).map(|record| record.atomic_mass)
    }

    /// Pauling electronegativity.
    pub fn electronegativity(&self, symbol: &str) -> Option<f64> {
        self.get(symbol)?.pauling_negativity
    }

    /// First ionization energy in kJ/mol.
    pub fn ionization_energy(&self, symbol: &str) -> Option<f64> {
        self.get(symbol)?.first_ionizing_kj_mol
    }
}

impl FromIterator<ElementRecord> for PeriodicTable {
    fn from_iter<T: IntoIterator<Item = ElementRecord>>(iter: T) -> Self {
        Self::from_records(iter)
    }
}
