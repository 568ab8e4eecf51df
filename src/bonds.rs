//! Bond inference between element pairs.
//!
//! This module selects bond records for a pair of elements from a catalog of
//! known bonds and falls back to a synthesized default when the catalog has no
//! match:
//!
//! - [`filter_bonds`] picks catalog records by unordered element pair and, when
//!   requested, by exact bond order
//! - [`default_bond`] synthesizes a record whose length is the sum of both
//!   covalent radii, in Å
//! - [`bonds_for`] returns the filtered records, or the default if there are none
//! - [`are_bonded`] checks an interatomic distance against the selected length
//!
//! Known and synthesized records are never merged, and synthesized records are
//! never written back to the catalog.

use derive_builder::Builder;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::{
    conversion::{convert_units, ConversionError},
    data,
    element::ElementError,
    table::PeriodicTable,
    units::Unit,
    utils::{self, sorted_pair},
};

/// A numeric value with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Quantity {
    pub value: f64,
    #[serde(alias = "unit")]
    pub units: Unit,
}

impl Quantity {
    pub fn new(value: f64, units: Unit) -> Self {
        Self { value, units }
    }

    /// Value expressed in `unit`.
    pub fn value_in(&self, unit: Unit) -> Result<f64, ConversionError> {
        convert_units(self.value, self.units, unit)
    }
}

/// A bond between an unordered pair of elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Builder)]
pub struct BondRecord {
    /// Symbols of the two bonded elements.
    pub elements: [String; 2],

    /// Bond order (1 single, 2 double, 3 triple), if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub order: Option<u8>,

    /// Equilibrium bond length.
    pub length: Quantity,

    /// Bond dissociation energy, if known.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_energy"
    )]
    #[schemars(with = "Option<Quantity>")]
    #[builder(default, setter(strip_option))]
    pub energy: Option<Quantity>,
}

impl BondRecord {
    /// Creates a record with the given length and no order or energy.
    pub fn new(first: impl Into<String>, second: impl Into<String>, length: Quantity) -> Self {
        Self {
            elements: [first.into(), second.into()],
            order: None,
            length,
            energy: None,
        }
    }

    pub fn with_order(mut self, order: u8) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_energy(mut self, energy: Quantity) -> Self {
        self.energy = Some(energy);
        self
    }

    /// Whether this record bonds exactly the pair `{first, second}`, in either order.
    pub fn has_elements(&self, first: &str, second: &str) -> bool {
        sorted_pair(&self.elements[0], &self.elements[1]) == sorted_pair(first, second)
    }

    /// Bond length expressed in `unit`.
    pub fn length_in(&self, unit: Unit) -> Result<f64, ConversionError> {
        self.length.value_in(unit)
    }

    /// Bond length in Å, if it is finite and convertible.
    fn usable_length(&self) -> Option<f64> {
        self.length_in(Unit::Angstrom)
            .ok()
            .filter(|length| *length > 0.0)
    }
}

/// Accepts both a regular quantity and the blank `{"value": "", "units": "eV"}`
/// placeholder used by reference datasets for unknown energies.
fn deserialize_energy<'de, D>(deserializer: D) -> Result<Option<Quantity>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct MaybeQuantity {
        #[serde(default, deserialize_with = "utils::deserialize_optional_number")]
        value: Option<f64>,
        #[serde(alias = "unit")]
        units: Unit,
    }

    let maybe = Option::<MaybeQuantity>::deserialize(deserializer)?;
    Ok(maybe.and_then(|q| q.value.map(|value| Quantity::new(value, q.units))))
}

/// The bond catalog compiled into the library.
pub fn embedded_bonds() -> &'static [BondRecord] {
    &data::ELEMENT_BONDS
}

/// Selects the records bonding `{first, second}`.
///
/// The element pair is compared as an unordered set. When `order` is given only
/// records with exactly that order match; a record without an order never
/// matches a requested order.
pub fn filter_bonds<'a>(
    bonds: &'a [BondRecord],
    first: &str,
    second: &str,
    order: Option<u8>,
) -> Vec<&'a BondRecord> {
    bonds
        .iter()
        .filter(|bond| bond.has_elements(first, second))
        .filter(|bond| order.is_none() || bond.order == order)
        .collect()
}

/// Synthesizes a default bond from the covalent radii of both elements.
///
/// The length is `r(first) + r(second)` converted from pm to Å, the energy is
/// left unset and the order is `order` as given. The element pair is stored
/// sorted so the result does not depend on argument order.
///
/// # Errors
///
/// Returns [`ElementError::UnknownElement`] (wrapped in [`BondError::Element`])
/// if either symbol is not in `table`.
pub fn default_bond(
    table: &PeriodicTable,
    first: &str,
    second: &str,
    order: Option<u8>,
) -> Result<BondRecord, BondError> {
    let length =
        covalent_radius_angstrom(table, first)? + covalent_radius_angstrom(table, second)?;
    let [first, second] = sorted_pair(first, second);

    Ok(BondRecord {
        elements: [first.to_string(), second.to_string()],
        order,
        length: Quantity::new(length, Unit::Angstrom),
        energy: None,
    })
}

fn covalent_radius_angstrom(table: &PeriodicTable, symbol: &str) -> Result<f64, BondError> {
    let radius = table.record(symbol)?.covalent_radius_pm;

    convert_units(radius, Unit::Picometer, Unit::Angstrom).map_err(|source| {
        BondError::Conversion {
            symbol: symbol.to_string(),
            source,
        }
    })
}

/// Returns the bond records for `{first, second}`.
///
/// Known records matching the pair (and `order`, if given) are returned as they
/// are. If there are none, the result is a single synthesized default record
/// (see [`default_bond`]). `bonds_for(t, a, b, ..)` and `bonds_for(t, b, a, ..)`
/// return the same records.
///
/// # Arguments
///
/// * `table` - Periodic table supplying covalent radii
/// * `first` - Symbol of the first element
/// * `second` - Symbol of the second element
/// * `order` - Requested bond order, or `None` for any order
/// * `known` - Catalog of known bonds
///
/// # Errors
///
/// Returns [`BondError::Element`] with [`ElementError::UnknownElement`] if either
/// symbol is not in `table`, whether or not the catalog has matching records.
pub fn bonds_for(
    table: &PeriodicTable,
    first: &str,
    second: &str,
    order: Option<u8>,
    known: &[BondRecord],
) -> Result<Vec<BondRecord>, BondError> {
    let default = default_bond(table, first, second, order)?;
    let matches = filter_bonds(known, first, second, order);

    if matches.is_empty() {
        log::debug!(
            "No known {first}-{second} bond (order {order:?}), using covalent radii: {:.3} ang",
            default.length.value
        );
        return Ok(vec![default]);
    }

    Ok(matches.into_iter().cloned().collect())
}

/// Length in Å of the first candidate from [`bonds_for`] that has a usable length.
pub fn bond_length(
    table: &PeriodicTable,
    first: &str,
    second: &str,
    order: Option<u8>,
    known: &[BondRecord],
) -> Result<Option<f64>, BondError> {
    Ok(bonds_for(table, first, second, order, known)?
        .iter()
        .find_map(BondRecord::usable_length))
}

/// Whether two atoms at `distance` Å are bonded.
///
/// True iff the first candidate from [`bonds_for`] with a usable length `L`
/// satisfies `distance <= L * tolerance`. `tolerance` is a multiplicative factor
/// and defaults to `1.0`. Candidates whose length is not convertible to Å are
/// skipped; without any usable candidate the atoms are not bonded.
///
/// # Errors
///
/// Propagates the errors of [`bonds_for`].
pub fn are_bonded(
    table: &PeriodicTable,
    first: &str,
    second: &str,
    distance: f64,
    order: Option<u8>,
    tolerance: Option<f64>,
    known: &[BondRecord],
) -> Result<bool, BondError> {
    let tolerance = tolerance.unwrap_or(1.0);
    let length = bond_length(table, first, second, order, known)?;

    Ok(length.is_some_and(|length| distance <= length * tolerance))
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    #[error(transparent)]
    Element(#[from] ElementError),
    #[error("Covalent radius of {symbol} cannot be expressed in angstrom: {source}")]
    Conversion {
        symbol: String,
        #[source]
        source: ConversionError,
    },
}
