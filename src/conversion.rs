//! Unit conversion over sparse conversion tables.
//!
//! This module provides the conversion engine used throughout the library:
//!
//! - [`ConversionTable`], a typed nested mapping `from -> to -> coefficient`
//!   with an explicit entry-exists query
//! - [`convert`], which resolves a conversion through a direct entry or, failing
//!   that, by inverting the reverse entry
//! - [`convert_units`], a shortcut that picks the built-in table for [`Unit`]s
//!
//! Conversions are strictly single-hop. A pair of units without a direct or
//! reverse entry is not convertible, even if a path exists through a third unit.
//! Only ratio-scale units are supported; there is no affine offset handling.

use std::{
    collections::{HashMap, HashSet},
    fmt,
    hash::Hash,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::units::Unit;

/// Sparse table of multiplicative conversion coefficients.
///
/// An entry `table[from][to] = k` means `value_in_to = value_in_from * k`.
/// The reverse direction is served by division, so a well-formed table holds at
/// most one directional entry per unit pair (see [`ConversionTable::validate`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    transparent,
    bound(
        serialize = "U: Serialize + Eq + Hash",
        deserialize = "U: Deserialize<'de> + Eq + Hash"
    )
)]
pub struct ConversionTable<U> {
    entries: HashMap<U, HashMap<U, f64>>,
}

impl<U> Default for ConversionTable<U> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<U: Eq + Hash> PartialEq for ConversionTable<U> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<U: Eq + Hash> ConversionTable<U> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry and returns the table, for chained construction.
    pub fn with_entry(mut self, from: U, to: U, coefficient: f64) -> Self {
        self.insert(from, to, coefficient);
        self
    }

    /// Inserts the forward entry `from -> to`, returning the replaced coefficient if any.
    pub fn insert(&mut self, from: U, to: U, coefficient: f64) -> Option<f64> {
        self.entries
            .entry(from)
            .or_default()
            .insert(to, coefficient)
    }

    /// Returns the forward coefficient `table[from][to]`, if that entry exists.
    ///
    /// The reverse entry is not consulted.
    pub fn coefficient(&self, from: &U, to: &U) -> Option<f64> {
        self.entries.get(from)?.get(to).copied()
    }

    /// Whether the forward entry `from -> to` exists.
    pub fn contains_entry(&self, from: &U, to: &U) -> bool {
        self.coefficient(from, to).is_some()
    }

    /// Whether the unit appears anywhere in the table, as a source or a target.
    pub fn contains_unit(&self, unit: &U) -> bool {
        self.entries.contains_key(unit)
            || self.entries.values().any(|targets| targets.contains_key(unit))
    }

    /// All units mentioned in the table.
    pub fn units(&self) -> HashSet<&U> {
        self.entries
            .iter()
            .flat_map(|(from, targets)| std::iter::once(from).chain(targets.keys()))
            .collect()
    }

    /// Iterates over every `(from, to, coefficient)` entry.
    pub fn entries(&self) -> impl Iterator<Item = (&U, &U, f64)> {
        self.entries
            .iter()
            .flat_map(|(from, targets)| targets.iter().map(move |(to, k)| (from, to, *k)))
    }

    /// Number of directional entries.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<U: Eq + Hash + fmt::Display> ConversionTable<U> {
    /// Converts `value` from `from` to `to` using this table.
    ///
    /// See [`convert`].
    pub fn convert(&self, value: f64, from: &U, to: &U) -> Result<f64, ConversionError> {
        convert(value, from, to, self)
    }

    /// Checks the structural invariants of the table.
    ///
    /// Every coefficient must be finite and strictly positive, and no unit pair
    /// may carry both a forward and a reverse entry. Physical correctness of the
    /// coefficients is not checked.
    pub fn validate(&self) -> Result<(), TableError> {
        for (from, to, coefficient) in self.entries() {
            if !coefficient.is_finite() || coefficient <= 0.0 {
                return Err(TableError::NonPositiveCoefficient {
                    from: from.to_string(),
                    to: to.to_string(),
                    coefficient,
                });
            }

            if from != to && self.contains_entry(to, from) {
                return Err(TableError::ConflictingEntries {
                    first: from.to_string(),
                    second: to.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Converts a value between two units of a conversion table.
///
/// Resolution order:
///
/// 1. `from == to` returns `value` unchanged without consulting the table
/// 2. a forward entry `table[from][to]` multiplies
/// 3. a reverse entry `table[to][from]` divides
///
/// # Arguments
///
/// * `value` - The value expressed in `from`
/// * `from` - Source unit
/// * `to` - Target unit
/// * `table` - Conversion table to resolve the coefficient from
///
/// # Errors
///
/// Returns [`ConversionError::NotConvertible`] for NaN or infinite input and
/// when neither entry exists. Both cases are also reported as a warning through
/// the `log` facade; the warning is advisory and does not change the returned
/// result.
pub fn convert<U>(
    value: f64,
    from: &U,
    to: &U,
    table: &ConversionTable<U>,
) -> Result<f64, ConversionError>
where
    U: Eq + Hash + fmt::Display,
{
    if !value.is_finite() {
        log::warn!("Unable to convert {value} from '{from}' to '{to}': value is not finite");
        return Err(ConversionError::not_convertible(value, from, to));
    }

    if from == to {
        return Ok(value);
    }

    if let Some(coefficient) = table.coefficient(from, to) {
        return Ok(value * coefficient);
    }

    if let Some(coefficient) = table.coefficient(to, from) {
        return Ok(value / coefficient);
    }

    log::warn!("Unable to convert {value} from '{from}' to '{to}': no conversion entry");

    Err(ConversionError::not_convertible(value, from, to))
}

/// Converts between two [`Unit`]s using the built-in table of their category.
///
/// Units of different categories are never convertible.
pub fn convert_units(value: f64, from: Unit, to: Unit) -> Result<f64, ConversionError> {
    if from.category() != to.category() {
        log::warn!(
            "Unable to convert {value} from '{from}' ({}) to '{to}' ({})",
            from.category(),
            to.category()
        );

        return Err(ConversionError::not_convertible(value, &from, &to));
    }

    convert(value, &from, &to, from.category().conversion_table())
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("Unable to convert {value} from '{from}' to '{to}'")]
    NotConvertible {
        value: f64,
        from: String,
        to: String,
    },
}

impl ConversionError {
    fn not_convertible(value: f64, from: &impl fmt::Display, to: &impl fmt::Display) -> Self {
        Self::NotConvertible {
            value,
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("Coefficient {from} -> {to} must be positive and finite, got {coefficient}")]
    NonPositiveCoefficient {
        from: String,
        to: String,
        coefficient: f64,
    },
    #[error("Both {first} -> {second} and {second} -> {first} are defined")]
    ConflictingEntries { first: String, second: String },
}
