//! Bond detection for atomic structures.
//!
//! Applies the [`are_bonded`](crate::bonds::are_bonded) criterion to every pair
//! of atoms in a structure. Bond lengths are resolved once per distinct element
//! pair; the pairwise distance checks then run in parallel.

use std::collections::HashMap;

use derive_builder::Builder;
use itertools::Itertools;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    bonds::{bonds_for, BondError, BondRecord},
    table::PeriodicTable,
    units::Unit,
    utils::sorted_pair,
};

/// An atom of a structure, with Cartesian coordinates in Å.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    pub symbol: String,
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(symbol: impl Into<String>, position: [f64; 3]) -> Self {
        Self {
            symbol: symbol.into(),
            position,
        }
    }

    /// Euclidean distance to `other` in Å.
    pub fn distance(&self, other: &Atom) -> f64 {
        self.position
            .iter()
            .zip(other.position.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

/// A detected bond between two atoms, referenced by index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    pub first: usize,
    pub second: usize,
    /// Interatomic distance in Å.
    pub distance: f64,
    /// Order of the bond record the distance was checked against.
    pub order: Option<u8>,
}

/// Criteria for bond detection.
///
/// # Fields
///
/// * `tolerance` - Multiplicative factor on the reference bond length (default: 1.0)
/// * `min_distance` - Pairs closer than this, in Å, are never bonded (default: 0.4)
/// * `order` - Restrict reference bonds to this order (default: any)
///
/// # Examples
///
/// ```
/// use periodic_table::connectivity::BondSearchBuilder;
///
/// let search = BondSearchBuilder::default()
///     .tolerance(1.15)
///     .build()
///     .unwrap();
///
/// assert_eq!(search.min_distance, 0.4);
/// ```
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
pub struct BondSearch {
    #[builder(default = "1.0")]
    pub tolerance: f64,
    #[builder(default = "0.4")]
    pub min_distance: f64,
    #[builder(default, setter(strip_option))]
    pub order: Option<u8>,
}

impl Default for BondSearch {
    fn default() -> Self {
        Self {
            tolerance: 1.0,
            min_distance: 0.4,
            order: None,
        }
    }
}

/// Reference length in Å and order for one element pair.
type Reference = Option<(f64, Option<u8>)>;

/// Finds all bonded atom pairs of a structure.
///
/// For each distinct element pair the reference bond is the first record from
/// [`bonds_for`] with a length convertible to Å. Two atoms are bonded when
/// `min_distance < distance <= length * tolerance`. The result is ordered by
/// `(first, second)` with `first < second`.
///
/// # Errors
///
/// Returns [`BondError`] if any atom symbol is not in `table`.
pub fn find_bonds(
    table: &PeriodicTable,
    atoms: &[Atom],
    known: &[BondRecord],
    search: &BondSearch,
) -> Result<Vec<Bond>, BondError> {
    let references = reference_lengths(table, atoms, known, search.order)?;

    let mut bonds: Vec<Bond> = (0..atoms.len())
        .into_par_iter()
        .flat_map_iter(|i| {
            let references = &references;
            (i + 1..atoms.len()).filter_map(move |j| {
                let (first, second) = (&atoms[i], &atoms[j]);
                let key = sorted_pair(&first.symbol, &second.symbol);
                let (length, order) = references.get(&key).copied().flatten()?;

                let distance = first.distance(second);
                (distance > search.min_distance && distance <= length * search.tolerance).then_some(
                    Bond {
                        first: i,
                        second: j,
                        distance,
                        order,
                    },
                )
            })
        })
        .collect();

    bonds.sort_by_key(|bond| (bond.first, bond.second));
    log::debug!("Detected {} bonds among {} atoms", bonds.len(), atoms.len());

    Ok(bonds)
}

fn reference_lengths<'a>(
    table: &PeriodicTable,
    atoms: &'a [Atom],
    known: &[BondRecord],
    order: Option<u8>,
) -> Result<HashMap<[&'a str; 2], Reference>, BondError> {
    let symbols: Vec<&str> = atoms
        .iter()
        .map(|atom| atom.symbol.as_str())
        .unique()
        .collect();

    symbols
        .iter()
        .copied()
        .enumerate()
        .flat_map(|(i, first)| {
            symbols[i..]
                .iter()
                .copied()
                .map(move |second| sorted_pair(first, second))
        })
        .map(|pair| {
            let reference = bonds_for(table, pair[0], pair[1], order, known)?
                .iter()
                .find_map(|bond| {
                    bond.length_in(Unit::Angstrom)
                        .ok()
                        .filter(|length| *length > 0.0)
                        .map(|length| (length, bond.order))
                });
            Ok((pair, reference))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::bonds::embedded_bonds;

    fn water() -> Vec<Atom> {
        vec![
            Atom::new("O", [0.0, 0.0, 0.0]),
            Atom::new("H", [0.9572, 0.0, 0.0]),
            Atom::new("H", [-0.2400, 0.9266, 0.0]),
        ]
    }

    #[test]
    fn test_water_has_two_bonds() {
        // Arrange
        let table = PeriodicTable::embedded();
        let atoms = water();

        // Act
        let bonds = find_bonds(table, &atoms, embedded_bonds(), &BondSearch::default())
            .expect("Failed to find bonds");

        // Assert
        assert_eq!(bonds.len(), 2);
        assert_eq!((bonds[0].first, bonds[0].second), (0, 1));
        assert_eq!((bonds[1].first, bonds[1].second), (0, 2));
        assert_relative_eq!(bonds[0].distance, 0.9572, epsilon = 1e-12);
        assert_eq!(bonds[0].order, Some(1));
    }

    #[test]
    fn test_min_distance_excludes_overlapping_atoms() {
        let table = PeriodicTable::embedded();
        let atoms = vec![Atom::new("C", [0.0; 3]), Atom::new("C", [0.1, 0.0, 0.0])];

        let bonds = find_bonds(table, &atoms, &[], &BondSearch::default()).unwrap();
        assert!(bonds.is_empty());
    }

    #[test]
    fn test_tolerance_widens_search() {
        let table = PeriodicTable::embedded();
        // Default C-C length from covalent radii is 1.52 ang
        let atoms = vec![Atom::new("C", [0.0; 3]), Atom::new("C", [1.6, 0.0, 0.0])];

        let strict = find_bonds(table, &atoms, &[], &BondSearch::default()).unwrap();
        let loose = find_bonds(
            table,
            &atoms,
            &[],
            &BondSearchBuilder::default().tolerance(1.1).build().unwrap(),
        )
        .unwrap();

        assert!(strict.is_empty());
        assert_eq!(loose.len(), 1);
    }

    #[test]
    fn test_unknown_symbol_fails() {
        let table = PeriodicTable::embedded();
        let atoms = vec![Atom::new("Xx", [0.0; 3]), Atom::new("H", [1.0, 0.0, 0.0])];

        let result = find_bonds(table, &atoms, &[], &BondSearch::default());
        assert!(result.is_err());
    }
}
