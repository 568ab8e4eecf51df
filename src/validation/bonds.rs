use std::collections::{hash_map::Entry, HashMap};

use crate::bonds::BondRecord;
use crate::table::PeriodicTable;
use crate::units::{Unit, UnitCategory};
use crate::utils::sorted_pair;
use crate::validation::consistency::{Report, Severity, ValidationResult};

/// Validates a bond catalog against a periodic table
///
/// # Arguments
/// * `table` - The periodic table the bond elements must belong to
/// * `bonds` - The bond catalog to validate
/// * `report` - Validation report to add any validation errors and warnings to
///
/// # Details
/// Every record must reference elements of the table, carry a positive finite
/// length in a length unit and, if given, an order of 1, 2 or 3. Records that
/// repeat an element pair and order already seen are reported as warnings, since
/// only the first of them is ever used for bond detection.
pub fn check_bonds(table: &PeriodicTable, bonds: &[BondRecord], report: &mut Report) {
    let mut seen: HashMap<([&str; 2], Option<u8>), usize> = HashMap::new();

    for (bond_idx, bond) in bonds.iter().enumerate() {
        check_bond_elements(report, table, bond, bond_idx);
        check_bond_length(report, bond, bond_idx);
        check_bond_order(report, bond, bond_idx);

        let pair = sorted_pair(&bond.elements[0], &bond.elements[1]);
        match seen.entry((pair, bond.order)) {
            Entry::Occupied(first) => report.add_result(ValidationResult::new(
                format!("/bonds/{bond_idx}"),
                format!(
                    "Bond {}-{} duplicates the pair and order of bond {}.",
                    pair[0],
                    pair[1],
                    first.get()
                ),
                Severity::Warning,
                None,
            )),
            Entry::Vacant(slot) => {
                slot.insert(bond_idx);
            }
        }
    }
}

fn check_bond_elements(
    report: &mut Report,
    table: &PeriodicTable,
    bond: &BondRecord,
    bond_idx: usize,
) {
    for (position, symbol) in bond.elements.iter().enumerate() {
        if !table.contains(symbol) {
            report.add_result(ValidationResult::new(
                format!("/bonds/{bond_idx}/elements/{position}"),
                format!("Bond references unknown element '{symbol}'."),
                Severity::Error,
                Some(symbol.clone()),
            ));
        }
    }
}

fn check_bond_length(report: &mut Report, bond: &BondRecord, bond_idx: usize) {
    let location = format!("/bonds/{bond_idx}/length");

    if bond.length.units.category() != UnitCategory::Length {
        report.add_result(ValidationResult::new(
            location,
            format!(
                "Bond length is given in '{}', which is not a length unit.",
                bond.length.units
            ),
            Severity::Error,
            None,
        ));
        return;
    }

    let length = bond.length.value;
    if !length.is_finite() || length <= 0.0 {
        report.add_result(ValidationResult::new(
            location,
            format!(
                "Bond length must be positive and finite, got {length} {}.",
                bond.length.units
            ),
            Severity::Error,
            None,
        ));
    } else if bond.length_in(Unit::Angstrom).is_err() {
        report.add_result(ValidationResult::new(
            location,
            format!(
                "Bond length unit '{}' cannot be converted to angstrom.",
                bond.length.units
            ),
            Severity::Error,
            None,
        ));
    }
}

fn check_bond_order(report: &mut Report, bond: &BondRecord, bond_idx: usize) {
    if let Some(order) = bond.order {
        if !(1..=3).contains(&order) {
            report.add_result(ValidationResult::new(
                format!("/bonds/{bond_idx}/order"),
                format!("Bond order must be 1, 2 or 3, got {order}."),
                Severity::Error,
                None,
            ));
        }
    }
}
