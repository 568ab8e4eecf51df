#[cfg(test)]
mod test_bonds {
    use approx::assert_relative_eq;
    use periodic_table::prelude::*;
    use pretty_assertions::assert_eq;

    /// Two elements with covalent radii of 0.70 and 0.75 angstrom.
    fn synthetic_table() -> PeriodicTable {
        PeriodicTable::from_records([
            ElementRecordBuilder::default()
                .symbol("A")
                .name("Alpha")
                .atomic_number(1u32)
                .covalent_radius_pm(70.0)
                .build()
                .expect("Failed to build record"),
            ElementRecordBuilder::default()
                .symbol("B")
                .name("Beta")
                .atomic_number(2u32)
                .covalent_radius_pm(75.0)
                .build()
                .expect("Failed to build record"),
        ])
    }

    #[test]
    fn test_known_bond_is_returned_unchanged() {
        // ARRANGE
        let table = PeriodicTable::embedded();

        // ACT
        let bonds = bonds_for(table, "H", "O", None, embedded_bonds()).unwrap();

        // ASSERT
        assert_eq!(bonds.len(), 1);
        assert_eq!(bonds[0].elements, ["H".to_string(), "O".to_string()]);
        assert_eq!(bonds[0].order, Some(1));
        assert_eq!(bonds[0].length, Quantity::new(0.96, Unit::Angstrom));
        assert_eq!(
            bonds[0].energy,
            Some(Quantity::new(4.75721615, Unit::Electronvolt))
        );
    }

    #[test]
    fn test_embedded_hydrogen_bond_energies() {
        let table = PeriodicTable::embedded();

        for (partner, energy) in [
            ("H", 4.4773799),
            ("B", 4.03171477),
            ("C", 4.25972949),
            ("O", 4.75721615),
        ] {
            let bonds = bonds_for(table, "H", partner, Some(1), embedded_bonds()).unwrap();
            let recorded = bonds[0].energy.as_ref().expect("Missing bond energy");

            assert_eq!(recorded.units, Unit::Electronvolt);
            assert_relative_eq!(recorded.value, energy);
        }
    }

    #[test]
    fn test_order_filter_is_exact() {
        let table = PeriodicTable::embedded();

        let doubles = bonds_for(table, "C", "C", Some(2), embedded_bonds()).unwrap();

        assert_eq!(doubles.len(), 1);
        assert!(doubles.iter().all(|bond| bond.order == Some(2)));
        assert_relative_eq!(doubles[0].length.value, 1.34);
    }

    #[test]
    fn test_without_order_all_orders_match() {
        let table = PeriodicTable::embedded();

        let bonds = bonds_for(table, "O", "C", None, embedded_bonds()).unwrap();
        let orders: Vec<Option<u8>> = bonds.iter().map(|bond| bond.order).collect();

        assert_eq!(orders, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_pair_symmetry() {
        let table = PeriodicTable::embedded();
        let known = embedded_bonds();

        for (first, second) in [("C", "N"), ("H", "Cl"), ("Fe", "O"), ("Xe", "Li")] {
            for order in [None, Some(1), Some(2)] {
                assert_eq!(
                    bonds_for(table, first, second, order, known).unwrap(),
                    bonds_for(table, second, first, order, known).unwrap(),
                    "{first}-{second} order {order:?}"
                );
            }
        }
    }

    #[test]
    fn test_default_from_covalent_radii() {
        // ARRANGE
        let table = synthetic_table();

        for order in [None, Some(1), Some(3)] {
            // ACT
            let bonds = bonds_for(&table, "A", "B", order, &[]).unwrap();

            // ASSERT
            assert_eq!(bonds.len(), 1);
            assert_relative_eq!(bonds[0].length.value, 1.45, epsilon = 1e-12);
            assert_eq!(bonds[0].length.units, Unit::Angstrom);
            assert_eq!(bonds[0].order, order);
            assert_eq!(bonds[0].energy, None);
        }
    }

    #[test]
    fn test_default_is_not_added_to_known_matches() {
        let table = synthetic_table();
        let known = vec![BondRecordBuilder::default()
            .elements(["B".to_string(), "A".to_string()])
            .length(Quantity::new(1.30, Unit::Angstrom))
            .order(1)
            .build()
            .unwrap()];

        let single = bonds_for(&table, "A", "B", Some(1), &known).unwrap();
        let double = bonds_for(&table, "A", "B", Some(2), &known).unwrap();

        assert_eq!(single, known);
        assert_relative_eq!(double[0].length.value, 1.45, epsilon = 1e-12);
        assert_eq!(known.len(), 1);
    }

    #[test]
    fn test_unknown_element() {
        let table = PeriodicTable::embedded();

        for (first, second) in [("Xx", "H"), ("H", "Xx")] {
            let result = bonds_for(table, first, second, None, embedded_bonds());

            assert_eq!(
                result,
                Err(BondError::Element(ElementError::UnknownElement(
                    "Xx".to_string()
                )))
            );
        }
    }

    #[test]
    fn test_unknown_element_errors_even_with_known_records() {
        let table = synthetic_table();
        let known = vec![BondRecord::new("A", "Zz", Quantity::new(1.0, Unit::Angstrom))];

        let result = bonds_for(&table, "A", "Zz", None, &known);

        assert!(matches!(
            result,
            Err(BondError::Element(ElementError::UnknownElement(symbol))) if symbol == "Zz"
        ));
    }

    #[test]
    fn test_are_bonded() {
        let table = PeriodicTable::embedded();
        let known = embedded_bonds();

        // H-O single bond is 0.96 ang
        assert!(are_bonded(table, "O", "H", 0.95, None, None, known).unwrap());
        assert!(are_bonded(table, "O", "H", 0.96, None, None, known).unwrap());
        assert!(!are_bonded(table, "O", "H", 1.00, None, None, known).unwrap());
        assert!(are_bonded(table, "O", "H", 1.00, None, Some(1.1), known).unwrap());
    }

    #[test]
    fn test_are_bonded_converts_candidate_length() {
        let table = synthetic_table();
        let known = vec![BondRecord::new("A", "B", Quantity::new(2.0, Unit::Bohr))];

        // 2 bohr = 1.0583544 ang
        assert!(are_bonded(&table, "A", "B", 1.05, None, None, &known).unwrap());
        assert!(!are_bonded(&table, "A", "B", 1.06, None, None, &known).unwrap());
    }

    #[test]
    fn test_are_bonded_skips_unusable_candidates() {
        let table = synthetic_table();
        let known = vec![
            BondRecord::new("A", "B", Quantity::new(1.0, Unit::Electronvolt)),
            BondRecord::new("A", "B", Quantity::new(1.2, Unit::Angstrom)),
        ];

        assert!(are_bonded(&table, "A", "B", 1.1, None, None, &known).unwrap());
        assert_eq!(
            bond_length(&table, "A", "B", None, &known).unwrap(),
            Some(1.2)
        );
    }
}
