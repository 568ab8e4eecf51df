#[cfg(test)]
mod test_validation {
    use periodic_table::{
        bonds::{embedded_bonds, BondRecord, Quantity},
        data::PERIODIC_TABLE_JSON,
        io::{load_bonds, load_periodic_table, save_bonds, save_periodic_table},
        table::{ElementRecordBuilder, PeriodicTable},
        units::Unit,
        validation::{
            consistency::{check_consistency, check_conversion_tables, Severity},
            validate_json,
        },
    };

    #[test]
    fn test_embedded_datasets() {
        let schema_report = validate_json(PERIODIC_TABLE_JSON).expect("Failed to validate");
        let report = check_consistency(PeriodicTable::embedded(), embedded_bonds());

        assert!(schema_report.valid);
        assert!(report.is_valid);
        assert!(check_conversion_tables().is_valid);
    }

    #[test]
    fn test_saved_dataset_with_errors() {
        // ARRANGE
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let table_path = dir.path().join("table.json");
        let bonds_path = dir.path().join("bonds.json");

        let table = PeriodicTable::from_records([
            ElementRecordBuilder::default()
                .symbol("C")
                .name("Carbon")
                .atomic_number(6u32)
                .atomic_mass(12.011)
                .covalent_radius_pm(76.0)
                .build()
                .unwrap(),
            ElementRecordBuilder::default()
                .symbol("X")
                .name("Broken")
                .atomic_number(0u32)
                .covalent_radius_pm(-1.0)
                .build()
                .unwrap(),
        ]);
        let bonds = vec![
            BondRecord::new("C", "C", Quantity::new(1.54, Unit::Angstrom)).with_order(1),
            BondRecord::new("C", "C", Quantity::new(154.0, Unit::Picometer)).with_order(1),
            BondRecord::new("C", "O", Quantity::new(1.43, Unit::Angstrom)),
        ];

        save_periodic_table(&table_path, &table).unwrap();
        save_bonds(&bonds_path, &bonds).unwrap();

        // ACT
        let table = load_periodic_table(&table_path).unwrap();
        let bonds = load_bonds(&bonds_path).unwrap();
        let report = check_consistency(&table, &bonds);

        // ASSERT
        assert!(!report.is_valid);
        assert_eq!(report.count(Severity::Error), 2);
        assert_eq!(report.count(Severity::Warning), 1);
        assert_eq!(report.filter_results("X").len(), 1);
        assert_eq!(report.filter_results("O").len(), 1);
    }

    #[test]
    fn test_schema_rejects_wrong_types() {
        let content = r#"{
            "H": {
                "symbol": "H",
                "name": "Hydrogen",
                "atomic_number": "one",
                "atomic_mass": 1.008,
                "covalent_radius_pm": 31
            }
        }"#;

        let report = validate_json(content).expect("Failed to validate");

        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].location, "/H/atomic_number");
    }
}
