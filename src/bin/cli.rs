//! Command-line interface for the periodic-table library
//!
//! This binary provides access to element data, bond inference and unit
//! conversion from the shell, including:
//! - Showing element properties in selected units
//! - Inferring bonds between element pairs and detecting bonds in structures
//! - Converting values between units
//! - Validating dataset files
//!
//! # Usage
//!
//! ```bash
//! # Show lithium, with radii in bohr and energies in hartree
//! periodic-table element li --unit bohr --unit hartree
//!
//! # Known or default bonds between carbon and oxygen
//! periodic-table bonds C O --order 2
//!
//! # Check a custom dataset
//! periodic-table --table my-table.json validate
//! ```

use std::{borrow::Cow, error::Error, fs, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::Env;
use periodic_table::{
    bonds::{are_bonded, bonds_for, embedded_bonds, BondRecord},
    colors::ElementColors,
    connectivity::{find_bonds, BondSearchBuilder},
    conversion::convert_units,
    element::ChemicalElement,
    info::{properties_table, to_table},
    io::{load_atoms, load_bonds, load_colors, load_periodic_table},
    properties::{atomic_properties_flat, property_names},
    table::PeriodicTable,
    units::{Unit, UnitCategory},
    validation::{
        consistency::{check_consistency, check_conversion_tables, Report},
        validate_bonds_json, validate_json, ValidationReport,
    },
};
use tabled::{builder::Builder, settings::Style};

/// Main CLI configuration struct
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Periodic table JSON file to use instead of the embedded dataset
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    /// Bond catalog JSON file to use instead of the embedded dataset
    #[arg(long, global = true)]
    bonds: Option<PathBuf>,

    /// Color palette JSON file to use instead of the embedded palette
    #[arg(long, global = true)]
    colors: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Show the properties of an element
    Element {
        /// Element symbol in any letter case
        symbol: String,

        /// Additional units to express the properties in
        #[arg(short, long)]
        unit: Vec<Unit>,
    },
    /// List the known or default bonds between two elements
    Bonds {
        first: String,
        second: String,

        /// Bond order (1, 2 or 3)
        #[arg(short, long)]
        order: Option<u8>,
    },
    /// Check whether two atoms at a distance in angstrom are bonded
    Bonded {
        first: String,
        second: String,
        distance: f64,

        /// Bond order (1, 2 or 3)
        #[arg(short, long)]
        order: Option<u8>,

        /// Multiplicative tolerance on the reference bond length
        #[arg(short, long)]
        tolerance: Option<f64>,
    },
    /// Detect all bonds of a structure given as a JSON list of atoms
    Connect {
        /// Path to the JSON file with the atoms
        path: PathBuf,

        /// Multiplicative tolerance on the reference bond lengths
        #[arg(short, long, default_value_t = 1.0)]
        tolerance: f64,

        /// Pairs closer than this distance in angstrom are never bonded
        #[arg(long, default_value_t = 0.4)]
        min_distance: f64,
    },
    /// Convert a value between two units of the same category
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: Unit,
        to: Unit,
    },
    /// Validate the periodic table, the bond catalog and the conversion tables
    Validate,
    /// List selected properties of selected elements
    Properties {
        /// Element symbols
        #[arg(required = true)]
        symbols: Vec<String>,

        /// Property keys, e.g. atomic_radius_pm
        #[arg(short, long, num_args = 1.., required = true)]
        props: Vec<String>,

        /// Separator between property key and symbol
        #[arg(short, long, default_value = ":")]
        separator: String,
    },
}

/// Main entry point for the CLI application
pub fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("{} {}", "Error:".bold().red(), error);
            ExitCode::FAILURE
        }
    }
}

/// Datasets selected on the command line, or the embedded ones.
struct Datasets {
    table: Cow<'static, PeriodicTable>,
    bonds: Cow<'static, [BondRecord]>,
    colors: Cow<'static, ElementColors>,
}

impl Datasets {
    fn load(cli: &Cli) -> Result<Self, Box<dyn Error>> {
        let table = match &cli.table {
            Some(path) => Cow::Owned(load_periodic_table(path)?),
            None => Cow::Borrowed(PeriodicTable::embedded()),
        };
        let bonds = match &cli.bonds {
            Some(path) => Cow::Owned(load_bonds(path)?),
            None => Cow::Borrowed(embedded_bonds()),
        };
        let colors = match &cli.colors {
            Some(path) => Cow::Owned(load_colors(path)?),
            None => Cow::Borrowed(ElementColors::embedded()),
        };

        Ok(Self {
            table,
            bonds,
            colors,
        })
    }
}

/// Runs the selected command. Returns `false` if the command completed but
/// reported a negative outcome, such as an invalid dataset.
fn run(cli: &Cli) -> Result<bool, Box<dyn Error>> {
    if let Commands::Validate = cli.command {
        return validate(cli);
    }

    let data = Datasets::load(cli)?;

    match &cli.command {
        Commands::Element { symbol, unit } => {
            let element = ChemicalElement::new(&data.table, symbol)?;
            println!("{}", to_table(std::slice::from_ref(element.record())));
            println!("Color: {}", element.color(&data.colors));

            if !unit.is_empty() {
                println!("{}", converted_properties(&element, unit));
            }
        }
        Commands::Bonds {
            first,
            second,
            order,
        } => {
            let bonds = bonds_for(&data.table, first, second, *order, &data.bonds)?;
            println!("{}", to_table(&bonds));
        }
        Commands::Bonded {
            first,
            second,
            distance,
            order,
            tolerance,
        } => {
            let bonded = are_bonded(
                &data.table,
                first,
                second,
                *distance,
                *order,
                *tolerance,
                &data.bonds,
            )?;

            if bonded {
                println!("{first}-{second} at {distance} ang: {}", "bonded".bold().green());
            } else {
                println!("{first}-{second} at {distance} ang: {}", "not bonded".bold().yellow());
            }
        }
        Commands::Connect {
            path,
            tolerance,
            min_distance,
        } => {
            let atoms = load_atoms(path)?;
            let search = BondSearchBuilder::default()
                .tolerance(*tolerance)
                .min_distance(*min_distance)
                .build()?;

            let bonds = find_bonds(&data.table, &atoms, &data.bonds, &search)?;
            println!("{}", to_table(&bonds));
        }
        Commands::Convert { value, from, to } => {
            let converted = convert_units(*value, *from, *to)?;
            println!("{value} {from} = {converted} {to}");
        }
        Commands::Properties {
            symbols,
            props,
            separator,
        } => {
            let unknown: Vec<&String> = props
                .iter()
                .filter(|p| !property_names().contains(*p))
                .collect();
            if !unknown.is_empty() {
                log::warn!("Skipping unknown properties: {unknown:?}");
            }

            let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
            let props: Vec<&str> = props.iter().map(String::as_str).collect();
            let flat = atomic_properties_flat(&data.table, &symbols, &props, None, separator);
            println!("{}", properties_table(&flat));
        }
        Commands::Validate => unreachable!("handled above"),
    }

    Ok(true)
}

/// Tabulates every property of `element` that can be expressed in one of `units`.
fn converted_properties(element: &ChemicalElement, units: &[Unit]) -> String {
    let mut builder = Builder::default();
    builder.push_record(vec!["Property", "Value"]);

    for unit in units {
        let values: Vec<(&str, Option<f64>)> = match unit.category() {
            UnitCategory::Length => vec![
                ("Atomic radius", element.atomic_radius_in(*unit)),
                ("Van der Waals radius", element.van_der_waals_radius_in(*unit)),
                ("Covalent radius", element.covalent_radius_in(*unit)),
            ],
            UnitCategory::Energy => {
                vec![("Ionization potential", element.ionization_potential_in(*unit))]
            }
            UnitCategory::Mass => vec![("Mass", element.mass_in(*unit))],
        };

        for (name, value) in values {
            let value = value.map_or_else(|| "-".to_string(), |v| format!("{v} {unit}"));
            builder.push_record(vec![name.to_string(), value]);
        }
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

type SchemaCheck = fn(&str) -> Result<ValidationReport, Box<dyn Error>>;

/// Runs schema and consistency validation on the selected datasets.
fn validate(cli: &Cli) -> Result<bool, Box<dyn Error>> {
    let mut valid = true;

    for (path, schema_check) in [
        (&cli.table, validate_json as SchemaCheck),
        (&cli.bonds, validate_bonds_json as SchemaCheck),
    ] {
        let Some(path) = path else { continue };

        let report = schema_check(&fs::read_to_string(path)?)?;
        if !report.valid {
            valid = false;
            println!("{} {}", "Schema violations in".bold(), path.display());
            for error in &report.errors {
                println!("{error}");
            }
        }
    }

    if !valid {
        return Ok(false);
    }

    let data = Datasets::load(cli)?;
    let reports = [
        ("Datasets", check_consistency(&data.table, &data.bonds)),
        ("Conversion tables", check_conversion_tables()),
    ];

    for (name, report) in &reports {
        print_report(name, report);
        valid &= report.is_valid;
    }

    Ok(valid)
}

fn print_report(name: &str, report: &Report) {
    if report.errors.is_empty() {
        println!("{name}: {}", "valid".bold().green());
        return;
    }

    let status = if report.is_valid {
        "valid with warnings".bold().yellow()
    } else {
        "invalid".bold().red()
    };
    println!("{name}: {status}");

    for result in &report.errors {
        println!("{result}");
    }
}
