use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::{
    bonds::BondRecord, colors::ElementColors, connectivity::Atom, table::PeriodicTable,
};

/// Loads a periodic table from a JSON file.
///
/// The file holds an object keyed by element symbol, in the same layout as the
/// embedded dataset.
///
/// # Arguments
///
/// * `path` - Path to the JSON file
///
/// # Errors
///
/// This function will return an error if:
/// * The file cannot be found or opened (`IOError::FileNotFound`)
/// * The file contents cannot be parsed as a periodic table (`IOError::JsonParseError`)
pub fn load_periodic_table(path: impl Into<PathBuf>) -> Result<PeriodicTable, IOError> {
    load_json(path)
}

/// Loads a bond catalog, stored as a JSON array of bond records.
pub fn load_bonds(path: impl Into<PathBuf>) -> Result<Vec<BondRecord>, IOError> {
    load_json(path)
}

/// Loads a color palette, stored as a JSON object from symbol to color.
pub fn load_colors(path: impl Into<PathBuf>) -> Result<ElementColors, IOError> {
    load_json(path)
}

/// Loads the atoms of a structure, stored as a JSON array of
/// `{"symbol": .., "position": [x, y, z]}` objects with coordinates in Å.
pub fn load_atoms(path: impl Into<PathBuf>) -> Result<Vec<Atom>, IOError> {
    load_json(path)
}

/// Saves a periodic table as pretty-printed JSON.
///
/// # Arguments
///
/// * `path` - Path to the JSON file, created or truncated
/// * `table` - The periodic table to save
pub fn save_periodic_table(
    path: impl Into<PathBuf>,
    table: &PeriodicTable,
) -> Result<(), IOError> {
    save_json(path, table)
}

/// Saves a bond catalog as pretty-printed JSON.
pub fn save_bonds(path: impl Into<PathBuf>, bonds: &[BondRecord]) -> Result<(), IOError> {
    save_json(path, &bonds)
}

fn load_json<T: DeserializeOwned>(path: impl Into<PathBuf>) -> Result<T, IOError> {
    let path = path.into();
    log::debug!("Loading {}", path.display());
    let file = std::fs::File::open(path).map_err(IOError::FileNotFound)?;
    serde_json::from_reader(std::io::BufReader::new(file)).map_err(IOError::JsonParseError)
}

fn save_json<T: Serialize + ?Sized>(path: impl Into<PathBuf>, value: &T) -> Result<(), IOError> {
    let path = path.into();
    let file = std::fs::File::create(path).map_err(IOError::FileNotFound)?;
    serde_json::to_writer_pretty(file, value).map_err(IOError::JsonParseError)
}

/// Errors raised while reading or writing dataset files.
#[derive(Error, Debug)]
pub enum IOError {
    /// The file could not be found, opened or created.
    #[error("File not found: {0}")]
    FileNotFound(#[from] std::io::Error),

    /// The file contents could not be parsed or serialized as JSON.
    #[error("Failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),
}
