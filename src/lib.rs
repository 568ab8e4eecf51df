//! Periodic Table Rust Library
//!
//! This library provides access to reference data of the chemical elements, including:
//! - Element properties with unit-aware getters
//! - Conversion of lengths, energies and masses over sparse conversion tables
//! - Bond inference between element pairs from known bonds or covalent radii
//! - Bond detection for atomic structures
//! - Loading, saving and validating dataset files

#![warn(unused_imports)]

/// Commonly used types and functionality re-exported for convenience
pub mod prelude {
    pub use crate::bonds::*;
    pub use crate::colors::*;
    pub use crate::connectivity::*;
    pub use crate::conversion::*;
    pub use crate::element::*;
    pub use crate::io::*;
    pub use crate::properties::*;
    pub use crate::table::*;
    pub use crate::units::*;
}

/// Physical units and their categories
pub mod units;

/// Generic conversion engine over sparse conversion tables
pub mod conversion;

/// Procedural and helper macros
pub mod macros {
    /// Macro for declaring conversion tables
    #[macro_use]
    pub mod table_macro;
    /// Built-in conversion tables
    pub mod unit_maps;
}

/// Embedded reference datasets
pub mod data;

/// Periodic table data source
pub mod table;

/// Element property facade
pub mod element;

/// Element display colors
pub mod colors;

/// Flat property listings
pub mod properties;

/// Bond catalog and bond inference
pub mod bonds;

/// Bond detection for atomic structures
pub mod connectivity;

/// Validation of periodic-table datasets
pub mod validation {
    pub use crate::validation::schema::*;
    /// Validation of bond records
    mod bonds;
    /// Main consistency interface
    pub mod consistency;
    /// Validation of element records
    mod elements;
    /// Main schema validation interface
    pub mod schema;
}

/// IO functionality
pub mod io;

/// Table rendering of records and property listings
pub mod info;

/// Symbol and deserialization helpers
pub mod utils;
