//! Element display colors.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::data;

/// Color returned for symbols without a palette entry.
pub const DEFAULT_COLOR: &str = "#999";

/// Mapping from element symbol to a `#RRGGBB` color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ElementColors {
    colors: BTreeMap<String, String>,
}

impl ElementColors {
    /// Jmol/CPK palette compiled into the library.
    pub fn embedded() -> &'static ElementColors {
        &data::ELEMENT_COLORS
    }

    /// Color for `symbol`, or [`DEFAULT_COLOR`].
    pub fn color_by_symbol(&self, symbol: &str) -> &str {
        self.get(symbol).unwrap_or(DEFAULT_COLOR)
    }

    pub fn get(&self, symbol: &str) -> Option<&str> {
        self.colors.get(symbol).map(String::as_str)
    }

    pub fn insert(
        &mut self,
        symbol: impl Into<String>,
        color: impl Into<String>,
    ) -> Option<String> {
        self.colors.insert(symbol.into(), color.into())
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.colors
            .iter()
            .map(|(symbol, color)| (symbol.as_str(), color.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_palette() {
        let colors = ElementColors::embedded();

        assert_eq!(colors.color_by_symbol("H"), "#FFFFFF");
        assert!(colors.iter().all(|(_, c)| c.starts_with('#') && c.len() == 7));
    }

    #[test]
    fn test_missing_color_falls_back() {
        let colors = ElementColors::embedded();

        assert_eq!(colors.color_by_symbol("Og"), DEFAULT_COLOR);
        assert_eq!(colors.color_by_symbol("Xx"), "#999");
    }

    #[test]
    fn test_insert() {
        let mut colors = ElementColors::default();
        colors.insert("C", "#000000");

        assert_eq!(colors.get("C"), Some("#000000"));
        assert_eq!(colors.len(), 1);
    }
}
