use serde::{de::Error as _, Deserialize, Deserializer};

/// Returns the canonical form of an element symbol: first letter uppercase, rest lowercase
///
/// # Arguments
/// * `symbol` - The symbol in any letter case, e.g. `"fE"`
///
/// # Returns
/// * `String` - The canonical symbol, e.g. `"Fe"`
pub fn canonical_symbol(symbol: &str) -> String {
    let mut chars = symbol.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Returns the element pair as a sorted array, so that `(A, B)` and `(B, A)` compare equal
pub fn sorted_pair<'a>(first: &'a str, second: &'a str) -> [&'a str; 2] {
    if first <= second {
        [first, second]
    } else {
        [second, first]
    }
}

/// Deserializes an optional number that may also be given as a blank string.
///
/// Reference datasets mark missing numeric properties either with `null` or with
/// `""`; both map to `None`. Numeric strings such as `"1.5"` are accepted as well.
pub(crate) fn deserialize_optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(value)) => Ok(Some(value)),
        Some(NumberOrText::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected a number, found '{text}'"))),
    }
}
