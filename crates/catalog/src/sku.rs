//! SKU key derivation and combination generation.
//!
//! A SKU key is the join of one value per variant property, each value
//! lower-cased with all whitespace removed, joined with `_`, in property
//! order. Two keys are equal iff their underlying value tuples are equal
//! under this normalization, which is why expansion detects collisions
//! instead of relying on map-overwrite semantics.

use std::collections::HashMap;

use clearlane_core::VariantProperty;

use crate::error::ValidationError;

/// Separator between normalized values in a SKU key.
const KEY_SEPARATOR: &str = "_";

/// One Cartesian-product tuple of values, one per variant property, in
/// property order, together with its derived key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    /// Raw, non-normalized values as they appear on the form.
    pub values: Vec<String>,
    /// The derived SKU key.
    pub key: String,
}

/// Normalize one variant value for key derivation: lower-case it and strip
/// all whitespace.
#[must_use]
pub fn normalize_value(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Derive the SKU key for one value tuple.
#[must_use]
pub fn sku_key(values: &[String]) -> String {
    values
        .iter()
        .map(|v| normalize_value(v))
        .collect::<Vec<_>>()
        .join(KEY_SEPARATOR)
}

/// Expand the full Cartesian product of each property's non-blank values,
/// preserving property order as dimension order: the first property varies
/// slowest.
///
/// Zero properties yields zero combinations (the empty product), not a
/// single empty combination.
///
/// # Errors
///
/// - [`ValidationError::EmptyPropertyValues`] when a declared property has
///   no value left after the blank filter.
/// - [`ValidationError::SkuKeyCollision`] when two distinct tuples derive
///   the same key.
pub fn expand_combinations(
    properties: &[VariantProperty],
) -> Result<Vec<Combination>, ValidationError> {
    if properties.is_empty() {
        return Ok(Vec::new());
    }

    let mut dimensions: Vec<Vec<&str>> = Vec::with_capacity(properties.len());
    for property in properties {
        let usable: Vec<&str> = property
            .values
            .iter()
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
            .collect();
        if usable.is_empty() {
            return Err(ValidationError::EmptyPropertyValues {
                property: property.name.clone(),
            });
        }
        dimensions.push(usable);
    }

    let mut tuples: Vec<Vec<String>> = vec![Vec::new()];
    for dimension in &dimensions {
        let mut next = Vec::with_capacity(tuples.len() * dimension.len());
        for prefix in &tuples {
            for value in dimension {
                let mut tuple = prefix.clone();
                tuple.push((*value).to_string());
                next.push(tuple);
            }
        }
        tuples = next;
    }

    let mut seen: HashMap<String, Vec<String>> = HashMap::with_capacity(tuples.len());
    let mut combinations = Vec::with_capacity(tuples.len());
    for values in tuples {
        let key = sku_key(&values);
        if let Some(first) = seen.get(&key) {
            return Err(ValidationError::SkuKeyCollision {
                key,
                first: first.clone(),
                second: values,
            });
        }
        seen.insert(key.clone(), values.clone());
        combinations.push(Combination { values, key });
    }

    Ok(combinations)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn property(name: &str, values: &[&str]) -> VariantProperty {
        VariantProperty {
            name: name.to_string(),
            values: values.iter().map(|v| (*v).to_string()).collect(),
        }
    }

    #[test]
    fn test_normalize_lowercases_and_strips_whitespace() {
        assert_eq!(normalize_value("Extra Large"), "extralarge");
        assert_eq!(normalize_value("  Navy Blue "), "navyblue");
        assert_eq!(normalize_value("XL"), "xl");
    }

    #[test]
    fn test_sku_key_joins_in_property_order() {
        let values = vec!["Red".to_string(), "S".to_string()];
        assert_eq!(sku_key(&values), "red_s");
    }

    #[test]
    fn test_first_property_varies_slowest() {
        let combos = expand_combinations(&[
            property("color", &["Red", "Blue"]),
            property("size", &["S", "M"]),
        ])
        .unwrap();

        let keys: Vec<&str> = combos.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["red_s", "red_m", "blue_s", "blue_m"]);
    }

    #[test]
    fn test_zero_properties_is_the_empty_product() {
        let combos = expand_combinations(&[]).unwrap();
        assert!(combos.is_empty());
    }

    #[test]
    fn test_blank_values_are_excluded() {
        let combos =
            expand_combinations(&[property("color", &["Red", "  ", ""])]).unwrap();
        let keys: Vec<&str> = combos.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["red"]);
    }

    #[test]
    fn test_all_blank_values_is_an_error() {
        let err = expand_combinations(&[property("color", &["", "  "])]).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::EmptyPropertyValues { property } if property == "color"
        ));
    }

    #[test]
    fn test_colliding_tuples_are_rejected() {
        let err = expand_combinations(&[property("size", &["Extra Large", "extralarge"])])
            .unwrap_err();
        match err {
            ValidationError::SkuKeyCollision { key, first, second } => {
                assert_eq!(key, "extralarge");
                assert_eq!(first, vec!["Extra Large".to_string()]);
                assert_eq!(second, vec!["extralarge".to_string()]);
            }
            other => panic!("expected collision, got {other}"),
        }
    }

    #[test]
    fn test_raw_values_are_preserved_in_tuples() {
        let combos = expand_combinations(&[
            property("color", &["Navy Blue"]),
            property("size", &["M"]),
        ])
        .unwrap();

        let combo = combos.first().unwrap();
        assert_eq!(combo.values, vec!["Navy Blue".to_string(), "M".to_string()]);
        assert_eq!(combo.key, "navyblue_m");
    }
}
