//! Integration tests for Clearlane.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p clearlane-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_round_trip` - Form/payload round-trip properties
//! - `catalog_wire_format` - JSON wire-shape assertions
//!
//! The helpers below build the fixture documents the test files share.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::BTreeMap;

use clearlane_core::{AttributeRow, FormImage, ProductForm, SkuFormEntry, VariantProperty};

/// A fully-populated two-property form: every generated combination has a
/// priced entry, so the forward conversion drops nothing.
#[must_use]
pub fn full_form() -> ProductForm {
    ProductForm {
        variant_properties: vec![
            VariantProperty {
                name: "color".to_string(),
                values: vec!["Red".to_string(), "Blue".to_string()],
            },
            VariantProperty {
                name: "size".to_string(),
                values: vec!["S".to_string(), "M".to_string()],
            },
        ],
        skus: BTreeMap::from([
            ("red_s".to_string(), sku_entry("10", "5")),
            ("red_m".to_string(), sku_entry("11", "4")),
            ("blue_s".to_string(), sku_entry("12.5", "3")),
            ("blue_m".to_string(), sku_entry("13", "2")),
        ]),
        stock: "14".to_string(),
        moq: Some("1".to_string()),
        description: "Crew-neck shirt".to_string(),
        location: "Shenzhen".to_string(),
        standard_delivery_fee: "4".to_string(),
        express_delivery_fee: "9.5".to_string(),
        images: vec![FormImage {
            url: "https://cdn.example.com/shirt.jpg".to_string(),
            kind: "image".to_string(),
            key: "upload-1".to_string(),
            file_name: "shirt.jpg".to_string(),
        }],
        attributes: vec![AttributeRow {
            key: "material".to_string(),
            value: "cotton".to_string(),
        }],
    }
}

/// Build one sparse pricing entry.
#[must_use]
pub fn sku_entry(price: &str, stock: &str) -> SkuFormEntry {
    SkuFormEntry {
        price: price.to_string(),
        stock: stock.to_string(),
    }
}
