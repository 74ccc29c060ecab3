//! The editable product form model.
//!
//! These types mirror the state of the admin console's product editor: raw
//! user input, held as strings until submission. The editing surface owns
//! one `ProductForm` for the duration of an edit session; conversion to the
//! persisted payload happens exactly once, on submit.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

// =============================================================================
// Variant Properties
// =============================================================================

/// A named axis of product variation (e.g., "Color") with an ordered list
/// of permissible values.
///
/// Value order is significant: it defines both display order and the
/// dimension order used when combinations are generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct VariantProperty {
    /// Property name as the user typed it.
    #[validate(length(min = 1))]
    pub name: String,
    /// Permissible values, order-significant.
    pub values: Vec<String>,
}

/// One row of the per-combination pricing table, keyed by SKU key.
///
/// Both fields hold raw decimal input and may be empty or non-numeric
/// while the user is still editing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuFormEntry {
    /// Unit price as entered.
    pub price: String,
    /// Stock count as entered.
    pub stock: String,
}

// =============================================================================
// Images and Attributes
// =============================================================================

/// An uploaded media item as the editing form tracks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormImage {
    /// Hosted asset URL.
    pub url: String,
    /// Content type discriminator ("image", "video", ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Upload key identifying the asset.
    pub key: String,
    /// Display filename.
    pub file_name: String,
}

/// One key/value row of the free-form attribute table.
///
/// Rows are kept as an ordered sequence, never merged into a single map:
/// duplicate keys across rows stay distinguishable by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRow {
    /// Attribute name.
    pub key: String,
    /// Attribute value.
    pub value: String,
}

// =============================================================================
// Product Form
// =============================================================================

/// The in-memory, user-editable representation of a product prior to
/// submission.
///
/// Numeric fields are strings on purpose: the form accepts partial input
/// and only coerces to numbers when converted to the API payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    /// Ordered variant property axes.
    #[validate(nested)]
    pub variant_properties: Vec<VariantProperty>,
    /// Sparse pricing table: only combinations the user filled in have
    /// entries. Keyed by derived SKU key.
    pub skus: BTreeMap<String, SkuFormEntry>,
    /// Product-level stock count.
    pub stock: String,
    /// Minimum order quantity. `None` when the field was never filled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moq: Option<String>,
    /// Long-form product description.
    #[validate(length(max = 5000))]
    pub description: String,
    /// Shipping origin location.
    #[validate(length(min = 1))]
    pub location: String,
    /// Standard (economy) delivery fee.
    pub standard_delivery_fee: String,
    /// Express delivery fee.
    pub express_delivery_fee: String,
    /// Uploaded media, first entry doubles as the cover image.
    #[validate(length(min = 1))]
    pub images: Vec<FormImage>,
    /// Free-form attribute rows, order preserved.
    pub attributes: Vec<AttributeRow>,
}
