//! The persisted product payload model.
//!
//! These types match the backend's product create/update request body and
//! its product response body (camelCase wire names). They are the output of
//! the forward form conversion and the input of the edit-session restore.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::id::ProductId;

// =============================================================================
// Variant and SKU Records
// =============================================================================

/// One selectable value of a variant property as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantValue {
    /// Stable per-value index, assigned at creation, stringified, 0-based.
    pub id: String,
    /// Display text, exactly as entered on the form.
    pub text: String,
}

/// Pricing record for one purchasable variant combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuRecord {
    /// Sequential id, 1-based; assignment order equals combination
    /// generation order.
    pub id: String,
    /// Unit price.
    pub price: f64,
    /// Stock count.
    pub stock: f64,
}

// =============================================================================
// Images
// =============================================================================

/// A media item as the backend stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    /// Hosted asset URL.
    pub url: String,
    /// Content type discriminator ("image", "video", ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Upload key identifying the asset.
    pub key: String,
    /// Thumbnail URL. No independent thumbnail exists at this layer, so
    /// this always equals `url` on the forward conversion.
    pub thumbnail: String,
    /// Display filename.
    pub file_name: String,
}

// =============================================================================
// Product Payload
// =============================================================================

/// The backend's canonical stored representation of a product.
///
/// `skus` holds exactly one entry per SKU key that is reachable from the
/// declared variant properties and had a non-empty entry on the form's
/// sparse pricing table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    /// Product id. Absent on a create request, present on responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    /// Property names, lower-cased, in declaration order.
    pub props_order: Vec<String>,
    /// Per-property value records, keyed by lower-cased property name.
    pub variants: BTreeMap<String, Vec<VariantValue>>,
    /// Pricing records keyed by derived SKU key.
    pub skus: BTreeMap<String, SkuRecord>,
    /// All media items.
    pub images: Vec<ImagePayload>,
    /// Cover image URL, always the first entry of `images`.
    pub image: String,
    /// Attribute rows as single-entry maps, order preserved.
    pub attrs: Vec<BTreeMap<String, String>>,
    /// Generated combinations as raw, non-normalized value tuples.
    pub sku_prop_rows: Vec<Vec<String>>,
    /// Column headers for the combination table; equals `props_order`.
    pub sku_prop_headers: Vec<String>,
    /// The combination tuples again, kept as a separate field for a
    /// different consumer.
    pub props_info_table: Vec<Vec<String>>,
    /// Product-level stock count.
    pub stock: f64,
    /// Minimum order quantity.
    pub moq: f64,
    /// Long-form product description.
    pub description: String,
    /// Shipping origin location.
    pub location: String,
    /// Standard (economy) delivery fee.
    pub standard_delivery_fee: f64,
    /// Express delivery fee.
    pub express_delivery_fee: f64,
}
