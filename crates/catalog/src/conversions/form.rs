//! Forward conversion: editable form to persisted payload.

use std::collections::BTreeMap;

use clearlane_core::{ImagePayload, ProductForm, ProductPayload, SkuRecord, VariantValue};

use super::parse_or;
use crate::error::ValidationError;
use crate::sku::expand_combinations;

/// Convert a submitted [`ProductForm`] into the backend's create/update
/// request body.
///
/// Property names are lower-cased into `propsOrder`; every declared value
/// gets a stable 0-based id; the Cartesian product of non-blank values is
/// expanded in declaration order and each combination with a non-empty
/// entry on the sparse pricing table becomes a `skus` record with a
/// 1-based sequential id. Combinations the user never priced are dropped
/// from `skus` on purpose; the payload never stores them.
///
/// # Errors
///
/// - [`ValidationError::NoImages`] when the image list is empty: the cover
///   image is the first entry.
/// - [`ValidationError::EmptyPropertyValues`] when a declared property has
///   no non-blank values.
/// - [`ValidationError::SkuKeyCollision`] when two distinct value tuples
///   normalize to the same key.
pub fn form_to_api(form: &ProductForm) -> Result<ProductPayload, ValidationError> {
    let cover = form
        .images
        .first()
        .map(|img| img.url.clone())
        .ok_or(ValidationError::NoImages)?;

    let props_order: Vec<String> = form
        .variant_properties
        .iter()
        .map(|p| p.name.to_lowercase())
        .collect();

    let variants: BTreeMap<String, Vec<VariantValue>> = form
        .variant_properties
        .iter()
        .map(|property| {
            let values = property
                .values
                .iter()
                .enumerate()
                .map(|(index, text)| VariantValue {
                    id: index.to_string(),
                    text: text.clone(),
                })
                .collect();
            (property.name.to_lowercase(), values)
        })
        .collect();

    let combinations = expand_combinations(&form.variant_properties)?;

    let mut skus = BTreeMap::new();
    // Local accumulator: ids are assigned per emission, in generation order,
    // and never survive across calls.
    let mut next_id: u32 = 1;
    for combination in &combinations {
        let Some(entry) = form.skus.get(&combination.key) else {
            continue;
        };
        if entry.price.trim().is_empty() && entry.stock.trim().is_empty() {
            continue;
        }
        skus.insert(
            combination.key.clone(),
            SkuRecord {
                id: next_id.to_string(),
                price: parse_or(&entry.price, 0.0),
                stock: parse_or(&entry.stock, 0.0),
            },
        );
        next_id += 1;
    }

    let images: Vec<ImagePayload> = form
        .images
        .iter()
        .map(|img| ImagePayload {
            url: img.url.clone(),
            kind: img.kind.clone(),
            key: img.key.clone(),
            // No independently generated thumbnail URL at this layer.
            thumbnail: img.url.clone(),
            file_name: img.file_name.clone(),
        })
        .collect();

    let attrs: Vec<BTreeMap<String, String>> = form
        .attributes
        .iter()
        .map(|row| BTreeMap::from([(row.key.clone(), row.value.clone())]))
        .collect();

    let sku_prop_rows: Vec<Vec<String>> = combinations
        .iter()
        .map(|combination| combination.values.clone())
        .collect();

    Ok(ProductPayload {
        id: None,
        props_order: props_order.clone(),
        variants,
        skus,
        images,
        image: cover,
        attrs,
        sku_prop_rows: sku_prop_rows.clone(),
        sku_prop_headers: props_order,
        props_info_table: sku_prop_rows,
        stock: parse_or(&form.stock, 0.0),
        moq: form.moq.as_deref().map_or(1.0, |moq| parse_or(moq, 0.0)),
        description: form.description.clone(),
        location: form.location.clone(),
        standard_delivery_fee: parse_or(&form.standard_delivery_fee, 0.0),
        express_delivery_fee: parse_or(&form.express_delivery_fee, 0.0),
    })
}
