//! Restore conversion: persisted payload back to the editable form.

use std::collections::BTreeMap;

use clearlane_core::{
    AttributeRow, FormImage, ProductForm, ProductPayload, SkuFormEntry, VariantProperty,
};

use crate::error::DataIntegrityError;

/// Content type discriminator for still images on the media list.
pub const IMAGE_KIND: &str = "image";

/// Convert a fetched [`ProductPayload`] into the form model that seeds an
/// edit session.
///
/// Media entries other than still images are discarded, and display
/// filenames/keys are regenerated synthetically: the originals are not
/// round-tripped. That reconstruction is lossy by design; both fields are
/// cosmetic in this direction. Persisted prices and stock counts are
/// rendered back to decimal strings whose re-parse reproduces the stored
/// number.
///
/// # Errors
///
/// - [`DataIntegrityError::MissingVariant`] when `propsOrder` references a
///   property name absent from `variants`.
/// - [`DataIntegrityError::MalformedAttribute`] when an `attrs` record does
///   not hold exactly one key/value pair.
pub fn api_to_form(payload: &ProductPayload) -> Result<ProductForm, DataIntegrityError> {
    let product_id = payload.id.as_ref().map_or("", |id| id.as_str());

    let images: Vec<FormImage> = payload
        .images
        .iter()
        .filter(|img| img.kind == IMAGE_KIND)
        .enumerate()
        .map(|(index, img)| FormImage {
            url: img.url.clone(),
            kind: img.kind.clone(),
            key: format!("{product_id}_{index}"),
            file_name: format!("image_{}.jpg", index + 1),
        })
        .collect();

    let mut variant_properties = Vec::with_capacity(payload.props_order.len());
    for name in &payload.props_order {
        let values = payload
            .variants
            .get(name)
            .ok_or_else(|| DataIntegrityError::MissingVariant {
                property: name.clone(),
            })?;
        variant_properties.push(VariantProperty {
            name: name.clone(),
            // The per-value ids are only needed in persisted storage; the
            // form displays text alone.
            values: values.iter().map(|value| value.text.clone()).collect(),
        });
    }

    let skus: BTreeMap<String, SkuFormEntry> = payload
        .skus
        .iter()
        .map(|(key, record)| {
            (
                key.clone(),
                SkuFormEntry {
                    price: record.price.to_string(),
                    stock: record.stock.to_string(),
                },
            )
        })
        .collect();

    let mut attributes = Vec::with_capacity(payload.attrs.len());
    for (index, record) in payload.attrs.iter().enumerate() {
        match record.iter().next() {
            Some((key, value)) if record.len() == 1 => attributes.push(AttributeRow {
                key: key.clone(),
                value: value.clone(),
            }),
            _ => {
                return Err(DataIntegrityError::MalformedAttribute {
                    index,
                    len: record.len(),
                });
            }
        }
    }

    Ok(ProductForm {
        variant_properties,
        skus,
        stock: payload.stock.to_string(),
        moq: Some(payload.moq.to_string()),
        description: payload.description.clone(),
        location: payload.location.clone(),
        standard_delivery_fee: payload.standard_delivery_fee.to_string(),
        express_delivery_fee: payload.express_delivery_fee.to_string(),
        images,
        attributes,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clearlane_core::{ImagePayload, ProductId, SkuRecord, VariantValue};

    use super::*;

    fn media(url: &str, kind: &str) -> ImagePayload {
        ImagePayload {
            url: url.to_string(),
            kind: kind.to_string(),
            key: "stored-key".to_string(),
            thumbnail: url.to_string(),
            file_name: "stored.jpg".to_string(),
        }
    }

    fn base_payload() -> ProductPayload {
        ProductPayload {
            id: Some(ProductId::new("p-42")),
            props_order: vec!["color".to_string()],
            variants: BTreeMap::from([(
                "color".to_string(),
                vec![
                    VariantValue {
                        id: "0".to_string(),
                        text: "Red".to_string(),
                    },
                    VariantValue {
                        id: "1".to_string(),
                        text: "Blue".to_string(),
                    },
                ],
            )]),
            skus: BTreeMap::from([(
                "red".to_string(),
                SkuRecord {
                    id: "1".to_string(),
                    price: 10.5,
                    stock: 4.0,
                },
            )]),
            images: vec![
                media("https://cdn.example.com/a.jpg", "image"),
                media("https://cdn.example.com/clip.mp4", "video"),
                media("https://cdn.example.com/b.jpg", "image"),
            ],
            image: "https://cdn.example.com/a.jpg".to_string(),
            attrs: vec![BTreeMap::from([(
                "material".to_string(),
                "cotton".to_string(),
            )])],
            sku_prop_rows: vec![vec!["Red".to_string()], vec!["Blue".to_string()]],
            sku_prop_headers: vec!["color".to_string()],
            props_info_table: vec![vec!["Red".to_string()], vec!["Blue".to_string()]],
            stock: 20.0,
            moq: 2.0,
            description: "A shirt".to_string(),
            location: "Shenzhen".to_string(),
            standard_delivery_fee: 4.0,
            express_delivery_fee: 9.5,
        }
    }

    #[test]
    fn test_non_image_media_is_filtered_out() {
        let form = api_to_form(&base_payload()).unwrap();
        assert_eq!(form.images.len(), 2);
        assert!(form.images.iter().all(|img| img.kind == IMAGE_KIND));
    }

    #[test]
    fn test_synthetic_filenames_and_keys() {
        let form = api_to_form(&base_payload()).unwrap();
        let first = form.images.first().unwrap();
        let second = form.images.last().unwrap();
        assert_eq!(first.file_name, "image_1.jpg");
        assert_eq!(first.key, "p-42_0");
        assert_eq!(second.file_name, "image_2.jpg");
        assert_eq!(second.key, "p-42_1");
    }

    #[test]
    fn test_variant_properties_follow_props_order() {
        let form = api_to_form(&base_payload()).unwrap();
        assert_eq!(form.variant_properties.len(), 1);
        let property = form.variant_properties.first().unwrap();
        assert_eq!(property.name, "color");
        assert_eq!(property.values, vec!["Red".to_string(), "Blue".to_string()]);
    }

    #[test]
    fn test_missing_variant_entry_is_a_data_integrity_error() {
        let mut payload = base_payload();
        payload.props_order.push("size".to_string());

        let err = api_to_form(&payload).unwrap_err();
        assert!(matches!(
            err,
            DataIntegrityError::MissingVariant { property } if property == "size"
        ));
    }

    #[test]
    fn test_sku_numbers_render_back_to_strings() {
        let form = api_to_form(&base_payload()).unwrap();
        let entry = form.skus.get("red").unwrap();
        assert_eq!(entry.price, "10.5");
        assert_eq!(entry.stock, "4");
    }

    #[test]
    fn test_malformed_attribute_record_is_rejected() {
        let mut payload = base_payload();
        payload.attrs.push(BTreeMap::new());

        let err = api_to_form(&payload).unwrap_err();
        assert!(matches!(
            err,
            DataIntegrityError::MalformedAttribute { index: 1, len: 0 }
        ));

        let mut payload = base_payload();
        payload.attrs = vec![BTreeMap::from([
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
        ])];

        let err = api_to_form(&payload).unwrap_err();
        assert!(matches!(
            err,
            DataIntegrityError::MalformedAttribute { index: 0, len: 2 }
        ));
    }

    #[test]
    fn test_scalars_render_back_to_strings() {
        let form = api_to_form(&base_payload()).unwrap();
        assert_eq!(form.stock, "20");
        assert_eq!(form.moq.as_deref(), Some("2"));
        assert_eq!(form.standard_delivery_fee, "4");
        assert_eq!(form.express_delivery_fee, "9.5");
    }

    #[test]
    fn test_missing_product_id_yields_bare_index_keys() {
        let mut payload = base_payload();
        payload.id = None;

        let form = api_to_form(&payload).unwrap();
        assert_eq!(form.images.first().map(|i| i.key.as_str()), Some("_0"));
    }
}
