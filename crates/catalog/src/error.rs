//! Error types for the catalog transforms.
//!
//! Both kinds are raised synchronously to the caller and are never retried:
//! there is no I/O behind either transform. The calling form layer is
//! responsible for surfacing these as user-visible messages; this crate
//! never renders UI or logs.

use thiserror::Error;

/// Caller-supplied form input violates a precondition of the forward
/// conversion or of the submission schema.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The image list was empty. The cover image is defined as the first
    /// entry, so an empty list cannot be converted.
    #[error("product has no images; at least one is required for the cover image")]
    NoImages,

    /// A declared variant property had no non-blank values. An empty
    /// Cartesian dimension would collapse the whole product to zero
    /// combinations and discard every SKU row the user filled in.
    #[error("variant property '{property}' has no usable values")]
    EmptyPropertyValues {
        /// Name of the offending property.
        property: String,
    },

    /// Two distinct value tuples normalized to the same SKU key. A silent
    /// overwrite here would discard user-entered pricing data, so the
    /// conversion refuses instead.
    #[error("SKU key collision on '{key}': ({}) vs ({})", .first.join(", "), .second.join(", "))]
    SkuKeyCollision {
        /// The shared, normalized key.
        key: String,
        /// The tuple that produced the key first, in generation order.
        first: Vec<String>,
        /// The later tuple that collided with it.
        second: Vec<String>,
    },

    /// A required numeric field holds a value that does not parse.
    #[error("field '{field}' must be numeric, got '{value}'")]
    NonNumericField {
        /// Wire name of the offending field.
        field: String,
        /// The raw input.
        value: String,
    },

    /// Schema-level checks on the form failed.
    #[error("form schema validation failed: {0}")]
    Schema(#[from] validator::ValidationErrors),
}

/// The persisted product record consumed by the restore conversion is
/// internally inconsistent.
#[derive(Debug, Error)]
pub enum DataIntegrityError {
    /// `propsOrder` names a property that `variants` does not carry.
    #[error("propsOrder references '{property}' but variants has no such entry")]
    MissingVariant {
        /// The dangling property name.
        property: String,
    },

    /// An `attrs` record must hold exactly one key/value pair.
    #[error("attrs[{index}] holds {len} entries; expected exactly one")]
    MalformedAttribute {
        /// Position of the offending record.
        index: usize,
        /// Number of entries it actually holds.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::NoImages;
        assert_eq!(
            err.to_string(),
            "product has no images; at least one is required for the cover image"
        );

        let err = ValidationError::EmptyPropertyValues {
            property: "color".to_string(),
        };
        assert_eq!(err.to_string(), "variant property 'color' has no usable values");
    }

    #[test]
    fn test_collision_error_names_both_tuples() {
        let err = ValidationError::SkuKeyCollision {
            key: "extralarge".to_string(),
            first: vec!["Extra Large".to_string()],
            second: vec!["extralarge".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "SKU key collision on 'extralarge': (Extra Large) vs (extralarge)"
        );
    }

    #[test]
    fn test_data_integrity_error_display() {
        let err = DataIntegrityError::MissingVariant {
            property: "size".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "propsOrder references 'size' but variants has no such entry"
        );

        let err = DataIntegrityError::MalformedAttribute { index: 2, len: 0 };
        assert_eq!(err.to_string(), "attrs[2] holds 0 entries; expected exactly one");
    }
}
