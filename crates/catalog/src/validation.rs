//! Pre-submission checks for the product form.
//!
//! The editing surface runs these before handing the form to the forward
//! conversion. `form_to_api` assumes basic shape validity and re-checks
//! only what its own algorithm depends on, so callers should treat this
//! module as the gate between "still editing" and "ready to submit".

use clearlane_core::ProductForm;
use validator::Validate;

use crate::error::ValidationError;

/// Numeric scalar fields the submission schema marks as required. `moq` is
/// genuinely optional and is only coerced, never rejected.
const REQUIRED_NUMERIC_FIELDS: &[(&str, fn(&ProductForm) -> &str)] = &[
    ("stock", |form| form.stock.as_str()),
    ("standardDeliveryFee", |form| {
        form.standard_delivery_fee.as_str()
    }),
    ("expressDeliveryFee", |form| form.express_delivery_fee.as_str()),
];

/// Validate a [`ProductForm`] against the submission schema.
///
/// Runs the derive-level checks (required location, description bounds,
/// image presence, named properties) and then the structural checks the
/// derive cannot express: every declared property must keep at least one
/// non-blank value, and required numeric scalars must parse when present.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn check_form(form: &ProductForm) -> Result<(), ValidationError> {
    form.validate()?;

    for property in &form.variant_properties {
        if !property.values.iter().any(|value| !value.trim().is_empty()) {
            return Err(ValidationError::EmptyPropertyValues {
                property: property.name.clone(),
            });
        }
    }

    for (field, access) in REQUIRED_NUMERIC_FIELDS {
        let raw = access(form).trim();
        if !raw.is_empty() && raw.parse::<f64>().is_err() {
            return Err(ValidationError::NonNumericField {
                field: (*field).to_string(),
                value: raw.to_string(),
            });
        }
    }

    Ok(())
}
