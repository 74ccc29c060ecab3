//! Product form/payload commands.

use std::io::Write as _;
use std::path::Path;

use clearlane_catalog::{api_to_form, check_form, form_to_api};
use clearlane_core::{ProductForm, ProductPayload};
use serde::Serialize;

use super::{CliError, read_json};

/// Convert an editable form document to the API create/update body.
pub fn convert(input: &Path, pretty: bool) -> Result<(), CliError> {
    let form: ProductForm = read_json(input)?;
    let payload = form_to_api(&form)?;
    tracing::debug!(
        skus = payload.skus.len(),
        properties = payload.props_order.len(),
        "converted form to payload"
    );
    emit(&payload, pretty)
}

/// Restore a fetched payload document to the editable form shape.
pub fn restore(input: &Path, pretty: bool) -> Result<(), CliError> {
    let payload: ProductPayload = read_json(input)?;
    let form = api_to_form(&payload)?;
    tracing::debug!(
        images = form.images.len(),
        properties = form.variant_properties.len(),
        "restored payload to form"
    );
    emit(&form, pretty)
}

/// Validate a form document against the submission schema.
pub fn check(input: &Path) -> Result<(), CliError> {
    let form: ProductForm = read_json(input)?;
    check_form(&form)?;
    tracing::info!(path = %input.display(), "form is valid");
    Ok(())
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> Result<(), CliError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}
