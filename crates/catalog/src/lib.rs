//! Clearlane Catalog - product form/payload mapping.
//!
//! The admin console edits a product as a [`clearlane_core::ProductForm`]:
//! ordered variant properties, a sparse per-combination pricing table, and
//! raw string scalars. The backend persists a
//! [`clearlane_core::ProductPayload`]: lower-cased property order, stable
//! value ids, and a dense map of derived SKU keys to pricing records. This
//! crate owns the transform in both directions.
//!
//! # Modules
//!
//! - [`sku`] - SKU key normalization and Cartesian combination generation
//! - [`conversions`] - `form_to_api` and `api_to_form`
//! - [`validation`] - pre-submission schema checks
//! - [`error`] - `ValidationError` and `DataIntegrityError`
//!
//! # Example
//!
//! ```rust,ignore
//! use clearlane_catalog::{check_form, form_to_api};
//!
//! check_form(&form)?;
//! let payload = form_to_api(&form)?;
//! client.create_product(&payload).await?;
//! ```
//!
//! Both transforms are pure and synchronous: no I/O, no shared state, no
//! hidden counters across calls.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod conversions;
pub mod error;
pub mod sku;
pub mod validation;

pub use conversions::{api_to_form, form_to_api};
pub use error::{DataIntegrityError, ValidationError};
pub use validation::check_form;
