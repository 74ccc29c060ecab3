//! Core types for Clearlane.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod form;
pub mod id;
pub mod product;

pub use form::{AttributeRow, FormImage, ProductForm, SkuFormEntry, VariantProperty};
pub use id::*;
pub use product::{ImagePayload, ProductPayload, SkuRecord, VariantValue};
