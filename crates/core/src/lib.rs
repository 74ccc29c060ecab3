//! Clearlane Core - Shared types library.
//!
//! This crate provides common types used across all Clearlane components:
//! - `catalog` - Product form/payload mapping for the admin console
//! - `cli` - Command-line tools for payload conversion and validation
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs plus the editable product form model and the
//!   persisted product payload model

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
