//! Pixalara Core - Shared types library.
//!
//! This crate provides common types used across all Pixalara components:
//! - `storefront` - Catalog, cart store, slider and views
//! - `cli` - Command-line front end over the storefront library
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, categories and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
