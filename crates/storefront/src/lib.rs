//! Pixalara Storefront library.
//!
//! The storefront core: a read-only product catalog, a cart that survives
//! restarts by mirroring itself into durable key-value storage, category
//! filtering, the hero slider, a simulated sign-in and HTML fragments for
//! all of it.
//!
//! # Modules
//!
//! - [`catalog`] - Products, category filters, featured listings
//! - [`cart`] - The cart store and its line items
//! - [`storage`] - Key-value backends (memory, JSON file)
//! - [`notify`] - Toast notifications
//! - [`slider`] - Rotating featured-product slider
//! - [`auth`] - Simulated sign-in
//! - [`views`] - Display models and Askama templates
//! - [`config`] - Environment configuration
//! - [`error`] - Aggregate error type for front ends

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod notify;
pub mod slider;
pub mod storage;
pub mod views;

pub use cart::{CartError, CartLineItem, CartOptions, CartStore, ChangeOutcome};
pub use catalog::{Catalog, CategoryFilter, Product};
pub use config::StorefrontConfig;
pub use error::AppError;
