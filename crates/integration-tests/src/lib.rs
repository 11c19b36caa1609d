//! Integration tests for Pixalara.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p pixalara-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart store against the file-backed store
//! - `storefront_flow` - Catalog, cart, slider and views together
//!
//! Shared helpers live here so test files stay focused on behaviour.

use std::path::{Path, PathBuf};

/// A storage file path under the system temp dir, removed on drop.
#[derive(Debug)]
pub struct TempStorageFile {
    path: PathBuf,
}

impl TempStorageFile {
    /// Pick a fresh, unused path.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: std::env::temp_dir().join(format!("pixalara-it-{}.json", uuid::Uuid::new_v4())),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for TempStorageFile {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TempStorageFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
