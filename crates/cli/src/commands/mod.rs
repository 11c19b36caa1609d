//! Command implementations.
//!
//! Every command starts from a [`Context`]: configuration plus the catalog.
//! Cart commands then open the persisted cart from the configured file.

use std::sync::Arc;

use pixalara_storefront::notify::LogNotifier;
use pixalara_storefront::storage::FileStore;
use pixalara_storefront::{AppError, CartOptions, CartStore, Catalog, StorefrontConfig};

pub mod cart;
pub mod login;
pub mod products;
pub mod slider;

/// Cart backed by the configured storage file.
pub type FileCart = CartStore<FileStore, LogNotifier>;

/// Shared startup state for a single command run.
pub struct Context {
    pub config: StorefrontConfig,
    pub catalog: Arc<Catalog>,
}

impl Context {
    /// Load configuration and the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or a configured catalog
    /// file cannot be loaded.
    pub fn from_env() -> Result<Self, AppError> {
        let config = StorefrontConfig::from_env()?;
        let catalog = match &config.catalog_file {
            Some(path) => {
                let catalog = Catalog::from_file(path)?;
                tracing::debug!(path = %path.display(), products = catalog.len(), "Catalog loaded");
                catalog
            }
            None => Catalog::builtin(),
        };
        Ok(Self {
            config,
            catalog: Arc::new(catalog),
        })
    }

    /// Open the persisted cart.
    pub fn open_cart(&self) -> FileCart {
        CartStore::load_with(
            Arc::clone(&self.catalog),
            FileStore::new(&self.config.data_file),
            LogNotifier,
            CartOptions::from(&self.config),
        )
    }
}
