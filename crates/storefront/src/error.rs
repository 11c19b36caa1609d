//! Unified error type for front ends driving the storefront.
//!
//! Library modules return their own error enums; binaries collect them into
//! [`AppError`] so a single `?` chain can run a whole command.

use thiserror::Error;

use crate::auth::AuthError;
use crate::cart::CartError;
use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::slider::SliderError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The catalog could not be built.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A cart operation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Sign-in failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Slider navigation failed.
    #[error("Slider error: {0}")]
    Slider(#[from] SliderError),

    /// Template rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

impl AppError {
    /// Whether the error was caused by user input rather than the environment.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Cart(
                CartError::NotFound(_) | CartError::QuantityLimit(_) | CartError::TotalOverflow
            ) | Self::Auth(_) | Self::Slider(_)
        )
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
