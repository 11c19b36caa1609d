//! Cart state and persistence.
//!
//! [`CartStore`] owns the cart. It is loaded once from durable storage when
//! the app starts and every mutation is written back before the call
//! returns. Writes happen before the in-memory state is replaced, so if the
//! backend rejects a write the store keeps its previous contents and memory
//! never runs ahead of storage.

mod item;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use pixalara_core::{Price, ProductId};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::catalog::Catalog;
use crate::config::{DEFAULT_CART_KEY, StorefrontConfig};
use crate::notify::{DEFAULT_TOAST_DURATION, Notification, Notifier};
use crate::storage::{KeyValueStore, StorageError};

pub use item::CartLineItem;

/// Errors returned by cart mutations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The product id is not in the catalog.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// The line item is already at the largest quantity a cart can hold.
    #[error("product {0} is at the maximum quantity")]
    QuantityLimit(ProductId),

    /// The cart total would exceed the largest representable amount.
    #[error("cart total is too large")]
    TotalOverflow,

    /// The cart could not be written to durable storage.
    #[error("failed to persist cart: {0}")]
    Storage(#[from] StorageError),

    /// The cart could not be serialized.
    #[error("failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result of [`CartStore::change_qty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// No line item with that id; nothing happened.
    Missing,
    /// The line item now has this quantity.
    Updated(u32),
    /// The quantity dropped to zero or below and the line was removed.
    Removed,
}

/// Settings for a [`CartStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartOptions {
    /// Storage key holding the serialized cart.
    pub key: String,
    /// Duration attached to "added to cart" notifications.
    pub toast_duration: Duration,
}

impl Default for CartOptions {
    fn default() -> Self {
        Self {
            key: DEFAULT_CART_KEY.to_string(),
            toast_duration: DEFAULT_TOAST_DURATION,
        }
    }
}

impl From<&StorefrontConfig> for CartOptions {
    fn from(config: &StorefrontConfig) -> Self {
        Self {
            key: config.cart_key.clone(),
            toast_duration: config.toast_duration,
        }
    }
}

/// Why a stored cart was discarded on load.
#[derive(Debug, Error)]
enum DecodeError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("line item {0} has zero quantity")]
    ZeroQuantity(ProductId),
    #[error("product {0} appears more than once")]
    DuplicateId(ProductId),
    #[error("line item has non-positive id {0}")]
    InvalidId(ProductId),
    #[error("cart total is too large")]
    TotalOverflow,
}

/// The authoritative cart.
///
/// Construct one at startup with [`CartStore::load`] and hand it by `&mut`
/// to whatever reacts to user actions.
#[derive(Debug)]
pub struct CartStore<S, N> {
    catalog: Arc<Catalog>,
    storage: S,
    notifier: N,
    options: CartOptions,
    items: Vec<CartLineItem>,
}

impl<S: KeyValueStore, N: Notifier> CartStore<S, N> {
    /// Load the cart from `storage` using default options.
    ///
    /// A missing, unreadable or malformed stored cart yields an empty cart.
    pub fn load(catalog: Arc<Catalog>, storage: S, notifier: N) -> Self {
        Self::load_with(catalog, storage, notifier, CartOptions::default())
    }

    /// Load the cart from `storage` under `options.key`.
    ///
    /// A missing, unreadable or malformed stored cart yields an empty cart.
    pub fn load_with(catalog: Arc<Catalog>, storage: S, notifier: N, options: CartOptions) -> Self {
        let items = read_items(&storage, &options.key);
        debug!(key = %options.key, lines = items.len(), "Cart loaded");
        Self {
            catalog,
            storage,
            notifier,
            options,
            items,
        }
    }

    /// Add one unit of a catalog product.
    ///
    /// Increments the existing line item or appends a new one with `qty = 1`,
    /// persists the cart and then notifies. Returns the resulting line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if the product is not in the catalog,
    /// [`CartError::QuantityLimit`] if its line is already at `u32::MAX`,
    /// [`CartError::TotalOverflow`] if the new total does not fit, or a
    /// storage error if the cart could not be persisted. In every case the
    /// cart is unchanged.
    #[instrument(skip(self))]
    pub fn add_to_cart(&mut self, product_id: ProductId) -> Result<CartLineItem, CartError> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or(CartError::NotFound(product_id))?;
        let message = format!("{} added to cart!", product.name);

        let mut next = self.items.clone();
        let line = match next.iter_mut().find(|item| item.id == product_id) {
            Some(item) => {
                item.qty = item
                    .qty
                    .checked_add(1)
                    .ok_or(CartError::QuantityLimit(product_id))?;
                item.clone()
            }
            None => {
                let item = CartLineItem::from_product(product);
                next.push(item.clone());
                item
            }
        };

        self.commit(next)?;
        info!(qty = line.qty, "Added to cart");
        self.notifier
            .notify(Notification::new(message, self.options.toast_duration));
        Ok(line)
    }

    /// Adjust a line item's quantity by `delta`.
    ///
    /// Unknown ids are a no-op. A resulting quantity of zero or less removes
    /// the line; one above `u32::MAX` is clamped to it.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::TotalOverflow`] if the new total does not fit, or
    /// a storage error if the cart could not be persisted. The cart is then
    /// unchanged.
    #[instrument(skip(self))]
    pub fn change_qty(&mut self, id: ProductId, delta: i32) -> Result<ChangeOutcome, CartError> {
        let Some(current) = self.get(id).map(|item| item.qty) else {
            return Ok(ChangeOutcome::Missing);
        };

        let next_qty = i64::from(current) + i64::from(delta);
        if next_qty <= 0 {
            self.remove_item(id)?;
            return Ok(ChangeOutcome::Removed);
        }
        let qty = u32::try_from(next_qty).unwrap_or(u32::MAX);

        let mut next = self.items.clone();
        for item in next.iter_mut().filter(|item| item.id == id) {
            item.qty = qty;
        }
        self.commit(next)?;
        info!(qty, "Quantity changed");
        Ok(ChangeOutcome::Updated(qty))
    }

    /// Remove a line item. Returns whether one was present.
    ///
    /// The cart is persisted whether or not anything was removed.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the cart could not be persisted.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, id: ProductId) -> Result<bool, CartError> {
        let next: Vec<CartLineItem> = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        let removed = next.len() != self.items.len();

        self.commit(next)?;
        if removed {
            info!("Removed from cart");
        }
        Ok(removed)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the cart could not be persisted.
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.commit(Vec::new())?;
        info!("Cart cleared");
        Ok(())
    }

    fn commit(&mut self, next: Vec<CartLineItem>) -> Result<(), CartError> {
        checked_total(&next).ok_or(CartError::TotalOverflow)?;
        let json = serde_json::to_string(&next)?;
        self.storage.set(&self.options.key, &json)?;
        debug!(key = %self.options.key, lines = next.len(), "Cart persisted");
        self.items = next;
        Ok(())
    }
}

impl<S, N> CartStore<S, N> {
    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// The line item for `id`, if any.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all line items.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.qty)).sum()
    }

    /// Sum of all line subtotals.
    #[must_use]
    pub fn grand_total(&self) -> Price {
        self.items.iter().map(CartLineItem::subtotal).sum()
    }

    /// Grand total with exactly two decimals, `"0.00"` when empty.
    #[must_use]
    pub fn grand_total_display(&self) -> String {
        self.grand_total().to_fixed()
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    #[must_use]
    pub const fn options(&self) -> &CartOptions {
        &self.options
    }

    /// Give back the storage backend, dropping the store.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

// =============================================================================
// Loading
// =============================================================================

fn read_items<S: KeyValueStore>(storage: &S, key: &str) -> Vec<CartLineItem> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "Could not read stored cart, starting empty");
            return Vec::new();
        }
    };

    decode_items(&raw).unwrap_or_else(|e| {
        warn!(error = %e, "Discarding stored cart, starting empty");
        Vec::new()
    })
}

fn decode_items(raw: &str) -> Result<Vec<CartLineItem>, DecodeError> {
    let items: Vec<CartLineItem> = serde_json::from_str(raw)?;
    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        if !item.id.is_positive() {
            return Err(DecodeError::InvalidId(item.id));
        }
        if item.qty == 0 {
            return Err(DecodeError::ZeroQuantity(item.id));
        }
        if !seen.insert(item.id) {
            return Err(DecodeError::DuplicateId(item.id));
        }
    }
    checked_total(&items).ok_or(DecodeError::TotalOverflow)?;
    Ok(items)
}

/// Sum of line subtotals, or `None` if any step overflows.
fn checked_total(items: &[CartLineItem]) -> Option<Price> {
    items.iter().try_fold(Price::ZERO, |total, item| {
        item.price
            .checked_times(item.qty)
            .and_then(|subtotal| total.checked_add(subtotal))
    })
}
