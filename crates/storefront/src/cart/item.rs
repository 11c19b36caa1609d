//! Cart line items.

use pixalara_core::{Category, Price, ProductId};
use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// One cart entry: a snapshot of a product plus a quantity.
///
/// Name and price are copied when the product is first added and are not
/// refreshed from the catalog afterwards. The serialized form is the
/// product's fields plus `qty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: Category,
    pub img: String,
    /// Always at least 1 while the item is in a cart.
    pub qty: u32,
}

impl CartLineItem {
    /// Snapshot `product` with a quantity of 1.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            category: product.category.clone(),
            img: product.img.clone(),
            qty: 1,
        }
    }

    /// `price * qty`.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.price.times(self.qty)
    }
}
