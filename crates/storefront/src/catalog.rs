//! Read-only product catalog.
//!
//! The catalog is built once at startup and never mutated. Lookups by id go
//! through an index built at construction, so they stay O(1) no matter how
//! many products are loaded.

use std::collections::HashMap;
use std::str::FromStr;
use std::{fs, io, path::Path};

use pixalara_core::{Category, Price, ProductId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),

    #[error("product id must be positive, got {0}")]
    InvalidId(ProductId),

    #[error("failed to read catalog: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A purchasable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: Category,
    pub img: String,
}

/// Which products a listing should show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether `product` passes the filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => &product.category == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Only(Category::new(s)))
        }
    }
}

/// The immutable set of products, in display order.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Number of products shown on the home page.
    pub const FEATURED_COUNT: usize = 4;

    /// Build a catalog, validating id uniqueness and positivity.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] or [`CatalogError::InvalidId`].
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());
        for (pos, product) in products.iter().enumerate() {
            if !product.id.is_positive() {
                return Err(CatalogError::InvalidId(product.id));
            }
            if index.insert(product.id, pos).is_some() {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products, index })
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the products are invalid.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::new(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid catalog.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// The seed catalog the store ships with.
    #[must_use]
    pub fn builtin() -> Self {
        const SEED: [(i32, &str, u32, &str, &str); 6] = [
            (
                1,
                "Premium Hass Avocado",
                499,
                "Grocery",
                "https://images.unsplash.com/photo-1523049673857-eb18f1d7b578?auto=format&fit=crop&q=80&w=800",
            ),
            (
                2,
                "Sony Wireless Headphones",
                12900,
                "Electronics",
                "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?auto=format&fit=crop&q=80&w=800",
            ),
            (
                3,
                "Organic Blueberries 250g",
                550,
                "Grocery",
                "https://images.unsplash.com/photo-1498557850523-fd3d118b962e?auto=format&fit=crop&q=80&w=800",
            ),
            (
                4,
                "Mechanical RGB Keyboard",
                8900,
                "Electronics",
                "https://images.unsplash.com/photo-1511467687858-23d96c32e4ae?auto=format&fit=crop&q=80&w=800",
            ),
            (
                5,
                "Artisanal Sourdough Bread",
                325,
                "Grocery",
                "https://images.unsplash.com/photo-1509440159596-0249088772ff?auto=format&fit=crop&q=80&w=800",
            ),
            (
                6,
                "Smart Watch Series 9",
                39900,
                "Electronics",
                "https://images.unsplash.com/photo-1523275335684-37898b6baf30?auto=format&fit=crop&q=80&w=800",
            ),
        ];

        let products = SEED
            .iter()
            .map(|&(id, name, cents, category, img)| Product {
                id: ProductId::new(id),
                name: name.to_string(),
                price: Price::from_cents(cents),
                category: Category::new(category),
                img: img.to_string(),
            })
            .collect::<Vec<_>>();
        let index = products
            .iter()
            .enumerate()
            .map(|(pos, p)| (p.id, pos))
            .collect();
        Self { products, index }
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).and_then(|&pos| self.products.get(pos))
    }

    /// All products in display order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products passing `filter`, in display order.
    pub fn filter<'a>(&'a self, filter: &'a CategoryFilter) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| filter.matches(p))
    }

    /// The first `n` products, used for the home page grid.
    #[must_use]
    pub fn featured(&self, n: usize) -> &[Product] {
        self.products.get(..n.min(self.products.len())).unwrap_or(&[])
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&Category> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&&product.category) {
                seen.push(&product.category);
            }
        }
        seen
    }
}
