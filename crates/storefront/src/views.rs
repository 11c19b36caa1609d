//! Display models and Askama templates.
//!
//! Views hold pre-formatted strings so templates stay free of arithmetic.

use askama::Template;

use crate::cart::{CartLineItem, CartStore};
use crate::catalog::Product;
use crate::slider::Slider;

/// Product card display data for templates.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub price: String,
    pub img: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            category: product.category.to_string(),
            price: product.price.display(),
            img: product.img.clone(),
        }
    }
}

/// Cart item display data for templates.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub id: i32,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

impl From<&CartLineItem> for CartItemView {
    fn from(item: &CartLineItem) -> Self {
        Self {
            id: item.id.as_i32(),
            name: item.name.clone(),
            quantity: item.qty,
            price: item.price.display(),
            line_price: item.subtotal().display(),
        }
    }
}

/// Cart display data for templates.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    /// Grand total without currency symbol, e.g. `"0.00"`.
    pub total: String,
    pub item_count: u64,
}

impl<S, N> From<&CartStore<S, N>> for CartView {
    fn from(store: &CartStore<S, N>) -> Self {
        Self {
            items: store.items().iter().map(CartItemView::from).collect(),
            total: store.grand_total_display(),
            item_count: store.item_count(),
        }
    }
}

/// Product grid fragment.
#[derive(Template)]
#[template(path = "products/grid.html")]
pub struct ProductGridTemplate {
    pub products: Vec<ProductCardView>,
}

impl ProductGridTemplate {
    pub fn new<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        Self {
            products: products.into_iter().map(ProductCardView::from).collect(),
        }
    }
}

/// Cart table fragment.
#[derive(Template)]
#[template(path = "cart/table.html")]
pub struct CartTableTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment.
#[derive(Template)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

/// Hero slider fragment.
#[derive(Template)]
#[template(path = "partials/slider.html")]
pub struct SliderTemplate {
    pub slides: Vec<ProductCardView>,
    pub current: usize,
    pub offset: usize,
}

impl From<&Slider> for SliderTemplate {
    fn from(slider: &Slider) -> Self {
        Self {
            slides: slider.slides().iter().map(ProductCardView::from).collect(),
            current: slider.current_index(),
            offset: slider.offset_percent(),
        }
    }
}
