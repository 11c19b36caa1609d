//! Integration tests for a browsing session.
//!
//! Filters the catalog, fills the cart from the listing and the slider, and
//! renders the resulting fragments.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use askama::Template;
use pixalara_core::{Category, ProductId};
use pixalara_storefront::auth::{self, AuthError};
use pixalara_storefront::notify::MemoryNotifier;
use pixalara_storefront::slider::{DEFAULT_SLIDE_IDS, Slider};
use pixalara_storefront::storage::MemoryStore;
use pixalara_storefront::views::{CartCountTemplate, CartTableTemplate, CartView};
use pixalara_storefront::{CartError, CartStore, Catalog, CategoryFilter};

fn session() -> (Arc<Catalog>, CartStore<MemoryStore, MemoryNotifier>) {
    let catalog = Arc::new(Catalog::builtin());
    let cart = CartStore::load(Arc::clone(&catalog), MemoryStore::new(), MemoryNotifier::new());
    (catalog, cart)
}

// =============================================================================
// Browsing
// =============================================================================

#[test]
fn test_add_everything_in_a_category() {
    let (catalog, mut cart) = session();
    let electronics = CategoryFilter::Only(Category::new("Electronics"));

    for product in catalog.filter(&electronics) {
        cart.add_to_cart(product.id).unwrap();
    }

    let ids: Vec<i32> = cart.items().iter().map(|i| i.id.as_i32()).collect();
    assert_eq!(ids, vec![2, 4, 6]);
    assert_eq!(cart.grand_total_display(), "617.00");
    assert_eq!(
        cart.notifier().messages(),
        vec![
            "Sony Wireless Headphones added to cart!",
            "Mechanical RGB Keyboard added to cart!",
            "Smart Watch Series 9 added to cart!",
        ]
    );
}

#[test]
fn test_buy_now_from_slider() {
    let (catalog, mut cart) = session();
    let mut slider = Slider::from_catalog(&catalog, &DEFAULT_SLIDE_IDS);

    slider.advance(1);
    let featured = slider.current().unwrap().id;
    cart.add_to_cart(featured).unwrap();

    assert_eq!(featured, ProductId::new(6));
    assert_eq!(cart.grand_total_display(), "399.00");
}

#[test]
fn test_unknown_product_is_not_found() {
    let (_, mut cart) = session();
    let err = cart.add_to_cart(ProductId::new(8)).unwrap_err();

    assert!(matches!(err, CartError::NotFound(id) if id == ProductId::new(8)));
    assert!(cart.is_empty());
}

#[test]
fn test_changes_for_absent_ids_are_noops() {
    let (_, mut cart) = session();
    cart.add_to_cart(ProductId::new(1)).unwrap();
    let before = cart.items().to_vec();

    cart.change_qty(ProductId::new(3), 5).unwrap();
    cart.remove_item(ProductId::new(3)).unwrap();
    cart.remove_item(ProductId::new(3)).unwrap();

    assert_eq!(cart.items(), before.as_slice());
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_rendered_cart_matches_store() {
    let (_, mut cart) = session();
    cart.add_to_cart(ProductId::new(1)).unwrap();
    cart.add_to_cart(ProductId::new(1)).unwrap();
    cart.add_to_cart(ProductId::new(3)).unwrap();

    let view = CartView::from(&cart);
    let badge = CartCountTemplate {
        count: view.item_count,
    }
    .render()
    .unwrap();
    let table = CartTableTemplate { cart: view }.render().unwrap();

    assert!(badge.contains(">3<"));
    assert!(table.contains("$9.98"));
    assert!(table.contains(r#"<span id="cart-total">15.48</span>"#));
}

// =============================================================================
// Sign-in
// =============================================================================

#[test]
fn test_login_redirects_home() {
    let redirect = auth::login("shopper@example.com").unwrap();
    assert_eq!(redirect.target, "index.html");
    assert!(redirect.message.contains("shopper@example.com"));
}

#[test]
fn test_login_rejects_bad_email() {
    assert!(matches!(
        auth::login("not-an-email"),
        Err(AuthError::InvalidEmail(_))
    ));
}
