//! Integration tests for cart persistence.
//!
//! These tests run the cart store against the JSON file backend and reopen
//! it the way a fresh process would.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use pixalara_core::ProductId;
use pixalara_integration_tests::TempStorageFile;
use pixalara_storefront::notify::MemoryNotifier;
use pixalara_storefront::storage::{FileStore, KeyValueStore};
use pixalara_storefront::{CartOptions, CartStore, Catalog, ChangeOutcome};

fn open(file: &TempStorageFile) -> CartStore<FileStore, MemoryNotifier> {
    CartStore::load(
        Arc::new(Catalog::builtin()),
        FileStore::new(file.path()),
        MemoryNotifier::new(),
    )
}

// =============================================================================
// Round Trip
// =============================================================================

#[test]
fn test_reload_restores_cart_elementwise() {
    let file = TempStorageFile::new();

    let mut cart = open(&file);
    cart.add_to_cart(ProductId::new(3)).unwrap();
    cart.add_to_cart(ProductId::new(2)).unwrap();
    cart.add_to_cart(ProductId::new(3)).unwrap();
    cart.change_qty(ProductId::new(2), 4).unwrap();
    let before = cart.items().to_vec();
    drop(cart);

    let reloaded = open(&file);
    assert_eq!(reloaded.items(), before.as_slice());
    for (a, b) in reloaded.items().iter().zip(&before) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.qty, b.qty);
        assert_eq!(a.price, b.price);
    }
    assert_eq!(reloaded.grand_total_display(), "656.00");
}

#[test]
fn test_every_mutation_is_on_disk_before_return() {
    let file = TempStorageFile::new();
    let mut cart = open(&file);
    let reader = FileStore::new(file.path());

    let on_disk = |reader: &FileStore| -> serde_json::Value {
        serde_json::from_str(&reader.get("pixalara_cart").unwrap().unwrap()).unwrap()
    };

    cart.add_to_cart(ProductId::new(1)).unwrap();
    assert_eq!(on_disk(&reader)[0]["qty"], 1);

    cart.change_qty(ProductId::new(1), 2).unwrap();
    assert_eq!(on_disk(&reader)[0]["qty"], 3);

    cart.remove_item(ProductId::new(1)).unwrap();
    assert_eq!(on_disk(&reader), serde_json::json!([]));
}

#[test]
fn test_stored_format_is_plain_json_array() {
    let file = TempStorageFile::new();
    let mut cart = open(&file);
    cart.add_to_cart(ProductId::new(1)).unwrap();

    let raw = FileStore::new(file.path())
        .get("pixalara_cart")
        .unwrap()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let line = &value[0];

    assert_eq!(line["id"], 1);
    assert_eq!(line["name"], "Premium Hass Avocado");
    assert_eq!(line["price"], 4.99);
    assert_eq!(line["category"], "Grocery");
    assert_eq!(line["qty"], 1);
    assert!(line["img"].is_string());
}

#[test]
fn test_cart_written_by_browser_loads() {
    let file = TempStorageFile::new();
    let raw = r#"[{"id":2,"name":"Sony Wireless Headphones","price":129,"category":"Electronics","img":"https://example.com/h.jpg","qty":2}]"#;
    FileStore::new(file.path()).set("pixalara_cart", raw).unwrap();

    let cart = open(&file);
    assert_eq!(cart.item_count(), 2);
    assert_eq!(cart.grand_total_display(), "258.00");
}

// =============================================================================
// Recovery
// =============================================================================

#[test]
fn test_corrupt_file_starts_empty_and_recovers() {
    let file = TempStorageFile::new();
    std::fs::write(file.path(), "definitely not json").unwrap();

    let mut cart = open(&file);
    assert!(cart.is_empty());

    cart.add_to_cart(ProductId::new(5)).unwrap();
    let reloaded = open(&file);
    assert_eq!(reloaded.item_count(), 1);
}

#[test]
fn test_malformed_cart_value_starts_empty() {
    let file = TempStorageFile::new();
    FileStore::new(file.path())
        .set("pixalara_cart", r#"[{"id":1,"qty":-1}]"#)
        .unwrap();

    assert!(open(&file).is_empty());
}

#[test]
fn test_other_keys_survive_cart_writes() {
    let file = TempStorageFile::new();
    FileStore::new(file.path()).set("theme", "dark").unwrap();

    let mut cart = open(&file);
    cart.add_to_cart(ProductId::new(4)).unwrap();
    cart.clear().unwrap();

    let store = FileStore::new(file.path());
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn test_separate_keys_are_separate_carts() {
    let file = TempStorageFile::new();
    let options = CartOptions {
        key: "guest_cart".to_string(),
        ..CartOptions::default()
    };

    let mut guest = CartStore::load_with(
        Arc::new(Catalog::builtin()),
        FileStore::new(file.path()),
        MemoryNotifier::new(),
        options,
    );
    guest.add_to_cart(ProductId::new(6)).unwrap();

    assert!(open(&file).is_empty());
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_scenario_first_add() {
    let file = TempStorageFile::new();
    let mut cart = open(&file);
    cart.add_to_cart(ProductId::new(1)).unwrap();

    assert_eq!(cart.item_count(), 1);
    assert_eq!(cart.grand_total_display(), "4.99");
}

#[test]
fn test_scenario_repeat_add_doubles_total() {
    let file = TempStorageFile::new();
    let mut cart = open(&file);
    cart.add_to_cart(ProductId::new(1)).unwrap();
    let single = cart.grand_total();
    cart.add_to_cart(ProductId::new(1)).unwrap();

    assert_eq!(cart.get(ProductId::new(1)).unwrap().qty, 2);
    assert_eq!(cart.grand_total(), single + single);
}

#[test]
fn test_scenario_decrement_last_unit_empties_cart() {
    let file = TempStorageFile::new();
    let mut cart = open(&file);
    cart.add_to_cart(ProductId::new(2)).unwrap();

    assert_eq!(
        cart.change_qty(ProductId::new(2), -1).unwrap(),
        ChangeOutcome::Removed
    );
    assert!(cart.is_empty());
    assert_eq!(cart.item_count(), 0);
    assert!(open(&file).is_empty());
}
