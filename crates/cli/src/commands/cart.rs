//! Cart commands.
//!
//! Each mutation persists through the store before anything is printed, so
//! the output always reflects what is on disk.

use askama::Template;
use pixalara_core::ProductId;
use pixalara_storefront::views::{CartTableTemplate, CartView};
use pixalara_storefront::{AppError, ChangeOutcome};

use super::FileCart;

/// Print the cart, as a table or as HTML.
///
/// # Errors
///
/// Returns an error if HTML rendering fails.
#[allow(clippy::print_stdout)]
pub fn show(cart: &FileCart, html: bool) -> Result<(), AppError> {
    let view = CartView::from(cart);
    if html {
        println!("{}", CartTableTemplate { cart: view }.render()?);
        return Ok(());
    }

    if view.items.is_empty() {
        println!("Your cart is currently empty.");
    }
    for item in &view.items {
        println!(
            "{:>3}  {:<28} {:>9} x {:<3} {:>10}",
            item.id, item.name, item.price, item.quantity, item.line_price
        );
    }
    println!("Items: {}  Total: ${}", view.item_count, view.total);
    Ok(())
}

/// Add one unit of product `id`.
///
/// # Errors
///
/// Returns an error if the product does not exist or the cart cannot be saved.
#[allow(clippy::print_stdout)]
pub fn add(cart: &mut FileCart, id: i32) -> Result<(), AppError> {
    let line = cart.add_to_cart(ProductId::new(id))?;
    println!("{} x{}  (cart: {} items)", line.name, line.qty, cart.item_count());
    Ok(())
}

/// Change the quantity of product `id` by `delta`.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
#[allow(clippy::print_stdout)]
pub fn change_qty(cart: &mut FileCart, id: i32, delta: i32) -> Result<(), AppError> {
    match cart.change_qty(ProductId::new(id), delta)? {
        ChangeOutcome::Missing => println!("Product {id} is not in the cart."),
        ChangeOutcome::Updated(qty) => println!("Product {id} quantity is now {qty}."),
        ChangeOutcome::Removed => println!("Product {id} removed from the cart."),
    }
    Ok(())
}

/// Remove product `id` from the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
#[allow(clippy::print_stdout)]
pub fn remove(cart: &mut FileCart, id: i32) -> Result<(), AppError> {
    if cart.remove_item(ProductId::new(id))? {
        println!("Product {id} removed from the cart.");
    } else {
        println!("Product {id} is not in the cart.");
    }
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
#[allow(clippy::print_stdout)]
pub fn clear(cart: &mut FileCart) -> Result<(), AppError> {
    cart.clear()?;
    println!("Cart cleared.");
    Ok(())
}

/// Print the number of units in the cart.
#[allow(clippy::print_stdout)]
pub fn count(cart: &FileCart) {
    println!("{}", cart.item_count());
}
