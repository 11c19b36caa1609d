//! Catalog listing.

use askama::Template;
use pixalara_storefront::views::ProductGridTemplate;
use pixalara_storefront::{AppError, Catalog, CategoryFilter, Product};

use super::Context;

/// List products matching `category`, optionally only the featured ones.
///
/// # Errors
///
/// Returns an error if HTML rendering fails.
#[allow(clippy::print_stdout)]
pub fn list(ctx: &Context, category: &str, featured: bool, html: bool) -> Result<(), AppError> {
    let filter: CategoryFilter = category.parse().unwrap_or_default();
    let source = if featured {
        ctx.catalog.featured(Catalog::FEATURED_COUNT)
    } else {
        ctx.catalog.products()
    };
    let products: Vec<&Product> = source.iter().filter(|p| filter.matches(p)).collect();
    tracing::debug!(?filter, shown = products.len(), "Listing products");

    if html {
        println!("{}", ProductGridTemplate::new(products).render()?);
    } else if products.is_empty() {
        println!("No products in this category.");
    } else {
        for product in products {
            println!(
                "{:>3}  {:<28} {:<12} {:>9}",
                product.id.as_i32(),
                product.name,
                product.category.as_str(),
                product.price.display()
            );
        }
    }
    Ok(())
}
