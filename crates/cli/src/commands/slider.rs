//! Featured product slider.

use askama::Template;
use pixalara_storefront::AppError;
use pixalara_storefront::slider::{DEFAULT_SLIDE_IDS, Slider};
use pixalara_storefront::views::SliderTemplate;

use super::Context;

fn build(ctx: &Context) -> Slider {
    Slider::from_catalog(&ctx.catalog, &DEFAULT_SLIDE_IDS)
}

#[allow(clippy::print_stdout)]
fn print_current(slider: &Slider) {
    match slider.current() {
        Some(product) => println!(
            "[{}/{}] Trending in {}: {} - {}",
            slider.current_index() + 1,
            slider.len(),
            product.category,
            product.name,
            product.price.display()
        ),
        None => println!("No featured products."),
    }
}

/// Show a single slide.
///
/// # Errors
///
/// Returns an error if `index` is out of range or HTML rendering fails.
#[allow(clippy::print_stdout)]
pub fn show(ctx: &Context, index: usize, html: bool) -> Result<(), AppError> {
    let mut slider = build(ctx);
    if !slider.is_empty() {
        slider.go_to(index)?;
    }

    if html {
        println!("{}", SliderTemplate::from(&slider).render()?);
    } else {
        print_current(&slider);
    }
    Ok(())
}

/// Advance the slider `ticks` times at the configured interval.
pub async fn play(ctx: &Context, ticks: u32) {
    let mut slider = build(ctx);
    let mut interval = tokio::time::interval(ctx.config.slider_interval);

    // The first tick completes immediately and shows the opening slide.
    interval.tick().await;
    print_current(&slider);

    for _ in 0..ticks {
        interval.tick().await;
        slider.advance(1);
        tracing::debug!(slide = slider.current_index(), "Slider advanced");
        print_current(&slider);
    }
}
