//! Pixalara CLI - drive the storefront from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # List products, optionally by category
//! pixalara products
//! pixalara products --category Grocery
//!
//! # Work with the persisted cart
//! pixalara cart add 1
//! pixalara cart qty 1 -1
//! pixalara cart remove 1
//! pixalara cart show --html
//!
//! # Hero slider
//! pixalara slider show --index 1
//! pixalara slider play --ticks 4
//!
//! # Simulated sign-in
//! pixalara login shopper@example.com
//! ```
//!
//! # Commands
//!
//! - `products` - List or render the catalog
//! - `cart` - Show and mutate the cart
//! - `slider` - Show or autoplay the featured slider
//! - `login` - Simulated sign-in with redirect

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use pixalara_storefront::AppError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "pixalara")]
#[command(author, version, about = "Pixalara storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the product catalog
    Products {
        /// Only show this category ("All" shows everything)
        #[arg(short, long, default_value = "All")]
        category: String,

        /// Only show the home page selection
        #[arg(long)]
        featured: bool,

        /// Render the product grid as HTML
        #[arg(long)]
        html: bool,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Featured product slider
    Slider {
        #[command(subcommand)]
        action: SliderAction,
    },
    /// Sign in (simulated)
    Login {
        /// Email address
        email: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and total
    Show {
        /// Render the cart table as HTML
        #[arg(long)]
        html: bool,
    },
    /// Add one unit of a product
    Add {
        /// Product id
        id: i32,
    },
    /// Change a line item's quantity by a signed amount
    Qty {
        /// Product id
        id: i32,

        /// Amount to add (negative to subtract)
        #[arg(allow_hyphen_values = true)]
        delta: i32,
    },
    /// Remove a line item
    Remove {
        /// Product id
        id: i32,
    },
    /// Remove everything
    Clear,
    /// Print the total number of units
    Count,
}

#[derive(Subcommand)]
enum SliderAction {
    /// Show one slide
    Show {
        /// Slide to show
        #[arg(short, long, default_value_t = 0)]
        index: usize,

        /// Render the slider as HTML
        #[arg(long)]
        html: bool,
    },
    /// Auto-advance through the slides
    Play {
        /// Number of advances before stopping
        #[arg(short, long, default_value_t = 3)]
        ticks: u32,
    },
}

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pixalara_storefront=info,pixalara=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(if e.is_user_error() { 2 } else { 1 });
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let ctx = commands::Context::from_env()?;

    match cli.command {
        Commands::Products {
            category,
            featured,
            html,
        } => commands::products::list(&ctx, &category, featured, html)?,
        Commands::Cart { action } => {
            let mut cart = ctx.open_cart();
            match action {
                CartAction::Show { html } => commands::cart::show(&cart, html)?,
                CartAction::Add { id } => commands::cart::add(&mut cart, id)?,
                CartAction::Qty { id, delta } => commands::cart::change_qty(&mut cart, id, delta)?,
                CartAction::Remove { id } => commands::cart::remove(&mut cart, id)?,
                CartAction::Clear => commands::cart::clear(&mut cart)?,
                CartAction::Count => commands::cart::count(&cart),
            }
        }
        Commands::Slider { action } => match action {
            SliderAction::Show { index, html } => commands::slider::show(&ctx, index, html)?,
            SliderAction::Play { ticks } => commands::slider::play(&ctx, ticks).await,
        },
        Commands::Login { email } => commands::login::login(&email).await?,
    }
    Ok(())
}
