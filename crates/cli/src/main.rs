//! FoodHub CLI - Browse restaurants, manage the cart and check out.
//!
//! # Usage
//!
//! ```bash
//! # List restaurants delivering in 30 minutes, best rated first
//! fh catalog restaurants --chip under30 --sort rating
//!
//! # Show a menu and add a dish
//! fh catalog menu r1
//! fh cart add r1 m1
//!
//! # Change quantities
//! fh cart inc r1__m1
//! fh cart dec r1__m1
//!
//! # Place the order, paying by UPI
//! fh checkout -n "Asha Rao" -p 9876543210 -a "12 MG Road, Pune" --upi-id asha@upi
//! ```
//!
//! # Commands
//!
//! - `catalog` - Browse restaurants and menus
//! - `cart` - Show or change the cart
//! - `checkout` - Place an order for the current cart
//!
//! State lives in `FOODHUB_DATA_DIR` and is shared by every invocation.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use foodhub_core::PaymentMethod;
use foodhub_storefront::catalog::filter::ALL_CATEGORIES;
use foodhub_storefront::catalog::{Chip, SortOrder};
use foodhub_storefront::config::StorefrontConfig;
use foodhub_storefront::error::AppError;
use foodhub_storefront::state::Storefront;

mod commands;

#[derive(Parser)]
#[command(name = "fh")]
#[command(author, version, about = "FoodHub ordering from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse restaurants and menus
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Show or change the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place an order for the current cart
    Checkout(CheckoutArgs),
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List restaurants
    Restaurants {
        /// Match restaurant names, cuisines and dishes
        #[arg(short, long, default_value = "")]
        search: String,

        /// Quick filter (`all`, `biryani`, `under30`, `rating45`, `under200`)
        #[arg(short, long, default_value = "all")]
        chip: Chip,

        /// Ordering (`relevance`, `rating`, `eta`)
        #[arg(long, default_value = "relevance")]
        sort: SortOrder,
    },
    /// Show a restaurant's menu
    Menu {
        /// Restaurant id
        rid: String,

        /// Menu category
        #[arg(short, long, default_value = ALL_CATEGORIES)]
        category: String,

        /// Match dish names
        #[arg(short, long, default_value = "")]
        search: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines, totals and fees
    Show,
    /// Add one unit of a menu item
    Add {
        /// Restaurant id
        rid: String,
        /// Menu item id
        item: String,
    },
    /// Add one unit to a cart line
    Inc {
        /// Line key (`<rid>__<item>`)
        key: String,
    },
    /// Remove one unit from a cart line
    Dec {
        /// Line key (`<rid>__<item>`)
        key: String,
    },
    /// Drop a cart line
    Remove {
        /// Line key (`<rid>__<item>`)
        key: String,
    },
    /// Empty the cart
    Clear,
}

/// Checkout details. Omitted contact fields fall back to the saved contact.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Full name
    #[arg(short, long)]
    pub name: Option<String>,

    /// 10-digit phone number
    #[arg(short, long)]
    pub phone: Option<String>,

    /// Delivery address
    #[arg(short, long)]
    pub address: Option<String>,

    /// Payment method (`upi`, `card`, `cod`)
    #[arg(short, long, default_value = "upi")]
    pub method: PaymentMethod,

    /// UPI id, for `upi`
    #[arg(long, default_value = "")]
    pub upi_id: String,

    /// Card number, for `card`
    #[arg(long, default_value = "")]
    pub card_number: String,

    /// Name on card, for `card`
    #[arg(long, default_value = "")]
    pub card_name: String,

    /// Card expiry as MM/YY, for `card`
    #[arg(long, default_value = "")]
    pub expiry: String,

    /// Card CVV, for `card`
    #[arg(long, default_value = "")]
    pub cvv: String,
}

fn main() {
    // Load .env before the filter so RUST_LOG can come from it
    dotenvy::dotenv().ok();

    // Defaults to info level for our crates if RUST_LOG is not set.
    // Logs go to stderr so command output stays clean.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "foodhub_cli=info,foodhub_storefront=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        if e.is_user_error() {
            tracing::warn!("{e}");
        } else {
            tracing::error!("Command failed: {e}");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = StorefrontConfig::from_env()?;
    let app = Storefront::open(config)?;

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::Restaurants { search, chip, sort } => {
                commands::catalog::restaurants(&app, search, chip, sort);
            }
            CatalogAction::Menu {
                rid,
                category,
                search,
            } => commands::catalog::menu(&app, &rid, &category, &search)?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&app)?,
            CartAction::Add { rid, item } => commands::cart::add(&app, &rid, &item)?,
            CartAction::Inc { key } => commands::cart::increment(&app, &key)?,
            CartAction::Dec { key } => commands::cart::decrement(&app, &key)?,
            CartAction::Remove { key } => commands::cart::remove(&app, &key)?,
            CartAction::Clear => commands::cart::clear(&app)?,
        },
        Commands::Checkout(args) => commands::checkout::place_order(&app, args)?,
    }
    Ok(())
}
