//! Demo Shop CLI - drive the storefront from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog
//! shop products
//!
//! # Buy product 3 and add product 2 to the wishlist
//! shop buy 3
//! shop wish 2
//!
//! # Leave a review
//! shop review --name Ana --rating 5 --comment "Great sound"
//!
//! # Buy product 1 and print the updated orders table and report panel
//! shop buy 1 --fragments
//!
//! # Render the home page to a file
//! shop render home --out index.html
//!
//! # Use a different store file
//! shop --store /tmp/shop.json report
//! ```
//!
//! Every command seeds the store first, so a fresh store file starts with
//! the default catalog.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use demo_shop_core::ProductId;
use demo_shop_storefront::{Action, ShopConfig, View};
use demo_shop_storefront::validate::{LoginForm, RegisterForm, ReviewForm};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about = "Demo Shop storefront tools")]
struct Cli {
    /// Store file (overrides `SHOP_STORE_PATH`)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// After an action, print the re-rendered page sections it changed
    #[arg(long, global = true)]
    fragments: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create any missing collection
    Seed,
    /// List the catalog
    Products,
    /// List orders
    Orders,
    /// List the wishlist
    Wishlist,
    /// List reviews, newest first
    Reviews,
    /// Buy a product
    Buy {
        /// Product id
        id: ProductId,
    },
    /// Add a product to the wishlist
    Wish {
        /// Product id
        id: ProductId,
    },
    /// Remove a product from the wishlist
    Unwish {
        /// Product id
        id: ProductId,
    },
    /// Submit a review
    Review {
        #[arg(short, long, default_value = "")]
        name: String,

        /// Whole number from 1 to 5
        #[arg(short, long, default_value = "")]
        rating: String,

        #[arg(short, long, default_value = "")]
        comment: String,
    },
    /// Log in (demo: credentials are not checked)
    Login {
        #[arg(short, long, default_value = "")]
        email: String,

        #[arg(short, long, default_value = "")]
        password: String,
    },
    /// Register (demo: nothing is saved)
    Register {
        #[arg(short, long, default_value = "")]
        name: String,

        #[arg(short, long, default_value = "")]
        email: String,

        #[arg(short, long, default_value = "")]
        password: String,

        /// Password confirmation
        #[arg(short, long, default_value = "")]
        confirm: String,
    },
    /// Show order, wishlist and review counts
    Report,
    /// Render a page as HTML
    Render {
        #[arg(value_enum)]
        view: PageArg,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Delete everything and seed again
    Reset,
}

#[derive(Clone, Copy, ValueEnum)]
enum PageArg {
    Home,
    Login,
    Register,
}

impl From<PageArg> for View {
    fn from(page: PageArg) -> Self {
        match page {
            PageArg::Home => Self::Home,
            PageArg::Login => Self::Login,
            PageArg::Register => Self::Register,
        }
    }
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &ShopConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            sample_rate: config.sentry_sample_rate,
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR => sentry_tracing::EventFilter::Event,
        tracing::Level::WARN | tracing::Level::INFO => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

fn main() {
    let cli = Cli::parse();

    // Configuration is loaded before tracing so Sentry can be initialized first
    let config = ShopConfig::from_env();
    let _sentry_guard = config.as_ref().ok().and_then(init_sentry);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "demo_shop_storefront=info,shop=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let result: Result<(), Box<dyn std::error::Error>> = config
        .map_err(Into::into)
        .and_then(|config| run(cli, config));

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: ShopConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store_path = cli.store.unwrap_or(config.store_path);
    let fragments = cli.fragments;
    tracing::debug!(path = %store_path.display(), "Using store");

    match cli.command {
        Commands::Seed => commands::seed::seed(&store_path)?,
        Commands::Reset => commands::seed::reset(&store_path)?,
        Commands::Products => commands::list::products(&store_path)?,
        Commands::Orders => commands::list::orders(&store_path)?,
        Commands::Wishlist => commands::list::wishlist(&store_path)?,
        Commands::Reviews => commands::list::reviews(&store_path)?,
        Commands::Report => commands::list::report(&store_path)?,
        Commands::Buy { id } => commands::act::run(&store_path, Action::Buy(id), fragments)?,
        Commands::Wish { id } => {
            commands::act::run(&store_path, Action::AddToWishlist(id), fragments)?;
        }
        Commands::Unwish { id } => {
            commands::act::run(&store_path, Action::RemoveFromWishlist(id), fragments)?;
        }
        Commands::Review {
            name,
            rating,
            comment,
        } => commands::act::run(
            &store_path,
            Action::SubmitReview(ReviewForm {
                name,
                rating,
                comment,
            }),
            fragments,
        )?,
        Commands::Login { email, password } => {
            commands::act::run(
                &store_path,
                Action::Login(LoginForm { email, password }),
                fragments,
            )?;
        }
        Commands::Register {
            name,
            email,
            password,
            confirm,
        } => commands::act::run(
            &store_path,
            Action::Register(RegisterForm {
                name,
                email,
                password,
                confirm,
            }),
            fragments,
        )?,
        Commands::Render { view, out } => {
            commands::render::page(&store_path, view.into(), out.as_deref())?;
        }
    }
    Ok(())
}
