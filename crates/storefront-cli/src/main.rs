use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "storefront-cli")]
#[command(about = "Storefront catalog and cart command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List catalog products.
    Products {
        /// Filter by category name.
        #[arg(long)]
        category: Option<String>,
        /// Backend sort key, e.g. `-createdAt`.
        #[arg(long, allow_hyphen_values = true)]
        sort: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show one product in detail.
    Product {
        /// Backend product id.
        id: String,
    },
    /// List reviews, globally or for one product.
    Reviews {
        /// Scope to one product's reviews.
        #[arg(long)]
        product: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
        /// Only verified purchases.
        #[arg(long)]
        verified: bool,
        #[arg(long)]
        min_rating: Option<f64>,
        #[arg(long)]
        sort: Option<String>,
    },
    /// Fetch the backend cart and print lines and totals.
    Cart,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = storefront_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::debug!(?config, "configuration loaded");

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Products {
            category,
            sort,
            page,
            limit,
        }) => commands::run_products(&config, category, sort, page, limit).await,
        Some(Commands::Product { id }) => commands::run_product(&config, &id).await,
        Some(Commands::Reviews {
            product,
            limit,
            verified,
            min_rating,
            sort,
        }) => commands::run_reviews(&config, product, limit, verified, min_rating, sort).await,
        Some(Commands::Cart) => commands::run_cart(&config).await,
        None => {
            println!("storefront-cli: pass a subcommand, try --help");
            Ok(())
        }
    }
}
