mod fetch;

use clap::{Parser, Subcommand};
use storefront_core::{ContactLinkBuilder, DEFAULT_CONTACT_BASE_URL};

#[derive(Debug, Parser)]
#[command(name = "storefront-cli")]
#[command(about = "Storefront catalog command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the catalog sheet once and print the resulting entries
    Fetch {
        /// Sheet URL to read instead of the configured one
        #[arg(long)]
        url: Option<String>,
        /// Print the entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show how an image reference from the sheet is rewritten
    Image {
        /// Raw `FOTO` cell value
        raw: String,
    },
    /// Build the purchase-inquiry contact link for a product
    Contact {
        /// Product name
        #[arg(long)]
        name: String,
        /// Display price, e.g. "R$ 99,00"
        #[arg(long)]
        price: String,
        /// Messaging base URL
        #[arg(long, env = "STOREFRONT_CONTACT_BASE_URL", default_value = DEFAULT_CONTACT_BASE_URL)]
        base_url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Fetch { url, json }) => {
            let config = storefront_core::load_app_config_from_env()?;
            fetch::run_fetch(&config, url.as_deref(), json).await?;
        }
        Some(Commands::Image { raw }) => {
            println!("{}", storefront_ingest::normalize_image_reference(&raw));
        }
        Some(Commands::Contact {
            name,
            price,
            base_url,
        }) => {
            let builder = ContactLinkBuilder::new(base_url);
            println!(
                "{}",
                builder.general_link(&storefront_core::contact::product_message(&name, &price))
            );
        }
        None => println!("storefront-cli: use --help to list commands"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
