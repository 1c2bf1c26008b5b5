use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use pixmint::application::{ServerConfig, serve};
use pixmint::infrastructure::upstream;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Proxy AI image and text generation behind an in-memory image CDN",
    long_about = None
)]
struct Cli {
    #[arg(long, env = "PIXMINT_BIND_ADDRESS", default_value = "127.0.0.1:5000")]
    bind_address: SocketAddr,

    /// Externally reachable origin used when minting image URLs.
    #[arg(
        long,
        env = "PIXMINT_PUBLIC_URL",
        default_value = "http://localhost:5000"
    )]
    public_url: String,

    #[arg(
        long,
        env = "PIXMINT_IMAGE_API_URL",
        default_value = upstream::IMAGE_API_URL
    )]
    image_api_url: String,

    #[arg(
        long,
        env = "PIXMINT_TEXT_API_URL",
        default_value = upstream::TEXT_API_URL
    )]
    text_api_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before clap parses env vars)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();

    serve(ServerConfig {
        bind_address: cli.bind_address,
        public_url: cli.public_url,
        image_api_url: cli.image_api_url,
        text_api_url: cli.text_api_url,
    })
    .await
}

#[allow(clippy::expect_used)] // Startup: panicking is appropriate if logging cannot be initialized
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("RUST_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().compact())
            .init();
    }
}
