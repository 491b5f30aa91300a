use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use portfolio::cli::Cli;
use portfolio::{SiteApp, SiteConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("portfolio=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SiteConfig::from_env();
    let app = SiteApp::from_config(&config)?;
    app.run(cli).await
}
