use clap::Parser;
use dumpert_mcp::utils::{logger, validation::Validate};
use dumpert_mcp::{server, CliConfig, DumpertClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_server_logger(config.verbose);

    tracing::info!("Starting dumpert-mcp server");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = DumpertClient::new(config.endpoints());

    server::serve(client).await?;

    tracing::info!("stdin closed, shutting down");
    Ok(())
}
