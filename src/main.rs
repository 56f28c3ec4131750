use anyhow::Context;
use clap::Parser;
use microshop::config::Config;
use microshop::lifecycle::{setup_tracing, shutdown_signal, Service, ServiceSystem};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Runs one of the microshop services.
#[derive(Debug, Parser)]
#[command(name = "microshop", version, about)]
struct Cli {
    /// Which service to run
    #[arg(value_enum)]
    service: Service,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    let system = ServiceSystem::build(cli.service, &config)
        .with_context(|| format!("Failed to build {} service", cli.service))?;

    let addr = SocketAddr::new(config.bind_address, cli.service.port());
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    system.serve(listener, shutdown_signal()).await?;
    Ok(())
}
