use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::{ConfigCommand, CustomerCommand, DashboardCommand, OrderCommand, ProductCommand};
use config::Config;
use shopadmin_core::AdminState;

#[derive(Parser)]
#[command(name = "shopadmin")]
#[command(version)]
#[command(about = "A store administration console", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show store-wide statistics
    Dashboard(DashboardCommand),

    /// Manage the product catalog
    Product(ProductCommand),

    /// Inspect and delete orders
    Order(OrderCommand),

    /// Manage customers
    Customer(CustomerCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.clone())?;

    match cli.command {
        Commands::Dashboard(cmd) => {
            let mut state = state_from(&config);
            cmd.run(&mut state).await?;
        }
        Commands::Product(cmd) => {
            let mut state = state_from(&config);
            cmd.run(&mut state).await?;
        }
        Commands::Order(cmd) => {
            let mut state = state_from(&config);
            cmd.run(&mut state).await?;
        }
        Commands::Customer(cmd) => {
            let mut state = state_from(&config);
            cmd.run(&mut state).await?;
        }
        Commands::Config(cmd) => {
            cmd.run(&config, cli.config)?;
        }
    }

    Ok(())
}

fn state_from(config: &Config) -> AdminState {
    AdminState::new(
        &config.products_url,
        &config.orders_url,
        &config.customers_url,
    )
}
