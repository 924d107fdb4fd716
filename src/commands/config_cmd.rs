use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Config;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show current configuration values
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the config file path in use
    Path,
}

impl ConfigCommand {
    pub fn run(
        &self,
        config: &Config,
        config_path: Option<PathBuf>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ConfigSubcommand::Show { format } => {
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(config)?);
                    }
                    OutputFormat::Text => {
                        println!("Configuration");
                        println!("=============\n");
                        println!("products_url:  {}", config.products_url);
                        println!("orders_url:    {}", config.orders_url);
                        println!("customers_url: {}", config.customers_url);
                    }
                }
                Ok(())
            }

            ConfigSubcommand::Path => {
                let path = config_path.unwrap_or_else(Config::default_config_path);
                if path.exists() {
                    println!("{}", path.display());
                } else {
                    println!("{} (not found)", path.display());
                }
                Ok(())
            }
        }
    }
}
