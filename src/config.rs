use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the product-catalog service
    pub products_url: String,
    /// Base URL of the cart/order service
    pub orders_url: String,
    /// Base URL of the user-directory service
    pub customers_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            products_url: "https://fakestoreapi.com/products".to_string(),
            orders_url: "https://fakestoreapi.com/carts".to_string(),
            customers_url: "https://jsonplaceholder.typicode.com/users".to_string(),
        }
    }
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            config = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;
        }

        if let Ok(url) = std::env::var("SHOPADMIN_PRODUCTS_URL") {
            config.products_url = url;
        }
        if let Ok(url) = std::env::var("SHOPADMIN_ORDERS_URL") {
            config.orders_url = url;
        }
        if let Ok(url) = std::env::var("SHOPADMIN_CUSTOMERS_URL") {
            config.customers_url = url;
        }

        Ok(config)
    }

    /// Default config file path: ~/.config/shopadmin/config.yaml
    pub fn default_config_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home)
            .join(".config")
            .join("shopadmin")
            .join("config.yaml")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
