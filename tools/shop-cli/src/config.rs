//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Contents of `shop.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Where the catalog documents live.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Client state file.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Asset paths.
    #[serde(default)]
    pub assets: AssetsConfig,

    /// Logging.
    #[serde(default)]
    pub log: LogConfig,
}

impl ShopConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Catalog source configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory or http(s) base URL holding the documents.
    #[serde(default = "default_source")]
    pub source: String,

    #[serde(default = "default_products")]
    pub products: String,

    #[serde(default = "default_discounts")]
    pub discounts: String,
}

fn default_source() -> String {
    "data".to_string()
}

fn default_products() -> String {
    shop_storefront::PRODUCTS_DOCUMENT.to_string()
}

fn default_discounts() -> String {
    shop_storefront::DISCOUNTS_DOCUMENT.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            products: default_products(),
            discounts: default_discounts(),
        }
    }
}

/// Key-value state file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_path")]
    pub path: String,
}

fn default_storage_path() -> String {
    ".shop/state.json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

/// Paths used when building links and cart entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Prefix for product image paths.
    #[serde(default = "default_image_prefix")]
    pub image_prefix: String,

    /// Login page the cart prompt points to.
    #[serde(default = "default_login_page")]
    pub login_page: String,
}

fn default_image_prefix() -> String {
    "../".to_string()
}

fn default_login_page() -> String {
    "Login.html".to_string()
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            image_prefix: default_image_prefix(),
            login_page: default_login_page(),
        }
    }
}

/// Log output settings. `SHOP_LOG` or `RUST_LOG` override the level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format (for development).
    #[default]
    Human,
    /// JSON format (for log aggregation).
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config: ShopConfig = toml::from_str("").unwrap();
        assert_eq!(config, ShopConfig::default());
        assert_eq!(config.catalog.source, "data");
        assert_eq!(config.catalog.products, "products.json");
        assert_eq!(config.storage.path, ".shop/state.json");
        assert_eq!(config.assets.image_prefix, "../");
        assert_eq!(config.log.format, LogFormat::Human);
    }

    #[test]
    fn test_partial_toml() {
        let config: ShopConfig = toml::from_str(
            r#"
[catalog]
source = "https://cdn.example.com/js/data/"

[log]
format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.catalog.source, "https://cdn.example.com/js/data/");
        assert_eq!(config.catalog.discounts, "discounts.json");
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"storage": {{"path": "state.json"}}}}"#).unwrap();

        let config = ShopConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.storage.path, "state.json");
        assert_eq!(config.catalog, CatalogConfig::default());
    }

    #[test]
    fn test_load_reports_bad_toml() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "[catalog\nsource = 1").unwrap();

        let err = ShopConfig::load(file.path().to_str().unwrap()).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse TOML config"));
    }
}
