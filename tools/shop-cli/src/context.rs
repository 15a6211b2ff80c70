//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shop_cache::Cache;
use shop_data::FetchClient;
use shop_storefront::{CatalogLoader, Storefront, StorefrontOptions, StorefrontView};

use crate::config::ShopConfig;
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["shop.toml", ".shop.toml", "shop.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: ShopConfig,
    /// Output handler.
    pub output: Output,
    /// Directory relative paths in the config resolve against.
    pub root: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, root) = match config_path {
            Some(path) => {
                let config = ShopConfig::load(path)?;
                let root = Path::new(path)
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(|p| cwd.join(p))
                    .unwrap_or_else(|| cwd.clone());
                (config, root)
            }
            None => Self::find_config(&cwd)?
                .unwrap_or_else(|| (ShopConfig::default(), cwd.clone())),
        };

        Ok(Self {
            config,
            output,
            root,
        })
    }

    /// Find config file in directory tree.
    ///
    /// The nearest config file wins; one that exists but fails to parse is
    /// an error rather than a reason to keep walking.
    fn find_config(start: &Path) -> Result<Option<(ShopConfig, PathBuf)>> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    let config = ShopConfig::load(&config_path.to_string_lossy())?;
                    return Ok(Some((config, current)));
                }
            }

            if !current.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// Resolve a path relative to the config root.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.root.join(path)
        }
    }

    /// Client for the configured catalog source.
    pub fn fetch_client(&self) -> Result<FetchClient> {
        let source = &self.config.catalog.source;
        let location = if source.starts_with("http://") || source.starts_with("https://") {
            source.clone()
        } else {
            self.resolve_path(source).to_string_lossy().into_owned()
        };
        FetchClient::from_location(&location)
            .with_context(|| format!("Invalid catalog source: {}", source))
    }

    /// Open the client state file.
    pub fn open_cache(&self) -> Result<Cache> {
        let path = self.resolve_path(&self.config.storage.path);
        Cache::open_file(path.clone())
            .with_context(|| format!("Failed to open state file: {}", path.display()))
    }

    /// Storefront wired to the configured catalog and state file.
    pub fn storefront<V: StorefrontView>(&self, view: V) -> Result<Storefront<V>> {
        let catalog = &self.config.catalog;
        let loader = CatalogLoader::new(self.fetch_client()?)
            .with_documents(catalog.products.clone(), catalog.discounts.clone());
        let options = StorefrontOptions {
            image_prefix: self.config.assets.image_prefix.clone(),
            login_page: self.config.assets.login_page.clone(),
        };
        Ok(Storefront::new(loader, self.open_cache()?, view).with_options(options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(root: &Path) -> Context {
        Context {
            config: ShopConfig::default(),
            output: Output::new(false, true),
            root: root.to_path_buf(),
        }
    }

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("shop.toml"), "[storage]\npath = \"s.json\"\n").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, root) = Context::find_config(&nested).unwrap().unwrap();
        assert_eq!(config.storage.path, "s.json");
        assert_eq!(root, dir.path());
    }

    #[test]
    fn test_find_config_reports_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("shop.toml"), "[storage]\npath = \"s.json\"\n").unwrap();
        let nested = dir.path().join("a");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("shop.toml"), "[storage\npath = ").unwrap();

        let err = Context::find_config(&nested).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse TOML config"));
    }

    #[test]
    fn test_resolve_path() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        assert_eq!(ctx.resolve_path("data"), dir.path().join("data"));
        assert_eq!(ctx.resolve_path("/srv/data"), PathBuf::from("/srv/data"));
    }

    #[test]
    fn test_open_cache_creates_state_under_root() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        let cache = ctx.open_cache().unwrap();
        cache.set("k", &1).unwrap();
        assert!(dir.path().join(".shop").join("state.json").exists());
    }
}
