use std::collections::HashMap;
use std::io;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tracing::{debug, info};
use ws_core::config::LocaleConfig;
use ws_core::ports::{BootstrapError, BootstrapInitializerPort};

use super::LocaleCatalog;

/// Loads `<locales_dir>/<fallback_language>/<namespace>.json` for every
/// configured namespace. Any missing or malformed file fails the whole load
/// and leaves the catalog untouched.
pub struct LocaleBootstrap {
    config: LocaleConfig,
    catalog: Arc<LocaleCatalog>,
}

impl LocaleBootstrap {
    pub fn new(config: LocaleConfig, catalog: Arc<LocaleCatalog>) -> Self {
        Self { config, catalog }
    }

    pub fn catalog(&self) -> Arc<LocaleCatalog> {
        self.catalog.clone()
    }

    async fn load_namespace(&self, namespace: &str) -> Result<Value, BootstrapError> {
        let path = self
            .config
            .locales_dir
            .join(&self.config.fallback_language)
            .join(format!("{namespace}.json"));

        let content = fs::read_to_string(&path).await.map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                BootstrapError::MissingResource(path.display().to_string())
            } else {
                BootstrapError::Other(anyhow::anyhow!(
                    "failed to read {}: {}",
                    path.display(),
                    err
                ))
            }
        })?;

        let value: Value = serde_json::from_str(&content).map_err(|err| {
            BootstrapError::InvalidResource(format!("{}: {}", path.display(), err))
        })?;
        if !value.is_object() {
            return Err(BootstrapError::InvalidResource(format!(
                "{}: expected a JSON object",
                path.display()
            )));
        }

        debug!(namespace, path = %path.display(), "locale namespace loaded");
        Ok(value)
    }
}

#[async_trait]
impl BootstrapInitializerPort for LocaleBootstrap {
    async fn initialize(&self) -> Result<(), BootstrapError> {
        let mut namespaces = HashMap::new();
        for namespace in &self.config.namespaces {
            let tree = self.load_namespace(namespace).await?;
            namespaces.insert(namespace.clone(), tree);
        }

        self.catalog.install(namespaces);
        info!(
            language = %self.config.fallback_language,
            namespaces = self.config.namespaces.len(),
            "locale resources initialized"
        );
        Ok(())
    }
}
