// ============================================================
// CONFIG SERVICE
// ============================================================
// Layer defaults, the TOML file, and DKAN_SCHEMA_* env vars

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use tracing::debug;

use crate::domain::error::{AppError, Result};
use crate::domain::schema::SchemaConfig;

pub const DEFAULT_CONFIG_FILE: &str = "dkan-schema.toml";
pub const ENV_PREFIX: &str = "DKAN_SCHEMA_";

/// Layered config: defaults, then the TOML file, then `DKAN_SCHEMA_*` env vars.
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn figment(&self) -> Figment {
        Figment::from(Serialized::defaults(SchemaConfig::default()))
            .merge(Toml::file(&self.path))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load(&self) -> Result<SchemaConfig> {
        let config: SchemaConfig = self.figment().extract()?;
        config
            .validate()
            .map_err(|e| AppError::ValidationError(format!("Invalid schema config: {}", e)))?;

        debug!(
            path = %self.path.display(),
            sample_rows = config.sample_rows,
            "Loaded schema config"
        );
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_FILE)
    }
}
