//! Layered configuration.
//!
//! Sources, later overriding earlier:
//! 1. Bundled defaults (`grimoire.toml` shipped with the crate)
//! 2. Either an explicit file, or the user files
//!    `<config_dir>/grimoire/grimoire.toml` and `./grimoire.toml`
//! 3. `GRIMOIRE__<SECTION>__<KEY>` environment variables

use config::{Config, Environment, File, FileFormat};
use grimoire_error::{ConfigError, GrimoireResult};
use grimoire_models::GeminiConfig;
use grimoire_storage::StorageConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../grimoire.toml");

/// Everything the binary needs to open a workshop.
///
/// # Examples
///
/// ```no_run
/// use grimoire::GrimoireConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = GrimoireConfig::load(None)?;
/// println!("model: {}", config.gemini().model());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct GrimoireConfig {
    /// Gemini connection settings
    gemini: GeminiConfig,
    /// Where collections are stored
    storage: StorageConfig,
}

impl GrimoireConfig {
    /// Load configuration from all sources, reading the process environment.
    ///
    /// When `path` is given it must exist and replaces the user config files.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a file cannot be read or a value has
    /// the wrong type.
    pub fn load(path: Option<&Path>) -> GrimoireResult<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`GrimoireConfig::load`], with `env` standing in for the process
    /// environment when provided.
    ///
    /// # Errors
    ///
    /// Same as [`GrimoireConfig::load`].
    #[instrument(skip(env))]
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> GrimoireResult<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        match path {
            Some(path) => {
                debug!("Using explicit configuration file");
                builder = builder.add_source(File::from(path).required(true));
            }
            None => {
                if let Some(user) = user_config_file() {
                    builder = builder.add_source(File::from(user).required(false));
                }
                builder = builder.add_source(File::with_name("grimoire").required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("GRIMOIRE")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {e}")))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {e}")).into())
    }
}

fn user_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("grimoire").join("grimoire.toml"))
}
