//! Service configuration.

use config::{Config, Environment, File};
use seoulscript_error::ConfigError;
use seoulscript_models::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Prefix of service environment variables (`SEOULSCRIPT_BIND_ADDR`, ...).
pub const ENV_PREFIX: &str = "SEOULSCRIPT";

/// Optional configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "seoulscript";

/// Provider variables read without the service prefix.
const OPENAI_VARS: [(&str, &str); 4] = [
    ("openai_api_key", "OPENAI_API_KEY"),
    ("openai_model", "OPENAI_MODEL"),
    ("openai_mvp_model", "OPENAI_MVP_MODEL"),
    ("openai_base_url", "OPENAI_BASE_URL"),
];

/// Runtime configuration of the HTTP service.
///
/// Sources, lowest precedence first: built-in defaults, `seoulscript.toml`,
/// `SEOULSCRIPT_*` variables, then the `OPENAI_*` variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Provider credential; without it every LLM call fails
    pub openai_api_key: Option<String>,
    /// Model for storyboard and script generation
    pub openai_model: String,
    /// Model for the single-scene endpoint
    pub openai_mvp_model: String,
    /// Chat completions API root
    pub openai_base_url: String,
    /// Directory holding the datasets (or their `data/` subdirectory)
    pub app_root: PathBuf,
    /// Where results are saved; `<app_root>/outputs` when unset
    pub output_dir: Option<PathBuf>,
    /// Listen address
    pub bind_addr: String,
    /// Browser origins allowed by CORS
    pub cors_origins: Vec<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_model: "gpt-3.5-turbo".to_string(),
            openai_mvp_model: "gpt-4o-mini".to_string(),
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            app_root: PathBuf::from("."),
            output_dir: None,
            bind_addr: "127.0.0.1:8000".to_string(),
            cors_origins: [
                "http://localhost",
                "http://localhost:8080",
                "http://localhost:3000",
                "http://127.0.0.1",
                "http://127.0.0.1:5500",
                "null",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl ServiceConfig {
    /// Load from `./seoulscript.toml` (if present) and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None, std::env::vars().collect())
    }

    /// Load from an explicit config file and environment map.
    ///
    /// A `file` of `None` looks for an optional `seoulscript.toml` in the
    /// working directory; an explicit path must exist.
    #[instrument(skip(env))]
    pub fn load_from(
        file: Option<&Path>,
        env: HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let file_source = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(CONFIG_FILE).required(false),
        };

        let mut builder = Config::builder()
            .add_source(file_source)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .ignore_empty(true)
                    .source(Some(env.clone().into_iter().collect())),
            );

        for (key, var) in OPENAI_VARS {
            let value = env.get(var).filter(|value| !value.is_empty()).cloned();
            builder = builder
                .set_override_option(key, value)
                .map_err(|e| ConfigError::new(format!("Invalid value for {}: {}", var, e)))?;
        }

        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        debug!(
            bind_addr = %config.bind_addr,
            app_root = %config.app_root.display(),
            has_api_key = config.openai_api_key.is_some(),
            "Loaded service configuration"
        );
        Ok(config)
    }

    /// Resolved output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| self.app_root.join("outputs"))
    }

    /// Parsed listen address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_addr.parse().map_err(|e| {
            let message = format!("Invalid bind address '{}': {}", self.bind_addr, e);
            ConfigError::new(message)
        })
    }
}
