// src/config.rs
//! Service configuration, read from the environment.

use std::{path::PathBuf, time::Duration};

use anyhow::Context;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5001";
const DEFAULT_ORS_BASE_URL: &str = "https://api.openrouteservice.org";
const DEFAULT_ROUTING_TIMEOUT_SECS: u64 = 8;
const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Clone, Debug)]
pub struct Config {
    /// Address to bind the HTTP listener.
    pub bind_addr: String,
    /// openrouteservice API key. Routing is disabled without one.
    pub ors_api_key: Option<String>,
    pub ors_base_url: String,
    pub routing_timeout: Duration,
    /// Optional JSON file replacing the built-in reply templates.
    pub catalog_path: Option<PathBuf>,
    /// Directory served for paths that are not API routes.
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            ors_api_key: None,
            ors_base_url: DEFAULT_ORS_BASE_URL.into(),
            routing_timeout: Duration::from_secs(DEFAULT_ROUTING_TIMEOUT_SECS),
            catalog_path: None,
            static_dir: DEFAULT_STATIC_DIR.into(),
        }
    }
}

impl Config {
    /// Reads configuration from environment variables.
    ///
    /// | Variable               | Default                            |
    /// |------------------------|------------------------------------|
    /// | `BIND_ADDR`            | `0.0.0.0:5001`                     |
    /// | `ORS_API_KEY`          | unset (routing disabled)           |
    /// | `ORS_BASE_URL`         | `https://api.openrouteservice.org` |
    /// | `ROUTING_TIMEOUT_SECS` | `8`                                |
    /// | `CATALOG_PATH`         | unset (built-in templates)         |
    /// | `STATIC_DIR`           | `public`                           |
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let routing_timeout = match non_empty("ROUTING_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| {
                        format!("ROUTING_TIMEOUT_SECS must be whole seconds, got {raw:?}")
                    })?;
                anyhow::ensure!(secs > 0, "ROUTING_TIMEOUT_SECS must be greater than zero");
                Duration::from_secs(secs)
            }
            None => defaults.routing_timeout,
        };

        Ok(Self {
            bind_addr: non_empty("BIND_ADDR").unwrap_or(defaults.bind_addr),
            ors_api_key: non_empty("ORS_API_KEY"),
            ors_base_url: non_empty("ORS_BASE_URL").unwrap_or(defaults.ors_base_url),
            routing_timeout,
            catalog_path: non_empty("CATALOG_PATH").map(PathBuf::from),
            static_dir: non_empty("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        })
    }
}
