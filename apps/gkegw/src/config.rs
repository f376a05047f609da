//! Layered application configuration.

use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use gce_compute_plugin::GceComputePluginConfig;
use gke_gateway::GkeGatewayConfig;
use serde::{Deserialize, Serialize};
use static_compute_plugin::StaticComputePluginConfig;

/// Environment variable prefix; nested keys are separated by `__`.
pub const ENV_PREFIX: &str = "GKEGW__";

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Project and region used when a lookup does not name them.
    pub provider: GkeGatewayConfig,
    pub compute: ComputeConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComputeConfig {
    pub backend: ComputeBackend,
    pub rest: GceComputePluginConfig,
    #[serde(rename = "static")]
    pub inventory: StaticComputePluginConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputeBackend {
    /// Compute Engine v1 REST API.
    #[default]
    Rest,
    /// Resources listed under `compute.static`.
    Static,
}

impl AppConfig {
    /// Defaults, then the YAML file (if any), then `GKEGW__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or any layer fails to deserialize.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                anyhow::bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("invalid configuration")
    }
}
