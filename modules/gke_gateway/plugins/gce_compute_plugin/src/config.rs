//! Configuration for the Compute Engine REST plugin.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://compute.googleapis.com/compute/v1";
pub const DEFAULT_USER_AGENT: &str = concat!("gkegw/", env!("CARGO_PKG_VERSION"));

/// Plugin configuration.
#[derive(Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GceComputePluginConfig {
    /// Base URL of the Compute Engine v1 API.
    pub endpoint: String,

    /// OAuth2 access token sent as `Authorization: Bearer`.
    #[serde(skip_serializing)]
    pub access_token: Option<SecretString>,

    /// Permit a plain `http://` endpoint (emulators and tests).
    pub allow_insecure_http: bool,

    pub user_agent: String,

    /// Per-request timeout in seconds. `0` disables it.
    pub request_timeout_secs: u64,
}

impl Default for GceComputePluginConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            access_token: None,
            allow_insecure_http: false,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            request_timeout_secs: 30,
        }
    }
}
