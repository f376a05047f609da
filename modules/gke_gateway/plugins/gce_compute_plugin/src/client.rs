//! Compute Engine v1 REST client.

use std::time::Duration;

use async_trait::async_trait;
use gke_gateway_sdk::{
    BackendService, ComputeClient, ComputeError, ForwardingRulePage, Scope, TargetHttpsProxy,
    UrlMap,
};
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::GceComputePluginConfig;
use crate::error::BuildError;

pub const FORWARDING_RULES: &str = "forwardingRules";
pub const TARGET_HTTPS_PROXIES: &str = "targetHttpsProxies";
pub const URL_MAPS: &str = "urlMaps";
pub const BACKEND_SERVICES: &str = "backendServices";

/// Error body returned by Google APIs.
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Read-only Compute Engine client.
pub struct GceComputeClient {
    http: reqwest::Client,
    endpoint: Url,
    access_token: Option<SecretString>,
}

impl GceComputeClient {
    /// Build a client from plugin configuration.
    ///
    /// # Errors
    ///
    /// - `InvalidEndpoint` if the endpoint is not an absolute URL with a path
    /// - `InsecureEndpoint` if the endpoint is `http://` and insecure HTTP is not allowed
    /// - `Client` if the HTTP client cannot be constructed
    pub fn new(cfg: &GceComputePluginConfig) -> Result<Self, BuildError> {
        let endpoint = Url::parse(&cfg.endpoint).map_err(|e| BuildError::InvalidEndpoint {
            endpoint: cfg.endpoint.clone(),
            reason: e.to_string(),
        })?;

        if endpoint.cannot_be_a_base() {
            return Err(BuildError::InvalidEndpoint {
                endpoint: cfg.endpoint.clone(),
                reason: "not a base URL".to_owned(),
            });
        }
        match endpoint.scheme() {
            "https" => {}
            "http" if cfg.allow_insecure_http => {}
            "http" => return Err(BuildError::InsecureEndpoint(cfg.endpoint.clone())),
            other => {
                return Err(BuildError::InvalidEndpoint {
                    endpoint: cfg.endpoint.clone(),
                    reason: format!("unsupported scheme {other}"),
                });
            }
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(cfg.user_agent.clone())
            .https_only(!cfg.allow_insecure_http);
        if cfg.request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(cfg.request_timeout_secs));
        }

        Ok(Self {
            http: builder.build()?,
            endpoint,
            access_token: cfg
                .access_token
                .as_ref()
                .map(|t| SecretString::from(t.expose_secret().to_owned())),
        })
    }

    /// `{endpoint}/projects/{p}/{global | regions/{r}}/{collection}[/{name}]`
    fn resource_url(
        &self,
        scope: &Scope,
        collection: &str,
        name: Option<&str>,
    ) -> Result<Url, ComputeError> {
        let mut url = self.endpoint.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| ComputeError::Internal("endpoint is not a base URL".to_owned()))?;
            segments
                .pop_if_empty()
                .push("projects")
                .push(scope.project());
            if let Some(region) = scope.region() {
                segments.push("regions").push(region);
            } else {
                segments.push("global");
            }
            segments.push(collection);
            if let Some(name) = name {
                segments.push(name);
            }
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ComputeError> {
        debug!(%url, "compute GET");

        let mut request = self.http.get(url);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request
            .send()
            .await
            .map_err(|e| ComputeError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ComputeError::Transport(e.to_string()))?;
        debug!(status = status.as_u16(), bytes = body.len(), "compute response");

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        serde_json::from_slice(&body).map_err(|e| ComputeError::Decode(e.to_string()))
    }

    async fn get_resource<T: DeserializeOwned>(
        &self,
        scope: &Scope,
        collection: &str,
        name: &str,
    ) -> Result<T, ComputeError> {
        // An empty name would address the collection itself.
        if name.is_empty() {
            return Err(ComputeError::NotFound(format!("{scope}/{collection}/")));
        }
        let url = self.resource_url(scope, collection, Some(name))?;
        self.get_json(url).await
    }
}

/// Map a non-2xx response, preferring the message from the Google error envelope.
fn status_error(status: StatusCode, body: &[u8]) -> ComputeError {
    let message = serde_json::from_slice::<ErrorEnvelope>(body)
        .ok()
        .map(|e| e.error.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown status").to_owned());

    if status == StatusCode::NOT_FOUND {
        ComputeError::NotFound(message)
    } else {
        ComputeError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl ComputeClient for GceComputeClient {
    async fn list_forwarding_rules(
        &self,
        scope: &Scope,
        page_token: Option<&str>,
    ) -> Result<ForwardingRulePage, ComputeError> {
        let mut url = self.resource_url(scope, FORWARDING_RULES, None)?;
        if let Some(token) = page_token {
            url.query_pairs_mut().append_pair("pageToken", token);
        }
        self.get_json(url).await
    }

    async fn get_target_https_proxy(
        &self,
        scope: &Scope,
        name: &str,
    ) -> Result<TargetHttpsProxy, ComputeError> {
        self.get_resource(scope, TARGET_HTTPS_PROXIES, name).await
    }

    async fn get_url_map(&self, scope: &Scope, name: &str) -> Result<UrlMap, ComputeError> {
        self.get_resource(scope, URL_MAPS, name).await
    }

    async fn get_backend_service(
        &self,
        scope: &Scope,
        name: &str,
    ) -> Result<BackendService, ComputeError> {
        self.get_resource(scope, BACKEND_SERVICES, name).await
    }
}
