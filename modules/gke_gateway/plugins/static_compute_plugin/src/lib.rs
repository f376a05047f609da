//! Static Compute Plugin
//!
//! This plugin serves forwarding rules, target HTTPS proxies, URL maps and
//! backend services from configuration. Useful for testing, development, and
//! offline inspection of exported load balancer definitions.
//!
//! ## Configuration
//!
//! ```yaml
//! compute:
//!   backend: static
//!   static:
//!     page_size: 50
//!     scopes:
//!       - project: my-gcp-project
//!         region: us-central1
//!         forwarding_rules:
//!           - name: fr-1
//!             description: '{"k8sResource":"/namespaces/my-cool-app/gateways/my-gateway-name"}'
//!             target: projects/my-gcp-project/regions/us-central1/targetHttpsProxies/proxy-1
//!         target_https_proxies:
//!           - name: proxy-1
//!             urlMap: projects/my-gcp-project/regions/us-central1/urlMaps/map-1
//!         url_maps:
//!           - name: map-1
//!             defaultService: projects/my-gcp-project/regions/us-central1/backendServices/svc-1
//!         backend_services:
//!           - id: "4242"
//!             name: svc-1
//! ```
//!
//! Resource entries use the Compute Engine field names. A scope that is not
//! listed behaves like a project that was never provisioned: listing its
//! forwarding rules reports `NotFound`.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;

pub use config::StaticComputePluginConfig;
pub use domain::Service as StaticComputeClient;
