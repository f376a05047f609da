//! Errors raised while building the REST client.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("invalid compute endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("compute endpoint '{0}' uses plain HTTP; set allow_insecure_http to permit it")]
    InsecureEndpoint(String),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
