//! Plugin API trait for compute resource readers.
//!
//! Plugins implement [`ComputeClient`] to expose the four resource kinds the
//! resolver walks. Every method takes the [`Scope`] of the current resolution
//! and must use the matching regional or global API surface.

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};

use crate::compute::{BackendService, ForwardingRule, ForwardingRulePage, TargetHttpsProxy, UrlMap};
use crate::error::ComputeError;
use crate::models::Scope;

/// Read-only access to Compute Engine load balancing resources.
///
/// Implementations must be safe to share across concurrent resolutions.
#[async_trait]
pub trait ComputeClient: Send + Sync {
    /// List one page of forwarding rules.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the scope itself does not exist (e.g. a project that was
    ///   never provisioned with forwarding rules)
    /// - any other variant for genuine failures
    async fn list_forwarding_rules(
        &self,
        scope: &Scope,
        page_token: Option<&str>,
    ) -> Result<ForwardingRulePage, ComputeError>;

    /// Get a target HTTPS proxy by name.
    ///
    /// # Errors
    ///
    /// Returns `ComputeError` if the proxy cannot be fetched.
    async fn get_target_https_proxy(
        &self,
        scope: &Scope,
        name: &str,
    ) -> Result<TargetHttpsProxy, ComputeError>;

    /// Get a URL map by name.
    ///
    /// # Errors
    ///
    /// Returns `ComputeError` if the URL map cannot be fetched.
    async fn get_url_map(&self, scope: &Scope, name: &str) -> Result<UrlMap, ComputeError>;

    /// Get a backend service by name.
    ///
    /// # Errors
    ///
    /// Returns `ComputeError` if the backend service cannot be fetched.
    async fn get_backend_service(
        &self,
        scope: &Scope,
        name: &str,
    ) -> Result<BackendService, ComputeError>;
}

enum PageCursor {
    First,
    Next(String),
    Done,
}

/// Lazily walk every forwarding rule in `scope`, page by page.
///
/// The stream ends with `None` after the last page; a failure is yielded as an
/// `Err` item. Each call starts a fresh listing.
pub fn forwarding_rules<'a>(
    client: &'a dyn ComputeClient,
    scope: &'a Scope,
) -> BoxStream<'a, Result<ForwardingRule, ComputeError>> {
    stream::try_unfold(PageCursor::First, move |cursor| async move {
        let token = match cursor {
            PageCursor::First => None,
            PageCursor::Next(token) => Some(token),
            PageCursor::Done => return Ok(None),
        };

        let page = client
            .list_forwarding_rules(scope, token.as_deref())
            .await?;

        let next = match page.next_page_token {
            Some(token) if !token.is_empty() => PageCursor::Next(token),
            _ => PageCursor::Done,
        };

        Ok(Some((stream::iter(page.items.into_iter().map(Ok)), next)))
    })
    .try_flatten()
    .boxed()
}
