// src/services/reachability.rs

//! Link reachability probing.
//!
//! A reachability probe is a lightweight HEAD request that reports the
//! response status without fetching the body.

use async_trait::async_trait;

use crate::error::Result;

/// Statuses that count as reachable. Redirects are accepted as-is and
/// never followed; following them would change removal decisions.
pub const ACCEPTED_STATUSES: [u16; 3] = [200, 301, 302];

/// Probe for checking whether a URL answers on the live web.
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    /// Issue a HEAD-style request and return the response status code.
    ///
    /// Errors cover network failures and timeouts; the caller treats any
    /// error as "unreachable" rather than retrying.
    async fn head(&self, url: &str) -> Result<u16>;
}

/// Real HTTP probe backed by a shared client.
///
/// The client must be built with redirect following disabled so 301/302
/// surface as response statuses (see `utils::http::create_async_client`).
#[derive(Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    /// Create a probe around a configured HTTP client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReachabilityProbe for HttpProbe {
    async fn head(&self, url: &str) -> Result<u16> {
        let response = self.client.head(url).send().await?;
        Ok(response.status().as_u16())
    }
}

/// Whether a probe result counts as reachable.
pub fn is_reachable(result: &Result<u16>) -> bool {
    match result {
        Ok(status) => ACCEPTED_STATUSES.contains(status),
        Err(_) => false,
    }
}
