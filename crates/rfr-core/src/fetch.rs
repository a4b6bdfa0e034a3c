//! Manifest retrieval over HTTP.
//!
//! The resolver depends only on the [`ManifestSource`] trait, so it stays
//! unit-testable without a network. The curl-backed implementation performs
//! the single blocking GET with explicit connect/total timeouts.

use std::time::Duration;

use crate::error::FetchFailure;

/// Raw outcome of a manifest GET that produced an HTTP response.
#[derive(Debug, Clone)]
pub struct ManifestResponse {
    pub status: u32,
    pub body: String,
}

/// Source of manifest bodies. Production uses [`CurlSource`]; tests supply
/// canned responses.
pub trait ManifestSource {
    /// Fetches `url`. `Err` means the transfer failed or the body could not
    /// be decoded; a non-2xx status still yields `Ok` so the caller can
    /// classify it.
    fn fetch(&self, url: &str) -> Result<ManifestResponse, FetchFailure>;
}

/// curl-backed source: one GET, follows redirects, bounded timeouts.
#[derive(Debug, Clone)]
pub struct CurlSource {
    connect_timeout: Duration,
    timeout: Duration,
}

impl CurlSource {
    pub fn new(connect_timeout: Duration, timeout: Duration) -> Self {
        Self {
            connect_timeout,
            timeout,
        }
    }
}

impl ManifestSource for CurlSource {
    fn fetch(&self, url: &str) -> Result<ManifestResponse, FetchFailure> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        Ok(ManifestResponse {
            status,
            body: String::from_utf8(body)?,
        })
    }
}
