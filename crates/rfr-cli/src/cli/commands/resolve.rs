//! Resolve command: fetch the manifest and print the matching archive URL.

use anyhow::Result;
use rfr_core::config::RfrConfig;
use rfr_core::fetch::CurlSource;
use rfr_core::resolver::{self, ResolveRequest};
use std::time::Duration;

/// Resolves and prints the rootfs archive URL.
///
/// The URL is the only line ever written to stdout; diagnostics go to the
/// log stream. Any resolution failure propagates so main can exit non-zero.
pub fn run_resolve(cfg: &RfrConfig, branch: String, target: String) -> Result<()> {
    let source = CurlSource::new(
        Duration::from_secs(cfg.connect_timeout_secs),
        Duration::from_secs(cfg.timeout_secs),
    );
    let request = ResolveRequest { branch, target };
    let resolved = resolver::resolve(&cfg.base_url, &request, &source)?;
    println!("{}", resolved.0);
    Ok(())
}
