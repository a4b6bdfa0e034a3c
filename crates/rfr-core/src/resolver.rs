//! Resolution pipeline: branch/target → listing URL → manifest scan → URL.
//!
//! Pure lookup with one external side effect (the manifest GET, issued
//! through the [`ManifestSource`] seam). At most one URL is produced per
//! invocation; the first matching manifest entry wins.

use tracing::info;

use crate::error::{FetchFailure, ResolveError};
use crate::fetch::ManifestSource;
use crate::manifest;
use crate::url_model::{self, BranchRef, TargetRef};

/// Per-invocation inputs, constructed at the process boundary so the
/// resolver itself never reads the environment.
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    pub branch: String,
    pub target: String,
}

/// Successfully resolved archive location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUrl(pub String);

/// Resolves the rootfs archive URL for `request`, fetching the manifest
/// through `source`.
///
/// Empty inputs and an unsupported branch fail before any fetch. A non-2xx
/// response or transport failure is `ManifestUnavailable`; a fetched
/// manifest with no matching entry is `NoRootfsFound`.
pub fn resolve(
    base_url: &str,
    request: &ResolveRequest,
    source: &dyn ManifestSource,
) -> Result<ResolvedUrl, ResolveError> {
    if request.branch.is_empty() {
        return Err(ResolveError::MissingConfiguration { name: "branch" });
    }
    if request.target.is_empty() {
        return Err(ResolveError::MissingConfiguration { name: "target" });
    }
    let branch = BranchRef::parse(&request.branch)?;
    let target = TargetRef::new(&request.target);
    let target_url = url_model::listing_url(base_url, &branch, &target);
    let manifest_url = url_model::manifest_url(&target_url);
    info!(
        branch = %request.branch,
        target = %request.target,
        url = %manifest_url,
        "resolving rootfs archive"
    );

    let response = source.fetch(&manifest_url).map_err(|reason| {
        ResolveError::ManifestUnavailable {
            url: manifest_url.clone(),
            reason,
        }
    })?;
    if !(200..300).contains(&response.status) {
        return Err(ResolveError::ManifestUnavailable {
            url: manifest_url,
            reason: FetchFailure::Http(response.status),
        });
    }

    match manifest::find_rootfs(&response.body)? {
        Some(filename) => {
            let resolved = format!("{}/{}", target_url, filename);
            info!(url = %resolved, "resolved rootfs archive");
            Ok(ResolvedUrl(resolved))
        }
        None => Err(ResolveError::NoRootfsFound { url: manifest_url }),
    }
}
