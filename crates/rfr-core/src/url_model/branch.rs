//! Branch identifiers: rolling master or a numbered release.

use crate::error::ResolveError;

/// Prefix marking a numbered release branch (e.g. `openwrt-23.05`).
const RELEASE_PREFIX: &str = "openwrt-";

/// A recognized release channel of the firmware distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchRef {
    /// Rolling development branch; artifacts live under `snapshots/`.
    Master,
    /// Numbered release branch; carries the release identifier (e.g. "23.05").
    Release(String),
}

impl BranchRef {
    /// Parses a raw branch string.
    ///
    /// Anything other than the literal `master` or `openwrt-<release>` with a
    /// non-empty release identifier is rejected, before any network activity.
    pub fn parse(raw: &str) -> Result<Self, ResolveError> {
        if raw == "master" {
            return Ok(BranchRef::Master);
        }
        if let Some(release) = raw.strip_prefix(RELEASE_PREFIX) {
            if !release.is_empty() {
                return Ok(BranchRef::Release(release.to_string()));
            }
        }
        Err(ResolveError::UnsupportedBranch {
            branch: raw.to_string(),
        })
    }
}
