//! Error taxonomy for rootfs URL resolution.
//!
//! Every failure is terminal for the invocation (no retries); the CLI maps
//! each one to an error log line and a non-zero exit code.

use thiserror::Error;

/// Why the manifest GET produced no usable body.
#[derive(Debug, Error)]
pub enum FetchFailure {
    /// Response arrived but with a non-success status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Curl reported an error (timeout, DNS, connection, etc.).
    #[error(transparent)]
    Transport(#[from] curl::Error),
    /// Response body was not valid UTF-8. Surfaced instead of lossy
    /// replacement so manifest drift is not masked.
    #[error("invalid UTF-8 in response body: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

/// Resolution failure, one variant per failure path.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A required input (branch or target) was not supplied. Raised before
    /// any network activity.
    #[error("missing required configuration: {name}")]
    MissingConfiguration { name: &'static str },

    /// Branch is neither `master` nor `openwrt-<release>`. No network call
    /// is attempted for such a branch.
    #[error("unsupported branch {branch:?}: expected \"master\" or \"openwrt-<release>\"")]
    UnsupportedBranch { branch: String },

    /// The sha256sums manifest could not be fetched.
    #[error("manifest unavailable at {url}: {reason}")]
    ManifestUnavailable { url: String, reason: FetchFailure },

    /// Manifest fetched, but no filename ends with the rootfs suffix.
    #[error("no rootfs archive listed in manifest at {url}")]
    NoRootfsFound { url: String },

    /// A manifest line did not split into exactly two whitespace-separated
    /// fields. Fatal, so upstream format drift surfaces instead of being
    /// silently skipped.
    #[error("malformed manifest line {line_no}: {line:?}")]
    MalformedManifestLine { line_no: usize, line: String },
}
