//! Parsing of the `sha256sums` manifest published per target build.
//!
//! Format: one `<hexdigest><whitespace><filename>` entry per line. The
//! filename may carry a single leading `*` (checksum tool binary-mode
//! marker), which is stripped before comparison. Checksum values themselves
//! are never verified here; only filenames are read.

use crate::error::ResolveError;

/// Filename suffix identifying the root-filesystem archive.
pub const ROOTFS_SUFFIX: &str = "rootfs.tar.gz";

/// One parsed manifest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub digest: String,
    pub filename: String,
}

/// Parses a single manifest line into digest and filename.
///
/// Exactly two whitespace-separated fields are required; any other count is
/// fatal so upstream format drift surfaces instead of being skipped.
pub fn parse_line(line_no: usize, line: &str) -> Result<ManifestEntry, ResolveError> {
    let mut fields = line.split_whitespace();
    let (digest, filename) = match (fields.next(), fields.next(), fields.next()) {
        (Some(digest), Some(filename), None) => (digest, filename),
        _ => {
            return Err(ResolveError::MalformedManifestLine {
                line_no,
                line: line.to_string(),
            })
        }
    };
    let filename = filename.strip_prefix('*').unwrap_or(filename);
    Ok(ManifestEntry {
        digest: digest.to_string(),
        filename: filename.to_string(),
    })
}

/// Scans the manifest body and returns the filename of the first entry
/// ending in [`ROOTFS_SUFFIX`]. Manifest order defines precedence; later
/// matches are never considered.
pub fn find_rootfs(body: &str) -> Result<Option<String>, ResolveError> {
    for (idx, line) in body.lines().enumerate() {
        let entry = parse_line(idx + 1, line)?;
        if entry.filename.ends_with(ROOTFS_SUFFIX) {
            return Ok(Some(entry.filename));
        }
    }
    Ok(None)
}
