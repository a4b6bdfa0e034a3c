//! URL construction for a branch/target pair.
//!
//! Maps a release channel and build target onto the download site's layout:
//! `snapshots/targets/<target>` for master, `releases/<release>-SNAPSHOT/targets/<target>`
//! for numbered releases. The manifest lives at `<listing>/sha256sums`.

mod branch;
mod target;

pub use branch::BranchRef;
pub use target::TargetRef;

/// Manifest filename published alongside each target's artifacts.
pub const MANIFEST_NAME: &str = "sha256sums";

/// Builds the listing URL for a target's artifact directory.
pub fn listing_url(base: &str, branch: &BranchRef, target: &TargetRef) -> String {
    let base = base.trim_end_matches('/');
    match branch {
        BranchRef::Master => format!("{}/snapshots/targets/{}", base, target.path()),
        BranchRef::Release(release) => {
            format!("{}/releases/{}-SNAPSHOT/targets/{}", base, release, target.path())
        }
    }
}

/// URL of the sha256sums manifest for a listing.
pub fn manifest_url(listing: &str) -> String {
    format!("{}/{}", listing, MANIFEST_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn master_uses_snapshots_root() {
        let branch = BranchRef::parse("master").unwrap();
        let target = TargetRef::new("x86-64");
        assert_eq!(
            listing_url("https://downloads.openwrt.org", &branch, &target),
            "https://downloads.openwrt.org/snapshots/targets/x86/64"
        );
    }

    #[test]
    fn release_uses_snapshot_suffixed_release_root() {
        let branch = BranchRef::parse("openwrt-23.05").unwrap();
        let target = TargetRef::new("ath79-generic");
        assert_eq!(
            listing_url("https://downloads.openwrt.org", &branch, &target),
            "https://downloads.openwrt.org/releases/23.05-SNAPSHOT/targets/ath79/generic"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        let branch = BranchRef::parse("master").unwrap();
        let target = TargetRef::new("x86-64");
        assert_eq!(
            listing_url("http://127.0.0.1:8080/", &branch, &target),
            "http://127.0.0.1:8080/snapshots/targets/x86/64"
        );
    }

    #[test]
    fn manifest_url_appends_sha256sums() {
        assert_eq!(
            manifest_url("https://downloads.openwrt.org/snapshots/targets/x86/64"),
            "https://downloads.openwrt.org/snapshots/targets/x86/64/sha256sums"
        );
    }
}
