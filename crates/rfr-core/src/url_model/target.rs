//! Build target identifiers and their URL path form.

/// A hardware/architecture target such as `x86-64` or `ath79-generic`.
///
/// Kept opaque; only the `-` separator has meaning (architecture vs.
/// sub-architecture segments).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRef(String);

impl TargetRef {
    pub fn new(raw: &str) -> Self {
        TargetRef(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL path form: every `-` becomes `/` (e.g. `x86-64` → `x86/64`).
    pub fn path(&self) -> String {
        self.0.replace('-', "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_becomes_slash() {
        assert_eq!(TargetRef::new("x86-64").path(), "x86/64");
        assert_eq!(TargetRef::new("ath79-generic").path(), "ath79/generic");
    }

    #[test]
    fn every_dash_is_replaced() {
        assert_eq!(TargetRef::new("a-b-c").path(), "a/b/c");
    }

    #[test]
    fn no_dash_passes_through() {
        assert_eq!(TargetRef::new("armsr").path(), "armsr");
        assert_eq!(TargetRef::new("armsr").as_str(), "armsr");
    }
}
