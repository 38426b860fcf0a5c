use crate::shared::Result;

/// LatestVersionProvider port for determining the newest published version
/// of a package.
///
/// The default adapter scrapes pip's failed-install error output, which is
/// inherently fragile; this seam keeps the freshness contract decoupled
/// from that mechanism so a package-index-backed provider can be swapped
/// in without touching callers.
pub trait LatestVersionProvider {
    /// Returns the newest published version of `package_name`, in the
    /// external tool's own ordering.
    ///
    /// # Returns
    /// `None` when no version list could be determined (for the scraping
    /// adapter this covers unexpected output formats). Callers must treat
    /// `None` as "not known to be latest", never as a failure.
    ///
    /// # Errors
    /// Returns an error only when the external tool cannot be invoked at
    /// all.
    fn latest_version(&self, package_name: &str) -> Result<Option<String>>;
}

/// Freshness check shared by all providers: the installed version is latest
/// iff it is textually equal to the provider's newest version. A provider
/// that found nothing reports "not latest" (false-safe default).
pub fn is_latest_version<P: LatestVersionProvider + ?Sized>(
    provider: &P,
    package_name: &str,
    current_version: &str,
) -> Result<bool> {
    let latest = provider.latest_version(package_name)?;
    Ok(matches!(latest, Some(ref v) if v == current_version))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider(Option<String>);

    impl LatestVersionProvider for FixedProvider {
        fn latest_version(&self, _package_name: &str) -> Result<Option<String>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_is_latest_when_versions_match() {
        let provider = FixedProvider(Some("2.0".to_string()));
        assert!(is_latest_version(&provider, "pkg", "2.0").unwrap());
    }

    #[test]
    fn test_not_latest_when_versions_differ() {
        let provider = FixedProvider(Some("2.0".to_string()));
        assert!(!is_latest_version(&provider, "pkg", "1.1").unwrap());
    }

    #[test]
    fn test_unknown_latest_defaults_to_not_latest() {
        let provider = FixedProvider(None);
        assert!(!is_latest_version(&provider, "pkg", "1.1").unwrap());
    }
}
