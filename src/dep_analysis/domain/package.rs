use crate::shared::Result;

/// Maximum length for package names
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// Maximum length for package versions
const MAX_VERSION_LENGTH: usize = 100;

/// NewType wrapper for a pip package name with validation.
///
/// Names are kept case-sensitive exactly as the environment reports them;
/// no normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        // Restricting the character set keeps names safe to splice into
        // subprocess arguments and index URLs.
        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            anyhow::bail!(
                "Package name contains invalid characters. Only alphanumeric, hyphens, underscores, and dots are allowed."
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for a package version string with validation.
///
/// Versions are opaque text as reported by the environment; the crate never
/// parses or orders them (freshness is an exact string comparison).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn new(version: String) -> Result<Self> {
        if version.is_empty() {
            anyhow::bail!("Package version cannot be empty");
        }

        if version.len() > MAX_VERSION_LENGTH {
            anyhow::bail!(
                "Package version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            );
        }

        // PEP 440 versions may carry epochs (1!2.0), local segments (+cu118),
        // and pre/post markers, so the allowed set is wider than for names.
        if !version
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '.' | '-' | '_' | '+' | '!' | '*'))
        {
            anyhow::bail!(
                "Package version contains invalid characters. Only alphanumeric and .-_+!* are allowed."
            );
        }

        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name_valid() {
        let name = PackageName::new("requests".to_string()).unwrap();
        assert_eq!(name.as_str(), "requests");
    }

    #[test]
    fn test_package_name_with_separators() {
        assert!(PackageName::new("typing-extensions".to_string()).is_ok());
        assert!(PackageName::new("ruamel.yaml".to_string()).is_ok());
        assert!(PackageName::new("backports_abc".to_string()).is_ok());
    }

    #[test]
    fn test_package_name_empty() {
        assert!(PackageName::new(String::new()).is_err());
    }

    #[test]
    fn test_package_name_invalid_characters() {
        assert!(PackageName::new("requests; rm -rf /".to_string()).is_err());
        assert!(PackageName::new("pkg/../../etc".to_string()).is_err());
    }

    #[test]
    fn test_package_name_too_long() {
        let long_name = "a".repeat(256);
        assert!(PackageName::new(long_name).is_err());
    }

    #[test]
    fn test_package_name_case_preserved() {
        let name = PackageName::new("PyYAML".to_string()).unwrap();
        assert_eq!(name.as_str(), "PyYAML");
    }

    #[test]
    fn test_version_valid() {
        let version = Version::new("2.31.0".to_string()).unwrap();
        assert_eq!(version.as_str(), "2.31.0");
    }

    #[test]
    fn test_version_pep440_forms() {
        assert!(Version::new("1!2.0.0".to_string()).is_ok());
        assert!(Version::new("2.1.0+cu118".to_string()).is_ok());
        assert!(Version::new("1.0.0rc1".to_string()).is_ok());
    }

    #[test]
    fn test_version_empty() {
        assert!(Version::new(String::new()).is_err());
    }

    #[test]
    fn test_version_invalid_characters() {
        assert!(Version::new("1.0.0; reboot".to_string()).is_err());
    }

    #[test]
    fn test_version_display() {
        let version = Version::new("0.9.1".to_string()).unwrap();
        assert_eq!(format!("{}", version), "0.9.1");
    }
}
