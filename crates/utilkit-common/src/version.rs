use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A `major.minor.patch` version. Missing trailing parts parse as zero, so `4`, `4.0`
/// and `4.0.0` are the same version.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("invalid version '{0}'")]
pub struct InvalidVersion(String);

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Lenient parse: `None` for empty or malformed input.
    pub fn parse(value: &str) -> Option<Version> {
        value.parse().ok()
    }
}

impl FromStr for Version {
    type Err = InvalidVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidVersion(s.to_string());

        let parts = s
            .trim()
            .split('.')
            .map(|p| p.parse::<u64>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        match parts.as_slice() {
            [major] => Ok(Version::new(*major, 0, 0)),
            [major, minor] => Ok(Version::new(*major, *minor, 0)),
            [major, minor, patch] => Ok(Version::new(*major, *minor, *patch)),
            _ => Err(invalid()),
        }
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn missing_parts_default_to_zero() {
        assert_eq!(Version::parse(""), None);
        assert_eq!(v("4").to_string(), "4.0.0");
        assert_eq!(v("4.0").to_string(), "4.0.0");
        assert_eq!(v("4.0.0").to_string(), "4.0.0");
        assert_eq!(v("4"), v("4.0.0"));
    }

    #[test]
    fn malformed_versions() {
        assert_eq!(Version::parse("4.x"), None);
        assert_eq!(Version::parse("1.2.3.4"), None);
        assert_eq!(
            "a".parse::<Version>(),
            Err(InvalidVersion("a".to_string()))
        );
    }

    #[test]
    fn ordering() {
        assert!(v("4.0.1") >= v("4.0.1"));
        assert!(v("4.0.2") >= v("4.0.1"));
        assert!(v("4.0.1") <= v("4.0.1"));
        assert!(v("4.0.1") <= v("4.0.2"));
        assert!(v("10.3.2") > v("10.2.3"));
        assert!(v("0") < v("321.3123.3123"));
    }
}
