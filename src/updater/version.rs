use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Launcher version: `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`, optionally
/// prefixed with `v` as release tags usually are.
///
/// Ordering follows semantic-versioning precedence: a pre-release sorts
/// before the release it precedes and build metadata is ignored.
#[derive(Debug, Clone)]
pub struct LauncherVersion {
    major: u64,
    minor: u64,
    patch: u64,
    pre: Vec<Identifier>,
    build: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Identifier {
    // Declared first: numeric identifiers have lower precedence than alphanumeric ones.
    Numeric(u64),
    AlphaNumeric(String),
}

impl LauncherVersion {
    /// Version of the running binary.
    pub fn current() -> Self {
        // CARGO_PKG_VERSION is validated semver at build time.
        env!("CARGO_PKG_VERSION")
            .parse()
            .unwrap_or_else(|_| Self::new(0, 0, 0))
    }

    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre: Vec::new(),
            build: None,
        }
    }

    /// Whether `self` has strictly higher precedence than `other`.
    pub fn is_newer_than(&self, other: &Self) -> bool {
        self > other
    }
}

impl FromStr for LauncherVersion {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let stripped = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);

        let (rest, build) = match stripped.split_once('+') {
            Some((rest, build)) if !build.is_empty() => (rest, Some(build.to_string())),
            Some(_) => return Err(format!("empty build metadata in '{input}'")),
            None => (stripped, None),
        };

        let (core, pre) = match rest.split_once('-') {
            Some((core, pre)) if !pre.is_empty() => (core, parse_prerelease(pre, input)?),
            Some(_) => return Err(format!("empty pre-release in '{input}'")),
            None => (rest, Vec::new()),
        };

        let parts: Vec<&str> = core.split('.').collect();
        let [major, minor, patch] = parts.as_slice() else {
            return Err(format!("'{input}' is not MAJOR.MINOR.PATCH"));
        };

        let number = |part: &str| {
            if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
                return Err(format!("'{part}' in '{input}' is not a number"));
            }
            if has_leading_zero(part) {
                return Err(format!("'{part}' in '{input}' has a leading zero"));
            }
            part.parse::<u64>().map_err(|e| format!("'{part}' in '{input}': {e}"))
        };

        Ok(Self {
            major: number(*major)?,
            minor: number(*minor)?,
            patch: number(*patch)?,
            pre,
            build,
        })
    }
}

fn parse_prerelease(pre: &str, input: &str) -> Result<Vec<Identifier>, String> {
    pre.split('.')
        .map(|ident| {
            if ident.is_empty() {
                Err(format!("empty pre-release identifier in '{input}'"))
            } else if ident.chars().all(|c| c.is_ascii_digit()) {
                if has_leading_zero(ident) {
                    return Err(format!("'{ident}' in '{input}' has a leading zero"));
                }
                ident
                    .parse()
                    .map(Identifier::Numeric)
                    .map_err(|e| format!("'{ident}' in '{input}': {e}"))
            } else {
                Ok(Identifier::AlphaNumeric(ident.to_string()))
            }
        })
        .collect()
}

fn has_leading_zero(digits: &str) -> bool {
    digits.len() > 1 && digits.starts_with('0')
}

impl Ord for LauncherVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (self.pre.is_empty(), other.pre.is_empty()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                // Lexicographic; a shorter prefix sorts first.
                (false, false) => self.pre.cmp(&other.pre),
            })
    }
}

impl PartialOrd for LauncherVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for LauncherVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for LauncherVersion {}

impl fmt::Display for LauncherVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre.is_empty() {
            let pre: Vec<String> = self
                .pre
                .iter()
                .map(|ident| match ident {
                    Identifier::Numeric(n) => n.to_string(),
                    Identifier::AlphaNumeric(s) => s.clone(),
                })
                .collect();
            write!(f, "-{}", pre.join("."))?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{build}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> LauncherVersion {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_with_and_without_prefix() {
        assert_eq!(v("v4.2.1"), LauncherVersion::new(4, 2, 1));
        assert_eq!(v("4.2.1"), LauncherVersion::new(4, 2, 1));
        assert_eq!(v(" 4.2.1 ").to_string(), "4.2.1");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "4.2", "4.2.1.0", "4.x.1", "4.2.1-", "4.2.1+", "4..1", "4.2.1-rc..1", "+4.2.1"] {
            assert!(bad.parse::<LauncherVersion>().is_err(), "accepted '{bad}'");
        }
    }

    #[test]
    fn test_leading_zeros_are_rejected() {
        for bad in ["01.2.3", "1.02.3", "1.2.03", "1.0.0-rc.01"] {
            assert!(bad.parse::<LauncherVersion>().is_err(), "accepted '{bad}'");
        }
        assert_eq!(v("0.10.0"), LauncherVersion::new(0, 10, 0));
        assert!(v("1.0.0-0a.0") < v("1.0.0"));
    }

    #[test]
    fn test_numeric_components_compare_numerically() {
        assert!(v("4.10.0") > v("4.9.9"));
        assert!(v("10.0.0") > v("9.99.99"));
    }

    #[test]
    fn test_prerelease_precedes_release() {
        assert!(v("4.3.0-rc.1") < v("4.3.0"));
        assert!(v("4.3.0-rc.1") > v("4.2.9"));
    }

    #[test]
    fn test_prerelease_identifier_precedence() {
        // Examples from the semantic versioning precedence rules.
        let ordered = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
        ];
        for pair in ordered.windows(2) {
            assert!(v(pair[0]) < v(pair[1]), "{} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_build_metadata_is_ignored() {
        assert_eq!(v("4.2.1+linux"), v("4.2.1"));
        assert!(!v("4.2.1+20210301").is_newer_than(&v("4.2.1")));
        assert_eq!(v("4.2.1-rc.2+abc").to_string(), "4.2.1-rc.2+abc");
    }

    #[test]
    fn test_current_matches_package_version() {
        assert_eq!(
            LauncherVersion::current().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }
}
