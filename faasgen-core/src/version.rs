use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

/// A plain `X.Y.Z` version, used for the scaffolded function's manifest.
///
/// This is deliberately not a full semver implementation: range operators and
/// pre-release tags belong to the dependency constraints, which stay opaque
/// strings all the way into the generated `package.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::new(0, 1, 0)
    }
}

impl TryFrom<String> for Version {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, '.');
        let mut next = |field: &str| -> Result<u64, String> {
            parts
                .next()
                .ok_or_else(|| format!("invalid version '{s}', expected 'X.Y.Z'"))?
                .parse()
                .map_err(|_| format!("invalid {field} in version '{s}'"))
        };

        Ok(Self {
            major: next("major")?,
            minor: next("minor")?,
            patch: next("patch")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("1.2.3".parse::<Version>().unwrap(), Version::new(1, 2, 3));
        assert_eq!("0.7.2".parse::<Version>().unwrap(), Version::new(0, 7, 2));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("1.2".parse::<Version>().is_err());
        assert!("1.2.x".parse::<Version>().is_err());
        assert!("".parse::<Version>().is_err());
    }

    #[test]
    fn test_default_is_initial_release() {
        assert_eq!(Version::default().to_string(), "0.1.0");
    }

    #[test]
    fn test_display_round_trip() {
        let v: Version = "4.16.2".parse().unwrap();
        assert_eq!(v.to_string(), "4.16.2");
    }
}
