//! Client library API versions (`major.minor[.patch]`).

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// API version reported by (or configured for) a client library.
///
/// The patch component is printed with two digits, matching the vendor's
/// own numbering of maintenance drops:
///
/// ```
/// use arapi::ApiVersion;
///
/// assert_eq!(ApiVersion::new(8, 1, 0).to_string(), "8.1");
/// assert_eq!(ApiVersion::new(7, 6, 4).to_string(), "7.6.04");
/// assert_eq!("7.6.03".parse::<ApiVersion>().unwrap(), ApiVersion::new(7, 6, 3));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiVersion([u8; 3]);

impl ApiVersion {
    #[inline]
    pub const fn new(major: u8, minor: u8, patch: u8) -> Self {
        Self([major, minor, patch])
    }

    #[inline]
    pub const fn major(&self) -> u8 {
        self.0[0]
    }

    #[inline]
    pub const fn minor(&self) -> u8 {
        self.0[1]
    }

    #[inline]
    pub const fn patch(&self) -> u8 {
        self.0[2]
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }

    /// Decode the digit run vendors embed in library file names
    /// (`arapi81_build001`, `arapi7604`).
    ///
    /// Two digits are `major.minor`, three are `major.minor.0patch`, four are
    /// `major.minor.patch` with a two-digit patch.
    pub fn from_compact(digits: &str) -> Option<Self> {
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let d: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();
        match d.as_slice() {
            [major, minor] => Some(Self::new(*major, *minor, 0)),
            [major, minor, patch] => Some(Self::new(*major, *minor, *patch)),
            [major, minor, p1, p0] => Some(Self::new(*major, *minor, p1 * 10 + p0)),
            _ => None,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.patch() == 0 {
            write!(f, "{}.{}", self.major(), self.minor())
        } else {
            write!(f, "{}.{}.{:02}", self.major(), self.minor(), self.patch())
        }
    }
}

impl fmt::Debug for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiVersion({self})")
    }
}

impl FromStr for ApiVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::Config(format!("invalid API version '{s}'"));
        let mut parts = s.trim().split('.');
        let mut next = |required: bool| -> Result<u8> {
            match parts.next() {
                Some(p) => p.parse::<u8>().map_err(|_| bad()),
                None if required => Err(bad()),
                None => Ok(0),
            }
        };
        let major = next(true)?;
        let minor = next(true)?;
        let patch = next(false)?;
        if parts.next().is_some() {
            return Err(bad());
        }
        Ok(Self::new(major, minor, patch))
    }
}

impl From<[u8; 3]> for ApiVersion {
    fn from(bytes: [u8; 3]) -> Self {
        Self(bytes)
    }
}

impl From<ApiVersion> for [u8; 3] {
    fn from(v: ApiVersion) -> Self {
        v.0
    }
}

impl serde::Serialize for ApiVersion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for ApiVersion {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_digits() {
        assert_eq!(ApiVersion::from_compact("81"), Some(ApiVersion::new(8, 1, 0)));
        assert_eq!(ApiVersion::from_compact("763"), Some(ApiVersion::new(7, 6, 3)));
        assert_eq!(ApiVersion::from_compact("7604"), Some(ApiVersion::new(7, 6, 4)));
        assert_eq!(ApiVersion::from_compact("8"), None);
        assert_eq!(ApiVersion::from_compact("7x"), None);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("7".parse::<ApiVersion>().is_err());
        assert!("7.6.04.1".parse::<ApiVersion>().is_err());
        assert!("seven.one".parse::<ApiVersion>().is_err());
        assert_eq!(" 7.1 ".parse::<ApiVersion>().unwrap(), ApiVersion::new(7, 1, 0));
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", ApiVersion::new(7, 6, 4)), "ApiVersion(7.6.04)");
    }
}
