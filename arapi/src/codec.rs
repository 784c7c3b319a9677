//! Text conversion between Rust strings and the session's wire charset.

use std::ffi::CStr;
use std::fmt;
use std::os::raw::c_char;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Character set negotiated for a session.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Charset {
    /// ISO-8859-1, the client library's historical default.
    #[default]
    Latin1,
    Utf8,
}

impl Charset {
    /// Charset implied by a locale name such as `en_US.UTF-8`.
    pub fn from_locale(locale: &str) -> Option<Self> {
        let (_, suffix) = locale.rsplit_once('.')?;
        let suffix = suffix.split('@').next().unwrap_or(suffix);
        match suffix.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Some(Charset::Utf8),
            "iso-8859-1" | "iso8859-1" | "iso88591" | "latin1" => Some(Charset::Latin1),
            _ => None,
        }
    }

    /// Name stored in the control block's localization info.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Charset::Latin1 => "ISO-8859-1",
            Charset::Utf8 => "UTF-8",
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Converts every string crossing the boundary with one charset.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Codec {
    charset: Charset,
}

impl Codec {
    pub const fn new(charset: Charset) -> Self {
        Self { charset }
    }

    pub const fn charset(&self) -> Charset {
        self.charset
    }

    /// Encode to bytes without a terminator.
    pub fn encode(&self, s: &str) -> Result<Vec<u8>> {
        let bytes = match self.charset {
            Charset::Utf8 => s.as_bytes().to_vec(),
            Charset::Latin1 => s
                .chars()
                .map(|c| u8::try_from(u32::from(c)).map_err(|_| Error::Encoding("ISO-8859-1")))
                .collect::<Result<Vec<u8>>>()?,
        };
        if bytes.contains(&0) {
            return Err(Error::InteriorNul);
        }
        Ok(bytes)
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        match self.charset {
            Charset::Utf8 => String::from_utf8(bytes.to_vec()).map_err(|_| Error::Encoding("UTF-8")),
            Charset::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }

    /// Decode a NUL-terminated native string; `None` for a null pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or point to a NUL-terminated string.
    pub unsafe fn decode_ptr(&self, ptr: *const c_char) -> Result<Option<String>> {
        if ptr.is_null() {
            return Ok(None);
        }
        // SAFETY: non-null and NUL-terminated per the caller.
        let bytes = unsafe { CStr::from_ptr(ptr) }.to_bytes();
        self.decode(bytes).map(Some)
    }

    /// Decode a native string, treating null as empty.
    ///
    /// # Safety
    ///
    /// As for [`decode_ptr`](Self::decode_ptr).
    pub unsafe fn decode_text(&self, ptr: *const c_char) -> Result<String> {
        // SAFETY: forwarded.
        Ok(unsafe { self.decode_ptr(ptr) }?.unwrap_or_default())
    }

    /// Decode a fixed-size name buffer up to its first NUL.
    pub fn decode_name(&self, buf: &[c_char]) -> Result<String> {
        let bytes: Vec<u8> = buf.iter().take_while(|&&c| c != 0).map(|&c| c as u8).collect();
        self.decode(&bytes)
    }

    /// Encode into a fixed-size name buffer of `N` bytes including the NUL.
    pub fn encode_name<const N: usize>(&self, s: &str) -> Result<[c_char; N]> {
        let bytes = self.encode(s)?;
        if bytes.len() >= N {
            return Err(Error::NameTooLong {
                name: s.to_string(),
                max: N - 1,
            });
        }
        let mut buf = [0 as c_char; N];
        for (dst, &b) in buf.iter_mut().zip(&bytes) {
            *dst = b as c_char;
        }
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arapi_sys::{AR_MAX_NAME_SIZE, ARNameType};

    #[test]
    fn latin1_round_trip() {
        let codec = Codec::new(Charset::Latin1);
        let bytes = codec.encode("Größe").unwrap();
        assert_eq!(bytes, b"Gr\xf6\xdfe");
        assert_eq!(codec.decode(&bytes).unwrap(), "Größe");
    }

    #[test]
    fn latin1_rejects_wide_chars() {
        let codec = Codec::new(Charset::Latin1);
        assert!(matches!(codec.encode("日本"), Err(Error::Encoding(_))));
        assert!(Codec::new(Charset::Utf8).encode("日本").is_ok());
    }

    #[test]
    fn utf8_rejects_invalid_bytes() {
        let codec = Codec::new(Charset::Utf8);
        assert!(matches!(codec.decode(b"\xff"), Err(Error::Encoding(_))));
    }

    #[test]
    fn interior_nul_is_an_error() {
        assert!(matches!(Codec::default().encode("a\0b"), Err(Error::InteriorNul)));
    }

    #[test]
    fn name_bounds() {
        let codec = Codec::default();
        let max = "x".repeat(AR_MAX_NAME_SIZE);
        let buf: ARNameType = codec.encode_name(&max).unwrap();
        assert_eq!(codec.decode_name(&buf).unwrap(), max);

        let too_long = "x".repeat(AR_MAX_NAME_SIZE + 1);
        let err = codec.encode_name::<{ AR_MAX_NAME_SIZE + 1 }>(&too_long).unwrap_err();
        assert!(matches!(err, Error::NameTooLong { max: AR_MAX_NAME_SIZE, .. }));
    }

    #[test]
    fn null_pointer_decodes_to_none() {
        let codec = Codec::default();
        // SAFETY: null is accepted.
        assert_eq!(unsafe { codec.decode_ptr(std::ptr::null()) }.unwrap(), None);
        let s = c"HelpDesk";
        // SAFETY: a C string literal.
        assert_eq!(unsafe { codec.decode_ptr(s.as_ptr()) }.unwrap().as_deref(), Some("HelpDesk"));
    }

    #[test]
    fn charset_from_locale() {
        assert_eq!(Charset::from_locale("en_US.UTF-8"), Some(Charset::Utf8));
        assert_eq!(Charset::from_locale("de_DE.utf8@euro"), Some(Charset::Utf8));
        assert_eq!(Charset::from_locale("fr_FR.ISO-8859-1"), Some(Charset::Latin1));
        assert_eq!(Charset::from_locale("en_US"), None);
    }
}
