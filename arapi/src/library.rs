//! Native library loading, symbol lookup and version detection.

use std::ffi::{CString, c_void};
use std::path::Path;
use std::ptr::NonNull;

use libloading::Library;

use crate::error::{Error, Result};
use crate::version::ApiVersion;

/// Address of an exported symbol.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SymbolAddr(NonNull<c_void>);

// SAFETY: a code address carries no thread affinity; calling through it is
// what needs care, and that happens behind `Callee::cast`.
unsafe impl Send for SymbolAddr {}
unsafe impl Sync for SymbolAddr {}

impl SymbolAddr {
    /// `None` for a null address.
    pub fn new(ptr: *const c_void) -> Option<Self> {
        NonNull::new(ptr as *mut c_void).map(Self)
    }

    pub fn as_ptr(self) -> *const c_void {
        self.0.as_ptr()
    }
}

/// Where entry points and free routines come from.
///
/// The production source is a [`NativeLibrary`]; tests register in-process
/// functions with the same signatures.
pub trait SymbolSource: Send + Sync {
    fn lookup(&self, symbol: &str) -> Option<SymbolAddr>;

    /// Human-readable origin (library path), also used for version detection.
    fn name(&self) -> &str;
}

/// A loaded client library.
pub struct NativeLibrary {
    library: Library,
    path: String,
}

impl NativeLibrary {
    /// Load a client library from a path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        // SAFETY: loading runs the library's initialisers; the vendor client
        // library has no unusual load-time requirements.
        let library = unsafe { Library::new(path) }.map_err(|e| Error::Library {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            library,
            path: path.display().to_string(),
        })
    }

    /// Load a library by base name (`arapi81_build001`), decorated for the
    /// platform and found through the dynamic loader's search path.
    pub fn load_by_name(name: &str) -> Result<Self> {
        Self::load(Self::platform_lib_name(name))
    }

    fn platform_lib_name(name: &str) -> String {
        #[cfg(target_os = "windows")]
        {
            format!("{name}.dll")
        }
        #[cfg(target_os = "macos")]
        {
            format!("lib{name}.dylib")
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            format!("lib{name}.so")
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl SymbolSource for NativeLibrary {
    fn lookup(&self, symbol: &str) -> Option<SymbolAddr> {
        let c_name = CString::new(symbol).ok()?;
        // SAFETY: the symbol is read as an untyped address; it is only
        // called after being cast to the signature of its resolved shape.
        let sym = unsafe { self.library.get::<*const c_void>(c_name.as_bytes_with_nul()) }.ok()?;
        SymbolAddr::new(*sym)
    }

    fn name(&self) -> &str {
        &self.path
    }
}

/// Read the API version from a library file name.
///
/// Looks for the digit run following `arapi` in the file stem, so
/// `libarapi81_build001.so`, `arapi7604.dll` and `/opt/ar/lib/libarapi763.so`
/// all resolve. Returns `None` rather than guessing.
pub fn detect_version(path: &str) -> Option<ApiVersion> {
    let file = Path::new(path).file_name()?.to_str()?.to_ascii_lowercase();
    let at = file.find("arapi")?;
    let digits: String = file[at + "arapi".len()..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    ApiVersion::from_compact(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_lib_name() {
        let name = NativeLibrary::platform_lib_name("arapi81");
        #[cfg(target_os = "windows")]
        assert_eq!(name, "arapi81.dll");
        #[cfg(target_os = "macos")]
        assert_eq!(name, "libarapi81.dylib");
        #[cfg(target_os = "linux")]
        assert_eq!(name, "libarapi81.so");
    }

    #[test]
    fn version_from_file_name() {
        assert_eq!(detect_version("libarapi81_build001.so"), Some(ApiVersion::new(8, 1, 0)));
        assert_eq!(detect_version("/opt/ar/lib/libarapi763.so"), Some(ApiVersion::new(7, 6, 3)));
        assert_eq!(detect_version("arapi7604.dll"), Some(ApiVersion::new(7, 6, 4)));
        assert_eq!(detect_version("libarapi.so"), None);
        assert_eq!(detect_version("libclient.so"), None);
    }

    #[test]
    fn missing_library_is_reported() {
        let err = NativeLibrary::load("/nonexistent/libarapi81.so").err();
        assert!(matches!(err, Some(Error::Library { .. })));
    }

    #[test]
    fn missing_library_by_name_reports_the_decorated_name() {
        let name = "arapi_no_such_build";
        match NativeLibrary::load_by_name(name) {
            Err(Error::Library { path, .. }) => assert_eq!(path, NativeLibrary::platform_lib_name(name)),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("{name} should not load"),
        }
    }

    #[test]
    fn null_address_is_rejected() {
        assert!(SymbolAddr::new(std::ptr::null()).is_none());
    }
}
