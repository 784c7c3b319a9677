//! Library and login configuration, loaded from YAML profiles.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::codec::Charset;
use crate::error::{Error, Result};
use crate::session::LoginParams;
use crate::version::ApiVersion;

/// Overrides the library path.
pub const LIBRARY_ENV: &str = "ARAPI_LIBRARY";
/// Overrides the API version.
pub const VERSION_ENV: &str = "ARAPI_VERSION";

/// Which client library to load and which version it speaks.
#[derive(Clone, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BindingConfig {
    pub library: Option<PathBuf>,
    pub api_version: Option<ApiVersion>,
}

impl BindingConfig {
    /// Apply `ARAPI_LIBRARY` and `ARAPI_VERSION` from the environment.
    pub fn with_env(self) -> Result<Self> {
        self.with_overrides(
            std::env::var(LIBRARY_ENV).ok(),
            std::env::var(VERSION_ENV).ok(),
        )
    }

    fn with_overrides(mut self, library: Option<String>, version: Option<String>) -> Result<Self> {
        if let Some(library) = library.filter(|s| !s.is_empty()) {
            self.library = Some(PathBuf::from(library));
        }
        if let Some(version) = version.filter(|s| !s.is_empty()) {
            self.api_version = Some(version.parse()?);
        }
        Ok(self)
    }
}

/// A stored connection profile.
///
/// ```yaml
/// binding:
///   library: /opt/ar/lib/libarapi81_build001.so
/// server: helpdesk.example.com:1234
/// user: Demo
/// password: ""
/// locale: en_US.UTF-8
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    pub binding: BindingConfig,
    pub server: String,
    pub user: String,
    pub password: String,
    pub locale: Option<String>,
    pub charset: Option<Charset>,
    pub auth: Option<String>,
    pub rpc: Option<u32>,
}

impl Profile {
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;
        let mut profile = Self::from_yaml(&text)?;
        profile.binding = profile.binding.with_env()?;
        Ok(profile)
    }

    pub fn login_params(&self) -> LoginParams {
        let mut params = LoginParams::new(&self.server, &self.user, &self.password);
        if let Some(locale) = &self.locale {
            params = params.locale(locale);
        }
        if let Some(charset) = self.charset {
            params = params.charset(charset);
        }
        if let Some(auth) = &self.auth {
            params = params.auth(auth);
        }
        if let Some(rpc) = self.rpc {
            params = params.rpc(rpc);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_from_yaml() {
        let profile = Profile::from_yaml(
            "binding:\n  library: /opt/libarapi81.so\n  api_version: \"7.6.04\"\n\
             server: host:1234\nuser: demo\npassword: pw\ncharset: utf8\nrpc: 390621\n",
        )
        .unwrap();
        assert_eq!(profile.binding.library, Some(PathBuf::from("/opt/libarapi81.so")));
        assert_eq!(profile.binding.api_version, Some(ApiVersion::new(7, 6, 4)));
        assert_eq!(profile.charset, Some(Charset::Utf8));
        let params = profile.login_params();
        assert_eq!(params.endpoint(), "host:1234");
        assert_eq!(params.rpc_number(), Some(390621));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(Profile::from_yaml("servre: x\n"), Err(Error::Config(_))));
    }

    #[test]
    fn overrides_replace_file_values() {
        let config = BindingConfig {
            library: Some(PathBuf::from("a.so")),
            api_version: None,
        }
        .with_overrides(Some("libarapi763.so".into()), Some("7.6.03".into()))
        .unwrap();
        assert_eq!(config.library, Some(PathBuf::from("libarapi763.so")));
        assert_eq!(config.api_version, Some(ApiVersion::new(7, 6, 3)));

        let bad = BindingConfig::default().with_overrides(None, Some("seven".into()));
        assert!(matches!(bad, Err(Error::Config(_))));
    }
}
