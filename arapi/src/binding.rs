//! A loaded client library with its resolved dispatch and free tables.

use std::sync::Arc;

use crate::config::BindingConfig;
use crate::error::{Error, Result};
use crate::ladder::{Callee, DispatchTable, EntryPoint, Revision};
use crate::library::{NativeLibrary, SymbolSource, detect_version};
use crate::release::FreeTable;
use crate::version::ApiVersion;

/// Default library base name when no path is configured.
pub const DEFAULT_LIBRARY: &str = "arapi";

/// Everything resolved once per library. Immutable and shared by sessions.
pub struct Binding {
    source: Box<dyn SymbolSource>,
    version: ApiVersion,
    table: DispatchTable,
    frees: FreeTable,
}

impl Binding {
    /// Load the library named by `config` and resolve its entry points.
    pub fn load(config: &BindingConfig) -> Result<Arc<Binding>> {
        let library = match &config.library {
            Some(path) => NativeLibrary::load(path)?,
            None => NativeLibrary::load_by_name(DEFAULT_LIBRARY)?,
        };
        Self::from_source(Box::new(library), config.api_version)
    }

    /// Build a binding over any symbol source.
    ///
    /// Without an explicit version the library name must encode one.
    pub fn from_source(
        source: Box<dyn SymbolSource>,
        version: Option<ApiVersion>,
    ) -> Result<Arc<Binding>> {
        let version = match version {
            Some(v) => v,
            None => detect_version(source.name())
                .ok_or_else(|| Error::UnknownLibraryVersion(source.name().to_string()))?,
        };
        let revision = Revision::for_version(version)?;
        log::info!(
            "loaded {} (API {version}, revision {revision})",
            source.name()
        );
        let table = DispatchTable::build(revision, source.as_ref());
        let frees = FreeTable::resolve(source.as_ref());
        Ok(Arc::new(Binding {
            source,
            version,
            table,
            frees,
        }))
    }

    /// The version the library reports (or was configured with).
    pub fn version(&self) -> ApiVersion {
        self.version
    }

    /// The ladder rung the calls dispatch through.
    pub fn revision(&self) -> Revision {
        self.table.revision()
    }

    pub fn library_name(&self) -> &str {
        self.source.name()
    }

    pub fn callee(&self, entry: EntryPoint) -> Result<Callee> {
        self.table.callee(entry)
    }

    pub fn supports(&self, entry: EntryPoint) -> bool {
        self.table.supports(entry)
    }

    pub(crate) fn frees(&self) -> &FreeTable {
        &self.frees
    }
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("library", &self.source.name())
            .field("version", &self.version)
            .field("revision", &self.revision())
            .finish()
    }
}
