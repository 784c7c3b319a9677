use thiserror::Error;

use crate::ladder::{EntryPoint, Revision};
use crate::status::StatusList;
use crate::version::ApiVersion;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to load library '{path}': {reason}")]
    Library { path: String, reason: String },

    #[error("Symbol '{0}' not found in the client library")]
    MissingSymbol(&'static str),

    #[error("Cannot tell the API version of '{0}'; set it explicitly")]
    UnknownLibraryVersion(String),

    #[error("Unsupported API version: {0}")]
    UnsupportedVersion(ApiVersion),

    #[error("{entry} needs revision {since} but the library is {revision}")]
    NotSupported {
        entry: EntryPoint,
        since: Revision,
        revision: Revision,
    },

    #[error("{0} is not implemented by this binding")]
    NotImplemented(EntryPoint),

    #[error("Session is not logged in")]
    Uninitialized,

    #[error("Session is already logged in")]
    SessionActive,

    #[error("Invalid server endpoint '{0}'")]
    InvalidEndpoint(String),

    #[error("No server name given and the server list is empty")]
    NoServer,

    #[error("{entry} failed: {status}")]
    Server {
        entry: EntryPoint,
        status: StatusList,
    },

    #[error("Unsupported value data type {0}")]
    UnsupportedValueKind(u32),

    #[error("A query value's qualifier can only be encoded through a session")]
    DetachedQualifier,

    #[error("Unsupported field limit data type {0}")]
    UnsupportedLimitKind(u32),

    #[error("Action kind {0} cannot be sent back to the server")]
    UnsupportedAction(u32),

    #[error("Name '{name}' exceeds {max} bytes")]
    NameTooLong { name: String, max: usize },

    #[error("The {field} exceeds {max} bytes")]
    FieldTooLong { field: &'static str, max: usize },

    #[error("String contains an interior NUL byte")]
    InteriorNul,

    #[error("Cannot encode or decode text as {0}")]
    Encoding(&'static str),

    #[error("Native list claims {0} items but has no storage")]
    CorruptList(usize),

    #[error("{entry}: parallel list has {got} items, expected {expected}")]
    BatchShape {
        entry: EntryPoint,
        expected: usize,
        got: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, Error>;
