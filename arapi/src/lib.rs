//! Safe, revision-aware binding over the workflow server C client API.
//!
//! A [`Binding`] loads the vendor client library once, picks the revision
//! of the ladder that matches its version and resolves every entry point.
//! A [`Session`] logs in through a binding and exposes one method per
//! operation; inputs and outputs are owned Rust records.

pub mod api;
pub mod arena;
pub mod batch;
pub mod binding;
pub mod codec;
pub mod config;
pub mod error;
pub mod ladder;
pub mod library;
pub mod list;
pub mod records;
pub mod release;
pub mod session;
pub mod status;
pub mod value;
pub mod version;

pub use api::*;
pub use batch::BatchItem;
pub use binding::Binding;
pub use codec::Charset;
pub use config::{BindingConfig, Profile};
pub use error::{Error, Result};
pub use ladder::{EntryPoint, Revision};
pub use library::{SymbolAddr, SymbolSource};
pub use records::*;
pub use session::{LoginParams, Session, SessionState};
pub use status::{Outcome, Severity, StatusEntry, StatusList};
pub use value::Value;
pub use version::ApiVersion;
