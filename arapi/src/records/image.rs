use serde::Serialize;

use super::{MetaPatch, ObjectMeta};

/// An image stored on the server (7.5 and later).
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Image {
    pub name: String,
    /// Format name such as `jpg` or `png`.
    pub kind: String,
    pub description: Option<String>,
    /// Computed by the server; ignored on create.
    pub checksum: Option<String>,
    #[serde(skip)]
    pub data: Vec<u8>,
    pub meta: ObjectMeta,
}

impl Image {
    pub fn new(name: &str, kind: &str, data: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            description: None,
            checksum: None,
            data,
            meta: ObjectMeta::default(),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ImagePatch {
    pub new_name: Option<String>,
    pub kind: Option<String>,
    pub description: Option<String>,
    pub data: Option<Vec<u8>>,
    pub meta: MetaPatch,
}
