use serde::Serialize;

use super::{MetaPatch, ObjectMeta, Property};

/// A view (layout) of a schema.
///
/// `locale` is `None` when the server did not report one, which is always
/// the case for batch reads on libraries between 7.5 and 7.6.04.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Vui {
    pub schema: String,
    pub id: u32,
    pub name: String,
    pub locale: Option<String>,
    pub kind: u32,
    pub properties: Vec<Property>,
    pub meta: ObjectMeta,
}

impl Vui {
    pub fn new(schema: &str, id: u32, name: &str) -> Self {
        Self {
            schema: schema.to_string(),
            id,
            name: name.to_string(),
            locale: None,
            kind: 0,
            properties: Vec::new(),
            meta: ObjectMeta::default(),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct VuiPatch {
    pub name: Option<String>,
    pub locale: Option<String>,
    pub kind: Option<u32>,
    pub properties: Option<Vec<Property>>,
    pub meta: MetaPatch,
}
