use arapi_sys::*;
use serde::Serialize;

use super::{Decoder, Encoder};
use crate::error::Result;
use crate::list::from_native_list;
use crate::value::Value;

/// Access granted to one group.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Permission {
    pub group: u32,
    pub access: u32,
}

impl Permission {
    pub(crate) fn from_native(raw: &ARPermissionStruct) -> Self {
        Self {
            group: raw.groupId,
            access: raw.permissions,
        }
    }

    pub(crate) fn to_native(self) -> ARPermissionStruct {
        ARPermissionStruct {
            groupId: self.group,
            permissions: self.access,
        }
    }

    /// # Safety
    ///
    /// `raw` must be a list filled in by the library.
    pub(crate) unsafe fn list_from_native(raw: &ARPermissionList) -> Result<Vec<Permission>> {
        // SAFETY: forwarded.
        unsafe { from_native_list(raw, |p| Ok(Permission::from_native(p))) }
    }

    pub(crate) fn list_to_native(enc: &mut Encoder<'_>, perms: &[Permission]) -> ARPermissionList {
        enc.list(perms.iter().map(|p| p.to_native()).collect())
    }
}

/// A display or object property.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Property {
    pub id: u32,
    pub value: Value,
}

impl Property {
    pub fn new(id: u32, value: Value) -> Self {
        Self { id, value }
    }

    pub(crate) unsafe fn from_native(raw: &ARPropStruct, dec: &Decoder<'_>) -> Result<Self> {
        Ok(Self {
            id: raw.prop,
            // SAFETY: the value comes from the same native list.
            value: unsafe { dec.value(&raw.value) }?,
        })
    }

    pub(crate) fn to_native(&self, enc: &mut Encoder<'_>) -> Result<ARPropStruct> {
        Ok(ARPropStruct {
            prop: self.id,
            value: enc.value(&self.value)?,
        })
    }
}

/// Attributes every definition carries.
///
/// `properties` is `None` when the active revision does not return object
/// properties for the kind.
#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct ObjectMeta {
    pub help_text: Option<String>,
    pub timestamp: i32,
    pub owner: String,
    pub last_changed: String,
    pub change_diary: Option<String>,
    pub properties: Option<Vec<Property>>,
}

/// Changes to common attributes. `None` leaves the attribute untouched.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct MetaPatch {
    pub help_text: Option<String>,
    pub owner: Option<String>,
    pub change_diary: Option<String>,
    pub properties: Option<Vec<Property>>,
}

impl From<&ObjectMeta> for MetaPatch {
    fn from(meta: &ObjectMeta) -> Self {
        Self {
            help_text: meta.help_text.clone(),
            owner: (!meta.owner.is_empty()).then(|| meta.owner.clone()),
            change_diary: meta.change_diary.clone(),
            properties: meta.properties.clone(),
        }
    }
}

/// The schemas a workflow object is attached to.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct WorkflowConnect(pub Vec<String>);

impl WorkflowConnect {
    pub fn schema(name: &str) -> Self {
        Self(vec![name.to_string()])
    }

    /// First attached schema, used to compile the object's queries.
    pub fn primary(&self) -> &str {
        self.0.first().map_or("", String::as_str)
    }

    pub(crate) unsafe fn from_native(raw: &ARWorkflowConnectStruct, dec: &Decoder<'_>) -> Result<Self> {
        // SAFETY: the tag selects the live member; pointers are null or
        // valid library output.
        unsafe {
            match raw.type_ {
                AR_WORKFLOW_CONN_SCHEMA => match raw.u.schemaName.as_ref() {
                    Some(name) => Ok(Self(vec![dec.name(name)?])),
                    None => Ok(Self::default()),
                },
                AR_WORKFLOW_CONN_SCHEMA_LIST => match raw.u.schemaList.as_ref() {
                    Some(list) => Ok(Self(dec.names(list)?)),
                    None => Ok(Self::default()),
                },
                _ => Ok(Self::default()),
            }
        }
    }

    pub(crate) fn to_native(&self, enc: &mut Encoder<'_>) -> Result<ARWorkflowConnectStruct> {
        let list = enc.names(&self.0)?;
        Ok(ARWorkflowConnectStruct {
            type_: AR_WORKFLOW_CONN_SCHEMA_LIST,
            u: ARWorkflowConnectUnion {
                schemaList: enc.boxed(list),
            },
        })
    }
}

/// A recurring point in time (archive runs, escalation time marks).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
pub struct DayTime {
    pub monthday: u32,
    pub weekday: u32,
    pub hourmask: u32,
    pub minute: u32,
}

impl DayTime {
    pub(crate) fn from_native(raw: &ARDayStruct) -> Self {
        Self {
            monthday: raw.monthday,
            weekday: raw.weekday,
            hourmask: raw.hourmask,
            minute: raw.minute,
        }
    }

    pub(crate) fn to_native(self) -> ARDayStruct {
        ARDayStruct {
            monthday: self.monthday,
            weekday: self.weekday,
            hourmask: self.hourmask,
            minute: self.minute,
        }
    }
}

/// Workflow run when an action of the owning object fails.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct ErrorHandler {
    pub options: u32,
    pub name: String,
}
