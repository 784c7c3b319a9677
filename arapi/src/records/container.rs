use arapi_sys::*;
use serde::Serialize;

use super::{Decoder, Encoder, MetaPatch, ObjectMeta, Permission};
use crate::error::Result;
use crate::list::{copy_list, from_native_list};
use crate::value::Value;

/// Schema (or other object) that owns a container.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct ContainerOwner {
    pub kind: u32,
    pub name: String,
}

impl ContainerOwner {
    pub fn schema(name: &str) -> Self {
        Self {
            kind: ARCONOWNER_SCHEMA,
            name: name.to_string(),
        }
    }

    pub(crate) fn from_native(raw: &ARContainerOwnerObj, dec: &Decoder<'_>) -> Result<Self> {
        Ok(Self {
            kind: raw.type_,
            name: dec.name(&raw.ownerName)?,
        })
    }

    pub(crate) fn to_native(&self, enc: &Encoder<'_>) -> Result<ARContainerOwnerObj> {
        Ok(ARContainerOwnerObj {
            type_: self.kind,
            ownerName: enc.name_buf(&self.name)?,
        })
    }

    /// # Safety
    ///
    /// `raw` must be a list filled in by the library.
    pub(crate) unsafe fn list_from_native(raw: &ARContainerOwnerObjList, dec: &Decoder<'_>) -> Result<Vec<Self>> {
        // SAFETY: forwarded.
        unsafe { from_native_list(raw, |o| Self::from_native(o, dec)) }
    }

    pub(crate) fn list_to_native(enc: &mut Encoder<'_>, owners: &[Self]) -> Result<ARContainerOwnerObjList> {
        enc.map_list(owners, |enc, o| o.to_native(enc))
    }
}

#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ReferenceTarget {
    /// Another server object, by name.
    Object { name: String },
    /// Data outside the server, visible to `groups`.
    External { groups: Vec<u32>, value: Value },
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Reference {
    pub label: Option<String>,
    pub description: Option<String>,
    pub kind: u32,
    pub target: ReferenceTarget,
}

impl Reference {
    pub(crate) unsafe fn from_native(raw: &ARReferenceStruct, dec: &Decoder<'_>) -> Result<Self> {
        // SAFETY: the data type selects the live member; pointers are null
        // or library output.
        unsafe {
            let target = match raw.reference.dataType {
                ARREF_DATA_EXTREF => ReferenceTarget::External {
                    groups: copy_list(&raw.reference.u.extRef.permittedGroups)?,
                    value: dec.value(&raw.reference.u.extRef.value)?,
                },
                _ => ReferenceTarget::Object {
                    name: dec.name(&raw.reference.u.name)?,
                },
            };
            Ok(Self {
                label: dec.opt_text(raw.label)?,
                description: dec.opt_text(raw.description)?,
                kind: raw.type_,
                target,
            })
        }
    }

    pub(crate) fn to_native(&self, enc: &mut Encoder<'_>) -> Result<ARReferenceStruct> {
        let reference = match &self.target {
            ReferenceTarget::Object { name } => ARReferenceUnionStruct {
                dataType: ARREF_DATA_ARSREF,
                u: ARReferenceUnion {
                    name: enc.name_buf(name)?,
                },
            },
            ReferenceTarget::External { groups, value } => ARReferenceUnionStruct {
                dataType: ARREF_DATA_EXTREF,
                u: ARReferenceUnion {
                    extRef: ARExtReferenceStruct {
                        permittedGroups: enc.list(groups.clone()),
                        value: enc.value(value)?,
                    },
                },
            },
        };
        Ok(ARReferenceStruct {
            label: enc.opt_str(self.label.as_deref())?,
            description: enc.opt_str(self.description.as_deref())?,
            type_: self.kind,
            reference,
        })
    }

    /// # Safety
    ///
    /// `raw` must be a list filled in by the library.
    pub(crate) unsafe fn list_from_native(raw: &ARReferenceList, dec: &Decoder<'_>) -> Result<Vec<Self>> {
        // SAFETY: forwarded.
        unsafe { from_native_list(raw, |r| Self::from_native(r, dec)) }
    }

    pub(crate) fn list_to_native(enc: &mut Encoder<'_>, refs: &[Self]) -> Result<ARReferenceList> {
        enc.map_list(refs, |enc, r| r.to_native(enc))
    }
}

/// A guide, application, packing list or web service definition.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Container {
    pub name: String,
    pub kind: u32,
    pub label: Option<String>,
    pub description: Option<String>,
    pub permissions: Vec<Permission>,
    pub admin_groups: Vec<u32>,
    pub owners: Vec<ContainerOwner>,
    pub references: Vec<Reference>,
    pub meta: ObjectMeta,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ContainerPatch {
    pub new_name: Option<String>,
    pub kind: Option<u32>,
    pub label: Option<String>,
    pub description: Option<String>,
    pub permissions: Option<Vec<Permission>>,
    pub admin_groups: Option<Vec<u32>>,
    pub owners: Option<Vec<ContainerOwner>>,
    pub references: Option<Vec<Reference>>,
    /// Drop references to objects that no longer exist.
    pub remove_invalid_references: bool,
    pub meta: MetaPatch,
}

/// One row of a container listing.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct ContainerInfo {
    pub name: String,
    pub kind: u32,
    pub owners: Vec<ContainerOwner>,
}

impl ContainerInfo {
    pub(crate) unsafe fn from_native(raw: &ARContainerInfo, dec: &Decoder<'_>) -> Result<Self> {
        Ok(Self {
            name: dec.name(&raw.name)?,
            kind: raw.type_,
            // SAFETY: library output.
            owners: unsafe { ContainerOwner::list_from_native(&raw.ownerList, dec) }?,
        })
    }
}
