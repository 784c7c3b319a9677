//! The entry-point façade: one method per operation on `Session`.
//!
//! Every method follows the same steps. It resolves the callee for the
//! active revision and builds inputs in an `Encoder`. It allocates zeroed
//! outputs in an `Outputs` scope and makes one native call through
//! `Session::invoke`, which also reports the status. Finally it decodes the
//! outputs into owned records before the scope returns them to the library.

mod active_link;
mod container;
mod entry;
mod escalation;
mod field;
mod filter;
mod image;
mod menu;
mod qualifier;
mod schema;
mod vui;
mod xml;

pub use container::ContainerFilter;
pub use field::FieldFilter;
pub use image::ImageFilter;
pub use menu::MenuFilter;
pub use schema::SchemaFilter;
pub use xml::{FromXml, ParsedXml, StructItem, XmlInput};

use std::os::raw::c_char;

use arapi_sys::*;

use crate::batch::{Batch, Column};
use crate::error::Result;
use crate::records::{Decoder, Encoder, ErrorHandler, MetaPatch, ObjectMeta, Property};
use crate::release::{Out, Outputs};

/// Output slots for the attributes every definition carries.
pub(crate) struct MetaOut<'o> {
    help: Out<'o, *mut c_char>,
    timestamp: Out<'o, ARTimestamp>,
    owner: Out<'o, ARAccessNameType>,
    last_changed: Out<'o, ARAccessNameType>,
    diary: Out<'o, *mut c_char>,
    props: Option<Out<'o, ARPropList>>,
}

impl<'o> MetaOut<'o> {
    /// `with_props` when the active shape returns object properties.
    pub(crate) fn new(out: &'o Outputs<'_>, with_props: bool) -> Self {
        Self {
            help: out.alloc(),
            timestamp: out.alloc(),
            owner: out.alloc(),
            last_changed: out.alloc(),
            diary: out.alloc(),
            props: with_props.then(|| out.alloc()),
        }
    }

    pub(crate) fn help(&self) -> *mut *mut c_char {
        self.help.ptr()
    }

    pub(crate) fn timestamp(&self) -> *mut ARTimestamp {
        self.timestamp.ptr()
    }

    pub(crate) fn owner(&self) -> *mut ARAccessNameType {
        self.owner.ptr()
    }

    pub(crate) fn last_changed(&self) -> *mut ARAccessNameType {
        self.last_changed.ptr()
    }

    pub(crate) fn diary(&self) -> *mut *mut c_char {
        self.diary.ptr()
    }

    pub(crate) fn props(&self) -> *mut ARPropList {
        self.props.map_or(std::ptr::null_mut(), Out::ptr)
    }

    /// # Safety
    ///
    /// The slots must have been filled in by a successful call.
    pub(crate) unsafe fn decode(&self, dec: &Decoder<'_>) -> Result<ObjectMeta> {
        // SAFETY: per the caller.
        unsafe {
            Ok(ObjectMeta {
                help_text: dec.opt_text(*self.help.get())?,
                timestamp: *self.timestamp.get(),
                owner: dec.name(self.owner.get())?,
                last_changed: dec.name(self.last_changed.get())?,
                change_diary: dec.opt_text(*self.diary.get())?,
                properties: self.props.map(|p| dec.props(p.get())).transpose()?,
            })
        }
    }
}

/// Encoded common attributes of a create or set call. Absent attributes are
/// native nulls.
pub(crate) struct MetaIn {
    pub(crate) help: *mut c_char,
    pub(crate) owner: *mut c_char,
    pub(crate) diary: *mut c_char,
    pub(crate) props: *mut ARPropList,
}

impl MetaIn {
    pub(crate) fn encode(enc: &mut Encoder<'_>, patch: &MetaPatch) -> Result<Self> {
        Ok(Self {
            help: enc.opt_str(patch.help_text.as_deref())?,
            owner: enc.opt_str(patch.owner.as_deref())?,
            diary: enc.opt_str(patch.change_diary.as_deref())?,
            props: enc.opt_props(patch.properties.as_deref())?,
        })
    }

    /// From a full record: what it carries is sent as is.
    pub(crate) fn from_meta(enc: &mut Encoder<'_>, meta: &ObjectMeta) -> Result<Self> {
        Self::encode(enc, &MetaPatch::from(meta))
    }
}

/// Output slots for the common attributes of a batch call.
pub(crate) struct MetaListsOut<'o> {
    help: Out<'o, ARTextStringList>,
    timestamp: Out<'o, ARTimestampList>,
    owner: Out<'o, ARAccessNameList>,
    last_changed: Out<'o, ARAccessNameList>,
    diary: Out<'o, ARTextStringList>,
    props: Option<Out<'o, ARPropListList>>,
}

impl<'o> MetaListsOut<'o> {
    pub(crate) fn new(out: &'o Outputs<'_>, with_props: bool) -> Self {
        Self {
            help: out.alloc(),
            timestamp: out.alloc(),
            owner: out.alloc(),
            last_changed: out.alloc(),
            diary: out.alloc(),
            props: with_props.then(|| out.alloc()),
        }
    }

    pub(crate) fn help(&self) -> *mut ARTextStringList {
        self.help.ptr()
    }

    pub(crate) fn timestamp(&self) -> *mut ARTimestampList {
        self.timestamp.ptr()
    }

    pub(crate) fn owner(&self) -> *mut ARAccessNameList {
        self.owner.ptr()
    }

    pub(crate) fn last_changed(&self) -> *mut ARAccessNameList {
        self.last_changed.ptr()
    }

    pub(crate) fn diary(&self) -> *mut ARTextStringList {
        self.diary.ptr()
    }

    pub(crate) fn props(&self) -> *mut ARPropListList {
        self.props.map_or(std::ptr::null_mut(), Out::ptr)
    }

    /// # Safety
    ///
    /// The lists must have been filled in by a successful call.
    pub(crate) unsafe fn columns<K>(&self, batch: &Batch<'_, K>) -> Result<MetaColumns<'o>>
    where
        K: Clone + std::fmt::Display,
    {
        // SAFETY: per the caller.
        unsafe {
            Ok(MetaColumns {
                help: batch.column(self.help.get())?,
                timestamp: batch.column(self.timestamp.get())?,
                owner: batch.column(self.owner.get())?,
                last_changed: batch.column(self.last_changed.get())?,
                diary: batch.column(self.diary.get())?,
                props: batch.opt_column(self.props.map(Out::get))?,
            })
        }
    }
}

pub(crate) struct MetaColumns<'c> {
    help: Column<'c, *mut c_char>,
    timestamp: Column<'c, ARTimestamp>,
    owner: Column<'c, ARAccessNameType>,
    last_changed: Column<'c, ARAccessNameType>,
    diary: Column<'c, *mut c_char>,
    props: Option<Column<'c, ARPropList>>,
}

impl MetaColumns<'_> {
    /// # Safety
    ///
    /// The columns must come from a successful call.
    pub(crate) unsafe fn at(&self, i: usize, dec: &Decoder<'_>) -> Result<ObjectMeta> {
        // SAFETY: per the caller.
        unsafe {
            Ok(ObjectMeta {
                help_text: dec.opt_text(*self.help.at(i)?)?,
                timestamp: *self.timestamp.at(i)?,
                owner: dec.name(self.owner.at(i)?)?,
                last_changed: dec.name(self.last_changed.at(i)?)?,
                change_diary: dec.opt_text(*self.diary.at(i)?)?,
                properties: Column::opt_at(&self.props, i)?.map(|p| dec.props(p)).transpose()?,
            })
        }
    }
}

/// Selects the workflow objects (active links, filters, escalations) a list
/// call returns.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct WorkflowFilter {
    /// Only objects attached to this schema; every object when `None`.
    pub schema: Option<String>,
    pub changed_since: i32,
    /// Object properties to match, from 6.3.
    pub properties: Option<Vec<Property>>,
}

/// Encoded error handler of a workflow create or set call.
pub(crate) struct HandlerIn {
    pub(crate) options: u32,
    pub(crate) name: *mut c_char,
}

impl HandlerIn {
    /// No handler sends zero options and a null name.
    pub(crate) fn encode(enc: &mut Encoder<'_>, handler: Option<&ErrorHandler>) -> Result<Self> {
        match handler {
            Some(h) => Ok(Self {
                options: h.options,
                name: enc.name(&h.name)?,
            }),
            None => Ok(Self {
                options: 0,
                name: std::ptr::null_mut(),
            }),
        }
    }

    /// Options of a set call: null leaves the handler unchanged.
    pub(crate) fn options_ptr(&self) -> *const u32 {
        if self.name.is_null() { std::ptr::null() } else { &self.options }
    }
}

/// A handler with no options and no name is absent.
pub(crate) fn decode_handler(options: u32, name: &[c_char], dec: &Decoder<'_>) -> Result<Option<ErrorHandler>> {
    let name = dec.name(name)?;
    if options == 0 && name.is_empty() {
        return Ok(None);
    }
    Ok(Some(ErrorHandler { options, name }))
}

/// Pointer of an output the active shape may not carry.
pub(crate) fn slot<T>(out: Option<Out<'_, T>>) -> *mut T {
    out.map_or(std::ptr::null_mut(), Out::ptr)
}

/// Owned copy of a name list, for batch keys.
pub(crate) fn owned_names(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}
