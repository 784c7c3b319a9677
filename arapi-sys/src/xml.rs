//! XML import/export documents and parsed streams.

use std::os::raw::{c_char, c_uint, c_void};

use crate::types::*;

#[repr(C)]
#[derive(Clone, Copy)]
pub union ARXMLDocUnion {
    pub charBuffer: *mut c_char,
    pub fileName: *mut c_char,
    pub url: *mut c_char,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARXMLInputDoc {
    pub docType: c_uint,
    pub u: ARXMLDocUnion,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARXMLOutputDoc {
    pub docType: c_uint,
    pub u: ARXMLDocUnion,
}

/// Opaque parse state owned by the native library.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARXMLParsedStream {
    pub xmlStream: *mut c_void,
    pub xmlDocument: *mut c_void,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARStructItemStruct {
    pub type_: c_uint,
    pub name: ARNameType,
    pub selectedElements: ARNameList,
}

pub type ARStructItemList = ARList<ARStructItemStruct>;

zeroable!(
    ARXMLDocUnion,
    ARXMLInputDoc,
    ARXMLOutputDoc,
    ARXMLParsedStream,
    ARStructItemStruct,
);
