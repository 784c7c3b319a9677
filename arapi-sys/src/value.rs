//! The tagged value union and the aggregates it points to.

use std::os::raw::{c_char, c_int, c_uint};

use crate::consts::*;
use crate::types::*;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARByteList {
    pub type_: c_uint,
    pub numItems: c_uint,
    pub bytes: *mut u8,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARBufStruct {
    pub bufSize: usize,
    pub buffer: *mut u8,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union ARLocUnion {
    pub filename: *mut c_char,
    pub buf: ARBufStruct,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARLocStruct {
    pub locType: c_uint,
    pub u: ARLocUnion,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARAttachStruct {
    pub name: *mut c_char,
    pub origSize: ARLong32,
    pub compSize: ARLong32,
    pub loc: ARLocStruct,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARCoordStruct {
    pub x: ARLong32,
    pub y: ARLong32,
}

pub type ARCoordList = ARList<ARCoordStruct>;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARFuncCurrencyStruct {
    pub value: *mut c_char,
    pub currencyCode: ARCurrencyCodeType,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARCurrencyStruct {
    pub value: *mut c_char,
    pub currencyCode: ARCurrencyCodeType,
    pub conversionDate: ARTimestamp,
    pub funcList: ARList<ARFuncCurrencyStruct>,
}

/// Search condition tree. Only the native library builds and walks these;
/// the binding exchanges them as text through the load/decode entry points.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARQualifierStruct {
    pub operation: c_uint,
    pub u: ARQualifierUnion,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union ARQualifierUnion {
    pub andor: ARAndOrStruct,
    pub notQual: *mut ARQualifierStruct,
    pub relOp: *mut std::os::raw::c_void,
    pub fieldId: ARInternalId,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARAndOrStruct {
    pub operandLeft: *mut ARQualifierStruct,
    pub operandRight: *mut ARQualifierStruct,
}

pub type ARQualifierList = ARList<ARQualifierStruct>;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARQueryValueStruct {
    pub schema: ARNameType,
    pub server: ARServerNameType,
    pub qualifier: *mut ARQualifierStruct,
    pub valueField: ARInternalId,
    pub multiMatchCode: c_uint,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union ARValueUnion {
    pub keyNum: c_uint,
    pub intVal: ARLong32,
    pub realVal: f64,
    pub charVal: *mut c_char,
    pub diaryVal: *mut c_char,
    pub enumVal: ARULong32,
    pub timeVal: ARTimestamp,
    pub maskVal: ARULong32,
    pub timeOfDayVal: ARTime,
    pub byteListVal: *mut ARByteList,
    pub decimalVal: *mut c_char,
    pub attachVal: *mut ARAttachStruct,
    pub ulongVal: ARULong32,
    pub coordListVal: *mut ARCoordList,
    pub dateVal: c_int,
    pub queryValue: *mut ARQueryValueStruct,
    pub currencyVal: *mut ARCurrencyStruct,
}

/// A value as carried on the wire: the tag selects the live union member.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARValueStruct {
    pub dataType: c_uint,
    pub u: ARValueUnion,
}

impl ARValueStruct {
    pub fn null() -> Self {
        Self {
            dataType: AR_DATA_TYPE_NULL,
            u: ARValueUnion { ulongVal: 0 },
        }
    }
}

pub type ARValueList = ARList<ARValueStruct>;

/// A property (display or object) attached to a definition.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARPropStruct {
    pub prop: ARULong32,
    pub value: ARValueStruct,
}

pub type ARPropList = ARList<ARPropStruct>;
pub type ARPropListList = ARList<ARPropList>;

zeroable!(
    ARByteList,
    ARBufStruct,
    ARLocUnion,
    ARLocStruct,
    ARAttachStruct,
    ARCoordStruct,
    ARFuncCurrencyStruct,
    ARCurrencyStruct,
    ARQualifierStruct,
    ARQualifierUnion,
    ARAndOrStruct,
    ARQueryValueStruct,
    ARValueUnion,
    ARValueStruct,
    ARPropStruct,
);
