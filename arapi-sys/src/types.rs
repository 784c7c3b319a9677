//! Scalar aliases, fixed-size name buffers and the counted list.

use std::os::raw::{c_char, c_int, c_uint, c_void};

use crate::consts::*;

pub type ARBoolean = u8;
pub type ARLong32 = i32;
pub type ARULong32 = u32;
pub type ARUInt64 = u64;
pub type ARInternalId = ARULong32;
pub type ARTimestamp = ARLong32;
pub type ARTime = ARLong32;

pub type ARNameType = [c_char; AR_MAX_NAME_SIZE + 1];
pub type ARAccessNameType = [c_char; AR_MAX_ACCESS_NAME_SIZE + 1];
pub type ARPasswordType = [c_char; AR_MAX_PASSWORD_SIZE + 1];
pub type ARAuthType = [c_char; AR_MAX_AUTH_SIZE + 1];
pub type ARServerNameType = [c_char; AR_MAX_SERVER_SIZE + 1];
pub type ARLocaleType = [c_char; AR_MAX_LOCALE_SIZE + 1];
pub type AREntryIdType = [c_char; AR_MAX_ENTRYID_SIZE + 1];
pub type ARCurrencyCodeType = [c_char; AR_MAX_CURRENCY_CODE_SIZE + 1];

/// Pointer to the control block of whichever layout the loaded revision uses
/// ([`ARControlStruct51`](crate::ARControlStruct51) or
/// [`ARControlStruct`](crate::ARControlStruct)).
pub type ARControlPtr = *mut c_void;

/// Types for which the all-zero bit pattern is a valid value.
///
/// Output parameters are allocated zeroed before every native call; the
/// native side treats zero counts and null pointers as "nothing here".
///
/// # Safety
///
/// Implementors must be plain data: integers, floats, raw pointers, arrays
/// and `#[repr(C)]` aggregates/unions thereof.
pub unsafe trait Zeroable: Sized {
    fn zeroed() -> Self {
        // SAFETY: guaranteed by the trait contract.
        unsafe { std::mem::zeroed() }
    }
}

macro_rules! zeroable {
    ($($t:ty),* $(,)?) => {
        $(unsafe impl $crate::Zeroable for $t {})*
    };
}
pub(crate) use zeroable;

zeroable!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64, usize);

unsafe impl<T> Zeroable for *mut T {}
unsafe impl<T> Zeroable for *const T {}
unsafe impl<T: Zeroable, const N: usize> Zeroable for [T; N] {}

/// The native `{count, pointer}` convention used for every repeated value.
///
/// Layout is identical to each named list of the C headers
/// (`ARNameList`, `ARStatusList`, ...): an `unsigned int` count followed by a
/// pointer to the first element.
#[repr(C)]
pub struct ARList<T> {
    pub numItems: c_uint,
    pub items: *mut T,
}

impl<T> ARList<T> {
    /// A list with no items and a null array pointer.
    pub const fn empty() -> Self {
        Self {
            numItems: 0,
            items: std::ptr::null_mut(),
        }
    }

    pub const fn from_raw_parts(items: *mut T, len: c_uint) -> Self {
        Self {
            numItems: len,
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.numItems as usize
    }

    pub fn is_empty(&self) -> bool {
        self.numItems == 0
    }

    /// View the items as a slice.
    ///
    /// Returns `None` when the count is non-zero but the pointer is null,
    /// which only a corrupted list can produce.
    ///
    /// # Safety
    ///
    /// `items` must point to `numItems` initialised elements that stay alive
    /// for the returned lifetime.
    pub unsafe fn as_slice(&self) -> Option<&[T]> {
        if self.numItems == 0 {
            return Some(&[]);
        }
        if self.items.is_null() {
            return None;
        }
        // SAFETY: non-null and covering numItems elements per the caller.
        Some(unsafe { std::slice::from_raw_parts(self.items, self.numItems as usize) })
    }
}

impl<T> Clone for ARList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ARList<T> {}

unsafe impl<T> Zeroable for ARList<T> {}

pub type ARNameList = ARList<ARNameType>;
pub type ARInternalIdList = ARList<ARInternalId>;
pub type ARBooleanList = ARList<ARBoolean>;
pub type ARUnsignedIntList = ARList<c_uint>;
pub type ARTimestampList = ARList<ARTimestamp>;
pub type ARAccessNameList = ARList<ARAccessNameType>;
pub type ARTextStringList = ARList<*mut c_char>;
pub type ARServerNameList = ARList<ARServerNameType>;
pub type ARLocaleList = ARList<ARLocaleType>;
pub type ARReferenceTypeList = ARList<c_int>;
pub type ARContainerTypeList = ARList<c_int>;
pub type ARInternalIdListList = ARList<ARInternalIdList>;
pub type ARImageDataStruct = ARList<u8>;
pub type ARImageDataList = ARList<ARImageDataStruct>;

/// One entry of the status list returned by every call.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARStatusStruct {
    pub messageType: c_uint,
    pub messageNum: ARLong32,
    pub messageText: *mut c_char,
    pub appendedText: *mut c_char,
}

pub type ARStatusList = ARList<ARStatusStruct>;

/// Localization block used by revisions 5.1 through 6.3.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARLocalizationInfo51 {
    pub locale: [c_char; AR_MAX_LOCALE_SIZE + 1],
    pub charSet: [c_char; AR_MAX_LANG_SIZE + 1],
}

/// Localization block from 7.0 on.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARLocalizationInfo {
    pub locale: [c_char; AR_MAX_LOCALE_SIZE + 1],
    pub charSet: [c_char; AR_MAX_LANG_SIZE + 1],
    pub timeZone: [c_char; AR_MAX_LOCALE_SIZE + 1],
    pub customDateFormat: [c_char; AR_MAX_FORMAT_SIZE + 1],
    pub customTimeFormat: [c_char; AR_MAX_FORMAT_SIZE + 1],
    pub separators: [c_char; AR_MAX_LANG_SIZE + 1],
}

/// Session control block, revisions 5.1 through 6.3.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARControlStruct51 {
    pub cacheId: ARTimestamp,
    pub operationTime: ARTimestamp,
    pub user: ARAccessNameType,
    pub password: ARPasswordType,
    pub localeInfo: ARLocalizationInfo51,
    pub sessionId: ARUInt64,
    pub authString: ARAuthType,
    pub server: ARServerNameType,
}

/// Session control block from 7.0 on.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARControlStruct {
    pub cacheId: ARTimestamp,
    pub operationTime: ARTimestamp,
    pub user: ARAccessNameType,
    pub password: ARPasswordType,
    pub localeInfo: ARLocalizationInfo,
    pub sessionId: ARUInt64,
    pub authString: ARAuthType,
    pub server: ARServerNameType,
}

zeroable!(
    ARStatusStruct,
    ARLocalizationInfo51,
    ARLocalizationInfo,
    ARControlStruct51,
    ARControlStruct,
);
