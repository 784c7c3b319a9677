//! Returning native-allocated outputs to the library that allocated them.
//!
//! Every output parameter lives in an [`Outputs`] scope for the duration of
//! one call. When the scope drops, each output is handed to the `FreeAR*`
//! routine matching its raw type (contents only, the storage is ours).

use std::cell::RefCell;
use std::ffi::c_void;
use std::marker::PhantomData;
use std::os::raw::c_char;

use arapi_sys::*;

use crate::library::SymbolSource;

macro_rules! free_routines {
    ($($name:ident = $symbol:literal),* $(,)?) => {
        /// A native `FreeAR*` routine.
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        pub enum FreeRoutine {
            $($name),*
        }

        impl FreeRoutine {
            pub const ALL: &'static [FreeRoutine] = &[$(FreeRoutine::$name),*];

            pub const fn symbol(self) -> &'static str {
                match self {
                    $(FreeRoutine::$name => $symbol),*
                }
            }
        }
    };
}

free_routines! {
    StatusList = "FreeARStatusList",
    NameList = "FreeARNameList",
    InternalIdList = "FreeARInternalIdList",
    InternalIdListList = "FreeARInternalIdListList",
    BooleanList = "FreeARBooleanList",
    TimestampList = "FreeARTimestampList",
    TextStringList = "FreeARTextStringList",
    ServerNameList = "FreeARServerNameList",
    PermissionList = "FreeARPermissionList",
    PermissionListList = "FreeARPermissionListList",
    CompoundSchema = "FreeARCompoundSchema",
    CompoundSchemaList = "FreeARCompoundSchemaList",
    EntryListFieldList = "FreeAREntryListFieldList",
    EntryListFieldListList = "FreeAREntryListFieldListList",
    SortList = "FreeARSortList",
    SortListList = "FreeARSortListList",
    IndexList = "FreeARIndexList",
    IndexListList = "FreeARIndexListList",
    ArchiveInfo = "FreeARArchiveInfoStruct",
    ArchiveInfoList = "FreeARArchiveInfoList",
    AuditInfo = "FreeARAuditInfoStruct",
    AuditInfoList = "FreeARAuditInfoList",
    FieldMapping = "FreeARFieldMappingStruct",
    FieldMappingList = "FreeARFieldMappingList",
    Value = "FreeARValueStruct",
    ValueList = "FreeARValueList",
    FieldLimit = "FreeARFieldLimitStruct",
    FieldLimitList = "FreeARFieldLimitList",
    DisplayInstanceList = "FreeARDisplayInstanceList",
    DisplayInstanceListList = "FreeARDisplayInstanceListList",
    PropList = "FreeARPropList",
    PropListList = "FreeARPropListList",
    Qualifier = "FreeARQualifierStruct",
    QualifierList = "FreeARQualifierList",
    WorkflowConnect = "FreeARWorkflowConnectStruct",
    WorkflowConnectList = "FreeARWorkflowConnectList",
    EscalationTmList = "FreeAREscalationTmList",
    ActiveLinkActionList = "FreeARActiveLinkActionList",
    ActiveLinkActionListList = "FreeARActiveLinkActionListList",
    FilterActionList = "FreeARFilterActionList",
    FilterActionListList = "FreeARFilterActionListList",
    ContainerOwnerObjList = "FreeARContainerOwnerObjList",
    ContainerOwnerObjListList = "FreeARContainerOwnerObjListList",
    ReferenceList = "FreeARReferenceList",
    ReferenceListList = "FreeARReferenceListList",
    ContainerInfoList = "FreeARContainerInfoList",
    CharMenu = "FreeARCharMenuStruct",
    CharMenuList = "FreeARCharMenuStructList",
    ImageDataList = "FreeARImageDataList",
    FieldValueList = "FreeARFieldValueList",
    FieldValueListList = "FreeARFieldValueListList",
    EntryIdList = "FreeAREntryIdList",
    EntryListList = "FreeAREntryListList",
    XmlParsedStream = "FreeARXMLParsedStream",
    StructItemList = "FreeARStructItemList",
}

/// Symbol releasing a single block (returned strings).
pub const BLOCK_FREE_SYMBOL: &str = "ARFree";

/// Free routines resolved for one library.
pub struct FreeTable {
    routines: Vec<Option<ARFreeStructFn>>,
    block: Option<ARFreeFn>,
}

impl FreeTable {
    pub fn resolve(source: &dyn SymbolSource) -> Self {
        let routines = FreeRoutine::ALL
            .iter()
            .map(|r| {
                source.lookup(r.symbol()).map(|addr| {
                    // SAFETY: every FreeAR* routine has the ARFreeStructFn
                    // signature; the address is non-null.
                    unsafe { std::mem::transmute::<*const c_void, ARFreeStructFn>(addr.as_ptr()) }
                })
            })
            .collect::<Vec<_>>();
        let missing = routines.iter().filter(|r| r.is_none()).count();
        if missing > 0 {
            log::debug!("{missing} free routines not exported by {}", source.name());
        }
        let block = source.lookup(BLOCK_FREE_SYMBOL).map(|addr| {
            // SAFETY: ARFree takes a single pointer; the address is non-null.
            unsafe { std::mem::transmute::<*const c_void, ARFreeFn>(addr.as_ptr()) }
        });
        Self { routines, block }
    }

    /// Release the contents of `value` with `routine`.
    ///
    /// # Safety
    ///
    /// `value` must point to a structure of the type `routine` frees, filled
    /// in by the native library (or still zeroed).
    pub unsafe fn release(&self, routine: FreeRoutine, value: *mut c_void) {
        match self.routines[routine as usize] {
            // SAFETY: per the caller; FALSE keeps the storage, which is ours.
            Some(free) => unsafe { free(value, FALSE) },
            None => log::warn!("{} unavailable, leaking native output", routine.symbol()),
        }
    }

    /// Release a block (string) allocated by the native library.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or a block the native library returned.
    pub unsafe fn release_block(&self, ptr: *mut c_void) {
        if ptr.is_null() {
            return;
        }
        match self.block {
            // SAFETY: per the caller.
            Some(free) => unsafe { free(ptr) },
            None => log::warn!("{BLOCK_FREE_SYMBOL} unavailable, leaking native string"),
        }
    }
}

/// Raw output types and how their native contents are returned.
pub trait Release {
    /// # Safety
    ///
    /// `self` must have been produced by the native library (or be zeroed)
    /// and not released before.
    unsafe fn release(&mut self, frees: &FreeTable);
}

macro_rules! plain {
    ($($t:ty),* $(,)?) => {
        $(impl Release for $t {
            unsafe fn release(&mut self, _: &FreeTable) {}
        })*
    };
}

plain!(u8, i8, u32, i32, u64, f64, AREscalationTmStruct, ARDayStruct);

impl<T: Copy, const N: usize> Release for [T; N] {
    unsafe fn release(&mut self, _: &FreeTable) {}
}

impl Release for *mut c_char {
    unsafe fn release(&mut self, frees: &FreeTable) {
        // SAFETY: a string output is either null or native-allocated.
        unsafe { frees.release_block(self.cast()) };
        *self = std::ptr::null_mut();
    }
}

// Several list aliases share one instantiation (`ARUnsignedIntList` is
// `ARInternalIdList`, `ARAccessNameList` is `ARNameList`, `ARLocaleList` is
// `ARServerNameList`, `ARImageDataStruct` is `ARBooleanList`); their free
// routines are interchangeable, so each instantiation is listed once.
macro_rules! releasable {
    ($($t:ty => $routine:ident),* $(,)?) => {
        $(impl Release for $t {
            unsafe fn release(&mut self, frees: &FreeTable) {
                // SAFETY: the routine matches the raw type; per the caller
                // the contents came from the library.
                unsafe { frees.release(FreeRoutine::$routine, (self as *mut $t).cast()) }
            }
        })*
    };
}

releasable! {
    ARStatusList => StatusList,
    ARNameList => NameList,
    ARInternalIdList => InternalIdList,
    ARInternalIdListList => InternalIdListList,
    ARBooleanList => BooleanList,
    ARTimestampList => TimestampList,
    ARTextStringList => TextStringList,
    ARServerNameList => ServerNameList,
    ARPermissionList => PermissionList,
    ARPermissionListList => PermissionListList,
    ARCompoundSchema => CompoundSchema,
    ARCompoundSchemaList => CompoundSchemaList,
    AREntryListFieldList => EntryListFieldList,
    AREntryListFieldListList => EntryListFieldListList,
    ARSortList => SortList,
    ARSortListList => SortListList,
    ARIndexList => IndexList,
    ARIndexListList => IndexListList,
    ARArchiveInfoStruct => ArchiveInfo,
    ARArchiveInfoList => ArchiveInfoList,
    ARAuditInfoStruct => AuditInfo,
    ARAuditInfoList => AuditInfoList,
    ARFieldMappingStruct => FieldMapping,
    ARFieldMappingList => FieldMappingList,
    ARValueStruct => Value,
    ARValueList => ValueList,
    ARFieldLimitStruct51 => FieldLimit,
    ARFieldLimitStruct => FieldLimit,
    ARFieldLimitList51 => FieldLimitList,
    ARFieldLimitList => FieldLimitList,
    ARDisplayInstanceList => DisplayInstanceList,
    ARDisplayInstanceListList => DisplayInstanceListList,
    ARPropList => PropList,
    ARPropListList => PropListList,
    ARQualifierStruct => Qualifier,
    ARQualifierList => QualifierList,
    ARWorkflowConnectStruct => WorkflowConnect,
    ARWorkflowConnectList => WorkflowConnectList,
    AREscalationTmList => EscalationTmList,
    ARActiveLinkActionList => ActiveLinkActionList,
    ARActiveLinkActionListList => ActiveLinkActionListList,
    ARFilterActionList => FilterActionList,
    ARFilterActionListList => FilterActionListList,
    ARContainerOwnerObjList => ContainerOwnerObjList,
    ARContainerOwnerObjListList => ContainerOwnerObjListList,
    ARReferenceList => ReferenceList,
    ARReferenceListList => ReferenceListList,
    ARContainerInfoList => ContainerInfoList,
    ARCharMenuStruct => CharMenu,
    ARCharMenuStructList => CharMenuList,
    ARImageDataList => ImageDataList,
    ARFieldValueList => FieldValueList,
    ARFieldValueListList => FieldValueListList,
    AREntryIdList => EntryIdList,
    AREntryListList => EntryListList,
    ARXMLParsedStream => XmlParsedStream,
    ARStructItemList => StructItemList,
}

impl Release for ARXMLOutputDoc {
    unsafe fn release(&mut self, frees: &FreeTable) {
        if self.docType == AR_XML_DOC_CHAR_STR {
            // SAFETY: the native library filled the character buffer.
            unsafe { frees.release_block(self.u.charBuffer.cast()) };
            self.u.charBuffer = std::ptr::null_mut();
        }
    }
}

trait Held {
    fn release(&mut self, frees: &FreeTable);
}

struct Slot<T: Release>(T);

impl<T: Release> Held for Slot<T> {
    fn release(&mut self, frees: &FreeTable) {
        // SAFETY: slots are only handed to the native library as outputs
        // and released once, when the owning scope drops.
        unsafe { self.0.release(frees) }
    }
}

/// Zero-initialised output parameters of one call.
///
/// Dropping the scope releases every output through the native free table,
/// on success and on failure alike.
pub struct Outputs<'f> {
    frees: &'f FreeTable,
    slots: RefCell<Vec<Box<dyn Held + 'f>>>,
}

impl<'f> Outputs<'f> {
    pub fn new(frees: &'f FreeTable) -> Self {
        Self {
            frees,
            slots: RefCell::new(Vec::new()),
        }
    }

    /// Allocate one zeroed output of type `T`.
    pub fn alloc<T: Release + Zeroable + 'f>(&self) -> Out<'_, T> {
        let mut slot = Box::new(Slot(T::zeroed()));
        let ptr: *mut T = &mut slot.0;
        self.slots.borrow_mut().push(slot);
        Out {
            ptr,
            _scope: PhantomData,
        }
    }
}

impl Drop for Outputs<'_> {
    fn drop(&mut self) {
        for slot in self.slots.get_mut().iter_mut().rev() {
            slot.release(self.frees);
        }
    }
}

/// Handle to one output slot of an [`Outputs`] scope.
pub struct Out<'o, T> {
    ptr: *mut T,
    _scope: PhantomData<&'o T>,
}

impl<T> Clone for Out<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Out<'_, T> {}

impl<'o, T> Out<'o, T> {
    /// Pointer handed to the native call.
    pub fn ptr(self) -> *mut T {
        self.ptr
    }

    /// Read the output after the call returned.
    pub fn get(self) -> &'o T {
        // SAFETY: the slot is boxed and owned by the scope, which outlives 'o.
        unsafe { &*self.ptr }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_symbols_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for r in FreeRoutine::ALL {
            assert!(seen.insert(r.symbol()), "{}", r.symbol());
        }
    }

    struct Nothing;

    impl SymbolSource for Nothing {
        fn lookup(&self, _: &str) -> Option<crate::library::SymbolAddr> {
            None
        }

        fn name(&self) -> &str {
            "nothing"
        }
    }

    #[test]
    fn outputs_start_zeroed_and_tolerate_missing_routines() {
        let frees = FreeTable::resolve(&Nothing);
        let outputs = Outputs::new(&frees);
        let list = outputs.alloc::<ARNameList>();
        let text = outputs.alloc::<*mut c_char>();
        assert_eq!(list.get().numItems, 0);
        assert!(text.get().is_null());
        drop(outputs);
    }
}
