#![allow(dead_code)]

//! An in-process stand-in for the client library.
//!
//! Entry points are plain `extern "C"` functions with the native signatures,
//! registered by symbol name. Outputs are leaked: the fake exports no
//! `FreeAR*` routines, so the binding logs and skips the release.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::ffi::{CStr, CString, c_void};
use std::os::raw::{c_char, c_int, c_uint};
use std::sync::Arc;

use arapi::{ApiVersion, Binding, LoginParams, Session, SymbolAddr, SymbolSource};
use arapi_sys::*;

pub const MISSING_ENTRY: &str = "000000000000404";
pub const CREATED_ENTRY: &str = "000000000000042";

thread_local! {
    static CALLS: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
    static LOCALES_REQUESTED: Cell<Option<bool>> = const { Cell::new(None) };
    static LAST_PORT: Cell<Option<c_int>> = const { Cell::new(None) };
    static QUALIFIER_SCHEMA: RefCell<Option<String>> = const { RefCell::new(None) };
}

pub fn record(symbol: &'static str) {
    CALLS.with(|c| c.borrow_mut().push(symbol));
}

/// How often `symbol` was called on this thread.
pub fn calls(symbol: &str) -> usize {
    CALLS.with(|c| c.borrow().iter().filter(|s| **s == symbol).count())
}

/// Whether the last `ARGetMultipleVUIs` call passed a locale list.
pub fn locales_requested() -> Option<bool> {
    LOCALES_REQUESTED.with(Cell::get)
}

pub fn last_port() -> Option<c_int> {
    LAST_PORT.with(Cell::get)
}

/// Schema the last qualifier was compiled against.
pub fn qualifier_schema() -> Option<String> {
    QUALIFIER_SCHEMA.with(|s| s.borrow().clone())
}

pub struct FakeLibrary {
    name: String,
    symbols: HashMap<&'static str, SymbolAddr>,
}

impl FakeLibrary {
    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            symbols: HashMap::new(),
        }
    }

    /// Session and qualifier entry points plus canned schema, field, entry,
    /// view, image and XML calls.
    pub fn standard() -> Self {
        Self::empty("libfake-arapi.so")
            .with("ARInitialization", initialization as ARInitializationFn as *const c_void)
            .with("ARTermination", termination as ARTerminationFn as *const c_void)
            .with("ARVerifyUser", verify_user as ARVerifyUserFn as *const c_void)
            .with("ARGetListServer", get_list_server as ARGetListServerFn as *const c_void)
            .with("ARSetServerPort", set_server_port as ARSetServerPortFn as *const c_void)
            .with("ARLoadARQualifierStruct", load_qualifier as ARLoadARQualifierStructFn as *const c_void)
            .with("ARDecodeARQualifierStruct", decode_qualifier as ARDecodeARQualifierStructFn as *const c_void)
            .with("ARGetListSchema", get_list_schema as ARGetListSchemaFn70 as *const c_void)
            .with("ARGetField", get_field as ARGetFieldFn75 as *const c_void)
            .with("ARCreateEntry", create_entry as ARCreateEntryFn as *const c_void)
            .with("ARDeleteEntry", delete_entry as ARDeleteEntryFn as *const c_void)
            .with("ARGetMultipleEntries", get_multiple_entries as ARGetMultipleEntriesFn as *const c_void)
            .with("ARGetMultipleVUIs", get_multiple_vuis as ARGetMultipleVUIsFn63 as *const c_void)
            .with("ARParseXMLDocument", parse_xml as ARParseXMLDocumentFn as *const c_void)
            .with("ARGetImageFromXML", get_image_from_xml as ARGetImageFromXMLFn75 as *const c_void)
            .with("ARSetImageToXML", set_image_to_xml as ARSetImageToXMLFn75 as *const c_void)
    }

    pub fn with(mut self, symbol: &'static str, addr: *const c_void) -> Self {
        if let Some(addr) = SymbolAddr::new(addr) {
            self.symbols.insert(symbol, addr);
        }
        self
    }

    pub fn without(mut self, symbol: &str) -> Self {
        self.symbols.remove(symbol);
        self
    }

    pub fn binding(self, version: ApiVersion) -> Arc<Binding> {
        Binding::from_source(Box::new(self), Some(version)).unwrap()
    }
}

impl SymbolSource for FakeLibrary {
    fn lookup(&self, symbol: &str) -> Option<SymbolAddr> {
        self.symbols.get(symbol).copied()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A logged-in session on the standard fake at `version`.
pub fn session(version: ApiVersion) -> Session {
    session_on(FakeLibrary::standard(), version)
}

/// A logged-in session on `library` at `version`.
pub fn session_on(library: FakeLibrary, version: ApiVersion) -> Session {
    init_logging();
    let mut session = Session::new(library.binding(version));
    session.login(&LoginParams::new("host:1234", "demo", "pw")).unwrap();
    session
}

// ---- native memory helpers ----

pub fn leak_list<T>(items: Vec<T>) -> ARList<T> {
    let len = items.len() as c_uint;
    let items = Box::leak(items.into_boxed_slice());
    ARList::from_raw_parts(items.as_mut_ptr(), len)
}

pub fn leak_str(s: &str) -> *mut c_char {
    CString::new(s).unwrap().into_raw()
}

pub fn buf<const N: usize>(s: &str) -> [c_char; N] {
    let mut out = [0 as c_char; N];
    for (dst, src) in out.iter_mut().zip(s.bytes()) {
        *dst = src as c_char;
    }
    out
}

pub unsafe fn read_buf(buf: &[c_char]) -> String {
    // SAFETY: the binding always NUL-terminates name buffers.
    unsafe { CStr::from_ptr(buf.as_ptr()) }.to_string_lossy().into_owned()
}

pub unsafe fn fail(status: *mut ARStatusList, code: i32, text: &str) -> c_int {
    let entry = ARStatusStruct {
        messageType: AR_RETURN_ERROR,
        messageNum: code,
        messageText: leak_str(text),
        appendedText: std::ptr::null_mut(),
    };
    // SAFETY: the binding passes a live status slot.
    unsafe { *status = leak_list(vec![entry]) };
    AR_RETURN_ERROR as c_int
}

// ---- session ----

unsafe extern "C" fn initialization(_: ARControlPtr, _: *mut ARStatusList) -> c_int {
    record("ARInitialization");
    0
}

unsafe extern "C" fn termination(_: ARControlPtr, _: *mut ARStatusList) -> c_int {
    record("ARTermination");
    0
}

unsafe extern "C" fn verify_user(
    _: ARControlPtr,
    admin: *mut ARBoolean,
    sub_admin: *mut ARBoolean,
    custom: *mut ARBoolean,
    _: *mut ARStatusList,
) -> c_int {
    record("ARVerifyUser");
    // SAFETY: live output slots.
    unsafe {
        *admin = TRUE;
        *sub_admin = FALSE;
        *custom = FALSE;
    }
    0
}

unsafe extern "C" fn get_list_server(_: ARControlPtr, list: *mut ARServerNameList, _: *mut ARStatusList) -> c_int {
    record("ARGetListServer");
    // SAFETY: live output slot.
    unsafe { *list = leak_list(vec![buf("fallback-host")]) };
    0
}

unsafe extern "C" fn set_server_port(
    _: ARControlPtr,
    _: *const c_char,
    port: c_int,
    _: c_int,
    _: *mut ARStatusList,
) -> c_int {
    record("ARSetServerPort");
    LAST_PORT.with(|p| p.set(Some(port)));
    0
}

// ---- qualifiers ----

/// A non-zero operation with the query text parked in the union, so the
/// decoder can hand it back unchanged.
pub const FAKE_QUALIFIER_OP: c_uint = 4;

pub fn fake_qualifier(text: &str) -> ARQualifierStruct {
    ARQualifierStruct {
        operation: FAKE_QUALIFIER_OP,
        u: ARQualifierUnion {
            relOp: leak_str(text).cast(),
        },
    }
}

/// Text of a qualifier built by [`fake_qualifier`] or the load fake.
pub unsafe fn fake_qualifier_text(qual: *const ARQualifierStruct) -> Option<String> {
    // SAFETY: per the caller.
    unsafe {
        let q = qual.as_ref()?;
        if q.operation != FAKE_QUALIFIER_OP {
            return None;
        }
        Some(CStr::from_ptr(q.u.relOp.cast::<c_char>()).to_string_lossy().into_owned())
    }
}

unsafe extern "C" fn load_qualifier(
    _: ARControlPtr,
    schema: *const c_char,
    _: *const c_char,
    text: *const c_char,
    qual: *mut ARQualifierStruct,
    _: *mut ARStatusList,
) -> c_int {
    record("ARLoadARQualifierStruct");
    // SAFETY: NUL-terminated inputs; the qualifier is a live slot.
    unsafe {
        let schema = CStr::from_ptr(schema).to_string_lossy().into_owned();
        QUALIFIER_SCHEMA.with(|s| *s.borrow_mut() = Some(schema));
        *qual = fake_qualifier(&CStr::from_ptr(text).to_string_lossy());
    }
    0
}

unsafe extern "C" fn decode_qualifier(
    _: ARControlPtr,
    qual: *const ARQualifierStruct,
    text: *mut *mut c_char,
    status: *mut ARStatusList,
) -> c_int {
    record("ARDecodeARQualifierStruct");
    // SAFETY: the qualifier came from one of the fakes; the text is a live slot.
    unsafe {
        match fake_qualifier_text(qual) {
            Some(t) => *text = leak_str(&t),
            None => return fail(status, 1587, "Qualifier not recognised"),
        }
    }
    0
}

// ---- schemas and fields ----

unsafe extern "C" fn get_list_schema(
    _: ARControlPtr,
    _: ARTimestamp,
    _: c_uint,
    _: *const c_char,
    _: *const ARInternalIdList,
    _: *const ARPropList,
    names: *mut ARNameList,
    _: *mut ARStatusList,
) -> c_int {
    record("ARGetListSchema");
    // SAFETY: live output slot.
    unsafe { *names = leak_list(vec![buf("HelpDesk"), buf("User")]) };
    0
}

unsafe extern "C" fn get_field(
    _: ARControlPtr,
    schema: *const c_char,
    id: ARInternalId,
    name: *mut ARNameType,
    _: *mut ARFieldMappingStruct,
    data_type: *mut c_uint,
    option: *mut c_uint,
    create_mode: *mut c_uint,
    _: *mut c_uint,
    _: *mut ARValueStruct,
    _: *mut ARPermissionList,
    _: *mut ARFieldLimitStruct,
    _: *mut ARDisplayInstanceList,
    _: *mut *mut c_char,
    timestamp: *mut ARTimestamp,
    owner: *mut ARAccessNameType,
    _: *mut ARAccessNameType,
    _: *mut *mut c_char,
    _: *mut ARPropList,
    status: *mut ARStatusList,
) -> c_int {
    record("ARGetField");
    // SAFETY: the schema is a NUL-terminated input; outputs are live slots.
    unsafe {
        if CStr::from_ptr(schema).to_bytes() != b"HelpDesk" || id != 1 {
            return fail(status, 303, "Form does not exist on server");
        }
        *name = buf("Request ID");
        *data_type = AR_DATA_TYPE_CHAR;
        *option = 1;
        *create_mode = 1;
        *timestamp = 1_700_000_000;
        *owner = buf("Demo");
    }
    0
}

// ---- entries ----

unsafe extern "C" fn create_entry(
    _: ARControlPtr,
    _: *const c_char,
    _: *const ARFieldValueList,
    id: *mut AREntryIdType,
    _: *mut ARStatusList,
) -> c_int {
    record("ARCreateEntry");
    // SAFETY: live output buffer.
    unsafe { *id = buf(CREATED_ENTRY) };
    0
}

unsafe extern "C" fn delete_entry(
    _: ARControlPtr,
    _: *const c_char,
    _: *const AREntryIdList,
    _: c_uint,
    status: *mut ARStatusList,
) -> c_int {
    record("ARDeleteEntry");
    // SAFETY: live status slot.
    unsafe { fail(status, 302, "Entry does not exist in database") }
}

unsafe extern "C" fn get_multiple_entries(
    _: ARControlPtr,
    _: *const c_char,
    ids: *const AREntryIdListList,
    _: *const ARInternalIdList,
    exist: *mut ARBooleanList,
    values: *mut ARFieldValueListList,
    _: *mut ARStatusList,
) -> c_int {
    record("ARGetMultipleEntries");
    let mut found = Vec::new();
    let mut lists = Vec::new();
    // SAFETY: inputs built by the binding; outputs are live slots.
    unsafe {
        for id in (*ids).as_slice().unwrap() {
            let first = read_buf(&id.as_slice().unwrap()[0]);
            if first == MISSING_ENTRY {
                found.push(FALSE);
                lists.push(ARFieldValueList::empty());
            } else {
                found.push(TRUE);
                let value = ARFieldValueStruct {
                    fieldId: 1,
                    value: ARValueStruct {
                        dataType: AR_DATA_TYPE_CHAR,
                        u: ARValueUnion { charVal: leak_str(&first) },
                    },
                };
                lists.push(leak_list(vec![value]));
            }
        }
        *exist = leak_list(found);
        *values = leak_list(lists);
    }
    0
}

// ---- views ----

unsafe extern "C" fn get_multiple_vuis(
    _: ARControlPtr,
    _: *const c_char,
    wanted: *const ARInternalIdList,
    _: ARTimestamp,
    exist: *mut ARBooleanList,
    got: *mut ARInternalIdList,
    names: *mut ARNameList,
    locales: *mut ARLocaleList,
    kinds: *mut ARUnsignedIntList,
    props: *mut ARPropListList,
    help: *mut ARTextStringList,
    timestamps: *mut ARTimestampList,
    owners: *mut ARAccessNameList,
    last_changed: *mut ARAccessNameList,
    diaries: *mut ARTextStringList,
    obj_props: *mut ARPropListList,
    _: *mut ARStatusList,
) -> c_int {
    record("ARGetMultipleVUIs");
    LOCALES_REQUESTED.with(|l| l.set(Some(!locales.is_null())));
    // SAFETY: inputs built by the binding; outputs are live slots or null.
    unsafe {
        let ids = (*wanted).as_slice().unwrap().to_vec();
        let n = ids.len();
        *exist = leak_list(vec![TRUE; n]);
        *names = leak_list(ids.iter().map(|id| buf(&format!("View {id}"))).collect());
        *got = leak_list(ids);
        if !locales.is_null() {
            *locales = leak_list(vec![buf("en_US"); n]);
        }
        *kinds = leak_list(vec![0; n]);
        *props = leak_list((0..n).map(|_| ARPropList::empty()).collect());
        *help = leak_list(vec![std::ptr::null_mut(); n]);
        *timestamps = leak_list(vec![0; n]);
        *owners = leak_list(vec![buf("Demo"); n]);
        *last_changed = leak_list(vec![buf("Demo"); n]);
        *diaries = leak_list(vec![std::ptr::null_mut(); n]);
        *obj_props = leak_list((0..n).map(|_| ARPropList::empty()).collect());
    }
    0
}

// ---- XML ----

unsafe extern "C" fn parse_xml(
    _: ARControlPtr,
    doc: *const ARXMLInputDoc,
    _: *const ARStructItemList,
    _: *mut ARXMLParsedStream,
    parsed: *mut ARStructItemList,
    blocks: *mut ARNameList,
    status: *mut ARStatusList,
) -> c_int {
    record("ARParseXMLDocument");
    // SAFETY: the document is built by the binding; outputs are live slots.
    unsafe {
        if (*doc).docType != AR_XML_DOC_CHAR_STR || CStr::from_ptr((*doc).u.charBuffer).to_bytes().is_empty() {
            return fail(status, 8951, "Empty XML document");
        }
        let item = |kind, name| ARStructItemStruct {
            type_: AR_STRUCT_XML_OFFSET | kind,
            name: buf(name),
            selectedElements: ARNameList::empty(),
        };
        *parsed = leak_list(vec![
            item(AR_STRUCT_ITEM_IMAGE, "Logo"),
            item(AR_STRUCT_ITEM_FILTER, "HD:Route"),
        ]);
        *blocks = leak_list(vec![buf("Support")]);
    }
    0
}

unsafe extern "C" fn get_image_from_xml(
    _: ARControlPtr,
    _: *const ARXMLParsedStream,
    _: *const c_char,
    block: *mut ARNameType,
    kind: *mut *mut c_char,
    _: *mut ARTimestamp,
    description: *mut *mut c_char,
    _: *mut *mut c_char,
    owner: *mut ARAccessNameType,
    _: *mut *mut c_char,
    _: *mut ARAccessNameType,
    _: *mut ARPropList,
    _: *mut *mut c_char,
    data: *mut ARImageDataStruct,
    version: *mut c_uint,
    _: *mut ARStatusList,
) -> c_int {
    record("ARGetImageFromXML");
    // SAFETY: live output slots.
    unsafe {
        *block = buf("Support");
        *kind = leak_str("png");
        *description = leak_str("Company logo");
        *owner = buf("Demo");
        *data = leak_list(vec![0x89, b'P', b'N', b'G']);
        *version = 2;
    }
    0
}

unsafe extern "C" fn set_image_to_xml(
    _: ARControlPtr,
    doc: *mut ARXMLOutputDoc,
    header: ARBoolean,
    name: *const c_char,
    kind: *const c_char,
    _: *const c_char,
    _: *const ARTimestamp,
    _: *const c_char,
    _: *const c_char,
    _: *const c_char,
    _: *const c_char,
    _: *const ARPropList,
    _: *const c_char,
    data: *const ARImageDataStruct,
    _: *mut ARStatusList,
) -> c_int {
    record("ARSetImageToXML");
    // SAFETY: inputs built by the binding; the document is a live slot.
    unsafe {
        assert_eq!((*doc).docType, AR_XML_DOC_CHAR_STR);
        let name = CStr::from_ptr(name).to_string_lossy();
        let kind = CStr::from_ptr(kind).to_string_lossy();
        let mut xml = format!("<image name=\"{name}\" type=\"{kind}\" bytes=\"{}\"/>", (*data).numItems);
        if header != 0 {
            xml = format!("<?xml version=\"1.0\"?>{xml}");
        }
        (*doc).u.charBuffer = leak_str(&xml);
    }
    0
}
