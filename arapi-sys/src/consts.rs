//! Constants from the native client headers.

use std::os::raw::{c_int, c_uint};

// Buffer sizes (the declared arrays are one byte larger for the NUL).
pub const AR_MAX_NAME_SIZE: usize = 254;
pub const AR_MAX_ACCESS_NAME_SIZE: usize = 254;
pub const AR_MAX_PASSWORD_SIZE: usize = 30;
pub const AR_MAX_AUTH_SIZE: usize = 2047;
pub const AR_MAX_SERVER_SIZE: usize = 64;
pub const AR_MAX_LOCALE_SIZE: usize = 64;
pub const AR_MAX_LANG_SIZE: usize = 15;
pub const AR_MAX_FORMAT_SIZE: usize = 32;
pub const AR_MAX_ENTRYID_SIZE: usize = 15;
pub const AR_MAX_CURRENCY_CODE_SIZE: usize = 3;
pub const AR_MAX_INDEX_FIELDS: usize = 16;
pub const AR_MAX_LEVELS_DYNAMIC_MENU: usize = 5;
pub const AR_MAX_SEPARATOR_SIZE: usize = 10;

// Return codes and status message types.
pub const AR_RETURN_OK: c_uint = 0;
pub const AR_RETURN_WARNING: c_uint = 1;
pub const AR_RETURN_ERROR: c_uint = 2;
pub const AR_RETURN_FATAL: c_uint = 3;
pub const AR_RETURN_BAD_STATUS: c_uint = 4;

pub const FALSE: u8 = 0;
pub const TRUE: u8 = 1;

// Value data types.
pub const AR_DATA_TYPE_NULL: c_uint = 0;
pub const AR_DATA_TYPE_KEYWORD: c_uint = 1;
pub const AR_DATA_TYPE_INTEGER: c_uint = 2;
pub const AR_DATA_TYPE_REAL: c_uint = 3;
pub const AR_DATA_TYPE_CHAR: c_uint = 4;
pub const AR_DATA_TYPE_DIARY: c_uint = 5;
pub const AR_DATA_TYPE_ENUM: c_uint = 6;
pub const AR_DATA_TYPE_TIME: c_uint = 7;
pub const AR_DATA_TYPE_BITMASK: c_uint = 8;
pub const AR_DATA_TYPE_BYTES: c_uint = 9;
pub const AR_DATA_TYPE_DECIMAL: c_uint = 10;
pub const AR_DATA_TYPE_ATTACH: c_uint = 11;
pub const AR_DATA_TYPE_CURRENCY: c_uint = 12;
pub const AR_DATA_TYPE_DATE: c_uint = 13;
pub const AR_DATA_TYPE_TIME_OF_DAY: c_uint = 14;
pub const AR_DATA_TYPE_JOIN: c_uint = 15;
pub const AR_DATA_TYPE_TRIM: c_uint = 16;
pub const AR_DATA_TYPE_CONTROL: c_uint = 17;
pub const AR_DATA_TYPE_TABLE: c_uint = 18;
pub const AR_DATA_TYPE_COLUMN: c_uint = 19;
pub const AR_DATA_TYPE_PAGE: c_uint = 20;
pub const AR_DATA_TYPE_PAGE_HOLDER: c_uint = 21;
pub const AR_DATA_TYPE_ATTACH_POOL: c_uint = 22;
pub const AR_DATA_TYPE_ULONG: c_uint = 40;
pub const AR_DATA_TYPE_COORDS: c_uint = 41;
pub const AR_DATA_TYPE_VIEW: c_uint = 42;
pub const AR_DATA_TYPE_DISPLAY: c_uint = 43;
pub const AR_DATA_TYPE_QUERY: c_uint = 50;

// Field limit tag that carries no payload.
pub const AR_FIELD_LIMIT_NONE: c_uint = 0;

// Enum limit list styles.
pub const AR_ENUM_STYLE_REGULAR: c_uint = 1;
pub const AR_ENUM_STYLE_CUSTOM: c_uint = 2;
pub const AR_ENUM_STYLE_QUERY: c_uint = 3;

// Attachment locator types.
pub const AR_LOC_FILENAME: c_uint = 1;
pub const AR_LOC_BUFFER: c_uint = 2;

// Schema types.
pub const AR_SCHEMA_NONE: c_uint = 0;
pub const AR_SCHEMA_REGULAR: c_uint = 1;
pub const AR_SCHEMA_JOIN: c_uint = 2;
pub const AR_SCHEMA_VIEW: c_uint = 3;
pub const AR_SCHEMA_DIALOG: c_uint = 4;
pub const AR_SCHEMA_VENDOR: c_uint = 5;

// Schema list types.
pub const AR_LIST_SCHEMA_ALL: c_uint = 0;
pub const AR_LIST_SCHEMA_REGULAR: c_uint = 1;
pub const AR_LIST_SCHEMA_JOIN: c_uint = 2;
pub const AR_LIST_SCHEMA_VIEW: c_uint = 3;
pub const AR_LIST_SCHEMA_UPLINK: c_uint = 4;
pub const AR_LIST_SCHEMA_DOWNLINK: c_uint = 5;
pub const AR_LIST_SCHEMA_DIALOG: c_uint = 6;

// Field type mask for field listings.
pub const AR_FIELD_TYPE_DATA: c_uint = 1;
pub const AR_FIELD_TYPE_TRIM: c_uint = 2;
pub const AR_FIELD_TYPE_CONTROL: c_uint = 4;
pub const AR_FIELD_TYPE_PAGE: c_uint = 8;
pub const AR_FIELD_TYPE_PAGE_HOLDER: c_uint = 16;
pub const AR_FIELD_TYPE_TABLE: c_uint = 32;
pub const AR_FIELD_TYPE_COLUMN: c_uint = 64;
pub const AR_FIELD_TYPE_ATTACH: c_uint = 128;
pub const AR_FIELD_TYPE_ATTACH_POOL: c_uint = 256;
pub const AR_FIELD_TYPE_ALL: c_uint = 511;

// Field mapping types.
pub const AR_FIELD_NONE: c_uint = 0;
pub const AR_FIELD_REGULAR: c_uint = 1;
pub const AR_FIELD_JOIN: c_uint = 2;
pub const AR_FIELD_VIEW: c_uint = 3;
pub const AR_FIELD_VENDOR: c_uint = 4;

// Workflow connect types.
pub const AR_WORKFLOW_CONN_NONE: c_uint = 0;
pub const AR_WORKFLOW_CONN_SCHEMA: c_uint = 1;
pub const AR_WORKFLOW_CONN_SCHEMA_LIST: c_uint = 2;

// Escalation time types.
pub const AR_ESCALATION_TYPE_INTERVAL: c_uint = 1;
pub const AR_ESCALATION_TYPE_TIMEMARK: c_uint = 2;

// Active link actions.
pub const AR_ACTIVE_LINK_ACTION_NONE: c_uint = 0;
pub const AR_ACTIVE_LINK_ACTION_MACRO: c_uint = 1;
pub const AR_ACTIVE_LINK_ACTION_FIELDS: c_uint = 2;
pub const AR_ACTIVE_LINK_ACTION_PROCESS: c_uint = 3;
pub const AR_ACTIVE_LINK_ACTION_MESSAGE: c_uint = 4;
pub const AR_ACTIVE_LINK_ACTION_SET_CHAR: c_uint = 5;
pub const AR_ACTIVE_LINK_ACTION_DDE: c_uint = 6;
pub const AR_ACTIVE_LINK_ACTION_FIELDP: c_uint = 7;
pub const AR_ACTIVE_LINK_ACTION_SQL: c_uint = 8;
pub const AR_ACTIVE_LINK_ACTION_AUTO: c_uint = 9;
pub const AR_ACTIVE_LINK_ACTION_OPENDLG: c_uint = 10;
pub const AR_ACTIVE_LINK_ACTION_COMMITC: c_uint = 11;
pub const AR_ACTIVE_LINK_ACTION_CLOSEWND: c_uint = 12;
pub const AR_ACTIVE_LINK_ACTION_CALLGUIDE: c_uint = 13;
pub const AR_ACTIVE_LINK_ACTION_EXITGUIDE: c_uint = 14;
pub const AR_ACTIVE_LINK_ACTION_GOTOGUIDELABEL: c_uint = 15;
pub const AR_ACTIVE_LINK_ACTION_WAIT: c_uint = 16;
pub const AR_ACTIVE_LINK_ACTION_GOTOACTION: c_uint = 17;
pub const AR_ACTIVE_LINK_ACTION_SERVICE: c_uint = 18;

// Filter and escalation actions.
pub const AR_FILTER_ACTION_NONE: c_uint = 0;
pub const AR_FILTER_ACTION_NOTIFY: c_uint = 1;
pub const AR_FILTER_ACTION_MESSAGE: c_uint = 2;
pub const AR_FILTER_ACTION_LOG: c_uint = 3;
pub const AR_FILTER_ACTION_FIELDS: c_uint = 4;
pub const AR_FILTER_ACTION_PROCESS: c_uint = 5;
pub const AR_FILTER_ACTION_FIELDP: c_uint = 6;
pub const AR_FILTER_ACTION_SQL: c_uint = 7;
pub const AR_FILTER_ACTION_GOTOACTION: c_uint = 8;
pub const AR_FILTER_ACTION_CALLGUIDE: c_uint = 9;
pub const AR_FILTER_ACTION_EXITGUIDE: c_uint = 10;
pub const AR_FILTER_ACTION_GOTOGUIDELABEL: c_uint = 11;
pub const AR_FILTER_ACTION_SERVICE: c_uint = 12;

// Container reference payload kinds.
pub const ARREF_DATA_ARSREF: c_uint = 0;
pub const ARREF_DATA_EXTREF: c_uint = 1;

// Reference type selectors; `ARREF_ALL` asks for every reference.
pub const ARREF_NONE: c_int = 0;
pub const ARREF_ALL: c_int = 1;

// Container types.
pub const ARCON_ALL: c_int = 0;
pub const ARCON_GUIDE: c_int = 1;
pub const ARCON_APP: c_int = 2;
pub const ARCON_PACK: c_int = 3;
pub const ARCON_FILTER_GUIDE: c_int = 4;
pub const ARCON_WEBSERVICE: c_int = 5;

// Container owner kinds.
pub const ARCONOWNER_NONE: c_uint = 0;
pub const ARCONOWNER_ALL: c_uint = 1;
pub const ARCONOWNER_SCHEMA: c_uint = 2;

// Character menu types.
pub const AR_CHAR_MENU_NONE: c_uint = 0;
pub const AR_CHAR_MENU_LIST: c_uint = 1;
pub const AR_CHAR_MENU_QUERY: c_uint = 2;
pub const AR_CHAR_MENU_FILE: c_uint = 3;
pub const AR_CHAR_MENU_SQL: c_uint = 4;

// Character menu item types.
pub const AR_MENU_TYPE_VALUE: c_uint = 1;
pub const AR_MENU_TYPE_MENU: c_uint = 2;

// XML documents.
pub const AR_XML_DOC_CHAR_STR: c_uint = 1;
pub const AR_XML_DOC_FILE_NAME: c_uint = 2;
pub const AR_XML_DOC_URL: c_uint = 3;

// Structure item types, plain and XML.
pub const AR_STRUCT_ITEM_SCHEMA: c_uint = 1;
pub const AR_STRUCT_ITEM_FILTER: c_uint = 5;
pub const AR_STRUCT_ITEM_ACTIVE_LINK: c_uint = 6;
pub const AR_STRUCT_ITEM_CHAR_MENU: c_uint = 8;
pub const AR_STRUCT_ITEM_ESCALATION: c_uint = 9;
pub const AR_STRUCT_ITEM_CONTAINER: c_uint = 12;
pub const AR_STRUCT_ITEM_VUI: c_uint = 14;
pub const AR_STRUCT_ITEM_FIELD: c_uint = 15;
pub const AR_STRUCT_ITEM_IMAGE: c_uint = 29;
pub const AR_STRUCT_XML_OFFSET: c_uint = 1 << 30;
