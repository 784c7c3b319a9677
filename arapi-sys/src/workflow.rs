//! Workflow structures: connections, escalation times and action unions.

use std::os::raw::{c_char, c_int, c_uint};

use crate::objects::ARDayStruct;
use crate::types::*;

#[repr(C)]
#[derive(Clone, Copy)]
pub union ARWorkflowConnectUnion {
    pub schemaName: *mut ARNameType,
    pub schemaList: *mut ARNameList,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARWorkflowConnectStruct {
    pub type_: c_uint,
    pub u: ARWorkflowConnectUnion,
}

pub type ARWorkflowConnectList = ARList<ARWorkflowConnectStruct>;

#[repr(C)]
#[derive(Clone, Copy)]
pub union AREscalationTmUnion {
    pub interval: ARLong32,
    pub date: ARDayStruct,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct AREscalationTmStruct {
    pub escalationTmType: c_uint,
    pub u: AREscalationTmUnion,
}

pub type AREscalationTmList = ARList<AREscalationTmStruct>;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARMessageStruct {
    pub messageType: c_uint,
    pub messageNum: ARLong32,
    pub messageText: *mut c_char,
    pub usePromptingPane: ARBoolean,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARCallGuideStruct {
    pub serverName: ARServerNameType,
    pub guideName: ARNameType,
    pub guideMode: c_int,
    pub guideTableId: ARInternalId,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARExitGuideStruct {
    pub closeAll: ARBoolean,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARGotoGuideLabelStruct {
    pub label: *mut c_char,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARWaitStruct {
    pub continueButtonTitle: *mut c_char,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARGotoActionStruct {
    pub tag: c_uint,
    pub fieldIdOrValue: c_uint,
}

/// Storage of the action members the binding does not interpret
/// (set fields, push fields, DDE, SQL, services ...). Sized to the largest
/// of them so arrays of actions keep the native stride.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARActionReserved {
    pub words: [u64; 40],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union ARActiveLinkActionUnion {
    pub process: *mut c_char,
    pub message: ARMessageStruct,
    pub callGuide: ARCallGuideStruct,
    pub exitGuide: ARExitGuideStruct,
    pub gotoGuide: ARGotoGuideLabelStruct,
    pub waitAction: ARWaitStruct,
    pub gotoAction: ARGotoActionStruct,
    pub reserved: ARActionReserved,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARActiveLinkActionStruct {
    pub action: c_uint,
    pub u: ARActiveLinkActionUnion,
}

pub type ARActiveLinkActionList = ARList<ARActiveLinkActionStruct>;
pub type ARActiveLinkActionListList = ARList<ARActiveLinkActionList>;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARFilterActionNotify {
    pub user: *mut c_char,
    pub notifyText: *mut c_char,
    pub notifyPriority: c_uint,
    pub notifyMechanism: c_uint,
    pub subjectText: *mut c_char,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARFilterStatusStruct {
    pub messageType: c_uint,
    pub messageNum: ARLong32,
    pub messageText: *mut c_char,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union ARFilterActionUnion {
    pub notify: ARFilterActionNotify,
    pub message: ARFilterStatusStruct,
    pub logFile: *mut c_char,
    pub process: *mut c_char,
    pub gotoAction: ARGotoActionStruct,
    pub callGuide: ARCallGuideStruct,
    pub exitGuide: ARExitGuideStruct,
    pub gotoGuide: ARGotoGuideLabelStruct,
    pub reserved: ARActionReserved,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARFilterActionStruct {
    pub action: c_uint,
    pub u: ARFilterActionUnion,
}

pub type ARFilterActionList = ARList<ARFilterActionStruct>;
pub type ARFilterActionListList = ARList<ARFilterActionList>;

zeroable!(
    ARWorkflowConnectUnion,
    ARWorkflowConnectStruct,
    AREscalationTmUnion,
    AREscalationTmStruct,
    ARMessageStruct,
    ARCallGuideStruct,
    ARExitGuideStruct,
    ARGotoGuideLabelStruct,
    ARWaitStruct,
    ARGotoActionStruct,
    ARActionReserved,
    ARActiveLinkActionUnion,
    ARActiveLinkActionStruct,
    ARFilterActionNotify,
    ARFilterStatusStruct,
    ARFilterActionUnion,
    ARFilterActionStruct,
);
