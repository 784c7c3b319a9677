//! Workflow actions.
//!
//! Only the action kinds whose payload is a few scalars or strings are
//! modeled. The others decode to `Opaque { kind }`; they cannot be sent back,
//! since their payload is not carried.

use arapi_sys::*;
use serde::Serialize;

use super::{Decoder, Encoder};
use crate::error::{Error, Result};
use crate::list::from_native_list;

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Message {
    pub kind: u32,
    pub number: i32,
    pub text: String,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct CallGuide {
    pub server: String,
    pub guide: String,
    pub mode: i32,
    pub table_id: u32,
}

impl CallGuide {
    fn from_native(raw: &ARCallGuideStruct, dec: &Decoder<'_>) -> Result<Self> {
        Ok(Self {
            server: dec.name(&raw.serverName)?,
            guide: dec.name(&raw.guideName)?,
            mode: raw.guideMode,
            table_id: raw.guideTableId,
        })
    }

    fn to_native(&self, enc: &Encoder<'_>) -> Result<ARCallGuideStruct> {
        Ok(ARCallGuideStruct {
            serverName: enc.name_buf(&self.server)?,
            guideName: enc.name_buf(&self.guide)?,
            guideMode: self.mode,
            guideTableId: self.table_id,
        })
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum ActiveLinkAction {
    None,
    Process { command: String },
    Message { message: Message, prompting_pane: bool },
    CallGuide(CallGuide),
    ExitGuide { close_all: bool },
    GotoGuideLabel { label: String },
    Wait { continue_button: Option<String> },
    GotoAction { tag: u32, field_or_value: u32 },
    Opaque { kind: u32 },
}

impl ActiveLinkAction {
    pub(crate) unsafe fn from_native(raw: &ARActiveLinkActionStruct, dec: &Decoder<'_>) -> Result<Self> {
        // SAFETY: the action kind selects the live member.
        unsafe {
            let u = &raw.u;
            Ok(match raw.action {
                AR_ACTIVE_LINK_ACTION_NONE => ActiveLinkAction::None,
                AR_ACTIVE_LINK_ACTION_PROCESS => ActiveLinkAction::Process {
                    command: dec.text(u.process)?,
                },
                AR_ACTIVE_LINK_ACTION_MESSAGE => ActiveLinkAction::Message {
                    message: Message {
                        kind: u.message.messageType,
                        number: u.message.messageNum,
                        text: dec.text(u.message.messageText)?,
                    },
                    prompting_pane: u.message.usePromptingPane != 0,
                },
                AR_ACTIVE_LINK_ACTION_CALLGUIDE => {
                    ActiveLinkAction::CallGuide(CallGuide::from_native(&u.callGuide, dec)?)
                }
                AR_ACTIVE_LINK_ACTION_EXITGUIDE => ActiveLinkAction::ExitGuide {
                    close_all: u.exitGuide.closeAll != 0,
                },
                AR_ACTIVE_LINK_ACTION_GOTOGUIDELABEL => ActiveLinkAction::GotoGuideLabel {
                    label: dec.text(u.gotoGuide.label)?,
                },
                AR_ACTIVE_LINK_ACTION_WAIT => ActiveLinkAction::Wait {
                    continue_button: dec.opt_text(u.waitAction.continueButtonTitle)?,
                },
                AR_ACTIVE_LINK_ACTION_GOTOACTION => ActiveLinkAction::GotoAction {
                    tag: u.gotoAction.tag,
                    field_or_value: u.gotoAction.fieldIdOrValue,
                },
                kind => ActiveLinkAction::Opaque { kind },
            })
        }
    }

    pub(crate) fn to_native(&self, enc: &mut Encoder<'_>) -> Result<ARActiveLinkActionStruct> {
        let (action, u) = match self {
            ActiveLinkAction::None => (AR_ACTIVE_LINK_ACTION_NONE, ARActiveLinkActionUnion::zeroed()),
            ActiveLinkAction::Process { command } => (
                AR_ACTIVE_LINK_ACTION_PROCESS,
                ARActiveLinkActionUnion {
                    process: enc.str(command)?,
                },
            ),
            ActiveLinkAction::Message {
                message,
                prompting_pane,
            } => (
                AR_ACTIVE_LINK_ACTION_MESSAGE,
                ARActiveLinkActionUnion {
                    message: ARMessageStruct {
                        messageType: message.kind,
                        messageNum: message.number,
                        messageText: enc.str(&message.text)?,
                        usePromptingPane: *prompting_pane as ARBoolean,
                    },
                },
            ),
            ActiveLinkAction::CallGuide(guide) => (
                AR_ACTIVE_LINK_ACTION_CALLGUIDE,
                ARActiveLinkActionUnion {
                    callGuide: guide.to_native(enc)?,
                },
            ),
            ActiveLinkAction::ExitGuide { close_all } => (
                AR_ACTIVE_LINK_ACTION_EXITGUIDE,
                ARActiveLinkActionUnion {
                    exitGuide: ARExitGuideStruct {
                        closeAll: *close_all as ARBoolean,
                    },
                },
            ),
            ActiveLinkAction::GotoGuideLabel { label } => (
                AR_ACTIVE_LINK_ACTION_GOTOGUIDELABEL,
                ARActiveLinkActionUnion {
                    gotoGuide: ARGotoGuideLabelStruct { label: enc.str(label)? },
                },
            ),
            ActiveLinkAction::Wait { continue_button } => (
                AR_ACTIVE_LINK_ACTION_WAIT,
                ARActiveLinkActionUnion {
                    waitAction: ARWaitStruct {
                        continueButtonTitle: enc.opt_str(continue_button.as_deref())?,
                    },
                },
            ),
            ActiveLinkAction::GotoAction { tag, field_or_value } => (
                AR_ACTIVE_LINK_ACTION_GOTOACTION,
                ARActiveLinkActionUnion {
                    gotoAction: ARGotoActionStruct {
                        tag: *tag,
                        fieldIdOrValue: *field_or_value,
                    },
                },
            ),
            ActiveLinkAction::Opaque { kind } => return Err(Error::UnsupportedAction(*kind)),
        };
        Ok(ARActiveLinkActionStruct { action, u })
    }

    /// # Safety
    ///
    /// `raw` must be a list filled in by the library.
    pub(crate) unsafe fn list_from_native(raw: &ARActiveLinkActionList, dec: &Decoder<'_>) -> Result<Vec<Self>> {
        // SAFETY: forwarded.
        unsafe { from_native_list(raw, |a| Self::from_native(a, dec)) }
    }

    pub(crate) fn list_to_native(enc: &mut Encoder<'_>, actions: &[Self]) -> Result<ARActiveLinkActionList> {
        enc.map_list(actions, |enc, a| a.to_native(enc))
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Notify {
    pub user: String,
    pub text: Option<String>,
    pub priority: u32,
    pub mechanism: u32,
    pub subject: Option<String>,
}

/// Filter and escalation actions.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum FilterAction {
    None,
    Notify(Notify),
    Message(Message),
    Log { file: String },
    Process { command: String },
    GotoAction { tag: u32, field_or_value: u32 },
    CallGuide(CallGuide),
    ExitGuide { close_all: bool },
    GotoGuideLabel { label: String },
    Opaque { kind: u32 },
}

impl FilterAction {
    pub(crate) unsafe fn from_native(raw: &ARFilterActionStruct, dec: &Decoder<'_>) -> Result<Self> {
        // SAFETY: the action kind selects the live member.
        unsafe {
            let u = &raw.u;
            Ok(match raw.action {
                AR_FILTER_ACTION_NONE => FilterAction::None,
                AR_FILTER_ACTION_NOTIFY => FilterAction::Notify(Notify {
                    user: dec.text(u.notify.user)?,
                    text: dec.opt_text(u.notify.notifyText)?,
                    priority: u.notify.notifyPriority,
                    mechanism: u.notify.notifyMechanism,
                    subject: dec.opt_text(u.notify.subjectText)?,
                }),
                AR_FILTER_ACTION_MESSAGE => FilterAction::Message(Message {
                    kind: u.message.messageType,
                    number: u.message.messageNum,
                    text: dec.text(u.message.messageText)?,
                }),
                AR_FILTER_ACTION_LOG => FilterAction::Log {
                    file: dec.text(u.logFile)?,
                },
                AR_FILTER_ACTION_PROCESS => FilterAction::Process {
                    command: dec.text(u.process)?,
                },
                AR_FILTER_ACTION_GOTOACTION => FilterAction::GotoAction {
                    tag: u.gotoAction.tag,
                    field_or_value: u.gotoAction.fieldIdOrValue,
                },
                AR_FILTER_ACTION_CALLGUIDE => FilterAction::CallGuide(CallGuide::from_native(&u.callGuide, dec)?),
                AR_FILTER_ACTION_EXITGUIDE => FilterAction::ExitGuide {
                    close_all: u.exitGuide.closeAll != 0,
                },
                AR_FILTER_ACTION_GOTOGUIDELABEL => FilterAction::GotoGuideLabel {
                    label: dec.text(u.gotoGuide.label)?,
                },
                kind => FilterAction::Opaque { kind },
            })
        }
    }

    pub(crate) fn to_native(&self, enc: &mut Encoder<'_>) -> Result<ARFilterActionStruct> {
        let (action, u) = match self {
            FilterAction::None => (AR_FILTER_ACTION_NONE, ARFilterActionUnion::zeroed()),
            FilterAction::Notify(n) => (
                AR_FILTER_ACTION_NOTIFY,
                ARFilterActionUnion {
                    notify: ARFilterActionNotify {
                        user: enc.str(&n.user)?,
                        notifyText: enc.opt_str(n.text.as_deref())?,
                        notifyPriority: n.priority,
                        notifyMechanism: n.mechanism,
                        subjectText: enc.opt_str(n.subject.as_deref())?,
                    },
                },
            ),
            FilterAction::Message(m) => (
                AR_FILTER_ACTION_MESSAGE,
                ARFilterActionUnion {
                    message: ARFilterStatusStruct {
                        messageType: m.kind,
                        messageNum: m.number,
                        messageText: enc.str(&m.text)?,
                    },
                },
            ),
            FilterAction::Log { file } => (
                AR_FILTER_ACTION_LOG,
                ARFilterActionUnion {
                    logFile: enc.str(file)?,
                },
            ),
            FilterAction::Process { command } => (
                AR_FILTER_ACTION_PROCESS,
                ARFilterActionUnion {
                    process: enc.str(command)?,
                },
            ),
            FilterAction::GotoAction { tag, field_or_value } => (
                AR_FILTER_ACTION_GOTOACTION,
                ARFilterActionUnion {
                    gotoAction: ARGotoActionStruct {
                        tag: *tag,
                        fieldIdOrValue: *field_or_value,
                    },
                },
            ),
            FilterAction::CallGuide(guide) => (
                AR_FILTER_ACTION_CALLGUIDE,
                ARFilterActionUnion {
                    callGuide: guide.to_native(enc)?,
                },
            ),
            FilterAction::ExitGuide { close_all } => (
                AR_FILTER_ACTION_EXITGUIDE,
                ARFilterActionUnion {
                    exitGuide: ARExitGuideStruct {
                        closeAll: *close_all as ARBoolean,
                    },
                },
            ),
            FilterAction::GotoGuideLabel { label } => (
                AR_FILTER_ACTION_GOTOGUIDELABEL,
                ARFilterActionUnion {
                    gotoGuide: ARGotoGuideLabelStruct { label: enc.str(label)? },
                },
            ),
            FilterAction::Opaque { kind } => return Err(Error::UnsupportedAction(*kind)),
        };
        Ok(ARFilterActionStruct { action, u })
    }

    /// # Safety
    ///
    /// `raw` must be a list filled in by the library.
    pub(crate) unsafe fn list_from_native(raw: &ARFilterActionList, dec: &Decoder<'_>) -> Result<Vec<Self>> {
        // SAFETY: forwarded.
        unsafe { from_native_list(raw, |a| Self::from_native(a, dec)) }
    }

    pub(crate) fn list_to_native(enc: &mut Encoder<'_>, actions: &[Self]) -> Result<ARFilterActionList> {
        enc.map_list(actions, |enc, a| a.to_native(enc))
    }
}
