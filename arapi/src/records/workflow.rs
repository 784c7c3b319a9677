use arapi_sys::*;
use bitflags::bitflags;
use serde::Serialize;

use super::{ActiveLinkAction, DayTime, ErrorHandler, FilterAction, MetaPatch, ObjectMeta, WorkflowConnect};

bitflags! {
    /// Conditions that fire an active link.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
    pub struct ExecuteMask: u32 {
        const BUTTON = 1;
        const RETURN = 1 << 1;
        const SUBMIT = 1 << 2;
        const MODIFY = 1 << 3;
        const DISPLAY = 1 << 4;
        const MENU_CHOICE = 1 << 7;
        const LOSE_FOCUS = 1 << 8;
        const SET_DEFAULT = 1 << 9;
        const QUERY = 1 << 10;
        const AFTER_MODIFY = 1 << 11;
        const AFTER_SUBMIT = 1 << 12;
        const GAIN_FOCUS = 1 << 13;
        const WINDOW_OPEN = 1 << 14;
        const WINDOW_CLOSE = 1 << 15;
        const UNDISPLAY = 1 << 16;
        const COPY_SUBMIT = 1 << 17;
        const LOADED = 1 << 18;
        const INTERVAL = 1 << 19;
        const EVENT = 1 << 20;
        const TABLE_CONTENT_CHANGE = 1 << 21;
        const HOVER = 1 << 22;
        const TABLE_SELECTION_CHANGE = 1 << 23;

        const _ = !0;
    }
}

bitflags! {
    /// Operations a filter runs on.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
    pub struct OperationSet: u32 {
        const GET = 1;
        const SET = 1 << 1;
        const CREATE = 1 << 2;
        const DELETE = 1 << 3;
        const MERGE = 1 << 4;
        const GUIDE = 1 << 5;
        const SERVICE = 1 << 6;

        const _ = !0;
    }
}

macro_rules! serialize_flags {
    ($($t:ty),*) => {
        $(impl Serialize for $t {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.collect_seq(self.iter_names().map(|(name, _)| name))
            }
        })*
    };
}

serialize_flags!(ExecuteMask, OperationSet);

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ActiveLink {
    pub name: String,
    pub order: u32,
    pub connect: WorkflowConnect,
    pub groups: Vec<u32>,
    pub execute: ExecuteMask,
    pub control_field: u32,
    pub focus_field: u32,
    pub enabled: bool,
    pub query: Option<String>,
    pub actions: Vec<ActiveLinkAction>,
    pub else_actions: Vec<ActiveLinkAction>,
    pub meta: ObjectMeta,
    /// From 7.6.03.
    pub error_handler: Option<ErrorHandler>,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ActiveLinkPatch {
    pub new_name: Option<String>,
    pub order: Option<u32>,
    pub connect: Option<WorkflowConnect>,
    pub groups: Option<Vec<u32>>,
    pub execute: Option<ExecuteMask>,
    pub control_field: Option<u32>,
    pub focus_field: Option<u32>,
    pub enabled: Option<bool>,
    pub query: Option<String>,
    pub actions: Option<Vec<ActiveLinkAction>>,
    pub else_actions: Option<Vec<ActiveLinkAction>>,
    pub meta: MetaPatch,
    pub error_handler: Option<ErrorHandler>,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Filter {
    pub name: String,
    pub order: u32,
    pub connect: WorkflowConnect,
    pub operations: OperationSet,
    pub enabled: bool,
    pub query: Option<String>,
    pub actions: Vec<FilterAction>,
    pub else_actions: Vec<FilterAction>,
    pub meta: ObjectMeta,
    /// From 7.1.
    pub error_handler: Option<ErrorHandler>,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct FilterPatch {
    pub new_name: Option<String>,
    pub order: Option<u32>,
    pub connect: Option<WorkflowConnect>,
    pub operations: Option<OperationSet>,
    pub enabled: Option<bool>,
    pub query: Option<String>,
    pub actions: Option<Vec<FilterAction>>,
    pub else_actions: Option<Vec<FilterAction>>,
    pub meta: MetaPatch,
    pub error_handler: Option<ErrorHandler>,
}

/// When an escalation runs.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EscalationTime {
    /// Every `n` seconds.
    Interval(i32),
    Timemark(DayTime),
}

impl EscalationTime {
    pub(crate) fn from_native(raw: &AREscalationTmStruct) -> Self {
        // SAFETY: the type selects the live member.
        unsafe {
            match raw.escalationTmType {
                AR_ESCALATION_TYPE_TIMEMARK => EscalationTime::Timemark(DayTime::from_native(&raw.u.date)),
                _ => EscalationTime::Interval(raw.u.interval),
            }
        }
    }

    pub(crate) fn to_native(self) -> AREscalationTmStruct {
        match self {
            EscalationTime::Interval(seconds) => AREscalationTmStruct {
                escalationTmType: AR_ESCALATION_TYPE_INTERVAL,
                u: AREscalationTmUnion { interval: seconds },
            },
            EscalationTime::Timemark(day) => AREscalationTmStruct {
                escalationTmType: AR_ESCALATION_TYPE_TIMEMARK,
                u: AREscalationTmUnion { date: day.to_native() },
            },
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Escalation {
    pub name: String,
    pub time: EscalationTime,
    pub connect: WorkflowConnect,
    pub enabled: bool,
    pub query: Option<String>,
    pub actions: Vec<FilterAction>,
    pub else_actions: Vec<FilterAction>,
    pub meta: ObjectMeta,
    /// From 8.1.
    pub error_handler: Option<ErrorHandler>,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct EscalationPatch {
    pub new_name: Option<String>,
    pub time: Option<EscalationTime>,
    pub connect: Option<WorkflowConnect>,
    pub enabled: Option<bool>,
    pub query: Option<String>,
    pub actions: Option<Vec<FilterAction>>,
    pub else_actions: Option<Vec<FilterAction>>,
    pub meta: MetaPatch,
    pub error_handler: Option<ErrorHandler>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_mask_bits_survive() {
        let mask = ExecuteMask::from_bits_retain(ExecuteMask::SUBMIT.bits() | (1 << 30));
        assert!(mask.contains(ExecuteMask::SUBMIT));
        assert_eq!(mask.bits() & (1 << 30), 1 << 30);
    }

    #[test]
    fn escalation_time_round_trip() {
        let t = EscalationTime::Timemark(DayTime {
            monthday: 0,
            weekday: 0b10,
            hourmask: 1 << 9,
            minute: 30,
        });
        assert_eq!(EscalationTime::from_native(&t.to_native()), t);
        let i = EscalationTime::Interval(300);
        assert_eq!(EscalationTime::from_native(&i.to_native()), i);
    }
}
