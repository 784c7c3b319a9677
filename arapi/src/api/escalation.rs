use arapi_sys::*;

use super::{HandlerIn, MetaIn, MetaListsOut, MetaOut, WorkflowFilter, decode_handler, owned_names, slot};
use crate::arena::ref_or_null;
use crate::batch::{Batch, BatchItem, Column};
use crate::error::Result;
use crate::ladder::{EntryPoint, Revision};
use crate::records::{
    Decoder, Encoder, Escalation, EscalationPatch, EscalationTime, FilterAction, WorkflowConnect,
};
use crate::release::{Out, Outputs};
use crate::session::Session;

impl Session {
    pub fn get_escalation(&self, name: &str) -> Result<Escalation> {
        let callee = self.callee(EntryPoint::GetEscalation)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let name_in = enc.name(name)?;

        let out = Outputs::new(self.frees());
        let time = out.alloc::<AREscalationTmStruct>();
        let connect = out.alloc::<ARWorkflowConnectStruct>();
        let enable = out.alloc::<u32>();
        let query = out.alloc::<ARQualifierStruct>();
        let actions = out.alloc::<ARFilterActionList>();
        let else_actions = out.alloc::<ARFilterActionList>();
        let handler_options = (shape >= Revision::V8_1).then(|| out.alloc::<u32>());
        let handler_name = (shape >= Revision::V8_1).then(|| out.alloc::<ARNameType>());
        let meta = MetaOut::new(&out, shape >= Revision::V6_3);

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; every output is a live slot.
            unsafe {
                match shape {
                    Revision::V8_1 => callee.cast::<ARGetEscalationFn81>()(
                        ctrl,
                        name_in,
                        time.ptr(),
                        connect.ptr(),
                        enable.ptr(),
                        query.ptr(),
                        actions.ptr(),
                        else_actions.ptr(),
                        meta.help(),
                        meta.timestamp(),
                        meta.owner(),
                        meta.last_changed(),
                        meta.diary(),
                        meta.props(),
                        slot(handler_options),
                        slot(handler_name),
                        status,
                    ),
                    Revision::V6_3 => callee.cast::<ARGetEscalationFn63>()(
                        ctrl,
                        name_in,
                        time.ptr(),
                        connect.ptr(),
                        enable.ptr(),
                        query.ptr(),
                        actions.ptr(),
                        else_actions.ptr(),
                        meta.help(),
                        meta.timestamp(),
                        meta.owner(),
                        meta.last_changed(),
                        meta.diary(),
                        meta.props(),
                        status,
                    ),
                    _ => callee.cast::<ARGetEscalationFn51>()(
                        ctrl,
                        name_in,
                        time.ptr(),
                        connect.ptr(),
                        enable.ptr(),
                        query.ptr(),
                        actions.ptr(),
                        else_actions.ptr(),
                        meta.help(),
                        meta.timestamp(),
                        meta.owner(),
                        meta.last_changed(),
                        meta.diary(),
                        status,
                    ),
                }
            }
        })?;

        let dec = Decoder::new(self);
        // SAFETY: the outputs were filled in by a successful call.
        unsafe {
            let error_handler = match (handler_options, handler_name) {
                (Some(o), Some(n)) => decode_handler(*o.get(), n.get(), &dec)?,
                _ => None,
            };
            Ok(Escalation {
                name: name.to_string(),
                time: EscalationTime::from_native(time.get()),
                connect: WorkflowConnect::from_native(connect.get(), &dec)?,
                enabled: *enable.get() != 0,
                query: dec.qualifier(query.get())?,
                actions: FilterAction::list_from_native(actions.get(), &dec)?,
                else_actions: FilterAction::list_from_native(else_actions.get(), &dec)?,
                meta: meta.decode(&dec)?,
                error_handler,
            })
        }
    }

    pub fn create_escalation(&self, escalation: &Escalation) -> Result<()> {
        let callee = self.callee(EntryPoint::CreateEscalation)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let name = enc.name(&escalation.name)?;
        let time = escalation.time.to_native();
        let connect = escalation.connect.to_native(&mut enc)?;
        let query = enc.qualifier_ptr_or_empty(escalation.connect.primary(), escalation.query.as_deref())?;
        let actions = FilterAction::list_to_native(&mut enc, &escalation.actions)?;
        let else_actions = FilterAction::list_to_native(&mut enc, &escalation.else_actions)?;
        let meta = MetaIn::from_meta(&mut enc, &escalation.meta)?;
        let handler = HandlerIn::encode(&mut enc, escalation.error_handler.as_ref())?;
        let enable = escalation.enabled as u32;

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; inputs live in `enc` and
            // on this frame.
            unsafe {
                match shape {
                    Revision::V8_1 => callee.cast::<ARCreateEscalationFn81>()(
                        ctrl,
                        name,
                        &time,
                        &connect,
                        enable,
                        query,
                        &actions,
                        &else_actions,
                        meta.help,
                        meta.owner,
                        meta.diary,
                        meta.props,
                        handler.options,
                        handler.name,
                        status,
                    ),
                    Revision::V6_3 => callee.cast::<ARCreateEscalationFn63>()(
                        ctrl,
                        name,
                        &time,
                        &connect,
                        enable,
                        query,
                        &actions,
                        &else_actions,
                        meta.help,
                        meta.owner,
                        meta.diary,
                        meta.props,
                        status,
                    ),
                    _ => callee.cast::<ARCreateEscalationFn51>()(
                        ctrl,
                        name,
                        &time,
                        &connect,
                        enable,
                        query,
                        &actions,
                        &else_actions,
                        meta.help,
                        meta.owner,
                        meta.diary,
                        status,
                    ),
                }
            }
        })?;
        Ok(())
    }

    pub fn set_escalation(&self, name: &str, patch: &EscalationPatch) -> Result<()> {
        let callee = self.callee(EntryPoint::SetEscalation)?;
        let shape = callee.shape();
        let query_schema = match (&patch.query, &patch.connect) {
            (None, _) => String::new(),
            (Some(_), Some(connect)) => connect.primary().to_string(),
            (Some(_), None) => self.get_escalation(name)?.connect.primary().to_string(),
        };

        let mut enc = Encoder::new(self);
        let name = enc.name(name)?;
        let new_name = enc.opt_name(patch.new_name.as_deref())?;
        let time = patch.time.map(EscalationTime::to_native);
        let connect = patch.connect.as_ref().map(|c| c.to_native(&mut enc)).transpose()?;
        let query = enc.qualifier(&query_schema, patch.query.as_deref())?;
        let actions = patch
            .actions
            .as_deref()
            .map(|a| FilterAction::list_to_native(&mut enc, a))
            .transpose()?;
        let else_actions = patch
            .else_actions
            .as_deref()
            .map(|a| FilterAction::list_to_native(&mut enc, a))
            .transpose()?;
        let meta = MetaIn::encode(&mut enc, &patch.meta)?;
        let handler = HandlerIn::encode(&mut enc, patch.error_handler.as_ref())?;
        let enable = patch.enabled.map(u32::from);

        let time = ref_or_null(time.as_ref());
        let connect = ref_or_null(connect.as_ref());
        let enable = ref_or_null(enable.as_ref());
        let actions = ref_or_null(actions.as_ref());
        let else_actions = ref_or_null(else_actions.as_ref());

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; inputs are null or live.
            unsafe {
                match shape {
                    Revision::V8_1 => callee.cast::<ARSetEscalationFn81>()(
                        ctrl,
                        name,
                        new_name,
                        time,
                        connect,
                        enable,
                        query,
                        actions,
                        else_actions,
                        meta.help,
                        meta.owner,
                        meta.diary,
                        meta.props,
                        handler.options_ptr(),
                        handler.name,
                        status,
                    ),
                    Revision::V6_3 => callee.cast::<ARSetEscalationFn63>()(
                        ctrl,
                        name,
                        new_name,
                        time,
                        connect,
                        enable,
                        query,
                        actions,
                        else_actions,
                        meta.help,
                        meta.owner,
                        meta.diary,
                        meta.props,
                        status,
                    ),
                    _ => callee.cast::<ARSetEscalationFn51>()(
                        ctrl,
                        name,
                        new_name,
                        time,
                        connect,
                        enable,
                        query,
                        actions,
                        else_actions,
                        meta.help,
                        meta.owner,
                        meta.diary,
                        status,
                    ),
                }
            }
        })?;
        Ok(())
    }

    pub fn delete_escalation(&self, name: &str, option: u32) -> Result<()> {
        let callee = self.callee(EntryPoint::DeleteEscalation)?;
        let mut enc = Encoder::new(self);
        let name = enc.name(name)?;
        self.invoke(callee, |ctrl, status| {
            // SAFETY: every shape shares this signature.
            unsafe { callee.cast::<ARDeleteEscalationFn>()(ctrl, name, option, status) }
        })?;
        Ok(())
    }

    pub fn list_escalations(&self, filter: &WorkflowFilter) -> Result<Vec<String>> {
        let callee = self.callee(EntryPoint::GetListEscalation)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let schema = enc.opt_name(filter.schema.as_deref())?;
        let props = enc.opt_props(filter.properties.as_deref())?;

        let out = Outputs::new(self.frees());
        let names = out.alloc::<ARNameList>();
        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape.
            unsafe {
                match shape {
                    Revision::V6_3 => callee.cast::<ARGetListEscalationFn63>()(
                        ctrl,
                        schema,
                        filter.changed_since,
                        props,
                        names.ptr(),
                        status,
                    ),
                    _ => callee.cast::<ARGetListEscalationFn51>()(
                        ctrl,
                        schema,
                        filter.changed_since,
                        names.ptr(),
                        status,
                    ),
                }
            }
        })?;
        // SAFETY: filled in by the call.
        unsafe { Decoder::new(self).names(names.get()) }
    }

    pub fn get_multiple_escalations(&self, names: &[&str]) -> Result<Vec<BatchItem<Escalation>>> {
        let callee = self.callee(EntryPoint::GetMultipleEscalations)?;
        if names.is_empty() {
            return Ok(Vec::new());
        }
        let shape = callee.shape();
        let keys = owned_names(names);
        let mut enc = Encoder::new(self);
        let wanted = enc.names(&keys)?;

        let out = Outputs::new(self.frees());
        let exist = out.alloc::<ARBooleanList>();
        let got = out.alloc::<ARNameList>();
        let times = out.alloc::<AREscalationTmList>();
        let connects = out.alloc::<ARWorkflowConnectList>();
        let enables = out.alloc::<ARUnsignedIntList>();
        let queries = out.alloc::<ARQualifierList>();
        let actions = out.alloc::<ARFilterActionListList>();
        let else_actions = out.alloc::<ARFilterActionListList>();
        let handler_options = (shape >= Revision::V8_1).then(|| out.alloc::<ARUnsignedIntList>());
        let handler_names = (shape >= Revision::V8_1).then(|| out.alloc::<ARNameList>());
        let meta = MetaListsOut::new(&out, true);

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; every output is a live slot.
            unsafe {
                match shape {
                    Revision::V8_1 => callee.cast::<ARGetMultipleEscalationsFn81>()(
                        ctrl,
                        0,
                        &wanted,
                        exist.ptr(),
                        got.ptr(),
                        times.ptr(),
                        connects.ptr(),
                        enables.ptr(),
                        queries.ptr(),
                        actions.ptr(),
                        else_actions.ptr(),
                        meta.help(),
                        meta.timestamp(),
                        meta.owner(),
                        meta.last_changed(),
                        meta.diary(),
                        meta.props(),
                        slot(handler_options),
                        slot(handler_names),
                        status,
                    ),
                    _ => callee.cast::<ARGetMultipleEscalationsFn63>()(
                        ctrl,
                        0,
                        &wanted,
                        exist.ptr(),
                        got.ptr(),
                        times.ptr(),
                        connects.ptr(),
                        enables.ptr(),
                        queries.ptr(),
                        actions.ptr(),
                        else_actions.ptr(),
                        meta.help(),
                        meta.timestamp(),
                        meta.owner(),
                        meta.last_changed(),
                        meta.diary(),
                        meta.props(),
                        status,
                    ),
                }
            }
        })?;

        let dec = Decoder::new(self);
        // SAFETY: the outputs were filled in by a successful call.
        unsafe {
            let batch = Batch::new(callee.entry(), &keys, exist.get())?;
            let got = batch.column(got.get())?;
            let times = batch.column(times.get())?;
            let connects = batch.column(connects.get())?;
            let enables = batch.column(enables.get())?;
            let queries = batch.column(queries.get())?;
            let actions = batch.column(actions.get())?;
            let else_actions = batch.column(else_actions.get())?;
            let handler_options = batch.opt_column(handler_options.map(Out::get))?;
            let handler_names = batch.opt_column(handler_names.map(Out::get))?;
            let meta = meta.columns(&batch)?;
            batch.zip(|i| {
                let error_handler = match (
                    Column::opt_at(&handler_options, i)?,
                    Column::opt_at(&handler_names, i)?,
                ) {
                    (Some(o), Some(n)) => decode_handler(*o, n, &dec)?,
                    _ => None,
                };
                Ok(Escalation {
                    name: dec.name(got.at(i)?)?,
                    time: EscalationTime::from_native(times.at(i)?),
                    connect: WorkflowConnect::from_native(connects.at(i)?, &dec)?,
                    enabled: *enables.at(i)? != 0,
                    query: dec.qualifier(queries.at(i)?)?,
                    actions: FilterAction::list_from_native(actions.at(i)?, &dec)?,
                    else_actions: FilterAction::list_from_native(else_actions.at(i)?, &dec)?,
                    meta: meta.at(i, &dec)?,
                    error_handler,
                })
            })
        }
    }
}
