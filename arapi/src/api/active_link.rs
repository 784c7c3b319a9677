use arapi_sys::*;

use super::{HandlerIn, MetaIn, MetaListsOut, MetaOut, WorkflowFilter, decode_handler, owned_names, slot};
use crate::arena::ref_or_null;
use crate::batch::{Batch, BatchItem, Column};
use crate::error::Result;
use crate::ladder::{EntryPoint, Revision};
use crate::records::{
    ActiveLink, ActiveLinkAction, ActiveLinkPatch, Decoder, Encoder, ExecuteMask, WorkflowConnect, ids_from_native,
};
use crate::release::{Out, Outputs};
use crate::session::Session;

impl Session {
    pub fn get_active_link(&self, name: &str) -> Result<ActiveLink> {
        let callee = self.callee(EntryPoint::GetActiveLink)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let name_in = enc.name(name)?;

        let out = Outputs::new(self.frees());
        let order = out.alloc::<u32>();
        let connect = out.alloc::<ARWorkflowConnectStruct>();
        let groups = out.alloc::<ARInternalIdList>();
        let execute = out.alloc::<u32>();
        let control = out.alloc::<u32>();
        let focus = out.alloc::<u32>();
        let enable = out.alloc::<u32>();
        let query = out.alloc::<ARQualifierStruct>();
        let actions = out.alloc::<ARActiveLinkActionList>();
        let else_actions = out.alloc::<ARActiveLinkActionList>();
        let handler_options = (shape >= Revision::V7_6_03).then(|| out.alloc::<u32>());
        let handler_name = (shape >= Revision::V7_6_03).then(|| out.alloc::<ARNameType>());
        let meta = MetaOut::new(&out, shape >= Revision::V6_3);

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; every output is a live slot.
            unsafe {
                match shape {
                    Revision::V7_6_03 => callee.cast::<ARGetActiveLinkFn7603>()(
                        ctrl,
                        name_in,
                        order.ptr(),
                        connect.ptr(),
                        groups.ptr(),
                        execute.ptr(),
                        control.ptr(),
                        focus.ptr(),
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
                    Revision::V6_3 => callee.cast::<ARGetActiveLinkFn63>()(
                        ctrl,
                        name_in,
                        order.ptr(),
                        connect.ptr(),
                        groups.ptr(),
                        execute.ptr(),
                        control.ptr(),
                        focus.ptr(),
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
                    _ => callee.cast::<ARGetActiveLinkFn51>()(
                        ctrl,
                        name_in,
                        order.ptr(),
                        connect.ptr(),
                        groups.ptr(),
                        execute.ptr(),
                        control.ptr(),
                        focus.ptr(),
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
            Ok(ActiveLink {
                name: name.to_string(),
                order: *order.get(),
                connect: WorkflowConnect::from_native(connect.get(), &dec)?,
                groups: ids_from_native(groups.get())?,
                execute: ExecuteMask::from_bits_retain(*execute.get()),
                control_field: *control.get(),
                focus_field: *focus.get(),
                enabled: *enable.get() != 0,
                query: dec.qualifier(query.get())?,
                actions: ActiveLinkAction::list_from_native(actions.get(), &dec)?,
                else_actions: ActiveLinkAction::list_from_native(else_actions.get(), &dec)?,
                meta: meta.decode(&dec)?,
                error_handler,
            })
        }
    }

    pub fn create_active_link(&self, link: &ActiveLink) -> Result<()> {
        let callee = self.callee(EntryPoint::CreateActiveLink)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let name = enc.name(&link.name)?;
        let connect = link.connect.to_native(&mut enc)?;
        let groups = enc.list(link.groups.clone());
        let query = enc.qualifier_ptr_or_empty(link.connect.primary(), link.query.as_deref())?;
        let actions = ActiveLinkAction::list_to_native(&mut enc, &link.actions)?;
        let else_actions = ActiveLinkAction::list_to_native(&mut enc, &link.else_actions)?;
        let meta = MetaIn::from_meta(&mut enc, &link.meta)?;
        let handler = HandlerIn::encode(&mut enc, link.error_handler.as_ref())?;
        let execute = link.execute.bits();
        let enable = link.enabled as u32;

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; inputs live in `enc` and
            // on this frame.
            unsafe {
                match shape {
                    Revision::V7_6_03 => callee.cast::<ARCreateActiveLinkFn7603>()(
                        ctrl,
                        name,
                        link.order,
                        &connect,
                        &groups,
                        execute,
                        &link.control_field,
                        &link.focus_field,
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
                    Revision::V6_3 => callee.cast::<ARCreateActiveLinkFn63>()(
                        ctrl,
                        name,
                        link.order,
                        &connect,
                        &groups,
                        execute,
                        &link.control_field,
                        &link.focus_field,
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
                    _ => callee.cast::<ARCreateActiveLinkFn51>()(
                        ctrl,
                        name,
                        link.order,
                        &connect,
                        &groups,
                        execute,
                        &link.control_field,
                        &link.focus_field,
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

    /// Apply `patch` to active link `name`. A new query compiles against the
    /// patched connection, or the link's current one when that is unchanged.
    pub fn set_active_link(&self, name: &str, patch: &ActiveLinkPatch) -> Result<()> {
        let callee = self.callee(EntryPoint::SetActiveLink)?;
        let shape = callee.shape();
        let query_schema = match (&patch.query, &patch.connect) {
            (None, _) => String::new(),
            (Some(_), Some(connect)) => connect.primary().to_string(),
            (Some(_), None) => self.get_active_link(name)?.connect.primary().to_string(),
        };

        let mut enc = Encoder::new(self);
        let name = enc.name(name)?;
        let new_name = enc.opt_name(patch.new_name.as_deref())?;
        let connect = patch.connect.as_ref().map(|c| c.to_native(&mut enc)).transpose()?;
        let groups = patch.groups.clone().map(|g| enc.list(g));
        let query = enc.qualifier(&query_schema, patch.query.as_deref())?;
        let actions = patch
            .actions
            .as_deref()
            .map(|a| ActiveLinkAction::list_to_native(&mut enc, a))
            .transpose()?;
        let else_actions = patch
            .else_actions
            .as_deref()
            .map(|a| ActiveLinkAction::list_to_native(&mut enc, a))
            .transpose()?;
        let meta = MetaIn::encode(&mut enc, &patch.meta)?;
        let handler = HandlerIn::encode(&mut enc, patch.error_handler.as_ref())?;
        let execute = patch.execute.map(|e| e.bits());
        let enable = patch.enabled.map(u32::from);

        let connect = ref_or_null(connect.as_ref());
        let groups = ref_or_null(groups.as_ref());
        let order = ref_or_null(patch.order.as_ref());
        let execute = ref_or_null(execute.as_ref());
        let control = ref_or_null(patch.control_field.as_ref());
        let focus = ref_or_null(patch.focus_field.as_ref());
        let enable = ref_or_null(enable.as_ref());
        let actions = ref_or_null(actions.as_ref());
        let else_actions = ref_or_null(else_actions.as_ref());

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; inputs are null or live.
            unsafe {
                match shape {
                    Revision::V7_6_03 => callee.cast::<ARSetActiveLinkFn7603>()(
                        ctrl,
                        name,
                        new_name,
                        order,
                        connect,
                        groups,
                        execute,
                        control,
                        focus,
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
                    Revision::V6_3 => callee.cast::<ARSetActiveLinkFn63>()(
                        ctrl,
                        name,
                        new_name,
                        order,
                        connect,
                        groups,
                        execute,
                        control,
                        focus,
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
                    _ => callee.cast::<ARSetActiveLinkFn51>()(
                        ctrl,
                        name,
                        new_name,
                        order,
                        connect,
                        groups,
                        execute,
                        control,
                        focus,
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

    pub fn delete_active_link(&self, name: &str) -> Result<()> {
        let callee = self.callee(EntryPoint::DeleteActiveLink)?;
        let mut enc = Encoder::new(self);
        let name = enc.name(name)?;
        self.invoke(callee, |ctrl, status| {
            // SAFETY: every shape shares this signature.
            unsafe { callee.cast::<ARDeleteActiveLinkFn>()(ctrl, name, status) }
        })?;
        Ok(())
    }

    pub fn list_active_links(&self, filter: &WorkflowFilter) -> Result<Vec<String>> {
        let callee = self.callee(EntryPoint::GetListActiveLink)?;
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
                    Revision::V6_3 => callee.cast::<ARGetListActiveLinkFn63>()(
                        ctrl,
                        schema,
                        filter.changed_since,
                        props,
                        names.ptr(),
                        status,
                    ),
                    _ => callee.cast::<ARGetListActiveLinkFn51>()(
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

    pub fn get_multiple_active_links(&self, names: &[&str]) -> Result<Vec<BatchItem<ActiveLink>>> {
        let callee = self.callee(EntryPoint::GetMultipleActiveLinks)?;
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
        let orders = out.alloc::<ARUnsignedIntList>();
        let connects = out.alloc::<ARWorkflowConnectList>();
        let groups = out.alloc::<ARInternalIdListList>();
        let executes = out.alloc::<ARUnsignedIntList>();
        let controls = out.alloc::<ARInternalIdList>();
        let focuses = out.alloc::<ARInternalIdList>();
        let enables = out.alloc::<ARUnsignedIntList>();
        let queries = out.alloc::<ARQualifierList>();
        let actions = out.alloc::<ARActiveLinkActionListList>();
        let else_actions = out.alloc::<ARActiveLinkActionListList>();
        let handler_options = (shape >= Revision::V7_6_03).then(|| out.alloc::<ARUnsignedIntList>());
        let handler_names = (shape >= Revision::V7_6_03).then(|| out.alloc::<ARNameList>());
        let meta = MetaListsOut::new(&out, true);

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; every output is a live slot.
            unsafe {
                match shape {
                    Revision::V7_6_03 => callee.cast::<ARGetMultipleActiveLinksFn7603>()(
                        ctrl,
                        0,
                        &wanted,
                        exist.ptr(),
                        got.ptr(),
                        orders.ptr(),
                        connects.ptr(),
                        groups.ptr(),
                        executes.ptr(),
                        controls.ptr(),
                        focuses.ptr(),
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
                    _ => callee.cast::<ARGetMultipleActiveLinksFn63>()(
                        ctrl,
                        0,
                        &wanted,
                        exist.ptr(),
                        got.ptr(),
                        orders.ptr(),
                        connects.ptr(),
                        groups.ptr(),
                        executes.ptr(),
                        controls.ptr(),
                        focuses.ptr(),
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
            let orders = batch.column(orders.get())?;
            let connects = batch.column(connects.get())?;
            let groups = batch.column(groups.get())?;
            let executes = batch.column(executes.get())?;
            let controls = batch.column(controls.get())?;
            let focuses = batch.column(focuses.get())?;
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
                Ok(ActiveLink {
                    name: dec.name(got.at(i)?)?,
                    order: *orders.at(i)?,
                    connect: WorkflowConnect::from_native(connects.at(i)?, &dec)?,
                    groups: ids_from_native(groups.at(i)?)?,
                    execute: ExecuteMask::from_bits_retain(*executes.at(i)?),
                    control_field: *controls.at(i)?,
                    focus_field: *focuses.at(i)?,
                    enabled: *enables.at(i)? != 0,
                    query: dec.qualifier(queries.at(i)?)?,
                    actions: ActiveLinkAction::list_from_native(actions.at(i)?, &dec)?,
                    else_actions: ActiveLinkAction::list_from_native(else_actions.at(i)?, &dec)?,
                    meta: meta.at(i, &dec)?,
                    error_handler,
                })
            })
        }
    }
}
