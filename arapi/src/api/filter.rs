use arapi_sys::*;

use super::{HandlerIn, MetaIn, MetaListsOut, MetaOut, WorkflowFilter, decode_handler, owned_names, slot};
use crate::arena::ref_or_null;
use crate::batch::{Batch, BatchItem, Column};
use crate::error::Result;
use crate::ladder::{EntryPoint, Revision};
use crate::records::{Decoder, Encoder, Filter, FilterAction, FilterPatch, OperationSet, WorkflowConnect};
use crate::release::{Out, Outputs};
use crate::session::Session;

impl Session {
    pub fn get_filter(&self, name: &str) -> Result<Filter> {
        let callee = self.callee(EntryPoint::GetFilter)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let name_in = enc.name(name)?;

        let out = Outputs::new(self.frees());
        let order = out.alloc::<u32>();
        let connect = out.alloc::<ARWorkflowConnectStruct>();
        let operations = out.alloc::<u32>();
        let enable = out.alloc::<u32>();
        let query = out.alloc::<ARQualifierStruct>();
        let actions = out.alloc::<ARFilterActionList>();
        let else_actions = out.alloc::<ARFilterActionList>();
        let handler_options = (shape >= Revision::V7_1).then(|| out.alloc::<u32>());
        let handler_name = (shape >= Revision::V7_1).then(|| out.alloc::<ARNameType>());
        let meta = MetaOut::new(&out, shape >= Revision::V6_3);

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; every output is a live slot.
            unsafe {
                match shape {
                    Revision::V7_1 => callee.cast::<ARGetFilterFn71>()(
                        ctrl,
                        name_in,
                        order.ptr(),
                        connect.ptr(),
                        operations.ptr(),
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
                    Revision::V6_3 => callee.cast::<ARGetFilterFn63>()(
                        ctrl,
                        name_in,
                        order.ptr(),
                        connect.ptr(),
                        operations.ptr(),
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
                    _ => callee.cast::<ARGetFilterFn51>()(
                        ctrl,
                        name_in,
                        order.ptr(),
                        connect.ptr(),
                        operations.ptr(),
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
            Ok(Filter {
                name: name.to_string(),
                order: *order.get(),
                connect: WorkflowConnect::from_native(connect.get(), &dec)?,
                operations: OperationSet::from_bits_retain(*operations.get()),
                enabled: *enable.get() != 0,
                query: dec.qualifier(query.get())?,
                actions: FilterAction::list_from_native(actions.get(), &dec)?,
                else_actions: FilterAction::list_from_native(else_actions.get(), &dec)?,
                meta: meta.decode(&dec)?,
                error_handler,
            })
        }
    }

    pub fn create_filter(&self, filter: &Filter) -> Result<()> {
        let callee = self.callee(EntryPoint::CreateFilter)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let name = enc.name(&filter.name)?;
        let connect = filter.connect.to_native(&mut enc)?;
        let query = enc.qualifier_ptr_or_empty(filter.connect.primary(), filter.query.as_deref())?;
        let actions = FilterAction::list_to_native(&mut enc, &filter.actions)?;
        let else_actions = FilterAction::list_to_native(&mut enc, &filter.else_actions)?;
        let meta = MetaIn::from_meta(&mut enc, &filter.meta)?;
        let handler = HandlerIn::encode(&mut enc, filter.error_handler.as_ref())?;
        let operations = filter.operations.bits();
        let enable = filter.enabled as u32;

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; inputs live in `enc` and
            // on this frame.
            unsafe {
                match shape {
                    Revision::V7_1 => callee.cast::<ARCreateFilterFn71>()(
                        ctrl,
                        name,
                        filter.order,
                        &connect,
                        operations,
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
                    Revision::V6_3 => callee.cast::<ARCreateFilterFn63>()(
                        ctrl,
                        name,
                        filter.order,
                        &connect,
                        operations,
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
                    _ => callee.cast::<ARCreateFilterFn51>()(
                        ctrl,
                        name,
                        filter.order,
                        &connect,
                        operations,
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

    /// Apply `patch` to filter `name`. A new query compiles against the
    /// patched connection, or the filter's current one.
    pub fn set_filter(&self, name: &str, patch: &FilterPatch) -> Result<()> {
        let callee = self.callee(EntryPoint::SetFilter)?;
        let shape = callee.shape();
        let query_schema = match (&patch.query, &patch.connect) {
            (None, _) => String::new(),
            (Some(_), Some(connect)) => connect.primary().to_string(),
            (Some(_), None) => self.get_filter(name)?.connect.primary().to_string(),
        };

        let mut enc = Encoder::new(self);
        let name = enc.name(name)?;
        let new_name = enc.opt_name(patch.new_name.as_deref())?;
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
        let operations = patch.operations.map(|o| o.bits());
        let enable = patch.enabled.map(u32::from);

        let order = ref_or_null(patch.order.as_ref());
        let connect = ref_or_null(connect.as_ref());
        let operations = ref_or_null(operations.as_ref());
        let enable = ref_or_null(enable.as_ref());
        let actions = ref_or_null(actions.as_ref());
        let else_actions = ref_or_null(else_actions.as_ref());

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; inputs are null or live.
            unsafe {
                match shape {
                    Revision::V7_1 => callee.cast::<ARSetFilterFn71>()(
                        ctrl,
                        name,
                        new_name,
                        order,
                        connect,
                        operations,
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
                    Revision::V6_3 => callee.cast::<ARSetFilterFn63>()(
                        ctrl,
                        name,
                        new_name,
                        order,
                        connect,
                        operations,
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
                    _ => callee.cast::<ARSetFilterFn51>()(
                        ctrl,
                        name,
                        new_name,
                        order,
                        connect,
                        operations,
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

    pub fn delete_filter(&self, name: &str, option: u32) -> Result<()> {
        let callee = self.callee(EntryPoint::DeleteFilter)?;
        let mut enc = Encoder::new(self);
        let name = enc.name(name)?;
        self.invoke(callee, |ctrl, status| {
            // SAFETY: every shape shares this signature.
            unsafe { callee.cast::<ARDeleteFilterFn>()(ctrl, name, option, status) }
        })?;
        Ok(())
    }

    pub fn list_filters(&self, filter: &WorkflowFilter) -> Result<Vec<String>> {
        let callee = self.callee(EntryPoint::GetListFilter)?;
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
                    Revision::V6_3 => callee.cast::<ARGetListFilterFn63>()(
                        ctrl,
                        schema,
                        filter.changed_since,
                        props,
                        names.ptr(),
                        status,
                    ),
                    _ => callee.cast::<ARGetListFilterFn51>()(ctrl, schema, filter.changed_since, names.ptr(), status),
                }
            }
        })?;
        // SAFETY: filled in by the call.
        unsafe { Decoder::new(self).names(names.get()) }
    }

    pub fn get_multiple_filters(&self, names: &[&str]) -> Result<Vec<BatchItem<Filter>>> {
        let callee = self.callee(EntryPoint::GetMultipleFilters)?;
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
        let operations = out.alloc::<ARUnsignedIntList>();
        let enables = out.alloc::<ARUnsignedIntList>();
        let queries = out.alloc::<ARQualifierList>();
        let actions = out.alloc::<ARFilterActionListList>();
        let else_actions = out.alloc::<ARFilterActionListList>();
        let handler_options = (shape >= Revision::V7_1).then(|| out.alloc::<ARUnsignedIntList>());
        let handler_names = (shape >= Revision::V7_1).then(|| out.alloc::<ARNameList>());
        let meta = MetaListsOut::new(&out, true);

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; every output is a live slot.
            unsafe {
                match shape {
                    Revision::V7_1 => callee.cast::<ARGetMultipleFiltersFn71>()(
                        ctrl,
                        0,
                        &wanted,
                        exist.ptr(),
                        got.ptr(),
                        orders.ptr(),
                        connects.ptr(),
                        operations.ptr(),
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
                    _ => callee.cast::<ARGetMultipleFiltersFn63>()(
                        ctrl,
                        0,
                        &wanted,
                        exist.ptr(),
                        got.ptr(),
                        orders.ptr(),
                        connects.ptr(),
                        operations.ptr(),
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
            let operations = batch.column(operations.get())?;
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
                Ok(Filter {
                    name: dec.name(got.at(i)?)?,
                    order: *orders.at(i)?,
                    connect: WorkflowConnect::from_native(connects.at(i)?, &dec)?,
                    operations: OperationSet::from_bits_retain(*operations.at(i)?),
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
