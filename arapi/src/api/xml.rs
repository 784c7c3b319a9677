//! XML import and export.
//!
//! A document is parsed once into a [`ParsedXml`], which owns the native
//! parse state until dropped. Objects are then read out of it by name with
//! the `get_*_from_xml` calls. The `set_*_to_xml` calls render a record as
//! an XML fragment, optionally wrapped in the document header and footer.

use std::os::raw::c_char;
use std::path::PathBuf;
use std::sync::Arc;

use arapi_sys::*;
use serde::Serialize;

use super::{HandlerIn, MetaOut, decode_handler, slot};
use crate::binding::Binding;
use crate::error::{Error, Result};
use crate::ladder::{EntryPoint, Revision};
use crate::records::{
    ActiveLink, ActiveLinkAction, ArchiveInfo, AuditInfo, CharMenu, Container, ContainerOwner, Decoder, Encoder,
    EntryListField, Escalation, EscalationTime, ExecuteMask, Filter, FilterAction, Image, Index, MenuDefinition,
    ObjectMeta, OperationSet, Permission, Reference, Schema, SchemaKind, SortItem, WorkflowConnect,
    ids_from_native,
};
use crate::release::{Out, Outputs, Release};
use crate::session::Session;

/// Where an XML document comes from.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum XmlInput {
    Text(String),
    File(PathBuf),
    Url(String),
}

impl XmlInput {
    fn to_native(&self, enc: &mut Encoder<'_>) -> Result<ARXMLInputDoc> {
        let (kind, text) = match self {
            XmlInput::Text(text) => (AR_XML_DOC_CHAR_STR, text.as_str()),
            XmlInput::File(path) => (AR_XML_DOC_FILE_NAME, path.to_str().ok_or(Error::Encoding("UTF-8"))?),
            XmlInput::Url(url) => (AR_XML_DOC_URL, url.as_str()),
        };
        Ok(ARXMLInputDoc {
            docType: kind,
            u: ARXMLDocUnion { charBuffer: enc.str(text)? },
        })
    }
}

/// An object found in (or requested from) a document.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct StructItem {
    /// Native structure item type; parsed items carry the XML offset.
    pub kind: u32,
    pub name: String,
}

impl StructItem {
    pub fn new(kind: u32, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
        }
    }

    /// The item type with the XML offset removed.
    pub fn base_kind(&self) -> u32 {
        self.kind & !AR_STRUCT_XML_OFFSET
    }

    fn to_native(&self, enc: &Encoder<'_>) -> Result<ARStructItemStruct> {
        Ok(ARStructItemStruct {
            type_: self.kind,
            name: enc.name_buf(&self.name)?,
            selectedElements: ARNameList::empty(),
        })
    }

    fn from_native(raw: &ARStructItemStruct, dec: &Decoder<'_>) -> Result<Self> {
        Ok(Self {
            kind: raw.type_,
            name: dec.name(&raw.name)?,
        })
    }
}

/// A parsed document. The native parse state is released on drop.
pub struct ParsedXml {
    binding: Arc<Binding>,
    stream: Box<ARXMLParsedStream>,
    items: Vec<StructItem>,
    app_blocks: Vec<String>,
}

impl ParsedXml {
    /// Objects the document holds.
    pub fn items(&self) -> &[StructItem] {
        &self.items
    }

    /// Names of the application blocks in the document.
    pub fn app_blocks(&self) -> &[String] {
        &self.app_blocks
    }

    /// Names of the objects of one base item type.
    pub fn names_of(&self, kind: u32) -> impl Iterator<Item = &str> {
        self.items.iter().filter(move |i| i.base_kind() == kind).map(|i| i.name.as_str())
    }

    fn stream(&self) -> *const ARXMLParsedStream {
        &*self.stream
    }
}

impl Drop for ParsedXml {
    fn drop(&mut self) {
        // SAFETY: the stream is zeroed or was filled in by the parse call,
        // and is released exactly once.
        unsafe { self.stream.release(self.binding.frees()) }
    }
}

impl std::fmt::Debug for ParsedXml {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedXml")
            .field("items", &self.items)
            .field("app_blocks", &self.app_blocks)
            .finish()
    }
}

/// An object read from a document, with where it came from.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct FromXml<T> {
    pub object: T,
    /// Application block the object belongs to, if any.
    pub app_block: Option<String>,
    pub doc_version: u32,
}

/// Outputs every `Get*FromXML` call carries.
struct XmlOut<'o> {
    app_block: Out<'o, ARNameType>,
    doc_version: Out<'o, u32>,
}

impl<'o> XmlOut<'o> {
    fn new(out: &'o Outputs<'_>) -> Self {
        Self {
            app_block: out.alloc(),
            doc_version: out.alloc(),
        }
    }

    fn finish<T>(&self, object: T, dec: &Decoder<'_>) -> Result<FromXml<T>> {
        let block = dec.name(self.app_block.get())?;
        Ok(FromXml {
            object,
            app_block: (!block.is_empty()).then_some(block),
            doc_version: *self.doc_version.get(),
        })
    }
}

/// Common attributes as `Set*ToXML` takes them.
struct XmlMetaIn {
    help: *mut c_char,
    owner: *mut c_char,
    last_changed: *mut c_char,
    timestamp: ARTimestamp,
    diary: *mut c_char,
    props: *mut ARPropList,
}

impl XmlMetaIn {
    fn encode(enc: &mut Encoder<'_>, meta: &ObjectMeta) -> Result<Self> {
        Ok(Self {
            help: enc.opt_str(meta.help_text.as_deref())?,
            owner: enc.str(&meta.owner)?,
            last_changed: enc.str(&meta.last_changed)?,
            timestamp: meta.timestamp,
            diary: enc.opt_str(meta.change_diary.as_deref())?,
            props: enc.opt_props(meta.properties.as_deref())?,
        })
    }
}

/// A character-buffer output document.
fn output_doc<'o>(out: &'o Outputs<'_>) -> Out<'o, ARXMLOutputDoc> {
    let doc = out.alloc::<ARXMLOutputDoc>();
    // SAFETY: the slot is live and not yet handed out.
    unsafe { (*doc.ptr()).docType = AR_XML_DOC_CHAR_STR };
    doc
}

/// # Safety
///
/// `doc` must have been filled in by a successful call.
unsafe fn doc_text(doc: Out<'_, ARXMLOutputDoc>, dec: &Decoder<'_>) -> Result<String> {
    // SAFETY: per the caller; a character document uses `charBuffer`.
    unsafe { dec.text(doc.get().u.charBuffer) }
}

impl Session {
    /// Parse a document. `wanted` restricts parsing to the listed objects;
    /// `None` parses everything.
    pub fn parse_xml(&self, input: &XmlInput, wanted: Option<&[StructItem]>) -> Result<ParsedXml> {
        let callee = self.callee(EntryPoint::ParseXmlDocument)?;
        let mut enc = Encoder::new(self);
        let doc = input.to_native(&mut enc)?;
        let wanted = match wanted {
            Some(items) => {
                let list = enc.map_list(items, |enc, i| i.to_native(enc))?;
                enc.boxed(list)
            }
            None => std::ptr::null_mut(),
        };

        let mut parsed = ParsedXml {
            binding: Arc::clone(self.binding()),
            stream: Box::new(ARXMLParsedStream::zeroed()),
            items: Vec::new(),
            app_blocks: Vec::new(),
        };
        let stream: *mut ARXMLParsedStream = &mut *parsed.stream;

        let out = Outputs::new(self.frees());
        let items = out.alloc::<ARStructItemList>();
        let blocks = out.alloc::<ARNameList>();
        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape; the stream is boxed and owned by `parsed`.
            unsafe { callee.cast::<ARParseXMLDocumentFn>()(ctrl, &doc, wanted, stream, items.ptr(), blocks.ptr(), status) }
        })?;

        let dec = Decoder::new(self);
        // SAFETY: the outputs were filled in by a successful call.
        unsafe {
            parsed.items = crate::list::from_native_list(items.get(), |i| StructItem::from_native(i, &dec))?;
            parsed.app_blocks = dec.names(blocks.get())?;
        }
        log::debug!("parsed XML document: {} objects", parsed.items.len());
        Ok(parsed)
    }

    pub fn get_schema_from_xml(&self, parsed: &ParsedXml, name: &str) -> Result<FromXml<Schema>> {
        let callee = self.callee(EntryPoint::GetSchemaFromXml)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let name_in = enc.name(name)?;

        let out = Outputs::new(self.frees());
        let common = XmlOut::new(&out);
        let kind = out.alloc::<ARCompoundSchema>();
        let perms = out.alloc::<ARPermissionList>();
        let admins = out.alloc::<ARInternalIdList>();
        let fields = out.alloc::<AREntryListFieldList>();
        let sort = out.alloc::<ARSortList>();
        let indexes = out.alloc::<ARIndexList>();
        let archive = out.alloc::<ARArchiveInfoStruct>();
        let audit = (shape >= Revision::V7_1).then(|| out.alloc::<ARAuditInfoStruct>());
        let vui = out.alloc::<ARNameType>();
        let meta = MetaOut::new(&out, true);

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; every output is a live slot.
            unsafe {
                match shape {
                    Revision::V7_1 => callee.cast::<ARGetSchemaFromXMLFn71>()(
                        ctrl,
                        parsed.stream(),
                        name_in,
                        common.app_block.ptr(),
                        kind.ptr(),
                        perms.ptr(),
                        admins.ptr(),
                        fields.ptr(),
                        sort.ptr(),
                        indexes.ptr(),
                        archive.ptr(),
                        slot(audit),
                        vui.ptr(),
                        meta.help(),
                        meta.timestamp(),
                        meta.owner(),
                        meta.last_changed(),
                        meta.diary(),
                        meta.props(),
                        common.doc_version.ptr(),
                        status,
                    ),
                    _ => callee.cast::<ARGetSchemaFromXMLFn63>()(
                        ctrl,
                        parsed.stream(),
                        name_in,
                        common.app_block.ptr(),
                        kind.ptr(),
                        perms.ptr(),
                        admins.ptr(),
                        fields.ptr(),
                        sort.ptr(),
                        indexes.ptr(),
                        archive.ptr(),
                        vui.ptr(),
                        meta.help(),
                        meta.timestamp(),
                        meta.owner(),
                        meta.last_changed(),
                        meta.diary(),
                        meta.props(),
                        common.doc_version.ptr(),
                        status,
                    ),
                }
            }
        })?;

        let dec = Decoder::new(self);
        // SAFETY: the outputs were filled in by a successful call.
        let schema = unsafe {
            Schema {
                name: name.to_string(),
                kind: SchemaKind::from_native(kind.get(), &dec)?,
                permissions: Permission::list_from_native(perms.get())?,
                admin_groups: ids_from_native(admins.get())?,
                list_fields: EntryListField::list_from_native(fields.get(), &dec)?,
                sort: SortItem::list_from_native(sort.get())?,
                indexes: Index::list_from_native(indexes.get())?,
                archive: Some(ArchiveInfo::from_native(archive.get(), &dec)?),
                audit: audit.map(|a| AuditInfo::from_native(a.get(), &dec)).transpose()?,
                default_vui: dec.name(vui.get())?,
                meta: meta.decode(&dec)?,
            }
        };
        common.finish(schema, &dec)
    }

    /// Render a schema as XML; `header_footer` wraps it into a complete
    /// document.
    pub fn set_schema_to_xml(&self, schema: &Schema, header_footer: bool) -> Result<String> {
        let callee = self.callee(EntryPoint::SetSchemaToXml)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let name = enc.name(&schema.name)?;
        let kind = schema.kind.to_native(&mut enc)?;
        let perms = Permission::list_to_native(&mut enc, &schema.permissions);
        let admins = enc.list(schema.admin_groups.clone());
        let fields = EntryListField::list_to_native(&mut enc, &schema.list_fields)?;
        let sort = SortItem::list_to_native(&mut enc, &schema.sort);
        let indexes = Index::list_to_native(&mut enc, &schema.indexes);
        let archive = schema
            .archive
            .as_ref()
            .map(|a| a.to_native(&schema.name, &mut enc))
            .transpose()?
            .unwrap_or_else(ARArchiveInfoStruct::zeroed);
        let audit = schema
            .audit
            .as_ref()
            .map(|a| a.to_native(&schema.name, &mut enc))
            .transpose()?
            .unwrap_or_else(ARAuditInfoStruct::zeroed);
        let vui = enc.str(&schema.default_vui)?;
        let meta = XmlMetaIn::encode(&mut enc, &schema.meta)?;
        let header = header_footer as ARBoolean;

        let out = Outputs::new(self.frees());
        let doc = output_doc(&out);
        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; inputs live in `enc` and
            // on this frame.
            unsafe {
                match shape {
                    Revision::V7_1 => callee.cast::<ARSetSchemaToXMLFn71>()(
                        ctrl,
                        doc.ptr(),
                        header,
                        name,
                        &kind,
                        &perms,
                        &admins,
                        &fields,
                        &sort,
                        &indexes,
                        &archive,
                        &audit,
                        vui,
                        meta.help,
                        meta.owner,
                        meta.last_changed,
                        &meta.timestamp,
                        meta.diary,
                        meta.props,
                        status,
                    ),
                    _ => callee.cast::<ARSetSchemaToXMLFn63>()(
                        ctrl,
                        doc.ptr(),
                        header,
                        name,
                        &kind,
                        &perms,
                        &admins,
                        &fields,
                        &sort,
                        &indexes,
                        &archive,
                        vui,
                        meta.help,
                        meta.owner,
                        meta.last_changed,
                        &meta.timestamp,
                        meta.diary,
                        meta.props,
                        status,
                    ),
                }
            }
        })?;
        // SAFETY: filled in by the call.
        unsafe { doc_text(doc, &Decoder::new(self)) }
    }

    pub fn get_active_link_from_xml(&self, parsed: &ParsedXml, name: &str) -> Result<FromXml<ActiveLink>> {
        let callee = self.callee(EntryPoint::GetActiveLinkFromXml)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let name_in = enc.name(name)?;

        let out = Outputs::new(self.frees());
        let common = XmlOut::new(&out);
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
        let meta = MetaOut::new(&out, true);

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; every output is a live slot.
            unsafe {
                match shape {
                    Revision::V7_6_03 => callee.cast::<ARGetActiveLinkFromXMLFn7603>()(
                        ctrl,
                        parsed.stream(),
                        name_in,
                        common.app_block.ptr(),
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
                        common.doc_version.ptr(),
                        status,
                    ),
                    _ => callee.cast::<ARGetActiveLinkFromXMLFn63>()(
                        ctrl,
                        parsed.stream(),
                        name_in,
                        common.app_block.ptr(),
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
                        common.doc_version.ptr(),
                        status,
                    ),
                }
            }
        })?;

        let dec = Decoder::new(self);
        // SAFETY: the outputs were filled in by a successful call.
        let link = unsafe {
            let error_handler = match (handler_options, handler_name) {
                (Some(o), Some(n)) => decode_handler(*o.get(), n.get(), &dec)?,
                _ => None,
            };
            ActiveLink {
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
            }
        };
        common.finish(link, &dec)
    }

    pub fn set_active_link_to_xml(&self, link: &ActiveLink, header_footer: bool) -> Result<String> {
        let callee = self.callee(EntryPoint::SetActiveLinkToXml)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let name = enc.name(&link.name)?;
        let connect = link.connect.to_native(&mut enc)?;
        let groups = enc.list(link.groups.clone());
        let query = enc.qualifier_ptr_or_empty(link.connect.primary(), link.query.as_deref())?;
        let actions = ActiveLinkAction::list_to_native(&mut enc, &link.actions)?;
        let else_actions = ActiveLinkAction::list_to_native(&mut enc, &link.else_actions)?;
        let meta = XmlMetaIn::encode(&mut enc, &link.meta)?;
        let handler = HandlerIn::encode(&mut enc, link.error_handler.as_ref())?;
        let execute = link.execute.bits();
        let enable = link.enabled as u32;
        let header = header_footer as ARBoolean;

        let out = Outputs::new(self.frees());
        let doc = output_doc(&out);
        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; inputs live in `enc` and
            // on this frame.
            unsafe {
                match shape {
                    Revision::V7_6_03 => callee.cast::<ARSetActiveLinkToXMLFn7603>()(
                        ctrl,
                        doc.ptr(),
                        header,
                        name,
                        &link.order,
                        &connect,
                        &groups,
                        &execute,
                        &link.control_field,
                        &link.focus_field,
                        &enable,
                        query,
                        &actions,
                        &else_actions,
                        meta.help,
                        meta.owner,
                        meta.last_changed,
                        &meta.timestamp,
                        meta.diary,
                        meta.props,
                        &handler.options,
                        handler.name,
                        status,
                    ),
                    _ => callee.cast::<ARSetActiveLinkToXMLFn63>()(
                        ctrl,
                        doc.ptr(),
                        header,
                        name,
                        &link.order,
                        &connect,
                        &groups,
                        &execute,
                        &link.control_field,
                        &link.focus_field,
                        &enable,
                        query,
                        &actions,
                        &else_actions,
                        meta.help,
                        meta.owner,
                        meta.last_changed,
                        &meta.timestamp,
                        meta.diary,
                        meta.props,
                        status,
                    ),
                }
            }
        })?;
        // SAFETY: filled in by the call.
        unsafe { doc_text(doc, &Decoder::new(self)) }
    }

    pub fn get_filter_from_xml(&self, parsed: &ParsedXml, name: &str) -> Result<FromXml<Filter>> {
        let callee = self.callee(EntryPoint::GetFilterFromXml)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let name_in = enc.name(name)?;

        let out = Outputs::new(self.frees());
        let common = XmlOut::new(&out);
        let order = out.alloc::<u32>();
        let connect = out.alloc::<ARWorkflowConnectStruct>();
        let operations = out.alloc::<u32>();
        let enable = out.alloc::<u32>();
        let query = out.alloc::<ARQualifierStruct>();
        let actions = out.alloc::<ARFilterActionList>();
        let else_actions = out.alloc::<ARFilterActionList>();
        let handler_options = (shape >= Revision::V7_1).then(|| out.alloc::<u32>());
        let handler_name = (shape >= Revision::V7_1).then(|| out.alloc::<ARNameType>());
        let meta = MetaOut::new(&out, true);

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; every output is a live slot.
            unsafe {
                match shape {
                    Revision::V7_1 => callee.cast::<ARGetFilterFromXMLFn71>()(
                        ctrl,
                        parsed.stream(),
                        name_in,
                        common.app_block.ptr(),
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
                        common.doc_version.ptr(),
                        status,
                    ),
                    _ => callee.cast::<ARGetFilterFromXMLFn63>()(
                        ctrl,
                        parsed.stream(),
                        name_in,
                        common.app_block.ptr(),
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
                        common.doc_version.ptr(),
                        status,
                    ),
                }
            }
        })?;

        let dec = Decoder::new(self);
        // SAFETY: the outputs were filled in by a successful call.
        let filter = unsafe {
            let error_handler = match (handler_options, handler_name) {
                (Some(o), Some(n)) => decode_handler(*o.get(), n.get(), &dec)?,
                _ => None,
            };
            Filter {
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
            }
        };
        common.finish(filter, &dec)
    }

    pub fn set_filter_to_xml(&self, filter: &Filter, header_footer: bool) -> Result<String> {
        let callee = self.callee(EntryPoint::SetFilterToXml)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let name = enc.name(&filter.name)?;
        let connect = filter.connect.to_native(&mut enc)?;
        let query = enc.qualifier_ptr_or_empty(filter.connect.primary(), filter.query.as_deref())?;
        let actions = FilterAction::list_to_native(&mut enc, &filter.actions)?;
        let else_actions = FilterAction::list_to_native(&mut enc, &filter.else_actions)?;
        let meta = XmlMetaIn::encode(&mut enc, &filter.meta)?;
        let handler = HandlerIn::encode(&mut enc, filter.error_handler.as_ref())?;
        let operations = filter.operations.bits();
        let enable = filter.enabled as u32;
        let header = header_footer as ARBoolean;

        let out = Outputs::new(self.frees());
        let doc = output_doc(&out);
        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; inputs live in `enc` and
            // on this frame.
            unsafe {
                match shape {
                    Revision::V7_1 => callee.cast::<ARSetFilterToXMLFn71>()(
                        ctrl,
                        doc.ptr(),
                        header,
                        name,
                        &filter.order,
                        &connect,
                        &operations,
                        &enable,
                        query,
                        &actions,
                        &else_actions,
                        meta.help,
                        meta.owner,
                        meta.last_changed,
                        &meta.timestamp,
                        meta.diary,
                        meta.props,
                        &handler.options,
                        handler.name,
                        status,
                    ),
                    _ => callee.cast::<ARSetFilterToXMLFn63>()(
                        ctrl,
                        doc.ptr(),
                        header,
                        name,
                        &filter.order,
                        &connect,
                        &operations,
                        &enable,
                        query,
                        &actions,
                        &else_actions,
                        meta.help,
                        meta.owner,
                        meta.last_changed,
                        &meta.timestamp,
                        meta.diary,
                        meta.props,
                        status,
                    ),
                }
            }
        })?;
        // SAFETY: filled in by the call.
        unsafe { doc_text(doc, &Decoder::new(self)) }
    }

    pub fn get_escalation_from_xml(&self, parsed: &ParsedXml, name: &str) -> Result<FromXml<Escalation>> {
        let callee = self.callee(EntryPoint::GetEscalationFromXml)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let name_in = enc.name(name)?;

        let out = Outputs::new(self.frees());
        let common = XmlOut::new(&out);
        let time = out.alloc::<AREscalationTmStruct>();
        let connect = out.alloc::<ARWorkflowConnectStruct>();
        let enable = out.alloc::<u32>();
        let query = out.alloc::<ARQualifierStruct>();
        let actions = out.alloc::<ARFilterActionList>();
        let else_actions = out.alloc::<ARFilterActionList>();
        let handler_options = (shape >= Revision::V8_1).then(|| out.alloc::<u32>());
        let handler_name = (shape >= Revision::V8_1).then(|| out.alloc::<ARNameType>());
        let meta = MetaOut::new(&out, true);

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; every output is a live slot.
            unsafe {
                match shape {
                    Revision::V8_1 => callee.cast::<ARGetEscalationFromXMLFn81>()(
                        ctrl,
                        parsed.stream(),
                        name_in,
                        common.app_block.ptr(),
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
                        common.doc_version.ptr(),
                        status,
                    ),
                    _ => callee.cast::<ARGetEscalationFromXMLFn63>()(
                        ctrl,
                        parsed.stream(),
                        name_in,
                        common.app_block.ptr(),
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
                        common.doc_version.ptr(),
                        status,
                    ),
                }
            }
        })?;

        let dec = Decoder::new(self);
        // SAFETY: the outputs were filled in by a successful call.
        let escalation = unsafe {
            let error_handler = match (handler_options, handler_name) {
                (Some(o), Some(n)) => decode_handler(*o.get(), n.get(), &dec)?,
                _ => None,
            };
            Escalation {
                name: name.to_string(),
                time: EscalationTime::from_native(time.get()),
                connect: WorkflowConnect::from_native(connect.get(), &dec)?,
                enabled: *enable.get() != 0,
                query: dec.qualifier(query.get())?,
                actions: FilterAction::list_from_native(actions.get(), &dec)?,
                else_actions: FilterAction::list_from_native(else_actions.get(), &dec)?,
                meta: meta.decode(&dec)?,
                error_handler,
            }
        };
        common.finish(escalation, &dec)
    }

    pub fn set_escalation_to_xml(&self, escalation: &Escalation, header_footer: bool) -> Result<String> {
        let callee = self.callee(EntryPoint::SetEscalationToXml)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let name = enc.name(&escalation.name)?;
        let time = escalation.time.to_native();
        let connect = escalation.connect.to_native(&mut enc)?;
        let query = enc.qualifier_ptr_or_empty(escalation.connect.primary(), escalation.query.as_deref())?;
        let actions = FilterAction::list_to_native(&mut enc, &escalation.actions)?;
        let else_actions = FilterAction::list_to_native(&mut enc, &escalation.else_actions)?;
        let meta = XmlMetaIn::encode(&mut enc, &escalation.meta)?;
        let handler = HandlerIn::encode(&mut enc, escalation.error_handler.as_ref())?;
        let enable = escalation.enabled as u32;
        let header = header_footer as ARBoolean;

        let out = Outputs::new(self.frees());
        let doc = output_doc(&out);
        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; inputs live in `enc` and
            // on this frame.
            unsafe {
                match shape {
                    Revision::V8_1 => callee.cast::<ARSetEscalationToXMLFn81>()(
                        ctrl,
                        doc.ptr(),
                        header,
                        name,
                        &time,
                        &connect,
                        &enable,
                        query,
                        &actions,
                        &else_actions,
                        meta.help,
                        meta.owner,
                        meta.last_changed,
                        &meta.timestamp,
                        meta.diary,
                        meta.props,
                        &handler.options,
                        handler.name,
                        status,
                    ),
                    _ => callee.cast::<ARSetEscalationToXMLFn63>()(
                        ctrl,
                        doc.ptr(),
                        header,
                        name,
                        &time,
                        &connect,
                        &enable,
                        query,
                        &actions,
                        &else_actions,
                        meta.help,
                        meta.owner,
                        meta.last_changed,
                        &meta.timestamp,
                        meta.diary,
                        meta.props,
                        status,
                    ),
                }
            }
        })?;
        // SAFETY: filled in by the call.
        unsafe { doc_text(doc, &Decoder::new(self)) }
    }

    pub fn get_container_from_xml(&self, parsed: &ParsedXml, name: &str) -> Result<FromXml<Container>> {
        let callee = self.callee(EntryPoint::GetContainerFromXml)?;
        let mut enc = Encoder::new(self);
        let name_in = enc.name(name)?;

        let out = Outputs::new(self.frees());
        let common = XmlOut::new(&out);
        let perms = out.alloc::<ARPermissionList>();
        let admins = out.alloc::<ARInternalIdList>();
        let owners = out.alloc::<ARContainerOwnerObjList>();
        let label = out.alloc::<*mut c_char>();
        let description = out.alloc::<*mut c_char>();
        let kind = out.alloc::<u32>();
        let references = out.alloc::<ARReferenceList>();
        let meta = MetaOut::new(&out, true);

        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape; every output is a live slot.
            unsafe {
                callee.cast::<ARGetContainerFromXMLFn63>()(
                    ctrl,
                    parsed.stream(),
                    name_in,
                    common.app_block.ptr(),
                    perms.ptr(),
                    admins.ptr(),
                    owners.ptr(),
                    label.ptr(),
                    description.ptr(),
                    kind.ptr(),
                    references.ptr(),
                    meta.help(),
                    meta.owner(),
                    meta.timestamp(),
                    meta.last_changed(),
                    meta.diary(),
                    meta.props(),
                    common.doc_version.ptr(),
                    status,
                )
            }
        })?;

        let dec = Decoder::new(self);
        // SAFETY: the outputs were filled in by a successful call.
        let container = unsafe {
            Container {
                name: name.to_string(),
                kind: *kind.get(),
                label: dec.opt_text(*label.get())?,
                description: dec.opt_text(*description.get())?,
                permissions: Permission::list_from_native(perms.get())?,
                admin_groups: ids_from_native(admins.get())?,
                owners: ContainerOwner::list_from_native(owners.get(), &dec)?,
                references: Reference::list_from_native(references.get(), &dec)?,
                meta: meta.decode(&dec)?,
            }
        };
        common.finish(container, &dec)
    }

    pub fn set_container_to_xml(&self, container: &Container, header_footer: bool) -> Result<String> {
        let callee = self.callee(EntryPoint::SetContainerToXml)?;
        let mut enc = Encoder::new(self);
        let name = enc.name(&container.name)?;
        let perms = Permission::list_to_native(&mut enc, &container.permissions);
        let admins = enc.list(container.admin_groups.clone());
        let owners = ContainerOwner::list_to_native(&mut enc, &container.owners)?;
        let label = enc.opt_str(container.label.as_deref())?;
        let description = enc.opt_str(container.description.as_deref())?;
        let references = Reference::list_to_native(&mut enc, &container.references)?;
        let meta = XmlMetaIn::encode(&mut enc, &container.meta)?;
        let header = header_footer as ARBoolean;

        let out = Outputs::new(self.frees());
        let doc = output_doc(&out);
        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape; inputs live in `enc` and on this frame.
            unsafe {
                callee.cast::<ARSetContainerToXMLFn63>()(
                    ctrl,
                    doc.ptr(),
                    header,
                    name,
                    &perms,
                    &admins,
                    &owners,
                    label,
                    description,
                    &container.kind,
                    &references,
                    meta.help,
                    meta.owner,
                    meta.last_changed,
                    &meta.timestamp,
                    meta.diary,
                    meta.props,
                    status,
                )
            }
        })?;
        // SAFETY: filled in by the call.
        unsafe { doc_text(doc, &Decoder::new(self)) }
    }

    pub fn get_menu_from_xml(&self, parsed: &ParsedXml, name: &str) -> Result<FromXml<CharMenu>> {
        let callee = self.callee(EntryPoint::GetMenuFromXml)?;
        let mut enc = Encoder::new(self);
        let name_in = enc.name(name)?;

        let out = Outputs::new(self.frees());
        let common = XmlOut::new(&out);
        let refresh = out.alloc::<u32>();
        let definition = out.alloc::<ARCharMenuStruct>();
        let meta = MetaOut::new(&out, true);

        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape; every output is a live slot.
            unsafe {
                callee.cast::<ARGetMenuFromXMLFn63>()(
                    ctrl,
                    parsed.stream(),
                    name_in,
                    common.app_block.ptr(),
                    refresh.ptr(),
                    definition.ptr(),
                    meta.help(),
                    meta.timestamp(),
                    meta.owner(),
                    meta.last_changed(),
                    meta.diary(),
                    meta.props(),
                    common.doc_version.ptr(),
                    status,
                )
            }
        })?;

        let dec = Decoder::new(self);
        // SAFETY: the outputs were filled in by a successful call.
        let menu = unsafe {
            CharMenu {
                name: name.to_string(),
                refresh: *refresh.get(),
                definition: MenuDefinition::from_native(definition.get(), &dec)?,
                meta: meta.decode(&dec)?,
            }
        };
        common.finish(menu, &dec)
    }

    pub fn set_menu_to_xml(&self, menu: &CharMenu, header_footer: bool) -> Result<String> {
        let callee = self.callee(EntryPoint::SetMenuToXml)?;
        let mut enc = Encoder::new(self);
        let name = enc.name(&menu.name)?;
        let definition = menu.definition.to_native(&mut enc)?;
        let meta = XmlMetaIn::encode(&mut enc, &menu.meta)?;
        let header = header_footer as ARBoolean;

        let out = Outputs::new(self.frees());
        let doc = output_doc(&out);
        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape; inputs live in `enc` and on this frame.
            unsafe {
                callee.cast::<ARSetMenuToXMLFn63>()(
                    ctrl,
                    doc.ptr(),
                    header,
                    name,
                    &menu.refresh,
                    &definition,
                    meta.help,
                    meta.owner,
                    meta.last_changed,
                    &meta.timestamp,
                    meta.diary,
                    meta.props,
                    status,
                )
            }
        })?;
        // SAFETY: filled in by the call.
        unsafe { doc_text(doc, &Decoder::new(self)) }
    }

    pub fn get_image_from_xml(&self, parsed: &ParsedXml, name: &str) -> Result<FromXml<Image>> {
        let callee = self.callee(EntryPoint::GetImageFromXml)?;
        let mut enc = Encoder::new(self);
        let name_in = enc.name(name)?;

        let out = Outputs::new(self.frees());
        let common = XmlOut::new(&out);
        let kind = out.alloc::<*mut c_char>();
        let description = out.alloc::<*mut c_char>();
        let checksum = out.alloc::<*mut c_char>();
        let data = out.alloc::<ARImageDataStruct>();
        let meta = MetaOut::new(&out, true);

        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape; every output is a live slot.
            unsafe {
                callee.cast::<ARGetImageFromXMLFn75>()(
                    ctrl,
                    parsed.stream(),
                    name_in,
                    common.app_block.ptr(),
                    kind.ptr(),
                    meta.timestamp(),
                    description.ptr(),
                    meta.help(),
                    meta.owner(),
                    meta.diary(),
                    meta.last_changed(),
                    meta.props(),
                    checksum.ptr(),
                    data.ptr(),
                    common.doc_version.ptr(),
                    status,
                )
            }
        })?;

        let dec = Decoder::new(self);
        // SAFETY: the outputs were filled in by a successful call.
        let image = unsafe {
            Image {
                name: name.to_string(),
                kind: dec.text(*kind.get())?,
                description: dec.opt_text(*description.get())?,
                checksum: dec.opt_text(*checksum.get())?,
                data: crate::list::copy_list(data.get())?,
                meta: meta.decode(&dec)?,
            }
        };
        common.finish(image, &dec)
    }

    pub fn set_image_to_xml(&self, image: &Image, header_footer: bool) -> Result<String> {
        let callee = self.callee(EntryPoint::SetImageToXml)?;
        let mut enc = Encoder::new(self);
        let name = enc.name(&image.name)?;
        let kind = enc.str(&image.kind)?;
        let description = enc.opt_str(image.description.as_deref())?;
        let checksum = enc.opt_str(image.checksum.as_deref())?;
        let data = enc.list(image.data.clone());
        let meta = XmlMetaIn::encode(&mut enc, &image.meta)?;
        let header = header_footer as ARBoolean;

        let out = Outputs::new(self.frees());
        let doc = output_doc(&out);
        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape; inputs live in `enc` and on this frame.
            unsafe {
                callee.cast::<ARSetImageToXMLFn75>()(
                    ctrl,
                    doc.ptr(),
                    header,
                    name,
                    kind,
                    description,
                    &meta.timestamp,
                    meta.help,
                    meta.owner,
                    meta.diary,
                    meta.last_changed,
                    meta.props,
                    checksum,
                    &data,
                    status,
                )
            }
        })?;
        // SAFETY: filled in by the call.
        unsafe { doc_text(doc, &Decoder::new(self)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_kind_strips_the_xml_offset() {
        let item = StructItem::new(AR_STRUCT_XML_OFFSET | AR_STRUCT_ITEM_FILTER, "F1");
        assert_eq!(item.base_kind(), AR_STRUCT_ITEM_FILTER);
        assert_eq!(StructItem::new(AR_STRUCT_ITEM_SCHEMA, "S").base_kind(), AR_STRUCT_ITEM_SCHEMA);
    }
}
