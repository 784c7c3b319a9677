//! Owned records for every object kind and their native conversions.
//!
//! Decoding goes through a [`Decoder`] and encoding through an [`Encoder`];
//! both carry the session so strings use its codec and qualifiers can be
//! rendered or compiled by the library.

mod action;
mod common;
mod container;
mod entry;
mod field;
mod image;
mod menu;
mod schema;
mod vui;
mod workflow;

pub use action::*;
pub use common::*;
pub use container::*;
pub use entry::*;
pub use field::*;
pub use image::*;
pub use menu::*;
pub use schema::*;
pub use vui::*;
pub use workflow::*;

use std::os::raw::c_char;

use arapi_sys::*;

use crate::arena::Arena;
use crate::codec::Codec;
use crate::error::{Error, Result};
use crate::list::{from_native_list, to_native_list};
use crate::release::Outputs;
use crate::session::Session;
use crate::value::Value;

/// Turns native outputs into owned records.
pub(crate) struct Decoder<'s> {
    session: &'s Session,
}

impl<'s> Decoder<'s> {
    pub(crate) fn new(session: &'s Session) -> Self {
        Self { session }
    }

    pub(crate) fn codec(&self) -> &Codec {
        self.session.codec()
    }

    /// # Safety
    ///
    /// `ptr` must be null or NUL-terminated.
    pub(crate) unsafe fn text(&self, ptr: *const c_char) -> Result<String> {
        // SAFETY: forwarded.
        unsafe { self.codec().decode_text(ptr) }
    }

    /// # Safety
    ///
    /// As for [`text`](Self::text).
    pub(crate) unsafe fn opt_text(&self, ptr: *const c_char) -> Result<Option<String>> {
        // SAFETY: forwarded.
        unsafe { self.codec().decode_ptr(ptr) }
    }

    pub(crate) fn name(&self, buf: &[c_char]) -> Result<String> {
        self.codec().decode_name(buf)
    }

    /// Render a qualifier as query text; a null or empty one is `None`.
    ///
    /// # Safety
    ///
    /// `qual` must be null or a qualifier filled in by the library.
    pub(crate) unsafe fn qualifier(&self, qual: *const ARQualifierStruct) -> Result<Option<String>> {
        // SAFETY: per the caller.
        match unsafe { qual.as_ref() } {
            Some(q) => self.session.render_qualifier(q),
            None => Ok(None),
        }
    }

    /// # Safety
    ///
    /// `raw` must be a value filled in by the library.
    pub(crate) unsafe fn value(&self, raw: &ARValueStruct) -> Result<Value> {
        // SAFETY: forwarded.
        let mut value = unsafe { Value::decode(raw, self.codec()) }?;
        if let Value::Query(q) = &mut value {
            // SAFETY: a query value is only produced from a non-null member.
            q.qualifier = unsafe { self.qualifier((*raw.u.queryValue).qualifier) }?;
        }
        Ok(value)
    }

    /// # Safety
    ///
    /// `raw` must be a list filled in by the library.
    pub(crate) unsafe fn props(&self, raw: &ARPropList) -> Result<Vec<Property>> {
        // SAFETY: forwarded.
        unsafe { from_native_list(raw, |p| Property::from_native(p, self)) }
    }

    /// # Safety
    ///
    /// As for [`props`](Self::props).
    pub(crate) unsafe fn names(&self, raw: &ARNameList) -> Result<Vec<String>> {
        // SAFETY: forwarded.
        unsafe { from_native_list(raw, |n| self.name(n)) }
    }
}

/// Builds native inputs for one call. Everything it hands out stays valid
/// until the encoder drops.
pub(crate) struct Encoder<'s> {
    session: &'s Session,
    arena: Arena,
    // Qualifiers compiled by the library, released with the encoder.
    loaded: Outputs<'s>,
}

impl<'s> Encoder<'s> {
    pub(crate) fn new(session: &'s Session) -> Self {
        Self {
            session,
            arena: Arena::new(),
            loaded: Outputs::new(session.frees()),
        }
    }

    pub(crate) fn codec(&self) -> &Codec {
        self.session.codec()
    }

    pub(crate) fn str(&mut self, s: &str) -> Result<*mut c_char> {
        self.arena.str(self.session.codec(), s)
    }

    pub(crate) fn opt_str(&mut self, s: Option<&str>) -> Result<*mut c_char> {
        self.arena.opt_str(self.session.codec(), s)
    }

    /// An object name, checked against the native name size.
    pub(crate) fn name(&mut self, s: &str) -> Result<*mut c_char> {
        let bytes = self.codec().encode(s)?;
        if bytes.len() > AR_MAX_NAME_SIZE {
            return Err(Error::NameTooLong {
                name: s.to_string(),
                max: AR_MAX_NAME_SIZE,
            });
        }
        self.str(s)
    }

    pub(crate) fn opt_name(&mut self, s: Option<&str>) -> Result<*mut c_char> {
        match s {
            Some(s) => self.name(s),
            None => Ok(std::ptr::null_mut()),
        }
    }

    /// A fixed-size name buffer.
    pub(crate) fn name_buf<const N: usize>(&self, s: &str) -> Result<[c_char; N]> {
        self.codec().encode_name(s)
    }

    pub(crate) fn boxed<T: 'static>(&mut self, value: T) -> *mut T {
        self.arena.boxed(value)
    }

    pub(crate) fn list<T: 'static>(&mut self, items: Vec<T>) -> ARList<T> {
        self.arena.list(items)
    }

    pub(crate) fn opt_list<T: 'static>(&mut self, items: Option<Vec<T>>) -> *mut ARList<T> {
        self.arena.opt_list(items)
    }

    /// Encode each item with `convert` into an arena-owned list.
    pub(crate) fn map_list<T, R: 'static>(
        &mut self,
        items: &[T],
        mut convert: impl FnMut(&mut Self, &T) -> Result<R>,
    ) -> Result<ARList<R>> {
        let raw = items
            .iter()
            .map(|item| convert(self, item))
            .collect::<Result<Vec<R>>>()?;
        Ok(self.arena.list(raw))
    }

    /// Nullable variant of [`map_list`](Self::map_list).
    pub(crate) fn map_opt_list<T, R: 'static>(
        &mut self,
        items: Option<&[T]>,
        convert: impl FnMut(&mut Self, &T) -> Result<R>,
    ) -> Result<*mut ARList<R>> {
        match items {
            Some(items) => {
                let list = self.map_list(items, convert)?;
                Ok(self.arena.boxed(list))
            }
            None => Ok(std::ptr::null_mut()),
        }
    }

    /// A query value's qualifier is compiled against its schema.
    pub(crate) fn value(&mut self, value: &Value) -> Result<ARValueStruct> {
        let raw = value.encode_unqualified(&mut self.arena, self.session.codec())?;
        if let Value::Query(q) = value {
            let qual = self.qualifier(&q.schema, q.qualifier.as_deref())?;
            // SAFETY: the query member was just boxed in the arena.
            unsafe { (*raw.u.queryValue).qualifier = qual };
        }
        Ok(raw)
    }

    pub(crate) fn props(&mut self, props: &[Property]) -> Result<ARPropList> {
        self.map_list(props, |enc, p| p.to_native(enc))
    }

    pub(crate) fn opt_props(&mut self, props: Option<&[Property]>) -> Result<*mut ARPropList> {
        self.map_opt_list(props, |enc, p| p.to_native(enc))
    }

    pub(crate) fn names(&mut self, names: &[String]) -> Result<ARNameList> {
        let codec = *self.codec();
        to_native_list(&mut self.arena, names, |_, n| codec.encode_name(n))
    }

    pub(crate) fn opt_names(&mut self, names: Option<&[String]>) -> Result<*mut ARNameList> {
        match names {
            Some(names) => {
                let list = self.names(names)?;
                Ok(self.arena.boxed(list))
            }
            None => Ok(std::ptr::null_mut()),
        }
    }

    /// Compile query text against `schema`. `None` is a null qualifier.
    pub(crate) fn qualifier(&mut self, schema: &str, text: Option<&str>) -> Result<*mut ARQualifierStruct> {
        match text {
            Some(text) => {
                let schema = self.name(schema)?;
                let text = self.str(text)?;
                self.session.load_qualifier(&self.loaded, schema, text)
            }
            None => Ok(std::ptr::null_mut()),
        }
    }

    /// Like [`qualifier`](Self::qualifier), but with no text passes an empty
    /// (match-all) qualifier; some entry points reject a null one.
    pub(crate) fn qualifier_ptr_or_empty(
        &mut self,
        schema: &str,
        text: Option<&str>,
    ) -> Result<*mut ARQualifierStruct> {
        match text {
            Some(_) => self.qualifier(schema, text),
            None => Ok(self.boxed(ARQualifierStruct::zeroed())),
        }
    }
}
